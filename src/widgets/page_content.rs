use super::super::prelude::*;

use std::cell::RefCell;

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate, glib::Properties)]
    #[template(resource = "/io/github/menubrowser/page_content.ui")]
    #[properties(wrapper_type = super::PageContent)]
    pub struct PageContent {
        #[template_child(id = "page-content-scrolled-window")]
        pub scrolled_window: TemplateChild<gtk::ScrolledWindow>,
        #[template_child(id = "page-content-title")]
        pub title_label: TemplateChild<gtk::Label>,
        #[template_child(id = "page-content-subtitle")]
        pub subtitle_label: TemplateChild<gtk::Label>,

        #[property(get, set)]
        pub title: RefCell<String>,
        #[property(get, set)]
        pub subtitle: RefCell<String>,
        #[property(get, set)]
        pub content: RefCell<Option<gtk::Widget>>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for PageContent {
        const NAME: &'static str = "PageContent";
        type Type = super::PageContent;
        type ParentType = adw::Bin;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    #[glib::derived_properties]
    impl ObjectImpl for PageContent {
        fn constructed(&self) {
            self.parent_constructed();
            self.obj().setup_label_visibility();
        }
    }

    impl WidgetImpl for PageContent {}
    impl BinImpl for PageContent {}
}

glib::wrapper! {
    pub struct PageContent(ObjectSubclass<imp::PageContent>)
        @extends adw::Bin, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl PageContent {

    fn setup_label_visibility(&self) {
        self.connect_notify_local(Some("title"), |this, _| {
            this.update_label_visibility();
        });

        self.connect_notify_local(Some("subtitle"), |this, _| {
            this.update_label_visibility();
        });

        self.update_label_visibility();
    }

    fn update_label_visibility(&self) {
        let imp = self.imp();
        imp.title_label.set_visible(!self.title().is_empty());
        imp.subtitle_label.set_visible(!self.subtitle().is_empty());
    }

    pub fn scroll_to_top(&self) {
        let adjustment = self.imp().scrolled_window.vadjustment();
        adjustment.set_value(adjustment.lower());
    }

}
