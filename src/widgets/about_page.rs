use super::super::prelude::*;

use std::cell::RefCell;

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate, glib::Properties)]
    #[template(resource = "/io/github/menubrowser/about_page.ui")]
    #[properties(wrapper_type = super::AboutPage)]
    pub struct AboutPage {
        #[property(get, set)]
        pub heading: RefCell<String>,
        #[property(get, set)]
        pub body: RefCell<String>,
        #[property(get, set)]
        pub footer: RefCell<String>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for AboutPage {
        const NAME: &'static str = "AboutPage";
        type Type = super::AboutPage;
        type ParentType = adw::Bin;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    #[glib::derived_properties]
    impl ObjectImpl for AboutPage {}
    impl WidgetImpl for AboutPage {}
    impl BinImpl for AboutPage {}
}

glib::wrapper! {
    pub struct AboutPage(ObjectSubclass<imp::AboutPage>)
        @extends adw::Bin, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}
