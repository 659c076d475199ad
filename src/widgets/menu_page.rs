use super::super::prelude::*;
use super::page_content::PageContent;
use super::product_row::ProductRow;
use crate::images::ImageResolver;

use menu_core::{CategoryLabel, ProductSection};
use std::cell::RefCell;
use std::sync::OnceLock;
use glib::subclass::Signal;

const CATEGORY_SELECTED_SIGNAL: &str = "category-selected";

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/io/github/menubrowser/menu_page.ui")]
    pub struct MenuPage {
        #[template_child(id = "menu-page-content")]
        pub content: TemplateChild<PageContent>,
        #[template_child(id = "menu-page-category-box")]
        pub category_box: TemplateChild<gtk::Box>,
        #[template_child(id = "menu-page-notice")]
        pub notice_label: TemplateChild<gtk::Label>,
        #[template_child(id = "menu-page-product-list-box")]
        pub product_list_box: TemplateChild<gtk::ListBox>,

        pub tabs: RefCell<Vec<(String, gtk::ToggleButton)>>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for MenuPage {
        const NAME: &'static str = "MenuPage";
        type Type = super::MenuPage;
        type ParentType = adw::Bin;

        fn class_init(class: &mut Self::Class) {
            PageContent::ensure_type();
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for MenuPage {
        fn signals() -> &'static [Signal] {
            static SIGNALS: OnceLock<[Signal; 1]> = OnceLock::new();
            SIGNALS.get_or_init(|| {
                [
                    Signal::builder(CATEGORY_SELECTED_SIGNAL)
                        .param_types([String::static_type()])
                        .build()
                ]
            })
        }
    }

    impl WidgetImpl for MenuPage {}
    impl BinImpl for MenuPage {}
}

glib::wrapper! {
    pub struct MenuPage(ObjectSubclass<imp::MenuPage>)
        @extends adw::Bin, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl MenuPage {

    pub fn set_header(&self, name: &str, description: &str) {
        let content = &self.imp().content;
        content.set_title(name);
        content.set_subtitle(description);
    }

    pub fn set_categories(&self, labels: &[CategoryLabel]) {
        let imp = self.imp();

        let unchanged = imp.tabs
            .borrow()
            .iter()
            .map(|(name, _)| name.as_str())
            .eq(labels.iter().map(|label| label.name.as_str()));

        if !unchanged {
            self.rebuild_tabs(labels);
        }

        for ((_, tab), label) in imp.tabs.borrow().iter().zip(labels) {
            tab.set_active(label.selected);
        }

        imp.category_box.set_visible(!labels.is_empty());
    }

    fn rebuild_tabs(&self, labels: &[CategoryLabel]) {
        let imp = self.imp();
        let mut tabs = imp.tabs.borrow_mut();

        for (_, tab) in tabs.drain(..) {
            imp.category_box.remove(&tab);
        }

        for label in labels {
            let tab = self.create_tab(&label.name);
            imp.category_box.append(&tab);
            tabs.push((label.name.clone(), tab));
        }
    }

    fn create_tab(&self, name: &str) -> gtk::ToggleButton {
        let tab = gtk::ToggleButton::with_label(name);
        let category_name = name.to_owned();
        let this_weak = self.downgrade();

        tab.connect_clicked(move |_tab| {
            if let Some(this) = this_weak.upgrade() {
                this.emit_by_name::<()>(CATEGORY_SELECTED_SIGNAL, &[&category_name]);
            }
        });

        tab
    }

    pub fn set_products(&self, section: &ProductSection, images: &ImageResolver) {
        let imp = self.imp();
        self.remove_all_product_rows();

        if let Some(notice) = section.notice() {
            imp.notice_label.set_label(notice);
            imp.notice_label.set_visible(true);
            imp.product_list_box.set_visible(false);
            return;
        }

        imp.notice_label.set_visible(false);
        imp.product_list_box.set_visible(true);
        for card in section.cards() {
            imp.product_list_box.append(&ProductRow::from_card(card, images));
        }
    }

    fn remove_all_product_rows(&self) {
        let list_box = &self.imp().product_list_box;
        while let Some(child) = list_box.first_child() {
            list_box.remove(&child);
        }
    }

    pub fn scroll_to_top(&self) {
        self.imp().content.scroll_to_top();
    }

    pub fn connect_category_selected<F>(&self, callback: F) -> glib::SignalHandlerId
    where
        F: Fn(&Self, &str) + 'static
    {
        self.connect_local(CATEGORY_SELECTED_SIGNAL, false, move |values| {
            if
                let Ok(this) = values[0].get::<Self>()
                && let Ok(category_name) = values[1].get::<String>()
            {
                callback(&this, &category_name);
            }
            None
        })
    }

}
