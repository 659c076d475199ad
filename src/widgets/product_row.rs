use crate::prelude::*;
use crate::images::ImageResolver;

use menu_core::ProductCard;
use std::cell::RefCell;

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate, glib::Properties)]
    #[template(resource = "/io/github/menubrowser/product_row.ui")]
    #[properties(wrapper_type = super::ProductRow)]
    pub struct ProductRow {
        #[template_child(id = "product-row-image")]
        pub image: TemplateChild<gtk::Image>,
        #[template_child(id = "product-row-tags")]
        pub tags_label: TemplateChild<gtk::Label>,

        #[property(get, set)]
        pub price: RefCell<String>,
        #[property(get, set)]
        pub tags: RefCell<String>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for ProductRow {
        const NAME: &'static str = "ProductRow";
        type Type = super::ProductRow;
        type ParentType = adw::ActionRow;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    #[glib::derived_properties]
    impl ObjectImpl for ProductRow {
        fn constructed(&self) {
            self.parent_constructed();
            self.obj().setup_tags_visibility();
        }
    }

    impl WidgetImpl for ProductRow {}
    impl ListBoxRowImpl for ProductRow {}
    impl PreferencesRowImpl for ProductRow {}
    impl ActionRowImpl for ProductRow {}
}

glib::wrapper! {
    pub struct ProductRow(ObjectSubclass<imp::ProductRow>)
        @extends adw::ActionRow, adw::PreferencesRow, gtk::ListBoxRow, gtk::Widget,
        @implements gtk::Accessible, gtk::Actionable, gtk::Buildable, gtk::ConstraintTarget;
}

impl ProductRow {
    fn setup_tags_visibility(&self) {
        self.connect_notify_local(Some("tags"), |this, _| {
            this.update_tags_visibility();
        });

        self.update_tags_visibility();
    }

    fn update_tags_visibility(&self) {
        self.imp().tags_label.set_visible(!self.tags().is_empty());
    }

    pub fn new(
        name: &str,
        description: &str,
        price: &str,
        tags: Option<&str>
    ) -> Self {
        let escaped_name = glib::markup_escape_text(name);
        let escaped_description = glib::markup_escape_text(description);

        glib::Object::builder::<Self>()
            .property("title", escaped_name)
            .property("subtitle", escaped_description)
            .property("price", price)
            .property("tags", tags.unwrap_or_default())
            .build()
    }

    pub fn from_card(card: &ProductCard, images: &ImageResolver) -> Self {
        let tags = card.tags_line();
        let this = Self::new(&card.name, &card.description, &card.price, tags.as_deref());
        images.apply(&this.imp().image, &card.image);
        this
    }
}
