use crate::prelude::*;
use crate::images::ImageResolver;

use menu_core::RestaurantCard;
use std::cell::RefCell;

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate, glib::Properties)]
    #[template(resource = "/io/github/menubrowser/restaurant_row.ui")]
    #[properties(wrapper_type = super::RestaurantRow)]
    pub struct RestaurantRow {
        #[template_child(id = "restaurant-row-image")]
        pub image: TemplateChild<gtk::Image>,

        #[property(get, construct_only)]
        pub restaurant_id: RefCell<String>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for RestaurantRow {
        const NAME: &'static str = "RestaurantRow";
        type Type = super::RestaurantRow;
        type ParentType = adw::ActionRow;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    #[glib::derived_properties]
    impl ObjectImpl for RestaurantRow {}
    impl WidgetImpl for RestaurantRow {}
    impl ListBoxRowImpl for RestaurantRow {}
    impl PreferencesRowImpl for RestaurantRow {}
    impl ActionRowImpl for RestaurantRow {}
}

glib::wrapper! {
    pub struct RestaurantRow(ObjectSubclass<imp::RestaurantRow>)
        @extends adw::ActionRow, adw::PreferencesRow, gtk::ListBoxRow, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Actionable;
}

impl RestaurantRow {

    pub fn new(restaurant_id: &str, name: &str, description: &str) -> Self {
        let escaped_name = glib::markup_escape_text(name);
        let escaped_description = glib::markup_escape_text(description);

        glib::Object::builder()
            .property("restaurant-id", restaurant_id)
            .property("title", escaped_name)
            .property("subtitle", escaped_description)
            .build()
    }

    pub fn from_card(card: &RestaurantCard, images: &ImageResolver) -> Self {
        let this = Self::new(&card.id, &card.name, &card.description);
        images.apply(&this.imp().image, &card.image);
        this
    }

}
