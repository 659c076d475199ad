use super::super::prelude::*;
use super::page_content::PageContent;
use super::restaurant_row::RestaurantRow;
use crate::images::ImageResolver;

use menu_core::RestaurantCard;
use std::cell::RefCell;
use std::sync::OnceLock;
use glib::subclass::Signal;

const RESTAURANT_ACTIVATED_SIGNAL: &str = "restaurant-activated";
const EMPTY_PLACEHOLDER: &str = "Henüz restoran yok.";

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/io/github/menubrowser/restaurants_page.ui")]
    pub struct RestaurantsPage {
        #[template_child(id = "restaurants-page-content")]
        pub content: TemplateChild<PageContent>,
        #[template_child(id = "restaurants-page-list-box")]
        pub list_box: TemplateChild<gtk::ListBox>,

        pub rows: RefCell<Vec<RestaurantRow>>,
        pub cards: RefCell<Vec<RestaurantCard>>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for RestaurantsPage {
        const NAME: &'static str = "RestaurantsPage";
        type Type = super::RestaurantsPage;
        type ParentType = adw::Bin;

        fn class_init(class: &mut Self::Class) {
            PageContent::ensure_type();
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for RestaurantsPage {
        fn constructed(&self) {
            self.parent_constructed();
            self.obj().setup_list_box();
        }

        fn signals() -> &'static [Signal] {
            static SIGNALS: OnceLock<[Signal; 1]> = OnceLock::new();
            SIGNALS.get_or_init(|| {
                [
                    Signal::builder(RESTAURANT_ACTIVATED_SIGNAL)
                        .param_types([String::static_type()])
                        .build()
                ]
            })
        }
    }

    impl WidgetImpl for RestaurantsPage {}
    impl BinImpl for RestaurantsPage {}
}

glib::wrapper! {
    pub struct RestaurantsPage(ObjectSubclass<imp::RestaurantsPage>)
        @extends adw::Bin, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl RestaurantsPage {

    fn setup_list_box(&self) {
        let list_box = &self.imp().list_box;

        let placeholder = gtk::Label::new(Some(EMPTY_PLACEHOLDER));
        placeholder.add_css_class("dim-label");
        placeholder.add_css_class("notice");
        list_box.set_placeholder(Some(&placeholder));

        let this_weak = self.downgrade();
        list_box.connect_row_activated(move |_list, row| {
            if
                let Some(this) = this_weak.upgrade()
                && let Some(row) = row.downcast_ref::<RestaurantRow>()
            {
                this.emit_by_name::<()>(RESTAURANT_ACTIVATED_SIGNAL, &[&row.restaurant_id()]);
            }
        });
    }

    pub fn set_cards(&self, cards: &[RestaurantCard], images: &ImageResolver) {
        let imp = self.imp();
        if imp.cards.borrow().as_slice() == cards {
            return;
        }

        self.remove_all_rows();
        for card in cards {
            self.append_row(RestaurantRow::from_card(card, images));
        }

        imp.cards.replace(cards.to_vec());
    }

    fn remove_all_rows(&self) {
        let imp = self.imp();
        for row in imp.rows.borrow_mut().drain(..) {
            imp.list_box.remove(&row);
        }
    }

    fn append_row(&self, row: RestaurantRow) {
        let imp = self.imp();
        imp.list_box.append(&row);
        imp.rows.borrow_mut().push(row);
    }

    pub fn scroll_to_top(&self) {
        self.imp().content.scroll_to_top();
    }

    pub fn connect_restaurant_activated<F>(&self, callback: F) -> glib::SignalHandlerId
    where
        F: Fn(&Self, &str) + 'static
    {
        self.connect_local(RESTAURANT_ACTIVATED_SIGNAL, false, move |values| {
            if
                let Ok(this) = values[0].get::<Self>()
                && let Ok(restaurant_id) = values[1].get::<String>()
            {
                callback(&this, &restaurant_id);
            }
            None
        })
    }

}
