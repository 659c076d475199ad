use super::super::prelude::*;
use super::about_page::AboutPage;
use super::menu_page::MenuPage;
use super::restaurants_page::RestaurantsPage;

use menu_core::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationPage {
    Loading,
    Failed,
    Restaurants,
    Menu,
    About,
}

impl NavigationPage {

    const fn name(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Failed => "failed",
            Self::Restaurants => "restaurants",
            Self::Menu => "menu",
            Self::About => "about",
        }
    }

    pub const fn from_view(view: View) -> Self {
        match view {
            View::Restaurants => Self::Restaurants,
            View::Menu => Self::Menu,
            View::About => Self::About,
        }
    }

}

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/io/github/menubrowser/navigation.ui")]
    pub struct Navigation {
        #[template_child(id = "navigation-stack")]
        pub stack: TemplateChild<gtk::Stack>,
        #[template_child(id = "navigation-failure-page")]
        pub failure_page: TemplateChild<adw::StatusPage>,
        #[template_child(id = "navigation-restaurants-page")]
        pub restaurants_page: TemplateChild<RestaurantsPage>,
        #[template_child(id = "navigation-menu-page")]
        pub menu_page: TemplateChild<MenuPage>,
        #[template_child(id = "navigation-about-page")]
        pub about_page: TemplateChild<AboutPage>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for Navigation {
        const NAME: &'static str = "Navigation";
        type Type = super::Navigation;
        type ParentType = adw::Bin;

        fn class_init(class: &mut Self::Class) {
            RestaurantsPage::ensure_type();
            MenuPage::ensure_type();
            AboutPage::ensure_type();
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for Navigation {}
    impl WidgetImpl for Navigation {}
    impl BinImpl for Navigation {}
}

glib::wrapper! {
    pub struct Navigation(ObjectSubclass<imp::Navigation>)
        @extends adw::Bin, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl Navigation {
    pub fn restaurants_page(&self) -> &RestaurantsPage {
        &self.imp().restaurants_page
    }

    pub fn menu_page(&self) -> &MenuPage {
        &self.imp().menu_page
    }

    pub fn about_page(&self) -> &AboutPage {
        &self.imp().about_page
    }

    pub fn set_failure(&self, message: &str) {
        self.imp().failure_page.set_description(Some(message));
    }

    pub fn replace_with_page(&self, page: NavigationPage) {
        self.imp().stack.set_visible_child_name(page.name());
    }

    pub fn scroll_to_top(&self, page: NavigationPage) {
        match page {
            NavigationPage::Restaurants => self.restaurants_page().scroll_to_top(),
            NavigationPage::Menu => self.menu_page().scroll_to_top(),
            NavigationPage::Loading | NavigationPage::Failed | NavigationPage::About => {}
        }
    }
}
