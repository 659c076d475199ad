use crate::prelude::*;
use super::navigation::Navigation;

use gtk::gio::{ActionGroup, ActionMap};
use menu_core::View;

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/io/github/menubrowser/window.ui")]
    pub struct Window {
        #[template_child(id = "window-navigation")]
        pub navigation: TemplateChild<Navigation>,
        #[template_child(id = "window-back-button")]
        pub back_button: TemplateChild<gtk::Button>,
        #[template_child(id = "window-restaurants-button")]
        pub restaurants_button: TemplateChild<gtk::ToggleButton>,
        #[template_child(id = "window-about-button")]
        pub about_button: TemplateChild<gtk::ToggleButton>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for Window {
        const NAME: &'static str = "Window";
        type Type = super::Window;
        type ParentType = adw::ApplicationWindow;

        fn class_init(class: &mut Self::Class) {
            Navigation::ensure_type();
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for Window {
        fn constructed(&self) {
            self.parent_constructed();
        }

        fn dispose(&self) {
            self.dispose_template();
        }
    }

    impl WidgetImpl for Window {}
    impl WindowImpl for Window {}
    impl ApplicationWindowImpl for Window {}
    impl AdwApplicationWindowImpl for Window {}
}

glib::wrapper! {
    pub struct Window(ObjectSubclass<imp::Window>)
        @extends adw::ApplicationWindow, gtk::ApplicationWindow, gtk::Window, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Native, gtk::Root, gtk::ShortcutManager, ActionMap, ActionGroup;
}

impl Window {
    pub fn new(application: &adw::Application) -> Self {
        glib::Object::builder()
            .property("application", application)
            .build()
    }

    pub fn navigation(&self) -> &Navigation {
        &self.imp().navigation
    }

    /// Reflects the visible view in the header; `None` while no session exists.
    pub fn set_header_view(&self, view: Option<View>) {
        let imp = self.imp();
        imp.back_button.set_visible(view == Some(View::Menu));
        imp.restaurants_button.set_active(view == Some(View::Restaurants));
        imp.about_button.set_active(view == Some(View::About));
    }
}
