use super::super::prelude::*;
use super::session::Session;

use menu_core::{Command, View};

const SHOW_VIEW_ACCELS: [(&str, &str); 2] = [
    ("app.show-view('restaurants')", "<Alt>Home"),
    ("app.show-view('about')", "F1"),
];

pub struct Actions {
    application: adw::Application,
    session: Session,
}

impl Actions {
    pub fn new(application: adw::Application, session: Session) -> Self {
        let this = Self { application, session };
        this.setup_quit_action();
        this.setup_show_view_action();
        this.setup_back_action();
        this
    }

    fn setup_quit_action(&self) {
        let quit_action = gtk::gio::SimpleAction::new("quit", None);
        self.connect_quit_handler(&quit_action);
        self.application.add_action(&quit_action);
        self.application.set_accels_for_action("app.quit", &["<Ctrl>q"]);
    }

    fn connect_quit_handler(&self, quit_action: &gtk::gio::SimpleAction) {
        let application_weak = self.application.downgrade();
        quit_action.connect_activate(move |_action, _| {
            if let Some(application) = application_weak.upgrade() {
                application.quit();
            }
        });
    }

    fn setup_show_view_action(&self) {
        let show_view_action = gtk::gio::SimpleAction::new("show-view", Some(glib::VariantTy::STRING));
        self.connect_show_view_handler(&show_view_action);
        self.application.add_action(&show_view_action);
        for (action, accel) in SHOW_VIEW_ACCELS {
            self.application.set_accels_for_action(action, &[accel]);
        }
    }

    fn connect_show_view_handler(&self, show_view_action: &gtk::gio::SimpleAction) {
        let session_weak = self.session.downgrade();
        show_view_action.connect_activate(move |_action, parameter| {
            let Some(session) = session_weak.upgrade() else { return };
            match parameter.and_then(glib::Variant::str).and_then(View::parse) {
                Some(view) => {
                    session.dispatch(Command::ShowView(view));
                }
                None => tracing::debug!(?parameter, "show-view called with an unknown view"),
            }
        });
    }

    fn setup_back_action(&self) {
        let back_action = gtk::gio::SimpleAction::new("back", None);
        self.connect_back_handler(&back_action);
        self.application.add_action(&back_action);
        self.application.set_accels_for_action("app.back", &["<Alt>Left"]);
    }

    fn connect_back_handler(&self, back_action: &gtk::gio::SimpleAction) {
        let session_weak = self.session.downgrade();
        back_action.connect_activate(move |_action, _| {
            if let Some(session) = session_weak.upgrade() {
                session.dispatch(Command::Back);
            }
        });
    }

}
