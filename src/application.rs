use std::cell::RefCell;
use std::rc::Rc;

use super::prelude::*;
use super::config::Config;
use super::constants;
use super::controllers::{ActionsController, SessionController};
use super::loader::DocumentLoader;
use super::ui::Ui;
use super::widgets::WindowWidget;

use gtk::gio;
use menu_core::load_catalog;

struct ApplicationState {
    application: adw::Application,
    config: Config,
    ui: RefCell<Option<Ui>>,
    actions: RefCell<Option<ActionsController>>,
}

pub struct Application {
    state: Rc<ApplicationState>,
}

impl Application {

    pub fn new() -> Self {
        let application = adw::Application::new(
            Some(constants::APP_ID),
            gio::ApplicationFlags::HANDLES_OPEN
        );

        let state = Rc::new(ApplicationState {
            application,
            config: Config::from_environment(),
            ui: RefCell::default(),
            actions: RefCell::default(),
        });

        Self::setup_signals(&state);

        Self { state }
    }

    fn setup_signals(state: &Rc<ApplicationState>) {
        Self::setup_activate_event(state);
        Self::setup_open_event(state);
        Self::setup_startup_event(state);
    }

    fn setup_activate_event(state: &Rc<ApplicationState>) {
        let state_weak = Rc::downgrade(state);
        state.application.connect_activate(move |_application| {
            let Some(state) = state_weak.upgrade() else { return };
            Self { state }.present(None);
        });
    }

    fn setup_open_event(state: &Rc<ApplicationState>) {
        let state_weak = Rc::downgrade(state);
        state.application.connect_open(move |_application, files, _hint| {
            let Some(state) = state_weak.upgrade() else { return };
            if files.len() > 1 {
                tracing::warn!(count = files.len(), "several documents given; opening the first");
            }
            Self { state }.present(files.first().cloned());
        });
    }

    fn setup_startup_event(state: &Rc<ApplicationState>) {
        state.application.connect_startup(move |_application| {
            if let Err(error) = Self::setup_resources() {
                tracing::error!("{error:#}");
            }
        });
    }

    fn present(&self, opened: Option<gio::File>) {
        if let Some(ui) = self.state.ui.borrow().as_ref() {
            if opened.is_some() {
                tracing::info!("a menu document is already open; ignoring the new one");
            }
            ui.window().present();
            return;
        }

        let loader = DocumentLoader::resolve(opened, &self.state.config);
        tracing::info!(uri = %loader.file().uri(), "using menu document");

        let ui = Ui::new(WindowWidget::new(&self.state.application));
        let session = SessionController::new(ui.clone(), loader.images());
        let actions = ActionsController::new(self.state.application.clone(), session.clone());

        ui.window().present();
        Self::spawn_load(loader, &session);

        *self.state.ui.borrow_mut() = Some(ui);
        *self.state.actions.borrow_mut() = Some(actions);
    }

    fn spawn_load(loader: DocumentLoader, session: &SessionController) {
        let session_weak = session.downgrade();
        glib::spawn_future_local(async move {
            let result = load_catalog(&loader).await;
            if let Some(session) = session_weak.upgrade() {
                session.finish_loading(result);
            }
        });
    }

    fn setup_resources() -> Result<()> {
        glib::set_application_name(constants::APP_TITLE);
        glib::set_prgname(Some(constants::APP_NAME));
        gio::resources_register_include_impl(constants::APP_RESOURCES)
            .context("Failed to register application resources")?;

        let css_provider = gtk::CssProvider::new();
        css_provider.load_from_resource(constants::APP_STYLE_RESOURCE);

        let display = gtk::gdk::Display::default().context("Failed to add style provider")?;

        gtk::style_context_add_provider_for_display(
            &display,
            &css_provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );

        Ok(())
    }

    pub fn activate(&self) -> Result<()> {
        let result = self.state.application.run();
        if matches!(result, glib::ExitCode::FAILURE) {
            bail!("Application exited with code {}", result.get());
        }

        Ok(())
    }

}
