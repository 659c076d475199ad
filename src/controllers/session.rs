use super::super::images::ImageResolver;
use super::super::renderer::Renderer;
use super::super::ui::Ui;

use menu_core::{Command, LoadError, LoadPhase, MenuCatalog};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

struct State {
    ui: Ui,
    images: ImageResolver,
    phase: RefCell<LoadPhase>
}

#[derive(Clone)]
pub struct WeakSession {
    state: Weak<State>
}

impl WeakSession {
    pub fn upgrade(&self) -> Option<Session> {
        self.state.upgrade().map(|state| Session { state })
    }
}

#[derive(Clone)]
pub struct Session {
    state: Rc<State>
}

impl Session {

    pub fn new(ui: Ui, images: ImageResolver) -> Self {
        let state = State { ui, images, phase: RefCell::default() };
        let this = Self { state: Rc::new(state) };
        this.setup_restaurant_activated();
        this.setup_category_selected();
        this.render(false);
        this
    }

    fn setup_restaurant_activated(&self) {
        let this_weak = self.downgrade();
        self.state.ui.restaurants_page().connect_restaurant_activated(move |_, restaurant_id| {
            if let Some(this) = this_weak.upgrade() {
                this.dispatch(Command::OpenRestaurant(restaurant_id.to_owned()));
            }
        });
    }

    fn setup_category_selected(&self) {
        let this_weak = self.downgrade();
        self.state.ui.menu_page().connect_category_selected(move |_, category_name| {
            if let Some(this) = this_weak.upgrade() {
                this.dispatch(Command::SelectCategory(category_name.to_owned()));
            }
        });
    }

    pub fn finish_loading(&self, result: Result<MenuCatalog, LoadError>) {
        let settled = self.state.phase.borrow_mut().complete(result);
        if settled {
            self.render(true);
        }
    }

    /// Redraws even when nothing changed so widget-held state such as
    /// toggled tabs snaps back to the session.
    pub fn dispatch(&self, command: Command) -> bool {
        let scroll_to_top = command.is_view_transition();
        let changed = self.state.phase.borrow_mut().dispatch(command);
        self.render(scroll_to_top);
        changed
    }

    fn render(&self, scroll_to_top: bool) {
        let screen = self.state.phase.borrow().screen();
        Renderer::render(&self.state.ui, &self.state.images, &screen, scroll_to_top);
    }

    pub fn downgrade(&self) -> WeakSession {
        let state = Rc::downgrade(&self.state);
        WeakSession { state }
    }

}
