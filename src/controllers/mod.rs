mod actions;
mod session;

pub use self::actions::Actions as ActionsController;
pub use self::session::Session as SessionController;
