use super::widgets::{
    WindowWidget,
    NavigationWidget,
    RestaurantsPageWidget,
    MenuPageWidget,
    AboutPageWidget
};

use std::rc::Rc;

#[derive(Clone)]
pub struct Ui {
    window: Rc<WindowWidget>
}

impl Ui {

    pub fn new(window: WindowWidget) -> Self {
        Self { window: Rc::new(window) }
    }

    pub fn window(&self) -> &WindowWidget {
        &self.window
    }

    pub fn navigation(&self) -> &NavigationWidget {
        self.window.navigation()
    }

    pub fn restaurants_page(&self) -> &RestaurantsPageWidget {
        self.navigation().restaurants_page()
    }

    pub fn menu_page(&self) -> &MenuPageWidget {
        self.navigation().menu_page()
    }

    pub fn about_page(&self) -> &AboutPageWidget {
        self.navigation().about_page()
    }

}
