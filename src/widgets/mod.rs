mod about_page;
mod menu_page;
mod navigation;
mod page_content;
mod product_row;
mod restaurant_row;
mod restaurants_page;
mod window;

pub use self::about_page::AboutPage as AboutPageWidget;
pub use self::menu_page::MenuPage as MenuPageWidget;
pub use self::navigation::{Navigation as NavigationWidget, NavigationPage};
pub use self::restaurants_page::RestaurantsPage as RestaurantsPageWidget;
pub use self::window::Window as WindowWidget;
