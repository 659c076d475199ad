mod catalog;
mod error;
mod loading;
mod models;
mod navigation;
mod price;
mod render;

pub use self::catalog::MenuCatalog;
pub use self::error::{LoadError, ValidationError};
pub use self::loading::{load_catalog, LoadPhase, MenuSource, Screen};
pub use self::models::{Category, Product, Restaurant};
pub use self::navigation::{Command, NavigationController, NavigationSession, View};
pub use self::price::{format_price, DEFAULT_CURRENCY};
pub use self::render::{
    project,
    AboutView,
    CategoryLabel,
    MenuHeader,
    MenuView,
    ProductCard,
    ProductSection,
    RenderDescriptor,
    RestaurantCard,
    RestaurantsView,
    DEFAULT_IMAGE,
};
