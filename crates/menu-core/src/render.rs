use super::catalog::MenuCatalog;
use super::models::{Category, Product, Restaurant};
use super::navigation::{NavigationSession, View};
use super::price::format_price;

pub const DEFAULT_IMAGE: &str = "default.svg";

const NO_CATEGORIES_NOTICE: &str = "Kategori yok.";
const NO_PRODUCTS_NOTICE: &str = "Ürün yok.";
const EMPTY_CATEGORY_NOTICE: &str = "Bu kategoride ürün bulunmuyor.";
const TAG_SEPARATOR: &str = " • ";

const ABOUT_TITLE: &str = "Hakkında";
const ABOUT_BODY: &str = "Restoranları seçin, kategorilere göz atın ve menüdeki ürünleri, \
    fiyatları ve etiketleriyle birlikte inceleyin.";

#[derive(Debug, Clone, PartialEq)]
pub enum RenderDescriptor {
    Restaurants(RestaurantsView),
    Menu(MenuView),
    About(AboutView),
}

impl RenderDescriptor {
    #[must_use]
    pub const fn view(&self) -> View {
        match self {
            Self::Restaurants(_) => View::Restaurants,
            Self::Menu(_) => View::Menu,
            Self::About(_) => View::About,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantsView {
    pub cards: Vec<RestaurantCard>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuView {
    pub header: MenuHeader,
    pub categories: Vec<CategoryLabel>,
    pub products: ProductSection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuHeader {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLabel {
    pub name: String,
    pub selected: bool,
}

/// The product area of the menu. The three empty states are deliberately
/// distinct.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductSection {
    /// The restaurant has no categories at all.
    NoCategories,
    /// No category is selected, e.g. after selecting an unknown name.
    NoProducts,
    /// The selected category exists but lists nothing.
    EmptyCategory,
    Products(Vec<ProductCard>),
}

impl ProductSection {
    #[must_use]
    pub const fn notice(&self) -> Option<&'static str> {
        match self {
            Self::NoCategories => Some(NO_CATEGORIES_NOTICE),
            Self::NoProducts => Some(NO_PRODUCTS_NOTICE),
            Self::EmptyCategory => Some(EMPTY_CATEGORY_NOTICE),
            Self::Products(_) => None,
        }
    }

    #[must_use]
    pub fn cards(&self) -> &[ProductCard] {
        match self {
            Self::Products(cards) => cards,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub name: String,
    pub price: String,
    pub description: String,
    pub tags: Vec<String>,
    pub image: String,
}

impl ProductCard {
    #[must_use]
    pub fn tags_line(&self) -> Option<String> {
        (!self.tags.is_empty()).then(|| self.tags.join(TAG_SEPARATOR))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AboutView {
    pub title: &'static str,
    pub body: &'static str,
}

#[must_use]
pub fn project(catalog: &MenuCatalog, session: &NavigationSession) -> RenderDescriptor {
    match session.view() {
        View::Restaurants => RenderDescriptor::Restaurants(project_restaurants(catalog)),
        View::About => RenderDescriptor::About(project_about()),
        View::Menu => match session.restaurant_id().and_then(|id| catalog.find_restaurant(id)) {
            Some(restaurant) => RenderDescriptor::Menu(project_menu(restaurant, session.category_name())),
            None => RenderDescriptor::Restaurants(project_restaurants(catalog)),
        },
    }
}

fn project_restaurants(catalog: &MenuCatalog) -> RestaurantsView {
    let cards = catalog
        .restaurants()
        .iter()
        .map(|restaurant| RestaurantCard {
            id: restaurant.id.clone(),
            name: restaurant.name.clone(),
            description: restaurant.description_or_empty().to_owned(),
            image: image_or_default(restaurant.image.as_deref()),
        })
        .collect();

    RestaurantsView { cards }
}

const fn project_about() -> AboutView {
    AboutView { title: ABOUT_TITLE, body: ABOUT_BODY }
}

fn project_menu(restaurant: &Restaurant, category_name: Option<&str>) -> MenuView {
    let header = MenuHeader {
        name: restaurant.name.clone(),
        description: restaurant.description_or_empty().to_owned(),
    };

    let selected_index = category_name.and_then(|name| {
        restaurant
            .categories
            .iter()
            .position(|category| category.name == name)
    });

    let categories = restaurant
        .categories
        .iter()
        .enumerate()
        .map(|(index, category)| CategoryLabel {
            name: category.name.clone(),
            selected: selected_index == Some(index),
        })
        .collect();

    let selected = selected_index.and_then(|index| restaurant.categories.get(index));
    let products = project_products(restaurant, selected);

    MenuView { header, categories, products }
}

fn project_products(restaurant: &Restaurant, selected: Option<&Category>) -> ProductSection {
    if restaurant.categories.is_empty() {
        return ProductSection::NoCategories;
    }

    match selected {
        None => ProductSection::NoProducts,
        Some(category) if category.products.is_empty() => ProductSection::EmptyCategory,
        Some(category) => ProductSection::Products(category.products.iter().map(product_card).collect()),
    }
}

fn product_card(product: &Product) -> ProductCard {
    ProductCard {
        name: product.name.clone(),
        price: format_price(product.price, product.currency.as_deref()),
        description: product.description.clone().unwrap_or_default(),
        tags: product.tags.clone(),
        image: image_or_default(product.image.as_deref()),
    }
}

fn image_or_default(image: Option<&str>) -> String {
    image
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_IMAGE)
        .to_owned()
}
