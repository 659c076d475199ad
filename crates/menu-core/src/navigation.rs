use super::catalog::MenuCatalog;
use super::models::{Category, Restaurant};
use super::render::{self, RenderDescriptor};

use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Restaurants,
    Menu,
    About,
}

static VIEW_NAMES: phf::Map<&'static str, View> = phf::phf_map! {
    "restaurants" => View::Restaurants,
    "menu" => View::Menu,
    "about" => View::About,
};

impl View {

    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        VIEW_NAMES.get(name).copied()
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Restaurants => "restaurants",
            Self::Menu => "menu",
            Self::About => "about",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Self; 3] {
        &[Self::Restaurants, Self::Menu, Self::About]
    }

}

impl std::fmt::Display for View {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{name}", name = self.name())
    }
}

impl std::str::FromStr for View {
    type Err = ();

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Self::parse(string).ok_or(())
    }
}

/// Which view is visible and what is selected in it. Holds references into a
/// catalog by id and name only.
///
/// Switching away from the menu keeps the restaurant and category selection:
/// they stay stale but inert until the menu is shown again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationSession {
    view: View,
    restaurant_id: Option<String>,
    category_name: Option<String>,
}

impl NavigationSession {

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn view(&self) -> View {
        self.view
    }

    #[must_use]
    pub fn restaurant_id(&self) -> Option<&str> {
        self.restaurant_id.as_deref()
    }

    #[must_use]
    pub fn category_name(&self) -> Option<&str> {
        self.category_name.as_deref()
    }

    // Drops references the catalog cannot resolve so the session invariants
    // hold for a session that was built against another catalog.
    fn normalized(mut self, catalog: &MenuCatalog) -> Self {
        let restaurant = self
            .restaurant_id
            .as_deref()
            .and_then(|id| catalog.find_restaurant(id));

        match restaurant {
            Some(restaurant) => {
                let category_known = self
                    .category_name
                    .as_deref()
                    .is_some_and(|name| restaurant.category(name).is_some());
                if !category_known {
                    self.category_name = None;
                }
            }
            None => {
                self.restaurant_id = None;
                self.category_name = None;
                if self.view == View::Menu {
                    self.view = View::Restaurants;
                }
            }
        }

        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ShowRestaurants,
    ShowAbout,
    ShowView(View),
    OpenRestaurant(String),
    SelectCategory(String),
    Back,
}

impl Command {
    #[must_use]
    pub const fn is_view_transition(&self) -> bool {
        !matches!(self, Self::SelectCategory(_))
    }
}

pub struct NavigationController {
    catalog: Rc<MenuCatalog>,
    session: NavigationSession,
}

impl NavigationController {

    #[must_use]
    pub fn new(catalog: Rc<MenuCatalog>) -> Self {
        Self { catalog, session: NavigationSession::new() }
    }

    #[must_use]
    pub fn with_session(catalog: Rc<MenuCatalog>, session: NavigationSession) -> Self {
        let session = session.normalized(&catalog);
        Self { catalog, session }
    }

    #[must_use]
    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    #[must_use]
    pub const fn session(&self) -> &NavigationSession {
        &self.session
    }

    #[must_use]
    pub fn into_session(self) -> NavigationSession {
        self.session
    }

    #[must_use]
    pub fn current_restaurant(&self) -> Option<&Restaurant> {
        self.session
            .restaurant_id()
            .and_then(|id| self.catalog.find_restaurant(id))
    }

    #[must_use]
    pub fn current_category(&self) -> Option<&Category> {
        let restaurant = self.current_restaurant()?;
        let name = self.session.category_name()?;
        self.catalog.find_category(restaurant, name)
    }

    pub fn apply(&mut self, command: Command) -> bool {
        let before = self.session.clone();

        match command {
            Command::ShowRestaurants => self.show_restaurants(),
            Command::Back => self.back(),
            Command::ShowAbout => self.show_about(),
            Command::ShowView(view) => self.show_view(view),
            Command::OpenRestaurant(id) => self.open_restaurant(&id),
            Command::SelectCategory(name) => self.select_category(&name),
        };

        self.session != before
    }

    // Each command reports whether it was accepted. Absorbed commands leave
    // the session untouched and return false.

    pub fn show_restaurants(&mut self) -> bool {
        self.session.view = View::Restaurants;
        true
    }

    pub fn show_about(&mut self) -> bool {
        self.session.view = View::About;
        true
    }

    pub fn back(&mut self) -> bool {
        self.show_restaurants()
    }

    /// Shows `view` by name. The menu can only be shown again while a
    /// restaurant is selected; otherwise nothing changes.
    pub fn show_view(&mut self, view: View) -> bool {
        if view == View::Menu && self.session.restaurant_id.is_none() {
            tracing::debug!("menu requested without a restaurant; ignoring");
            return false;
        }

        self.session.view = view;
        true
    }

    pub fn open_restaurant(&mut self, id: &str) -> bool {
        let Some(restaurant) = self.catalog.find_restaurant(id) else {
            tracing::debug!(restaurant_id = id, "unknown restaurant; ignoring");
            return false;
        };

        let first_category = restaurant.first_category().map(|category| category.name.clone());

        self.session.restaurant_id = Some(restaurant.id.clone());
        self.session.view = View::Menu;
        self.session.category_name = None;

        if let Some(name) = first_category {
            self.select_category(&name);
        }

        true
    }

    /// Selects a category of the current restaurant. An unknown name clears
    /// the selection; without a current restaurant nothing changes.
    pub fn select_category(&mut self, name: &str) -> bool {
        let Some(restaurant) = self.current_restaurant() else {
            tracing::debug!(category = name, "no restaurant selected; ignoring category");
            return false;
        };

        let found = restaurant.category(name).map(|category| category.name.clone());
        if found.is_none() {
            tracing::debug!(
                restaurant_id = restaurant.id.as_str(),
                category = name,
                "unknown category; clearing selection"
            );
        }

        self.session.category_name = found;
        true
    }

    #[must_use]
    pub fn render(&self) -> RenderDescriptor {
        render::project(&self.catalog, &self.session)
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn controller() -> NavigationController {
        let document = json!({
            "restaurants": [
                {
                    "id": "r1",
                    "name": "Pizzeria",
                    "categories": [
                        { "name": "Pizza", "products": [{ "name": "Margherita", "price": 12.5 }] },
                        { "name": "Makarna", "products": [] }
                    ]
                },
                { "id": "r2", "name": "Boş", "categories": [] }
            ]
        });
        let catalog = MenuCatalog::build(&document).unwrap();
        NavigationController::new(Rc::new(catalog))
    }

    #[test]
    fn starts_on_restaurant_list_without_selection() {
        let controller = controller();
        assert_eq!(controller.session(), &NavigationSession::new());
        assert_eq!(controller.session().view(), View::Restaurants);
        assert_eq!(controller.session().restaurant_id(), None);
        assert_eq!(controller.session().category_name(), None);
    }

    #[test]
    fn open_restaurant_selects_first_category() {
        let mut controller = controller();
        assert!(controller.open_restaurant("r1"));

        let session = controller.session();
        assert_eq!(session.view(), View::Menu);
        assert_eq!(session.restaurant_id(), Some("r1"));
        assert_eq!(session.category_name(), Some("Pizza"));
        assert_eq!(controller.current_category().unwrap().name, "Pizza");
    }

    #[test]
    fn unknown_restaurant_is_a_no_op() {
        let mut controller = controller();
        controller.open_restaurant("r1");
        controller.show_about();
        let before = controller.session().clone();

        assert!(!controller.open_restaurant("nope"));
        assert_eq!(controller.session(), &before);
        assert!(!controller.apply(Command::OpenRestaurant("nope".to_owned())));
    }

    #[test]
    fn restaurant_without_categories_clears_previous_category() {
        let mut controller = controller();
        controller.open_restaurant("r1");
        controller.open_restaurant("r2");

        assert_eq!(controller.session().restaurant_id(), Some("r2"));
        assert_eq!(controller.session().category_name(), None);
    }

    #[test]
    fn unknown_category_clears_selection() {
        let mut controller = controller();
        controller.open_restaurant("r1");
        assert!(controller.select_category("Tatlı"));
        assert_eq!(controller.session().category_name(), None);
        assert_eq!(controller.session().view(), View::Menu);
    }

    #[test]
    fn category_without_restaurant_is_ignored() {
        let mut controller = controller();
        assert!(!controller.select_category("Pizza"));
        assert_eq!(controller.session().category_name(), None);
    }

    #[test]
    fn view_switches_keep_stale_selection() {
        let mut controller = controller();
        controller.open_restaurant("r1");
        controller.select_category("Makarna");

        controller.show_about();
        controller.show_restaurants();

        let session = controller.session();
        assert_eq!(session.view(), View::Restaurants);
        assert_eq!(session.restaurant_id(), Some("r1"));
        assert_eq!(session.category_name(), Some("Makarna"));
    }

    #[test]
    fn menu_view_requires_a_restaurant() {
        let mut controller = controller();
        assert!(!controller.show_view(View::Menu));
        assert_eq!(controller.session().view(), View::Restaurants);

        controller.open_restaurant("r1");
        controller.back();
        assert_eq!(controller.session().view(), View::Restaurants);
        assert!(controller.show_view(View::Menu));
        assert_eq!(controller.session().view(), View::Menu);
    }

    #[test]
    fn commands_report_acceptance_alike() {
        let mut controller = controller();
        assert!(controller.show_restaurants());
        assert!(controller.show_about());
        assert!(controller.back());
        assert!(!controller.select_category("Pizza"));
        assert!(!controller.show_view(View::Menu));
        assert!(!controller.open_restaurant("nope"));

        assert!(controller.open_restaurant("r1"));
        assert!(controller.select_category("Makarna"));
        assert!(controller.show_view(View::About));
        assert_eq!(controller.session().view(), View::About);
    }

    #[test]
    fn apply_reports_changes() {
        let mut controller = controller();
        assert!(!controller.apply(Command::ShowRestaurants));
        assert!(controller.apply(Command::ShowAbout));
        assert!(controller.apply(Command::OpenRestaurant("r1".to_owned())));
        assert!(controller.apply(Command::SelectCategory("Makarna".to_owned())));
        assert!(controller.apply(Command::Back));
        assert_eq!(controller.session().view(), View::Restaurants);
    }

    #[test]
    fn view_names_round_trip_through_parse() {
        for view in View::all() {
            assert_eq!(View::parse(view.name()), Some(*view));
            assert_eq!(view.to_string().parse::<View>(), Ok(*view));
        }
        assert_eq!(View::parse("settings"), None);
    }

    #[test]
    fn foreign_session_is_normalized() {
        let mut stale = controller();
        stale.open_restaurant("r1");
        let mut session = stale.into_session();
        session.restaurant_id = Some("gone".to_owned());

        let catalog = Rc::new(MenuCatalog::build(&json!({})).unwrap());
        let controller = NavigationController::with_session(catalog, session);
        assert_eq!(controller.session(), &NavigationSession::new());
    }

    #[test]
    fn session_with_unknown_category_keeps_restaurant() {
        let template = controller();
        let catalog = Rc::new(template.catalog().clone());
        let session = NavigationSession {
            view: View::Menu,
            restaurant_id: Some("r1".to_owned()),
            category_name: Some("Tatlı".to_owned()),
        };

        let controller = NavigationController::with_session(catalog, session);
        assert_eq!(controller.session().view(), View::Menu);
        assert_eq!(controller.session().restaurant_id(), Some("r1"));
        assert_eq!(controller.session().category_name(), None);
    }
}
