use menu_core::{
    Command,
    MenuCatalog,
    NavigationController,
    ProductSection,
    RenderDescriptor,
    View,
};
use serde_json::{json, Value};
use std::rc::Rc;

fn controller_for(document: &Value) -> NavigationController {
    let catalog = MenuCatalog::build(document).expect("valid document");
    NavigationController::new(Rc::new(catalog))
}

fn two_restaurants() -> Value {
    json!({
        "restaurants": [
            {
                "id": "kebap",
                "name": "Kebapçı",
                "description": "Ocakbaşı",
                "image": "kebap.jpg",
                "categories": [
                    { "name": "Kebap", "products": [{ "name": "Adana", "price": 320, "tags": ["acılı"] }] },
                    { "name": "İçecek", "products": [{ "name": "Ayran", "price": 40, "currency": "TL" }] }
                ]
            },
            { "id": "empty", "name": "Yeni Açılan" }
        ]
    })
}

#[test]
fn every_restaurant_round_trips_through_lookup() {
    let document = two_restaurants();
    let catalog = MenuCatalog::build(&document).unwrap();

    for record in document["restaurants"].as_array().unwrap() {
        let id = record["id"].as_str().unwrap();
        let restaurant = catalog.find_restaurant(id).unwrap();

        assert_eq!(restaurant.name, record["name"].as_str().unwrap());
        assert_eq!(restaurant.description.as_deref(), record["description"].as_str());
        assert_eq!(restaurant.image.as_deref(), record["image"].as_str());

        let expected_categories = record["categories"].as_array().map_or(0, Vec::len);
        assert_eq!(restaurant.categories.len(), expected_categories);
    }

    let kebap = catalog.find_restaurant("kebap").unwrap();
    let drinks = catalog.find_category(kebap, "İçecek").unwrap();
    assert_eq!(drinks.products[0].currency.as_deref(), Some("TL"));
    assert_eq!(kebap.categories[0].products[0].tags, ["acılı"]);
}

#[test]
fn unknown_restaurant_leaves_session_unchanged() {
    let mut controller = controller_for(&two_restaurants());

    for setup in [None, Some("kebap")] {
        if let Some(id) = setup {
            controller.open_restaurant(id);
        }
        let before = controller.session().clone();
        controller.open_restaurant("missing");
        controller.open_restaurant("missing");
        assert_eq!(controller.session(), &before);
    }
}

#[test]
fn opening_selects_first_category_and_its_products() {
    let mut controller = controller_for(&two_restaurants());
    controller.open_restaurant("kebap");

    let RenderDescriptor::Menu(menu) = controller.render() else {
        panic!("expected menu");
    };

    let selected: Vec<_> = menu
        .categories
        .iter()
        .filter(|label| label.selected)
        .map(|label| label.name.as_str())
        .collect();
    assert_eq!(selected, ["Kebap"]);

    let names: Vec<_> = menu.products.cards().iter().map(|card| card.name.as_str()).collect();
    assert_eq!(names, ["Adana"]);
    assert_eq!(menu.products.cards()[0].price, "320,00 ₺");
}

#[test]
fn unknown_category_differs_from_restaurant_without_categories() {
    let mut controller = controller_for(&two_restaurants());

    controller.open_restaurant("kebap");
    controller.select_category("nonexistent");
    let RenderDescriptor::Menu(missing_category) = controller.render() else {
        panic!("expected menu");
    };

    controller.open_restaurant("empty");
    let RenderDescriptor::Menu(no_categories) = controller.render() else {
        panic!("expected menu");
    };

    assert_eq!(missing_category.products, ProductSection::NoProducts);
    assert_eq!(no_categories.products, ProductSection::NoCategories);
    assert_ne!(missing_category.products.notice(), no_categories.products.notice());
    assert!(no_categories.categories.is_empty());
}

#[test]
fn pizzeria_scenario() {
    let document = json!({
        "restaurants": [{
            "id": "r1",
            "name": "Pizzeria",
            "categories": [{ "name": "Pizza", "products": [{ "name": "Margherita", "price": 12.5 }] }]
        }]
    });
    let mut controller = controller_for(&document);
    controller.open_restaurant("r1");

    let RenderDescriptor::Menu(menu) = controller.render() else {
        panic!("expected menu");
    };

    assert_eq!(menu.header.name, "Pizzeria");
    assert_eq!(menu.header.description, "");
    assert_eq!(menu.categories.len(), 1);
    assert_eq!(menu.categories[0].name, "Pizza");
    assert!(menu.categories[0].selected);

    let cards = menu.products.cards();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].name, "Margherita");
    assert_eq!(cards[0].price, "12,50 ₺");
}

#[test]
fn about_then_restaurants_keeps_selection() {
    let mut controller = controller_for(&two_restaurants());
    controller.open_restaurant("kebap");
    controller.select_category("İçecek");
    let selection = (
        controller.session().restaurant_id().map(str::to_owned),
        controller.session().category_name().map(str::to_owned),
    );

    controller.apply(Command::ShowAbout);
    controller.apply(Command::ShowRestaurants);

    assert_eq!(controller.session().view(), View::Restaurants);
    assert_eq!(controller.session().restaurant_id().map(str::to_owned), selection.0);
    assert_eq!(controller.session().category_name().map(str::to_owned), selection.1);
    assert!(matches!(controller.render(), RenderDescriptor::Restaurants(_)));

    assert!(controller.apply(Command::ShowView(View::Menu)));
    let RenderDescriptor::Menu(menu) = controller.render() else {
        panic!("expected menu");
    };
    assert!(menu.categories.iter().any(|label| label.name == "İçecek" && label.selected));
}
