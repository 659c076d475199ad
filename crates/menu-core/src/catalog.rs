use super::error::{json_kind, LoadError, ValidationError};
use super::models::{Category, Restaurant};

use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeSet, HashMap};

const RESTAURANTS_KEY: &str = "restaurants";

#[derive(Debug, Clone, Default)]
pub struct MenuCatalog {
    restaurants: Vec<Restaurant>,
    restaurants_map: HashMap<String, usize>,
}

impl MenuCatalog {

    /// Validates a parsed document. A missing or `null` `restaurants` field
    /// yields an empty catalog; duplicate ids are kept and resolve to the
    /// first occurrence.
    pub fn build(document: &Value) -> Result<Self, ValidationError> {
        let Value::Object(fields) = document else {
            return Err(ValidationError::NotAnObject { found: json_kind(document) });
        };

        let restaurants = match fields.get(RESTAURANTS_KEY) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(records)) => Self::read_restaurants(records)?,
            Some(other) => {
                return Err(ValidationError::RestaurantsNotSequence { found: json_kind(other) });
            }
        };

        let restaurants_map = Self::build_restaurant_id_index(&restaurants);
        tracing::info!(restaurants = restaurants.len(), "menu catalog built");

        Ok(Self { restaurants, restaurants_map })
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, LoadError> {
        let document: Value = serde_json::from_slice(bytes)?;
        Self::build(&document).map_err(LoadError::from)
    }

    fn read_restaurants(records: &[Value]) -> Result<Vec<Restaurant>, ValidationError> {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                Restaurant::deserialize(record)
                    .map_err(|source| ValidationError::Restaurant { index, source })
            })
            .collect()
    }

    fn build_restaurant_id_index(restaurants: &[Restaurant]) -> HashMap<String, usize> {
        let mut index = HashMap::with_capacity(restaurants.len());
        for (position, restaurant) in restaurants.iter().enumerate() {
            index.entry(restaurant.id.clone()).or_insert(position);
        }
        index
    }

    #[must_use]
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    #[must_use]
    pub fn find_restaurant(&self, id: &str) -> Option<&Restaurant> {
        self.restaurants_map
            .get(id)
            .and_then(|&position| self.restaurants.get(position))
    }

    #[must_use]
    pub fn find_category<'a>(&self, restaurant: &'a Restaurant, name: &str) -> Option<&'a Category> {
        restaurant.category(name)
    }

    #[must_use]
    pub fn image_names(&self) -> BTreeSet<&str> {
        let restaurant_images = self.restaurants.iter().map(|restaurant| &restaurant.image);
        let product_images = self.restaurants
            .iter()
            .flat_map(|restaurant| &restaurant.categories)
            .flat_map(|category| &category.products)
            .map(|product| &product.image);

        restaurant_images
            .chain(product_images)
            .filter_map(Option::as_deref)
            .filter(|name| !name.is_empty())
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_document() -> Value {
        json!({
            "restaurants": [
                {
                    "id": "r1",
                    "name": "Pizzeria",
                    "description": "Odun fırını",
                    "image": "pizzeria.jpg",
                    "categories": [
                        { "name": "Pizza", "products": [{ "name": "Margherita", "price": 12.5 }] },
                        { "name": "İçecek" }
                    ]
                },
                { "id": "r2", "name": "Balıkçı" }
            ]
        })
    }

    #[test]
    fn build_preserves_document_order() {
        let catalog = MenuCatalog::build(&sample_document()).unwrap();
        let ids: Vec<_> = catalog.restaurants().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["r1", "r2"]);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn missing_restaurants_is_an_empty_catalog() {
        let catalog = MenuCatalog::build(&json!({})).unwrap();
        assert!(catalog.is_empty());

        let catalog = MenuCatalog::build(&json!({ "restaurants": null })).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn non_object_document_is_rejected() {
        let error = MenuCatalog::build(&json!([1, 2])).unwrap_err();
        assert!(matches!(error, ValidationError::NotAnObject { found: "an array" }));
    }

    #[test]
    fn non_array_restaurants_is_rejected() {
        let error = MenuCatalog::build(&json!({ "restaurants": "none" })).unwrap_err();
        assert!(matches!(error, ValidationError::RestaurantsNotSequence { found: "a string" }));
    }

    #[test]
    fn malformed_restaurant_reports_its_index() {
        let document = json!({ "restaurants": [{ "id": "r1", "name": "A" }, { "id": "r2" }] });
        let error = MenuCatalog::build(&document).unwrap_err();
        assert!(matches!(error, ValidationError::Restaurant { index: 1, .. }));
    }

    #[test]
    fn duplicate_ids_resolve_to_first_match() {
        let document = json!({
            "restaurants": [
                { "id": "dup", "name": "First" },
                { "id": "dup", "name": "Second" }
            ]
        });
        let catalog = MenuCatalog::build(&document).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find_restaurant("dup").unwrap().name, "First");
    }

    #[test]
    fn lookups_miss_without_error() {
        let catalog = MenuCatalog::build(&sample_document()).unwrap();
        assert!(catalog.find_restaurant("missing").is_none());

        let restaurant = catalog.find_restaurant("r1").unwrap();
        assert_eq!(catalog.find_category(restaurant, "Pizza").unwrap().products.len(), 1);
        assert!(catalog.find_category(restaurant, "Tatlı").is_none());
    }

    #[test]
    fn image_names_skip_unnamed_and_repeat_images() {
        let document = json!({
            "restaurants": [
                {
                    "id": "r1",
                    "name": "Pizzeria",
                    "image": "pizzeria.jpg",
                    "categories": [{
                        "name": "Pizza",
                        "products": [
                            { "name": "Margherita", "image": "margherita.png" },
                            { "name": "Diavola", "image": "" },
                            { "name": "Marinara", "image": null },
                            { "name": "Capricciosa", "image": "margherita.png" }
                        ]
                    }]
                },
                { "id": "r2", "name": "Balıkçı" }
            ]
        });

        let catalog = MenuCatalog::build(&document).unwrap();
        let names: Vec<_> = catalog.image_names().into_iter().collect();
        assert_eq!(names, ["margherita.png", "pizzeria.jpg"]);
    }

    #[test]
    fn from_slice_separates_parse_and_validation_failures() {
        let parse = MenuCatalog::from_slice(b"{ not json").unwrap_err();
        assert!(matches!(parse, LoadError::Parse(_)));

        let validation = MenuCatalog::from_slice(b"42").unwrap_err();
        assert!(matches!(validation, LoadError::Validation(ValidationError::NotAnObject { .. })));
    }
}
