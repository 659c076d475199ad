use super::product::Product;
use super::null_as_default;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub products: Vec<Product>,
}
