mod category;
mod product;
mod restaurant;

use serde::{Deserialize, Deserializer};

pub use self::category::Category;
pub use self::product::Product;
pub use self::restaurant::Restaurant;

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
