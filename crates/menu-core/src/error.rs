use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("menu document must be an object, found {found}")]
    NotAnObject { found: &'static str },
    #[error("`restaurants` must be an array, found {found}")]
    RestaurantsNotSequence { found: &'static str },
    #[error("restaurant at index {index} is malformed: {source}")]
    Restaurant {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{reason}")]
    Fetch { reason: String },
    #[error("menu document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl LoadError {
    pub fn fetch(reason: impl Into<String>) -> Self {
        Self::Fetch { reason: reason.into() }
    }
}

pub(crate) const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
