pub const APP_RESOURCES: &[u8] = include_bytes!(env!("APP_RESOURCES"));
pub const APP_ID: &str = env!("APP_ID");
pub const APP_NAME: &str = env!("APP_NAME");
pub const APP_VERSION: &str = env!("APP_VERSION");
pub const APP_TITLE: &str = env!("APP_TITLE");
pub const APP_STYLE_RESOURCE: &str = concat!(env!("APP_PREFIX"), "/style.css");
pub const APP_DOCUMENT_URI: &str = concat!("resource://", env!("APP_PREFIX"), "/menu.json");
pub const APP_DEFAULT_IMAGE_URI: &str = concat!("resource://", env!("APP_PREFIX"), "/img/default.svg");
