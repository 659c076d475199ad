use std::ffi::OsString;
use std::path::PathBuf;

pub const DEFAULT_LOG_FILTER: &str = "menu_browser=info,menu_core=info";

const DOCUMENT_VARIABLE: &str = "MENU_BROWSER_DOCUMENT";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub document: Option<PathBuf>,
}

impl Config {

    pub fn from_environment() -> Self {
        Self::from_document_variable(std::env::var_os(DOCUMENT_VARIABLE))
    }

    fn from_document_variable(value: Option<OsString>) -> Self {
        let document = value
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Self { document }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_variable_uses_bundled_document() {
        assert_eq!(Config::from_document_variable(None), Config::default());
    }

    #[test]
    fn empty_variable_is_ignored() {
        let config = Config::from_document_variable(Some(OsString::new()));
        assert!(config.document.is_none());
    }

    #[test]
    fn variable_names_document_path() {
        let config = Config::from_document_variable(Some("/srv/menu/menu.json".into()));
        assert_eq!(config.document, Some(PathBuf::from("/srv/menu/menu.json")));
    }
}
