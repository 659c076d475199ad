use crate::config::Config;
use crate::constants::APP_DOCUMENT_URI;
use crate::images::ImageResolver;
use crate::prelude::*;

use gtk::gio;
use menu_core::{LoadError, MenuSource};

pub struct DocumentLoader {
    file: gio::File,
}

impl DocumentLoader {

    pub fn bundled() -> Self {
        Self::for_file(gio::File::for_uri(APP_DOCUMENT_URI))
    }

    pub const fn for_file(file: gio::File) -> Self {
        Self { file }
    }

    pub fn resolve(opened: Option<gio::File>, config: &Config) -> Self {
        if let Some(file) = opened {
            return Self::for_file(file);
        }

        config.document
            .as_ref()
            .map_or_else(Self::bundled, |path| Self::for_file(gio::File::for_path(path)))
    }

    pub const fn file(&self) -> &gio::File {
        &self.file
    }

    pub fn images(&self) -> ImageResolver {
        ImageResolver::for_document(&self.file)
    }

}

impl MenuSource for DocumentLoader {
    async fn load(&self) -> Result<Vec<u8>, LoadError> {
        tracing::debug!(uri = %self.file.uri(), "loading menu document");

        let (bytes, _etag) = self.file
            .load_contents_future()
            .await
            .map_err(|error| LoadError::fetch(error.message()))?;

        Ok(bytes.to_vec())
    }
}
