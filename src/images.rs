use crate::constants::APP_DEFAULT_IMAGE_URI;
use crate::prelude::*;

use gtk::{gdk, gio};
use menu_core::DEFAULT_IMAGE;
use std::cell::RefCell;
use std::collections::HashMap;

const IMAGE_DIRECTORY: &str = "img";
const MISSING_IMAGE_ICON: &str = "image-missing-symbolic";

pub struct ImageResolver {
    directory: gio::File,
    cache: RefCell<HashMap<String, Option<gdk::Texture>>>,
}

impl ImageResolver {

    pub fn for_document(document: &gio::File) -> Self {
        let directory = document
            .parent()
            .unwrap_or_else(|| document.clone())
            .child(IMAGE_DIRECTORY);

        Self { directory, cache: RefCell::default() }
    }

    pub fn apply(&self, image: &gtk::Image, name: &str) {
        match self.texture(name) {
            Some(texture) => image.set_paintable(Some(&texture)),
            None => image.set_icon_name(Some(MISSING_IMAGE_ICON)),
        }
    }

    fn texture(&self, name: &str) -> Option<gdk::Texture> {
        if let Some(cached) = self.cache.borrow().get(name) {
            return cached.clone();
        }

        let texture = self.load(name);
        self.cache.borrow_mut().insert(name.to_owned(), texture.clone());
        texture
    }

    fn load(&self, name: &str) -> Option<gdk::Texture> {
        let file = self.directory.child(name);
        match gdk::Texture::from_file(&file) {
            Ok(texture) => Some(texture),
            Err(error) => {
                if name == DEFAULT_IMAGE {
                    tracing::debug!(uri = %file.uri(), %error, "no default image beside the document");
                } else {
                    tracing::warn!(uri = %file.uri(), %error, "image could not be loaded");
                }
                Self::load_bundled_default()
            }
        }
    }

    fn load_bundled_default() -> Option<gdk::Texture> {
        let file = gio::File::for_uri(APP_DEFAULT_IMAGE_URI);
        gdk::Texture::from_file(&file)
            .inspect_err(|error| tracing::warn!(%error, "bundled default image could not be loaded"))
            .ok()
    }

}
