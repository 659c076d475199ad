use menu_core::{MenuCatalog, NavigationController};

use std::path::PathBuf;
use std::rc::Rc;

fn resources_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../resources")
}

fn bundled_catalog() -> MenuCatalog {
    let bytes = std::fs::read(resources_dir().join("menu.json")).unwrap();
    MenuCatalog::from_slice(&bytes).unwrap()
}

#[test]
fn bundled_document_builds_a_catalog() {
    let catalog = bundled_catalog();
    assert!(!catalog.is_empty());

    let mut controller = NavigationController::new(Rc::new(catalog.clone()));
    for restaurant in catalog.restaurants() {
        assert!(controller.open_restaurant(&restaurant.id));
    }
}

#[test]
fn bundled_images_are_present() {
    let catalog = bundled_catalog();
    let images = resources_dir().join("img");

    assert!(images.join(menu_core::DEFAULT_IMAGE).is_file());
    for name in catalog.image_names() {
        assert!(images.join(name).is_file(), "{name} is not bundled");
    }
}
