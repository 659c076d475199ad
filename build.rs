use anyhow::{Context, Result, bail, ensure};
use menu_core::MenuCatalog;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const BUNDLE_FILE_NAME: &str = "menu-browser.gresource";
const TEMPLATE_PATTERN: &str = r#"(?s)<template\s+class="([^"]+)"[^>]*>.*?</template>"#;
const METADATA_KEYS: [&str; 4] = ["id", "prefix", "title", "author"];

struct Paths {
    manifest: PathBuf,
    resources: PathBuf,
    out: PathBuf,
}

impl Paths {
    fn from_env() -> Result<Self> {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let out = PathBuf::from(std::env::var("OUT_DIR").context("OUT_DIR is not set")?);
        Ok(Self {
            manifest: root.join("Cargo.toml"),
            resources: root.join("resources"),
            out,
        })
    }

    fn resource(&self, name: &str) -> PathBuf {
        self.resources.join(name)
    }

    fn images(&self) -> PathBuf {
        self.resources.join("img")
    }
}

// `[package.metadata]` values, exported as APP_<KEY>.
fn read_metadata(manifest: &Path) -> Result<BTreeMap<&'static str, String>> {
    let text = fs::read_to_string(manifest).context("Failed to read Cargo.toml")?;
    let table: toml::Table = text.parse().context("Failed to parse Cargo.toml")?;
    let metadata = table
        .get("package")
        .and_then(|package| package.get("metadata"))
        .context("Missing [package.metadata] in Cargo.toml")?;

    METADATA_KEYS
        .into_iter()
        .map(|key| {
            let value = metadata
                .get(key)
                .and_then(toml::Value::as_str)
                .with_context(|| format!("[package.metadata] {key} is missing or not a string"))?;
            Ok((key, value.to_owned()))
        })
        .collect()
}

// Writes one `<snake_case>.ui` per template class and returns their names.
fn split_templates(source: &str, out: &Path) -> Result<Vec<String>> {
    let pattern = Regex::new(TEMPLATE_PATTERN)?;
    let mut names = Vec::new();

    for capture in pattern.captures_iter(source) {
        let (Some(whole), Some(class)) = (capture.get(0), capture.get(1)) else { continue };
        let name = format!("{}.ui", heck::AsSnakeCase(class.as_str()));
        ensure!(!names.contains(&name), "Template {} is defined twice in ui.xml", class.as_str());

        let document = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<interface>{}</interface>",
            whole.as_str()
        );
        fs::write(out.join(&name), document)?;
        names.push(name);
    }

    ensure!(!names.is_empty(), "ui.xml contains no templates");
    names.sort();
    Ok(names)
}

fn list_images(directory: &Path) -> Result<Vec<String>> {
    let mut names = fs::read_dir(directory)
        .with_context(|| format!("Failed to list {}", directory.display()))?
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect::<Vec<_>>();

    names.sort();
    Ok(names)
}

// The bundled document must load, and every image it names must be bundled.
fn check_bundled_menu(document: &Path, images: &[String]) -> Result<()> {
    let bytes = fs::read(document).context("Failed to read the bundled menu.json")?;
    let catalog = MenuCatalog::from_slice(&bytes)
        .map_err(|error| anyhow::anyhow!("Bundled menu.json is invalid: {error}"))?;

    let missing: Vec<_> = catalog
        .image_names()
        .into_iter()
        .filter(|name| !images.iter().any(|image| image.as_str() == *name))
        .collect();

    if !missing.is_empty() {
        bail!("Bundled menu.json names images missing from resources/img: {}", missing.join(", "));
    }

    Ok(())
}

fn fill_placeholder(text: &str, placeholder: &str, value: &str, expected: usize) -> Result<String> {
    let marker = format!("@{placeholder}@");
    let found = text.matches(&marker).count();
    ensure!(found == expected, "Expected {expected} {marker} in the gresource manifest, found {found}");
    Ok(text.replace(&marker, value))
}

fn file_entries(names: &[String], directory: Option<&str>, compressed: bool) -> String {
    names
        .iter()
        .map(|name| {
            let source = directory.map_or_else(|| name.clone(), |directory| format!("{directory}/{name}"));
            format!("<file compressed=\"{compressed}\" alias=\"{name}\">{source}</file>")
        })
        .collect::<Vec<_>>()
        .join("\n    ")
}

fn write_manifest(paths: &Paths, prefix: &str, templates: &[String], images: &[String]) -> Result<PathBuf> {
    let template = fs::read_to_string(paths.resource("resources.gresource.xml.in"))?;
    let manifest = fill_placeholder(&template, "APP_PREFIX", prefix, 2)?;
    let manifest = fill_placeholder(&manifest, "APP_TEMPLATES", &file_entries(templates, None, true), 1)?;
    let manifest = fill_placeholder(&manifest, "APP_IMAGES", &file_entries(images, Some("img"), false), 1)?;

    let path = paths.out.join("resources.gresource.xml");
    fs::write(&path, manifest)?;
    Ok(path)
}

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-changed=resources");

    let paths = Paths::from_env()?;
    let metadata = read_metadata(&paths.manifest)?;
    let prefix = metadata.get("prefix").context("Missing resource prefix")?;

    let ui = fs::read_to_string(paths.resource("ui.xml"))?;
    let templates = split_templates(&ui, &paths.out)?;
    let images = list_images(&paths.images())?;
    check_bundled_menu(&paths.resource("menu.json"), &images)?;

    let manifest = write_manifest(&paths, prefix, &templates, &images)?;
    let bundle = paths.out.join(BUNDLE_FILE_NAME);
    glib_build_tools::compile_resources(
        &[&paths.out, &paths.resources],
        manifest.to_str().context("Invalid manifest path")?,
        bundle.to_str().context("Invalid bundle path")?,
    );

    println!("cargo:rustc-env=APP_NAME={}", env!("CARGO_PKG_NAME"));
    println!("cargo:rustc-env=APP_VERSION={}", env!("CARGO_PKG_VERSION"));
    for (key, value) in &metadata {
        println!("cargo:rustc-env=APP_{}={value}", key.to_ascii_uppercase());
    }
    println!("cargo:rustc-env=APP_RESOURCES={}", bundle.display());

    Ok(())
}
