mod application;
mod config;
mod constants;
mod controllers;
mod images;
mod loader;
mod prelude;
mod renderer;
mod ui;
mod widgets;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    setup_tracing();
    application::Application::new().activate()
}
