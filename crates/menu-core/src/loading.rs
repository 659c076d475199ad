use super::catalog::MenuCatalog;
use super::error::LoadError;
use super::navigation::{Command, NavigationController};
use super::render::RenderDescriptor;

use std::future::Future;
use std::rc::Rc;

const LOAD_FAILURE_PREFIX: &str = "Veri yüklenemedi";

pub trait MenuSource {
    fn load(&self) -> impl Future<Output = Result<Vec<u8>, LoadError>>;
}

pub async fn load_catalog<S: MenuSource>(source: &S) -> Result<MenuCatalog, LoadError> {
    let bytes = source.load().await?;
    let catalog = MenuCatalog::from_slice(&bytes)?;
    tracing::info!(bytes = bytes.len(), restaurants = catalog.len(), "menu document loaded");
    Ok(catalog)
}

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Loading,
    Failed { message: String },
    Ready(RenderDescriptor),
}

#[derive(Default)]
pub enum LoadPhase {
    #[default]
    Pending,
    Ready(NavigationController),
    Failed { message: String },
}

impl LoadPhase {

    /// Settles a pending phase. Only the first completion counts.
    pub fn complete(&mut self, result: Result<MenuCatalog, LoadError>) -> bool {
        if !matches!(self, Self::Pending) {
            tracing::debug!("load already settled; ignoring completion");
            return false;
        }

        *self = match result {
            Ok(catalog) => Self::Ready(NavigationController::new(Rc::new(catalog))),
            Err(error) => {
                tracing::error!(%error, "menu document could not be loaded");
                Self::Failed { message: format!("{LOAD_FAILURE_PREFIX}: {error}") }
            }
        };

        true
    }

    #[must_use]
    pub const fn controller(&self) -> Option<&NavigationController> {
        match self {
            Self::Ready(controller) => Some(controller),
            _ => None,
        }
    }

    /// Forwards a command to the session. Commands arriving before the
    /// catalog, or after a failed load, are dropped.
    pub fn dispatch(&mut self, command: Command) -> bool {
        match self {
            Self::Ready(controller) => controller.apply(command),
            _ => {
                tracing::debug!(?command, "no catalog; dropping command");
                false
            }
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        match self {
            Self::Pending => Screen::Loading,
            Self::Ready(controller) => Screen::Ready(controller.render()),
            Self::Failed { message } => Screen::Failed { message: message.clone() },
        }
    }

}
