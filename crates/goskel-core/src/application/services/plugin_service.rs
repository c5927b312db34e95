//! Plugin management.
//!
//! Installing a plugin only proves the shared module opens on this
//! platform. No registry is persisted, so `list` is always empty and
//! `remove` has nothing to remove.

use std::path::Path;

use tracing::{info, instrument};

use crate::{application::ports::ModuleLoader, error::GoskelResult};

pub struct PluginService {
    loader: Box<dyn ModuleLoader>,
}

impl PluginService {
    pub fn new(loader: Box<dyn ModuleLoader>) -> Self {
        Self { loader }
    }

    /// Open and close the module at `path`; nothing inside it runs.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn install(&self, path: &Path) -> GoskelResult<()> {
        self.loader.probe(path)?;
        info!("plugin module opened");
        Ok(())
    }

    /// Installed plugin names. Always empty.
    pub fn list(&self) -> Vec<String> {
        Vec::new()
    }

    /// No-op; succeeds for any name.
    pub fn remove(&self, name: &str) -> GoskelResult<()> {
        info!(plugin = name, "plugin remove requested, no registry to update");
        Ok(())
    }
}
