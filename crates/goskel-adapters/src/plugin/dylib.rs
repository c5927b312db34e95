//! Shared-library probe using `libloading`.

use std::path::Path;

use tracing::{debug, instrument};

use goskel_core::{
    application::{ApplicationError, ports::ModuleLoader},
    error::GoskelResult,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct DylibLoader;

impl DylibLoader {
    pub fn new() -> Self {
        Self
    }
}

impl ModuleLoader for DylibLoader {
    #[instrument(skip_all, fields(path = %path.display()))]
    fn probe(&self, path: &Path) -> GoskelResult<()> {
        if !path.is_file() {
            return Err(ApplicationError::PluginLoadFailed {
                path: path.to_path_buf(),
                reason: "no such file".into(),
            }
            .into());
        }

        // SAFETY: opening a library runs its platform initialisers. The user
        // asked for this exact file to be installed as a plugin; no symbol is
        // resolved or called, and the handle is dropped immediately.
        let library = unsafe { libloading::Library::new(path) }.map_err(|e| {
            ApplicationError::PluginLoadFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;
        debug!("module opened");

        library.close().map_err(|e| {
            ApplicationError::PluginLoadFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}
