//! Filesystem materializer - the only place generated output touches disk.

use std::path::Path;

use tracing::{debug, trace};

use crate::{application::ports::Filesystem, error::GoskelResult};

/// What to do when a target file already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WritePolicy {
    /// Fail with `FileAlreadyExists`.
    #[default]
    RejectExisting,
    /// Replace the file's content.
    Overwrite,
}

impl WritePolicy {
    pub fn from_force(force: bool) -> Self {
        if force {
            Self::Overwrite
        } else {
            Self::RejectExisting
        }
    }
}

/// Creates directories and writes files through the [`Filesystem`] port.
///
/// No rollback: every successful call is a permanent, externally visible
/// effect.
pub struct Materializer {
    filesystem: Box<dyn Filesystem>,
}

impl Materializer {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Create `path` and any missing ancestors. Succeeds if already present.
    pub fn ensure_directory(&self, path: &Path) -> GoskelResult<()> {
        trace!(path = %path.display(), "ensure directory");
        self.filesystem.create_dir_all(path)
    }

    /// Write `content` to `path`, creating parent directories as needed.
    pub fn write_file(&self, path: &Path, content: &str, policy: WritePolicy) -> GoskelResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                self.ensure_directory(parent)?;
            }
        }

        debug!(path = %path.display(), bytes = content.len(), ?policy, "write file");
        match policy {
            WritePolicy::RejectExisting => self.filesystem.create_new_file(path, content),
            WritePolicy::Overwrite => self.filesystem.write_file(path, content),
        }
    }

    /// `true` if writing `path` under `policy` would be rejected.
    pub fn would_collide(&self, path: &Path, policy: WritePolicy) -> bool {
        policy == WritePolicy::RejectExisting && self.filesystem.exists(path)
    }
}
