//! Local filesystem adapter using std::fs.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use goskel_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{GoskelError, GoskelResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> GoskelResult<()> {
        std::fs::create_dir_all(path).map_err(|e| {
            ApplicationError::DirectoryCreateError {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> GoskelResult<()> {
        std::fs::write(path, content).map_err(|e| write_error(path, e))
    }

    fn create_new_file(&self, path: &Path, content: &str) -> GoskelResult<()> {
        // create_new is atomic: a file appearing after the pre-flight check
        // still fails here instead of being truncated.
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| write_error(path, e))?;
        file.write_all(content.as_bytes())
            .map_err(|e| write_error(path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

fn write_error(path: &Path, e: io::Error) -> GoskelError {
    match e.kind() {
        io::ErrorKind::AlreadyExists => ApplicationError::FileAlreadyExists {
            path: path.to_path_buf(),
        },
        _ => ApplicationError::FileWriteError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        },
    }
    .into()
}
