//! Application layer errors.
//!
//! These errors represent failures while touching the outside world
//! (filesystem, child processes, shared modules). Value-level failures are
//! `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::{ErrorCategory, GoskelError};

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A directory could not be created.
    #[error("Failed to create directory {path}: {reason}")]
    DirectoryCreateError { path: PathBuf, reason: String },

    /// A file could not be written.
    #[error("Failed to write file {path}: {reason}")]
    FileWriteError { path: PathBuf, reason: String },

    /// A file is already present and the write policy forbids replacing it.
    #[error("File already exists: {path}")]
    FileAlreadyExists { path: PathBuf },

    /// No canonical root contains a directory with this name.
    #[error("Unknown component type: {name}")]
    UnknownComponent { name: String },

    /// The program is not on the search path.
    #[error("{tool} not found")]
    ExternalToolMissing { tool: String, hint: Option<String> },

    /// The program ran and reported failure.
    #[error("{command} failed: {reason}")]
    ExternalToolFailed { command: String, reason: String },

    /// A plan stopped at its first failing entry.
    #[error("Generation stopped at {at}: {cause}")]
    GenerationAborted {
        at: PathBuf,
        #[source]
        cause: Box<GoskelError>,
        written: Vec<PathBuf>,
        pending: Vec<PathBuf>,
    },

    /// A template override directory or file could not be read.
    #[error("Failed to load templates from {path}: {reason}")]
    TemplateLoadFailed { path: PathBuf, reason: String },

    /// A shared module could not be opened.
    #[error("Error loading plugin {path}: {reason}")]
    PluginLoadFailed { path: PathBuf, reason: String },

    /// Lock poisoned in a shared adapter.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DirectoryCreateError { path, .. } | Self::FileWriteError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::FileAlreadyExists { path } => vec![
                format!("'{}' would be overwritten", path.display()),
                "Use --force to overwrite (destructive)".into(),
                "Or remove the file first if it holds nothing you need".into(),
            ],
            Self::UnknownComponent { name } => vec![
                format!("'{name}' is not a domain, usecase or handler yet"),
                format!("Create it first, e.g.: goskel domain {name}"),
                "Run the command from the project root".into(),
            ],
            Self::ExternalToolMissing { tool, hint } => {
                let mut out = vec![format!("{tool} not found. Please install it first:")];
                if let Some(hint) = hint {
                    out.push(hint.clone());
                }
                out
            }
            Self::ExternalToolFailed { .. } => vec![
                "Check the command output above for details".into(),
                "Ensure the command is installed and in your PATH".into(),
            ],
            Self::GenerationAborted {
                cause,
                written,
                pending,
                ..
            } => {
                let mut out = cause.suggestions();
                if !written.is_empty() {
                    out.push(format!("Already written ({}):", written.len()));
                    out.extend(written.iter().map(|p| format!("  • {}", p.display())));
                }
                if !pending.is_empty() {
                    out.push(format!("Not written ({}):", pending.len()));
                    out.extend(pending.iter().map(|p| format!("  • {}", p.display())));
                }
                out
            }
            Self::TemplateLoadFailed { .. } => vec![
                "Check templates.local_path in your config or $GOSKEL_TEMPLATES_DIR".into(),
                "Override files must be named <template-id>.tmpl (see `goskel list`)".into(),
            ],
            Self::PluginLoadFailed { .. } => vec![
                "Plugins must be compiled as shared libraries (.so/.dylib/.dll)".into(),
                "Check that the file exists and matches this platform".into(),
            ],
            Self::LockPoisoned => vec!["This is a bug, please report it".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FileAlreadyExists { .. } => ErrorCategory::Validation,
            Self::UnknownComponent { .. } | Self::ExternalToolMissing { .. } => {
                ErrorCategory::NotFound
            }
            Self::GenerationAborted { cause, .. } => cause.category(),
            Self::DirectoryCreateError { .. }
            | Self::FileWriteError { .. }
            | Self::ExternalToolFailed { .. }
            | Self::TemplateLoadFailed { .. }
            | Self::PluginLoadFailed { .. }
            | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
