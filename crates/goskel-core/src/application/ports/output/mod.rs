//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `goskel-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{PlaceholderMap, Template, TemplateId, ToolInvocation};
use crate::error::GoskelResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `goskel_adapters::filesystem::LocalFilesystem` (production)
/// - `goskel_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Succeeds if present.
    fn create_dir_all(&self, path: &Path) -> GoskelResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> GoskelResult<()>;

    /// Create a file that must not exist yet. Fails with
    /// `ApplicationError::FileAlreadyExists` otherwise.
    fn create_new_file(&self, path: &Path, content: &str) -> GoskelResult<()>;

    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Port for template lookup.
///
/// Implemented by:
/// - `goskel_adapters::catalog::InMemoryCatalog` (built-ins + overrides)
pub trait TemplateCatalog: Send + Sync {
    /// Fetch a template. Fails with `DomainError::UnknownTemplate` if the id
    /// has no registered text.
    fn lookup(&self, id: TemplateId) -> GoskelResult<Template>;

    /// Every registered template, in `TemplateId` order.
    fn list(&self) -> GoskelResult<Vec<Template>>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `goskel_adapters::renderer::SimpleRenderer` (marker substitution)
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, template: &Template, values: &PlaceholderMap) -> GoskelResult<String>;
}

/// Port for running external programs.
///
/// Every call blocks until the child exits. There is no timeout.
///
/// Implemented by:
/// - `goskel_adapters::tooling::ProcessRunner`
#[cfg_attr(test, mockall::automock)]
pub trait ToolRunner: Send + Sync {
    /// Resolve a program on the search path.
    fn locate(&self, program: &str) -> Option<PathBuf>;

    /// Run with inherited stdio. A non-zero exit is
    /// `ApplicationError::ExternalToolFailed`; a program that cannot be
    /// spawned because it does not exist is `ExternalToolMissing`.
    fn run(&self, invocation: &ToolInvocation) -> GoskelResult<()>;

    /// Run and return stdout followed by stderr.
    fn capture(&self, invocation: &ToolInvocation) -> GoskelResult<Vec<u8>>;
}

/// Port for probing shared modules.
///
/// Implemented by:
/// - `goskel_adapters::plugin::DylibLoader`
#[cfg_attr(test, mockall::automock)]
pub trait ModuleLoader: Send + Sync {
    /// Open the module and close it again. Nothing inside is called.
    fn probe(&self, path: &Path) -> GoskelResult<()>;
}
