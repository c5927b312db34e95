//! Application layer for goskel.
//!
//! This layer contains:
//! - **Services**: generation, classification, developer tooling, plugins
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! template text or path conventions itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    ComponentClassifier, GenerationReport, GenerationService, Materializer, PluginService,
    TemplateInfo, ToolingService, WritePolicy,
};

pub use ports::{Filesystem, ModuleLoader, TemplateCatalog, TemplateRenderer, ToolRunner};

pub use error::ApplicationError;
