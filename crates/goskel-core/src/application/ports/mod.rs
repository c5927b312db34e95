//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `goskel-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `TemplateCatalog`: template lookup
//!   - `TemplateRenderer`: placeholder substitution
//!   - `Filesystem`: directory/file operations
//!   - `ToolRunner`: blocking child processes
//!   - `ModuleLoader`: shared-module probing
//!
//! - **Driving (Input) Ports**: the services in `crate::application::services`

pub mod output;

pub use output::{Filesystem, ModuleLoader, TemplateCatalog, TemplateRenderer, ToolRunner};
