//! Infrastructure adapters for goskel.
//!
//! This crate implements the ports defined in `goskel_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod catalog;
pub mod filesystem;
pub mod plugin;
pub mod renderer;
pub mod tooling;

// Re-export commonly used adapters
pub use catalog::{InMemoryCatalog, TemplateOverrideLoader};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use plugin::DylibLoader;
pub use renderer::SimpleRenderer;
pub use tooling::ProcessRunner;
