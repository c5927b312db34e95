//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a usecase" or "install the linter".

pub mod classifier;
pub mod generation_service;
pub mod materializer;
pub mod plugin_service;
pub mod tooling_service;

#[cfg(test)]
pub(crate) mod fakes;

pub use classifier::ComponentClassifier;
pub use generation_service::{GenerationReport, GenerationService, TemplateInfo};
pub use materializer::{Materializer, WritePolicy};
pub use plugin_service::PluginService;
pub use tooling_service::ToolingService;
