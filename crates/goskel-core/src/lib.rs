//! goskel Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for goskel, a
//! generator of Go Domain-Driven-Design project skeletons.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           goskel-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (Generation, Classifier, Tooling, ...)  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Catalog, Renderer, Filesystem, Tools)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     goskel-adapters (Infrastructure)    │
//! │ (InMemoryCatalog, LocalFilesystem, ...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (TemplateId, GenerationPlan, Router)   │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use goskel_core::{
//!     application::{GenerationService, WritePolicy},
//!     domain::{ComponentName, GenerationPlan},
//! };
//!
//! # fn run(service: GenerationService) -> goskel_core::error::GoskelResult<()> {
//! let name = ComponentName::parse("Order")?;
//! let plan = GenerationPlan::usecase(&name);
//! let report = service.execute(&plan, Path::new("."), WritePolicy::RejectExisting)?;
//! println!("{} files written", report.file_count());
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ComponentClassifier, GenerationReport, GenerationService, PluginService, ToolingService,
        WritePolicy,
        ports::{Filesystem, ModuleLoader, TemplateCatalog, TemplateRenderer, ToolRunner},
    };
    pub use crate::domain::{
        ComponentKind, ComponentName, DevTool, DocFormat, GenerationPlan, PlaceholderMap,
        ProjectConfig, Router, Template, TemplateId,
    };
    pub use crate::error::{GoskelError, GoskelResult};
}

/// Version of the goskel-core crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
