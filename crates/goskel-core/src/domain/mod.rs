// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for goskel.
//!
//! Pure values and pure functions only:
//!
//! - **No I/O**: plans describe files, they never write them
//! - **No child processes**: tool invocations are data
//! - **Deterministic**: the same name and flags always yield the same plan
//!
pub mod common;
pub mod component;
pub mod error;
pub mod plan;
pub mod project;
pub mod template;
pub mod tooling;

pub use common::{ComponentName, RelativePath};
pub use component::{ComponentKind, MOCKS_ROOT};
pub use error::{DomainError, ErrorCategory};
pub use plan::{GenerationPlan, MONOREPO_SKELETON, PROJECT_SKELETON, PlanEntry, PlanKind};
pub use project::{ProjectConfig, Router};
pub use template::{PlaceholderMap, Template, TemplateId, TemplateSource};
pub use tooling::{ARCH_URL, DOCS_USAGE, DevTool, DocFormat, ToolInvocation};
