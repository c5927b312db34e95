//! Template catalog: built-in texts plus optional on-disk overrides.

mod builtin;
mod memory;
mod overrides;

pub use builtin::{all_templates, builtin_text};
pub use memory::InMemoryCatalog;
pub use overrides::TemplateOverrideLoader;
