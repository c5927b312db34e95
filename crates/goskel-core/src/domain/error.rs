// ============================================================================
// domain/error.rs - PURE VALUE-LEVEL FAILURES
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Nothing here touches the filesystem or a child process; these are the
/// failures that can be detected from inputs alone.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Catalog / Rendering
    // ========================================================================
    #[error("Unknown template: {id}")]
    UnknownTemplate { id: String },

    #[error("Template '{template}' references placeholder '{name}' which has no value")]
    MissingPlaceholder { template: String, name: String },

    // ========================================================================
    // Input Validation
    // ========================================================================
    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Unsupported value '{value}' for {option}")]
    UnsupportedOption {
        option: &'static str,
        value: String,
        usage: &'static str,
    },

    // ========================================================================
    // Plan Invariants
    // ========================================================================
    #[error("Duplicate path in generation plan: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownTemplate { id } => vec![
                format!("No template is registered under '{id}'"),
                "Check file names in your template override directory".into(),
            ],
            Self::MissingPlaceholder { template, name } => vec![
                format!("Template '{template}' uses {{{{{name}}}}} but nothing supplies it"),
                "If you overrode this template, only use the placeholders of the built-in one"
                    .into(),
            ],
            Self::InvalidName { .. } => vec![
                "Names become directory and file names".into(),
                "Avoid path separators and a leading '.'".into(),
                "Examples: Order, payment, UserProfile".into(),
            ],
            Self::UnsupportedOption { usage, .. } => vec![(*usage).into()],
            Self::DuplicatePath { path } => vec![
                format!("Two entries target '{path}'"),
                "This is a bug in the generation plan, please report it".into(),
            ],
            Self::AbsolutePathNotAllowed { .. } => {
                vec!["Generated paths are always relative to the working directory".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. } | Self::UnsupportedOption { .. } => ErrorCategory::Validation,
            Self::UnknownTemplate { .. } => ErrorCategory::NotFound,
            Self::MissingPlaceholder { .. }
            | Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
