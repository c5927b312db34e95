//! Unified error handling for goskel core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for goskel core operations.
#[derive(Debug, Error, Clone)]
pub enum GoskelError {
    /// Errors from the domain layer (invalid input, catalog/render failures).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem, processes, modules).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl GoskelError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// The innermost error, looking through `GenerationAborted`.
    pub fn root_cause(&self) -> &GoskelError {
        match self {
            Self::Application(ApplicationError::GenerationAborted { cause, .. }) => {
                cause.root_cause()
            }
            other => other,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type GoskelResult<T> = Result<T, GoskelError>;
