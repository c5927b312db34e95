//! Error presentation for the goskel CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//!
//! Every reported failure exits with status 1.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use goskel_core::error::GoskelError;

pub use goskel_core::error::ErrorCategory as CoreCategory;

const VERBOSE_HINT: &str = "Use -v / --verbose for more details.";

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input the core never sees (e.g. a bad config key).
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error propagated from `goskel-core` or an adapter.
    #[error(transparent)]
    Core(#[from] GoskelError),

    /// An I/O operation outside the generation pipeline failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The user declined or aborted a prompt.
    #[error("Operation cancelled")]
    Cancelled,
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Hints printed under the message; may be empty.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message, .. } => vec![
                format!("Check your input: {message}"),
                "Use --help for usage information".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {message}"),
                format!(
                    "Check your config file at {}",
                    crate::config::AppConfig::config_path().display()
                ),
                "Use 'goskel config init' to create a default config".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions".into(),
            ],

            Self::Cancelled => vec!["No changes were made".into()],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } | Self::Cancelled => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS. Categories only change styling.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Every `source()` below this error, outermost first.
    fn causes(&self) -> impl Iterator<Item = &(dyn Error + 'static)> {
        std::iter::successors(self.source(), |&err| err.source())
    }

    /// Terminal rendering: red headline, dimmed cause chain, yellow hints.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut out = format!(
            "\n{} {}\n\n  {}\n",
            "✗".red().bold(),
            "Error:".red().bold(),
            self.to_string().red()
        );

        if verbose {
            for cause in self.causes() {
                out.push_str(&format!("\n  {} {}\n", "→".dimmed(), cause.to_string().dimmed()));
            }
        }

        self.push_suggestions(&mut out, &"Suggestions:".yellow().bold().to_string());

        if !verbose {
            out.push_str(&format!(
                "\n{} {}\n",
                "\u{2139}".blue(),
                VERBOSE_HINT.dimmed()
            ));
        }
        out
    }

    /// Same layout as [`Self::format_colored`] without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = format!("\nError: {self}\n");

        if verbose {
            for cause in self.causes() {
                out.push_str(&format!("  Caused by: {cause}\n"));
            }
        }

        self.push_suggestions(&mut out, "Suggestions:");

        if !verbose {
            out.push_str(&format!("\n{VERBOSE_HINT}\n"));
        }
        out
    }

    fn push_suggestions(&self, out: &mut String, heading: &str) {
        let suggestions = self.suggestions();
        if suggestions.is_empty() {
            return;
        }
        out.push_str(&format!("\n{heading}\n"));
        for suggestion in suggestions {
            out.push_str(&format!("  {suggestion}\n"));
        }
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        for cause in self.causes() {
            tracing::debug!("Caused by: {}", cause);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments, existing files).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert foreign error types into [`CliError`] at
/// call-sites with a descriptive context message.
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goskel_core::{
        application::ApplicationError,
        domain::{DOCS_USAGE, DocFormat},
    };
    use std::{io, path::PathBuf};

    fn core(err: impl Into<GoskelError>) -> CliError {
        CliError::Core(err.into())
    }

    #[test]
    fn every_error_exits_one() {
        let errors = [
            CliError::InvalidInput {
                message: "x".into(),
                source: None,
            },
            CliError::ConfigError {
                message: "x".into(),
                source: None,
            },
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            },
            CliError::Cancelled,
            core(ApplicationError::UnknownComponent {
                name: "Ghost".into(),
            }),
        ];
        for err in errors {
            assert_eq!(err.exit_code(), 1, "{err}");
        }
    }

    #[test]
    fn unsupported_doc_type_suggests_usage() {
        let err = core("bogus".parse::<DocFormat>().unwrap_err());
        assert_eq!(err.suggestions(), vec![DOCS_USAGE.to_string()]);
        assert_eq!(err.category(), ErrorCategory::UserError);
    }

    #[test]
    fn existing_file_suggests_force() {
        let err = core(ApplicationError::FileAlreadyExists {
            path: PathBuf::from("internal/core/Order/entity.go"),
        });
        assert!(err.suggestions().iter().any(|s| s.contains("--force")));
    }

    #[test]
    fn core_message_is_not_prefixed() {
        let err = core(ApplicationError::UnknownComponent {
            name: "Ghost".into(),
        });
        assert_eq!(err.to_string(), "Unknown component type: Ghost");
    }

    #[test]
    fn format_plain_contains_error_header() {
        let err = core(ApplicationError::FileAlreadyExists {
            path: PathBuf::from("/tmp/x"),
        });
        let s = err.format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
    }

    #[test]
    fn format_plain_verbose_omits_hint() {
        let s = CliError::Cancelled.format_plain(true);
        assert!(!s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_cause_chain() {
        let err = CliError::IoError {
            message: "writing config".into(),
            source: io::Error::other("disk full"),
        };
        assert!(err.format_plain(true).contains("Caused by: disk full"));
    }

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading config");
        assert!(matches!(cli, Err(CliError::IoError { ref message, .. }) if message == "reading config"));
    }
}
