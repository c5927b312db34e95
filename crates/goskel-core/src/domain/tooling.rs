//! Fixed external-tool invocations.
//!
//! goskel never builds a command line from user input: every program it
//! runs, and every argument it passes, is listed here.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::domain::error::DomainError;
use crate::domain::template::TemplateId;

pub const ARCH_URL: &str = "http://localhost:7878";
pub const DOCS_USAGE: &str = "Unsupported documentation type. Use --type [markdown|openapi]";

/// A child process to run, blocking, with fixed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
    /// Shown when `program` is not on the search path.
    pub install_hint: Option<String>,
}

impl ToolInvocation {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            working_dir: None,
            install_hint: None,
        }
    }

    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn with_install_hint(mut self, hint: impl Into<String>) -> Self {
        self.install_hint = Some(hint.into());
        self
    }

    /// `program arg1 arg2`, for logs and error messages.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Interactive call-graph server for the current module.
    pub fn architecture_graph() -> Self {
        Self::new(
            "go-callvis",
            ["-focus", ".", "-group", "pkg,type", "-http", ":7878"],
        )
        .with_install_hint("go install github.com/ofabry/go-callvis@latest")
    }

    pub fn markdown_docs() -> Self {
        Self::new("godoc2md", ["./..."])
    }

    pub fn openapi_docs() -> Self {
        Self::new("swag", ["init"])
    }
}

impl fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

// ── Documentation ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocFormat {
    Markdown,
    OpenApi,
}

impl DocFormat {
    pub fn invocation(&self) -> ToolInvocation {
        match self {
            Self::Markdown => ToolInvocation::markdown_docs(),
            Self::OpenApi => ToolInvocation::openapi_docs(),
        }
    }

    /// Where the generated documentation ends up.
    pub const fn output(&self) -> &'static str {
        match self {
            Self::Markdown => "README.md",
            Self::OpenApi => "docs/",
        }
    }
}

impl FromStr for DocFormat {
    type Err = DomainError;

    /// Case-insensitive: `Markdown`, `OPENAPI` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "markdown" => Ok(Self::Markdown),
            "openapi" => Ok(Self::OpenApi),
            _ => Err(DomainError::UnsupportedOption {
                option: "--type",
                value: s.to_string(),
                usage: DOCS_USAGE,
            }),
        }
    }
}

impl fmt::Display for DocFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markdown => f.write_str("markdown"),
            Self::OpenApi => f.write_str("openapi"),
        }
    }
}

// ── Developer experience ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DevTool {
    Lint,
    Air,
    Telemetry,
}

impl DevTool {
    pub fn installer(&self) -> ToolInvocation {
        match self {
            Self::Lint => ToolInvocation::new(
                "go",
                [
                    "install",
                    "github.com/golangci/golangci-lint/cmd/golangci-lint@latest",
                ],
            ),
            Self::Air => ToolInvocation::new("go", ["install", "github.com/cosmtrek/air@latest"]),
            Self::Telemetry => ToolInvocation::new("go", ["get", "go.opentelemetry.io/otel"]),
        }
        .with_install_hint("Install the Go toolchain: https://go.dev/dl/")
    }

    /// Configuration file written after a successful install, if any.
    pub const fn config_file(&self) -> Option<(&'static str, TemplateId)> {
        match self {
            Self::Lint => Some((".golangci.yml", TemplateId::LintConfig)),
            Self::Air => Some(("air.toml", TemplateId::ReloadConfig)),
            Self::Telemetry => None,
        }
    }

    /// Follow-up instruction printed once setup completes.
    pub const fn next_step(&self) -> &'static str {
        match self {
            Self::Lint => "Linting setup complete. Use 'golangci-lint run' to lint your code.",
            Self::Air => "Air setup complete. Use 'air' to start live reload.",
            Self::Telemetry => "Telemetry setup complete. Add instrumentation to your code.",
        }
    }
}

impl fmt::Display for DevTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lint => f.write_str("lint"),
            Self::Air => f.write_str("air"),
            Self::Telemetry => f.write_str("telemetry"),
        }
    }
}
