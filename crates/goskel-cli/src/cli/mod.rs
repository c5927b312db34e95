//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum, builder::PossibleValuesParser};

use goskel_core::domain::project::{
    CACHE_CHOICES, DATABASE_CHOICES, LOGGER_CHOICES, ROUTER_CHOICES,
};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "goskel",
    bin_name = "goskel",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Go Domain-Driven-Design project skeletons",
    long_about = "goskel writes Go project skeletons laid out for Domain-Driven \
                  Design: domains, use cases, handlers, test stubs, whole \
                  projects and monorepos.",
    after_help = "EXAMPLES:\n\
        \x20 goskel init shop --router gin -y\n\
        \x20 goskel domain Order\n\
        \x20 goskel usecase Order && goskel tests Order --with-mocks\n\
        \x20 goskel docs --type openapi\n\
        \x20 goskel completions bash > /usr/share/bash-completion/completions/goskel",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project skeleton with its entry point.
    #[command(
        about = "Initialize a new DDD project",
        long_about = "Creates a new Go project with Domain-Driven Design structure including:\n\
            - cmd/ for command implementations\n\
            - internal/ for core domain logic\n\
            - pkg/ for shared utilities\n\
            - internal/config/ for configuration\n\
            - migrations/ for database migrations",
        after_help = "EXAMPLES:\n\
            \x20 goskel init shop                 # prompts for choices\n\
            \x20 goskel init shop --router chi -y # no prompts"
    )]
    Init(InitArgs),

    /// Domain entity and repository interface.
    #[command(
        about = "Generate a new domain entity",
        long_about = "Creates a new domain entity with:\n\
            - internal/core/<name>/entity.go\n\
            - internal/core/<name>/repository.go"
    )]
    Domain(ComponentArgs),

    /// Use-case service, implementation and models.
    #[command(
        about = "Generate a new use case",
        long_about = "Creates a new use case with:\n\
            - internal/usecase/<name>/service.go\n\
            - internal/usecase/<name>/service_impl.go\n\
            - internal/usecase/<name>/models.go"
    )]
    Usecase(ComponentArgs),

    /// HTTP and gRPC handlers.
    #[command(
        about = "Generate a new handler",
        long_about = "Creates a new handler with:\n\
            - internal/interfaces/<name>/http_handler.go\n\
            - internal/interfaces/<name>/grpc_handler.go"
    )]
    Handler(ComponentArgs),

    /// Test stubs for an existing component.
    #[command(
        about = "Generate test stubs",
        long_about = "Creates test stubs for an existing domain, use case or handler.\n\
            The component is found by looking for its directory under\n\
            internal/core, internal/usecase and internal/interfaces, in that order.",
        after_help = "EXAMPLES:\n\
            \x20 goskel tests Order\n\
            \x20 goskel tests Order --with-mocks"
    )]
    Tests(TestsArgs),

    /// Multi-service repository layout.
    #[command(
        about = "Setup monorepo structure",
        long_about = "Creates a monorepo-compatible folder structure with:\n\
            - services/ for individual services\n\
            - packages/ for shared code\n\
            - scripts/ and deploy/ for tooling"
    )]
    Monorepo(WriteArgs),

    /// Serve the call graph with go-callvis.
    #[command(
        about = "Visualize architecture",
        long_about = "Generates a visualization of the project's architecture using go-callvis.\n\
            Requires go-callvis on PATH; the server runs until interrupted."
    )]
    Arch,

    /// Generate documentation with godoc2md or swag.
    #[command(
        about = "Generate documentation",
        long_about = "Generates project documentation in various formats:\n\
            - markdown: godoc2md output written to README.md\n\
            - openapi: swag init, writing docs/",
        after_help = "EXAMPLES:\n\
            \x20 goskel docs\n\
            \x20 goskel docs --type openapi"
    )]
    Docs(DocsArgs),

    /// Developer experience tooling.
    #[command(
        about = "Developer experience tools",
        long_about = "Setup and manage developer experience features:\n\
            - lint: golangci-lint with .golangci.yml\n\
            - air: live reload with air.toml\n\
            - telemetry: OpenTelemetry dependency",
        subcommand
    )]
    Dx(DxCommands),

    /// Plugin management.
    #[command(
        about = "Manage plugins",
        long_about = "Install, list, and remove plugins for extending functionality.\n\
            Installing only checks that the shared module can be opened.",
        subcommand
    )]
    Plugin(PluginCommands),

    /// Show the template catalog; with `--verbose`, each template's placeholders.
    #[command(
        visible_alias = "ls",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 goskel list\n\
            \x20 goskel list --verbose"
    )]
    List,

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 goskel completions bash > ~/.local/share/bash-completion/completions/goskel\n\
            \x20 goskel completions zsh  > ~/.zfunc/_goskel\n\
            \x20 goskel completions fish > ~/.config/fish/completions/goskel.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the goskel configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 goskel config get init.router\n\
            \x20 goskel config list\n\
            \x20 goskel config init"
    )]
    Config(ConfigCommands),
}

// ── shared ────────────────────────────────────────────────────────────────────

/// Write behaviour shared by every generating command.
#[derive(Debug, Clone, Copy, Args)]
pub struct WriteArgs {
    /// Replace files that already exist.
    #[arg(long = "force", help = "Overwrite existing files")]
    pub force: bool,

    /// Print the plan instead of writing it.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

/// Arguments for `domain`, `usecase` and `handler`.
#[derive(Debug, Args)]
pub struct ComponentArgs {
    #[arg(value_name = "NAME", help = "Component name, used verbatim")]
    pub name: String,

    #[command(flatten)]
    pub write: WriteArgs,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `goskel init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Project directory and Go module name.
    #[arg(value_name = "PROJECT", help = "Project name")]
    pub project: String,

    #[arg(
        long = "router",
        value_name = "ROUTER",
        value_parser = PossibleValuesParser::new(ROUTER_CHOICES),
        help = "HTTP router for main.go"
    )]
    pub router: Option<String>,

    #[arg(
        long = "logger",
        value_name = "LOGGER",
        value_parser = PossibleValuesParser::new(LOGGER_CHOICES),
        help = "Logging library"
    )]
    pub logger: Option<String>,

    #[arg(
        long = "database",
        value_name = "DATABASE",
        value_parser = PossibleValuesParser::new(DATABASE_CHOICES),
        help = "Database"
    )]
    pub database: Option<String>,

    #[arg(
        long = "cache",
        value_name = "CACHE",
        value_parser = PossibleValuesParser::new(CACHE_CHOICES),
        help = "Cache"
    )]
    pub cache: Option<String>,

    #[arg(long = "redis", help = "Use Redis")]
    pub redis: bool,

    #[arg(long = "kafka", help = "Use Kafka")]
    pub kafka: bool,

    #[arg(long = "grpc", help = "Use gRPC")]
    pub grpc: bool,

    /// Skip the interactive prompts and use flags/config defaults.
    #[arg(short = 'y', long = "yes", help = "Skip prompts and use defaults")]
    pub yes: bool,

    #[command(flatten)]
    pub write: WriteArgs,
}

// ── tests ─────────────────────────────────────────────────────────────────────

/// Arguments for `goskel tests`.
#[derive(Debug, Args)]
pub struct TestsArgs {
    #[arg(value_name = "NAME", help = "Existing component name")]
    pub name: String,

    #[arg(short = 'm', long = "with-mocks", help = "Generate mock implementations")]
    pub with_mocks: bool,

    #[command(flatten)]
    pub write: WriteArgs,
}

// ── docs ──────────────────────────────────────────────────────────────────────

/// Arguments for `goskel docs`.
///
/// `--type` is a free string so an unsupported value reaches the command
/// and gets the documentation usage line rather than clap's generic error.
#[derive(Debug, Args)]
pub struct DocsArgs {
    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        default_value = "markdown",
        help = "Documentation type (markdown, openapi)"
    )]
    pub kind: String,

    #[arg(long = "force", help = "Overwrite an existing README.md")]
    pub force: bool,
}

// ── dx ────────────────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum DxCommands {
    /// golangci-lint and `.golangci.yml`.
    #[command(about = "Setup linting")]
    Lint(DxArgs),

    /// air and `air.toml`.
    #[command(about = "Setup live reload")]
    Air(DxArgs),

    /// OpenTelemetry module dependency.
    #[command(about = "Setup telemetry")]
    Telemetry,
}

#[derive(Debug, Clone, Copy, Args)]
pub struct DxArgs {
    #[arg(long = "force", help = "Overwrite an existing configuration file")]
    pub force: bool,
}

// ── plugin ────────────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum PluginCommands {
    /// Check that a shared module opens.
    #[command(about = "Install a plugin")]
    Install {
        #[arg(value_name = "PATH", help = "Path to the shared module")]
        path: PathBuf,
    },

    #[command(about = "List installed plugins")]
    List,

    #[command(about = "Remove a plugin")]
    Remove {
        #[arg(value_name = "NAME", help = "Plugin name")]
        name: String,
    },
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `goskel completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Shells supported by `clap_complete`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
    Elvish,
}

// ── config ────────────────────────────────────────────────────────────────────

/// Subcommands for `goskel config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print one resolved value.
    #[command(about = "Get a configuration value")]
    Get {
        #[arg(value_name = "KEY", help = "Dotted key, e.g. init.router")]
        key: String,
    },

    /// Print the resolved configuration as TOML.
    #[command(about = "List all configuration values")]
    List,

    /// Print the default configuration file path.
    #[command(about = "Show configuration file path")]
    Path,

    /// Write a default configuration file.
    #[command(about = "Create a default configuration file")]
    Init {
        #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
        force: bool,
    },
}
