//! # goskel
//!
//! Generates Go Domain-Driven-Design project skeletons.
//!
//! ## Startup sequence
//!
//! 1. Load `.env`, then parse CLI arguments.
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (file + env + defaults).
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the appropriate command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                         |
//! |------|-------------------------------------------------|
//! |  0   | Success, `--help`, `--version`                  |
//! |  1   | Any reported error, including bad arguments     |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use goskel_core::domain::ComponentKind;

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Missing .env is fine.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version land on stdout with code 0.
            let code = if e.exit_code() == 0 { 0 } else { 1 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );
    let verbose = cli.global.verbose > 0;

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            return handle_error(
                CliError::ConfigError {
                    message: format!("{e:#}"),
                    source: Some(e.into()),
                },
                verbose,
                cli.global.no_color,
            );
        }
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);
    let no_color = cli.global.no_color || config.output.no_color;

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    match run(cli, config, output) {
        Ok(()) => {
            info!("goskel completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, no_color),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::Init(args) => commands::init::execute(args, config, output),
        Commands::Domain(args) => {
            commands::component::execute(ComponentKind::Domain, args, config, output)
        }
        Commands::Usecase(args) => {
            commands::component::execute(ComponentKind::Usecase, args, config, output)
        }
        Commands::Handler(args) => {
            commands::component::execute(ComponentKind::Handler, args, config, output)
        }
        Commands::Tests(args) => commands::stubs::execute(args, config, output),
        Commands::Monorepo(write) => commands::monorepo::execute(write, config, output),
        Commands::Arch => commands::arch::execute(config, output),
        Commands::Docs(args) => commands::docs::execute(args, config, output),
        Commands::Dx(cmd) => commands::dx::execute(cmd, config, output),
        Commands::Plugin(cmd) => commands::plugin::execute(cmd, output),
        Commands::List => commands::list::execute(cli.global.verbose > 0, config, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => commands::config::execute(cmd, config, output),
    }
}

/// The single place where structured errors become stderr text and an
/// exit code.
fn handle_error(err: CliError, verbose: bool, no_color: bool) -> ExitCode {
    err.log();

    let colored = !no_color && std::io::IsTerminal::is_terminal(&std::io::stderr());
    eprint!("{}", error_text(&err, verbose, colored));

    ExitCode::from(err.exit_code())
}

fn error_text(err: &CliError, verbose: bool, colored: bool) -> String {
    if colored {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
