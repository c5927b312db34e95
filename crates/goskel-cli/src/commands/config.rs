//! `goskel config`: inspect configuration or write a default file.

use std::path::Path;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = config.get(&key).ok_or_else(|| CliError::InvalidInput {
                message: format!("unknown config key '{key}', see `goskel config list`"),
                source: None,
            })?;
            output.print(&value)?;
        }

        ConfigCommands::List => {
            output.print(&serialise(&config)?)?;
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }

        ConfigCommands::Init { force } => {
            let path = AppConfig::config_path();
            if write_default(&path, force)? {
                output.success(&format!("Configuration created at {}", path.display()))?;
            } else {
                output.warning(&format!(
                    "Config already exists at {}  (use --force to overwrite)",
                    path.display()
                ))?;
            }
        }
    }

    Ok(())
}

fn serialise(config: &AppConfig) -> CliResult<String> {
    config.to_toml().map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

/// Write the default configuration to `path`; `false` if it exists and
/// `force` is not set.
fn write_default(path: &Path, force: bool) -> CliResult<bool> {
    if path.exists() && !force {
        return Ok(false);
    }

    let toml = serialise(&AppConfig::default())?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }
    std::fs::write(path, toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))?;

    Ok(true)
}
