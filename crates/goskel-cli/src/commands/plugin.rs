//! `goskel plugin install|list|remove`.
//!
//! No registry is kept: install only proves the module opens.

use goskel_adapters::DylibLoader;
use goskel_core::application::PluginService;

use crate::{cli::PluginCommands, error::CliResult, output::OutputManager};

pub fn execute(cmd: PluginCommands, output: OutputManager) -> CliResult<()> {
    let service = PluginService::new(Box::new(DylibLoader::new()));

    match cmd {
        PluginCommands::Install { path } => {
            service.install(&path)?;
            output.success(&format!(
                "Successfully installed plugin from {}",
                path.display()
            ))?;
        }

        PluginCommands::List => {
            output.header("Installed plugins:")?;
            for name in service.list() {
                output.print(&format!("  {name}"))?;
            }
        }

        PluginCommands::Remove { name } => {
            service.remove(&name)?;
            output.success(&format!("Removed plugin: {name}"))?;
        }
    }

    Ok(())
}
