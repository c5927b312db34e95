//! `goskel arch`: serve the call graph until interrupted.

use crate::{config::AppConfig, error::CliResult, output::OutputManager};

pub fn execute(config: AppConfig, output: OutputManager) -> CliResult<()> {
    let tooling = super::tooling_service(&config)?;

    let mut announced = Ok(());
    tooling.visualize_architecture(super::workdir(), |url| {
        announced = output.success(&format!("Architecture visualization available at {url}"));
    })?;
    announced?;

    Ok(())
}
