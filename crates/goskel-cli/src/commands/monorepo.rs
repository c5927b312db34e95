//! `goskel monorepo`.

use goskel_core::domain::GenerationPlan;

use crate::{cli::WriteArgs, config::AppConfig, error::CliResult, output::OutputManager};

pub fn execute(write: WriteArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    if super::run_plan(&GenerationPlan::monorepo(), write, &config, &output)?.is_some() {
        output.success("Monorepo structure created successfully")?;
    }
    Ok(())
}
