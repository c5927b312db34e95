//! `goskel dx lint|air|telemetry`.

use goskel_core::domain::DevTool;

use crate::{cli::DxCommands, config::AppConfig, error::CliResult, output::OutputManager};

pub fn execute(cmd: DxCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let (tool, force) = match cmd {
        DxCommands::Lint(args) => (DevTool::Lint, args.force),
        DxCommands::Air(args) => (DevTool::Air, args.force),
        DxCommands::Telemetry => (DevTool::Telemetry, false),
    };

    let tooling = super::tooling_service(&config)?;
    if let Some(report) = tooling.setup(tool, super::workdir(), config.write_policy(force))? {
        output.written_files(&report.files)?;
    }

    output.success(tool.next_step())?;
    Ok(())
}
