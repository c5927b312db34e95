//! `goskel tests <name> [--with-mocks]`.

use goskel_adapters::LocalFilesystem;
use goskel_core::{application::ComponentClassifier, domain::GenerationPlan};
use tracing::info;

use crate::{cli::TestsArgs, config::AppConfig, error::CliResult, output::OutputManager};

pub fn execute(args: TestsArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let name = super::parse_name(args.name)?;

    // Fails with UnknownComponent before any plan exists.
    let kind = ComponentClassifier::new(Box::new(LocalFilesystem::new()))
        .classify(super::workdir(), &name)?;
    info!(%name, %kind, "component classified");

    let plan = GenerationPlan::tests(&name, kind, args.with_mocks);
    if let Some(report) = super::run_plan(&plan, args.write, &config, &output)? {
        if args.with_mocks {
            output.success(&format!("Generated mocks for {name}"))?;
        }
        output.success(&format!(
            "Successfully created test stubs for {name} in {}",
            report.location.display()
        ))?;
    }
    Ok(())
}
