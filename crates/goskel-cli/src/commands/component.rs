//! `goskel domain|usecase|handler <name>`.

use goskel_core::domain::{ComponentKind, GenerationPlan};

use crate::{cli::ComponentArgs, config::AppConfig, error::CliResult, output::OutputManager};

pub fn execute(
    kind: ComponentKind,
    args: ComponentArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let name = super::parse_name(args.name)?;
    let plan = match kind {
        ComponentKind::Domain => GenerationPlan::domain(&name),
        ComponentKind::Usecase => GenerationPlan::usecase(&name),
        ComponentKind::Handler => GenerationPlan::handler(&name),
    };

    if let Some(report) = super::run_plan(&plan, args.write, &config, &output)? {
        output.success(&format!(
            "Successfully created {kind} {name} in {}",
            report.location.display()
        ))?;
    }
    Ok(())
}
