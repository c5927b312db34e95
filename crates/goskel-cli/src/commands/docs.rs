//! `goskel docs [--type markdown|openapi]`.

use goskel_core::{domain::DocFormat, error::GoskelError};

use crate::{cli::DocsArgs, config::AppConfig, error::CliResult, output::OutputManager};

pub fn execute(args: DocsArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // Rejected before any service or process exists.
    let format: DocFormat = args.kind.parse().map_err(GoskelError::from)?;
    let tooling = super::tooling_service(&config)?;
    let policy = config.write_policy(args.force);

    let written = match format {
        DocFormat::Markdown => {
            let spinner = output.spinner("Running godoc2md");
            let result = tooling.generate_docs(format, super::workdir(), policy);
            spinner.finish_and_clear();
            result?
        }
        // swag streams its own progress.
        DocFormat::OpenApi => tooling.generate_docs(format, super::workdir(), policy)?,
    };

    let label = match format {
        DocFormat::Markdown => "Markdown",
        DocFormat::OpenApi => "OpenAPI",
    };
    output.success(&format!(
        "{label} documentation generated in {}",
        written.display()
    ))?;
    Ok(())
}
