//! Command handlers, one module per subcommand.
//!
//! Handlers build their services here, run them against the working
//! directory, and report through [`OutputManager`].

pub mod arch;
pub mod completions;
pub mod component;
pub mod config;
pub mod docs;
pub mod dx;
pub mod init;
pub mod list;
pub mod monorepo;
pub mod plugin;
pub mod stubs;

use std::path::Path;

use tracing::debug;

use goskel_adapters::{
    InMemoryCatalog, LocalFilesystem, ProcessRunner, SimpleRenderer, TemplateOverrideLoader,
};
use goskel_core::{
    application::{GenerationReport, GenerationService, ToolingService},
    domain::{ComponentName, GenerationPlan},
    error::GoskelError,
};

use crate::{cli::WriteArgs, config::AppConfig, error::CliResult, output::OutputManager};

/// Root every plan is resolved against. Empty so reported paths stay relative.
pub(crate) fn workdir() -> &'static Path {
    Path::new("")
}

/// Built-in catalog plus any configured overrides.
pub(crate) fn generation_service(config: &AppConfig) -> CliResult<GenerationService> {
    let catalog = InMemoryCatalog::with_builtin()?;
    if let Some(dir) = config.templates_dir() {
        let replaced = catalog.apply_overrides(&TemplateOverrideLoader::new(dir))?;
        debug!(dir = %dir.display(), replaced, "template overrides applied");
    }

    Ok(GenerationService::new(
        Box::new(catalog),
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    ))
}

pub(crate) fn tooling_service(config: &AppConfig) -> CliResult<ToolingService> {
    Ok(ToolingService::new(
        Box::new(ProcessRunner::new()),
        generation_service(config)?,
    ))
}

pub(crate) fn parse_name(raw: String) -> CliResult<ComponentName> {
    Ok(ComponentName::parse(raw).map_err(GoskelError::from)?)
}

/// Execute `plan`, or print it when `--dry-run` was given.
///
/// Returns `None` for a dry run.
pub(crate) fn run_plan(
    plan: &GenerationPlan,
    write: WriteArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<Option<GenerationReport>> {
    let service = generation_service(config)?;
    let policy = config.write_policy(write.force);

    if write.dry_run {
        let report = service.preview(plan, workdir(), policy)?;
        output.plan_preview(&report)?;
        return Ok(None);
    }

    let report = service.execute(plan, workdir(), policy)?;
    output.written_files(&report.files)?;
    Ok(Some(report))
}
