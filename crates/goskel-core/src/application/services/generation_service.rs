//! Generation Service - main application orchestrator.
//!
//! Runs one [`GenerationPlan`] to completion:
//! 1. Validate the plan (unique paths)
//! 2. Render every file entry (no filesystem access yet)
//! 3. Pre-flight collisions against the write policy
//! 4. Materialize entries in plan order, stopping at the first failure

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateCatalog, TemplateRenderer},
        services::materializer::{Materializer, WritePolicy},
    },
    domain::{GenerationPlan, PlanEntry, PlanKind, TemplateId},
    error::{GoskelError, GoskelResult},
};

/// Information about a template for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateInfo {
    pub id: TemplateId,
    pub description: String,
    pub placeholders: Vec<String>,
    pub builtin: bool,
}

/// What a plan run produced, or would produce for a dry run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub kind: PlanKind,
    pub location: PathBuf,
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
    pub dry_run: bool,
}

impl GenerationReport {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

struct RenderedEntry {
    path: PathBuf,
    /// `None` for directories.
    content: Option<String>,
}

/// Plan executor.
pub struct GenerationService {
    catalog: Box<dyn TemplateCatalog>,
    renderer: Box<dyn TemplateRenderer>,
    materializer: Materializer,
}

impl GenerationService {
    pub fn new(
        catalog: Box<dyn TemplateCatalog>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            catalog,
            renderer,
            materializer: Materializer::new(filesystem),
        }
    }

    /// Run `plan` with every path resolved against `root`.
    ///
    /// Nothing is written unless every file renders and, under
    /// [`WritePolicy::RejectExisting`], no target file exists yet. Once
    /// writing starts, the first failure stops the run with
    /// `ApplicationError::GenerationAborted`.
    #[instrument(skip_all, fields(plan = %plan.kind(), root = %root.display(), ?policy))]
    pub fn execute(
        &self,
        plan: &GenerationPlan,
        root: &Path,
        policy: WritePolicy,
    ) -> GoskelResult<GenerationReport> {
        let rendered = self.prepare(plan, root, policy)?;

        let mut written: Vec<PathBuf> = Vec::with_capacity(rendered.len());
        for (index, entry) in rendered.iter().enumerate() {
            let outcome = match &entry.content {
                None => self.materializer.ensure_directory(&entry.path),
                Some(content) => self.materializer.write_file(&entry.path, content, policy),
            };

            if let Err(cause) = outcome {
                warn!(path = %entry.path.display(), error = %cause, "generation stopped");
                return Err(ApplicationError::GenerationAborted {
                    at: entry.path.clone(),
                    cause: Box::new(cause),
                    written,
                    pending: rendered[index + 1..]
                        .iter()
                        .map(|e| e.path.clone())
                        .collect(),
                }
                .into());
            }
            written.push(entry.path.clone());
        }

        let report = build_report(plan, root, &rendered, false);
        info!(
            files = report.files.len(),
            directories = report.directories.len(),
            "generation completed"
        );
        Ok(report)
    }

    /// Everything [`execute`](Self::execute) checks, without writing.
    #[instrument(skip_all, fields(plan = %plan.kind(), root = %root.display()))]
    pub fn preview(
        &self,
        plan: &GenerationPlan,
        root: &Path,
        policy: WritePolicy,
    ) -> GoskelResult<GenerationReport> {
        let rendered = self.prepare(plan, root, policy)?;
        Ok(build_report(plan, root, &rendered, true))
    }

    /// Write one piece of content produced outside the catalog, such as
    /// captured tool output.
    pub fn write_output(&self, path: &Path, content: &str, policy: WritePolicy) -> GoskelResult<()> {
        if self.materializer.would_collide(path, policy) {
            return Err(ApplicationError::FileAlreadyExists { path: path.into() }.into());
        }
        self.materializer.write_file(path, content, policy)
    }

    /// `true` if writing `path` under `policy` would be rejected.
    pub fn would_collide(&self, path: &Path, policy: WritePolicy) -> bool {
        self.materializer.would_collide(path, policy)
    }

    /// List all catalog templates.
    pub fn list_templates(&self) -> GoskelResult<Vec<TemplateInfo>> {
        let templates = self.catalog.list()?;

        Ok(templates
            .into_iter()
            .map(|t| TemplateInfo {
                id: t.id,
                description: t.id.description().to_string(),
                placeholders: t.placeholders().into_iter().map(str::to_string).collect(),
                builtin: t.is_builtin(),
            })
            .collect())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn prepare(
        &self,
        plan: &GenerationPlan,
        root: &Path,
        policy: WritePolicy,
    ) -> GoskelResult<Vec<RenderedEntry>> {
        plan.validate()?;

        let mut rendered = Vec::with_capacity(plan.entries().len());
        for entry in plan.entries() {
            let path = root.join(entry.path());
            let content = match entry {
                PlanEntry::Directory { .. } => None,
                PlanEntry::File {
                    template, values, ..
                } => {
                    let template = self.catalog.lookup(*template)?;
                    debug!(template = %template.id, path = %path.display(), "render");
                    Some(self.renderer.render(&template, values)?)
                }
            };
            rendered.push(RenderedEntry { path, content });
        }

        if let Some(collision) = rendered
            .iter()
            .filter(|e| e.content.is_some())
            .find(|e| self.materializer.would_collide(&e.path, policy))
        {
            return Err(GoskelError::from(ApplicationError::FileAlreadyExists {
                path: collision.path.clone(),
            }));
        }

        Ok(rendered)
    }
}

fn build_report(
    plan: &GenerationPlan,
    root: &Path,
    rendered: &[RenderedEntry],
    dry_run: bool,
) -> GenerationReport {
    let (files, directories): (Vec<_>, Vec<_>) =
        rendered.iter().partition(|e| e.content.is_some());

    GenerationReport {
        kind: plan.kind().clone(),
        location: root.join(plan.location()),
        directories: directories.into_iter().map(|e| e.path.clone()).collect(),
        files: files.into_iter().map(|e| e.path.clone()).collect(),
        dry_run,
    }
}
