//! Developer tooling: architecture graph, documentation, dx installers.
//!
//! Every external program is resolved on the search path before it is
//! spawned, so a missing tool fails fast with its install hint and nothing
//! else happens.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::ToolRunner,
        services::{
            generation_service::{GenerationReport, GenerationService},
            materializer::WritePolicy,
        },
    },
    domain::{ARCH_URL, DevTool, DocFormat, GenerationPlan, ToolInvocation},
    error::GoskelResult,
};

pub struct ToolingService {
    runner: Box<dyn ToolRunner>,
    generation: GenerationService,
}

impl ToolingService {
    pub fn new(runner: Box<dyn ToolRunner>, generation: GenerationService) -> Self {
        Self { runner, generation }
    }

    /// Start the call-graph server and block until it exits.
    ///
    /// `on_ready` receives the server URL once the binary is known to exist,
    /// before the blocking run starts.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn visualize_architecture(
        &self,
        root: &Path,
        on_ready: impl FnOnce(&str),
    ) -> GoskelResult<()> {
        let invocation = ToolInvocation::architecture_graph().in_dir(root);
        self.require(&invocation)?;

        on_ready(ARCH_URL);
        self.runner.run(&invocation)
    }

    /// Generate documentation; returns where it was written.
    ///
    /// Markdown output is captured and written to `README.md` under `policy`.
    /// An existing README is checked before the generator is spawned.
    #[instrument(skip_all, fields(root = %root.display(), %format))]
    pub fn generate_docs(
        &self,
        format: DocFormat,
        root: &Path,
        policy: WritePolicy,
    ) -> GoskelResult<PathBuf> {
        let invocation = format.invocation().in_dir(root);
        let output = root.join(format.output());

        match format {
            DocFormat::Markdown => {
                if self.generation.would_collide(&output, policy) {
                    return Err(ApplicationError::FileAlreadyExists { path: output }.into());
                }
                self.require(&invocation)?;
                let captured = self.runner.capture(&invocation)?;
                let text = String::from_utf8_lossy(&captured);
                self.generation.write_output(&output, &text, policy)?;
            }
            DocFormat::OpenApi => {
                self.require(&invocation)?;
                self.runner.run(&invocation)?;
            }
        }

        info!(output = %output.display(), "documentation generated");
        Ok(output)
    }

    /// Install a developer tool and write its configuration file, if any.
    ///
    /// The configuration file is rendered and collision-checked before the
    /// installer runs, so a rejected config never leaves a half-done setup.
    #[instrument(skip_all, fields(%tool, root = %root.display(), ?policy))]
    pub fn setup(
        &self,
        tool: DevTool,
        root: &Path,
        policy: WritePolicy,
    ) -> GoskelResult<Option<GenerationReport>> {
        let plan = tool
            .config_file()
            .map(|(path, template)| GenerationPlan::tool_config(path, template));
        if let Some(plan) = &plan {
            self.generation.preview(plan, root, policy)?;
        }

        let installer = tool.installer().in_dir(root);
        self.require(&installer)?;
        self.runner.run(&installer)?;

        plan.map(|plan| self.generation.execute(&plan, root, policy))
            .transpose()
    }

    fn require(&self, invocation: &ToolInvocation) -> GoskelResult<()> {
        match self.runner.locate(&invocation.program) {
            Some(path) => {
                info!(program = %invocation.program, path = %path.display(), "tool located");
                Ok(())
            }
            None => Err(ApplicationError::ExternalToolMissing {
                tool: invocation.program.clone(),
                hint: invocation.install_hint.clone(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::MockToolRunner;
    use crate::application::services::fakes::{FakeCatalog, FakeFilesystem, FakeRenderer};
    use crate::domain::TemplateId;
    use crate::error::GoskelError;
    use mockall::predicate::*;
    use std::cell::Cell;

    fn generation(fs: &FakeFilesystem) -> GenerationService {
        let catalog = FakeCatalog::default()
            .with(TemplateId::LintConfig, "linters:\n  enable:\n    - govet\n")
            .with(TemplateId::ReloadConfig, "[build]\n");
        GenerationService::new(Box::new(catalog), Box::new(FakeRenderer), Box::new(fs.clone()))
    }

    fn missing(runner: &mut MockToolRunner, program: &'static str) {
        runner
            .expect_locate()
            .with(eq(program))
            .returning(|_| None);
    }

    fn present(runner: &mut MockToolRunner, program: &'static str) {
        runner
            .expect_locate()
            .with(eq(program))
            .returning(move |p| Some(PathBuf::from("/usr/bin").join(p)));
    }

    #[test]
    fn arch_without_binary_never_starts_server() {
        let mut runner = MockToolRunner::new();
        missing(&mut runner, "go-callvis");
        runner.expect_run().never();
        let svc = ToolingService::new(Box::new(runner), generation(&FakeFilesystem::new()));
        let announced = Cell::new(false);

        let err = svc
            .visualize_architecture(Path::new("."), |_| announced.set(true))
            .unwrap_err();

        assert!(!announced.get());
        match err {
            GoskelError::Application(ApplicationError::ExternalToolMissing { tool, hint }) => {
                assert_eq!(tool, "go-callvis");
                assert_eq!(
                    hint.as_deref(),
                    Some("go install github.com/ofabry/go-callvis@latest")
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn arch_announces_url_then_runs() {
        let mut runner = MockToolRunner::new();
        present(&mut runner, "go-callvis");
        runner
            .expect_run()
            .withf(|inv| inv.program == "go-callvis" && inv.args.contains(&":7878".to_string()))
            .times(1)
            .returning(|_| Ok(()));
        let svc = ToolingService::new(Box::new(runner), generation(&FakeFilesystem::new()));
        let mut url = String::new();

        svc.visualize_architecture(Path::new("."), |u| url = u.to_string())
            .unwrap();

        assert_eq!(url, "http://localhost:7878");
    }

    #[test]
    fn markdown_docs_are_written_to_readme() {
        let fs = FakeFilesystem::new();
        let mut runner = MockToolRunner::new();
        present(&mut runner, "godoc2md");
        runner
            .expect_capture()
            .times(1)
            .returning(|_| Ok(b"# Package order\n".to_vec()));
        let svc = ToolingService::new(Box::new(runner), generation(&fs));

        let out = svc
            .generate_docs(DocFormat::Markdown, Path::new(""), WritePolicy::RejectExisting)
            .unwrap();

        assert_eq!(out, PathBuf::from("README.md"));
        assert_eq!(
            fs.read(Path::new("README.md")).as_deref(),
            Some("# Package order\n")
        );
    }

    #[test]
    fn existing_readme_is_checked_before_spawning() {
        let fs = FakeFilesystem::new();
        fs.seed_file("README.md", "hand written");
        let mut runner = MockToolRunner::new();
        runner.expect_locate().never();
        runner.expect_capture().never();
        let svc = ToolingService::new(Box::new(runner), generation(&fs));

        let err = svc
            .generate_docs(DocFormat::Markdown, Path::new(""), WritePolicy::RejectExisting)
            .unwrap_err();

        assert!(matches!(
            err,
            GoskelError::Application(ApplicationError::FileAlreadyExists { .. })
        ));
    }

    #[test]
    fn openapi_docs_stream_through_swag() {
        let mut runner = MockToolRunner::new();
        present(&mut runner, "swag");
        runner
            .expect_run()
            .withf(|inv| inv.command_line() == "swag init")
            .times(1)
            .returning(|_| Ok(()));
        let svc = ToolingService::new(Box::new(runner), generation(&FakeFilesystem::new()));

        let out = svc
            .generate_docs(DocFormat::OpenApi, Path::new(""), WritePolicy::RejectExisting)
            .unwrap();

        assert_eq!(out, PathBuf::from("docs/"));
    }

    #[test]
    fn lint_setup_installs_then_writes_config() {
        let fs = FakeFilesystem::new();
        let mut runner = MockToolRunner::new();
        present(&mut runner, "go");
        runner
            .expect_run()
            .withf(|inv| inv.args.first().map(String::as_str) == Some("install"))
            .times(1)
            .returning(|_| Ok(()));
        let svc = ToolingService::new(Box::new(runner), generation(&fs));

        let report = svc
            .setup(DevTool::Lint, Path::new(""), WritePolicy::RejectExisting)
            .unwrap()
            .unwrap();

        assert_eq!(report.files, vec![PathBuf::from(".golangci.yml")]);
        assert!(fs.read(Path::new(".golangci.yml")).unwrap().contains("govet"));
    }

    #[test]
    fn failed_install_writes_no_config() {
        let fs = FakeFilesystem::new();
        let mut runner = MockToolRunner::new();
        present(&mut runner, "go");
        runner.expect_run().times(1).returning(|inv| {
            Err(ApplicationError::ExternalToolFailed {
                command: inv.command_line(),
                reason: "exit status: 1".into(),
            }
            .into())
        });
        let svc = ToolingService::new(Box::new(runner), generation(&fs));

        let err = svc
            .setup(DevTool::Air, Path::new(""), WritePolicy::RejectExisting)
            .unwrap_err();

        assert!(matches!(
            err,
            GoskelError::Application(ApplicationError::ExternalToolFailed { .. })
        ));
        assert!(fs.read(Path::new("air.toml")).is_none());
    }

    #[test]
    fn existing_config_blocks_install() {
        let fs = FakeFilesystem::new();
        fs.seed_file("air.toml", "custom");
        let mut runner = MockToolRunner::new();
        runner.expect_run().never();
        let svc = ToolingService::new(Box::new(runner), generation(&fs));

        assert!(svc
            .setup(DevTool::Air, Path::new(""), WritePolicy::RejectExisting)
            .is_err());
        assert_eq!(fs.read(Path::new("air.toml")).as_deref(), Some("custom"));
    }

    #[test]
    fn telemetry_has_no_config_file() {
        let fs = FakeFilesystem::new();
        let mut runner = MockToolRunner::new();
        present(&mut runner, "go");
        runner
            .expect_run()
            .withf(|inv| inv.command_line() == "go get go.opentelemetry.io/otel")
            .times(1)
            .returning(|_| Ok(()));
        let svc = ToolingService::new(Box::new(runner), generation(&fs));

        let report = svc
            .setup(DevTool::Telemetry, Path::new(""), WritePolicy::RejectExisting)
            .unwrap();

        assert!(report.is_none());
        assert_eq!(fs.file_count(), 0);
    }
}
