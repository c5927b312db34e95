//! Generation plans: the ordered list of directories and files one command
//! produces.
//!
//! Every constructor here is a pure function of its inputs. Nothing is
//! rendered or written; a plan only says *where* each file goes, *which*
//! template fills it, and *with what* placeholder values. Two calls with the
//! same inputs always produce equal plans.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::{
    common::{ComponentName, RelativePath},
    component::{ComponentKind, MOCKS_ROOT},
    error::DomainError,
    project::ProjectConfig,
    template::{PlaceholderMap, TemplateId},
};

/// Directories created under the project root by `init`.
pub const PROJECT_SKELETON: [&str; 13] = [
    "cmd",
    "internal/adapters/external",
    "internal/adapters/persistence",
    "internal/adapters/ports",
    "internal/config",
    "internal/core",
    "internal/interfaces",
    "internal/usecase",
    "migrations",
    "pkg",
    "scripts",
    "sql",
    "static",
];

/// Directories created by `monorepo`.
pub const MONOREPO_SKELETON: [&str; 6] = [
    "services/service1",
    "services/service2",
    "packages/shared",
    "packages/config",
    "scripts",
    "deploy",
];

/// One output of a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanEntry {
    /// Ensure a directory (and its ancestors) exists.
    Directory { path: RelativePath },
    /// Render `template` with `values` into a new file at `path`.
    File {
        path: RelativePath,
        template: TemplateId,
        values: PlaceholderMap,
    },
}

impl PlanEntry {
    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self::Directory {
            path: RelativePath::new(path),
        }
    }

    pub fn file(path: impl Into<PathBuf>, template: TemplateId, values: PlaceholderMap) -> Self {
        Self::File {
            path: RelativePath::new(path),
            template,
            values,
        }
    }

    pub fn path(&self) -> &RelativePath {
        match self {
            Self::Directory { path } | Self::File { path, .. } => path,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Self::File { .. })
    }
}

/// What a plan generates, used for summaries and log fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanKind {
    Domain(String),
    Usecase(String),
    Handler(String),
    Tests { component: String, kind: ComponentKind },
    Project(String),
    Monorepo,
    ToolConfig(TemplateId),
}

impl fmt::Display for PlanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(n) => write!(f, "domain {n}"),
            Self::Usecase(n) => write!(f, "usecase {n}"),
            Self::Handler(n) => write!(f, "handler {n}"),
            Self::Tests { component, kind } => write!(f, "test stubs for {kind} {component}"),
            Self::Project(n) => write!(f, "project {n}"),
            Self::Monorepo => f.write_str("monorepo structure"),
            Self::ToolConfig(id) => write!(f, "{} file", id.description()),
        }
    }
}

/// Ordered plan for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    kind: PlanKind,
    /// Directory reported to the user as "where things went".
    location: RelativePath,
    entries: Vec<PlanEntry>,
}

impl GenerationPlan {
    pub fn new(kind: PlanKind, location: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            location: RelativePath::new(location),
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: PlanEntry) {
        self.entries.push(entry);
    }

    pub fn with(mut self, entry: PlanEntry) -> Self {
        self.push(entry);
        self
    }

    pub fn kind(&self) -> &PlanKind {
        &self.kind
    }

    pub fn location(&self) -> &RelativePath {
        &self.location
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &PlanEntry> {
        self.entries.iter().filter(|e| e.is_file())
    }

    pub fn directories(&self) -> impl Iterator<Item = &PlanEntry> {
        self.entries.iter().filter(|e| !e.is_file())
    }

    /// Every output path is unique within the plan.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path = entry.path();
            if !seen.insert(path) {
                return Err(DomainError::DuplicatePath {
                    path: path.to_string(),
                });
            }
        }
        Ok(())
    }

    // ── Constructors ─────────────────────────────────────────────────────────

    /// `internal/core/<name>/{entity.go, repository.go}`
    pub fn domain(name: &ComponentName) -> Self {
        let dir = component_dir(ComponentKind::Domain, name);

        let entity = PlaceholderMap::new()
            .with("Domain", name.as_str())
            .with("Entity", name.as_str());
        let repository = PlaceholderMap::new()
            .with("Domain", name.as_str())
            .with("Repository", name.suffixed("Repository"))
            .with("Entity", name.as_str());

        Self::new(PlanKind::Domain(name.to_string()), &dir)
            .with(PlanEntry::directory(&dir))
            .with(PlanEntry::file(dir.join("entity.go"), TemplateId::Entity, entity))
            .with(PlanEntry::file(
                dir.join("repository.go"),
                TemplateId::Repository,
                repository,
            ))
    }

    /// `internal/usecase/<name>/{service.go, service_impl.go, models.go}`
    pub fn usecase(name: &ComponentName) -> Self {
        let dir = component_dir(ComponentKind::Usecase, name);

        let service = PlaceholderMap::new()
            .with("Usecase", name.as_str())
            .with("Service", name.suffixed("Service"));
        let models = PlaceholderMap::new().with("Usecase", name.as_str());

        Self::new(PlanKind::Usecase(name.to_string()), &dir)
            .with(PlanEntry::directory(&dir))
            .with(PlanEntry::file(
                dir.join("service.go"),
                TemplateId::ServiceInterface,
                service.clone(),
            ))
            .with(PlanEntry::file(
                dir.join("service_impl.go"),
                TemplateId::ServiceImpl,
                service,
            ))
            .with(PlanEntry::file(
                dir.join("models.go"),
                TemplateId::UsecaseModels,
                models,
            ))
    }

    /// `internal/interfaces/<name>/{http_handler.go, grpc_handler.go}`
    pub fn handler(name: &ComponentName) -> Self {
        let dir = component_dir(ComponentKind::Handler, name);

        let http = PlaceholderMap::new()
            .with("Handler", name.as_str())
            .with("HTTPHandler", name.suffixed("HTTPHandler"))
            .with("Route", name.as_str());
        let grpc = PlaceholderMap::new()
            .with("Handler", name.as_str())
            .with("GRPCHandler", name.suffixed("GRPCHandler"));

        Self::new(PlanKind::Handler(name.to_string()), &dir)
            .with(PlanEntry::directory(&dir))
            .with(PlanEntry::file(
                dir.join("http_handler.go"),
                TemplateId::HttpHandler,
                http,
            ))
            .with(PlanEntry::file(
                dir.join("grpc_handler.go"),
                TemplateId::GrpcHandler,
                grpc,
            ))
    }

    /// `<root-of-kind>/<name>/<name>_test.go`, plus
    /// `internal/mocks/<name>_mock.go` when `with_mocks` is set.
    ///
    /// `kind` comes from the component classifier; this constructor does not
    /// probe anything itself.
    pub fn tests(name: &ComponentName, kind: ComponentKind, with_mocks: bool) -> Self {
        let dir = component_dir(kind, name);
        let values = PlaceholderMap::new().with("Component", name.as_str());

        let mut plan = Self::new(
            PlanKind::Tests {
                component: name.to_string(),
                kind,
            },
            &dir,
        )
        .with(PlanEntry::file(
            dir.join(format!("{name}_test.go")),
            TemplateId::TestStub,
            values.clone(),
        ));

        if with_mocks {
            plan.push(PlanEntry::file(
                Path::new(MOCKS_ROOT).join(format!("{name}_mock.go")),
                TemplateId::MockStub,
                values,
            ));
        }

        plan
    }

    /// Full project skeleton under `<project>/`, a `go.mod` and a `main.go`
    /// whose variant follows the router choice.
    pub fn project_init(project: &ComponentName, config: &ProjectConfig) -> Self {
        let root = PathBuf::from(project.as_str());
        let mut plan = Self::new(PlanKind::Project(project.to_string()), &root);

        for dir in PROJECT_SKELETON {
            plan.push(PlanEntry::directory(root.join(dir)));
        }

        let values = PlaceholderMap::new()
            .with("Project", project.as_str())
            .with("GoVersion", config.go_version.as_str());

        plan.push(PlanEntry::file(
            root.join("go.mod"),
            TemplateId::GoModule,
            values.clone(),
        ));
        plan.push(PlanEntry::file(
            root.join("main.go"),
            config.router.entry_point(),
            values,
        ));
        plan
    }

    /// Fixed multi-service layout; takes no name.
    pub fn monorepo() -> Self {
        let mut plan = Self::new(PlanKind::Monorepo, ".");

        for dir in MONOREPO_SKELETON {
            plan.push(PlanEntry::directory(dir));
        }

        plan.push(PlanEntry::file(
            "packages/shared/shared.go",
            TemplateId::SharedPackage,
            PlaceholderMap::new(),
        ));
        plan.push(PlanEntry::file(
            "packages/config/config.go",
            TemplateId::ConfigPackage,
            PlaceholderMap::new(),
        ));
        plan
    }

    /// A single configuration file written by a developer-tool setup.
    pub fn tool_config(path: impl Into<PathBuf>, template: TemplateId) -> Self {
        let path = path.into();
        Self::new(PlanKind::ToolConfig(template), ".").with(PlanEntry::file(
            path,
            template,
            PlaceholderMap::new(),
        ))
    }
}

fn component_dir(kind: ComponentKind, name: &ComponentName) -> PathBuf {
    Path::new(kind.root()).join(name)
}
