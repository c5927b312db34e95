//! Template catalog identities and the placeholder substitution contract.
//!
//! ## Marker grammar
//!
//! A placeholder marker is `{{Name}}`. Whitespace inside the braces and a
//! single leading `.` are tolerated (`{{ Name }}`, `{{.Name}}`), so templates
//! copied from Go's `text/template` keep working. Names are ASCII
//! identifiers. Any `{{ ... }}` whose body is not an identifier is literal
//! text and is emitted untouched.
//!
//! ```text
//! package {{Domain}}            → package Order
//! type {{Repository}} interface → type OrderRepository interface
//! ```
//!
//! Rendering is strict: every marker must resolve, otherwise
//! [`DomainError::MissingPlaceholder`] names the first unresolved one. Keys
//! the template never mentions are ignored.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

// ── TemplateId ───────────────────────────────────────────────────────────────

/// Every template the catalog must provide.
///
/// The set is closed: plans reference templates through this enum, so a plan
/// can never ask for a template that has no identity. Whether the catalog
/// actually *holds* text for each id is checked at lookup time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemplateId {
    Entity,
    Repository,
    ServiceInterface,
    ServiceImpl,
    UsecaseModels,
    HttpHandler,
    GrpcHandler,
    TestStub,
    MockStub,
    LintConfig,
    ReloadConfig,
    SharedPackage,
    ConfigPackage,
    GoModule,
    MainNetHttp,
    MainGin,
    MainEcho,
    MainChi,
}

impl TemplateId {
    pub const ALL: [TemplateId; 18] = [
        Self::Entity,
        Self::Repository,
        Self::ServiceInterface,
        Self::ServiceImpl,
        Self::UsecaseModels,
        Self::HttpHandler,
        Self::GrpcHandler,
        Self::TestStub,
        Self::MockStub,
        Self::LintConfig,
        Self::ReloadConfig,
        Self::SharedPackage,
        Self::ConfigPackage,
        Self::GoModule,
        Self::MainNetHttp,
        Self::MainGin,
        Self::MainEcho,
        Self::MainChi,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::Repository => "repository",
            Self::ServiceInterface => "service-interface",
            Self::ServiceImpl => "service-impl",
            Self::UsecaseModels => "usecase-models",
            Self::HttpHandler => "http-handler",
            Self::GrpcHandler => "grpc-handler",
            Self::TestStub => "test-stub",
            Self::MockStub => "mock-stub",
            Self::LintConfig => "lint-config",
            Self::ReloadConfig => "reload-config",
            Self::SharedPackage => "shared-package",
            Self::ConfigPackage => "config-package",
            Self::GoModule => "go-module",
            Self::MainNetHttp => "main-net-http",
            Self::MainGin => "main-gin",
            Self::MainEcho => "main-echo",
            Self::MainChi => "main-chi",
        }
    }

    /// One-line human description, shown by `goskel list`.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Entity => "Domain entity struct",
            Self::Repository => "Domain repository interface",
            Self::ServiceInterface => "Use-case service interface",
            Self::ServiceImpl => "Use-case service implementation",
            Self::UsecaseModels => "Use-case request/response models",
            Self::HttpHandler => "HTTP (gin) handler",
            Self::GrpcHandler => "gRPC handler",
            Self::TestStub => "Go test stub",
            Self::MockStub => "testify mock stub",
            Self::LintConfig => "golangci-lint configuration",
            Self::ReloadConfig => "air live-reload configuration",
            Self::SharedPackage => "Monorepo shared utilities package",
            Self::ConfigPackage => "Monorepo shared configuration package",
            Self::GoModule => "go.mod module bootstrap",
            Self::MainNetHttp => "Entry point using net/http",
            Self::MainGin => "Entry point using gin",
            Self::MainEcho => "Entry point using echo",
            Self::MainChi => "Entry point using chi",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| DomainError::UnknownTemplate { id: s.to_string() })
    }
}

// ── Template ─────────────────────────────────────────────────────────────────

/// Where a template's text lives.
///
/// Built-in templates are compiled into the binary and borrowed for the
/// program's lifetime; overrides read from disk own their text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Static(&'static str),
    Owned(String),
}

impl TemplateSource {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Owned(s) => s,
        }
    }
}

/// An immutable catalog entry: identity plus text with placeholder markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub id: TemplateId,
    pub source: TemplateSource,
}

impl Template {
    pub fn builtin(id: TemplateId, text: &'static str) -> Self {
        Self {
            id,
            source: TemplateSource::Static(text),
        }
    }

    pub fn owned(id: TemplateId, text: impl Into<String>) -> Self {
        Self {
            id,
            source: TemplateSource::Owned(text.into()),
        }
    }

    pub fn text(&self) -> &str {
        self.source.as_str()
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.source, TemplateSource::Static(_))
    }

    /// Distinct placeholder names referenced by this template, sorted.
    pub fn placeholders(&self) -> BTreeSet<&str> {
        scan_markers(self.text()).map(|m| m.name).collect()
    }

    /// Substitute every marker with its value from `values`.
    pub fn render(&self, values: &PlaceholderMap) -> Result<String, DomainError> {
        let text = self.text();
        let mut rendered = String::with_capacity(text.len());
        let mut cursor = 0;

        for marker in scan_markers(text) {
            let value = values
                .get(marker.name)
                .ok_or_else(|| DomainError::MissingPlaceholder {
                    template: self.id.to_string(),
                    name: marker.name.to_string(),
                })?;
            rendered.push_str(&text[cursor..marker.start]);
            rendered.push_str(value);
            cursor = marker.end;
        }

        rendered.push_str(&text[cursor..]);
        Ok(rendered)
    }
}

// ── PlaceholderMap ───────────────────────────────────────────────────────────

/// Placeholder name → substitution value, built fresh for every file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderMap {
    values: HashMap<String, String>,
}

impl PlaceholderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert; a repeated key keeps the last value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ── Marker scanning ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Marker<'a> {
    start: usize,
    end: usize,
    name: &'a str,
}

fn scan_markers(text: &str) -> impl Iterator<Item = Marker<'_>> {
    let mut cursor = 0;

    std::iter::from_fn(move || {
        while let Some(open) = text[cursor..].find("{{") {
            let start = cursor + open;
            let body_start = start + 2;
            let close = text[body_start..].find("}}")?;
            let body = text[body_start..body_start + close].trim();
            let name = body.strip_prefix('.').unwrap_or(body);

            if is_identifier(name) {
                let end = body_start + close + 2;
                cursor = end;
                return Some(Marker { start, end, name });
            }

            // `{{{Name}}}`: retry one byte later so the inner marker is found.
            cursor = start + 1;
        }
        None
    })
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
