//! Minimal port doubles for service unit tests.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::application::{
    ApplicationError,
    ports::{Filesystem, TemplateCatalog, TemplateRenderer},
};
use crate::domain::{DomainError, PlaceholderMap, Template, TemplateId};
use crate::error::GoskelResult;

#[derive(Default)]
struct State {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
    fail_at: Option<PathBuf>,
}

/// Shared-state filesystem; clones see the same files.
#[derive(Clone, Default)]
pub struct FakeFilesystem {
    state: Arc<Mutex<State>>,
}

impl FakeFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_file(&self, path: &str, content: &str) {
        let mut s = self.state.lock().unwrap();
        s.files.insert(PathBuf::from(path), content.into());
    }

    pub fn seed_dir(&self, path: &str) {
        let mut s = self.state.lock().unwrap();
        let mut current = PathBuf::new();
        for c in Path::new(path).components() {
            current.push(c);
            s.dirs.insert(current.clone());
        }
    }

    /// Make writes to `path` fail with `FileWriteError`.
    pub fn fail_writes_at(&self, path: &str) {
        self.state.lock().unwrap().fail_at = Some(PathBuf::from(path));
    }

    pub fn read(&self, path: &Path) -> Option<String> {
        self.state.lock().unwrap().files.get(path).cloned()
    }

    pub fn file_count(&self) -> usize {
        self.state.lock().unwrap().files.len()
    }

    fn store(&self, path: &Path, content: &str, must_be_new: bool) -> GoskelResult<()> {
        let mut s = self.state.lock().unwrap();
        if s.fail_at.as_deref() == Some(path) {
            return Err(ApplicationError::FileWriteError {
                path: path.into(),
                reason: "injected failure".into(),
            }
            .into());
        }
        if must_be_new && s.files.contains_key(path) {
            return Err(ApplicationError::FileAlreadyExists { path: path.into() }.into());
        }
        s.files.insert(path.into(), content.into());
        Ok(())
    }
}

impl Filesystem for FakeFilesystem {
    fn create_dir_all(&self, path: &Path) -> GoskelResult<()> {
        let mut s = self.state.lock().unwrap();
        let mut current = PathBuf::new();
        for c in path.components() {
            current.push(c);
            s.dirs.insert(current.clone());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> GoskelResult<()> {
        self.store(path, content, false)
    }

    fn create_new_file(&self, path: &Path, content: &str) -> GoskelResult<()> {
        self.store(path, content, true)
    }

    fn exists(&self, path: &Path) -> bool {
        let s = self.state.lock().unwrap();
        s.files.contains_key(path) || s.dirs.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.state.lock().unwrap().dirs.contains(path)
    }
}

/// Catalog holding whatever the test puts in it.
#[derive(Default)]
pub struct FakeCatalog {
    templates: HashMap<TemplateId, Template>,
}

impl FakeCatalog {
    pub fn with(mut self, id: TemplateId, text: &'static str) -> Self {
        self.templates.insert(id, Template::builtin(id, text));
        self
    }
}

impl TemplateCatalog for FakeCatalog {
    fn lookup(&self, id: TemplateId) -> GoskelResult<Template> {
        self.templates.get(&id).cloned().ok_or_else(|| {
            DomainError::UnknownTemplate {
                id: id.to_string(),
            }
            .into()
        })
    }

    fn list(&self) -> GoskelResult<Vec<Template>> {
        let mut all: Vec<_> = self.templates.values().cloned().collect();
        all.sort_by_key(|t| t.id);
        Ok(all)
    }
}

pub struct FakeRenderer;

impl TemplateRenderer for FakeRenderer {
    fn render(&self, template: &Template, values: &PlaceholderMap) -> GoskelResult<String> {
        Ok(template.render(values)?)
    }
}
