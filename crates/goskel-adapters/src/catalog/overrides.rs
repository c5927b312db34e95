//! Filesystem-based template overrides.
//!
//! # Directory layout expected
//!
//! ```text
//! my-templates/
//! ├── entity.tmpl          ← replaces the built-in `entity` template
//! ├── http-handler.tmpl
//! └── notes.txt            ← ignored (not `.tmpl`)
//! ```
//!
//! File stems must be template ids as printed by `goskel list`. Unknown
//! stems are skipped with a `WARN` log. Subdirectories are not searched.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use goskel_core::{
    application::ApplicationError,
    domain::{Template, TemplateId},
    error::GoskelResult,
};

pub struct TemplateOverrideLoader {
    dir: PathBuf,
}

impl TemplateOverrideLoader {
    /// The directory does not need to exist yet; [`load_all`](Self::load_all)
    /// fails if it is missing when called.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Every valid override, in `TemplateId` order.
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    pub fn load_all(&self) -> GoskelResult<Vec<Template>> {
        if !self.dir.is_dir() {
            return Err(self.failure(&self.dir, "not a directory"));
        }

        let mut templates = Vec::new();

        for entry in WalkDir::new(&self.dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| self.failure(&self.dir, e))?;
            let path = entry.path();

            if !entry.file_type().is_file()
                || path.extension().and_then(|e| e.to_str()) != Some("tmpl")
            {
                continue;
            }

            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let id = match stem.parse::<TemplateId>() {
                Ok(id) => id,
                Err(_) => {
                    warn!(file = %path.display(), "skipping override with unknown template id");
                    continue;
                }
            };

            let text = fs::read_to_string(path).map_err(|e| self.failure(path, e))?;
            debug!(%id, file = %path.display(), "loaded override");
            templates.push(Template::owned(id, text));
        }

        templates.sort_by_key(|t| t.id);
        Ok(templates)
    }

    fn failure(&self, path: &Path, reason: impl ToString) -> goskel_core::error::GoskelError {
        ApplicationError::TemplateLoadFailed {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goskel_core::error::GoskelError;
    use tempfile::TempDir;

    #[test]
    fn missing_directory_is_an_error() {
        let loader = TemplateOverrideLoader::new("/absolutely/does/not/exist");
        assert!(matches!(
            loader.load_all(),
            Err(GoskelError::Application(
                ApplicationError::TemplateLoadFailed { .. }
            ))
        ));
    }

    #[test]
    fn loads_known_ids_and_skips_the_rest() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("repository.tmpl"), "repo").unwrap();
        fs::write(dir.path().join("entity.tmpl"), "entity").unwrap();
        fs::write(dir.path().join("not-a-template.tmpl"), "x").unwrap();
        fs::write(dir.path().join("README.md"), "docs").unwrap();

        let templates = TemplateOverrideLoader::new(dir.path()).load_all().unwrap();

        let ids: Vec<_> = templates.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TemplateId::Entity, TemplateId::Repository]);
        assert_eq!(templates[1].text(), "repo");
    }

    #[test]
    fn nested_directories_are_not_searched() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("entity.tmpl"), "deep").unwrap();

        let templates = TemplateOverrideLoader::new(dir.path()).load_all().unwrap();

        assert!(templates.is_empty());
    }
}
