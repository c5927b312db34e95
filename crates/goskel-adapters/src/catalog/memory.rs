//! In-memory template catalog with built-in templates.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use tracing::{debug, info};

use goskel_core::{
    application::{ApplicationError, ports::TemplateCatalog},
    domain::{DomainError, Template, TemplateId},
    error::GoskelResult,
};

use super::{builtin, overrides::TemplateOverrideLoader};

/// Thread-safe in-memory template catalog.
#[derive(Clone)]
pub struct InMemoryCatalog {
    inner: Arc<RwLock<HashMap<TemplateId, Template>>>,
}

impl InMemoryCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a catalog with every built-in template loaded.
    pub fn with_builtin() -> GoskelResult<Self> {
        let catalog = Self::new();
        catalog.load_builtin()?;
        Ok(catalog)
    }

    /// Load built-in templates, replacing entries with the same id.
    pub fn load_builtin(&self) -> GoskelResult<()> {
        for template in builtin::all_templates() {
            self.insert(template)?;
        }
        Ok(())
    }

    /// Replace entries with the override files found by `loader`.
    /// Returns how many entries were replaced.
    pub fn apply_overrides(&self, loader: &TemplateOverrideLoader) -> GoskelResult<usize> {
        let overrides = loader.load_all()?;
        let count = overrides.len();
        for template in overrides {
            debug!(id = %template.id, "template overridden");
            self.insert(template)?;
        }
        info!(count, dir = %loader.dir().display(), "template overrides applied");
        Ok(count)
    }

    pub fn insert(&self, template: Template) -> GoskelResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        inner.insert(template.id, template);
        Ok(())
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    /// Check if catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateCatalog for InMemoryCatalog {
    fn lookup(&self, id: TemplateId) -> GoskelResult<Template> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        inner.get(&id).cloned().ok_or_else(|| {
            DomainError::UnknownTemplate {
                id: id.to_string(),
            }
            .into()
        })
    }

    fn list(&self) -> GoskelResult<Vec<Template>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        let mut templates: Vec<Template> = inner.values().cloned().collect();
        templates.sort_by_key(|t| t.id);
        Ok(templates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goskel_core::error::GoskelError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn builtin_catalog_is_complete() {
        let catalog = InMemoryCatalog::with_builtin().unwrap();
        assert_eq!(catalog.len(), TemplateId::ALL.len());
        for id in TemplateId::ALL {
            assert!(catalog.lookup(id).is_ok(), "{id}");
        }
    }

    #[test]
    fn empty_catalog_reports_unknown_template() {
        let catalog = InMemoryCatalog::new();
        assert!(catalog.is_empty());

        let err = catalog.lookup(TemplateId::Entity).unwrap_err();

        assert!(matches!(
            err,
            GoskelError::Domain(DomainError::UnknownTemplate { ref id }) if id == "entity"
        ));
    }

    #[test]
    fn list_is_in_id_order() {
        let catalog = InMemoryCatalog::with_builtin().unwrap();
        let ids: Vec<_> = catalog.list().unwrap().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, TemplateId::ALL.to_vec());
    }

    #[test]
    fn overrides_replace_builtin_text() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("entity.tmpl"), "package {{Domain}} // custom\n").unwrap();
        let catalog = InMemoryCatalog::with_builtin().unwrap();

        let replaced = catalog
            .apply_overrides(&TemplateOverrideLoader::new(dir.path()))
            .unwrap();

        assert_eq!(replaced, 1);
        let entity = catalog.lookup(TemplateId::Entity).unwrap();
        assert!(!entity.is_builtin());
        assert!(entity.text().contains("custom"));
        assert!(catalog.lookup(TemplateId::Repository).unwrap().is_builtin());
    }
}
