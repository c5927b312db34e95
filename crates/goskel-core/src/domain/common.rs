use std::fmt;
use std::path::{Path, PathBuf};

use super::DomainError;

/// A filesystem path guaranteed to be relative.
///
/// Invariant: Never absolute. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Create a new relative path.
    ///
    /// # Panics
    /// Panics if path is absolute (use `try_new` for fallible).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        assert!(
            !path.is_absolute(),
            "RelativePath cannot be absolute: {:?}",
            path
        );
        Self(path)
    }

    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.is_absolute() {
            Err(DomainError::AbsolutePathNotAllowed {
                path: path.display().to_string(),
            })
        } else {
            Ok(Self(path))
        }
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// A user-supplied component or project name.
///
/// Only path safety is checked: the name becomes a directory and file stem,
/// so it must be a single non-hidden path segment. Casing and Go identifier
/// validity are left exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentName(String);

impl ComponentName {
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let name = raw.into();
        let invalid = |reason: &str| DomainError::InvalidName {
            name: name.clone(),
            reason: reason.into(),
        };

        if name.trim().is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if name.starts_with('.') {
            return Err(invalid("name cannot start with '.'"));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(invalid("name cannot contain path separators"));
        }
        if name.contains('\0') {
            return Err(invalid("name cannot contain NUL bytes"));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name with a fixed suffix appended, e.g. `Order` + `Service`.
    pub fn suffixed(&self, suffix: &str) -> String {
        format!("{}{suffix}", self.0)
    }
}

impl AsRef<Path> for ComponentName {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_path_rejects_absolute() {
        assert!(RelativePath::try_new("/etc/passwd").is_err());
        assert!(RelativePath::try_new("internal/core").is_ok());
    }

    #[test]
    #[should_panic(expected = "cannot be absolute")]
    fn relative_path_new_panics_on_absolute() {
        RelativePath::new("/var/tmp");
    }

    #[test]
    fn component_name_keeps_casing() {
        let name = ComponentName::parse("order_Item").unwrap();
        assert_eq!(name.as_str(), "order_Item");
        assert_eq!(name.suffixed("Service"), "order_ItemService");
    }

    #[test]
    fn component_name_rejects_unsafe_segments() {
        for bad in ["", "   ", ".hidden", "a/b", "a\\b", "..", "nul\0byte"] {
            assert!(
                matches!(
                    ComponentName::parse(bad),
                    Err(DomainError::InvalidName { .. })
                ),
                "accepted: {bad:?}"
            );
        }
    }

    #[test]
    fn component_name_allows_non_identifier_characters() {
        // Not a valid Go identifier, but a safe path segment.
        assert!(ComponentName::parse("my-domain").is_ok());
    }
}
