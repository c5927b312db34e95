//! Component classification by directory presence.

use std::path::Path;

use tracing::debug;

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{ComponentKind, ComponentName},
    error::GoskelResult,
};

/// Decides whether a name is a domain, usecase or handler by looking for
/// `<root>/<name>` under each canonical root in [`ComponentKind::PRIORITY`]
/// order. Contents are never inspected; an empty directory matches.
pub struct ComponentClassifier {
    filesystem: Box<dyn Filesystem>,
}

impl ComponentClassifier {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// First matching kind, or `None`.
    pub fn probe(&self, root: &Path, name: &ComponentName) -> Option<ComponentKind> {
        ComponentKind::PRIORITY.into_iter().find(|kind| {
            let candidate = root.join(kind.root()).join(name);
            let hit = self.filesystem.is_dir(&candidate);
            debug!(path = %candidate.display(), hit, "probe component");
            hit
        })
    }

    /// Like [`probe`](Self::probe), but a miss is `UnknownComponent`.
    pub fn classify(&self, root: &Path, name: &ComponentName) -> GoskelResult<ComponentKind> {
        self.probe(root, name).ok_or_else(|| {
            ApplicationError::UnknownComponent {
                name: name.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::fakes::FakeFilesystem;
    use crate::error::GoskelError;

    fn name(s: &str) -> ComponentName {
        ComponentName::parse(s).unwrap()
    }

    #[test]
    fn empty_directory_is_enough() {
        let fs = FakeFilesystem::new();
        fs.seed_dir("internal/usecase/Order");
        let c = ComponentClassifier::new(Box::new(fs));

        assert_eq!(
            c.probe(Path::new(""), &name("Order")),
            Some(ComponentKind::Usecase)
        );
    }

    #[test]
    fn domain_wins_over_other_roots() {
        let fs = FakeFilesystem::new();
        fs.seed_dir("internal/interfaces/Order");
        fs.seed_dir("internal/usecase/Order");
        fs.seed_dir("internal/core/Order");
        let c = ComponentClassifier::new(Box::new(fs));

        assert_eq!(
            c.classify(Path::new(""), &name("Order")).unwrap(),
            ComponentKind::Domain
        );
    }

    #[test]
    fn usecase_wins_over_handler() {
        let fs = FakeFilesystem::new();
        fs.seed_dir("internal/interfaces/Order");
        fs.seed_dir("internal/usecase/Order");
        let c = ComponentClassifier::new(Box::new(fs));

        assert_eq!(
            c.probe(Path::new(""), &name("Order")),
            Some(ComponentKind::Usecase)
        );
    }

    #[test]
    fn a_file_does_not_count() {
        let fs = FakeFilesystem::new();
        fs.seed_file("internal/core/Order", "not a dir");
        let c = ComponentClassifier::new(Box::new(fs));

        assert_eq!(c.probe(Path::new(""), &name("Order")), None);
    }

    #[test]
    fn unknown_name_is_an_error() {
        let c = ComponentClassifier::new(Box::new(FakeFilesystem::new()));

        let err = c.classify(Path::new("."), &name("Ghost")).unwrap_err();

        assert!(matches!(
            err,
            GoskelError::Application(ApplicationError::UnknownComponent { ref name }) if name == "Ghost"
        ));
    }

    #[test]
    fn probes_are_relative_to_root() {
        let fs = FakeFilesystem::new();
        fs.seed_dir("proj/internal/interfaces/Pay");
        let c = ComponentClassifier::new(Box::new(fs));

        assert_eq!(c.probe(Path::new(""), &name("Pay")), None);
        assert_eq!(
            c.probe(Path::new("proj"), &name("Pay")),
            Some(ComponentKind::Handler)
        );
    }
}
