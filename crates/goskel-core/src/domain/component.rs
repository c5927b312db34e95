//! The three layers a generated component can live in.

use std::fmt;

/// Which canonical root a component belongs to.
///
/// The declaration order is the classifier's probe priority: when a name
/// exists under several roots, the earliest variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Domain,
    Usecase,
    Handler,
}

impl ComponentKind {
    /// Probe order used by the component classifier.
    pub const PRIORITY: [ComponentKind; 3] = [Self::Domain, Self::Usecase, Self::Handler];

    /// Directory (relative to the working directory) holding every
    /// component of this kind.
    pub const fn root(&self) -> &'static str {
        match self {
            Self::Domain => "internal/core",
            Self::Usecase => "internal/usecase",
            Self::Handler => "internal/interfaces",
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Usecase => "usecase",
            Self::Handler => "handler",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Directory that receives mock stubs, independent of component kind.
pub const MOCKS_ROOT: &str = "internal/mocks";
