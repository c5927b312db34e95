//! Choices gathered for `init`.
//!
//! Only the router influences what gets written; the remaining choices are
//! recorded for display and logging and then dropped, exactly like the
//! prompt answers they come from.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::template::TemplateId;

pub const ROUTER_CHOICES: [&str; 4] = ["net/http", "gin", "echo", "chi"];
pub const LOGGER_CHOICES: [&str; 4] = ["log", "logrus", "zap", "zerolog"];
pub const DATABASE_CHOICES: [&str; 4] = ["none", "postgres", "mysql", "mongodb"];
pub const CACHE_CHOICES: [&str; 3] = ["none", "in-memory", "redis"];

pub const DEFAULT_GO_VERSION: &str = "1.22";

/// HTTP router framework for the generated entry point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Router {
    #[default]
    NetHttp,
    Gin,
    Echo,
    Chi,
}

impl Router {
    /// Exact, case-sensitive match on the choice label. Anything that is not
    /// `gin`, `echo` or `chi` selects plain `net/http`.
    pub fn from_choice(choice: &str) -> Self {
        match choice {
            "gin" => Self::Gin,
            "echo" => Self::Echo,
            "chi" => Self::Chi,
            _ => Self::NetHttp,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NetHttp => "net/http",
            Self::Gin => "gin",
            Self::Echo => "echo",
            Self::Chi => "chi",
        }
    }

    /// Entry-point template variant for this router.
    pub const fn entry_point(&self) -> TemplateId {
        match self {
            Self::NetHttp => TemplateId::MainNetHttp,
            Self::Gin => TemplateId::MainGin,
            Self::Echo => TemplateId::MainEcho,
            Self::Chi => TemplateId::MainChi,
        }
    }
}

impl From<String> for Router {
    fn from(choice: String) -> Self {
        Self::from_choice(&choice)
    }
}

impl From<Router> for String {
    fn from(router: Router) -> Self {
        router.as_str().to_string()
    }
}

impl fmt::Display for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Project choices for `init`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub router: Router,
    pub logger: String,
    pub database: String,
    pub cache: String,
    pub use_redis: bool,
    pub use_kafka: bool,
    pub use_grpc: bool,
    /// Go language version written into `go.mod`.
    pub go_version: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            router: Router::NetHttp,
            logger: LOGGER_CHOICES[0].into(),
            database: DATABASE_CHOICES[0].into(),
            cache: CACHE_CHOICES[0].into(),
            use_redis: false,
            use_kafka: false,
            use_grpc: false,
            go_version: DEFAULT_GO_VERSION.into(),
        }
    }
}
