//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `GOSKEL_<SECTION>__<KEY>`, plus
//!    `GOSKEL_TEMPLATES_DIR` for `templates.local_path`
//! 3. Config file (`--config FILE`, else [`AppConfig::config_path`])
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use goskel_core::{application::WritePolicy, domain::ProjectConfig};

const ENV_PREFIX: &str = "GOSKEL";
const TEMPLATES_DIR_VAR: &str = "GOSKEL_TEMPLATES_DIR";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub generation: GenerationConfig,
    /// Defaults for `goskel init` when a flag is absent and no prompt runs.
    pub init: ProjectConfig,
    pub templates: TemplateConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Replace existing files without `--force`.
    pub overwrite: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory of `<template-id>.tmpl` overrides.
    pub local_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from file and environment on top of defaults.
    ///
    /// An explicit `config_file` must exist; the default location may not.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_with_env(config_file, None)
    }

    /// [`Self::load`] reading `GOSKEL_*` variables from `vars` instead of the
    /// process environment when given.
    ///
    /// Values stay strings until deserialisation, so `1.20` is not a float.
    fn load_with_env(
        config_file: Option<&PathBuf>,
        vars: Option<config::Map<String, String>>,
    ) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        let templates_dir = match &vars {
            Some(vars) => vars.get(TEMPLATES_DIR_VAR).cloned(),
            None => std::env::var(TEMPLATES_DIR_VAR).ok(),
        };

        let config = Config::builder()
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .source(vars),
            )
            .set_override_option("templates.local_path", templates_dir)?
            .build()
            .with_context(|| format!("reading {}", path.display()))?;

        config
            .try_deserialize()
            .with_context(|| format!("invalid configuration in {}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.goskel.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "goskel", "goskel")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".goskel.toml"))
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// `--force` wins; otherwise `generation.overwrite` decides.
    pub fn write_policy(&self, force: bool) -> WritePolicy {
        WritePolicy::from_force(force || self.generation.overwrite)
    }

    pub fn templates_dir(&self) -> Option<&Path> {
        self.templates.local_path.as_deref()
    }

    /// One value by dotted key, rendered for display.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "generation.overwrite" => self.generation.overwrite.to_string(),
            "init.router" => self.init.router.to_string(),
            "init.logger" => self.init.logger.clone(),
            "init.database" => self.init.database.clone(),
            "init.cache" => self.init.cache.clone(),
            "init.use_redis" => self.init.use_redis.to_string(),
            "init.use_kafka" => self.init.use_kafka.to_string(),
            "init.use_grpc" => self.init.use_grpc.to_string(),
            "init.go_version" => self.init.go_version.clone(),
            "templates.local_path" => self
                .templates
                .local_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            "output.no_color" => self.output.no_color.to_string(),
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goskel_core::domain::Router;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_project_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.init.router, Router::NetHttp);
        assert_eq!(cfg.init.go_version, "1.22");
        assert!(!cfg.generation.overwrite);
        assert!(cfg.templates_dir().is_none());
    }

    #[test]
    fn explicit_file_is_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("goskel.toml");
        fs::write(
            &path,
            "[generation]\noverwrite = true\n\n[init]\nrouter = \"chi\"\nuse_grpc = true\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();

        assert!(cfg.generation.overwrite);
        assert_eq!(cfg.init.router, Router::Chi);
        assert!(cfg.init.use_grpc);
        assert_eq!(cfg.init.go_version, "1.22");
        assert_eq!(cfg.init.logger, "log");
    }

    fn vars(pairs: &[(&str, &str)]) -> Option<config::Map<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn go_version_from_environment_keeps_trailing_zero() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("goskel.toml");
        fs::write(&path, "").unwrap();

        let cfg = AppConfig::load_with_env(
            Some(&path),
            vars(&[
                ("GOSKEL_INIT__GO_VERSION", "1.20"),
                ("GOSKEL_INIT__USE_REDIS", "true"),
                ("GOSKEL_GENERATION__OVERWRITE", "true"),
            ]),
        )
        .unwrap();

        assert_eq!(cfg.init.go_version, "1.20");
        assert!(cfg.init.use_redis);
        assert!(cfg.generation.overwrite);
    }

    #[test]
    fn templates_dir_variable_sets_local_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("goskel.toml");
        fs::write(&path, "").unwrap();

        let cfg =
            AppConfig::load_with_env(Some(&path), vars(&[("GOSKEL_TEMPLATES_DIR", "tmpl")]))
                .unwrap();

        assert_eq!(cfg.templates_dir(), Some(Path::new("tmpl")));
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn write_policy_honours_force_and_config() {
        let mut cfg = AppConfig::default();
        assert_eq!(cfg.write_policy(false), WritePolicy::RejectExisting);
        assert_eq!(cfg.write_policy(true), WritePolicy::Overwrite);

        cfg.generation.overwrite = true;
        assert_eq!(cfg.write_policy(false), WritePolicy::Overwrite);
    }

    #[test]
    fn toml_round_trips_defaults() {
        let cfg = AppConfig::default();
        let text = cfg.to_toml().unwrap();
        assert!(text.contains("[init]"));
        assert_eq!(toml::from_str::<AppConfig>(&text).unwrap(), cfg);
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("init.router").as_deref(), Some("net/http"));
        assert_eq!(cfg.get("templates.local_path").as_deref(), Some(""));
        assert!(cfg.get("does.not.exist").is_none());
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
