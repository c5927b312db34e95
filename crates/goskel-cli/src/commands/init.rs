//! `goskel init <project>`: project skeleton, `go.mod` and `main.go`.
//!
//! Choices come from flags first, then (on a terminal, without `--yes`)
//! from prompts, then from `[init]` in the configuration. Boolean flags
//! can only switch a service on.

use std::io::IsTerminal;

use goskel_core::domain::{GenerationPlan, ProjectConfig, Router};

use crate::{cli::InitArgs, config::AppConfig, error::CliResult, output::OutputManager};

pub fn execute(args: InitArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let name = super::parse_name(args.project.clone())?;

    let prompt = !args.yes && !args.write.dry_run && std::io::stdin().is_terminal();
    let project = if prompt {
        prompts::ask(&args, &config)?
    } else {
        from_flags(&args, &config)
    };
    tracing::debug!(?project, "project choices");

    let plan = GenerationPlan::project_init(&name, &project);
    if let Some(report) = super::run_plan(&plan, args.write, &config, &output)? {
        output.success(&format!(
            "Successfully created DDD project structure in {}/ with go.mod and main.go",
            report.location.display()
        ))?;
    }
    Ok(())
}

/// Choices without asking: flags over the configured `[init]` section.
fn from_flags(args: &InitArgs, config: &AppConfig) -> ProjectConfig {
    let base = config.init.clone();
    ProjectConfig {
        router: args
            .router
            .as_deref()
            .map(Router::from_choice)
            .unwrap_or(base.router),
        logger: args.logger.clone().unwrap_or(base.logger),
        database: args.database.clone().unwrap_or(base.database),
        cache: args.cache.clone().unwrap_or(base.cache),
        use_redis: args.redis || base.use_redis,
        use_kafka: args.kafka || base.use_kafka,
        use_grpc: args.grpc || base.use_grpc,
        go_version: base.go_version,
    }
}

#[cfg(feature = "interactive")]
mod prompts {
    use std::io;

    use dialoguer::{Confirm, Select, theme::ColorfulTheme};
    use goskel_core::domain::{
        ProjectConfig, Router,
        project::{CACHE_CHOICES, DATABASE_CHOICES, LOGGER_CHOICES, ROUTER_CHOICES},
    };

    use crate::{
        cli::InitArgs,
        config::AppConfig,
        error::{CliError, CliResult, IntoCli},
    };

    /// Ask for every choice a flag did not already settle.
    pub(super) fn ask(args: &InitArgs, config: &AppConfig) -> CliResult<ProjectConfig> {
        let preset = super::from_flags(args, config);
        let theme = ColorfulTheme::default();

        let router = match &args.router {
            Some(_) => preset.router,
            None => Router::from_choice(select(
                &theme,
                "Choose your router:",
                &ROUTER_CHOICES,
                preset.router.as_str(),
            )?),
        };
        let logger = match &args.logger {
            Some(l) => l.clone(),
            None => select(&theme, "Choose your logger:", &LOGGER_CHOICES, &preset.logger)?.into(),
        };
        let database = match &args.database {
            Some(d) => d.clone(),
            None => select(
                &theme,
                "Choose your database:",
                &DATABASE_CHOICES,
                &preset.database,
            )?
            .into(),
        };
        let cache = match &args.cache {
            Some(c) => c.clone(),
            None => select(&theme, "Choose your cache:", &CACHE_CHOICES, &preset.cache)?.into(),
        };

        Ok(ProjectConfig {
            router,
            logger,
            database,
            cache,
            use_redis: args.redis || confirm(&theme, "Use Redis?", preset.use_redis)?,
            use_kafka: args.kafka || confirm(&theme, "Use Kafka?", preset.use_kafka)?,
            use_grpc: args.grpc || confirm(&theme, "Use gRPC?", preset.use_grpc)?,
            go_version: preset.go_version,
        })
    }

    fn select(
        theme: &ColorfulTheme,
        prompt: &str,
        choices: &[&'static str],
        current: &str,
    ) -> CliResult<&'static str> {
        let default = choices.iter().position(|c| *c == current).unwrap_or(0);
        let picked = Select::with_theme(theme)
            .with_prompt(prompt)
            .items(choices)
            .default(default)
            .interact_opt()
            .map_err(io::Error::from)
            .with_cli_context(|| format!("reading answer to '{prompt}'"))?;

        picked.map(|i| choices[i]).ok_or(CliError::Cancelled)
    }

    fn confirm(theme: &ColorfulTheme, prompt: &str, default: bool) -> CliResult<bool> {
        Confirm::with_theme(theme)
            .with_prompt(prompt)
            .default(default)
            .interact_opt()
            .map_err(io::Error::from)
            .with_cli_context(|| format!("reading answer to '{prompt}'"))?
            .ok_or(CliError::Cancelled)
    }
}

#[cfg(not(feature = "interactive"))]
mod prompts {
    use goskel_core::domain::ProjectConfig;

    use crate::{cli::InitArgs, config::AppConfig, error::CliResult};

    /// Built without `dialoguer`: behave as if `--yes` was given.
    pub(super) fn ask(args: &InitArgs, config: &AppConfig) -> CliResult<ProjectConfig> {
        tracing::info!("interactive prompts not compiled in, using flags and defaults");
        Ok(super::from_flags(args, config))
    }
}
