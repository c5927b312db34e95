//! Implementation of the `goskel list` command.

use crate::{config::AppConfig, error::CliResult, output::OutputManager};

pub fn execute(verbose: bool, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let templates = super::generation_service(&config)?.list_templates()?;

    output.header("Available Templates:")?;
    for template in templates {
        let source = if template.builtin {
            "built-in"
        } else {
            "overridden"
        };
        output.print(&format!(
            "  {:<20} {:<10} {}",
            template.id.as_str(),
            source,
            template.description
        ))?;

        if verbose && !template.placeholders.is_empty() {
            output.print(&format!(
                "  {:<20} placeholders: {}",
                "",
                template.placeholders.join(", ")
            ))?;
        }
    }

    Ok(())
}
