//! Command handlers

pub mod check;
pub mod compile;
pub mod show;

use anyhow::{Context, Result};

use bactwin::config::ConfigWarning;
use bactwin::{Config, ResolveContext};

use crate::cli::SourceArgs;

/// Build the resolution context: config file, env, then CLI flags.
pub fn load_context(source: &SourceArgs) -> Result<(ResolveContext, Vec<ConfigWarning>)> {
    let (config, warnings) = Config::load_for_root(&source.root)
        .with_context(|| format!("failed to load configuration from {}", source.root.display()))?;
    let ctx = ResolveContext::from_config(&source.root, &config).with_locale(source.locale.clone());
    Ok((ctx, warnings))
}

/// Report config warnings on stderr, or as events in JSON mode.
pub fn report_warnings(command: &str, warnings: &[ConfigWarning], json: bool) -> Result<()> {
    if json {
        for event in crate::ui::output::config_warning_events(command, warnings) {
            crate::ui::json::emit(event)?;
        }
    } else {
        crate::ui::output::print_config_warnings(warnings);
    }
    Ok(())
}
