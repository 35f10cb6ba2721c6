//! Config command implementation

use crate::cli::ConfigAction;
use crate::cli::ConfigArgs;
use crate::output::OutputFormatter;
use crate::settings::LauncherSettings;
use anyhow::Context;
use anyhow::Result;
use std::fs;
use std::io;
use std::path::Path;

pub fn execute(args: &ConfigArgs, config: &Path, formatter: &dyn OutputFormatter) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            let settings = LauncherSettings::load(config)?;
            formatter.format_settings(config, &settings)
        }
        ConfigAction::Path => formatter.format_settings_path(config),
        ConfigAction::Reset => {
            reset(config)?;
            formatter.format_success(&format!("Removed {}", config.display()));
            Ok(())
        }
    }
}

/// Deletes the settings file. A file that is already gone is not an error.
fn reset(config: &Path) -> Result<()> {
    match fs::remove_file(config) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %config.display(), "no settings file to remove");
            Ok(())
        }
        Err(e) => Err(e).with_context(|| format!("Cannot remove '{}'", config.display())),
    }
}
