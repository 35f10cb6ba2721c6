//! Output formatter trait for CLI results.

use crate::settings::LauncherSettings;
use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use wadkit_core::ArchiveSummary;
use wadkit_core::LaunchPlan;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format inspection results, one per requested file, in input order
    fn format_inspection(&self, results: &[wadkit_core::Result<ArchiveSummary>]) -> Result<()>;

    /// Format a launch plan (dry run), noting where settings were saved
    fn format_launch_plan(&self, plan: &LaunchPlan, saved_to: Option<&Path>) -> Result<()>;

    /// Format saved launcher settings
    fn format_settings(&self, path: &Path, settings: &LauncherSettings) -> Result<()>;

    /// Format the settings file location
    fn format_settings_path(&self, path: &Path) -> Result<()>;

    /// Format error message
    fn format_error(&self, error: &anyhow::Error);

    /// Format success message
    fn format_success(&self, message: &str);

    /// Format warning message
    fn format_warning(&self, message: &str);
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
        }
    }

    /// Error status that still carries the partial result.
    pub fn partial(operation: impl Into<String>, data: T, error: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Error,
            data: Some(data),
            error: Some(error.into()),
        }
    }

    pub fn error(operation: impl Into<String>, error: impl Into<String>) -> JsonOutput<()> {
        JsonOutput {
            operation: operation.into(),
            status: Status::Error,
            data: None,
            error: Some(error.into()),
        }
    }
}
