//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use crate::error::convert_wadkit_error;
use crate::settings::LauncherSettings;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;
use wadkit_core::ArchiveSummary;
use wadkit_core::LaunchPlan;

pub struct JsonFormatter;

#[derive(Debug, Serialize)]
struct EntryOutput {
    index: usize,
    name: String,
    size: u64,
}

#[derive(Debug, Serialize)]
struct FileOutput {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    entry_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    truncated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    modified: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    entries: Vec<EntryOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl FileOutput {
    fn from_summary(summary: &ArchiveSummary) -> Self {
        Self {
            path: summary.path().display().to_string(),
            kind: Some(summary.kind().label().to_string()),
            entry_count: Some(summary.entry_count()),
            truncated: Some(summary.truncated()),
            file_size: summary.file_size(),
            modified: summary.modified_display(),
            entries: summary
                .entries()
                .iter()
                .map(|e| EntryOutput {
                    index: e.index,
                    name: e.name.clone(),
                    size: e.size,
                })
                .collect(),
            error: None,
        }
    }

    fn from_error(err: &wadkit_core::WadkitError) -> Self {
        Self {
            path: err
                .path()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            kind: None,
            entry_count: None,
            truncated: None,
            file_size: None,
            modified: None,
            entries: Vec::new(),
            error: Some(convert_wadkit_error(err).to_string()),
        }
    }
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }

    /// Diagnostics go to stderr as one compact line, keeping stdout a single
    /// JSON document.
    fn diagnostic<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        writeln!(io::stderr(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_inspection(&self, results: &[wadkit_core::Result<ArchiveSummary>]) -> Result<()> {
        #[derive(Serialize)]
        struct InspectionOutput {
            files: Vec<FileOutput>,
        }

        let files: Vec<FileOutput> = results
            .iter()
            .map(|r| match r {
                Ok(summary) => FileOutput::from_summary(summary),
                Err(e) => FileOutput::from_error(e),
            })
            .collect();

        let failed = files.iter().filter(|f| f.error.is_some()).count();
        let data = InspectionOutput { files };

        let output = if failed == 0 {
            JsonOutput::success("inspect", data)
        } else {
            JsonOutput::partial(
                "inspect",
                data,
                format!("{failed} of {} files could not be read", results.len()),
            )
        };
        Self::output(&output)
    }

    fn format_launch_plan(&self, plan: &LaunchPlan, saved_to: Option<&Path>) -> Result<()> {
        #[derive(Serialize)]
        struct LaunchOutput {
            program: String,
            args: Vec<String>,
            command_line: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            saved_to: Option<String>,
        }

        let data = LaunchOutput {
            program: plan.program().display().to_string(),
            args: plan
                .args()
                .iter()
                .map(|a| a.to_string_lossy().into_owned())
                .collect(),
            command_line: plan.to_string(),
            saved_to: saved_to.map(|p| p.display().to_string()),
        };

        Self::output(&JsonOutput::success("launch", data))
    }

    fn format_settings(&self, path: &Path, settings: &LauncherSettings) -> Result<()> {
        #[derive(Serialize)]
        struct SettingsOutput<'a> {
            path: String,
            settings: &'a LauncherSettings,
        }

        let data = SettingsOutput {
            path: path.display().to_string(),
            settings,
        };

        Self::output(&JsonOutput::success("config", data))
    }

    fn format_settings_path(&self, path: &Path) -> Result<()> {
        #[derive(Serialize)]
        struct PathOutput {
            path: String,
        }

        let data = PathOutput {
            path: path.display().to_string(),
        };

        Self::output(&JsonOutput::success("config", data))
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output = JsonOutput::<()>::error("unknown", format!("{error:?}"));
        let _ = Self::output(&output);
    }

    fn format_success(&self, message: &str) {
        #[derive(Serialize)]
        struct SuccessData {
            message: String,
        }

        let output = JsonOutput::success(
            "unknown",
            SuccessData {
                message: message.to_string(),
            },
        );
        let _ = Self::output(&output);
    }

    fn format_warning(&self, message: &str) {
        #[derive(Serialize)]
        struct WarningData {
            message: String,
        }

        let output = JsonOutput::success(
            "warning",
            WarningData {
                message: message.to_string(),
            },
        );
        let _ = Self::diagnostic(&output);
    }
}
