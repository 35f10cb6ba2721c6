//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use crate::error::convert_wadkit_error;
use crate::settings::LauncherSettings;
use anyhow::Result;
use console::Term;
use console::style;
use std::path::Path;
use wadkit_core::ArchiveSummary;
use wadkit_core::LaunchPlan;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
    err_term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
            err_term: Term::stderr(),
        }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn format_number(n: usize) -> String {
        let s = n.to_string();
        let mut result = String::new();
        let mut count = 0;

        for c in s.chars().rev() {
            if count == 3 {
                result.push(',');
                count = 0;
            }
            result.push(c);
            count += 1;
        }

        result.chars().rev().collect()
    }

    /// Writes a summary block, with the path line highlighted on a color
    /// terminal.
    fn write_summary(&self, summary: &ArchiveSummary) {
        let text = summary.to_string();
        if self.use_colors {
            let (head, rest) = text.split_once('\n').unwrap_or((text.as_str(), ""));
            let _ = self.term.write_line(&style(head).bold().to_string());
            if !rest.is_empty() {
                let _ = self.term.write_line(rest);
            }
        } else {
            let _ = self.term.write_line(&text);
        }
    }

    fn optional_path(path: Option<&Path>) -> String {
        path.map_or_else(|| "-".to_string(), |p| p.display().to_string())
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_inspection(&self, results: &[wadkit_core::Result<ArchiveSummary>]) -> Result<()> {
        let mut shown = 0usize;
        let mut total_size = 0u64;

        for result in results {
            match result {
                Ok(summary) => {
                    if self.quiet {
                        continue;
                    }
                    if shown > 0 {
                        let _ = self.term.write_line("");
                    }
                    self.write_summary(summary);
                    shown += 1;
                    total_size += summary.file_size().unwrap_or(0);
                }
                Err(e) => self.format_error(&convert_wadkit_error(e)),
            }
        }

        if self.verbose && shown > 1 {
            let _ = self.term.write_line("");
            let _ = self.term.write_line(&format!(
                "Total: {} files, {}",
                Self::format_number(shown),
                Self::format_size(total_size)
            ));
        }

        Ok(())
    }

    fn format_launch_plan(&self, plan: &LaunchPlan, saved_to: Option<&Path>) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if let Some(path) = saved_to {
            self.format_success(&format!("Saved launcher settings to {}", path.display()));
        }

        let _ = self.term.write_line(&plan.to_string());
        Ok(())
    }

    fn format_settings(&self, path: &Path, settings: &LauncherSettings) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.use_colors {
            let _ = self.term.write_line(&format!(
                "{} {}",
                style("Settings:").bold(),
                path.display()
            ));
        } else {
            let _ = self
                .term
                .write_line(&format!("Settings: {}", path.display()));
        }

        let _ = self.term.write_line(&format!(
            "  Source port:     {}",
            Self::optional_path(settings.source_port_path.as_deref())
        ));
        if self.verbose {
            let _ = self.term.write_line(&format!(
                "  Source port dir: {}",
                Self::optional_path(settings.source_port_dir.as_deref())
            ));
        }
        let _ = self.term.write_line(&format!(
            "  IWAD:            {}",
            Self::optional_path(settings.iwad_path.as_deref())
        ));

        if settings.pwad_paths.is_empty() {
            let _ = self.term.write_line("  PWADs:           -");
        } else {
            let _ = self.term.write_line("  PWADs:");
            for (i, pwad) in settings.pwad_paths.iter().enumerate() {
                let _ = self
                    .term
                    .write_line(&format!("    {}. {}", i + 1, pwad.display()));
            }
        }

        let options = if settings.options.is_empty() {
            "-".to_string()
        } else {
            settings.options.join(" ")
        };
        let _ = self
            .term
            .write_line(&format!("  Options:         {options}"));

        Ok(())
    }

    fn format_settings_path(&self, path: &Path) -> Result<()> {
        let _ = self.term.write_line(&path.display().to_string());
        Ok(())
    }

    fn format_error(&self, error: &anyhow::Error) {
        // Always show errors, even in quiet mode
        if self.use_colors {
            let _ = self
                .err_term
                .write_line(&format!("{} {error:?}", style("ERROR:").red().bold()));
        } else {
            let _ = self.err_term.write_line(&format!("ERROR: {error:?}"));
        }
    }

    fn format_success(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("✓").green().bold()));
        } else {
            let _ = self.term.write_line(message);
        }
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            let _ = self
                .err_term
                .write_line(&format!("{} {message}", style("⚠").yellow().bold()));
        } else {
            let _ = self.err_term.write_line(&format!("WARNING: {message}"));
        }
    }
}
