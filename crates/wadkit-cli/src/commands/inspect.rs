//! Inspect command implementation

use crate::cli::InspectArgs;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Result;
use anyhow::bail;

pub fn execute(args: &InspectArgs, formatter: &dyn OutputFormatter, quiet: bool) -> Result<()> {
    let show_progress = !quiet && args.files.len() > 1 && CliProgress::should_show();
    let progress = show_progress.then(|| CliProgress::new(args.files.len(), "Inspecting"));

    let mut results = Vec::with_capacity(args.files.len());
    for path in &args.files {
        if let Some(p) = &progress {
            p.start_file(path);
        }
        results.push(wadkit_core::inspect(path));
        if let Some(p) = &progress {
            p.finish_file();
        }
    }
    drop(progress);

    formatter.format_inspection(&results)?;

    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        bail!("{failed} of {} files could not be read", results.len());
    }

    Ok(())
}
