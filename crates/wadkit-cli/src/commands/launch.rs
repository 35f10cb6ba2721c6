//! Launch command implementation

use crate::cli::LaunchArgs;
use crate::error::convert_wadkit_error;
use crate::error::missing_engine;
use crate::output::OutputFormatter;
use crate::settings::LauncherSettings;
use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use std::path::Path;
use std::path::PathBuf;
use wadkit_core::ContainerKind;
use wadkit_core::LaunchPlan;

/// Selection after merging arguments over saved settings.
#[derive(Debug, PartialEq, Eq)]
struct Selection {
    engine: PathBuf,
    iwad: Option<PathBuf>,
    pwads: Vec<PathBuf>,
    options: Vec<String>,
}

/// Command-line values win; anything not given falls back to the saved
/// settings.
fn merge(args: &LaunchArgs, saved: &LauncherSettings, config: &Path) -> Result<Selection> {
    let engine = args
        .engine
        .clone()
        .or_else(|| saved.source_port_path.clone())
        .ok_or_else(|| missing_engine(config))?;

    let pwads = if args.files.is_empty() {
        saved.pwad_paths.clone()
    } else {
        args.files.clone()
    };

    let options = if args.options.is_empty() {
        saved.options.clone()
    } else {
        args.options.clone()
    };

    Ok(Selection {
        engine,
        iwad: args.iwad.clone().or_else(|| saved.iwad_path.clone()),
        pwads,
        options,
    })
}

fn build_plan(selection: &Selection) -> Result<LaunchPlan> {
    let mut builder = LaunchPlan::builder(&selection.engine);
    if let Some(iwad) = &selection.iwad {
        builder = builder.iwad(iwad);
    }
    builder
        .pwads(&selection.pwads)
        .options(&selection.options)
        .build()
        .map_err(|e| convert_wadkit_error(&e))
}

/// Warns when the base archive is missing or is not tagged `IWAD`.
fn check_iwad(iwad: &Path, formatter: &dyn OutputFormatter) {
    match wadkit_core::inspect(iwad) {
        Ok(summary) if summary.kind() == ContainerKind::Iwad => {}
        Ok(summary) => formatter.format_warning(&format!(
            "'{}' is not an IWAD (detected {})",
            iwad.display(),
            summary.kind()
        )),
        Err(e) => formatter.format_warning(&format!("{:#}", convert_wadkit_error(&e))),
    }
}

pub fn execute(args: &LaunchArgs, config: &Path, formatter: &dyn OutputFormatter) -> Result<()> {
    let mut settings = LauncherSettings::load(config)?;
    let selection = merge(args, &settings, config)?;
    let plan = build_plan(&selection)?;

    if let Some(iwad) = &selection.iwad {
        check_iwad(iwad, formatter);
    }

    let saved_to = if args.save {
        settings.remember_launch(
            &selection.engine,
            selection.iwad.as_deref(),
            &selection.pwads,
            &selection.options,
        );
        settings.save(config)?;
        Some(config)
    } else {
        None
    };

    if args.dry_run {
        return formatter.format_launch_plan(&plan, saved_to);
    }

    if let Some(path) = saved_to {
        formatter.format_success(&format!("Saved launcher settings to {}", path.display()));
    }

    tracing::info!(command = %plan, "starting source port");
    let status = plan
        .command()
        .status()
        .with_context(|| format!("Failed to start '{}'", plan.program().display()))?;

    if !status.success() {
        bail!("'{}' exited with {status}", plan.program().display());
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn args(engine: Option<&str>, files: &[&str], options: &[&str]) -> LaunchArgs {
        LaunchArgs {
            engine: engine.map(PathBuf::from),
            iwad: None,
            files: files.iter().map(PathBuf::from).collect(),
            dry_run: true,
            save: false,
            options: options.iter().map(ToString::to_string).collect(),
        }
    }

    fn saved() -> LauncherSettings {
        LauncherSettings {
            source_port_path: Some(PathBuf::from("/usr/games/gzdoom")),
            source_port_dir: Some(PathBuf::from("/usr/games")),
            iwad_path: Some(PathBuf::from("doom2.wad")),
            pwad_paths: vec![PathBuf::from("saved.wad")],
            options: vec!["-fast".to_string()],
        }
    }

    #[test]
    fn test_merge_falls_back_to_saved() {
        let selection = merge(&args(None, &[], &[]), &saved(), Path::new("w.json")).unwrap();

        assert_eq!(selection.engine, PathBuf::from("/usr/games/gzdoom"));
        assert_eq!(selection.iwad, Some(PathBuf::from("doom2.wad")));
        assert_eq!(selection.pwads, [PathBuf::from("saved.wad")]);
        assert_eq!(selection.options, ["-fast"]);
    }

    #[test]
    fn test_merge_arguments_win() {
        let selection = merge(
            &args(Some("chocolate-doom"), &["a.wad", "b.pk3"], &["-warp", "07"]),
            &saved(),
            Path::new("w.json"),
        )
        .unwrap();

        assert_eq!(selection.engine, PathBuf::from("chocolate-doom"));
        assert_eq!(selection.pwads, [PathBuf::from("a.wad"), PathBuf::from("b.pk3")]);
        assert_eq!(selection.options, ["-warp", "07"]);
    }

    #[test]
    fn test_merge_without_engine_fails() {
        let err = merge(
            &args(None, &[], &[]),
            &LauncherSettings::default(),
            Path::new("w.json"),
        )
        .unwrap_err();
        assert!(format!("{err:?}").contains("w.json"));
    }

    #[test]
    fn test_build_plan_orders_arguments() {
        let selection = merge(&args(None, &[], &[]), &saved(), Path::new("w.json")).unwrap();
        let plan = build_plan(&selection).unwrap();
        let args: Vec<_> = plan
            .args()
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();

        assert_eq!(args, ["-iwad", "doom2.wad", "-file", "saved.wad", "-fast"]);
    }
}
