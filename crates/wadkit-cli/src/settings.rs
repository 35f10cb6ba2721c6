//! Persisted launcher settings.
//!
//! A small JSON file remembering the last engine, base archive, mods and
//! extra options, so `wadkit launch` can run without arguments.

use anyhow::Context;
use anyhow::Result;
use serde::Deserialize;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

/// Last-used launcher selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LauncherSettings {
    /// Source port executable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_port_path: Option<PathBuf>,

    /// Directory the source port was picked from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_port_dir: Option<PathBuf>,

    /// Base data archive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iwad_path: Option<PathBuf>,

    /// Mod archives in load order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pwad_paths: Vec<PathBuf>,

    /// Extra engine arguments.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl LauncherSettings {
    /// Loads settings, returning defaults if the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Cannot read settings file '{}'", path.display()));
            }
        };

        serde_json::from_str(&text).with_context(|| {
            format!(
                "Settings file '{}' is not valid JSON\n\
                 HINT: Fix the file or run 'wadkit config reset'.",
                path.display()
            )
        })
    }

    /// Writes settings as pretty-printed JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json + "\n")
            .with_context(|| format!("Cannot write settings file '{}'", path.display()))?;
        tracing::debug!(path = %path.display(), "settings saved");
        Ok(())
    }

    /// Records the selection of a launch.
    pub fn remember_launch(
        &mut self,
        engine: &Path,
        iwad: Option<&Path>,
        pwads: &[PathBuf],
        options: &[String],
    ) {
        self.source_port_path = Some(engine.to_path_buf());
        self.source_port_dir = engine
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf);
        self.iwad_path = iwad.map(Path::to_path_buf);
        self.pwad_paths = pwads.to_vec();
        self.options = options.to_vec();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let settings = LauncherSettings::load(&temp.path().join("none.json")).unwrap();
        assert_eq!(settings, LauncherSettings::default());
    }

    #[test]
    fn test_save_then_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("wadkit.json");

        let mut settings = LauncherSettings::default();
        settings.remember_launch(
            Path::new("/opt/gzdoom/gzdoom"),
            Some(Path::new("doom2.wad")),
            &[PathBuf::from("sunlust.wad")],
            &["-fast".to_string()],
        );
        settings.save(&path).unwrap();

        let loaded = LauncherSettings::load(&path).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(loaded.source_port_dir, Some(PathBuf::from("/opt/gzdoom")));
    }

    #[test]
    fn test_camel_case_keys() {
        let settings = LauncherSettings {
            source_port_path: Some(PathBuf::from("gzdoom")),
            iwad_path: Some(PathBuf::from("doom.wad")),
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"sourcePortPath\""));
        assert!(json.contains("\"iwadPath\""));
        assert!(!json.contains("pwadPaths"));
    }

    #[test]
    fn test_unknown_and_missing_keys_tolerated() {
        let json = r#"{"sourcePortDir": "/usr/games", "animatedBackground": false}"#;
        let settings: LauncherSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.source_port_dir, Some(PathBuf::from("/usr/games")));
        assert!(settings.pwad_paths.is_empty());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("wadkit.json");
        fs::write(&path, "{ not json").unwrap();

        let err = LauncherSettings::load(&path).unwrap_err();
        assert!(format!("{err:?}").contains("HINT"));
    }
}
