//! Error conversion utilities for CLI.
//!
//! Converts wadkit-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use std::path::Path;
use wadkit_core::WadkitError;

/// Converts `WadkitError` to a user-friendly anyhow error with context
pub fn convert_wadkit_error(err: &WadkitError) -> anyhow::Error {
    match err {
        WadkitError::Unreadable { path, source } => {
            anyhow!(
                "Cannot read '{}': {}\n\
                 HINT: Check that the file exists and is readable.",
                path.display(),
                source
            )
        }
        WadkitError::InvalidLaunch(reason) => {
            anyhow!(
                "Cannot launch: {reason}\n\
                 HINT: Pass --engine or save one with 'wadkit launch --engine PATH --save'."
            )
        }
        WadkitError::Io(io_err) => anyhow!("I/O error: {io_err}"),
    }
}

/// Creates the error shown when a launch has no engine to run.
pub fn missing_engine(config: &Path) -> anyhow::Error {
    anyhow!(
        "No source port selected and none saved in '{}'\n\
         HINT: Pass --engine PATH, and --save to remember it.",
        config.display()
    )
}
