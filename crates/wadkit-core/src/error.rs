//! Error types for archive inspection and engine launching.

use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `WadkitError`.
pub type Result<T> = std::result::Result<T, WadkitError>;

/// Errors returned by `wadkit-core`.
///
/// Inspection only ever fails with [`WadkitError::Unreadable`]; every other
/// anomaly in an archive is absorbed and shows up as a less detailed
/// [`ArchiveSummary`](crate::ArchiveSummary).
#[derive(Error, Debug)]
pub enum WadkitError {
    /// The file could not be opened for reading.
    #[error("cannot read file {}: {source}", path.display())]
    Unreadable {
        /// The path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A launch plan could not be built from the given selection.
    #[error("invalid launch configuration: {0}")]
    InvalidLaunch(String),
}

impl WadkitError {
    /// Returns `true` if this error means the input file could not be opened.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use wadkit_core::WadkitError;
    ///
    /// let err = WadkitError::Unreadable {
    ///     path: PathBuf::from("missing.wad"),
    ///     source: std::io::Error::from(std::io::ErrorKind::NotFound),
    /// };
    /// assert!(err.is_unreadable());
    ///
    /// let err = WadkitError::InvalidLaunch("no engine".to_string());
    /// assert!(!err.is_unreadable());
    /// ```
    #[must_use]
    pub const fn is_unreadable(&self) -> bool {
        matches!(self, Self::Unreadable { .. })
    }

    /// Returns the file path this error refers to, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Unreadable { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Returns a context string for this error, if available.
    ///
    /// # Examples
    ///
    /// ```
    /// use wadkit_core::WadkitError;
    ///
    /// let err = WadkitError::InvalidLaunch("engine path is empty".to_string());
    /// assert_eq!(err.context(), Some("engine path is empty"));
    /// ```
    #[must_use]
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::InvalidLaunch(msg) => Some(msg),
            _ => None,
        }
    }
}
