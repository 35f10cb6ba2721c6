//! Structural summary of an inspected file.

use std::fmt;
use std::path::Path;
use std::path::PathBuf;
use std::time::SystemTime;

use chrono::DateTime;
use chrono::Local;

use crate::formats::detect::ContainerKind;

/// Maximum number of entries listed in a summary.
pub const MAX_LISTED_ENTRIES: usize = 20;

/// One listed lump or ZIP entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    /// Position in the container directory, starting at 0.
    pub index: usize,
    /// Lump name or ZIP entry path.
    pub name: String,
    /// Size in bytes (uncompressed for ZIP entries).
    pub size: u64,
}

/// Result of inspecting a single file.
///
/// Built fresh on every call and never mutated afterwards. The listing holds
/// at most [`MAX_LISTED_ENTRIES`] entries and `truncated` is set exactly when
/// the container declares more than that.
///
/// The [`Display`](fmt::Display) implementation renders the text block shown
/// to users:
///
/// ```text
/// Path: maps.wad
/// Size: 4380 bytes
/// Modified: 2024-05-01 18:22:03
/// Type: PWAD
/// Lumps: 3
///  000: MAP01 (0 bytes)
///  001: THINGS (128 bytes)
///  002: LINEDEFS (256 bytes)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveSummary {
    path: PathBuf,
    kind: ContainerKind,
    entry_count: usize,
    entries: Vec<EntryInfo>,
    file_size: Option<u64>,
    modified: Option<SystemTime>,
}

impl ArchiveSummary {
    /// Creates a metadata-only summary of an unrecognized file.
    pub(crate) fn unrecognized(
        path: PathBuf,
        file_size: Option<u64>,
        modified: Option<SystemTime>,
    ) -> Self {
        Self {
            path,
            kind: ContainerKind::Unrecognized,
            entry_count: 0,
            entries: Vec::new(),
            file_size,
            modified,
        }
    }

    /// Sets the container kind and its listing.
    ///
    /// Entries past [`MAX_LISTED_ENTRIES`] are dropped.
    pub(crate) fn with_listing(
        mut self,
        kind: ContainerKind,
        entry_count: usize,
        mut entries: Vec<EntryInfo>,
    ) -> Self {
        entries.truncate(MAX_LISTED_ENTRIES);
        self.kind = kind;
        self.entry_count = entry_count;
        self.entries = entries;
        self
    }

    /// The inspected path, as given by the caller.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Container classification.
    #[must_use]
    pub const fn kind(&self) -> ContainerKind {
        self.kind
    }

    /// Number of entries the container declares.
    #[must_use]
    pub const fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// Listed entries, in directory order.
    #[must_use]
    pub fn entries(&self) -> &[EntryInfo] {
        &self.entries
    }

    /// Returns `true` if the container declares more entries than listed.
    #[must_use]
    pub const fn truncated(&self) -> bool {
        self.entry_count > MAX_LISTED_ENTRIES
    }

    /// File size in bytes, if metadata was available.
    #[must_use]
    pub const fn file_size(&self) -> Option<u64> {
        self.file_size
    }

    /// Last modification time, if metadata was available.
    #[must_use]
    pub const fn modified(&self) -> Option<SystemTime> {
        self.modified
    }

    /// Modification time formatted as local `YYYY-MM-DD HH:MM:SS`.
    #[must_use]
    pub fn modified_display(&self) -> Option<String> {
        self.modified.map(|t| {
            DateTime::<Local>::from(t)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        })
    }
}

impl fmt::Display for ArchiveSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path: {}", self.path.display())?;
        if let Some(size) = self.file_size {
            write!(f, "\nSize: {size} bytes")?;
        }
        if let Some(modified) = self.modified_display() {
            write!(f, "\nModified: {modified}")?;
        }

        match self.kind {
            ContainerKind::Iwad | ContainerKind::Pwad => {
                write!(f, "\nType: {}\nLumps: {}", self.kind, self.entry_count)?;
            }
            ContainerKind::Zip => write!(f, "\nZIP entries: {}", self.entry_count)?,
            ContainerKind::Unrecognized => return Ok(()),
        }

        for entry in &self.entries {
            write!(
                f,
                "\n {:03}: {} ({} bytes)",
                entry.index, entry.name, entry.size
            )?;
        }
        if self.truncated() {
            f.write_str("\n ...")?;
        }
        Ok(())
    }
}
