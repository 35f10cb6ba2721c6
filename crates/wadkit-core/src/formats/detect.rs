//! Container format detection.

use std::fmt;
use std::path::Path;

/// Identifier tag of an IWAD (base game data).
pub const IWAD_MAGIC: [u8; 4] = *b"IWAD";

/// Identifier tag of a PWAD (patch / modification data).
pub const PWAD_MAGIC: [u8; 4] = *b"PWAD";

/// ZIP local file header signature: `PK\x03\x04`.
pub const ZIP_LOCAL_HEADER_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// ZIP end of central directory signature: `PK\x05\x06`.
///
/// An archive without entries starts directly with this record.
pub const ZIP_EMPTY_ARCHIVE_MAGIC: [u8; 4] = [0x50, 0x4B, 0x05, 0x06];

/// File extensions treated as ZIP-style packages without looking at content.
pub const ZIP_EXTENSIONS: &[&str] = &["pk3", "zip", "ipk3", "pke"];

/// Kind of container a file was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// Lump container tagged `IWAD`.
    Iwad,
    /// Lump container tagged `PWAD`.
    Pwad,
    /// ZIP-style package (`.pk3` and friends).
    Zip,
    /// Anything else. Only file metadata is reported.
    Unrecognized,
}

impl ContainerKind {
    /// Returns `true` for the two lump container kinds.
    #[must_use]
    pub const fn is_lump_container(self) -> bool {
        matches!(self, Self::Iwad | Self::Pwad)
    }

    /// Returns the short label used in rendered summaries.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Iwad => "IWAD",
            Self::Pwad => "PWAD",
            Self::Zip => "ZIP",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns `true` if the path has a ZIP-style extension (case-insensitive).
pub fn has_zip_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            ZIP_EXTENSIONS
                .iter()
                .any(|candidate| ext.eq_ignore_ascii_case(candidate))
        })
}

/// Classifies a container from its path and first bytes.
///
/// `magic` holds whatever could be read from the start of the file, which
/// may be fewer than four bytes. The extension check comes first so a
/// `.pk3` is always treated as ZIP; a broken one is downgraded later by the
/// ZIP reader.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use wadkit_core::formats::detect::ContainerKind;
/// use wadkit_core::formats::detect::detect_container;
///
/// assert_eq!(detect_container(Path::new("mod.wad"), b"PWAD"), ContainerKind::Pwad);
/// assert_eq!(detect_container(Path::new("mod.PK3"), b""), ContainerKind::Zip);
/// assert_eq!(detect_container(Path::new("notes.txt"), b"hell"), ContainerKind::Unrecognized);
/// ```
pub fn detect_container(path: &Path, magic: &[u8]) -> ContainerKind {
    if has_zip_extension(path) {
        return ContainerKind::Zip;
    }

    match magic.get(..4) {
        Some(m) if m == ZIP_LOCAL_HEADER_MAGIC || m == ZIP_EMPTY_ARCHIVE_MAGIC => {
            ContainerKind::Zip
        }
        Some(m) if m == IWAD_MAGIC => ContainerKind::Iwad,
        Some(m) if m == PWAD_MAGIC => ContainerKind::Pwad,
        _ => ContainerKind::Unrecognized,
    }
}
