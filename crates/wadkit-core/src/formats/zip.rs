//! ZIP-style package (PK3) central directory reader.

use std::io::Read;
use std::io::Seek;

use tracing::debug;
use zip::ZipArchive;
use zip::result::ZipResult;

/// Entries read from a ZIP central directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZipListing {
    /// Total number of entries in the central directory.
    pub entry_count: usize,
    /// Name and uncompressed size of the first entries, in directory order.
    pub entries: Vec<(String, u64)>,
}

/// Reads the central directory and lists up to `limit` entries.
///
/// Entries are opened raw, so no decompression happens and compression
/// methods this build does not support are still listed.
///
/// # Errors
///
/// Returns an error if the central directory cannot be located or parsed.
/// An entry that fails to read ends the listing early instead.
pub fn read_central_directory<R: Read + Seek>(reader: R, limit: usize) -> ZipResult<ZipListing> {
    let mut archive = ZipArchive::new(reader)?;
    let entry_count = archive.len();
    let mut entries = Vec::with_capacity(entry_count.min(limit));

    for index in 0..entry_count.min(limit) {
        match archive.by_index_raw(index) {
            Ok(entry) => entries.push((entry.name().to_string(), entry.size())),
            Err(e) => {
                debug!(index, error = %e, "cannot read ZIP entry");
                break;
            }
        }
    }

    Ok(ZipListing {
        entry_count,
        entries,
    })
}
