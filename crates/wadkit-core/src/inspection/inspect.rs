//! Archive inspection implementation.

use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::io::Seek;
use std::io::SeekFrom;
use std::path::Path;

use tracing::debug;

use crate::Result;
use crate::WadkitError;
use crate::formats::detect::ContainerKind;
use crate::formats::detect::detect_container;
use crate::formats::lump::LumpHeader;
use crate::formats::lump::read_directory;
use crate::formats::zip::read_central_directory;
use crate::inspection::summary::ArchiveSummary;
use crate::inspection::summary::EntryInfo;
use crate::inspection::summary::MAX_LISTED_ENTRIES;

/// Inspects a file and returns its structural summary.
///
/// The container kind is decided by extension (`.pk3`, `.zip`, ...) or by
/// content. Only the header and at most [`MAX_LISTED_ENTRIES`] directory
/// records are read, whatever the size of the file.
///
/// # Errors
///
/// Returns [`WadkitError::Unreadable`] if the file cannot be opened. Every
/// other problem (missing metadata, truncated directory, corrupt ZIP,
/// odd lump names) yields a less detailed summary instead.
///
/// # Examples
///
/// ```no_run
/// use wadkit_core::inspect;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let summary = inspect("doom2.wad")?;
/// println!("{} with {} lumps", summary.kind(), summary.entry_count());
/// # Ok(())
/// # }
/// ```
pub fn inspect<P: AsRef<Path>>(path: P) -> Result<ArchiveSummary> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| WadkitError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let (file_size, modified) = match file.metadata() {
        Ok(meta) => (Some(meta.len()), meta.modified().ok()),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "file metadata unavailable");
            (None, None)
        }
    };
    let summary = ArchiveSummary::unrecognized(path.to_path_buf(), file_size, modified);

    let mut reader = BufReader::new(file);
    let magic = read_magic(&mut reader);

    let summary = match detect_container(path, &magic) {
        ContainerKind::Zip => inspect_zip(path, reader, summary),
        ContainerKind::Iwad | ContainerKind::Pwad => inspect_lumps(path, reader, summary),
        ContainerKind::Unrecognized => summary,
    };

    Ok(summary)
}

/// Inspects each path in order.
///
/// One result per input path, so a caller can show what it could read and
/// report the rest.
pub fn inspect_many<I, P>(paths: I) -> Vec<Result<ArchiveSummary>>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    paths.into_iter().map(inspect).collect()
}

/// Inspects a file and renders the summary as text.
///
/// # Errors
///
/// Same as [`inspect`].
pub fn describe<P: AsRef<Path>>(path: P) -> Result<String> {
    inspect(path).map(|summary| summary.to_string())
}

/// Describes several files, separating the blocks with a blank line.
///
/// Files are read one after another in input order.
///
/// # Errors
///
/// Returns the error of the first file that cannot be opened.
pub fn describe_many<I, P>(paths: I) -> Result<String>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let blocks = paths
        .into_iter()
        .map(describe)
        .collect::<Result<Vec<_>>>()?;
    Ok(blocks.join("\n\n"))
}

/// Reads up to four leading bytes; a read failure gives an empty slice.
fn read_magic<R: Read>(reader: &mut R) -> Vec<u8> {
    let mut magic = Vec::with_capacity(4);
    if let Err(e) = reader.by_ref().take(4).read_to_end(&mut magic) {
        debug!(error = %e, "cannot read file signature");
        magic.clear();
    }
    magic
}

fn inspect_lumps<R: Read + Seek>(
    path: &Path,
    mut reader: R,
    summary: ArchiveSummary,
) -> ArchiveSummary {
    let header = match reader
        .seek(SeekFrom::Start(0))
        .and_then(|_| LumpHeader::read(&mut reader))
    {
        Ok(Some(header)) => header,
        Ok(None) => return summary,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "lump container header is truncated");
            return summary;
        }
    };

    let entries = read_directory(&mut reader, &header, MAX_LISTED_ENTRIES)
        .into_iter()
        .enumerate()
        .map(|(index, record)| EntryInfo {
            index,
            name: record.name,
            size: u64::from(record.size),
        })
        .collect();

    summary.with_listing(header.kind, header.entry_count as usize, entries)
}

fn inspect_zip<R: Read + Seek>(path: &Path, mut reader: R, summary: ArchiveSummary) -> ArchiveSummary {
    if let Err(e) = reader.seek(SeekFrom::Start(0)) {
        debug!(path = %path.display(), error = %e, "cannot rewind ZIP file");
        return summary;
    }

    match read_central_directory(reader, MAX_LISTED_ENTRIES) {
        Ok(listing) => {
            let entries = listing
                .entries
                .into_iter()
                .enumerate()
                .map(|(index, (name, size))| EntryInfo { index, name, size })
                .collect();
            summary.with_listing(ContainerKind::Zip, listing.entry_count, entries)
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "not a readable ZIP archive");
            summary
        }
    }
}
