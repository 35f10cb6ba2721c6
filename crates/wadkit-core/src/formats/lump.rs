//! Lump container (IWAD / PWAD) header and directory reader.
//!
//! Layout, all integers little-endian `u32`:
//!
//! ```text
//! offset 0  : identifier, "IWAD" or "PWAD"
//! offset 4  : number of lumps
//! offset 8  : directory offset
//! directory : one 16-byte record per lump
//!             (data offset, size, 8-byte NUL-padded name)
//! ```

use std::io;
use std::io::Read;
use std::io::Seek;
use std::io::SeekFrom;

use byteorder::LittleEndian;
use byteorder::ReadBytesExt;
use tracing::debug;

use crate::formats::detect::ContainerKind;
use crate::formats::detect::IWAD_MAGIC;
use crate::formats::detect::PWAD_MAGIC;

/// Size of the fixed header in bytes.
pub const HEADER_LEN: usize = 12;

/// Size of one directory record in bytes.
pub const DIRECTORY_RECORD_LEN: usize = 16;

/// Width of the fixed lump name field.
pub const LUMP_NAME_LEN: usize = 8;

/// Fixed header at the start of a lump container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LumpHeader {
    /// `Iwad` or `Pwad`.
    pub kind: ContainerKind,
    /// Declared number of lumps.
    pub entry_count: u32,
    /// Absolute offset of the directory.
    pub directory_offset: u32,
}

impl LumpHeader {
    /// Reads the 12-byte header.
    ///
    /// Returns `Ok(None)` if the identifier is neither `IWAD` nor `PWAD`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the header is truncated.
    pub fn read<R: Read>(mut reader: R) -> io::Result<Option<Self>> {
        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        let kind = match magic {
            IWAD_MAGIC => ContainerKind::Iwad,
            PWAD_MAGIC => ContainerKind::Pwad,
            _ => return Ok(None),
        };
        let entry_count = reader.read_u32::<LittleEndian>()?;
        let directory_offset = reader.read_u32::<LittleEndian>()?;
        Ok(Some(Self {
            kind,
            entry_count,
            directory_offset,
        }))
    }
}

/// One record of the lump directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryRecord {
    /// Offset of the lump data. Not used by summaries.
    pub data_offset: u32,
    /// Lump size in bytes.
    pub size: u32,
    /// Decoded lump name.
    pub name: String,
}

impl DirectoryRecord {
    /// Reads one 16-byte record.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if fewer than 16 bytes are available.
    pub fn read<R: Read>(mut reader: R) -> io::Result<Self> {
        let data_offset = reader.read_u32::<LittleEndian>()?;
        let size = reader.read_u32::<LittleEndian>()?;
        let mut raw_name = [0u8; LUMP_NAME_LEN];
        reader.read_exact(&mut raw_name)?;
        Ok(Self {
            data_offset,
            size,
            name: decode_lump_name(&raw_name),
        })
    }
}

/// Decodes a fixed-width lump name.
///
/// Trailing NUL padding is trimmed. Any other byte that is not printable
/// ASCII, including a NUL inside the name, is replaced with U+FFFD instead
/// of failing.
///
/// # Examples
///
/// ```
/// use wadkit_core::formats::lump::decode_lump_name;
///
/// assert_eq!(decode_lump_name(b"MAP01\0\0\0"), "MAP01");
/// assert_eq!(decode_lump_name(b"LINEDEFS"), "LINEDEFS");
/// assert_eq!(decode_lump_name(b"A\xFFB\0\0\0\0\0"), "A\u{FFFD}B");
/// assert_eq!(decode_lump_name(b"AB\0C\0\0\0\0"), "AB\u{FFFD}C");
/// ```
pub fn decode_lump_name(raw: &[u8]) -> String {
    let len = raw.iter().rposition(|&b| b != 0).map_or(0, |last| last + 1);
    raw[..len]
        .iter()
        .map(|&b| {
            if b.is_ascii_graphic() || b == b' ' {
                char::from(b)
            } else {
                char::REPLACEMENT_CHARACTER
            }
        })
        .collect()
}

/// Reads up to `limit` directory records, never failing.
///
/// Stops at the declared lump count, at `limit`, or at the first record that
/// cannot be read in full, whichever comes first. A directory offset past
/// the end of the file yields no records.
pub fn read_directory<R: Read + Seek>(
    reader: &mut R,
    header: &LumpHeader,
    limit: usize,
) -> Vec<DirectoryRecord> {
    let wanted = (header.entry_count as usize).min(limit);
    let mut records = Vec::with_capacity(wanted);

    if let Err(e) = reader.seek(SeekFrom::Start(u64::from(header.directory_offset))) {
        debug!(offset = header.directory_offset, error = %e, "cannot seek to lump directory");
        return records;
    }

    for index in 0..wanted {
        match DirectoryRecord::read(&mut *reader) {
            Ok(record) => records.push(record),
            Err(e) => {
                debug!(
                    index,
                    declared = header.entry_count,
                    error = %e,
                    "lump directory ends early"
                );
                break;
            }
        }
    }

    records
}
