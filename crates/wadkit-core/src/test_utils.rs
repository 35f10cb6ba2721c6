//! Test utilities for building WAD and PK3 fixtures in memory.
//!
//! # Panics
//!
//! Functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::io::Cursor;
use std::io::Write;

use crate::formats::detect::IWAD_MAGIC;
use crate::formats::detect::PWAD_MAGIC;
use crate::formats::lump::DIRECTORY_RECORD_LEN;
use crate::formats::lump::HEADER_LEN;
use crate::formats::lump::LUMP_NAME_LEN;

/// Creates an in-memory ZIP archive from a list of entries.
///
/// Each entry is a tuple of (path, content). Entries are stored
/// uncompressed, so the recorded uncompressed size equals the content
/// length.
///
/// # Examples
///
/// ```
/// use wadkit_core::test_utils::create_test_zip;
///
/// let zip_data = create_test_zip(vec![("maps/map01.wad", &b"PWAD"[..]), ("zscript.txt", &b""[..])]);
/// assert_eq!(&zip_data[..2], b"PK");
/// ```
#[must_use]
pub fn create_test_zip(entries: Vec<(&str, &[u8])>) -> Vec<u8> {
    use zip::write::SimpleFileOptions;
    use zip::write::ZipWriter;

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Stored)
        .unix_permissions(0o644);

    for (path, data) in entries {
        zip.start_file(path, options).unwrap();
        zip.write_all(data).unwrap();
    }

    zip.finish().unwrap().into_inner()
}

/// ZIP compression method 8 (Deflate).
pub const ZIP_METHOD_DEFLATE: u16 = 8;

/// A ZIP entry written byte by byte, with caller-chosen method and sizes.
#[derive(Debug, Clone, Copy)]
pub struct RawZipEntry<'a> {
    /// Entry path.
    pub name: &'a str,
    /// Compression method recorded in both headers.
    pub method: u16,
    /// Bytes stored as the entry data; their length is the compressed size.
    pub data: &'a [u8],
    /// Uncompressed size recorded in both headers.
    pub uncompressed_size: u32,
}

/// Assembles a ZIP archive by hand.
///
/// Unlike [`create_test_zip`], any compression method can be recorded, so
/// archives whose compressed and uncompressed sizes differ can be built
/// without an encoder. The entry data is never decompressed by the
/// inspector, so it does not have to be a valid stream.
///
/// # Examples
///
/// ```
/// use wadkit_core::test_utils::RawZipEntry;
/// use wadkit_core::test_utils::ZIP_METHOD_DEFLATE;
/// use wadkit_core::test_utils::create_raw_zip;
///
/// let zip_data = create_raw_zip(&[RawZipEntry {
///     name: "maps/map01.wad",
///     method: ZIP_METHOD_DEFLATE,
///     data: &[0x4B, 0x04, 0x00],
///     uncompressed_size: 4096,
/// }]);
/// assert_eq!(&zip_data[..4], b"PK\x03\x04");
/// ```
#[must_use]
pub fn create_raw_zip(entries: &[RawZipEntry<'_>]) -> Vec<u8> {
    const VERSION: u16 = 20;
    // 2024-01-01 00:00:00 in MS-DOS format
    const DOS_DATE: u16 = (44 << 9) | (1 << 5) | 1;
    const DOS_TIME: u16 = 0;
    const CRC: u32 = 0;

    let mut out = Vec::new();
    let mut central = Vec::new();

    for entry in entries {
        let offset = out.len() as u32;
        let name_len = entry.name.len() as u16;
        let compressed_size = entry.data.len() as u32;

        out.extend_from_slice(b"PK\x03\x04");
        out.extend_from_slice(&VERSION.to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes());
        out.extend_from_slice(&entry.method.to_le_bytes());
        out.extend_from_slice(&DOS_TIME.to_le_bytes());
        out.extend_from_slice(&DOS_DATE.to_le_bytes());
        out.extend_from_slice(&CRC.to_le_bytes());
        out.extend_from_slice(&compressed_size.to_le_bytes());
        out.extend_from_slice(&entry.uncompressed_size.to_le_bytes());
        out.extend_from_slice(&name_len.to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes());
        out.extend_from_slice(entry.name.as_bytes());
        out.extend_from_slice(entry.data);

        central.extend_from_slice(b"PK\x01\x02");
        central.extend_from_slice(&VERSION.to_le_bytes());
        central.extend_from_slice(&VERSION.to_le_bytes());
        central.extend_from_slice(&0u16.to_le_bytes());
        central.extend_from_slice(&entry.method.to_le_bytes());
        central.extend_from_slice(&DOS_TIME.to_le_bytes());
        central.extend_from_slice(&DOS_DATE.to_le_bytes());
        central.extend_from_slice(&CRC.to_le_bytes());
        central.extend_from_slice(&compressed_size.to_le_bytes());
        central.extend_from_slice(&entry.uncompressed_size.to_le_bytes());
        central.extend_from_slice(&name_len.to_le_bytes());
        // extra, comment, disk number, internal attributes
        central.extend_from_slice(&[0u8; 8]);
        central.extend_from_slice(&0u32.to_le_bytes());
        central.extend_from_slice(&offset.to_le_bytes());
        central.extend_from_slice(entry.name.as_bytes());
    }

    let central_offset = out.len() as u32;
    let central_len = central.len() as u32;
    let count = entries.len() as u16;
    out.extend_from_slice(&central);

    out.extend_from_slice(b"PK\x05\x06");
    out.extend_from_slice(&[0u8; 4]);
    out.extend_from_slice(&count.to_le_bytes());
    out.extend_from_slice(&count.to_le_bytes());
    out.extend_from_slice(&central_len.to_le_bytes());
    out.extend_from_slice(&central_offset.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes());
    out
}

/// Builder for lump container (IWAD / PWAD) test files.
///
/// By default lump data follows the header and the directory sits at the
/// end of the file, as most tools write it. The header fields can be
/// overridden to produce malformed files.
///
/// # Examples
///
/// ```
/// use wadkit_core::test_utils::WadTestBuilder;
///
/// let wad = WadTestBuilder::pwad()
///     .add_lump("MAP01", b"")
///     .add_lump("THINGS", &[0u8; 10])
///     .build();
/// assert_eq!(&wad[..4], b"PWAD");
/// ```
pub struct WadTestBuilder {
    magic: [u8; 4],
    lumps: Vec<([u8; LUMP_NAME_LEN], Vec<u8>)>,
    declared_count: Option<u32>,
    directory_offset: Option<u32>,
    directory_first: bool,
}

impl WadTestBuilder {
    /// Starts an `IWAD`.
    #[must_use]
    pub fn iwad() -> Self {
        Self::with_magic(IWAD_MAGIC)
    }

    /// Starts a `PWAD`.
    #[must_use]
    pub fn pwad() -> Self {
        Self::with_magic(PWAD_MAGIC)
    }

    /// Starts a container with an arbitrary 4-byte identifier.
    #[must_use]
    pub fn with_magic(magic: [u8; 4]) -> Self {
        Self {
            magic,
            lumps: Vec::new(),
            declared_count: None,
            directory_offset: None,
            directory_first: false,
        }
    }

    /// Adds a lump. Names longer than eight bytes are cut.
    #[must_use]
    pub fn add_lump(self, name: &str, data: &[u8]) -> Self {
        self.add_raw_lump(name.as_bytes(), data)
    }

    /// Adds a lump with a raw (possibly non-ASCII) name.
    #[must_use]
    pub fn add_raw_lump(mut self, name: &[u8], data: &[u8]) -> Self {
        let mut raw = [0u8; LUMP_NAME_LEN];
        let len = name.len().min(LUMP_NAME_LEN);
        raw[..len].copy_from_slice(&name[..len]);
        self.lumps.push((raw, data.to_vec()));
        self
    }

    /// Overrides the lump count written to the header.
    #[must_use]
    pub fn declared_count(mut self, count: u32) -> Self {
        self.declared_count = Some(count);
        self
    }

    /// Overrides the directory offset written to the header.
    #[must_use]
    pub fn directory_offset(mut self, offset: u32) -> Self {
        self.directory_offset = Some(offset);
        self
    }

    /// Places the directory right after the header, before the lump data.
    #[must_use]
    pub fn directory_first(mut self) -> Self {
        self.directory_first = true;
        self
    }

    /// Serializes the container.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        let data_len: usize = self.lumps.iter().map(|(_, data)| data.len()).sum();
        let directory_len = self.lumps.len() * DIRECTORY_RECORD_LEN;

        let (directory_at, mut data_at) = if self.directory_first {
            (HEADER_LEN, HEADER_LEN + directory_len)
        } else {
            (HEADER_LEN + data_len, HEADER_LEN)
        };

        let mut directory = Vec::with_capacity(directory_len);
        for (name, data) in &self.lumps {
            directory.extend_from_slice(&(data_at as u32).to_le_bytes());
            directory.extend_from_slice(&(data.len() as u32).to_le_bytes());
            directory.extend_from_slice(name);
            data_at += data.len();
        }

        let count = self
            .declared_count
            .unwrap_or(self.lumps.len() as u32);
        let offset = self.directory_offset.unwrap_or(directory_at as u32);

        let mut out = Vec::with_capacity(HEADER_LEN + directory_len + data_len);
        out.extend_from_slice(&self.magic);
        out.extend_from_slice(&count.to_le_bytes());
        out.extend_from_slice(&offset.to_le_bytes());

        if self.directory_first {
            out.extend_from_slice(&directory);
        }
        for (_, data) in &self.lumps {
            out.extend_from_slice(data);
        }
        if !self.directory_first {
            out.extend_from_slice(&directory);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wad_builder_layout() {
        let wad = WadTestBuilder::pwad()
            .add_lump("A", b"1234")
            .add_lump("B", b"56")
            .build();

        assert_eq!(wad.len(), HEADER_LEN + 6 + 2 * DIRECTORY_RECORD_LEN);
        assert_eq!(&wad[4..8], &2u32.to_le_bytes());
        assert_eq!(&wad[8..12], &18u32.to_le_bytes());
        // first record points at the data right after the header
        assert_eq!(&wad[18..22], &12u32.to_le_bytes());
        assert_eq!(&wad[22..26], &4u32.to_le_bytes());
        assert_eq!(&wad[26..34], b"A\0\0\0\0\0\0\0");
    }

    #[test]
    fn test_wad_builder_directory_first() {
        let wad = WadTestBuilder::iwad()
            .add_lump("THINGS", &[7u8; 3])
            .directory_first()
            .build();

        assert_eq!(&wad[..4], b"IWAD");
        assert_eq!(&wad[8..12], &12u32.to_le_bytes());
        assert_eq!(&wad[12..16], &28u32.to_le_bytes());
        assert_eq!(&wad[28..], &[7u8; 3]);
    }

    #[test]
    fn test_raw_zip_layout() {
        let data = create_raw_zip(&[RawZipEntry {
            name: "a.txt",
            method: ZIP_METHOD_DEFLATE,
            data: b"xy",
            uncompressed_size: 100,
        }]);

        // local header (30) + name (5) + data (2)
        assert_eq!(&data[8..10], &ZIP_METHOD_DEFLATE.to_le_bytes());
        assert_eq!(&data[18..22], &2u32.to_le_bytes());
        assert_eq!(&data[22..26], &100u32.to_le_bytes());
        assert_eq!(&data[37..41], b"PK\x01\x02");
        // central header (46) + name (5), then the end record
        assert_eq!(&data[88..92], b"PK\x05\x06");
        assert_eq!(data.len(), 88 + 22);
    }

    #[test]
    fn test_wad_builder_name_cut() {
        let wad = WadTestBuilder::pwad().add_lump("TOOLONGNAME", b"").build();
        assert_eq!(&wad[20..28], b"TOOLONGN");
    }
}
