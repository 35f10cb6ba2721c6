//! Archive inspection without extraction.
//!
//! This module classifies a file as a lump container (IWAD / PWAD), a
//! ZIP-style package or something else, and produces a bounded summary of
//! its directory without loading lump data.
//!
//! # Examples
//!
//! ```no_run
//! use wadkit_core::describe_many;
//! use wadkit_core::inspect;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let summary = inspect("doom2.wad")?;
//! for entry in summary.entries() {
//!     println!("{}: {} bytes", entry.name, entry.size);
//! }
//!
//! // Text blocks for several files, separated by a blank line
//! println!("{}", describe_many(["sunlust.wad", "brutal.pk3"])?);
//! # Ok(())
//! # }
//! ```

pub mod inspect;
pub mod summary;

pub use inspect::describe;
pub use inspect::describe_many;
pub use inspect::inspect;
pub use inspect::inspect_many;
pub use summary::ArchiveSummary;
pub use summary::EntryInfo;
pub use summary::MAX_LISTED_ENTRIES;
