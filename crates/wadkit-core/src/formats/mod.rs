//! Container format readers.

pub mod detect;
pub mod lump;
pub mod zip;
