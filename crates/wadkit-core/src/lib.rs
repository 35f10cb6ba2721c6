//! WAD and PK3 inspection for Doom source port launchers.
//!
//! `wadkit-core` reads the directory of lump containers (`IWAD` / `PWAD`)
//! and ZIP-style packages (`.pk3`) and produces a bounded, human-readable
//! summary of what is inside. It also builds the command line used to start
//! a source port with a base archive and an ordered list of mods.
//!
//! # Examples
//!
//! ```no_run
//! use wadkit_core::LaunchPlan;
//! use wadkit_core::describe;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! println!("{}", describe("sunlust.wad")?);
//!
//! let plan = LaunchPlan::builder("/usr/games/gzdoom")
//!     .iwad("doom2.wad")
//!     .pwad("sunlust.wad")
//!     .build()?;
//! let status = plan.command().status()?;
//! println!("engine exited with {status}");
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod formats;
pub mod inspection;
pub mod launch;
#[doc(hidden)]
pub mod test_utils;

// Re-export main API types
pub use error::Result;
pub use error::WadkitError;
pub use formats::detect::ContainerKind;
pub use inspection::ArchiveSummary;
pub use inspection::EntryInfo;
pub use inspection::MAX_LISTED_ENTRIES;
pub use inspection::describe;
pub use inspection::describe_many;
pub use inspection::inspect;
pub use inspection::inspect_many;
pub use launch::LaunchPlan;
pub use launch::LaunchPlanBuilder;
