//! Engine command line construction.
//!
//! A [`LaunchPlan`] is the program path plus the ordered argument list handed
//! to a source port:
//!
//! ```text
//! <engine> -iwad <base> -file <mod> <mod> ... <extra options>
//! ```
//!
//! Mods keep the order they were added in, which is their load order.

use std::ffi::OsString;
use std::fmt;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;

use crate::Result;
use crate::WadkitError;

/// Argument introducing the base data archive.
pub const IWAD_FLAG: &str = "-iwad";

/// Argument introducing the list of modification archives.
pub const FILE_FLAG: &str = "-file";

/// Program and arguments for one engine run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    program: PathBuf,
    args: Vec<OsString>,
}

impl LaunchPlan {
    /// Starts building a plan for the given engine executable.
    pub fn builder<P: Into<PathBuf>>(engine: P) -> LaunchPlanBuilder {
        LaunchPlanBuilder::new(engine.into())
    }

    /// The engine executable.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments in the order they are passed.
    #[must_use]
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Creates a [`Command`] ready to spawn.
    ///
    /// For an absolute engine path the working directory is the engine's
    /// directory, where most source ports look for their own resources.
    #[must_use]
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if self.program.is_absolute()
            && let Some(dir) = self.program.parent()
        {
            cmd.current_dir(dir);
        }
        cmd
    }
}

impl fmt::Display for LaunchPlan {
    /// Renders a shell-like command line; arguments with spaces are quoted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_quoted(f, &self.program.to_string_lossy())?;
        for arg in &self.args {
            f.write_str(" ")?;
            write_quoted(f, &arg.to_string_lossy())?;
        }
        Ok(())
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    if !s.is_empty() && !s.chars().any(|c| c.is_whitespace() || c == '"' || c == '\'') {
        return f.write_str(s);
    }
    write!(f, "\"{}\"", s.replace('"', "\\\""))
}

/// Builder for [`LaunchPlan`].
///
/// # Examples
///
/// ```
/// use wadkit_core::LaunchPlan;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let plan = LaunchPlan::builder("/usr/bin/gzdoom")
///     .iwad("doom2.wad")
///     .pwad("sunlust.wad")
///     .pwad("music.wad")
///     .option("-warp")
///     .option("01")
///     .build()?;
///
/// assert_eq!(
///     plan.to_string(),
///     "/usr/bin/gzdoom -iwad doom2.wad -file sunlust.wad music.wad -warp 01"
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct LaunchPlanBuilder {
    engine: PathBuf,
    iwad: Option<PathBuf>,
    pwads: Vec<PathBuf>,
    options: Vec<OsString>,
}

impl LaunchPlanBuilder {
    fn new(engine: PathBuf) -> Self {
        Self {
            engine,
            iwad: None,
            pwads: Vec::new(),
            options: Vec::new(),
        }
    }

    /// Sets the base data archive.
    pub fn iwad<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.iwad = Some(path.into());
        self
    }

    /// Appends a modification archive.
    ///
    /// A path that is already in the list is ignored, so the first
    /// occurrence decides the load position.
    pub fn pwad<P: Into<PathBuf>>(mut self, path: P) -> Self {
        let path = path.into();
        if !self.pwads.contains(&path) {
            self.pwads.push(path);
        }
        self
    }

    /// Appends several modification archives in order.
    pub fn pwads<I, P>(self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        paths.into_iter().fold(self, Self::pwad)
    }

    /// Appends one extra engine argument.
    pub fn option<S: Into<OsString>>(mut self, arg: S) -> Self {
        self.options.push(arg.into());
        self
    }

    /// Appends several extra engine arguments in order.
    pub fn options<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.options.extend(args.into_iter().map(Into::into));
        self
    }

    /// Builds the plan.
    ///
    /// # Errors
    ///
    /// Returns [`WadkitError::InvalidLaunch`] if the engine path is empty.
    pub fn build(self) -> Result<LaunchPlan> {
        if self.engine.as_os_str().is_empty() {
            return Err(WadkitError::InvalidLaunch(
                "engine path is empty".to_string(),
            ));
        }

        let mut args = Vec::with_capacity(3 + self.pwads.len() + self.options.len());
        if let Some(iwad) = self.iwad {
            args.push(OsString::from(IWAD_FLAG));
            args.push(iwad.into_os_string());
        }
        if !self.pwads.is_empty() {
            args.push(OsString::from(FILE_FLAG));
            args.extend(self.pwads.into_iter().map(PathBuf::into_os_string));
        }
        args.extend(self.options);

        Ok(LaunchPlan {
            program: self.engine,
            args,
        })
    }
}
