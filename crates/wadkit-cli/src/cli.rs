//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use std::path::PathBuf;

/// Default launcher settings file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "wadkit.json";

#[derive(Parser)]
#[command(name = "wadkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Launcher settings file
    #[arg(long, global = true, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the structure of WAD and PK3 files
    Inspect(InspectArgs),
    /// Start a source port with a base archive and mods
    Launch(LaunchArgs),
    /// Show or reset saved launcher settings
    Config(ConfigArgs),
    /// Generate shell completions
    Completion(CompletionArgs),
}

#[derive(clap::Args)]
pub struct InspectArgs {
    /// Files to inspect, in display order
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,
}

#[derive(clap::Args)]
pub struct LaunchArgs {
    /// Source port executable (default: saved setting)
    #[arg(short, long, value_name = "PATH")]
    pub engine: Option<PathBuf>,

    /// Base data archive (default: saved setting)
    #[arg(short, long, value_name = "IWAD")]
    pub iwad: Option<PathBuf>,

    /// Mod archive to load; repeat in load order (default: saved setting)
    #[arg(short = 'f', long = "file", value_name = "PWAD")]
    pub files: Vec<PathBuf>,

    /// Print the command line instead of running it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Save the engine, archives and options as the new defaults
    #[arg(short, long)]
    pub save: bool,

    /// Extra arguments passed to the engine after the mods
    #[arg(last = true, value_name = "ENGINE_ARGS")]
    pub options: Vec<String>,
}

#[derive(clap::Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Clone, Copy)]
pub enum ConfigAction {
    /// Print saved settings
    Show,
    /// Print the settings file location
    Path,
    /// Delete the settings file
    Reset,
}

#[derive(clap::Args)]
pub struct CompletionArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}
