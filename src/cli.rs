//! CLI definitions for chatgrab.
//!
//! Lives in the library so that `xtask` can render man pages from the same
//! definitions the binary parses.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Version string with build date (and git SHA for non-release builds).
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("VERGEN_BUILD_DATE"),
    ")"
);

/// Version string with build date.
#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_BUILD_DATE"),
    ")"
);

const AFTER_HELP: &str = "\
Examples:
  chatgrab fetch https://chatgpt.com/share/<id>
  chatgrab fetch --input-file urls.txt --out-dir transcripts
  chatgrab extract saved-page.html --stdout";

/// Save shared ChatGPT conversations as JSON transcripts.
#[derive(Debug, Parser)]
#[command(name = "chatgrab", version = VERSION, after_help = AFTER_HELP)]
pub struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Download shared conversations and save them as transcripts
    ///
    /// Without URLs or an input file, the configured default URL is fetched.
    Fetch(FetchArgs),

    /// Extract a transcript from a saved share page
    Extract(ExtractArgs),

    /// Show or edit the configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Options shared by `fetch` and `extract`.
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Directory for transcript files (default from config)
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Skip entries whose content parts are empty instead of failing
    #[arg(long)]
    pub skip_empty_parts: bool,
}

#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Share URLs to fetch
    #[arg(value_name = "URL")]
    pub urls: Vec<String>,

    /// File with one share URL per line
    #[arg(short, long, value_name = "FILE")]
    pub input_file: Option<PathBuf>,

    /// Pause between requests in milliseconds (default from config)
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Saved HTML page
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Conversation id used in the filename (default: file stem)
    #[arg(long)]
    pub id: Option<String>,

    /// Print the transcript to stdout instead of writing a file
    #[arg(long, conflicts_with = "out_dir")]
    pub stdout: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Open the config file in $EDITOR
    Edit,
    /// Print the config file path
    Path,
}
