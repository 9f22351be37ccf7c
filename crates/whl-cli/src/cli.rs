//! CLI argument definitions for the masterlist generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use whl_report::Profile;

#[derive(Parser)]
#[command(
    name = "masterlist",
    version,
    about = "Generate the UNESCO World Heritage master sitelist and wonderlist",
    long_about = "Generate the UNESCO World Heritage master sitelist and the New7Wonders\n\
                  wonderlist from a snapshot of the source datasets.\n\n\
                  A snapshot directory holds manifest.json plus one payload file per\n\
                  dataset; the manifest pins each file's layout and expected record count."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate the per-country sitelist document.
    Sitelist(GenerateArgs),

    /// Generate the New7Wonders wonderlist document.
    Wonderlist(GenerateArgs),

    /// Print per-country coverage statistics.
    Stats(StatsArgs),
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Snapshot directory containing manifest.json and the dataset files.
    #[arg(value_name = "SNAPSHOT_DIR")]
    pub snapshot_dir: PathBuf,

    /// Output profile: full HTML page, or bare fragment for pasting into a
    /// WordPress post.
    #[arg(long = "profile", value_enum, default_value = "wordpress")]
    pub profile: ProfileArg,

    /// Write the document to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct StatsArgs {
    /// Snapshot directory containing manifest.json and the dataset files.
    #[arg(value_name = "SNAPSHOT_DIR")]
    pub snapshot_dir: PathBuf,
}

/// Output profile choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ProfileArg {
    Html,
    Wordpress,
}

impl From<ProfileArg> for Profile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Html => Profile::Html,
            ProfileArg::Wordpress => Profile::Wordpress,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
