//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use tidytab_model::MissingPolicy;

#[derive(Parser)]
#[command(
    name = "tidytab",
    version,
    about = "Clean and profile delimited tabular data",
    long_about = "Clean and profile delimited tabular data.\n\n\
                  Applies declarative cleaning rules (duplicate removal, empty-row\n\
                  removal, whitespace trimming, missing-value handling) in a fixed\n\
                  order and reports before/after data-quality statistics."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Apply cleaning rules to a file and write the cleaned result.
    Clean(CleanArgs),

    /// Report data-quality statistics for a file.
    Profile(ProfileArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the delimited input file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output path for the cleaned file (default: <INPUT stem>-cleaned.csv).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// JSON file with a cleaning-rules document; explicit flags override
    /// its fields.
    #[arg(long = "rules", value_name = "PATH")]
    pub rules: Option<PathBuf>,

    /// Remove duplicate rows, keeping the first occurrence.
    #[arg(long = "remove-duplicates")]
    pub remove_duplicates: bool,

    /// Remove rows where every value is empty or whitespace-only.
    #[arg(long = "remove-empty-rows")]
    pub remove_empty_rows: bool,

    /// Trim leading and trailing whitespace from every value.
    #[arg(long = "trim-whitespace")]
    pub trim_whitespace: bool,

    /// Missing-value policy.
    #[arg(long = "missing", value_enum, value_name = "POLICY")]
    pub missing: Option<MissingArg>,

    /// Write the before/after profiles as JSON to this path.
    #[arg(long = "profile-json", value_name = "PATH")]
    pub profile_json: Option<PathBuf>,

    /// Clean and report without writing any files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct ProfileArgs {
    /// Path to the delimited input file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Print the profile as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI missing-value policy choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum MissingArg {
    Keep,
    Drop,
    Fill,
}

impl From<MissingArg> for MissingPolicy {
    fn from(value: MissingArg) -> Self {
        match value {
            MissingArg::Keep => Self::Keep,
            MissingArg::Drop => Self::Drop,
            MissingArg::Fill => Self::Fill,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
