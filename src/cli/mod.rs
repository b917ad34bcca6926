//! Command-line interface definitions.

pub mod check;
pub mod convert;
pub mod inspect;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Dealsheet - Convert MT5 tester reports into paired trade PDFs.
#[derive(Parser, Debug)]
#[command(name = "dealsheet")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a tester report into a paired trade PDF
    Convert(ConvertArgs),

    /// Locate and summarize the deals table without writing a PDF
    Inspect(InspectArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `dealsheet check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "dealsheet.toml")]
    pub config: PathBuf,
}

/// Arguments for the `convert` subcommand.
#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "dealsheet.toml")]
    pub config: PathBuf,

    /// Override the input report path
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override the output document path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override trades per page
    #[arg(long)]
    pub rows_per_page: Option<usize>,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,
}

/// Arguments for the `inspect` subcommand.
#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "dealsheet.toml")]
    pub config: PathBuf,

    /// Override the input report path
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// How many paired trades to preview
    #[arg(long, default_value_t = 10)]
    pub limit: usize,
}
