// NOTE: Command Organization Rationale
//
// Why flat subcommands (not namespaced)?
// - The whole surface is one itinerary seen through a handful of lenses
// - `tabi day 3` reads better than `tabi itinerary show-day 3`
// - Global flags (`--itinerary`, `--format`) apply to every command the same way

mod commands;
mod common;
pub mod hints;

pub use commands::*;
pub use common::*;

use clap::Parser;
use std::path::PathBuf;

use crate::types::{LogLevel, OutputFormat};

#[derive(Parser)]
#[command(name = "tabi")]
#[command(about = "Browse a day-by-day travel itinerary in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Itinerary file (.toml or .json); defaults to the config, then the bundled trip
    #[arg(long, global = true)]
    pub itinerary: Option<PathBuf>,

    /// Data directory holding config.toml and tabi.log
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
