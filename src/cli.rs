//! CLI argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "framdec")]
#[command(author, version, about = "Analyze SPI signal data captured from an MB85RS4MT FeRAM chip", long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Input CSV file
    #[arg(long, default_value = "input.csv")]
    pub input: PathBuf,

    /// Output CSV file
    #[arg(long, default_value = "output.csv")]
    pub output: PathBuf,

    /// Layout of the capture CSV
    #[arg(long, value_enum, default_value = "pairs")]
    pub format: Format,
}

/// Capture CSV layouts
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Alternating MISO/MOSI row pairs
    Pairs,
    /// Rows labeled with their direction (not implemented)
    Labeled,
}
