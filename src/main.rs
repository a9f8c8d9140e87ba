//! framdec - MB85RS4MT SPI capture decoder
//!
//! Reads a CSV log of captured SPI transactions (alternating MISO/MOSI rows
//! as exported by a logic analyzer) and writes the same log back with a
//! decoded, human-readable description prepended to every row.

mod cli;
mod convert;
mod csv;

use clap::Parser;
use cli::{Cli, Format};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Set log level based on verbosity
    match cli.verbose {
        0 => {} // default (info)
        1 => log::set_max_level(log::LevelFilter::Debug),
        _ => log::set_max_level(log::LevelFilter::Trace),
    }

    match cli.format {
        Format::Pairs => convert::run_pairs(&cli.input, &cli.output)?,
        Format::Labeled => {
            eprintln!("Labeled format not implemented yet.");
            std::process::exit(1);
        }
    }

    Ok(())
}
