//! Pair-format capture conversion
//!
//! Rows are consumed two at a time, MISO first, MOSI second. The MOSI row's
//! first field carries the opcode and drives decoding; each processed pair is
//! re-emitted in original order with its decoded description prepended.

use crate::csv;
use framdec_core::Transaction;
use log::{debug, info};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors from capture conversion
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input file could not be read
    #[error("failed to read {path}: {source}")]
    ReadInput {
        /// Path of the input file
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// Output file could not be written
    #[error("failed to write {path}: {source}")]
    WriteOutput {
        /// Path of the output file
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Convert a pair-format capture file
pub fn run_pairs(input: &Path, output: &Path) -> Result<(), ConvertError> {
    let text = fs::read_to_string(input).map_err(|source| ConvertError::ReadInput {
        path: input.display().to_string(),
        source,
    })?;
    let rows = csv::parse(&text);
    info!("Read {} rows from {}", rows.len(), input.display());

    let decoded = convert_rows(&rows);

    fs::write(output, csv::to_string(&decoded)).map_err(|source| ConvertError::WriteOutput {
        path: output.display().to_string(),
        source,
    })?;
    info!("Wrote {} rows to {}", decoded.len(), output.display());
    Ok(())
}

/// Decode row pairs, prepending descriptions
///
/// A trailing unpaired row is dropped. A pair is skipped entirely when either
/// row has zero fields or the MOSI opcode field does not parse as hex.
pub fn convert_rows(rows: &[Vec<String>]) -> Vec<Vec<String>> {
    let mut out = Vec::new();
    for pair in rows.chunks_exact(2) {
        let (miso_row, mosi_row) = (&pair[0], &pair[1]);
        if miso_row.is_empty() || mosi_row.is_empty() {
            debug!("skipping pair with empty row");
            continue;
        }
        let opcode = match u8::from_str_radix(&mosi_row[0], 16) {
            Ok(op) => op,
            Err(_) => {
                debug!("skipping pair with non-hex opcode field {:?}", mosi_row[0]);
                continue;
            }
        };

        let descriptions = Transaction::new(opcode, mosi_row, miso_row).describe();
        out.push(prepend(&descriptions.miso, miso_row));
        out.push(prepend(&descriptions.mosi, mosi_row));
    }
    out
}

fn prepend(description: &str, row: &[String]) -> Vec<String> {
    let mut new_row = Vec::with_capacity(row.len() + 1);
    new_row.push(description.to_string());
    new_row.extend_from_slice(row);
    new_row
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(spec: &[&[&str]]) -> Vec<Vec<String>> {
        spec.iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_pair_output_shape() {
        let input = rows(&[&["00", "00"], &["06"]]);
        let out = convert_rows(&input);
        assert_eq!(out.len(), 2);
        // MISO row first, original fields preserved after the description
        assert_eq!(out[0], vec!["No data", "00", "00"]);
        assert_eq!(out[1], vec!["WREN: Set Write Enable Latch", "06"]);
    }

    #[test]
    fn test_odd_row_count_drops_trailing_row() {
        let input = rows(&[&["00", "00"], &["06"], &["00", "00"]]);
        let out = convert_rows(&input);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_empty_row_skips_pair() {
        let input = rows(&[&[], &["06"], &["00", "02"], &["05", "00"]]);
        let out = convert_rows(&input);
        // First pair dropped, second pair decoded
        assert_eq!(out.len(), 2);
        assert_eq!(out[0][0], "Status register: 0x02");
        assert_eq!(out[1][0], "RDSR: Read Status Register");
    }

    #[test]
    fn test_non_hex_opcode_skips_pair() {
        let input = rows(&[&["00"], &["ZZ", "00"], &["00"], &["06"]]);
        let out = convert_rows(&input);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1][0], "WREN: Set Write Enable Latch");
    }

    #[test]
    fn test_unknown_opcode_still_emitted() {
        // Unknown but well-formed opcodes are described, not skipped
        let input = rows(&[&["00"], &["AA"]]);
        let out = convert_rows(&input);
        assert_eq!(out[0][0], "Unknown");
        assert_eq!(out[1][0], "Invalid command: 0xAA");
    }

    #[test]
    fn test_conversion_is_deterministic() {
        let input = rows(&[
            &["00", "00", "00", "00", "41", "42"],
            &["03", "00", "00", "10"],
            &["00", "00"],
            &["01", "80"],
        ]);
        let first = convert_rows(&input);
        assert_eq!(first[1][0], "READ command, address: 0x000010");
        assert_eq!(first[0][0], "Data read: 0x41,0x42 (ASCII: AB)");
        assert_eq!(convert_rows(&input), first);
    }
}
