//! framdec-core - SPI capture decoding for the MB85RS4MT FeRAM
//!
//! This crate turns single captured SPI exchanges (an opcode byte plus the
//! raw MOSI/MISO byte texts from a logic analyzer export) into human-readable
//! descriptions of what the bus master asked for and what the chip answered.
//!
//! Decoding is pure: no I/O, no shared mutable state. The command table is a
//! closed, fixed hardware specification, so transactions may be decoded from
//! any number of threads without synchronization.
//!
//! # Example
//!
//! ```
//! use framdec_core::Transaction;
//!
//! let mosi: Vec<String> = ["03", "00", "00", "10"].map(String::from).into();
//! let miso: Vec<String> = ["00", "00", "00", "00", "41"].map(String::from).into();
//! let pair = Transaction::new(0x03, &mosi, &miso).describe();
//! assert_eq!(pair.mosi, "READ command, address: 0x000010");
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod decode;
pub mod spi;

pub use decode::{DescriptionPair, Transaction};
pub use spi::FramCommand;
