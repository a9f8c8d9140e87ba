//! SPI command set of the MB85RS4MT
//!
//! Opcode constants and per-command metadata for the Fujitsu MB85RS4MT
//! 4 Mbit SPI FeRAM.

mod command;
pub mod opcodes;

pub use command::FramCommand;
