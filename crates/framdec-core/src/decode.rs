//! Transaction decoding
//!
//! Turns one captured SPI exchange (the raw MOSI and MISO byte texts) into a
//! pair of human-readable descriptions. Byte values are re-emitted using the
//! original capture text rather than a re-normalized form, so the casing and
//! padding of the source log survive decoding.

use crate::spi::FramCommand;

/// One captured SPI exchange
///
/// Borrows the capture row fields. Each field is the 2-character hex text of
/// one byte as exported by the analyzer; index 0 of `mosi` is the opcode.
pub struct Transaction<'a> {
    /// Opcode byte parsed from the first MOSI field
    pub opcode: u8,
    /// Raw MOSI byte texts, opcode field included
    pub mosi: &'a [String],
    /// Raw MISO byte texts, one per clocked byte
    pub miso: &'a [String],
}

/// Decoded descriptions for both bus directions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionPair {
    /// What the master asked for
    pub mosi: String,
    /// What the device answered
    pub miso: String,
}

impl<'a> Transaction<'a> {
    /// Create a transaction over borrowed capture fields
    pub fn new(opcode: u8, mosi: &'a [String], miso: &'a [String]) -> Self {
        Self { opcode, mosi, miso }
    }

    /// Describe the exchange for both directions
    ///
    /// Never fails: unknown opcodes and truncated captures produce
    /// descriptions saying so.
    pub fn describe(&self) -> DescriptionPair {
        let Some(command) = FramCommand::from_opcode(self.opcode) else {
            log::trace!("unknown opcode 0x{:02X}", self.opcode);
            return DescriptionPair {
                mosi: format!("Invalid command: 0x{:02X}", self.opcode),
                miso: "Unknown".to_string(),
            };
        };

        let len = command.command_length();
        if self.mosi.len() < len {
            return DescriptionPair {
                mosi: format!("{} command (insufficient bytes)", command.name()),
                miso: "Unknown".to_string(),
            };
        }

        match command {
            FramCommand::Wrsr => {
                let mosi = if self.mosi.len() >= 2 {
                    format!("WRSR: Write Status Register, value: 0x{}", self.mosi[1])
                } else {
                    "WRSR: Write Status Register (insufficient bytes)".to_string()
                };
                DescriptionPair {
                    mosi,
                    miso: "No data".to_string(),
                }
            }
            FramCommand::Rdsr => {
                let miso = if self.miso.len() > len {
                    format!("Status register: 0x{}", self.miso[len])
                } else {
                    "No data".to_string()
                };
                DescriptionPair {
                    mosi: "RDSR: Read Status Register".to_string(),
                    miso,
                }
            }
            FramCommand::Rdid => {
                let miso = if self.miso.len() >= len + 4 {
                    format!("Device ID: {}", hex_join(&self.miso[len..len + 4]))
                } else {
                    "Device ID (insufficient bytes)".to_string()
                };
                DescriptionPair {
                    mosi: "RDID: Read Device ID".to_string(),
                    miso,
                }
            }
            FramCommand::Read | FramCommand::Fstrd => {
                let mut mosi = format!("{} command", command.name());
                if let Some(addr) = self.address_str() {
                    mosi.push_str(&format!(", address: {}", addr));
                }
                // FSTRD's command_length covers the dummy byte, so the slice
                // below starts at the first real data byte for both commands.
                let miso = if self.miso.len() > len {
                    let data = &self.miso[len..];
                    format!(
                        "Data read: {} (ASCII: {})",
                        hex_join(data),
                        hex_to_ascii(data)
                    )
                } else {
                    "No data".to_string()
                };
                DescriptionPair { mosi, miso }
            }
            FramCommand::Write => {
                let mut mosi = format!("{} command", command.name());
                if let Some(addr) = self.address_str() {
                    mosi.push_str(&format!(", address: {}", addr));
                }
                if self.mosi.len() > len {
                    let data = &self.mosi[len..];
                    mosi.push_str(&format!(
                        ", data: {} (ASCII: {})",
                        hex_join(data),
                        hex_to_ascii(data)
                    ));
                } else {
                    mosi.push_str(" (no data)");
                }
                DescriptionPair {
                    mosi,
                    miso: "No data".to_string(),
                }
            }
            // WREN, WRDI, SLEEP and any command added to the table later
            _ => DescriptionPair {
                mosi: format!("{}: {}", command.name(), command.description()),
                miso: "No data".to_string(),
            },
        }
    }

    /// 24-bit big-endian address from MOSI bytes 1..=3
    ///
    /// `None` when fewer than four MOSI bytes were captured (no address
    /// clause at all); `"invalid"` when a byte is present but does not parse
    /// as hex.
    fn address_str(&self) -> Option<String> {
        if self.mosi.len() < 4 {
            return None;
        }
        let bytes: Result<Vec<u8>, _> = self.mosi[1..4]
            .iter()
            .map(|b| u8::from_str_radix(b, 16))
            .collect();
        Some(match bytes {
            Ok(b) => {
                let addr = (b[0] as u32) << 16 | (b[1] as u32) << 8 | b[2] as u32;
                format!("0x{:06X}", addr)
            }
            Err(_) => "invalid".to_string(),
        })
    }
}

/// Join byte texts as `0x..,0x..`, re-emitting the capture text verbatim
fn hex_join(bytes: &[String]) -> String {
    bytes
        .iter()
        .map(|b| format!("0x{}", b))
        .collect::<Vec<_>>()
        .join(",")
}

/// Render byte texts as ASCII, keeping non-printable bytes as `0x..` text
fn hex_to_ascii(bytes: &[String]) -> String {
    let mut out = String::new();
    for text in bytes {
        match u8::from_str_radix(text, 16) {
            Ok(value) if (32..=126).contains(&value) => out.push(value as char),
            _ => {
                out.push_str("0x");
                out.push_str(text);
            }
        }
    }
    out
}
