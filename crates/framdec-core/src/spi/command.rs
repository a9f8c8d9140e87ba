//! FeRAM command metadata

use super::opcodes;

/// One MB85RS4MT command
///
/// The command set is closed: the chip implements exactly these nine
/// opcodes, so lookups and dispatch are exhaustive matches checked by the
/// compiler rather than a runtime registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FramCommand {
    /// Set Write Enable Latch
    Wren,
    /// Reset Write Enable Latch
    Wrdi,
    /// Enter Sleep Mode
    Sleep,
    /// Read Status Register
    Rdsr,
    /// Write Status Register
    Wrsr,
    /// Read Device ID
    Rdid,
    /// Read Memory
    Read,
    /// Write Memory
    Write,
    /// Fast Read Memory
    Fstrd,
}

impl FramCommand {
    /// Look up a command by its opcode byte
    pub const fn from_opcode(opcode: u8) -> Option<Self> {
        match opcode {
            opcodes::WREN => Some(Self::Wren),
            opcodes::WRDI => Some(Self::Wrdi),
            opcodes::SLEEP => Some(Self::Sleep),
            opcodes::RDSR => Some(Self::Rdsr),
            opcodes::WRSR => Some(Self::Wrsr),
            opcodes::RDID => Some(Self::Rdid),
            opcodes::READ => Some(Self::Read),
            opcodes::WRITE => Some(Self::Write),
            opcodes::FSTRD => Some(Self::Fstrd),
            _ => None,
        }
    }

    /// Command mnemonic as it appears in the datasheet
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Wren => "WREN",
            Self::Wrdi => "WRDI",
            Self::Sleep => "SLEEP",
            Self::Rdsr => "RDSR",
            Self::Wrsr => "WRSR",
            Self::Rdid => "RDID",
            Self::Read => "READ",
            Self::Write => "WRITE",
            Self::Fstrd => "FSTRD",
        }
    }

    /// Plain-English description of the command's effect
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Wren => "Set Write Enable Latch",
            Self::Wrdi => "Reset Write Enable Latch",
            Self::Sleep => "Enter Sleep Mode",
            Self::Rdsr => "Read Status Register",
            Self::Wrsr => "Write Status Register",
            Self::Rdid => "Read Device ID",
            Self::Read => "Read Memory",
            Self::Write => "Write Memory",
            Self::Fstrd => "Fast Read Memory",
        }
    }

    /// Total command bytes on MOSI, opcode byte included
    ///
    /// 1 = opcode only; 4 = opcode + 3-byte address; 5 adds the FSTRD dummy
    /// byte after the address.
    pub const fn command_length(&self) -> usize {
        match self {
            Self::Wren | Self::Wrdi | Self::Sleep | Self::Rdsr | Self::Rdid => 1,
            Self::Wrsr => 2,
            Self::Read | Self::Write => 4,
            Self::Fstrd => 5,
        }
    }

    /// Whether the device drives data back on MISO after the command bytes
    pub const fn has_read_data(&self) -> bool {
        matches!(self, Self::Rdsr | Self::Rdid | Self::Read | Self::Fstrd)
    }

    /// Whether the master supplies payload bytes after the command bytes
    pub const fn has_write_data(&self) -> bool {
        matches!(self, Self::Write)
    }
}
