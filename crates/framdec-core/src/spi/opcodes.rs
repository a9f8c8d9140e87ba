//! MB85RS4MT SPI opcodes
//!
//! Command set of the Fujitsu MB85RS4MT 4 Mbit SPI FeRAM. The chip follows
//! the common serial-memory opcode conventions but has no erase or page
//! semantics: writes complete at bus speed without a write-in-progress wait.

// ============================================================================
// Write control
// ============================================================================

/// Write Enable - sets the Write Enable Latch
pub const WREN: u8 = 0x06;
/// Write Disable - clears the Write Enable Latch
pub const WRDI: u8 = 0x04;

// ============================================================================
// Status register operations
// ============================================================================

/// Read Status Register
pub const RDSR: u8 = 0x05;
/// Write Status Register
pub const WRSR: u8 = 0x01;

// ============================================================================
// Identification
// ============================================================================

/// Read Device ID (manufacturer, continuation code, product ID)
pub const RDID: u8 = 0x9F;

// ============================================================================
// Memory access - 3-byte address
// ============================================================================

/// Read Memory
pub const READ: u8 = 0x03;
/// Write Memory
pub const WRITE: u8 = 0x02;
/// Fast Read Memory (one dummy byte follows the address)
pub const FSTRD: u8 = 0x0B;

// ============================================================================
// Power management
// ============================================================================

/// Enter Sleep Mode
pub const SLEEP: u8 = 0xB9;

// ============================================================================
// Status register bit definitions
// ============================================================================

/// Status Register: Write Enable Latch
pub const SR_WEL: u8 = 0x02;
/// Status Register: Block Protect bit 0
pub const SR_BP0: u8 = 0x04;
/// Status Register: Block Protect bit 1
pub const SR_BP1: u8 = 0x08;
/// Status Register: Write Protect Enable
pub const SR_WPEN: u8 = 0x80;
