//! Fixed symbol configuration.
//!
//! The encoder supports exactly one configuration: version 4, error
//! correction level L, byte mode, mask pattern 0. Everything derived from
//! that choice lives here so that supporting another configuration means
//! adding a second constant set, not threading parameters through the
//! pipeline.

use crate::models::{EcLevel, MaskPattern, Version};

/// Symbol version (33x33 modules)
pub const VERSION: Version = Version(4);

/// Side length in modules for the fixed version
pub const SIZE: usize = 33;

/// Error correction level
pub const EC_LEVEL: EcLevel = EcLevel::L;

/// Mask pattern applied to data modules
pub const MASK: MaskPattern = MaskPattern::Pattern0;

/// Data codewords for version 4-L (single block)
pub const DATA_CODEWORDS: usize = 80;

/// Error correction codewords for version 4-L
pub const EC_CODEWORDS: usize = 20;

/// Total codewords placed into the symbol
pub const TOTAL_CODEWORDS: usize = DATA_CODEWORDS + EC_CODEWORDS;

/// Maximum input length in characters; longer input is truncated.
///
/// 80 data codewords minus the mode nibble and the 8-bit count field leave
/// room for 78 byte-mode characters.
pub const MAX_TEXT_LEN: usize = 78;

/// Mode indicator for byte mode (0b0100)
pub const BYTE_MODE: u32 = 0b0100;

/// Pad codewords appended alternately after the terminator
pub const PAD_BYTES: [u8; 2] = [0xEC, 0x11];

/// Pre-masked 15-bit format sequence for EC level L, mask pattern 0
/// (`111011111000100`). Fixed at build time, never computed at runtime.
pub const FORMAT_BITS: u16 = 0x77C4;

/// Center coordinate of the single alignment pattern for version 4.
///
/// The ISO alignment table for version 4 is {6, 26}; the three centers
/// falling inside finder corners are skipped, leaving (26, 26).
pub const ALIGNMENT_CENTER: usize = 26;
