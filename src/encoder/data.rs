//! Byte-mode data encoding.

use crate::encoder::bitstream::BitstreamBuilder;
use crate::encoder::config::{BYTE_MODE, DATA_CODEWORDS, MAX_TEXT_LEN, PAD_BYTES};

/// Encode input text into exactly [`DATA_CODEWORDS`] byte-mode codewords.
///
/// Input beyond [`MAX_TEXT_LEN`] characters is silently truncated. Each
/// character contributes its low 8 bits only, so anything outside Latin-1
/// is silently corrupted; callers wanting validation must do it before
/// encoding. Empty input is valid and encodes a zero-length message.
pub fn encode_data(text: &str) -> Vec<u8> {
    let capacity = DATA_CODEWORDS * 8;
    let mut bits = BitstreamBuilder::with_capacity(capacity);

    let bytes: Vec<u8> = text
        .chars()
        .take(MAX_TEXT_LEN)
        .map(|c| (c as u32) as u8)
        .collect();

    bits.append(4, BYTE_MODE);
    bits.append(8, bytes.len() as u32);
    for &b in &bytes {
        bits.append(8, b as u32);
    }

    // Terminator: up to four zero bits, fewer if capacity is nearly full
    let terminator = (capacity - bits.len()).min(4);
    bits.append(terminator, 0);

    // Align to a codeword boundary
    while bits.len() % 8 != 0 {
        bits.push(false);
    }

    // Alternate the two standard pad codewords up to capacity
    let mut pad_index = 0;
    while bits.len() < capacity {
        bits.append(8, PAD_BYTES[pad_index % 2] as u32);
        pad_index += 1;
    }

    bits.into_codewords()
}
