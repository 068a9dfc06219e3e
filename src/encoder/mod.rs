//! QR symbol encoding pipeline.
//!
//! Five stages run strictly in order, each a pure function of its inputs:
//! - Byte-mode data encoding to a fixed 80-codeword payload
//! - Reed-Solomon error correction over GF(256)
//! - Function pattern placement and area reservation
//! - Zigzag codeword placement
//! - Masking and format information injection
//!
//! The pipeline cannot fail: over-length input is truncated, empty input
//! encodes a zero-length message, and there is no I/O.

/// Explicit bit sequence builder for the data payload
pub mod bitstream;
/// Fixed symbol configuration constants
pub mod config;
/// Byte-mode data encoding
pub mod data;
/// GF(256) field arithmetic
pub mod gf256;
/// Masking and format information
pub mod mask;
/// Function patterns and the reservation grid
pub mod matrix_builder;
/// Zigzag data placement
pub mod placement;
/// Reed-Solomon error correction encoding
pub mod reed_solomon;

use crate::models::BitMatrix;
use config::EC_CODEWORDS;
use matrix_builder::MatrixBuilder;
use reed_solomon::RsEncoder;

/// Encode text into a finished 33x33 module matrix.
///
/// Input beyond 78 characters is silently truncated; non-Latin-1
/// characters are captured as their low 8 bits. See
/// [`data::encode_data`] for the full edge-case contract.
pub fn encode(text: &str) -> BitMatrix {
    let mut codewords = data::encode_data(text);
    let ecc = RsEncoder::new(EC_CODEWORDS).remainder(&codewords);
    codewords.extend_from_slice(&ecc);

    let mut frame = MatrixBuilder::build();
    placement::place_codewords(&mut frame, &codewords);
    mask::apply_mask(&mut frame);
    mask::write_format_info(&mut frame);
    frame.into_modules()
}
