//! Masking and format information injection.

use crate::encoder::config::{FORMAT_BITS, MASK};
use crate::encoder::matrix_builder::SymbolFrame;

/// XOR the fixed mask pattern over every non-reserved cell.
///
/// Masking is its own inverse: applying it twice restores the original
/// data modules.
pub fn apply_mask(frame: &mut SymbolFrame) {
    let size = frame.size();
    for y in 0..size {
        for x in 0..size {
            if MASK.is_masked(y, x) {
                frame.toggle_data(x, y);
            }
        }
    }
}

/// Write the fixed 15-bit format sequence into both standard locations.
///
/// The value is pre-masked at build time; bit 0 is the least significant
/// bit of [`FORMAT_BITS`]. One copy wraps the top-left finder, the second
/// is split under the top-right finder and beside the bottom-left one.
pub fn write_format_info(frame: &mut SymbolFrame) {
    let size = frame.size();
    let bit = |i: usize| (FORMAT_BITS >> i) & 1 == 1;

    // First copy, around the top-left finder
    for i in 0..6 {
        frame.set_function(8, i, bit(i));
    }
    frame.set_function(8, 7, bit(6));
    frame.set_function(8, 8, bit(7));
    frame.set_function(7, 8, bit(8));
    for i in 9..15 {
        frame.set_function(14 - i, 8, bit(i));
    }

    // Second copy, split across the other two finders
    for i in 0..8 {
        frame.set_function(size - 1 - i, 8, bit(i));
    }
    for i in 8..15 {
        frame.set_function(8, size - 15 + i, bit(i));
    }
}
