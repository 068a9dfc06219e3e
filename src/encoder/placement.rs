//! Zigzag codeword placement.

use crate::encoder::matrix_builder::SymbolFrame;

/// Write the codeword stream into the non-reserved cells of the frame.
///
/// Traversal is the standard QR order: two-module-wide column pairs from the
/// right edge toward the left, skipping the timing column entirely,
/// alternating bottom-to-top and top-to-bottom per pair, right-hand column
/// before left within each row. Reserved cells are skipped without
/// advancing the bit cursor. Cells beyond the last bit stay light
/// (the remainder bits of the symbol).
pub fn place_codewords(frame: &mut SymbolFrame, codewords: &[u8]) {
    let size = frame.size();
    let mut bits = codewords
        .iter()
        .flat_map(|&cw| (0..8).rev().map(move |i| (cw >> i) & 1 == 1));

    let mut upward = true;
    let mut col = size as i32 - 1;

    while col > 0 {
        if col == 6 {
            // Timing column is never part of the zigzag
            col -= 1;
            continue;
        }

        let rows: Box<dyn Iterator<Item = usize>> = if upward {
            Box::new((0..size).rev())
        } else {
            Box::new(0..size)
        };

        for row in rows {
            for x in [col as usize, col as usize - 1] {
                if frame.is_reserved(x, row) {
                    continue;
                }
                match bits.next() {
                    Some(dark) => frame.set_data(x, row, dark),
                    None => return,
                }
            }
        }

        upward = !upward;
        col -= 2;
    }
}
