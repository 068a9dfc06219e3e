//! Module matrix construction: function patterns and area reservation.

use crate::encoder::config::{ALIGNMENT_CENTER, SIZE};
use crate::models::BitMatrix;

/// Module grid plus its reservation grid, kept in lockstep.
///
/// Every cell is either reserved (function patterns, format areas, the dark
/// module) or a data cell; data placement and masking consult the
/// reservation grid and never touch reserved cells.
pub struct SymbolFrame {
    modules: BitMatrix,
    reserved: BitMatrix,
}

impl SymbolFrame {
    fn new(size: usize) -> Self {
        Self {
            modules: BitMatrix::new(size),
            reserved: BitMatrix::new(size),
        }
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.modules.size()
    }

    /// Set a function module and reserve its cell
    pub fn set_function(&mut self, x: usize, y: usize, dark: bool) {
        self.modules.set(x, y, dark);
        self.reserved.set(x, y, true);
    }

    /// Whether the cell is claimed by a function pattern or format area
    pub fn is_reserved(&self, x: usize, y: usize) -> bool {
        self.reserved.get(x, y)
    }

    /// Write a data module; silently ignored on reserved cells
    pub fn set_data(&mut self, x: usize, y: usize, dark: bool) {
        if !self.reserved.get(x, y) {
            self.modules.set(x, y, dark);
        }
    }

    /// Invert a data module; silently ignored on reserved cells
    pub fn toggle_data(&mut self, x: usize, y: usize) {
        if !self.reserved.get(x, y) {
            self.modules.toggle(x, y);
        }
    }

    /// Read a module value
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.modules.get(x, y)
    }

    /// Number of non-reserved cells
    pub fn data_cell_count(&self) -> usize {
        let size = self.size();
        size * size - self.reserved.count_dark()
    }

    /// Consume the frame, keeping only the finished module matrix
    pub fn into_modules(self) -> BitMatrix {
        self.modules
    }
}

/// Builds the function patterns for the fixed 33x33 symbol.
pub struct MatrixBuilder;

impl MatrixBuilder {
    /// Stamp all function patterns and reserve the format areas.
    ///
    /// Data cells stay light and unreserved; format cells are reserved here
    /// and receive their values in the mask/format stage. Version 4 carries
    /// no version-information areas (those start at version 7).
    pub fn build() -> SymbolFrame {
        let mut frame = SymbolFrame::new(SIZE);

        Self::place_finder(&mut frame, 0, 0);
        Self::place_finder(&mut frame, SIZE - 7, 0);
        Self::place_finder(&mut frame, 0, SIZE - 7);
        Self::place_alignment(&mut frame, ALIGNMENT_CENTER, ALIGNMENT_CENTER);
        Self::place_timing(&mut frame);
        Self::reserve_format_areas(&mut frame);

        // Fixed dark module beside the bottom-left finder
        frame.set_function(8, SIZE - 8, true);

        frame
    }

    /// 7x7 finder pattern at (ox, oy) plus its one-module light separator.
    ///
    /// Rings by Chebyshev distance from the center: 0-1 dark core, 2 light
    /// ring, 3 dark border, 4 light separator (clipped at the symbol edge).
    fn place_finder(frame: &mut SymbolFrame, ox: usize, oy: usize) {
        for dy in -1i32..=7 {
            for dx in -1i32..=7 {
                let x = ox as i32 + dx;
                let y = oy as i32 + dy;
                if x < 0 || y < 0 || x >= SIZE as i32 || y >= SIZE as i32 {
                    continue;
                }
                let dist = (dx - 3).abs().max((dy - 3).abs());
                frame.set_function(x as usize, y as usize, dist != 2 && dist != 4);
            }
        }
    }

    /// 5x5 alignment pattern: dark border ring, light ring, dark center dot
    fn place_alignment(frame: &mut SymbolFrame, cx: usize, cy: usize) {
        for dy in -2i32..=2 {
            for dx in -2i32..=2 {
                let dist = dx.abs().max(dy.abs());
                frame.set_function(
                    (cx as i32 + dx) as usize,
                    (cy as i32 + dy) as usize,
                    dist != 1,
                );
            }
        }
    }

    /// Alternating timing strips along row 6 and column 6, dark on even
    /// coordinates, spanning between the finder separators
    fn place_timing(frame: &mut SymbolFrame) {
        for i in 8..SIZE - 8 {
            let dark = i % 2 == 0;
            frame.set_function(i, 6, dark);
            frame.set_function(6, i, dark);
        }
    }

    /// Reserve the format strips; bit values are written after masking
    fn reserve_format_areas(frame: &mut SymbolFrame) {
        // Strips flanking the top-left finder (timing row/column excluded)
        for i in 0..9 {
            if i != 6 {
                frame.set_function(8, i, false);
                frame.set_function(i, 8, false);
            }
        }
        // Below the top-right finder and right of the bottom-left finder
        for i in 0..8 {
            frame.set_function(SIZE - 1 - i, 8, false);
            frame.set_function(8, SIZE - 1 - i, false);
        }
    }
}
