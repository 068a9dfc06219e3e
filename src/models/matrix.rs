/// Compact square bit matrix for storing module data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    size: usize,
    data: Vec<u8>,
}

impl BitMatrix {
    /// Create a new all-light matrix with the given side length
    pub fn new(size: usize) -> Self {
        let bytes_needed = (size * size + 7) / 8;
        Self {
            size,
            data: vec![0; bytes_needed],
        }
    }

    /// Get the side length in modules
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get module at (x, y); out-of-bounds reads as light
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.size || y >= self.size {
            return false;
        }
        let index = y * self.size + x;
        (self.data[index / 8] >> (index % 8)) & 1 == 1
    }

    /// Set module at (x, y); out-of-bounds is a no-op
    pub fn set(&mut self, x: usize, y: usize, dark: bool) {
        if x >= self.size || y >= self.size {
            return;
        }
        let index = y * self.size + x;
        if dark {
            self.data[index / 8] |= 1 << (index % 8);
        } else {
            self.data[index / 8] &= !(1 << (index % 8));
        }
    }

    /// Toggle module at (x, y); out-of-bounds is a no-op
    pub fn toggle(&mut self, x: usize, y: usize) {
        if x >= self.size || y >= self.size {
            return;
        }
        let index = y * self.size + x;
        self.data[index / 8] ^= 1 << (index % 8);
    }

    /// Count of dark modules in the whole matrix
    pub fn count_dark(&self) -> usize {
        // Trailing bits of the last byte are never set, so popcount is exact.
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }
}

impl Default for BitMatrix {
    fn default() -> Self {
        Self::new(0)
    }
}
