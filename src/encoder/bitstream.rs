/// Growable bit sequence for assembling the data payload.
///
/// Models the payload as an explicit sequence of single bits so the
/// mode/count/terminator/padding logic stays free of index arithmetic.
pub struct BitstreamBuilder {
    bits: Vec<bool>,
}

impl BitstreamBuilder {
    /// Create an empty bitstream
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    /// Create an empty bitstream with room for `capacity` bits
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: Vec::with_capacity(capacity),
        }
    }

    /// Number of bits written so far
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether no bits have been written yet
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Append a single bit
    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Append the low `count` bits of `value`, most significant first
    pub fn append(&mut self, count: usize, value: u32) {
        for i in (0..count).rev() {
            self.bits.push((value >> i) & 1 == 1);
        }
    }

    /// Slice the stream into 8-bit codewords, most significant bit first.
    ///
    /// The stream length must be a multiple of 8; the data encoder pads to
    /// a byte boundary before calling this.
    pub fn into_codewords(self) -> Vec<u8> {
        debug_assert_eq!(self.bits.len() % 8, 0);
        self.bits
            .chunks(8)
            .map(|chunk| chunk.iter().fold(0u8, |byte, &bit| (byte << 1) | bit as u8))
            .collect()
    }
}

impl Default for BitstreamBuilder {
    fn default() -> Self {
        Self::new()
    }
}
