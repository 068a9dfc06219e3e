//! GF(256) arithmetic for Reed-Solomon encoding.
//!
//! QR codes use the field generated by the primitive polynomial
//! x^8 + x^4 + x^3 + x^2 + 1 (0x11D). The log/antilog tables are built at
//! compile time by iterating the primitive element and are shared read-only
//! across all encode calls.

const PRIMITIVE_POLY: usize = 0x11D;

const fn build_tables() -> ([u8; 256], [u8; 256]) {
    let mut log = [0u8; 256];
    let mut exp = [0u8; 256];
    let mut value = 1usize;
    let mut i = 0;
    while i < 255 {
        exp[i] = value as u8;
        log[value] = i as u8;
        value <<= 1;
        if value >= 256 {
            value ^= PRIMITIVE_POLY;
        }
        i += 1;
    }
    // alpha^255 wraps back to alpha^0
    exp[255] = exp[0];
    (log, exp)
}

static TABLES: ([u8; 256], [u8; 256]) = build_tables();

/// GF(256) field operations
pub struct Gf256;

impl Gf256 {
    /// Multiply two field elements
    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let (log, exp) = (&TABLES.0, &TABLES.1);
        exp[(log[a as usize] as usize + log[b as usize] as usize) % 255]
    }

    /// alpha raised to the power `n`
    pub fn exp(n: usize) -> u8 {
        TABLES.1[n % 255]
    }
}
