//! Reed-Solomon error correction encoding.

use crate::encoder::gf256::Gf256;

/// Reed-Solomon encoder producing a fixed number of EC codewords.
///
/// The generator polynomial is the product of (x - alpha^i) for
/// i in 0..degree; only its non-leading coefficients are stored, highest
/// degree first, which is the order the division loop consumes them in.
pub struct RsEncoder {
    coefficients: Vec<u8>,
}

impl RsEncoder {
    /// Build the encoder for `degree` EC codewords
    pub fn new(degree: usize) -> Self {
        let mut coefficients = vec![0u8; degree];
        coefficients[degree - 1] = 1;

        // Multiply the running product by (x - alpha^i) one root at a time
        let mut root = 1u8;
        for _ in 0..degree {
            for j in 0..degree {
                coefficients[j] = Gf256::mul(coefficients[j], root);
                if j + 1 < degree {
                    coefficients[j] ^= coefficients[j + 1];
                }
            }
            root = Gf256::mul(root, 2);
        }

        Self { coefficients }
    }

    /// Compute the EC codewords for `data` (the polynomial remainder).
    ///
    /// Maintains a shift register the size of the generator: each data byte
    /// is XORed with the register head to form the division factor, the
    /// register shifts left, and factor times each generator coefficient is
    /// folded back in.
    pub fn remainder(&self, data: &[u8]) -> Vec<u8> {
        let degree = self.coefficients.len();
        let mut register = vec![0u8; degree];

        for &codeword in data {
            let factor = codeword ^ register[0];
            register.rotate_left(1);
            register[degree - 1] = 0;
            for (r, &coef) in register.iter_mut().zip(&self.coefficients) {
                *r ^= Gf256::mul(coef, factor);
            }
        }

        register
    }
}
