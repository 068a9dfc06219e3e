//! qr_encode - Fixed-configuration QR code symbol encoder
//!
//! A pure Rust QR Code Model 2 encoder pinned to a single configuration:
//! version 4 (33x33 modules), error correction level L, byte mode, mask
//! pattern 0. It turns a short text string (typically a lookup URL of up to
//! 78 ASCII characters) into a module matrix plus vector/raster renderings.
//!
//! Encoding is pure and infallible: the same input always yields a
//! bit-identical matrix, over-length input is truncated, and no I/O happens
//! anywhere in the pipeline.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Encoding pipeline (data, error correction, matrix, placement, mask)
pub mod encoder;
/// Core data structures (BitMatrix, Version, EcLevel, MaskPattern)
pub mod models;
/// Output serializers (SVG, raster image)
pub mod render;

pub use encoder::encode;
pub use models::{BitMatrix, EcLevel, MaskPattern, Version};

use rayon::prelude::*;

/// Encode a batch of strings in parallel.
///
/// Encode calls share no mutable state, so the batch is split across the
/// rayon thread pool. Output order matches input order.
pub fn encode_batch<S: AsRef<str> + Sync>(texts: &[S]) -> Vec<BitMatrix> {
    texts.par_iter().map(|t| encode(t.as_ref())).collect()
}

/// Encode text straight to an SVG document string.
pub fn encode_to_svg(text: &str, module_size: usize) -> String {
    render::svg::to_svg(&encode(text), module_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_matches_sequential() {
        let texts = ["", "a", "https://example.com/public/application/123"];
        let batch = encode_batch(&texts);
        for (text, matrix) in texts.iter().zip(&batch) {
            assert_eq!(&encode(text), matrix);
        }
    }

    #[test]
    fn test_encode_to_svg() {
        let svg = encode_to_svg("test", 4);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
    }
}
