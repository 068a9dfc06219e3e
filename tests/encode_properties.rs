//! Integration tests for the QR symbol encoder.
//!
//! These verify the end-to-end properties of the fixed version 4-L
//! configuration: determinism, the 33x33 dimension invariant, truncation
//! behavior, the reservation partition, and the fixed structural modules a
//! standard decoder keys on.

use qr_encode::encoder::config::{DATA_CODEWORDS, EC_CODEWORDS, SIZE};
use qr_encode::encoder::matrix_builder::MatrixBuilder;
use qr_encode::encoder::reed_solomon::RsEncoder;
use qr_encode::encoder::{data, encode};
use qr_encode::{BitMatrix, encode_batch};

const SAMPLE_URL: &str = "https://example.com/public/application/123";

#[test]
fn encoding_is_deterministic() {
    assert_eq!(encode("test"), encode("test"));
    assert_eq!(encode(SAMPLE_URL), encode(SAMPLE_URL));
}

#[test]
fn matrix_is_always_33x33() {
    for len in [0usize, 1, 44, 78, 200] {
        let text: String = "A".repeat(len);
        assert_eq!(encode(&text).size(), SIZE);
    }
}

#[test]
fn codeword_counts_are_fixed() {
    let rs = RsEncoder::new(EC_CODEWORDS);
    for len in [0usize, 1, 44, 77, 78, 200] {
        let text: String = "x".repeat(len);
        let codewords = data::encode_data(&text);
        assert_eq!(codewords.len(), DATA_CODEWORDS);
        assert_eq!(rs.remainder(&codewords).len(), EC_CODEWORDS);
    }
}

#[test]
fn over_length_input_truncates_to_78() {
    let long: String = "B".repeat(100);
    let short: String = "B".repeat(78);
    assert_eq!(encode(&long), encode(&short));

    let very_long: String = "B".repeat(200);
    assert_eq!(encode(&very_long), encode(&short));
}

#[test]
fn empty_input_produces_valid_symbol() {
    let matrix = encode("");
    assert_eq!(matrix.size(), SIZE);
    // Function patterns present: finder corners and dark module
    assert!(matrix.get(0, 0));
    assert!(matrix.get(8, SIZE - 8));
}

#[test]
fn reservation_partitions_the_grid() {
    // Every cell is either reserved or a data cell, and version 4 leaves
    // exactly 807 data cells (100 codewords + 7 remainder bits).
    let frame = MatrixBuilder::build();
    let mut reserved = 0;
    let mut data_cells = 0;
    for y in 0..SIZE {
        for x in 0..SIZE {
            if frame.is_reserved(x, y) {
                reserved += 1;
            } else {
                data_cells += 1;
            }
        }
    }
    assert_eq!(reserved + data_cells, SIZE * SIZE);
    assert_eq!(data_cells, 807);
    assert_eq!(frame.data_cell_count(), 807);
}

#[test]
fn finder_patterns_are_identical() {
    let matrix = encode(SAMPLE_URL);
    let offsets = [(0usize, 0usize), (SIZE - 7, 0), (0, SIZE - 7)];
    for dy in 0..7 {
        for dx in 0..7 {
            let reference = matrix.get(dx, dy);
            for &(ox, oy) in &offsets[1..] {
                assert_eq!(
                    matrix.get(ox + dx, oy + dy),
                    reference,
                    "finder mismatch at ({dx},{dy})"
                );
            }
        }
    }
}

#[test]
fn structural_modules_are_fixed_across_inputs() {
    for text in ["", "test", SAMPLE_URL] {
        let matrix = encode(text);
        // Dark module
        assert!(matrix.get(8, SIZE - 8));
        // Timing patterns alternate, dark on even coordinates
        for i in 8..SIZE - 8 {
            assert_eq!(matrix.get(i, 6), i % 2 == 0);
            assert_eq!(matrix.get(6, i), i % 2 == 0);
        }
        // Alignment pattern center and light ring
        assert!(matrix.get(26, 26));
        assert!(!matrix.get(25, 26));
        assert!(matrix.get(24, 24));
    }
}

#[test]
fn format_information_is_fixed() {
    // 111011111000100 (EC level L, mask 0) regardless of content
    let expected_around_top_left = [
        // (x, y, dark) following the first-copy layout
        (8usize, 0usize, false),
        (8, 1, false),
        (8, 2, true),
        (8, 3, false),
        (8, 4, false),
        (8, 5, false),
        (8, 7, true),
        (8, 8, true),
        (7, 8, true),
        (5, 8, true),
        (4, 8, true),
        (3, 8, false),
        (2, 8, true),
        (1, 8, true),
        (0, 8, true),
    ];
    for text in ["", SAMPLE_URL] {
        let matrix = encode(text);
        for &(x, y, dark) in &expected_around_top_left {
            assert_eq!(matrix.get(x, y), dark, "format module ({x},{y})");
        }
    }
}

#[test]
fn mask_affects_only_data_cells() {
    // Two inputs differing only in payload share every reserved module.
    let frame = MatrixBuilder::build();
    let a = encode("aaaa");
    let b = encode("zzzz");
    for y in 0..SIZE {
        for x in 0..SIZE {
            if frame.is_reserved(x, y) {
                assert_eq!(a.get(x, y), b.get(x, y), "reserved cell ({x},{y})");
            }
        }
    }
}

#[test]
fn batch_encode_matches_sequential() {
    let texts: Vec<String> = (0..32)
        .map(|i| format!("https://example.com/public/application/{i}"))
        .collect();
    let batch: Vec<BitMatrix> = encode_batch(&texts);
    assert_eq!(batch.len(), texts.len());
    for (text, matrix) in texts.iter().zip(&batch) {
        assert_eq!(&encode(text), matrix);
    }
}

#[test]
fn renderers_agree_on_dark_count() {
    let matrix = encode(SAMPLE_URL);
    let svg = qr_encode::render::svg::to_svg(&matrix, 4);
    assert_eq!(svg.matches("h1v1h-1z").count(), matrix.count_dark());

    let img = qr_encode::render::raster::to_image(&matrix, 1);
    let dark_pixels = img.pixels().filter(|p| p.0[0] == 0).count();
    assert_eq!(dark_pixels, matrix.count_dark());
}
