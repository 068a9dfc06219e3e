//! Raster serialization of a finished module matrix.

use crate::models::BitMatrix;
use crate::render::QUIET_ZONE;
use image::{GrayImage, Luma};

/// Render the matrix as a grayscale image.
///
/// Dark modules become black pixels, everything else (including the
/// 4-module quiet zone) white. `module_size` of zero is clamped to one.
pub fn to_image(matrix: &BitMatrix, module_size: u32) -> GrayImage {
    let module_size = module_size.max(1);
    let units = (matrix.size() + 2 * QUIET_ZONE) as u32;
    let pixels = units * module_size;

    GrayImage::from_fn(pixels, pixels, |px, py| {
        let ux = (px / module_size) as usize;
        let uy = (py / module_size) as usize;
        let dark = ux >= QUIET_ZONE
            && uy >= QUIET_ZONE
            && matrix.get(ux - QUIET_ZONE, uy - QUIET_ZONE);
        Luma([if dark { 0 } else { 255 }])
    })
}
