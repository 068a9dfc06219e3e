//! SVG serialization of a finished module matrix.

use crate::models::BitMatrix;
use crate::render::QUIET_ZONE;

/// Render the matrix as an SVG document string.
///
/// One filled unit square per dark module on a light background, scaled by
/// `module_size` pixels per module and surrounded by the standard 4-module
/// quiet zone. `module_size` of zero is clamped to one.
pub fn to_svg(matrix: &BitMatrix, module_size: usize) -> String {
    let module_size = module_size.max(1);
    let units = matrix.size() + 2 * QUIET_ZONE;
    let pixels = units * module_size;

    let mut path = String::new();
    for y in 0..matrix.size() {
        for x in 0..matrix.size() {
            if matrix.get(x, y) {
                path.push_str(&format!(
                    "M{} {}h1v1h-1z",
                    x + QUIET_ZONE,
                    y + QUIET_ZONE
                ));
            }
        }
    }

    format!(
        concat!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" ",
            "width=\"{px}\" height=\"{px}\" viewBox=\"0 0 {u} {u}\" ",
            "shape-rendering=\"crispEdges\">",
            "<rect width=\"{u}\" height=\"{u}\" fill=\"#ffffff\"/>",
            "<path d=\"{d}\" fill=\"#000000\"/>",
            "</svg>"
        ),
        px = pixels,
        u = units,
        d = path,
    )
}

/// Render the matrix as an SVG wrapped in a `data:` URL.
///
/// Characters that break unquoted data URLs are percent-encoded; the rest
/// of the markup is plain UTF-8.
pub fn to_svg_data_url(matrix: &BitMatrix, module_size: usize) -> String {
    let svg = to_svg(matrix, module_size);
    let mut encoded = String::with_capacity(svg.len() + 32);
    for c in svg.chars() {
        match c {
            '<' => encoded.push_str("%3C"),
            '>' => encoded.push_str("%3E"),
            '#' => encoded.push_str("%23"),
            '"' => encoded.push_str("%22"),
            _ => encoded.push(c),
        }
    }
    format!("data:image/svg+xml;utf8,{encoded}")
}
