//! Serializers walking the finished module matrix.
//!
//! These are boundary collaborators, not part of the encoding algorithm:
//! any format able to represent a dark/light grid with a quiet zone works.

/// Raster (grayscale image) output
pub mod raster;
/// Vector (SVG) output
pub mod svg;

/// Quiet zone width in modules on every side of a rendered symbol
pub const QUIET_ZONE: usize = 4;
