pub mod matrix;
pub mod symbol;

pub use matrix::BitMatrix;
pub use symbol::{EcLevel, MaskPattern, Version};
