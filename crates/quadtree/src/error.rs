//! Error types.

use thiserror::Error;

/// Errors raised by the checked tree operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuadTreeError {
    #[error("Coordinate ({x}, {y}) lies outside the indexed area {width}x{height}")]
    OutOfBounds { x: f32, y: f32, width: f32, height: f32 },

    #[error("Inverted rectangle: y {upper_y}..{lower_y}, x {left_x}..{right_x}")]
    InvertedRectangle {
        upper_y: f32,
        lower_y: f32,
        left_x: f32,
        right_x: f32,
    },

    #[error("Invalid indexed area: {width}x{height}")]
    InvalidArea { width: f32, height: f32 },

    #[error("Bucket capacity must be at least 1")]
    ZeroCapacity,
}
