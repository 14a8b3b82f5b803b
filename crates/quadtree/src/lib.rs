//! Bucket point-region quadtree.
//!
//! This crate contains:
//! - Geometry value types (coordinates, query rectangles, the `Positioned` trait)
//! - The quadtree itself, with cell and neighbourhood queries
//! - Serde-backed tree configuration

pub mod config;
mod error;
pub mod geometry;
pub mod spatial;

// Re-export commonly used types
pub use config::TreeConfig;
pub use error::QuadTreeError;
pub use geometry::{Coordinate, Positioned, Rectangle};
pub use spatial::{QuadTree, Quadrant, Region};
