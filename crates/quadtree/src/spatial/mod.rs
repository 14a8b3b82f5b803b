//! Spatial indexing.
//!
//! A bucket point-region quadtree: leaves hold up to a fixed number of
//! objects and split into four equal quadrants when that is exceeded.

mod node;
mod region;
mod tree;

pub use region::{Quadrant, Region};
pub use tree::{QuadTree, DEFAULT_CAPACITY};
