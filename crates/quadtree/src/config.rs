//! Tree configuration.

use crate::error::QuadTreeError;
use crate::spatial::DEFAULT_CAPACITY;
use serde::{Deserialize, Serialize};

/// Indexed area and split behaviour.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TreeConfig {
    #[serde(default = "default_extent")]
    pub width: f32,
    #[serde(default = "default_extent")]
    pub height: f32,
    /// Objects a leaf holds before it splits.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Depth at which leaves stop splitting and over-fill instead.
    /// Unset means no cap.
    #[serde(default)]
    pub max_depth: Option<u32>,
}

impl TreeConfig {
    pub fn validate(&self) -> Result<(), QuadTreeError> {
        let valid = |extent: f32| extent.is_finite() && extent > 0.0;
        if !valid(self.width) || !valid(self.height) {
            return Err(QuadTreeError::InvalidArea {
                width: self.width,
                height: self.height,
            });
        }
        if self.capacity == 0 {
            return Err(QuadTreeError::ZeroCapacity);
        }
        Ok(())
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            width: default_extent(),
            height: default_extent(),
            capacity: default_capacity(),
            max_depth: None,
        }
    }
}

fn default_extent() -> f32 {
    1000.0
}
fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}
