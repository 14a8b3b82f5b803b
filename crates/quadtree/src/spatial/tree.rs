//! The public quadtree handle.

use super::node::{Node, SplitPolicy};
use super::region::{Quadrant, Region};
use crate::config::TreeConfig;
use crate::error::QuadTreeError;
use crate::geometry::{Positioned, Rectangle};
use tracing::debug;

/// Default bucket capacity.
pub const DEFAULT_CAPACITY: usize = 8;

/// Bucket point-region quadtree over the area `[0, width) × [0, height)`.
///
/// Objects are classified by their [`Positioned::position`] only. Queries
/// return borrowed snapshots, so the tree cannot be mutated while a result
/// is held.
///
/// There is no depth cap by default: many objects sharing one position keep
/// splitting the same cell, growing recursion depth with them. Set
/// [`TreeConfig::max_depth`] to let deep leaves over-fill instead.
pub struct QuadTree<T> {
    root: Node<T>,
    config: TreeConfig,
}

impl<T: Positioned> QuadTree<T> {
    /// Create a tree for a `width` × `height` area with the default capacity.
    ///
    /// The area must be positive and finite; this is a debug assertion here,
    /// use [`QuadTree::with_config`] for a checked constructor.
    pub fn new(width: f32, height: f32) -> Self {
        let config = TreeConfig {
            width,
            height,
            ..TreeConfig::default()
        };
        debug_assert!(config.validate().is_ok(), "invalid tree area {width}x{height}");
        Self::build(config)
    }

    /// Create a tree from a validated configuration.
    pub fn with_config(config: TreeConfig) -> Result<Self, QuadTreeError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: TreeConfig) -> Self {
        debug!(
            width = config.width,
            height = config.height,
            capacity = config.capacity,
            max_depth = ?config.max_depth,
            "creating quadtree"
        );
        Self {
            root: Node::new(
                Region::new(0.0, 0.0, config.width, config.height),
                0,
                config.capacity,
            ),
            config,
        }
    }

    #[inline]
    fn policy(&self) -> SplitPolicy {
        SplitPolicy {
            capacity: self.config.capacity,
            max_depth: self.config.max_depth,
        }
    }

    fn check_bounds(&self, object: &impl Positioned) -> Result<(), QuadTreeError> {
        let p = object.position();
        if self.root.region().contains(p.x, p.y) {
            Ok(())
        } else {
            Err(QuadTreeError::OutOfBounds {
                x: p.x,
                y: p.y,
                width: self.config.width,
                height: self.config.height,
            })
        }
    }

    /// Insert an object. Its position must lie inside the indexed area.
    pub fn insert(&mut self, object: T) {
        let policy = self.policy();
        self.root.insert(object, &policy);
    }

    /// Insert an object, rejecting positions outside the indexed area.
    pub fn try_insert(&mut self, object: T) -> Result<(), QuadTreeError> {
        self.check_bounds(&object)?;
        self.insert(object);
        Ok(())
    }

    /// Objects sharing a leaf cell with `point`, in insertion order.
    ///
    /// This is a coarse proximity measure: two objects a hair apart on either
    /// side of a cell edge are never reported together. `point` must lie
    /// inside the indexed area.
    pub fn get_objects_in_cell<P: Positioned + ?Sized>(&self, point: &P) -> Vec<&T> {
        self.root.get_objects_in_cell(point.position())
    }

    /// Checked variant of [`QuadTree::get_objects_in_cell`].
    pub fn try_get_objects_in_cell<P: Positioned>(
        &self,
        point: &P,
    ) -> Result<Vec<&T>, QuadTreeError> {
        self.check_bounds(point)?;
        Ok(self.get_objects_in_cell(point))
    }

    /// Objects in every leaf the rectangle touches.
    ///
    /// Over-approximates: every object inside `rect` is returned, along with
    /// anything else sharing a touched leaf.
    pub fn get_neighbourhood(&self, rect: &Rectangle) -> Vec<&T> {
        let mut out = Vec::new();
        self.root.collect_neighbourhood(rect, &mut out);
        out
    }

    /// [`QuadTree::get_neighbourhood`] filtered down to objects inside `rect`.
    pub fn get_neighbourhood_within(&self, rect: &Rectangle) -> Vec<&T> {
        let mut out = self.get_neighbourhood(rect);
        out.retain(|object| rect.contains(object.position()));
        out
    }

    /// Quadrants taken from the root down to the leaf containing `point`.
    pub fn cell_path<P: Positioned + ?Sized>(&self, point: &P) -> Vec<Quadrant> {
        let mut path = Vec::new();
        self.root.locate(point.position(), &mut path);
        path
    }

    /// Region of the leaf containing `point`.
    pub fn cell_region<P: Positioned + ?Sized>(&self, point: &P) -> Region {
        let mut path = Vec::new();
        self.root.locate(point.position(), &mut path).region()
    }

    /// Visit every stored object.
    pub fn for_each<'a, F: FnMut(&'a T)>(&'a self, mut f: F) {
        self.root.for_each(&mut f);
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Depth of the deepest leaf; 0 while the root is still a leaf.
    pub fn depth(&self) -> u32 {
        self.root.max_depth()
    }

    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Whether the root has not split yet.
    pub fn is_root_leaf(&self) -> bool {
        self.root.is_leaf()
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.config.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.config.height
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    #[inline]
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }
}

impl<T: Positioned> std::fmt::Debug for QuadTree<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuadTree")
            .field("items", &self.len())
            .field("bounds", &self.root.region())
            .field("capacity", &self.config.capacity)
            .finish()
    }
}
