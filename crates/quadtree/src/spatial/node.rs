//! Quadtree nodes.
//!
//! A node is either a leaf holding a bucket of objects or an internal node
//! owning exactly four children. Leaves split once their bucket overflows and
//! never become leaves again.

use super::region::{Quadrant, Region};
use crate::geometry::{Coordinate, Positioned, Rectangle};
use tracing::trace;

/// Split thresholds shared by every node of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SplitPolicy {
    /// Objects a leaf holds before the next insert splits it.
    pub capacity: usize,
    /// Depth at which leaves stop splitting and over-fill instead.
    pub max_depth: Option<u32>,
}

impl SplitPolicy {
    #[inline]
    fn allows_split(&self, depth: u32) -> bool {
        self.max_depth.is_none_or(|max| depth < max)
    }
}

#[derive(Debug)]
enum NodeKind<T> {
    /// Bucket, allocated with one spare slot for the object that triggers a split.
    Leaf(Vec<T>),
    /// Children indexed by [`Quadrant::index`].
    Internal(Box<[Node<T>; 4]>),
}

/// A region of the plane and whatever is stored in it.
#[derive(Debug)]
pub(crate) struct Node<T> {
    region: Region,
    depth: u32,
    kind: NodeKind<T>,
}

impl<T: Positioned> Node<T> {
    pub fn new(region: Region, depth: u32, capacity: usize) -> Self {
        Self {
            region,
            depth,
            kind: NodeKind::Leaf(Vec::with_capacity(capacity + 1)),
        }
    }

    #[inline]
    pub fn region(&self) -> Region {
        self.region
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }

    /// Bucket contents, `None` once the node is internal.
    #[cfg(test)]
    pub fn bucket(&self) -> Option<&[T]> {
        match &self.kind {
            NodeKind::Leaf(bucket) => Some(bucket.as_slice()),
            NodeKind::Internal(_) => None,
        }
    }

    /// Child covering `quadrant`, `None` while the node is a leaf.
    #[cfg(test)]
    pub fn child(&self, quadrant: Quadrant) -> Option<&Node<T>> {
        match &self.kind {
            NodeKind::Leaf(_) => None,
            NodeKind::Internal(children) => Some(&children[quadrant.index()]),
        }
    }

    /// Store `object` in the leaf whose region contains its position.
    ///
    /// The position must lie inside this node's region. A leaf that reaches
    /// `capacity + 1` objects splits and redistributes its bucket, which may
    /// cascade into children when many objects share a quadrant.
    pub fn insert(&mut self, object: T, policy: &SplitPolicy) {
        let position = object.position();
        debug_assert!(
            self.region.contains(position.x, position.y),
            "insert of ({}, {}) outside node region {:?}",
            position.x,
            position.y,
            self.region
        );

        let overflowed = match &mut self.kind {
            NodeKind::Internal(children) => {
                let quadrant = self.region.quadrant_of(position.x, position.y);
                children[quadrant.index()].insert(object, policy);
                return;
            }
            NodeKind::Leaf(bucket) => {
                bucket.push(object);
                bucket.len() > policy.capacity
            }
        };

        if overflowed && policy.allows_split(self.depth) {
            self.split(policy);
        }
    }

    /// Turn this leaf into an internal node and replay its bucket into the
    /// new children.
    fn split(&mut self, policy: &SplitPolicy) {
        let region = self.region;
        let depth = self.depth + 1;
        let children = Box::new(
            Quadrant::ALL
                .map(|quadrant| Node::new(region.child(quadrant), depth, policy.capacity)),
        );

        if let NodeKind::Leaf(bucket) =
            std::mem::replace(&mut self.kind, NodeKind::Internal(children))
        {
            trace!(
                depth = self.depth,
                objects = bucket.len(),
                min_x = region.min_x,
                min_y = region.min_y,
                width = region.width(),
                "splitting leaf"
            );
            for object in bucket {
                self.insert(object, policy);
            }
        }
    }

    /// Snapshot of the bucket sharing a leaf cell with `point`.
    pub fn get_objects_in_cell(&self, point: Coordinate) -> Vec<&T> {
        debug_assert!(
            self.region.contains(point.x, point.y),
            "lookup of ({}, {}) outside node region {:?}",
            point.x,
            point.y,
            self.region
        );

        match &self.kind {
            NodeKind::Leaf(bucket) => bucket.iter().collect(),
            NodeKind::Internal(children) => {
                let quadrant = self.region.quadrant_of(point.x, point.y);
                children[quadrant.index()].get_objects_in_cell(point)
            }
        }
    }

    /// Leaf reached by `point`, with the quadrants taken on the way down.
    pub fn locate(&self, point: Coordinate, path: &mut Vec<Quadrant>) -> &Node<T> {
        match &self.kind {
            NodeKind::Leaf(_) => self,
            NodeKind::Internal(children) => {
                let quadrant = self.region.quadrant_of(point.x, point.y);
                path.push(quadrant);
                children[quadrant.index()].locate(point, path)
            }
        }
    }

    /// Append every object stored in a leaf touched by `rect`.
    ///
    /// Leaves are reported whole, so objects outside the rectangle but in a
    /// touched leaf are included.
    pub fn collect_neighbourhood<'a>(&'a self, rect: &Rectangle, out: &mut Vec<&'a T>) {
        match &self.kind {
            NodeKind::Leaf(bucket) => out.extend(bucket.iter()),
            NodeKind::Internal(children) => {
                let included = self.included_quadrants(rect);
                for quadrant in Quadrant::ALL {
                    if included[quadrant.index()] {
                        children[quadrant.index()].collect_neighbourhood(rect, out);
                    }
                }
            }
        }
    }

    /// Children a rectangle reaches, classified by its corners.
    ///
    /// Quadrants are ordered left-to-right then top-to-bottom, so the
    /// upper-left corner fixes the first quadrant and one opposing corner is
    /// enough to find how far the rectangle extends.
    fn included_quadrants(&self, rect: &Rectangle) -> [bool; 4] {
        let region = &self.region;
        let first = region.quadrant_of(rect.left_x(), rect.upper_y());
        let second = match first {
            Quadrant::SouthWest => None,
            Quadrant::NorthEast => Some(region.quadrant_of(rect.right_x(), rect.lower_y())),
            Quadrant::NorthWest => Some(region.quadrant_of(rect.left_x(), rect.lower_y())),
            Quadrant::SouthEast => Some(region.quadrant_of(rect.right_x(), rect.upper_y())),
        };

        let mut included = [false; 4];
        included[first.index()] = true;
        match second {
            Some(Quadrant::SouthWest) if first == Quadrant::NorthEast => included = [true; 4],
            Some(quadrant) => included[quadrant.index()] = true,
            None => {}
        }
        included
    }

    /// Objects stored under this node.
    pub fn len(&self) -> usize {
        match &self.kind {
            NodeKind::Leaf(bucket) => bucket.len(),
            NodeKind::Internal(children) => children.iter().map(Node::len).sum(),
        }
    }

    /// Deepest leaf depth under this node, counted from the tree root.
    pub fn max_depth(&self) -> u32 {
        match &self.kind {
            NodeKind::Leaf(_) => self.depth,
            NodeKind::Internal(children) => {
                children.iter().map(Node::max_depth).max().unwrap_or(self.depth)
            }
        }
    }

    pub fn node_count(&self) -> usize {
        match &self.kind {
            NodeKind::Leaf(_) => 1,
            NodeKind::Internal(children) => {
                1 + children.iter().map(Node::node_count).sum::<usize>()
            }
        }
    }

    pub fn leaf_count(&self) -> usize {
        match &self.kind {
            NodeKind::Leaf(_) => 1,
            NodeKind::Internal(children) => children.iter().map(Node::leaf_count).sum(),
        }
    }

    /// Visit every stored object, leaves in quadrant order.
    pub fn for_each<'a, F: FnMut(&'a T)>(&'a self, f: &mut F) {
        match &self.kind {
            NodeKind::Leaf(bucket) => bucket.iter().for_each(|object| f(object)),
            NodeKind::Internal(children) => {
                for child in children.iter() {
                    child.for_each(f);
                }
            }
        }
    }
}
