//! Node regions and quadrant geometry.

/// One of the four equal sub-regions produced by a split.
///
/// Names follow the tree's own convention: `NorthEast` sits at the region
/// origin, `NorthWest` to its right, the `South` pair below them.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    NorthEast = 0,
    NorthWest = 1,
    SouthEast = 2,
    SouthWest = 3,
}

impl Quadrant {
    /// All quadrants in child-array order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthEast,
        Quadrant::NorthWest,
        Quadrant::SouthEast,
        Quadrant::SouthWest,
    ];

    /// Index of this quadrant in a node's child array.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Axis-aligned area owned by a node.
///
/// Containment is half-open on both axes, `[min_x, max_x) × [min_y, max_y)`,
/// so sibling quadrants never both claim a point on their shared edge.
/// Children reuse the parent's edges and midlines as-is, never recomputed
/// from an extent, so a point routed to a child always lies inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Region {
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Midline on the x axis.
    #[inline]
    pub fn center_x(&self) -> f32 {
        (self.min_x + self.max_x) / 2.0
    }

    /// Midline on the y axis.
    #[inline]
    pub fn center_y(&self) -> f32 {
        (self.min_y + self.max_y) / 2.0
    }

    #[inline]
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.min_x && py >= self.min_y && px < self.max_x && py < self.max_y
    }

    /// Quadrant a coordinate falls in, decided by the midlines alone.
    ///
    /// Points on a midline go to the right/lower side, which is the child
    /// whose half-open region contains them. Coordinates outside the region
    /// are still classified, which the neighbourhood search relies on for
    /// rectangle corners that overhang the node.
    #[inline]
    pub fn quadrant_of(&self, px: f32, py: f32) -> Quadrant {
        let west = px < self.center_x();
        let north = py < self.center_y();
        match (west, north) {
            (true, true) => Quadrant::NorthEast,
            (true, false) => Quadrant::SouthEast,
            (false, true) => Quadrant::NorthWest,
            (false, false) => Quadrant::SouthWest,
        }
    }

    /// Sub-region covered by `quadrant`.
    pub fn child(&self, quadrant: Quadrant) -> Region {
        let mid_x = self.center_x();
        let mid_y = self.center_y();
        match quadrant {
            Quadrant::NorthEast => Region::new(self.min_x, self.min_y, mid_x, mid_y),
            Quadrant::NorthWest => Region::new(mid_x, self.min_y, self.max_x, mid_y),
            Quadrant::SouthEast => Region::new(self.min_x, mid_y, mid_x, self.max_y),
            Quadrant::SouthWest => Region::new(mid_x, mid_y, self.max_x, self.max_y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_regions_partition_parent() {
        let region = Region::new(0.0, 0.0, 100.0, 100.0);

        assert_eq!(region.child(Quadrant::NorthEast), Region::new(0.0, 0.0, 50.0, 50.0));
        assert_eq!(region.child(Quadrant::NorthWest), Region::new(50.0, 0.0, 100.0, 50.0));
        assert_eq!(region.child(Quadrant::SouthEast), Region::new(0.0, 50.0, 50.0, 100.0));
        assert_eq!(region.child(Quadrant::SouthWest), Region::new(50.0, 50.0, 100.0, 100.0));
    }

    #[test]
    fn test_quadrant_of_interior_points() {
        let region = Region::new(0.0, 0.0, 100.0, 100.0);

        assert_eq!(region.quadrant_of(25.0, 25.0), Quadrant::NorthEast);
        assert_eq!(region.quadrant_of(75.0, 25.0), Quadrant::NorthWest);
        assert_eq!(region.quadrant_of(25.0, 75.0), Quadrant::SouthEast);
        assert_eq!(region.quadrant_of(75.0, 75.0), Quadrant::SouthWest);
    }

    #[test]
    fn test_midline_points_agree_with_containment() {
        let region = Region::new(0.0, 0.0, 100.0, 100.0);
        let cases = [
            (50.0, 25.0),
            (25.0, 50.0),
            (50.0, 50.0),
            (49.999, 49.999),
            (0.0, 0.0),
            (0.0, 50.0),
            (50.0, 0.0),
        ];

        for (px, py) in cases {
            let chosen = region.quadrant_of(px, py);
            let claiming: Vec<Quadrant> = Quadrant::ALL
                .into_iter()
                .filter(|&q| region.child(q).contains(px, py))
                .collect();
            assert_eq!(claiming, vec![chosen], "point ({px}, {py})");
        }
    }

    #[test]
    fn test_nested_children_keep_parent_edges() {
        for extent in [0.10111_f32, 0.3, 1.1, 7.77, 99.7, 123.456] {
            let mut region = Region::new(0.0, 0.0, extent, extent);
            for depth in 0..30 {
                region = region.child(Quadrant::SouthWest);
                assert_eq!(region.max_x, extent, "extent {extent}, depth {depth}");
                assert_eq!(region.max_y, extent, "extent {extent}, depth {depth}");
            }

            let mut region = Region::new(0.0, 0.0, extent, extent);
            let far = f32::from_bits(extent.to_bits() - 1);
            for depth in 0..30 {
                let quadrant = region.quadrant_of(far, far);
                region = region.child(quadrant);
                assert!(region.contains(far, far), "extent {extent}, depth {depth}: {region:?}");
            }
        }
    }

    #[test]
    fn test_contains_is_half_open() {
        let region = Region::new(0.0, 0.0, 100.0, 100.0);

        assert!(region.contains(0.0, 0.0));
        assert!(region.contains(99.99, 99.99));
        assert!(!region.contains(100.0, 50.0));
        assert!(!region.contains(50.0, 100.0));
        assert!(!region.contains(-0.01, 50.0));
    }

    #[test]
    fn test_quadrant_index_matches_all_order() {
        for (i, q) in Quadrant::ALL.into_iter().enumerate() {
            assert_eq!(q.index(), i);
        }
    }
}
