//! Geometry value types shared by the tree and its callers.

use crate::error::QuadTreeError;
use glam::Vec2;

/// A point in the indexed plane. Y grows downward.
pub type Coordinate = Vec2;

/// Anything that can be stored in a [`QuadTree`](crate::QuadTree).
///
/// Only the position takes part in classification; the tree never looks
/// at the object itself.
pub trait Positioned {
    fn position(&self) -> Coordinate;
}

impl Positioned for Vec2 {
    #[inline]
    fn position(&self) -> Coordinate {
        *self
    }
}

impl Positioned for (f32, f32) {
    #[inline]
    fn position(&self) -> Coordinate {
        Vec2::new(self.0, self.1)
    }
}

impl<T: Positioned + ?Sized> Positioned for &T {
    #[inline]
    fn position(&self) -> Coordinate {
        (**self).position()
    }
}

/// Closed query area for neighbourhood searches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    upper_y: f32,
    lower_y: f32,
    left_x: f32,
    right_x: f32,
}

impl Rectangle {
    /// Create a rectangle from its four bounds.
    ///
    /// `upper_y <= lower_y` and `left_x <= right_x` must hold; inverted bounds
    /// trip a debug assertion. Use [`Rectangle::try_new`] for untrusted input.
    pub fn new(upper_y: f32, lower_y: f32, left_x: f32, right_x: f32) -> Self {
        debug_assert!(
            upper_y <= lower_y && left_x <= right_x,
            "inverted rectangle ({upper_y}, {lower_y}, {left_x}, {right_x})"
        );
        Self { upper_y, lower_y, left_x, right_x }
    }

    /// Checked constructor.
    pub fn try_new(
        upper_y: f32,
        lower_y: f32,
        left_x: f32,
        right_x: f32,
    ) -> Result<Self, QuadTreeError> {
        // Negated so NaN bounds are rejected too.
        if !(upper_y <= lower_y && left_x <= right_x) {
            return Err(QuadTreeError::InvertedRectangle {
                upper_y,
                lower_y,
                left_x,
                right_x,
            });
        }
        Ok(Self { upper_y, lower_y, left_x, right_x })
    }

    /// Square of side `2 * half_extent` centred on `center`.
    #[inline]
    pub fn from_center(center: Coordinate, half_extent: f32) -> Self {
        Self::new(
            center.y - half_extent,
            center.y + half_extent,
            center.x - half_extent,
            center.x + half_extent,
        )
    }

    #[inline]
    pub fn upper_y(&self) -> f32 {
        self.upper_y
    }

    #[inline]
    pub fn lower_y(&self) -> f32 {
        self.lower_y
    }

    #[inline]
    pub fn left_x(&self) -> f32 {
        self.left_x
    }

    #[inline]
    pub fn right_x(&self) -> f32 {
        self.right_x
    }

    /// Closed containment test.
    #[inline]
    pub fn contains(&self, point: Coordinate) -> bool {
        point.x >= self.left_x
            && point.x <= self.right_x
            && point.y >= self.upper_y
            && point.y <= self.lower_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_contains_is_closed() {
        let rect = Rectangle::new(0.0, 20.0, 0.0, 20.0);

        assert!(rect.contains(Vec2::new(0.0, 0.0)));
        assert!(rect.contains(Vec2::new(20.0, 20.0)));
        assert!(rect.contains(Vec2::new(10.0, 5.0)));
        assert!(!rect.contains(Vec2::new(20.1, 5.0)));
        assert!(!rect.contains(Vec2::new(5.0, -0.1)));
    }

    #[test]
    fn test_rectangle_try_new_rejects_inverted() {
        assert!(Rectangle::try_new(0.0, 10.0, 0.0, 10.0).is_ok());
        assert!(matches!(
            Rectangle::try_new(10.0, 0.0, 0.0, 10.0),
            Err(QuadTreeError::InvertedRectangle { .. })
        ));
        assert!(Rectangle::try_new(0.0, 10.0, 5.0, 4.0).is_err());
        assert!(Rectangle::try_new(f32::NAN, 10.0, 0.0, 10.0).is_err());
    }

    #[test]
    fn test_rectangle_from_center() {
        let rect = Rectangle::from_center(Vec2::new(50.0, 40.0), 10.0);
        assert_eq!(rect.left_x(), 40.0);
        assert_eq!(rect.right_x(), 60.0);
        assert_eq!(rect.upper_y(), 30.0);
        assert_eq!(rect.lower_y(), 50.0);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn test_rectangle_new_traps_inverted_bounds() {
        let _ = Rectangle::new(20.0, 0.0, 0.0, 20.0);
    }

    #[test]
    fn test_positioned_impls() {
        assert_eq!((3.0_f32, 4.0_f32).position(), Vec2::new(3.0, 4.0));
        let v = Vec2::new(1.0, 2.0);
        assert_eq!((&v).position(), v);
    }
}
