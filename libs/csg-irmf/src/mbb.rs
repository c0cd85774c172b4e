//! # Minimum Bounding Box
//!
//! Axis-aligned bounds tracked alongside every generated call.
//!
//! ## Example
//!
//! ```rust
//! use csg_irmf::Mbb;
//! use glam::DVec3;
//!
//! let a = Mbb::new(DVec3::splat(-1.0), DVec3::splat(1.0));
//! let b = Mbb::new(DVec3::ZERO, DVec3::new(4.0, 0.5, 0.5));
//! let merged = a.merge(&b);
//! assert_eq!(merged.min, DVec3::splat(-1.0));
//! assert_eq!(merged.max, DVec3::new(4.0, 1.0, 1.0));
//! ```

use glam::{DMat4, DVec3};

/// Axis-aligned minimum bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mbb {
    pub min: DVec3,
    pub max: DVec3,
}

impl Mbb {
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Box spanning `±half` around the origin.
    pub fn symmetric(half: DVec3) -> Self {
        Self::new(-half, half)
    }

    /// Per-axis union of two boxes.
    pub fn merge(&self, other: &Mbb) -> Mbb {
        Mbb::new(self.min.min(other.min), self.max.max(other.max))
    }

    /// Merge an optional box into an optional accumulator.
    pub fn merge_into(accumulator: Option<Mbb>, other: Mbb) -> Option<Mbb> {
        Some(match accumulator {
            Some(mbb) => mbb.merge(&other),
            None => other,
        })
    }

    /// Apply `matrix` to the two corners and re-sort each axis.
    ///
    /// Only the `min` and `max` corners are transformed, so rotations can
    /// produce a box smaller than the rotated geometry.
    pub fn transform(&self, matrix: &DMat4) -> Mbb {
        let a = matrix.transform_point3(self.min);
        let b = matrix.transform_point3(self.max);
        Mbb::new(a.min(b), a.max(b))
    }

    pub fn center(&self) -> DVec3 {
        0.5 * (self.min + self.max)
    }

    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_is_commutative() {
        let a = Mbb::new(DVec3::new(-1.0, 0.0, 2.0), DVec3::new(1.0, 3.0, 4.0));
        let b = Mbb::new(DVec3::new(0.0, -2.0, 1.0), DVec3::new(5.0, 1.0, 2.0));
        assert_eq!(a.merge(&b), b.merge(&a));
        assert_eq!(a.merge(&b).min, DVec3::new(-1.0, -2.0, 1.0));
        assert_eq!(a.merge(&b).max, DVec3::new(5.0, 3.0, 4.0));
    }

    #[test]
    fn test_merge_into() {
        let a = Mbb::symmetric(DVec3::ONE);
        assert_eq!(Mbb::merge_into(None, a), Some(a));
        let b = Mbb::new(DVec3::ZERO, DVec3::splat(2.0));
        assert_eq!(
            Mbb::merge_into(Some(a), b),
            Some(Mbb::new(DVec3::splat(-1.0), DVec3::splat(2.0)))
        );
    }

    #[test]
    fn test_transform_translation() {
        let unit = Mbb::symmetric(DVec3::ONE);
        let moved = unit.transform(&DMat4::from_translation(DVec3::new(-19.0, -0.5, 0.0)));
        assert_eq!(moved.min, DVec3::new(-20.0, -1.5, -1.0));
        assert_eq!(moved.max, DVec3::new(-18.0, 0.5, 1.0));
    }

    #[test]
    fn test_transform_mirror_swaps_axes() {
        let mbb = Mbb::new(DVec3::ZERO, DVec3::new(1.0, 2.0, 3.0));
        let mirrored = mbb.transform(&DMat4::from_scale(DVec3::new(-1.0, 1.0, 1.0)));
        assert_eq!(mirrored.min, DVec3::new(-1.0, 0.0, 0.0));
        assert_eq!(mirrored.max, DVec3::new(0.0, 2.0, 3.0));
    }

    #[test]
    fn test_center_and_size() {
        let mbb = Mbb::new(DVec3::new(0.0, -1.0, 0.0), DVec3::new(2.0, 1.0, 10.0));
        assert_eq!(mbb.center(), DVec3::new(1.0, 0.0, 5.0));
        assert_eq!(mbb.size(), DVec3::new(2.0, 2.0, 10.0));
    }
}
