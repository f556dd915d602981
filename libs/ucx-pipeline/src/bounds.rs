//! # Bounding Boxes
//!
//! Axis-aligned bounds used by the bounding-box generation modes. Box mode
//! hands the kernel the 8 corners of a region's AABB instead of the region
//! itself; merge mode unions the AABBs across the whole selection first.

use glam::DVec3;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: DVec3,
    /// Maximum corner.
    pub max: DVec3,
}

impl Aabb {
    /// Computes the bounds of a point set, or `None` when it is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ucx_pipeline::Aabb;
    /// use glam::DVec3;
    ///
    /// let aabb = Aabb::from_points(&[
    ///     DVec3::new(1.0, 5.0, -2.0),
    ///     DVec3::new(-3.0, 0.0, 4.0),
    /// ])
    /// .unwrap();
    /// assert_eq!(aabb.min, DVec3::new(-3.0, 0.0, -2.0));
    /// assert_eq!(aabb.max, DVec3::new(1.0, 5.0, 4.0));
    /// ```
    pub fn from_points(points: &[DVec3]) -> Option<Self> {
        let first = *points.first()?;
        let (min, max) = points
            .iter()
            .fold((first, first), |(min, max), p| (min.min(*p), max.max(*p)));
        Some(Self { min, max })
    }

    /// The smallest box enclosing both boxes.
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// The 8 corner points, the input handed to the kernel in box mode.
    pub fn corners(&self) -> [DVec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            DVec3::new(lo.x, lo.y, lo.z),
            DVec3::new(hi.x, lo.y, lo.z),
            DVec3::new(lo.x, hi.y, lo.z),
            DVec3::new(hi.x, hi.y, lo.z),
            DVec3::new(lo.x, lo.y, hi.z),
            DVec3::new(hi.x, lo.y, hi.z),
            DVec3::new(lo.x, hi.y, hi.z),
            DVec3::new(hi.x, hi.y, hi.z),
        ]
    }

    /// Box center.
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_points_empty() {
        assert_eq!(Aabb::from_points(&[]), None);
    }

    #[test]
    fn test_single_point_is_degenerate_box() {
        let p = DVec3::new(2.0, 3.0, 4.0);
        let aabb = Aabb::from_points(&[p]).unwrap();
        assert_eq!(aabb.min, p);
        assert_eq!(aabb.max, p);
    }

    #[test]
    fn test_union_encloses_both() {
        let a = Aabb::from_points(&[DVec3::ZERO, DVec3::ONE]).unwrap();
        let b = Aabb::from_points(&[DVec3::splat(2.0), DVec3::splat(3.0)]).unwrap();
        let merged = a.union(&b);
        assert_eq!(merged.min, DVec3::ZERO);
        assert_eq!(merged.max, DVec3::splat(3.0));
        assert_relative_eq!(merged.center().x, 1.5);
    }

    #[test]
    fn test_corners_stay_within_bounds() {
        let aabb = Aabb::from_points(&[DVec3::new(-1.0, 0.0, 2.0), DVec3::new(4.0, 5.0, 6.0)])
            .unwrap();
        for corner in aabb.corners() {
            assert!(corner.cmpge(aabb.min).all());
            assert!(corner.cmple(aabb.max).all());
        }
    }
}
