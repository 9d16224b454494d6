//! Point types for addressing nodes in grid and world space.

/// Represents a node position in grid coordinates (lattice indices).
///
/// `x` counts nodes along the world x axis and `z` counts nodes along the
/// world z axis, both starting from the pitch's bottom-left corner.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    /// Index along the world x axis.
    pub x: usize,
    /// Index along the world z axis.
    pub z: usize,
}

impl GridPoint {
    /// Creates a new `GridPoint`.
    #[must_use]
    pub const fn new(x: usize, z: usize) -> Self {
        Self { x, z }
    }

    /// Chebyshev distance to `other`: the larger of the two index differences.
    #[must_use]
    pub fn chebyshev_distance(&self, other: &GridPoint) -> usize {
        self.x.abs_diff(other.x).max(self.z.abs_diff(other.z))
    }
}

impl std::fmt::Display for GridPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

/// Represents a point in world coordinates (meters).
///
/// The pitch lies in the x-z plane; `y` is height above it.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldPoint {
    /// The x-coordinate in meters.
    pub x: f32,
    /// The y-coordinate (height) in meters.
    pub y: f32,
    /// The z-coordinate in meters.
    pub z: f32,
}

impl WorldPoint {
    /// Creates a new `WorldPoint`.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Returns true if no component is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl std::fmt::Display for WorldPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chebyshev_distance() {
        let a = GridPoint::new(2, 2);
        assert_eq!(a.chebyshev_distance(&a), 0);
        assert_eq!(a.chebyshev_distance(&GridPoint::new(3, 1)), 1);
        assert_eq!(a.chebyshev_distance(&GridPoint::new(0, 3)), 2);
        assert_eq!(GridPoint::new(0, 5).chebyshev_distance(&a), 3);
    }

    #[test]
    fn test_world_point_finite() {
        assert!(WorldPoint::new(1.0, 0.0, -3.5).is_finite());
        assert!(!WorldPoint::new(f32::NAN, 0.0, 0.0).is_finite());
        assert!(!WorldPoint::new(0.0, f32::INFINITY, 0.0).is_finite());
        assert!(!WorldPoint::new(0.0, 0.0, f32::NEG_INFINITY).is_finite());
    }

    #[test]
    fn test_display() {
        assert_eq!(GridPoint::new(4, 1).to_string(), "(4, 1)");
        assert_eq!(
            WorldPoint::new(-4.0, 0.0, 0.25).to_string(),
            "(-4.000, 0.000, 0.250)"
        );
    }
}
