//! Planar map coordinate type.
//!
//! `MapPoint` uses raw integer map units, matching the survey data the
//! location sets are digitized from.  Distances are computed in `f64` so
//! edge weights carry full precision through the routing pipeline.

/// A 2-D point in raw map units.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapPoint {
    pub x: i32,
    pub y: i32,
}

impl MapPoint {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other` in map units.
    #[inline]
    pub fn distance(self, other: MapPoint) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::fmt::Display for MapPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
