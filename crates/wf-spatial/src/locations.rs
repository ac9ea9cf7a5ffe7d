//! Named location set and spatial index.
//!
//! A [`LocationSet`] is built once from static input and never mutated.
//! Every location is identified by a [`LocationId`] assigned sequentially
//! from 0 at construction; all other components reference locations by ID
//! only and never hold the `Location` itself.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `(x, y)` to the nearest `LocationId`.  Used
//! by callers that need to resolve a free coordinate (e.g. a map click) to a
//! location before routing.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use wf_core::{LocationId, MapPoint};

use crate::{SpatialError, SpatialResult};

// ── Location ──────────────────────────────────────────────────────────────────

/// A named point on the map.  Immutable after construction.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub pos: MapPoint,
    pub name: String,
}

impl Location {
    pub fn new(x: i32, y: i32, name: impl Into<String>) -> Self {
        Self { pos: MapPoint::new(x, y), name: name.into() }
    }
}

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D `[x, y]` point with the
/// associated `LocationId`.
#[derive(Clone, Debug)]
struct LocationEntry {
    point: [f64; 2],
    id: LocationId,
}

impl RTreeObject for LocationEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for LocationEntry {
    /// Squared Euclidean distance in map units.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── LocationSet ───────────────────────────────────────────────────────────────

/// Immutable, ordered collection of named locations plus a spatial index.
///
/// IDs are positions in the original input order and stay stable for the
/// lifetime of any graph built over the set.
#[derive(Debug)]
pub struct LocationSet {
    locations: Vec<Location>,
    spatial_idx: RTree<LocationEntry>,
}

impl LocationSet {
    /// Build a set from locations in their final ID order.
    ///
    /// Bulk-loads the R-tree for O(N log N) construction.
    pub fn from_locations(locations: Vec<Location>) -> Self {
        let entries: Vec<LocationEntry> = locations
            .iter()
            .enumerate()
            .map(|(i, loc)| LocationEntry {
                point: [f64::from(loc.pos.x), f64::from(loc.pos.y)],
                id: LocationId(i as u32),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);
        Self { locations, spatial_idx }
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn get(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.index())
    }

    /// Like [`get`](Self::get) but returns [`SpatialError::LocationNotFound`]
    /// for out-of-range IDs.  Intended for validating externally supplied
    /// IDs (console input, file references) before routing.
    pub fn try_get(&self, id: LocationId) -> SpatialResult<&Location> {
        self.get(id).ok_or(SpatialError::LocationNotFound(id))
    }

    /// Iterate locations in ID order.
    pub fn iter(&self) -> impl Iterator<Item = (LocationId, &Location)> {
        self.locations
            .iter()
            .enumerate()
            .map(|(i, loc)| (LocationId(i as u32), loc))
    }

    /// Exact-match name lookup; returns the first (lowest-ID) match.
    pub fn find_by_name(&self, name: &str) -> Option<LocationId> {
        self.iter().find(|(_, loc)| loc.name == name).map(|(id, _)| id)
    }

    /// Euclidean distance between two locations in map units.
    ///
    /// Panics if either ID is out of range; internal callers only pass IDs
    /// produced by this set.
    #[inline]
    pub fn distance(&self, a: LocationId, b: LocationId) -> f64 {
        self.locations[a.index()].pos.distance(self.locations[b.index()].pos)
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Return the `LocationId` of the nearest location to `pos`.
    ///
    /// Returns `None` only if the set is empty.
    pub fn nearest(&self, pos: MapPoint) -> Option<LocationId> {
        self.spatial_idx
            .nearest_neighbor(&[f64::from(pos.x), f64::from(pos.y)])
            .map(|e| e.id)
    }

    /// Return up to `k` nearest locations to `pos`, sorted by ascending
    /// distance.
    pub fn k_nearest(&self, pos: MapPoint, k: usize) -> Vec<LocationId> {
        self.spatial_idx
            .nearest_neighbor_iter(&[f64::from(pos.x), f64::from(pos.y)])
            .take(k)
            .map(|e| e.id)
            .collect()
    }
}
