//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! Callers route via the [`Router`] trait, so applications can swap in custom
//! implementations (A*, contraction hierarchies) without touching the rest of
//! the framework.  The default [`DijkstraRouter`] is sufficient for sets of a
//! few thousand locations.
//!
//! # Result shape
//!
//! An unreachable destination is an expected outcome, not an error: it is
//! reported as an empty path with an infinite distance.  Out-of-range IDs, by
//! contrast, are a caller bug and fail fast.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use wf_core::LocationId;

use crate::network::RoadGraph;

// ── PathResult ────────────────────────────────────────────────────────────────

/// The result of a routing query.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    /// Locations to visit in order, start and end inclusive.  Empty when no
    /// route exists; `[start]` when `start == end`.
    pub path: Vec<LocationId>,
    /// Cumulative distance from the start, indexed by `LocationId`;
    /// `f64::INFINITY` for unreached locations.  Exact for the end location
    /// and everything settled before it; locations the search never settled
    /// (because it stopped early at the target) hold tentative values.
    pub distances: Vec<f64>,
}

impl PathResult {
    /// `true` if no route was found.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Cumulative distance from the start to `loc`; infinite if unreached.
    #[inline]
    pub fn distance_to(&self, loc: LocationId) -> f64 {
        self.distances[loc.index()]
    }

    /// Number of path segments (edges traversed); 0 for trivial and empty
    /// results.
    pub fn segment_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`.  The graph is immutable after
/// construction, so concurrent queries only need per-call working state.
pub trait Router: Send + Sync {
    /// Compute a minimum-weight route from `from` to `to`.
    ///
    /// `from == to` yields the trivial single-location path with distance 0;
    /// an unreachable `to` yields an empty path.
    fn route(&self, graph: &RoadGraph, from: LocationId, to: LocationId) -> PathResult;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard Dijkstra's algorithm over the CSR proximity graph, using the
/// Euclidean edge weights as cost.
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route(&self, graph: &RoadGraph, from: LocationId, to: LocationId) -> PathResult {
        shortest_path(graph, from, to)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// `f64` cost with a total order, usable as a `BinaryHeap` key.
///
/// Weights are non-negative and never NaN (they are Euclidean distances), so
/// `total_cmp` agrees with the usual numeric order here.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Cost(f64);

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Single-source shortest path from `from`, stopping once `to` is settled.
///
/// Uses the stale-entry-tolerant frontier: relaxed locations are re-pushed
/// with their new key, and entries whose location was already settled are
/// skipped on extraction.  No decrease-key structure is needed.
///
/// # Panics
///
/// Panics if `from` or `to` is out of range — validating externally supplied
/// IDs is the caller's job ([`LocationSet::try_get`](crate::LocationSet::try_get)).
pub fn shortest_path(graph: &RoadGraph, from: LocationId, to: LocationId) -> PathResult {
    let n = graph.location_count();
    assert!(from.index() < n, "start {from} out of range (0..{n})");
    assert!(to.index() < n, "end {to} out of range (0..{n})");

    let mut dist    = vec![f64::INFINITY; n];
    let mut prev    = vec![LocationId::INVALID; n];
    let mut visited = vec![false; n];

    dist[from.index()] = 0.0;

    // Min-heap: (cost, location). Reverse makes BinaryHeap (max) behave as
    // min-heap.  Secondary key LocationId ensures deterministic tie-breaking.
    let mut heap: BinaryHeap<Reverse<(Cost, LocationId)>> = BinaryHeap::new();
    heap.push(Reverse((Cost(0.0), from)));

    while let Some(Reverse((_, loc))) = heap.pop() {
        // Skip stale heap entries.
        if visited[loc.index()] {
            continue;
        }
        visited[loc.index()] = true;

        // Early exit: all remaining tentative distances are no smaller.
        if loc == to {
            break;
        }

        for (neighbor, weight) in graph.neighbors(loc) {
            if visited[neighbor.index()] {
                continue;
            }
            let new_cost = dist[loc.index()] + weight;
            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                prev[neighbor.index()] = loc;
                heap.push(Reverse((Cost(new_cost), neighbor)));
            }
        }
    }

    // ── Path reconstruction ───────────────────────────────────────────────
    let mut path = Vec::new();
    let mut cur = to;
    while cur != LocationId::INVALID {
        path.push(cur);
        cur = prev[cur.index()];
    }
    path.reverse();

    // A chain that never reached the start is just the unreached end node
    // standing alone; report "no route" rather than a spurious single hop.
    if path.len() == 1 && path[0] != from {
        path.clear();
    }

    PathResult { path, distances: dist }
}
