//! Proximity road graph: construction and adjacency queries.
//!
//! # Construction
//!
//! [`build_graph`] derives a sparse, road-like graph from a [`LocationSet`]
//! with a bounded-degree, distance-capped nearest-neighbor pass, a
//! minimum-degree guarantee, and a final symmetry repair pass that makes the
//! graph effectively bidirectional.  Construction is a pure, deterministic
//! function of the input set and configuration.
//!
//! # Data layout
//!
//! The finished graph uses **Compressed Sparse Row (CSR)** format for
//! outgoing edges.  Given a `LocationId n`, its outgoing edges occupy the
//! slice:
//!
//! ```text
//! edge_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! All edge arrays (`edge_from`, `edge_to`, `edge_weight`) are sorted by
//! source location and indexed by `EdgeId`.  Iteration over a location's
//! outgoing edges is therefore a contiguous memory scan — ideal for the
//! router's inner loop.  The graph is read-only after `build_graph` returns;
//! concurrent routing queries over a shared `&RoadGraph` are safe.

use rustc_hash::FxHashSet;

use wf_core::{EdgeId, LocationId};

use crate::locations::LocationSet;

// ── Configuration ─────────────────────────────────────────────────────────────

/// Tunable bounds for the proximity pass.
///
/// Both values directly determine connectivity (and hence reachability), so
/// they are explicit parameters rather than compiled-in literals.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphConfig {
    /// Maximum edges added per location in the nearest-neighbor pass.
    pub max_connections: usize,
    /// Maximum length (map units) of an edge added in the nearest-neighbor
    /// pass.  Edges forced by the minimum-degree guarantee and edges added by
    /// symmetry repair are exempt.
    pub max_distance: f64,
}

impl GraphConfig {
    /// Every location with at least this many candidates ends up with at
    /// least this many outgoing edges, distance cap notwithstanding.
    pub const MIN_CONNECTIONS: usize = 2;
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self { max_connections: 5, max_distance: 2000.0 }
    }
}

// ── RoadGraph ─────────────────────────────────────────────────────────────────

/// Directed proximity graph in CSR format.
///
/// All fields are `pub` for direct indexed access on hot paths.  Do not
/// construct directly; use [`build_graph`].
///
/// Invariants after construction:
/// - every edge `i→j` has a reverse edge `j→i` with an identical weight;
/// - at most one edge exists per ordered `(from, to)` pair;
/// - `edge_weight[e]` is the Euclidean distance between the endpoints.
#[derive(Clone, Debug, PartialEq)]
pub struct RoadGraph {
    /// CSR row pointer.  Outgoing edges of location `n` are at EdgeIds
    /// `node_out_start[n] .. node_out_start[n+1]`.
    /// Length = `location_count + 1`.
    pub node_out_start: Vec<u32>,

    /// Source location of each edge.  Redundant with CSR but required for
    /// efficient path reconstruction.
    pub edge_from: Vec<LocationId>,

    /// Destination location of each edge.
    pub edge_to: Vec<LocationId>,

    /// Euclidean length of each edge in raw map units.
    pub edge_weight: Vec<f64>,
}

impl RoadGraph {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn location_count(&self) -> usize {
        self.node_out_start.len() - 1
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.location_count() == 0
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing edges from `loc`.
    ///
    /// This is a contiguous index range — no heap allocation.
    #[inline]
    pub fn out_edges(&self, loc: LocationId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[loc.index()] as usize;
        let end   = self.node_out_start[loc.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    /// Out-degree of `loc` (number of outgoing edges).
    #[inline]
    pub fn out_degree(&self, loc: LocationId) -> usize {
        let start = self.node_out_start[loc.index()] as usize;
        let end   = self.node_out_start[loc.index() + 1] as usize;
        end - start
    }

    /// Iterator over `(destination, weight)` pairs of `loc`'s outgoing edges.
    #[inline]
    pub fn neighbors(&self, loc: LocationId) -> impl Iterator<Item = (LocationId, f64)> + '_ {
        self.out_edges(loc)
            .map(|e| (self.edge_to[e.index()], self.edge_weight[e.index()]))
    }

    /// `true` if a directed edge `from → to` exists.
    pub fn has_edge(&self, from: LocationId, to: LocationId) -> bool {
        self.neighbors(from).any(|(dst, _)| dst == to)
    }

    /// Weight of the directed edge `from → to`, if it exists.
    pub fn edge_weight_between(&self, from: LocationId, to: LocationId) -> Option<f64> {
        self.neighbors(from).find(|&(dst, _)| dst == to).map(|(_, w)| w)
    }

    /// Outgoing connections of `loc` sorted by ascending weight (ties by
    /// destination ID).  This is the shape consumed by per-location
    /// connection reports and renderers.
    pub fn connections_sorted(&self, loc: LocationId) -> Vec<(LocationId, f64)> {
        let mut conns: Vec<(LocationId, f64)> = self.neighbors(loc).collect();
        conns.sort_unstable_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
        conns
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

struct RawEdge {
    from: LocationId,
    to: LocationId,
    weight: f64,
}

/// Build the proximity graph over `locations`.
///
/// Per location `i`:
/// 1. distances to every other location are sorted ascending, ties broken by
///    ascending destination ID so the result is deterministic;
/// 2. edges are added in that order until `config.max_connections` is
///    reached or the next candidate exceeds `config.max_distance`;
/// 3. if fewer than [`GraphConfig::MIN_CONNECTIONS`] edges were added and at
///    least that many candidates exist, edges to the globally nearest
///    candidates are forced regardless of the distance cap (duplicates of
///    edges already added are suppressed, not double-added).
///
/// Afterwards a symmetry repair pass runs over the *complete* edge set: every
/// `i→j` without a `j→i` counterpart gets one, with the same weight.
///
/// Total for any well-formed set: a set of size 0 or 1 yields a graph with
/// empty adjacency everywhere.
pub fn build_graph(locations: &LocationSet, config: GraphConfig) -> RoadGraph {
    let n = locations.len();

    let mut raw: Vec<RawEdge> = Vec::new();
    // Ordered (from, to) pairs already present, for duplicate suppression and
    // the repair pass.
    let mut present: FxHashSet<(u32, u32)> = FxHashSet::default();

    // ── Nearest-neighbor pass ─────────────────────────────────────────────
    for i in 0..n as u32 {
        let from = LocationId(i);

        let mut candidates: Vec<(f64, LocationId)> = (0..n as u32)
            .filter(|&j| j != i)
            .map(|j| (locations.distance(from, LocationId(j)), LocationId(j)))
            .collect();
        candidates.sort_unstable_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        let mut connection_count = 0;
        for &(weight, to) in &candidates {
            if connection_count >= config.max_connections {
                break;
            }
            if weight > config.max_distance {
                break;
            }
            raw.push(RawEdge { from, to, weight });
            present.insert((from.0, to.0));
            connection_count += 1;
        }

        // Minimum-degree guarantee: force the globally nearest candidates,
        // distance cap notwithstanding.
        if connection_count < GraphConfig::MIN_CONNECTIONS
            && candidates.len() >= GraphConfig::MIN_CONNECTIONS
        {
            for &(weight, to) in candidates.iter().take(GraphConfig::MIN_CONNECTIONS) {
                if present.insert((from.0, to.0)) {
                    raw.push(RawEdge { from, to, weight });
                }
            }
        }
    }

    // ── Symmetry repair pass ──────────────────────────────────────────────
    // Runs over the complete edge set built above, so repairs made for one
    // location cannot be mistaken for originally-absent edges of another.
    // Repair edges need no repair of their own: their reverse is the edge
    // that triggered them.
    let initial_count = raw.len();
    for idx in 0..initial_count {
        let (from, to, weight) = (raw[idx].from, raw[idx].to, raw[idx].weight);
        if present.insert((to.0, from.0)) {
            raw.push(RawEdge { from: to, to: from, weight });
        }
    }

    // ── CSR finalization ──────────────────────────────────────────────────
    raw.sort_unstable_by_key(|e| (e.from.0, e.to.0));

    let edge_from:   Vec<LocationId> = raw.iter().map(|e| e.from).collect();
    let edge_to:     Vec<LocationId> = raw.iter().map(|e| e.to).collect();
    let edge_weight: Vec<f64>        = raw.iter().map(|e| e.weight).collect();

    let mut node_out_start = vec![0u32; n + 1];
    for e in &raw {
        node_out_start[e.from.index() + 1] += 1;
    }
    for i in 1..=n {
        node_out_start[i] += node_out_start[i - 1];
    }
    debug_assert_eq!(node_out_start[n] as usize, raw.len());

    RoadGraph { node_out_start, edge_from, edge_to, edge_weight }
}
