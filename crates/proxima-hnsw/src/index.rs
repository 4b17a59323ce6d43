//! Hierarchical graph index implementation.
//!
//! Implements insertion and approximate nearest-neighbor search over a
//! multi-layer proximity graph: a geometric level draw per node, greedy
//! layer descent, and per-level bidirectional wiring of new nodes.

use crate::graph::{Graph, Node, NodeId};
use crate::level::random_level;
use proxima_observe::{EdgeEvt, GraphEvent, GraphObserver, NoopObserver};
use proxima_vector::{check_dimensions, euclidean_distance, Result, VectorError};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::{BinaryHeap, HashSet, VecDeque};

/// Index configuration parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HnswConfig {
    /// Max edges added to a newly inserted node per level (M parameter).
    ///
    /// Bounds the new node's out-degree only; an existing node's list can
    /// grow past `m` as later inserts attach to it.
    /// Default: 16
    pub m: usize,

    /// Candidate pool size during connection (EF parameter).
    /// The `ef` closest reachable nodes are considered as neighbors.
    /// Default: 32
    pub ef: usize,

    /// Maximum number of levels; node levels land in `[0, max_level - 1]`.
    /// Default: 16
    pub max_level: usize,

    /// Scale of the geometric level distribution.
    /// Higher = taller hierarchies.
    /// Default: 1.0
    pub lambda: f64,
}

impl Default for HnswConfig {
    fn default() -> Self {
        Self {
            m: 16,
            ef: 32,
            max_level: 16,
            lambda: 1.0,
        }
    }
}

/// Candidate during connection (node handle, distance to the new node).
#[derive(Debug, Clone, PartialEq)]
struct Candidate {
    node_id: NodeId,
    distance: f32,
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance.total_cmp(&other.distance)
    }
}

/// The node located by a search, by public attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    /// Caller-supplied id of the located node.
    pub id: u64,
    /// The located node's vector.
    pub vector: Vec<f32>,
    /// The located node's hierarchical level.
    pub level: usize,
    /// Euclidean distance from the query to the located node.
    pub distance: f32,
}

/// Hierarchical proximity-graph index.
///
/// Append-only and single-writer: `insert` takes `&mut self`, so exclusive
/// mutation is enforced by the borrow checker. Searches are read-only and
/// return an approximate answer (a local optimum of the greedy descent, not
/// necessarily the true nearest neighbor).
pub struct HnswIndex {
    /// Configuration
    config: HnswConfig,

    /// Vector dimensions
    dimensions: usize,

    /// Node arena + entry point
    graph: Graph,

    /// Level source; injected so tests can seed it
    rng: Box<dyn RngCore>,

    /// Sink for edge-creation events
    observer: Box<dyn GraphObserver>,
}

impl HnswIndex {
    /// Create a new index for vectors of the given dimensionality.
    ///
    /// Levels are drawn from an entropy-seeded RNG; use [`Self::with_rng`]
    /// for a deterministic index.
    pub fn new(dimensions: usize, config: HnswConfig) -> Self {
        Self::with_rng(dimensions, config, StdRng::from_entropy())
    }

    /// Create a new index with an explicit level-draw RNG.
    pub fn with_rng(dimensions: usize, config: HnswConfig, rng: impl RngCore + 'static) -> Self {
        Self {
            config,
            dimensions,
            graph: Graph::new(),
            rng: Box::new(rng),
            observer: Box::new(NoopObserver),
        }
    }

    /// Attach an observer that receives one event per edge created.
    pub fn with_observer(mut self, observer: impl GraphObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Get configuration.
    pub fn config(&self) -> &HnswConfig {
        &self.config
    }

    /// Fixed dimensionality of vectors in this index.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Number of nodes in the index.
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Insert one vector with its caller-supplied identity.
    ///
    /// Draws a level for the new node, descends from the entry point to a
    /// good per-level entry, and wires up to `m` bidirectional edges per
    /// level from `min(level, entry level)` down to 0.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the vector's length does not match the
    /// index's dimensionality; the index is unchanged in that case.
    pub fn insert(&mut self, vector: Vec<f32>, id: u64) -> Result<()> {
        check_dimensions(self.dimensions, &vector)?;
        let level = random_level(self.rng.as_mut(), self.config.lambda, self.config.max_level);
        self.insert_at(vector, id, level)
    }

    /// Locate the approximate nearest node to the query vector.
    ///
    /// Descends greedily from the entry point's level to level 0 and returns
    /// the local optimum found there. The result is nearest with respect to
    /// the graph's connectivity, not guaranteed globally nearest.
    ///
    /// # Errors
    ///
    /// Returns `EmptyIndex` if nothing has been inserted, or
    /// `DimensionMismatch` if the query's length is wrong.
    pub fn search(&self, query: &[f32]) -> Result<SearchHit> {
        check_dimensions(self.dimensions, query)?;

        let entry = self.graph.entry().ok_or(VectorError::EmptyIndex)?;

        let mut current = entry;
        for level in (1..=self.graph.node(entry).level).rev() {
            current = self.greedy_search(current, query, level);
        }
        let found = self.greedy_search(current, query, 0);

        let node = self.graph.node(found);
        Ok(SearchHit {
            id: node.id,
            vector: node.vector.clone(),
            level: node.level,
            distance: euclidean_distance(&node.vector, query),
        })
    }

    /// Insert with an explicit level (drawn by `insert`, fixed in tests).
    fn insert_at(&mut self, vector: Vec<f32>, id: u64, level: usize) -> Result<()> {
        check_dimensions(self.dimensions, &vector)?;

        tracing::debug!("inserting node {} at level {}", id, level);

        let query = vector.clone();
        let new_id = self.graph.push(Node::new(id, vector, level));

        let Some(entry) = self.graph.entry() else {
            // First node becomes the entry point
            self.graph.set_entry(new_id);
            return Ok(());
        };
        let entry_level = self.graph.node(entry).level;

        // Descend through the levels above the new node's level, carrying
        // the local optimum forward as the next level's starting point
        let mut current = entry;
        for level in (level + 1..=entry_level).rev() {
            current = self.greedy_search(current, &query, level);
        }

        // Wire the new node into every level it participates in
        for level in (0..=level.min(entry_level)).rev() {
            let per_level_entry = self.greedy_search(current, &query, level);
            self.connect(new_id, per_level_entry, level);
        }

        if level > entry_level {
            tracing::debug!("entry point moved to node {} (level {})", id, level);
            self.graph.set_entry(new_id);
        }
        Ok(())
    }

    /// Greedy descent at one level: strict-improvement hill climb.
    ///
    /// Repeatedly moves to the closest neighbor that strictly improves on
    /// the current node; stops at a local optimum. Moves only on strict
    /// improvement, so it terminates on any finite graph without a cycle
    /// guard.
    fn greedy_search(&self, start: NodeId, query: &[f32], level: usize) -> NodeId {
        let mut current = start;
        let mut best = euclidean_distance(&self.graph.node(current).vector, query);

        loop {
            let mut next = current;
            for &neighbor in self.graph.node(current).neighbors_at(level) {
                let d = euclidean_distance(&self.graph.node(neighbor).vector, query);
                if d < best {
                    best = d;
                    next = neighbor;
                }
            }
            if next == current {
                return current;
            }
            current = next;
        }
    }

    /// Gather candidates around `entry` at `level` and wire the new node in.
    ///
    /// Walks the entire component reachable from `entry` via `level`'s edges
    /// (each node visited once), keeps the `ef` closest candidates in a
    /// bounded max-heap, then adds bidirectional edges closest-first until
    /// the new node has `m` neighbors at this level. The candidate side's
    /// degree is not capped here, so existing nodes can accumulate more than
    /// `m` edges over time.
    ///
    /// Visiting the whole component keeps the selection exact but scales
    /// with component size; this index targets small corpora.
    fn connect(&mut self, new_id: NodeId, entry: NodeId, level: usize) {
        let mut candidates: BinaryHeap<Candidate> = BinaryHeap::new();
        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut to_visit: VecDeque<NodeId> = VecDeque::new();

        visited.insert(entry);
        to_visit.push_back(entry);

        let new_vector = &self.graph.node(new_id).vector;
        while let Some(current) = to_visit.pop_front() {
            let node = self.graph.node(current);
            candidates.push(Candidate {
                node_id: current,
                distance: euclidean_distance(&node.vector, new_vector),
            });
            // Evict the farthest once over the candidate budget
            if candidates.len() > self.config.ef {
                candidates.pop();
            }

            for &neighbor in node.neighbors_at(level) {
                if visited.insert(neighbor) {
                    to_visit.push_back(neighbor);
                }
            }
        }

        let new_node_id = self.graph.node(new_id).id;
        for candidate in candidates.into_sorted_vec() {
            if self.graph.node(new_id).degree_at(level) >= self.config.m {
                break;
            }
            let neighbor_id = self.graph.node(candidate.node_id).id;
            self.graph.node_mut(new_id).push_neighbor(level, candidate.node_id);
            self.graph.node_mut(candidate.node_id).push_neighbor(level, new_id);

            tracing::debug!(
                "connected node {} with node {} at level {}",
                new_node_id,
                neighbor_id,
                level
            );
            self.observer.emit(GraphEvent::EdgeCreated(EdgeEvt {
                node: new_node_id,
                neighbor: neighbor_id,
                level,
            }));
        }
    }
}

impl proxima_vector::NearestNeighbor for HnswIndex {
    fn insert(&mut self, vector: Vec<f32>, id: u64) -> Result<()> {
        HnswIndex::insert(self, vector, id)
    }

    fn nearest(&self, query: &[f32]) -> Result<proxima_vector::Neighbor> {
        let hit = self.search(query)?;
        Ok(proxima_vector::Neighbor {
            id: hit.id,
            distance: hit.distance,
            vector: hit.vector,
        })
    }

    fn len(&self) -> usize {
        self.graph.len()
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}
