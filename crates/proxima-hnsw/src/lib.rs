//! Hierarchical proximity-graph index for approximate nearest neighbor
//! (ANN) search.
//!
//! The index is a multi-layer navigable graph:
//!
//! - Higher levels have exponentially fewer nodes and longer-range edges
//! - Each node draws its level once from a geometric-like distribution
//! - Search descends greedily from the entry point, level by level, and
//!   returns the local optimum found at level 0
//!
//! The structure is in-memory, append-only, and single-writer: `insert`
//! takes `&mut self` and there is no deletion. Results are approximate by
//! construction; the greedy descent can stop at a local optimum that is not
//! the true nearest neighbor.
//!
//! During insertion, candidate gathering walks the entire component
//! reachable at the level being wired, so construction cost grows with
//! component size. That keeps neighbor selection exact for the small corpora
//! this index targets; it is the known scalability ceiling of this design.
//!
//! # Example
//!
//! ```
//! use proxima_hnsw::{HnswConfig, HnswIndex};
//!
//! let mut index = HnswIndex::new(2, HnswConfig::default());
//! index.insert(vec![1.0, 1.0], 1).unwrap();
//! index.insert(vec![5.0, 0.0], 2).unwrap();
//!
//! let hit = index.search(&[0.9, 1.2]).unwrap();
//! assert_eq!(hit.id, 1);
//! ```

mod graph;
mod index;
mod level;

pub use index::{HnswConfig, HnswIndex, SearchHit};
pub use proxima_vector::{Result, VectorError};
