//! Core trait for nearest-neighbor indices.
//!
//! The `NearestNeighbor` trait defines the insert/query surface shared by
//! the exact brute-force baseline and the approximate graph index.

use crate::Result;

/// The answer to a nearest-neighbor query.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    /// Caller-supplied id of the located entry.
    pub id: u64,
    /// Distance from the query to the located entry (lower = closer).
    pub distance: f32,
    /// The located entry's vector.
    pub vector: Vec<f32>,
}

impl Eq for Neighbor {}

impl PartialOrd for Neighbor {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Neighbor {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Compare by distance; total_cmp for proper NaN handling
        self.distance.total_cmp(&other.distance)
    }
}

/// Common interface for nearest-neighbor indices.
///
/// Implementations are in-memory, append-only, single-writer structures:
/// `insert` takes `&mut self`, so exclusive mutation is enforced by the
/// borrow checker rather than internal locking. Queries may return an
/// approximate answer depending on the implementation; `BruteForceIndex`
/// is exact.
pub trait NearestNeighbor {
    /// Insert a vector with the given caller-supplied id.
    ///
    /// Ids are not required to be unique; the index stores every insert.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the vector's length does not match the
    /// index's fixed dimensionality. The index is unchanged on error.
    fn insert(&mut self, vector: Vec<f32>, id: u64) -> Result<()>;

    /// Locate the nearest indexed entry to the query vector.
    ///
    /// # Errors
    ///
    /// Returns `EmptyIndex` if nothing has been inserted, or
    /// `DimensionMismatch` if the query's length is wrong.
    fn nearest(&self, query: &[f32]) -> Result<Neighbor>;

    /// Number of entries in the index.
    fn len(&self) -> usize;

    /// Check if the index is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fixed dimensionality of vectors in this index.
    fn dimensions(&self) -> usize;
}
