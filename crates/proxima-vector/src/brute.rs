//! Brute force nearest-neighbor index.
//!
//! Linear scan - O(n * d) per query but exact, so it doubles as the
//! correctness oracle for the approximate graph index in tests.

use crate::distance::euclidean_distance;
use crate::traits::{NearestNeighbor, Neighbor};
use crate::{check_dimensions, Result, VectorError};

/// Exact nearest-neighbor index backed by a linear scan.
///
/// Entries are stored append-only in insertion order.
///
/// # Performance
///
/// - Insert: O(1)
/// - Query: O(n * d) where n = entries, d = dimensions
pub struct BruteForceIndex {
    /// Entry storage: (caller id, vector), in insertion order
    entries: Vec<(u64, Vec<f32>)>,
    /// Fixed dimensionality (all vectors must have this length)
    dimensions: usize,
}

impl BruteForceIndex {
    /// Create a new brute force index for vectors of the given dimensionality.
    ///
    /// # Example
    ///
    /// ```
    /// use proxima_vector::BruteForceIndex;
    ///
    /// let index = BruteForceIndex::new(128);
    /// ```
    pub fn new(dimensions: usize) -> Self {
        Self {
            entries: Vec::new(),
            dimensions,
        }
    }
}

impl NearestNeighbor for BruteForceIndex {
    fn insert(&mut self, vector: Vec<f32>, id: u64) -> Result<()> {
        check_dimensions(self.dimensions, &vector)?;
        self.entries.push((id, vector));
        Ok(())
    }

    fn nearest(&self, query: &[f32]) -> Result<Neighbor> {
        check_dimensions(self.dimensions, query)?;

        let (id, vector, distance) = self
            .entries
            .iter()
            .map(|(id, v)| (*id, v, euclidean_distance(v, query)))
            .min_by(|a, b| a.2.total_cmp(&b.2))
            .ok_or(VectorError::EmptyIndex)?;

        Ok(Neighbor {
            id,
            distance,
            vector: vector.clone(),
        })
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}
