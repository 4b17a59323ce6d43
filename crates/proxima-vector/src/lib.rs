//! Geometry layer for the proxima vector index.
//!
//! This crate provides the pieces shared by every index in the workspace:
//!
//! - **Distance**: Euclidean (L2) distance over fixed-dimension vectors
//! - **NearestNeighbor trait**: the common insert/query seam
//! - **BruteForceIndex**: exact linear scan, used as a correctness oracle
//!   for the approximate graph index
//!
//! # Example
//!
//! ```
//! use proxima_vector::{BruteForceIndex, NearestNeighbor};
//!
//! let mut index = BruteForceIndex::new(2);
//! index.insert(vec![1.0, 1.0], 1).unwrap();
//! index.insert(vec![5.0, 0.0], 2).unwrap();
//!
//! let hit = index.nearest(&[1.2, 0.9]).unwrap();
//! assert_eq!(hit.id, 1);
//! ```

mod brute;
mod distance;
mod traits;

pub use brute::BruteForceIndex;
pub use distance::{euclidean_distance, euclidean_distance_squared};
pub use traits::{NearestNeighbor, Neighbor};

/// Error type for vector index operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VectorError {
    /// A vector's length does not match the index's fixed dimensionality.
    /// The offending operation has no effect on the index.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A query was issued against an index with no entries.
    #[error("search on empty index")]
    EmptyIndex,
}

/// Result type for vector index operations.
pub type Result<T> = std::result::Result<T, VectorError>;

/// Check a vector's length against the index's fixed dimensionality.
pub fn check_dimensions(expected: usize, vector: &[f32]) -> Result<()> {
    if vector.len() != expected {
        return Err(VectorError::DimensionMismatch {
            expected,
            actual: vector.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_dimensions() {
        assert!(check_dimensions(3, &[1.0, 2.0, 3.0]).is_ok());

        let err = check_dimensions(3, &[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            VectorError::DimensionMismatch {
                expected: 3,
                actual: 2
            }
        );
    }
}
