//! Euclidean distance over fixed-dimension vectors.
//!
//! The index is constructed for a single dimensionality, so these functions
//! assume `a.len() == b.len()`; the debug assertion catches violations in
//! tests, and callers go through [`crate::check_dimensions`] at the API
//! boundary.

/// Compute Euclidean (L2) distance between two vectors.
///
/// Returns `sqrt(sum((a[i] - b[i])^2))`.
///
/// # Example
///
/// ```
/// use proxima_vector::euclidean_distance;
///
/// let a = [0.0, 0.0];
/// let b = [3.0, 4.0];
/// assert!((euclidean_distance(&a, &b) - 5.0).abs() < 1e-6);
/// ```
#[inline]
pub fn euclidean_distance(a: &[f32], b: &[f32]) -> f32 {
    euclidean_distance_squared(a, b).sqrt()
}

/// Compute squared Euclidean distance (avoids the sqrt for comparisons).
///
/// Processed in chunks of 4 so release builds auto-vectorize the inner loop.
#[inline]
pub fn euclidean_distance_squared(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len(), "vector dimensions must match");

    let mut sum = 0.0f32;
    let chunks = a.len() / 4;

    for i in 0..chunks {
        let base = i * 4;
        let d0 = a[base] - b[base];
        let d1 = a[base + 1] - b[base + 1];
        let d2 = a[base + 2] - b[base + 2];
        let d3 = a[base + 3] - b[base + 3];
        sum += d0 * d0 + d1 * d1 + d2 * d2 + d3 * d3;
    }

    for i in (chunks * 4)..a.len() {
        let d = a[i] - b[i];
        sum += d * d;
    }

    sum
}
