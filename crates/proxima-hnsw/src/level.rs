//! Level assignment for new nodes.

use rand::Rng;
use rand::RngCore;

/// Draw a random level for a new node.
///
/// Draws `r` uniformly from `(0, 1]` and returns
/// `floor(-ln(r) * lambda)` clamped to `[0, max_level - 1]`, a
/// geometric-like decay: a level is roughly `e^(1/lambda)` times rarer than
/// the one below it, so higher levels hold exponentially fewer nodes.
///
/// The RNG is passed in by the caller; the index owns one and tests
/// substitute a seeded one.
pub fn random_level(rng: &mut dyn RngCore, lambda: f64, max_level: usize) -> usize {
    // gen() is [0, 1); flip to (0, 1] so ln is defined
    let r = 1.0 - rng.gen::<f64>();
    let level = (-r.ln() * lambda).floor() as usize;
    level.min(max_level.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_level_bound() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10_000 {
            let level = random_level(&mut rng, 1.0, 3);
            assert!(level < 3);
        }
    }

    #[test]
    fn test_level_bound_large_lambda() {
        // Large lambda pushes the raw draw high; the clamp must still hold
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            assert!(random_level(&mut rng, 100.0, 5) < 5);
        }
    }

    #[test]
    fn test_geometric_decay() {
        let mut rng = StdRng::seed_from_u64(1);
        let max_level = 16;
        let mut counts = vec![0usize; max_level];

        for _ in 0..10_000 {
            counts[random_level(&mut rng, 1.0, max_level)] += 1;
        }

        // Level 0 holds the bulk of the draws and the tail decays
        assert!(counts[0] > counts[1]);
        assert!(counts[1] > counts[3]);
    }

    #[test]
    fn test_deterministic_with_seed() {
        let draws = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..100)
                .map(|_| random_level(&mut rng, 1.0, 8))
                .collect::<Vec<_>>()
        };
        assert_eq!(draws(99), draws(99));
    }
}
