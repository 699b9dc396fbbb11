//! Random number generation
//!
//! Uses a seeded ChaCha RNG so sessions are reproducible under test.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Game random number generator
///
/// Wraps ChaCha8Rng for reproducible random number generation.
/// Note: RNG state is not serialized - only the seed is kept, and
/// deserializing recreates the generator from it.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

// Custom serialization - only serialize seed, recreate RNG on deserialize
impl Serialize for GameRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GameRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(GameRng::new(seed))
    }
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform value in 1..=n
    ///
    /// Returns 0 if n is 0.
    pub fn rnd(&mut self, n: i64) -> i64 {
        if n <= 0 {
            return 0;
        }
        self.rng.gen_range(1..=n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.rnd(1000), rng2.rnd(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.rnd(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.rnd(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_rnd_zero() {
        let mut rng = GameRng::new(42);
        assert_eq!(rng.rnd(0), 0);
    }

    #[test]
    fn test_serde_roundtrip_preserves_seed() {
        let rng = GameRng::new(1234);
        let json = serde_json::to_string(&rng).unwrap();
        let restored: GameRng = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.seed(), 1234);
    }

    proptest! {
        #[test]
        fn rnd_stays_in_range(seed: u64, n in 1i64..10_000) {
            let mut rng = GameRng::new(seed);
            let v = rng.rnd(n);
            prop_assert!(v >= 1 && v <= n);
        }
    }
}
