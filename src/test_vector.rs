use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Deref;

/// Benchmark input: integers drawn uniformly from the whole `i32` range.
///
/// Built once per run and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestVector {
    values: Vec<i32>,
}

impl TestVector {
    /// Generate `count` random values.
    ///
    /// With `seed = None` the generator is seeded from OS entropy so every run
    /// sees different data; passing a seed makes the vector reproducible.
    pub fn generate(count: usize, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::generate_with(count, &mut rng)
    }

    /// Generate `count` values from a caller-provided generator
    pub fn generate_with<R: Rng>(count: usize, rng: &mut R) -> Self {
        let values = (0..count).map(|_| rng.random::<i32>()).collect();
        Self { values }
    }
}

impl From<Vec<i32>> for TestVector {
    fn from(values: Vec<i32>) -> Self {
        Self { values }
    }
}

impl Deref for TestVector {
    type Target = [i32];

    fn deref(&self) -> &[i32] {
        &self.values
    }
}
