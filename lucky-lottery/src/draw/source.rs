use super::LuckySource;
use crate::LuckyNumber;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Pseudo-random draws from a single seeded stream
#[derive(Debug, Clone)]
pub struct SeededDraws {
    seed: u64,
    rng: StdRng,
}

impl SeededDraws {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seed from the thread-local generator. The seed is kept so a run can
    /// be replayed with `from_seed`.
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::thread_rng().gen::<u64>())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl LuckySource for SeededDraws {
    fn draw(&mut self, max: u32) -> LuckyNumber {
        LuckyNumber::new(self.rng.gen_range(1..=max.max(1)))
    }
}

/// Replays a fixed sequence of values, cycling when it runs out.
///
/// Values are clamped to `[1, max]`.
#[derive(Debug, Clone)]
pub struct FixedDraws {
    values: Vec<u32>,
    index: usize,
}

impl FixedDraws {
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, index: 0 }
    }

    pub fn constant(value: u32) -> Self {
        Self::new(vec![value])
    }
}

impl LuckySource for FixedDraws {
    fn draw(&mut self, max: u32) -> LuckyNumber {
        let max = max.max(1);
        if self.values.is_empty() {
            return LuckyNumber::new(1);
        }

        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        LuckyNumber::new(value.clamp(1, max))
    }
}
