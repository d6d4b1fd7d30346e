/// Source of the random tokens embedded in candidate names. Implementations
/// must return a uniformly distributed integer in the given inclusive range.
pub trait Random {
    fn pick(&mut self, lo: u64, hi: u64) -> u64;
}

pub struct FastRandom {
    rng: fastrand::Rng,
}

impl FastRandom {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Random for FastRandom {
    fn pick(&mut self, lo: u64, hi: u64) -> u64 {
        self.rng.u64(lo..=hi)
    }
}
