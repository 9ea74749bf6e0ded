//! Settings shared by the sampling commands.

/// How a definition is sampled.
#[derive(Debug, Clone)]
pub struct RollConfig {
    /// RNG seed for reproducible rolls.
    pub seed: u64,
    /// Number of samples printed by `roll`.
    pub times: u32,
    /// Number of samples aggregated by `stats`.
    pub samples: u32,
}

impl Default for RollConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            times: 1,
            samples: 1000,
        }
    }
}

impl RollConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of printed samples (at least 1).
    pub fn with_times(mut self, times: u32) -> Self {
        self.times = times.max(1);
        self
    }

    /// Set the number of aggregated samples (at least 1).
    pub fn with_samples(mut self, samples: u32) -> Self {
        self.samples = samples.max(1);
        self
    }
}
