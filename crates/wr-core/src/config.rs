//! Configuration for weather rolls.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for a roll or simulation run.
#[derive(Debug, Clone, Default)]
pub struct WeatherConfig {
    /// RNG seed for reproducible weather. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl WeatherConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the random generator for this configuration.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
