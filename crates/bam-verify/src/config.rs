use bam_core::Strategy;

/// Default number of random scenarios per run.
pub const DEFAULT_TRIALS: usize = 100;

/// Runtime settings for one harness run.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Number of bounded-random scenarios, in addition to the zero and
    /// pattern fixtures.
    pub trials: usize,
    /// Seed for the random scenarios.
    pub seed: u64,
    /// Kernel strategies compared against the reference.
    pub strategies: Vec<Strategy>,
}

impl HarnessConfig {
    /// All strategies, `DEFAULT_TRIALS` random scenarios, fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        HarnessConfig {
            trials: DEFAULT_TRIALS,
            seed,
            strategies: Strategy::ALL.to_vec(),
        }
    }
}

impl Default for HarnessConfig {
    /// Like [`HarnessConfig::with_seed`], seeded from the thread RNG.
    fn default() -> Self {
        Self::with_seed(rand::random())
    }
}
