//! `bam-verify` - Equivalence checking for `bam-core` matmul kernels.
//!
//! Drives every kernel strategy and the full-precision reference over the
//! same scenarios and transpose modes, records each element that disagrees,
//! and renders a plain-text report.

pub mod config;
pub mod error;
pub mod harness;
pub mod report;
pub mod scenario;

pub use config::HarnessConfig;
pub use error::{Result, VerifyError};
pub use harness::{EquivalenceHarness, HarnessReport, Mismatch, Verdict};
pub use report::write_report;
pub use scenario::{Category, Scenario};

use bam_core::config::{BOUND, DIM, INPUT_WIDTH, RESULT_WIDTH};

/// Run the harness for the shipped `bam_core::config` sizing.
pub fn run_default(config: &HarnessConfig) -> Result<HarnessReport<DIM>> {
    let harness = EquivalenceHarness::<DIM, INPUT_WIDTH, RESULT_WIDTH>::with_strategies(
        BOUND,
        &config.strategies,
    )?;
    harness.run(scenario::suite(BOUND, config.trials, config.seed))
}
