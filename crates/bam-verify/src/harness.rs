use std::fmt;

use bam_core::{
    check_operand, check_widths, reference_multiply, FixedMatrix, Grid, MatmulKernel, Operand,
    SInt, Strategy, TransposeMode, WidthPolicy,
};
use log::{debug, info, warn};

use crate::error::{Result, VerifyError};
use crate::scenario::Scenario;

/// One element where a kernel disagreed with the reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub scenario: String,
    pub kernel: String,
    pub mode: TransposeMode,
    pub row: usize,
    pub col: usize,
    /// Reference value.
    pub expected: i64,
    /// Kernel value.
    pub actual: i64,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {}: row {} column {} is {}, reference is {}",
            self.scenario, self.mode, self.kernel, self.row, self.col, self.actual, self.expected
        )
    }
}

/// One kernel's result for a scenario and mode.
#[derive(Debug, Clone)]
pub struct KernelOutput<const N: usize> {
    pub kernel: String,
    pub result: Grid<N>,
}

#[derive(Debug, Clone)]
pub struct ModeOutcome<const N: usize> {
    pub mode: TransposeMode,
    pub reference: Grid<N>,
    pub outputs: Vec<KernelOutput<N>>,
}

#[derive(Debug, Clone)]
pub struct ScenarioOutcome<const N: usize> {
    pub scenario: Scenario<N>,
    pub modes: Vec<ModeOutcome<N>>,
}

/// Overall result of a harness run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass => write!(f, "PASS"),
            Verdict::Fail => write!(f, "FAIL"),
        }
    }
}

/// Everything a run produced: per-scenario outputs, every mismatch, and the
/// number of element comparisons made.
#[derive(Debug, Clone)]
pub struct HarnessReport<const N: usize> {
    pub outcomes: Vec<ScenarioOutcome<N>>,
    pub mismatches: Vec<Mismatch>,
    pub comparisons: usize,
}

impl<const N: usize> HarnessReport<N> {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }

    pub fn verdict(&self) -> Verdict {
        if self.passed() {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }
}

/// Runs a set of kernels against [`reference_multiply`] over shared inputs.
///
/// Operands are bound-checked before any kernel runs; a violation aborts the
/// run with an error. Disagreements are not errors: each one is recorded and
/// the run continues to the end.
#[derive(Debug)]
pub struct EquivalenceHarness<const N: usize, const IW: u32, const RW: u32> {
    policy: WidthPolicy,
    kernels: Vec<Box<dyn MatmulKernel<N, IW, RW>>>,
}

impl<const N: usize, const IW: u32, const RW: u32> EquivalenceHarness<N, IW, RW> {
    /// Create a harness with no kernels.
    ///
    /// # Errors
    /// Fails if `IW`/`RW` are too narrow for `bound`.
    pub fn new(bound: u64) -> Result<Self> {
        let policy = check_widths::<N, IW, RW>(bound)?;
        Ok(EquivalenceHarness {
            policy,
            kernels: Vec::new(),
        })
    }

    /// Create a harness comparing the given strategies.
    pub fn with_strategies(bound: u64, strategies: &[Strategy]) -> Result<Self> {
        let harness = Self::new(bound)?;
        Ok(strategies
            .iter()
            .fold(harness, |h, s| h.with_kernel(s.kernel::<N, IW, RW>())))
    }

    /// Add a kernel to the comparison set. Returns self for builder-style usage.
    pub fn with_kernel(mut self, kernel: Box<dyn MatmulKernel<N, IW, RW>>) -> Self {
        self.kernels.push(kernel);
        self
    }

    pub fn kernel_names(&self) -> Vec<&str> {
        self.kernels.iter().map(|k| k.name()).collect()
    }

    /// Run every kernel under every mode on one scenario, appending any
    /// disagreements to `mismatches`.
    ///
    /// # Errors
    /// Fails if an operand does not fit the operand width or exceeds the bound.
    pub fn run_scenario(
        &self,
        scenario: &Scenario<N>,
        mismatches: &mut Vec<Mismatch>,
    ) -> Result<ScenarioOutcome<N>> {
        let a = FixedMatrix::<SInt<IW>, N>::from_grid(&scenario.a)?;
        let b = FixedMatrix::<SInt<IW>, N>::from_grid(&scenario.b)?;
        check_operand(Operand::Left, &a, self.policy.bound)?;
        check_operand(Operand::Right, &b, self.policy.bound)?;

        let mut modes = Vec::with_capacity(TransposeMode::ALL.len());
        for mode in TransposeMode::ALL {
            let reference = reference_multiply(&scenario.a, &scenario.b, mode);
            let mut outputs = Vec::with_capacity(self.kernels.len());
            for kernel in &self.kernels {
                let result = kernel.multiply(&a, &b, mode).to_grid();
                for (row, col, expected, actual) in differences(&reference, &result) {
                    let mismatch = Mismatch {
                        scenario: scenario.name.clone(),
                        kernel: kernel.name().to_string(),
                        mode,
                        row,
                        col,
                        expected,
                        actual,
                    };
                    warn!("mismatch: {}", mismatch);
                    mismatches.push(mismatch);
                }
                outputs.push(KernelOutput {
                    kernel: kernel.name().to_string(),
                    result,
                });
            }
            modes.push(ModeOutcome {
                mode,
                reference,
                outputs,
            });
        }
        debug!("scenario {} checked under {} modes", scenario.name, modes.len());

        Ok(ScenarioOutcome {
            scenario: scenario.clone(),
            modes,
        })
    }

    /// Run all scenarios and aggregate the result into a single report.
    ///
    /// # Errors
    /// Returns [`VerifyError::NoKernels`] if nothing would be compared, or the
    /// first precondition violation found in a scenario.
    pub fn run(&self, scenarios: Vec<Scenario<N>>) -> Result<HarnessReport<N>> {
        if self.kernels.is_empty() {
            return Err(VerifyError::NoKernels);
        }
        info!(
            "checking {} scenarios x {} modes with kernels {:?} (N={}, bound={}, widths {}/{})",
            scenarios.len(),
            TransposeMode::ALL.len(),
            self.kernel_names(),
            N,
            self.policy.bound,
            IW,
            RW
        );

        let mut mismatches = Vec::new();
        let mut outcomes = Vec::with_capacity(scenarios.len());
        for scenario in &scenarios {
            outcomes.push(self.run_scenario(scenario, &mut mismatches)?);
        }
        let comparisons = scenarios.len() * TransposeMode::ALL.len() * self.kernels.len() * N * N;

        let report = HarnessReport {
            outcomes,
            mismatches,
            comparisons,
        };
        info!(
            "{}: {} comparisons, {} mismatches",
            report.verdict(),
            report.comparisons,
            report.mismatches.len()
        );
        Ok(report)
    }
}

/// Elements where `actual` differs from `expected`, as `(row, col, expected, actual)`.
fn differences<const N: usize>(
    expected: &Grid<N>,
    actual: &Grid<N>,
) -> Vec<(usize, usize, i64, i64)> {
    let mut out = Vec::new();
    for (i, (want, got)) in expected.iter().zip(actual.iter()).enumerate() {
        for (j, (&w, &g)) in want.iter().zip(got.iter()).enumerate() {
            if w != g {
                out.push((i, j, w, g));
            }
        }
    }
    out
}
