//! The shipped compile-time configuration.
//!
//! `DIM` and `BOUND` are the only knobs; every width below is derived from
//! them once, at compile time.

use crate::int::SInt;
use crate::matmul::Matmul;
use crate::matrix::FixedMatrix;
use crate::width::WidthPolicy;

/// Matrix side length.
pub const DIM: usize = 8;

/// Maximum absolute value of any operand element.
pub const BOUND: u64 = 32;

pub const POLICY: WidthPolicy = WidthPolicy::new(DIM, BOUND);
pub const INPUT_WIDTH: u32 = POLICY.input_width;
pub const RESULT_WIDTH: u32 = POLICY.result_width;

// Operand products are formed in i64 and accumulators are stored in one.
const _: () = assert!(INPUT_WIDTH <= 32 && RESULT_WIDTH <= 64);

pub type DataInt = SInt<INPUT_WIDTH>;
pub type ResultInt = SInt<RESULT_WIDTH>;
pub type DataMatrix = FixedMatrix<DataInt, DIM>;

/// Kernel entry point sized for the shipped configuration.
pub type DefaultMatmul = Matmul<DIM, INPUT_WIDTH, RESULT_WIDTH>;
