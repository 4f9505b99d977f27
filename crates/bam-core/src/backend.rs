use std::fmt::{self, Debug};

use crate::int::SInt;
use crate::kernel::{FusedMultiply, TransposeThenMultiply};
use crate::matrix::FixedMatrix;
use crate::mode::TransposeMode;

/// A realization of `C = op(A) × op(B)` over bit-width-constrained matrices.
///
/// `N` is the matrix side, `IW` the operand width and `RW` the accumulator
/// width. Implementations must agree element-for-element with
/// [`crate::reference_multiply`] whenever every operand element lies within
/// the numeric bound that `IW` and `RW` were sized for. Preconditions are
/// checked by [`crate::Matmul`], not here.
pub trait MatmulKernel<const N: usize, const IW: u32, const RW: u32>: Send + Sync + Debug {
    /// Returns the name of this kernel (e.g., "fused").
    fn name(&self) -> &str;

    /// Multiply `a` by `b`, transposing operands as `mode` selects.
    fn multiply(
        &self,
        a: &FixedMatrix<SInt<IW>, N>,
        b: &FixedMatrix<SInt<IW>, N>,
        mode: TransposeMode,
    ) -> FixedMatrix<SInt<RW>, N>;
}

/// The interchangeable kernel realizations, selectable by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Materialize transposed operands, then multiply.
    TransposeThenMultiply,
    /// Fold the transpose into the index arithmetic of the multiply loop.
    Fused,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::TransposeThenMultiply, Strategy::Fused];

    /// The kernel implementing this strategy.
    pub fn kernel<const N: usize, const IW: u32, const RW: u32>(
        self,
    ) -> Box<dyn MatmulKernel<N, IW, RW>> {
        match self {
            Strategy::TransposeThenMultiply => Box::new(TransposeThenMultiply),
            Strategy::Fused => Box::new(FusedMultiply),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::TransposeThenMultiply => write!(f, "transpose-then-multiply"),
            Strategy::Fused => write!(f, "fused"),
        }
    }
}
