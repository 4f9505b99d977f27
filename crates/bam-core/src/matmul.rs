use std::fmt;

use log::{debug, trace};

use crate::backend::{MatmulKernel, Strategy};
use crate::error::{KernelError, Result};
use crate::int::SInt;
use crate::kernel::{FusedMultiply, TransposeThenMultiply};
use crate::matrix::FixedMatrix;
use crate::mode::TransposeMode;
use crate::width::WidthPolicy;

/// Which multiply operand a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    Left,
    Right,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Left => write!(f, "A"),
            Operand::Right => write!(f, "B"),
        }
    }
}

/// Verify that `IW`/`RW` are wide enough for an `N × N` multiply with
/// elements bounded by `bound`, returning the derived policy.
///
/// # Errors
/// Returns [`KernelError::InsufficientWidth`] naming the first width that
/// falls short.
pub fn check_widths<const N: usize, const IW: u32, const RW: u32>(
    bound: u64,
) -> Result<WidthPolicy> {
    let policy = WidthPolicy::new(N, bound);
    let checks = [
        ("input", IW, policy.input_width),
        ("result", RW, policy.result_width),
    ];
    for (role, width, required) in checks {
        if width < required {
            return Err(KernelError::InsufficientWidth {
                role,
                width,
                required,
                dim: N,
                bound,
            });
        }
    }
    Ok(policy)
}

/// Fail if any element of `m` lies outside `[-bound, bound]`.
///
/// # Errors
/// Returns [`KernelError::BoundExceeded`] for the first offending element in
/// row-major order.
pub fn check_operand<const N: usize, const W: u32>(
    operand: Operand,
    m: &FixedMatrix<SInt<W>, N>,
    bound: u64,
) -> Result<()> {
    match m.find_beyond(bound) {
        Some((row, col, value)) => Err(KernelError::BoundExceeded {
            operand,
            row,
            col,
            value,
            bound,
        }),
        None => Ok(()),
    }
}

/// Bound-checked kernel entry point.
///
/// Holds the numeric bound the caller promises to respect and the strategy
/// used to compute products. Each call validates its operands first and
/// fails fast on the first violation.
#[derive(Debug, Clone, Copy)]
pub struct Matmul<const N: usize, const IW: u32, const RW: u32> {
    policy: WidthPolicy,
    strategy: Strategy,
}

impl<const N: usize, const IW: u32, const RW: u32> Matmul<N, IW, RW> {
    /// # Errors
    /// Returns [`KernelError::InsufficientWidth`] if the type widths cannot
    /// carry `bound`.
    pub fn new(bound: u64, strategy: Strategy) -> Result<Self> {
        let policy = check_widths::<N, IW, RW>(bound)?;
        debug!(
            "matmul N={} bound={} widths in={}/{} out={}/{} strategy={}",
            N, bound, IW, policy.input_width, RW, policy.result_width, strategy
        );
        Ok(Matmul { policy, strategy })
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Compute `op(a) × op(b)` for the given transpose mode.
    ///
    /// # Errors
    /// Returns [`KernelError::BoundExceeded`] if any operand element exceeds
    /// the configured bound; nothing is computed in that case.
    pub fn multiply(
        &self,
        a: &FixedMatrix<SInt<IW>, N>,
        b: &FixedMatrix<SInt<IW>, N>,
        mode: TransposeMode,
    ) -> Result<FixedMatrix<SInt<RW>, N>> {
        check_operand(Operand::Left, a, self.policy.bound)?;
        check_operand(Operand::Right, b, self.policy.bound)?;
        trace!("multiply mode={} strategy={}", mode, self.strategy);
        let c = match self.strategy {
            Strategy::TransposeThenMultiply => {
                MatmulKernel::<N, IW, RW>::multiply(&TransposeThenMultiply, a, b, mode)
            }
            Strategy::Fused => MatmulKernel::<N, IW, RW>::multiply(&FusedMultiply, a, b, mode),
        };
        Ok(c)
    }

    /// Like [`Matmul::multiply`], with the mode given as a raw 2-bit selector.
    ///
    /// # Errors
    /// Returns [`KernelError::InvalidMode`] for selectors above 3, before
    /// looking at the operands.
    pub fn multiply_raw(
        &self,
        a: &FixedMatrix<SInt<IW>, N>,
        b: &FixedMatrix<SInt<IW>, N>,
        selector: u8,
    ) -> Result<FixedMatrix<SInt<RW>, N>> {
        let mode = TransposeMode::from_selector(selector)?;
        self.multiply(a, b, mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::reference_multiply;

    type M = Matmul<3, 5, 10>;
    type Op = FixedMatrix<SInt<5>, 3>;

    #[test]
    fn test_check_widths() {
        // N=3, bound=10: input needs 5 bits, result needs min_signed_width(300) = 10.
        let policy = check_widths::<3, 5, 10>(10).unwrap();
        assert_eq!(policy.input_width, 5);
        assert_eq!(policy.result_width, 10);

        assert_eq!(
            check_widths::<3, 5, 9>(10),
            Err(KernelError::InsufficientWidth {
                role: "result",
                width: 9,
                required: 10,
                dim: 3,
                bound: 10,
            })
        );
        assert!(matches!(
            check_widths::<3, 4, 10>(10),
            Err(KernelError::InsufficientWidth { role: "input", .. })
        ));
    }

    #[test]
    fn test_new_rejects_large_bound() {
        assert!(M::new(10, Strategy::Fused).is_ok());
        assert!(M::new(16, Strategy::Fused).is_err());
    }

    #[test]
    fn test_new_rejects_bound_past_u128_product() {
        // dim * bound^2 does not fit in u128; the width check must still fail cleanly.
        assert!(matches!(
            Matmul::<8, 7, 15>::new(u64::MAX, Strategy::Fused),
            Err(KernelError::InsufficientWidth { role: "input", .. })
        ));
        assert!(matches!(
            check_widths::<8, 64, 64>(u64::MAX),
            Err(KernelError::InsufficientWidth { role: "input", required: 65, .. })
        ));
    }

    #[test]
    fn test_bound_exceeded_reports_location() {
        // 12 fits in 5 bits but exceeds bound 10.
        let mm = M::new(10, Strategy::TransposeThenMultiply).unwrap();
        let ok = Op::from_grid(&[[10, -10, 0], [1, 2, 3], [4, 5, 6]]).unwrap();
        let bad = Op::from_grid(&[[0, 0, 0], [0, 0, -12], [0, 0, 0]]).unwrap();

        let err = mm.multiply(&ok, &bad, TransposeMode::None).unwrap_err();
        assert_eq!(
            err,
            KernelError::BoundExceeded {
                operand: Operand::Right,
                row: 1,
                col: 2,
                value: -12,
                bound: 10,
            }
        );
        assert!(mm.multiply(&bad, &ok, TransposeMode::None).is_err());
        assert!(mm.multiply(&ok, &ok, TransposeMode::None).is_ok());
    }

    #[test]
    fn test_multiply_raw_rejects_invalid_selector() {
        let mm = M::new(10, Strategy::Fused).unwrap();
        let z = Op::new();
        assert_eq!(mm.multiply_raw(&z, &z, 4), Err(KernelError::InvalidMode(4)));
        assert!(mm.multiply_raw(&z, &z, 3).is_ok());
    }

    #[test]
    fn test_strategies_agree_with_reference() {
        let a = [[10, -3, 7], [0, -10, 2], [5, 5, -1]];
        let b = [[-2, 9, 4], [8, -7, 10], [-10, 1, 3]];
        let fa = Op::from_grid(&a).unwrap();
        let fb = Op::from_grid(&b).unwrap();
        for strategy in Strategy::ALL {
            let mm = M::new(10, strategy).unwrap();
            assert_eq!(mm.strategy(), strategy);
            for mode in TransposeMode::ALL {
                let c = mm.multiply(&fa, &fb, mode).unwrap();
                assert_eq!(c.to_grid(), reference_multiply(&a, &b, mode), "{strategy} {mode}");
            }
        }
    }
}
