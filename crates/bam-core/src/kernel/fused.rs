use crate::backend::MatmulKernel;
use crate::int::SInt;
use crate::matrix::{FixedMatrix, MatIdx};
use crate::mode::TransposeMode;

/// Single triple loop that picks the operand index order on every
/// `(i, j, k)` step instead of materializing a transposed copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct FusedMultiply;

impl<const N: usize, const IW: u32, const RW: u32> MatmulKernel<N, IW, RW> for FusedMultiply {
    fn name(&self) -> &str {
        "fused"
    }

    fn multiply(
        &self,
        a: &FixedMatrix<SInt<IW>, N>,
        b: &FixedMatrix<SInt<IW>, N>,
        mode: TransposeMode,
    ) -> FixedMatrix<SInt<RW>, N> {
        const { assert!(RW >= IW, "result width must not be narrower than operand width") };
        let mut c = FixedMatrix::<SInt<RW>, N>::new();
        for i in MatIdx::<N>::all() {
            for j in MatIdx::<N>::all() {
                let mut acc = SInt::<RW>::ZERO;
                for k in MatIdx::<N>::all() {
                    let (x, y) = match mode {
                        TransposeMode::None => (a.get(i, k), b.get(k, j)),
                        TransposeMode::TransposeLeft => (a.get(k, i), b.get(k, j)),
                        TransposeMode::TransposeRight => (a.get(i, k), b.get(j, k)),
                        TransposeMode::TransposeBoth => (a.get(k, i), b.get(j, k)),
                    };
                    acc = acc.wrapping_add(x.mul_into(y));
                }
                c.set(i, j, acc);
            }
        }
        c
    }
}
