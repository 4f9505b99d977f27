use crate::backend::MatmulKernel;
use crate::int::SInt;
use crate::matrix::FixedMatrix;
use crate::mode::TransposeMode;

/// Copies the operands, transposes the ones `mode` selects, then runs the
/// plain [`FixedMatrix::multiply`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TransposeThenMultiply;

impl<const N: usize, const IW: u32, const RW: u32> MatmulKernel<N, IW, RW> for TransposeThenMultiply {
    fn name(&self) -> &str {
        "transpose-then-multiply"
    }

    fn multiply(
        &self,
        a: &FixedMatrix<SInt<IW>, N>,
        b: &FixedMatrix<SInt<IW>, N>,
        mode: TransposeMode,
    ) -> FixedMatrix<SInt<RW>, N> {
        let mut left = *a;
        let mut right = *b;
        if mode.transposes_left() {
            left.transpose_in_place();
        }
        if mode.transposes_right() {
            right.transpose_in_place();
        }
        left.multiply(&right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operands_untouched() {
        let a = FixedMatrix::<SInt<8>, 2>::from_grid(&[[1, 2], [3, 4]]).unwrap();
        let b = FixedMatrix::<SInt<8>, 2>::from_grid(&[[5, 6], [7, 8]]).unwrap();
        let c: FixedMatrix<SInt<16>, 2> =
            TransposeThenMultiply.multiply(&a, &b, TransposeMode::TransposeBoth);
        assert_eq!(c.to_grid(), [[23, 31], [34, 46]]);
        assert_eq!(a.to_grid(), [[1, 2], [3, 4]]);
        assert_eq!(b.to_grid(), [[5, 6], [7, 8]]);
    }
}
