use crate::mode::TransposeMode;

/// A native-integer N×N grid, row-major.
pub type Grid<const N: usize> = [[i64; N]; N];

/// Full-precision reference multiply: the ground truth for every kernel.
///
/// - `None`:           `C[i][j] = Σ_k A[i][k] * B[k][j]`
/// - `TransposeLeft`:  `C[i][j] = Σ_k A[k][i] * B[k][j]`
/// - `TransposeRight`: `C[i][j] = Σ_k A[i][k] * B[j][k]`
/// - `TransposeBoth`:  `C[i][j] = Σ_k A[k][i] * B[j][k]`
///
/// Arithmetic is plain `i64` with no width restriction beyond that.
pub fn reference_multiply<const N: usize>(
    a: &Grid<N>,
    b: &Grid<N>,
    mode: TransposeMode,
) -> Grid<N> {
    let lhs = |i: usize, k: usize| {
        if mode.transposes_left() {
            a[k][i]
        } else {
            a[i][k]
        }
    };
    let rhs = |k: usize, j: usize| {
        if mode.transposes_right() {
            b[j][k]
        } else {
            b[k][j]
        }
    };

    let mut c = [[0i64; N]; N];
    for (i, row) in c.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = (0..N).map(|k| lhs(i, k) * rhs(k, j)).sum();
        }
    }
    c
}
