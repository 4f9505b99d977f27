use std::fmt;

use crate::error::Result;
use crate::int::SInt;
use crate::kernel::Grid;
use crate::width;

/// A row or column index that can only hold values in `[0, N)`.
///
/// Out-of-range access is ruled out when the index is built, so
/// [`FixedMatrix`] accessors never check bounds themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MatIdx<const N: usize>(usize);

impl<const N: usize> MatIdx<N> {
    /// Unsigned bit width of the index, `ceil(log2(N))` (at least 1).
    pub const WIDTH: u32 = width::index_width(N);

    /// Returns `None` if `i >= N`.
    pub fn new(i: usize) -> Option<Self> {
        (i < N).then_some(MatIdx(i))
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// All indices `0..N` in order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..N).map(MatIdx)
    }

    /// Indices strictly greater than `self`.
    pub fn after(self) -> impl Iterator<Item = Self> {
        (self.0 + 1..N).map(MatIdx)
    }
}

/// A fixed N×N grid of elements stored row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedMatrix<T, const N: usize> {
    elements: [[T; N]; N],
}

impl<T: Copy + Default, const N: usize> FixedMatrix<T, N> {
    /// Create a matrix with every element set to `T::default()` (zero).
    pub fn new() -> Self {
        FixedMatrix {
            elements: [[T::default(); N]; N],
        }
    }
}

impl<T: Copy + Default, const N: usize> Default for FixedMatrix<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy, const N: usize> FixedMatrix<T, N> {
    /// Create a matrix from row-major values.
    pub fn from_rows(rows: [[T; N]; N]) -> Self {
        FixedMatrix { elements: rows }
    }

    pub fn get(&self, i: MatIdx<N>, j: MatIdx<N>) -> T {
        self.elements[i.0][j.0]
    }

    pub fn set(&mut self, i: MatIdx<N>, j: MatIdx<N>, val: T) {
        self.elements[i.0][j.0] = val;
    }

    /// Transpose in place by swapping `(i, j)` with `(j, i)` for every `i < j`.
    ///
    /// Each off-diagonal pair is visited exactly once; the diagonal is untouched.
    pub fn transpose_in_place(&mut self) {
        for i in MatIdx::<N>::all() {
            for j in i.after() {
                let tmp = self.get(i, j);
                self.set(i, j, self.get(j, i));
                self.set(j, i, tmp);
            }
        }
    }

    /// Returns a transposed copy, leaving `self` unchanged.
    pub fn transposed(&self) -> Self {
        let mut t = *self;
        t.transpose_in_place();
        t
    }
}

impl<const W: u32, const N: usize> FixedMatrix<SInt<W>, N> {
    /// Build a matrix from native integers, failing on the first value that
    /// does not fit in `W` bits.
    pub fn from_grid(grid: &Grid<N>) -> Result<Self> {
        let mut m = Self::new();
        for i in MatIdx::<N>::all() {
            for j in MatIdx::<N>::all() {
                m.set(i, j, SInt::new(grid[i.0][j.0])?);
            }
        }
        Ok(m)
    }

    /// Copy the elements out as native integers.
    pub fn to_grid(&self) -> Grid<N> {
        self.elements.map(|row| row.map(SInt::get))
    }

    /// The first element (in row-major order) whose magnitude exceeds `bound`,
    /// as `(row, col, value)`.
    pub fn find_beyond(&self, bound: u64) -> Option<(usize, usize, i64)> {
        self.elements.iter().enumerate().find_map(|(i, row)| {
            row.iter()
                .position(|v| v.get().unsigned_abs() > bound)
                .map(|j| (i, j, row[j].get()))
        })
    }

    /// Matrix product `self × other` with an `R`-bit accumulator.
    ///
    /// `result[i][j] = Σ_k self[i][k] * other[k][j]`. Every product and
    /// partial sum is kept at `R` bits; nothing is narrowed between additions.
    /// No transpose is applied here.
    pub fn multiply<const R: u32>(&self, other: &Self) -> FixedMatrix<SInt<R>, N> {
        const { assert!(R >= W, "result width must not be narrower than operand width") };
        let mut result = FixedMatrix::<SInt<R>, N>::new();
        for i in MatIdx::<N>::all() {
            for j in MatIdx::<N>::all() {
                let mut acc = SInt::<R>::ZERO;
                for k in MatIdx::<N>::all() {
                    acc = acc.wrapping_add(self.get(i, k).mul_into(other.get(k, j)));
                }
                result.set(i, j, acc);
            }
        }
        result
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for FixedMatrix<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.elements.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", v)?;
            }
        }
        Ok(())
    }
}
