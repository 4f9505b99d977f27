//! Bit-width sizing for operands, accumulators and indices.
//!
//! Every width here is a pure function of the matrix dimension and the
//! numeric bound, so the functions are `const` and can size types at
//! compile time (see [`crate::config`]).

/// `ceil(log2(n))`, with `log2_ceil(0) == log2_ceil(1) == 0`.
pub const fn log2_ceil(n: u128) -> u32 {
    if n <= 1 {
        0
    } else {
        u128::BITS - (n - 1).leading_zeros()
    }
}

/// Minimal two's-complement width able to hold every value in
/// `[-magnitude, magnitude]`.
///
/// This is `ceil(log2(magnitude + 1)) + 1`: the bits needed for `+magnitude`
/// plus a sign bit.
pub const fn min_signed_width(magnitude: u128) -> u32 {
    log2_ceil(magnitude.saturating_add(1)) + 1
}

/// Width of an operand element bounded by `bound` in absolute value.
pub const fn input_width(bound: u64) -> u32 {
    min_signed_width(bound as u128)
}

/// Largest magnitude a dot product of `dim` bounded terms can reach: `dim * bound^2`.
///
/// Saturates at `u128::MAX`, which no supported width can hold.
pub const fn result_magnitude(dim: usize, bound: u64) -> u128 {
    let b = bound as u128;
    match (dim as u128).checked_mul(b) {
        Some(db) => match db.checked_mul(b) {
            Some(m) => m,
            None => u128::MAX,
        },
        None => u128::MAX,
    }
}

/// Width of an accumulator that can hold any sum of `dim` products of
/// `bound`-limited operands without overflow.
pub const fn result_width(dim: usize, bound: u64) -> u32 {
    min_signed_width(result_magnitude(dim, bound))
}

/// The conventional accumulator sizing `ceil(log2(dim)) + 2 * input_width`.
///
/// Always at least [`result_width`], usually a few bits wider.
pub const fn headroom_width(dim: usize, bound: u64) -> u32 {
    log2_ceil(dim as u128) + 2 * input_width(bound)
}

/// Bits needed for an unsigned index into `[0, dim)`; never less than one.
pub const fn index_width(dim: usize) -> u32 {
    let w = log2_ceil(dim as u128);
    if w == 0 {
        1
    } else {
        w
    }
}

/// Smallest value representable in `width` signed bits (`1..=64`).
pub const fn signed_min(width: u32) -> i64 {
    if width >= 64 {
        i64::MIN
    } else {
        -(1i64 << (width - 1))
    }
}

/// Largest value representable in `width` signed bits (`1..=64`).
pub const fn signed_max(width: u32) -> i64 {
    if width >= 64 {
        i64::MAX
    } else {
        (1i64 << (width - 1)) - 1
    }
}

/// The widths derived for one `(dim, bound)` configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidthPolicy {
    /// Matrix side length.
    pub dim: usize,
    /// Maximum absolute value of any operand element.
    pub bound: u64,
    /// Signed width of operand elements.
    pub input_width: u32,
    /// Signed width of accumulated results.
    pub result_width: u32,
    /// Unsigned width of a row or column index.
    pub index_width: u32,
}

impl WidthPolicy {
    /// Derive all widths for a `dim × dim` multiply with elements in `[-bound, bound]`.
    pub const fn new(dim: usize, bound: u64) -> Self {
        WidthPolicy {
            dim,
            bound,
            input_width: input_width(bound),
            result_width: result_width(dim, bound),
            index_width: index_width(dim),
        }
    }

    /// Returns true if `value` lies within `[-bound, bound]`.
    pub fn admits(&self, value: i64) -> bool {
        value.unsigned_abs() <= self.bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fits(width: u32, value: i128) -> bool {
        value >= signed_min(width) as i128 && value <= signed_max(width) as i128
    }

    #[test]
    fn test_log2_ceil() {
        assert_eq!(log2_ceil(0), 0);
        assert_eq!(log2_ceil(1), 0);
        assert_eq!(log2_ceil(2), 1);
        assert_eq!(log2_ceil(3), 2);
        assert_eq!(log2_ceil(8), 3);
        assert_eq!(log2_ceil(9), 4);
        assert_eq!(log2_ceil(1 << 40), 40);
    }

    #[test]
    fn test_input_width_values() {
        assert_eq!(input_width(0), 1);
        assert_eq!(input_width(1), 2);
        assert_eq!(input_width(7), 4);
        assert_eq!(input_width(8), 5);
        assert_eq!(input_width(31), 6);
        assert_eq!(input_width(32), 7);
    }

    #[test]
    fn test_input_width_matches_log_formula_off_powers_of_two() {
        // ceil(log2(B)) + 1 only falls short when B is a power of two.
        for bound in 2u64..2000 {
            let formula = log2_ceil(bound as u128) + 1;
            if bound.is_power_of_two() {
                assert_eq!(input_width(bound), formula + 1, "bound {bound}");
            } else {
                assert_eq!(input_width(bound), formula, "bound {bound}");
            }
        }
    }

    #[test]
    fn test_shipped_configuration() {
        let p = WidthPolicy::new(8, 32);
        assert_eq!(p.input_width, 7);
        assert_eq!(p.result_width, 15);
        assert_eq!(p.index_width, 3);
    }

    #[test]
    fn test_widths_are_tight() {
        for dim in 1..=32usize {
            for bound in 1..=300u64 {
                let iw = input_width(bound);
                assert!(fits(iw, bound as i128) && fits(iw, -(bound as i128)));
                assert!(!fits(iw - 1, bound as i128), "input width not minimal for {bound}");

                let worst = result_magnitude(dim, bound) as i128;
                let rw = result_width(dim, bound);
                assert!(fits(rw, worst) && fits(rw, -worst));
                assert!(
                    !fits(rw - 1, worst),
                    "result width not minimal for dim={dim} bound={bound}"
                );
            }
        }
    }

    #[test]
    fn test_widths_monotonic() {
        for dim in 1..=64usize {
            for bound in 0..=256u64 {
                let rw = result_width(dim, bound);
                assert!(result_width(dim + 1, bound) >= rw);
                assert!(result_width(dim, bound + 1) >= rw);
                assert!(input_width(bound + 1) >= input_width(bound));
            }
        }
    }

    #[test]
    fn test_result_magnitude_saturates() {
        assert_eq!(result_magnitude(2, u64::MAX), u128::MAX);
        assert_eq!(result_width(8, u64::MAX), 129);
        assert_eq!(WidthPolicy::new(usize::MAX, u64::MAX).result_width, 129);
        // (2^64 - 1)^2 still fits, one term only.
        assert_eq!(result_magnitude(1, u64::MAX), (u64::MAX as u128) * (u64::MAX as u128));
    }

    #[test]
    fn test_headroom_is_safe() {
        for dim in 1..=64usize {
            for bound in 0..=256u64 {
                assert!(headroom_width(dim, bound) >= result_width(dim, bound));
            }
        }
    }

    #[test]
    fn test_index_width() {
        assert_eq!(index_width(1), 1);
        assert_eq!(index_width(2), 1);
        assert_eq!(index_width(8), 3);
        assert_eq!(index_width(9), 4);
    }

    #[test]
    fn test_signed_range() {
        assert_eq!((signed_min(1), signed_max(1)), (-1, 0));
        assert_eq!((signed_min(4), signed_max(4)), (-8, 7));
        assert_eq!((signed_min(64), signed_max(64)), (i64::MIN, i64::MAX));
    }

    #[test]
    fn test_admits() {
        let p = WidthPolicy::new(4, 10);
        assert!(p.admits(10));
        assert!(p.admits(-10));
        assert!(!p.admits(11));
        assert!(!p.admits(i64::MIN));
    }
}
