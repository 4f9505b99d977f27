use std::fmt;

use bam_core::Grid;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The kind of input a scenario exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Both operands all zero.
    Zero,
    /// `A[i][j] = i + j`, `B[i][j] = i - j`.
    Pattern,
    /// Uniform values in `[-bound, bound]`.
    Random,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Zero => write!(f, "zero"),
            Category::Pattern => write!(f, "pattern"),
            Category::Random => write!(f, "random"),
        }
    }
}

/// A matched pair of operands fed to every kernel and every mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario<const N: usize> {
    pub name: String,
    pub category: Category,
    pub a: Grid<N>,
    pub b: Grid<N>,
}

impl<const N: usize> Scenario<N> {
    pub fn zero() -> Self {
        Scenario {
            name: "zero".to_string(),
            category: Category::Zero,
            a: [[0; N]; N],
            b: [[0; N]; N],
        }
    }

    /// The fixed regression pattern. Its elements reach `2 * (N - 1)`, so the
    /// bound must be at least that for the kernels to accept it.
    pub fn pattern() -> Self {
        Scenario {
            name: "pattern".to_string(),
            category: Category::Pattern,
            a: std::array::from_fn(|i| std::array::from_fn(|j| (i + j) as i64)),
            b: std::array::from_fn(|i| std::array::from_fn(|j| i as i64 - j as i64)),
        }
    }

    /// Independent uniform draws from `[-bound, bound]` for every element.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bound: u64, trial: usize) -> Self {
        let limit = bound as i64;
        let mut draw = || -> Grid<N> {
            std::array::from_fn(|_| std::array::from_fn(|_| rng.gen_range(-limit..=limit)))
        };
        let a = draw();
        let b = draw();
        Scenario {
            name: format!("random-{}", trial),
            category: Category::Random,
            a,
            b,
        }
    }
}

/// The full scenario list: zero, pattern, then `trials` random pairs drawn
/// from a `StdRng` seeded with `seed`.
pub fn suite<const N: usize>(bound: u64, trials: usize, seed: u64) -> Vec<Scenario<N>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut scenarios = Vec::with_capacity(trials + 2);
    scenarios.push(Scenario::zero());
    scenarios.push(Scenario::pattern());
    scenarios.extend((0..trials).map(|t| Scenario::random(&mut rng, bound, t)));
    scenarios
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        let s = Scenario::<4>::zero();
        assert_eq!(s.a, [[0; 4]; 4]);
        assert_eq!(s.b, [[0; 4]; 4]);
        assert_eq!(s.category, Category::Zero);
    }

    #[test]
    fn test_pattern() {
        let s = Scenario::<8>::pattern();
        assert_eq!(s.a[0][0], 0);
        assert_eq!(s.a[7][7], 14);
        assert_eq!(s.a[2][5], 7);
        assert_eq!(s.b[2][5], -3);
        assert_eq!(s.b[5][2], 3);
    }

    #[test]
    fn test_random_within_bound() {
        let mut rng = StdRng::seed_from_u64(7);
        for t in 0..50 {
            let s = Scenario::<6>::random(&mut rng, 5, t);
            for row in s.a.iter().chain(s.b.iter()) {
                assert!(row.iter().all(|v| (-5..=5).contains(v)));
            }
        }
    }

    #[test]
    fn test_random_reaches_both_extremes() {
        let mut rng = StdRng::seed_from_u64(11);
        let s = Scenario::<16>::random(&mut rng, 2, 0);
        let values: Vec<i64> = s.a.iter().flatten().copied().collect();
        assert!(values.contains(&2));
        assert!(values.contains(&-2));
    }

    #[test]
    fn test_suite_is_reproducible() {
        let first = suite::<4>(9, 10, 42);
        let second = suite::<4>(9, 10, 42);
        assert_eq!(first, second);
        assert_eq!(first.len(), 12);
        assert_eq!(first[0].category, Category::Zero);
        assert_eq!(first[1].category, Category::Pattern);
        assert!(first[2..].iter().all(|s| s.category == Category::Random));
        assert_ne!(suite::<4>(9, 10, 43)[2], first[2]);
    }
}
