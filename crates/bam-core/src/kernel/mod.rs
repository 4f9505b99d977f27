//! Kernel realizations of the four-mode multiply.
//!
//! `reference` is the native-integer oracle; `transposed` and `fused` are the
//! two bit-width-constrained strategies behind [`crate::MatmulKernel`].

pub mod fused;
pub mod reference;
pub mod transposed;

pub use fused::FusedMultiply;
pub use reference::{reference_multiply, Grid};
pub use transposed::TransposeThenMultiply;
