//! `bam-core` - Bit-accurate fixed-size integer matrix multiply.
//!
//! This crate provides:
//! - Width sizing for operands and accumulators (`width`)
//! - A signed integer type carrying a fixed number of bits (`SInt`)
//! - A fixed N×N matrix container with range-restricted indices (`FixedMatrix`)
//! - A full-precision reference multiply used as the correctness oracle
//! - Two interchangeable kernel strategies behind the `MatmulKernel` trait
//! - A bound-checked entry point (`Matmul`) and the shipped configuration

pub mod backend;
pub mod config;
pub mod error;
pub mod int;
pub mod kernel;
pub mod matmul;
pub mod matrix;
pub mod mode;
pub mod width;

// Re-export primary types at the crate root for convenience.
pub use backend::{MatmulKernel, Strategy};
pub use error::{KernelError, Result};
pub use int::SInt;
pub use kernel::{reference_multiply, FusedMultiply, Grid, TransposeThenMultiply};
pub use matmul::{check_operand, check_widths, Matmul, Operand};
pub use matrix::{FixedMatrix, MatIdx};
pub use mode::TransposeMode;
pub use width::WidthPolicy;
