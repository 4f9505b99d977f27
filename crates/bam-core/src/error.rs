use thiserror::Error;

use crate::matmul::Operand;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    #[error("operand {operand} element ({row}, {col}) = {value} exceeds numeric bound {bound}")]
    BoundExceeded {
        operand: Operand,
        row: usize,
        col: usize,
        value: i64,
        bound: u64,
    },
    #[error("invalid transpose selector {0}: expected 0..=3")]
    InvalidMode(u8),
    #[error("value {value} does not fit in a {width}-bit signed integer")]
    OutOfWidth { value: i64, width: u32 },
    #[error("{role} width {width} is too narrow for N={dim}, bound={bound}: need {required} bits")]
    InsufficientWidth {
        role: &'static str,
        width: u32,
        required: u32,
        dim: usize,
        bound: u64,
    },
}

pub type Result<T> = std::result::Result<T, KernelError>;
