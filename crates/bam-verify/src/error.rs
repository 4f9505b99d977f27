use bam_core::KernelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("kernel error: {0}")]
    Kernel(#[from] KernelError),
    #[error("harness has no kernels to compare")]
    NoKernels,
}

pub type Result<T> = std::result::Result<T, VerifyError>;
