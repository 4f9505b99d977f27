use std::fmt;

use crate::error::{KernelError, Result};

/// Selects which operand(s) are logically transposed before multiplying.
///
/// The discriminants are the 2-bit selector values accepted by
/// [`TransposeMode::from_selector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransposeMode {
    /// `C = A × B`
    None = 0,
    /// `C = Aᵀ × B`
    TransposeLeft = 1,
    /// `C = A × Bᵀ`
    TransposeRight = 2,
    /// `C = Aᵀ × Bᵀ`
    TransposeBoth = 3,
}

impl TransposeMode {
    /// Every mode, in selector order.
    pub const ALL: [TransposeMode; 4] = [
        TransposeMode::None,
        TransposeMode::TransposeLeft,
        TransposeMode::TransposeRight,
        TransposeMode::TransposeBoth,
    ];

    /// Decode a raw selector.
    ///
    /// # Errors
    /// Returns [`KernelError::InvalidMode`] for any value above 3.
    pub fn from_selector(selector: u8) -> Result<TransposeMode> {
        match selector {
            0 => Ok(TransposeMode::None),
            1 => Ok(TransposeMode::TransposeLeft),
            2 => Ok(TransposeMode::TransposeRight),
            3 => Ok(TransposeMode::TransposeBoth),
            other => Err(KernelError::InvalidMode(other)),
        }
    }

    pub fn selector(self) -> u8 {
        self as u8
    }

    pub fn transposes_left(self) -> bool {
        matches!(self, TransposeMode::TransposeLeft | TransposeMode::TransposeBoth)
    }

    pub fn transposes_right(self) -> bool {
        matches!(self, TransposeMode::TransposeRight | TransposeMode::TransposeBoth)
    }
}

impl TryFrom<u8> for TransposeMode {
    type Error = KernelError;

    fn try_from(selector: u8) -> Result<Self> {
        TransposeMode::from_selector(selector)
    }
}

impl fmt::Display for TransposeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransposeMode::None => write!(f, "none"),
            TransposeMode::TransposeLeft => write!(f, "transpose-left"),
            TransposeMode::TransposeRight => write!(f, "transpose-right"),
            TransposeMode::TransposeBoth => write!(f, "transpose-both"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_roundtrip() {
        for mode in TransposeMode::ALL {
            assert_eq!(TransposeMode::from_selector(mode.selector()).unwrap(), mode);
        }
    }

    #[test]
    fn test_invalid_selector() {
        assert_eq!(TransposeMode::from_selector(4), Err(KernelError::InvalidMode(4)));
        assert!(TransposeMode::try_from(255u8).is_err());
    }

    #[test]
    fn test_operand_flags() {
        let flags: Vec<(bool, bool)> = TransposeMode::ALL
            .iter()
            .map(|m| (m.transposes_left(), m.transposes_right()))
            .collect();
        assert_eq!(flags, vec![(false, false), (true, false), (false, true), (true, true)]);
        assert_eq!(TransposeMode::TransposeBoth.to_string(), "transpose-both");
    }
}
