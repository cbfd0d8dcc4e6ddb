//! Error Types for the SUID Pool
//!
//! Every failure is terminal for the operation in progress: nothing here is
//! retried internally and a rejected operation leaves the pool untouched.

use core::fmt;

/// Result type alias for pool operations
pub type SuidResult<T> = Result<T, SuidError>;

/// Main error enum for all pool and fungible-asset errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuidError {
    // ============ Amount Errors ============
    /// Deposit or withdrawal below the minimum unit
    AmountTooLow { amount: u64, minimum: u64 },

    /// Coin or balance does not hold enough to split off the request
    InsufficientBalance { available: u64, requested: u64 },

    // ============ Pool Errors ============
    /// Withdrawal larger than the pool reserve
    InsufficientReserve { available: u64, requested: u64 },

    /// Receipt supply and reserve disagree
    ConservationViolated { supply: u64, reserve: u64 },

    /// The pool has already been created in this process
    PoolAlreadyInitialized,

    // ============ Encoding Errors ============
    /// Borsh serialization failed
    Encoding,

    // ============ Math Errors ============
    /// Arithmetic overflow occurred
    Overflow,

    /// Arithmetic underflow occurred
    Underflow,
}

impl SuidError {
    /// Returns a human-readable error code for logging/debugging
    pub fn code(&self) -> &'static str {
        match self {
            Self::AmountTooLow { .. } => "E010_AMOUNT_TOO_LOW",
            Self::InsufficientBalance { .. } => "E011_INSUFFICIENT_BALANCE",
            Self::InsufficientReserve { .. } => "E050_INSUFFICIENT_RESERVE",
            Self::ConservationViolated { .. } => "E051_CONSERVATION",
            Self::PoolAlreadyInitialized => "E052_POOL_ALREADY_INITIALIZED",
            Self::Encoding => "E090_ENCODING",
            Self::Overflow => "E080_OVERFLOW",
            Self::Underflow => "E081_UNDERFLOW",
        }
    }

    /// Returns true if this error is recoverable (user can fix it)
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::AmountTooLow { .. } => true,        // Increase amount
            Self::InsufficientBalance { .. } => true, // Get more funds
            _ => false,
        }
    }
}

impl fmt::Display for SuidError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AmountTooLow { amount, minimum } => {
                write!(f, "{}: amount {} below minimum {}", self.code(), amount, minimum)
            }
            Self::InsufficientBalance { available, requested } => write!(
                f,
                "{}: requested {} but only {} available",
                self.code(),
                requested,
                available
            ),
            Self::InsufficientReserve { available, requested } => write!(
                f,
                "{}: requested {} but reserve holds {}",
                self.code(),
                requested,
                available
            ),
            Self::ConservationViolated { supply, reserve } => write!(
                f,
                "{}: supply {} != reserve {}",
                self.code(),
                supply,
                reserve
            ),
            Self::PoolAlreadyInitialized | Self::Encoding | Self::Overflow | Self::Underflow => {
                f.write_str(self.code())
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SuidError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_error_codes_unique() {
        let errors = [
            SuidError::AmountTooLow { amount: 1, minimum: 2 },
            SuidError::InsufficientBalance { available: 1, requested: 2 },
            SuidError::InsufficientReserve { available: 1, requested: 2 },
            SuidError::ConservationViolated { supply: 1, reserve: 2 },
            SuidError::PoolAlreadyInitialized,
            SuidError::Encoding,
            SuidError::Overflow,
            SuidError::Underflow,
        ];

        let codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        let unique: BTreeSet<_> = codes.iter().collect();
        assert_eq!(codes.len(), unique.len(), "Error codes must be unique");
    }

    #[test]
    fn test_recoverable() {
        assert!(SuidError::AmountTooLow { amount: 1, minimum: 2 }.is_recoverable());
        assert!(!SuidError::Overflow.is_recoverable());
        assert!(!SuidError::InsufficientReserve { available: 0, requested: 1 }.is_recoverable());
        assert!(!SuidError::PoolAlreadyInitialized.is_recoverable());
    }

    #[test]
    fn test_display_includes_code() {
        let err = SuidError::AmountTooLow { amount: 999, minimum: 1000 };
        let text = err.to_string();
        assert!(text.starts_with("E010_AMOUNT_TOO_LOW"));
        assert!(text.contains("999"));
    }
}
