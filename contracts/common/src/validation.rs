//! Validation Helpers
//!
//! Reusable guards for pool operations.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use suid_common::validation::{check, require_min_unit, supply_matches_reserve};
//!
//! check!(amount > 0, SuidError::Underflow);
//! require_min_unit(amount)?;
//! supply_matches_reserve(supply, reserve)?;
//! ```

use crate::constants::pool::MIN_UNIT;
use crate::errors::{SuidError, SuidResult};

// ============ Validation Macro ============

/// Check a condition and return an error if it fails.
///
/// ```rust,ignore
/// check!(
///     amount <= reserve,
///     SuidError::InsufficientReserve { available: reserve, requested: amount }
/// );
/// ```
#[macro_export]
macro_rules! check {
    ($condition:expr, $error:expr) => {
        if !($condition) {
            return Err($error);
        }
    };
}

pub use check;

// ============ Amount Guards ============

/// Reject dust: amounts below one whole unit fail with `AmountTooLow`.
/// The boundary is inclusive, `MIN_UNIT` itself passes.
pub fn require_min_unit(amount: u64) -> SuidResult<()> {
    check!(
        amount >= MIN_UNIT,
        SuidError::AmountTooLow {
            amount,
            minimum: MIN_UNIT,
        }
    );
    Ok(())
}

/// Require the reserve to cover a withdrawal.
pub fn require_sufficient_reserve(reserve: u64, requested: u64) -> SuidResult<()> {
    check!(
        requested <= reserve,
        SuidError::InsufficientReserve {
            available: reserve,
            requested,
        }
    );
    Ok(())
}

/// Require a balance to cover a split.
pub fn require_sufficient_balance(available: u64, requested: u64) -> SuidResult<()> {
    check!(
        requested <= available,
        SuidError::InsufficientBalance {
            available,
            requested,
        }
    );
    Ok(())
}

// ============ Conservation ============

/// The pool's conservation law: receipt supply equals reserve.
pub fn supply_matches_reserve(supply: u64, reserve: u64) -> SuidResult<()> {
    check!(
        supply == reserve,
        SuidError::ConservationViolated { supply, reserve }
    );
    Ok(())
}
