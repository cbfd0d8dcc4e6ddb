//! Mathematical Utilities
//!
//! Checked arithmetic for the conservation counters. Nothing here
//! saturates: an out-of-range result is always an error.

use crate::constants::pool::{EXCHANGE_RATE_DEN, EXCHANGE_RATE_NUM};
use crate::errors::{SuidError, SuidResult};

/// Safe addition with overflow check
pub fn safe_add(a: u64, b: u64) -> SuidResult<u64> {
    a.checked_add(b).ok_or(SuidError::Overflow)
}

/// Safe subtraction with underflow check
pub fn safe_sub(a: u64, b: u64) -> SuidResult<u64> {
    a.checked_sub(b).ok_or(SuidError::Underflow)
}

/// Receipt units minted for a base-asset deposit
pub fn sui_to_suid(sui_amount: u64) -> SuidResult<u64> {
    convert(sui_amount, EXCHANGE_RATE_NUM, EXCHANGE_RATE_DEN)
}

/// Base units released for a receipt burn
pub fn suid_to_sui(suid_amount: u64) -> SuidResult<u64> {
    convert(suid_amount, EXCHANGE_RATE_DEN, EXCHANGE_RATE_NUM)
}

fn convert(amount: u64, num: u64, den: u64) -> SuidResult<u64> {
    if den == 0 {
        return Err(SuidError::Overflow);
    }
    let scaled = (amount as u128) * (num as u128) / (den as u128);
    u64::try_from(scaled).map_err(|_| SuidError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_add_overflow() {
        assert_eq!(safe_add(1, 2), Ok(3));
        assert_eq!(safe_add(u64::MAX, 1), Err(SuidError::Overflow));
    }

    #[test]
    fn test_safe_sub_underflow() {
        assert_eq!(safe_sub(5, 5), Ok(0));
        assert_eq!(safe_sub(0, 1), Err(SuidError::Underflow));
    }

    #[test]
    fn test_exchange_is_identity() {
        for amount in [0, 1, 999_999_999, 1_000_000_000, u64::MAX] {
            assert_eq!(sui_to_suid(amount), Ok(amount));
            assert_eq!(suid_to_sui(amount), Ok(amount));
        }
    }
}
