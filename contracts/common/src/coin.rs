//! Fungible Asset Primitives
//!
//! Linear balances and coins for the two assets the pool handles, plus the
//! supply authority that is the only way to create or destroy units.
//!
//! ## Key Properties
//!
//! - **Linear**: `Balance` and `Coin` are neither `Clone` nor `Copy`; units
//!   move, they are never duplicated
//! - **Witness-gated supply**: a `Supply<T>` can only be built from a value of
//!   the asset marker `T`, so whoever controls `T`'s constructor controls
//!   minting
//! - **Checked**: joins and supply changes fail on overflow instead of
//!   wrapping or saturating

use core::marker::PhantomData;

use crate::constants::sui;
use crate::errors::SuidResult;
use crate::math::{safe_add, safe_sub};
use crate::validation::require_sufficient_balance;

// ============================================================================
// Asset Markers
// ============================================================================

/// Static metadata every fungible asset carries
pub trait Asset {
    /// Asset name
    const NAME: &'static str;
    /// Ticker symbol
    const SYMBOL: &'static str;
    /// Decimal places
    const DECIMALS: u8;
}

/// Base asset marker. Its supply lives outside this workspace, so the
/// constructor is private and no `Supply<Sui>` can ever be built here.
#[derive(Debug, PartialEq, Eq)]
pub struct Sui {
    _private: (),
}

impl Asset for Sui {
    const NAME: &'static str = sui::NAME;
    const SYMBOL: &'static str = sui::SYMBOL;
    const DECIMALS: u8 = sui::DECIMALS;
}

// ============================================================================
// Balance
// ============================================================================

/// A quantity of asset `T` held by some owner
#[derive(Debug, PartialEq, Eq)]
pub struct Balance<T: Asset> {
    value: u64,
    _asset: PhantomData<T>,
}

impl<T: Asset> Balance<T> {
    fn new(value: u64) -> Self {
        Self {
            value,
            _asset: PhantomData,
        }
    }

    /// Empty balance
    pub fn zero() -> Self {
        Self::new(0)
    }

    /// Units held
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Absorb `other` into this balance, returning the new value
    pub fn join(&mut self, other: Balance<T>) -> SuidResult<u64> {
        self.value = safe_add(self.value, other.value)?;
        Ok(self.value)
    }

    /// Split `amount` off into a new balance
    pub fn split(&mut self, amount: u64) -> SuidResult<Balance<T>> {
        require_sufficient_balance(self.value, amount)?;
        self.value -= amount;
        Ok(Self::new(amount))
    }
}

// ============================================================================
// Coin
// ============================================================================

/// An owned coin of asset `T`. Ownership transfer is a Rust move.
#[derive(Debug, PartialEq, Eq)]
pub struct Coin<T: Asset> {
    balance: Balance<T>,
}

impl<T: Asset> Coin<T> {
    /// Wrap a balance into a coin
    pub fn from_balance(balance: Balance<T>) -> Self {
        Self { balance }
    }

    /// Unwrap the coin into its balance
    pub fn into_balance(self) -> Balance<T> {
        self.balance
    }

    /// Coin with no value
    pub fn zero() -> Self {
        Self::from_balance(Balance::zero())
    }

    /// Units held
    pub fn value(&self) -> u64 {
        self.balance.value()
    }

    /// Split `amount` off into a new coin
    pub fn split(&mut self, amount: u64) -> SuidResult<Coin<T>> {
        self.balance.split(amount).map(Self::from_balance)
    }

    /// Merge another coin into this one
    pub fn join(&mut self, other: Coin<T>) -> SuidResult<u64> {
        self.balance.join(other.balance)
    }

    /// Mutable access to the inner balance
    pub fn balance_mut(&mut self) -> &mut Balance<T> {
        &mut self.balance
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl Coin<Sui> {
    /// Forge base-asset units. Test builds only.
    pub fn mint_for_testing(value: u64) -> Self {
        Self::from_balance(Balance::new(value))
    }
}

// ============================================================================
// Supply
// ============================================================================

/// Exclusive mint/burn authority for asset `T`
#[derive(Debug)]
pub struct Supply<T: Asset> {
    total_issued: u64,
    _asset: PhantomData<T>,
}

impl<T: Asset> Supply<T> {
    /// Create the authority. Requires a witness value of `T`, which only the
    /// module defining `T` can construct.
    pub fn new(_witness: T) -> Self {
        Self {
            total_issued: 0,
            _asset: PhantomData,
        }
    }

    /// Units currently outstanding
    pub fn total_issued(&self) -> u64 {
        self.total_issued
    }

    /// Mint `amount` new units
    pub fn increase_supply(&mut self, amount: u64) -> SuidResult<Balance<T>> {
        self.total_issued = safe_add(self.total_issued, amount)?;
        Ok(Balance::new(amount))
    }

    /// Burn a balance, returning the amount destroyed
    pub fn decrease_supply(&mut self, balance: Balance<T>) -> SuidResult<u64> {
        self.total_issued = safe_sub(self.total_issued, balance.value)?;
        Ok(balance.value)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SuidError;

    const ONE_SUI: u64 = 1_000_000_000;

    #[derive(Debug, PartialEq, Eq)]
    struct TestToken;

    impl Asset for TestToken {
        const NAME: &'static str = "Test";
        const SYMBOL: &'static str = "TST";
        const DECIMALS: u8 = 9;
    }

    #[test]
    fn test_split_and_join() {
        let mut coin = Coin::<Sui>::mint_for_testing(10 * ONE_SUI);
        let part = coin.split(3 * ONE_SUI).unwrap();

        assert_eq!(coin.value(), 7 * ONE_SUI);
        assert_eq!(part.value(), 3 * ONE_SUI);

        coin.join(part).unwrap();
        assert_eq!(coin.value(), 10 * ONE_SUI);
    }

    #[test]
    fn test_split_insufficient_leaves_coin_intact() {
        let mut coin = Coin::<Sui>::mint_for_testing(ONE_SUI);
        let result = coin.split(ONE_SUI + 1);

        assert!(matches!(result, Err(SuidError::InsufficientBalance { .. })));
        assert_eq!(coin.value(), ONE_SUI);
    }

    #[test]
    fn test_join_overflow() {
        let mut a = Coin::<Sui>::mint_for_testing(u64::MAX);
        let b = Coin::<Sui>::mint_for_testing(1);

        assert_eq!(a.join(b), Err(SuidError::Overflow));
        assert_eq!(a.value(), u64::MAX);
    }

    #[test]
    fn test_balance_round_trips_through_coin() {
        let mut balance = Coin::<Sui>::mint_for_testing(5).into_balance();
        let part = balance.split(2).unwrap();

        assert_eq!(Coin::from_balance(part).value(), 2);
        assert_eq!(balance.value(), 3);
    }

    #[test]
    fn test_supply_mint_and_burn() {
        let mut supply = Supply::new(TestToken);

        let minted = supply.increase_supply(10 * ONE_SUI).unwrap();
        assert_eq!(minted.value(), 10 * ONE_SUI);
        assert_eq!(supply.total_issued(), 10 * ONE_SUI);

        let burned = supply.decrease_supply(minted).unwrap();
        assert_eq!(burned, 10 * ONE_SUI);
        assert_eq!(supply.total_issued(), 0);
    }

    #[test]
    fn test_supply_overflow_is_error() {
        let mut supply = Supply::new(TestToken);
        supply.increase_supply(u64::MAX).unwrap();

        assert!(matches!(supply.increase_supply(1), Err(SuidError::Overflow)));
        assert_eq!(supply.total_issued(), u64::MAX);
    }

    #[test]
    fn test_supply_underflow_is_error() {
        let mut supply = Supply::new(TestToken);
        let mut other = Supply::new(TestToken);
        let foreign = other.increase_supply(5).unwrap();

        assert_eq!(supply.decrease_supply(foreign), Err(SuidError::Underflow));
        assert_eq!(supply.total_issued(), 0);
    }

    #[test]
    fn test_asset_metadata() {
        assert_eq!(Sui::SYMBOL, "SUI");
        assert_eq!(Sui::DECIMALS, 9);
    }
}
