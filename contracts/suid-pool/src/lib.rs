//! SUID Pool Contract
//!
//! Liquid-staking accounting pool. Users deposit SUI and receive SUID at a
//! fixed 1:1 rate; burning SUID releases the same amount of SUI.
//!
//! ## Conservation
//!
//! The pool owns two things: the SUI `reserve` and the SUID `Supply`. Every
//! successful operation moves both by the same amount, so
//! `get_supply() == get_assets()` holds between operations. All checks run
//! before the first mutation: a rejected call leaves both untouched and
//! hands the caller's coin back unchanged.
//!
//! ## Authority
//!
//! The SUID supply is created from the private [`Suid`] witness when the
//! pool is built and never leaves the pool. [`Pool::initialize`] succeeds
//! once per process, so there is exactly one pool and every SUID coin in
//! circulation was minted by it. The only way to mint or burn SUID is
//! [`Pool::add_liquidity`] / [`Pool::remove_liquidity`].
//!
//! ## Delegation
//!
//! [`delegation`] forwards SUI to an external staking registry. It never
//! sees the pool: staking does not draw from `reserve`, and unstaking does
//! not refill it.

use std::sync::atomic::{AtomicBool, Ordering};

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

pub mod delegation;
pub mod registry;
pub mod shared;


pub use delegation::{stake, unstake, StakeRejected, StakedSui, StakingRegistry, UnstakeRejected};
pub use registry::{InMemoryStakingRegistry, RegistryConfig, StakingError};
pub use shared::SharedPool;

pub use suid_common::{
    coin::{Coin, Sui},
    errors::{SuidError, SuidResult},
    types::TxContext,
};

use suid_common::{
    coin::{Asset, Balance, Supply},
    constants::suid,
    events::SuidEvent,
    math::{safe_add, safe_sub, sui_to_suid, suid_to_sui},
    validation::{
        require_min_unit, require_sufficient_balance, require_sufficient_reserve,
        supply_matches_reserve,
    },
};

// ============ Receipt Asset ============

/// Receipt asset marker. The private field keeps construction inside this
/// crate, which makes it the one-time witness for the SUID supply.
#[derive(Debug, PartialEq, Eq)]
pub struct Suid {
    _private: (),
}

impl Asset for Suid {
    const NAME: &'static str = suid::NAME;
    const SYMBOL: &'static str = suid::SYMBOL;
    const DECIMALS: u8 = suid::DECIMALS;
}

// ============ Pool State ============

/// The liquid-staking pool
#[derive(Debug)]
pub struct Pool {
    /// SUI held by the pool
    reserve: Balance<Sui>,
    /// Exclusive SUID mint/burn authority
    treasury: Supply<Suid>,
}

/// Point-in-time view of the pool counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct PoolSnapshot {
    /// SUI held by the pool
    pub reserve: u64,
    /// SUID outstanding
    pub total_issued: u64,
}

impl PoolSnapshot {
    /// True when supply equals reserve
    pub fn is_balanced(&self) -> bool {
        self.reserve == self.total_issued
    }

    /// Serialize snapshot to bytes for storage
    pub fn to_bytes(&self) -> SuidResult<Vec<u8>> {
        borsh::to_vec(self).map_err(|_| SuidError::Encoding)
    }

    /// Deserialize snapshot from bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        borsh::from_slice(bytes).ok()
    }
}

/// Set by the first successful [`Pool::initialize`]
static POOL_INITIALIZED: AtomicBool = AtomicBool::new(false);

// NOTE: Default is intentionally not implemented. The pool owns the only
// SUID supply, so creation goes through `initialize` exactly once.

impl Pool {
    /// Create the pool with an empty reserve and a fresh SUID supply.
    ///
    /// # Errors
    /// * `PoolAlreadyInitialized` on every call after the first
    pub fn initialize() -> SuidResult<Self> {
        if POOL_INITIALIZED
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!(code = SuidError::PoolAlreadyInitialized.code(), "pool initialization rejected");
            return Err(SuidError::PoolAlreadyInitialized);
        }

        info!(symbol = suid::SYMBOL, "pool initialized");
        Ok(Self::new())
    }

    pub(crate) fn new() -> Self {
        Self {
            reserve: Balance::zero(),
            treasury: Supply::new(Suid { _private: () }),
        }
    }

    /// Total SUID issued
    pub fn get_supply(&self) -> u64 {
        self.treasury.total_issued()
    }

    /// Total SUI held
    pub fn get_assets(&self) -> u64 {
        self.reserve.value()
    }

    /// Both counters, read together
    pub fn snapshot(&self) -> PoolSnapshot {
        PoolSnapshot {
            reserve: self.get_assets(),
            total_issued: self.get_supply(),
        }
    }

    /// Check the conservation law
    pub fn verify_conservation(&self) -> SuidResult<()> {
        supply_matches_reserve(self.get_supply(), self.get_assets())
    }

    /// Deposit `amount` SUI from `payment` and mint the same amount of SUID.
    ///
    /// # Errors
    /// * `AmountTooLow` if `amount < MIN_UNIT`
    /// * `InsufficientBalance` if `payment` holds less than `amount`
    /// * `Overflow` if reserve or supply would leave the u64 range
    ///
    /// On error `payment` and the pool are unchanged.
    pub fn add_liquidity(
        &mut self,
        ctx: &mut TxContext,
        payment: &mut Coin<Sui>,
        amount: u64,
    ) -> SuidResult<Coin<Suid>> {
        let result = self.try_add_liquidity(ctx, payment, amount);
        if let Err(ref err) = result {
            warn!(
                sender = ?&ctx.sender[..4],
                amount,
                code = err.code(),
                recoverable = err.is_recoverable(),
                "add_liquidity rejected"
            );
        }
        result
    }

    fn try_add_liquidity(
        &mut self,
        ctx: &mut TxContext,
        payment: &mut Coin<Sui>,
        amount: u64,
    ) -> SuidResult<Coin<Suid>> {
        // 1. Dust guard
        require_min_unit(amount)?;

        // 2. Caller must actually hold the SUI
        require_sufficient_balance(payment.value(), amount)?;

        // 3. Compute both new totals before touching anything
        let minted = sui_to_suid(amount)?;
        let new_reserve = safe_add(self.reserve.value(), amount)?;
        let new_supply = safe_add(self.treasury.total_issued(), minted)?;

        // 4. Commit: take SUI, mint SUID
        let deposit = payment.balance_mut().split(amount)?;
        self.reserve.join(deposit)?;
        let receipt = self.treasury.increase_supply(minted)?;

        // 5. Emit event
        ctx.events.emit(SuidEvent::LiquidityAdded {
            sender: ctx.sender,
            sui_in: amount,
            suid_out: minted,
            new_reserve,
            new_supply,
            epoch: ctx.epoch,
        });
        debug!(
            sender = ?&ctx.sender[..4],
            amount,
            reserve = new_reserve,
            supply = new_supply,
            "liquidity added"
        );

        Ok(Coin::from_balance(receipt))
    }

    /// Burn `amount` SUID from `receipt` and release the same amount of SUI.
    ///
    /// # Errors
    /// * `AmountTooLow` if `amount < MIN_UNIT`
    /// * `InsufficientBalance` if `receipt` holds less than `amount`
    /// * `InsufficientReserve` if the reserve cannot cover the release
    /// * `Underflow` if the supply would go negative
    ///
    /// On error `receipt` and the pool are unchanged.
    pub fn remove_liquidity(
        &mut self,
        ctx: &mut TxContext,
        receipt: &mut Coin<Suid>,
        amount: u64,
    ) -> SuidResult<Coin<Sui>> {
        let result = self.try_remove_liquidity(ctx, receipt, amount);
        if let Err(ref err) = result {
            warn!(
                sender = ?&ctx.sender[..4],
                amount,
                code = err.code(),
                recoverable = err.is_recoverable(),
                "remove_liquidity rejected"
            );
        }
        result
    }

    fn try_remove_liquidity(
        &mut self,
        ctx: &mut TxContext,
        receipt: &mut Coin<Suid>,
        amount: u64,
    ) -> SuidResult<Coin<Sui>> {
        // 1. Dust guard
        require_min_unit(amount)?;

        // 2. Caller must actually hold the SUID
        require_sufficient_balance(receipt.value(), amount)?;

        // 3. Reserve must cover the release, supply must cover the burn
        let released = suid_to_sui(amount)?;
        require_sufficient_reserve(self.reserve.value(), released)?;
        let new_reserve = safe_sub(self.reserve.value(), released)?;
        let new_supply = safe_sub(self.treasury.total_issued(), amount)?;

        // 4. Commit: burn SUID, release SUI
        let burn = receipt.balance_mut().split(amount)?;
        self.treasury.decrease_supply(burn)?;
        let payout = self.reserve.split(released)?;

        // 5. Emit event
        ctx.events.emit(SuidEvent::LiquidityRemoved {
            sender: ctx.sender,
            suid_in: amount,
            sui_out: released,
            new_reserve,
            new_supply,
            epoch: ctx.epoch,
        });
        debug!(
            sender = ?&ctx.sender[..4],
            amount,
            reserve = new_reserve,
            supply = new_supply,
            "liquidity removed"
        );

        Ok(Coin::from_balance(payout))
    }
}

#[cfg(test)]
impl Pool {
    /// Pull SUI out of the reserve without burning SUID
    pub(crate) fn take_reserve_for_testing(&mut self, amount: u64) -> Coin<Sui> {
        Coin::from_balance(self.reserve.split(amount).unwrap())
    }
}

/// SUID metadata published with the currency
pub fn get_name() -> &'static str {
    suid::NAME
}

/// SUID ticker
pub fn get_symbol() -> &'static str {
    suid::SYMBOL
}

/// SUID decimals
pub fn get_decimals() -> u8 {
    suid::DECIMALS
}

// ============ Tests ============

#[cfg(test)]
mod tests {
    use super::*;
    use suid_common::constants::pool::MIN_UNIT;
    use suid_common::events::EventType;

    fn alice() -> [u8; 32] {
        [1u8; 32]
    }

    fn ctx() -> TxContext {
        TxContext::new(alice(), 10)
    }

    fn sui(amount: u64) -> Coin<Sui> {
        Coin::mint_for_testing(amount)
    }

    #[test]
    fn test_new_pool_is_empty() {
        let pool = Pool::new();
        assert_eq!(pool.get_supply(), 0);
        assert_eq!(pool.get_assets(), 0);
        assert!(pool.verify_conservation().is_ok());
    }

    #[test]
    fn test_add_liquidity_mints_one_to_one() {
        let mut pool = Pool::new();
        let mut ctx = ctx();
        let mut payment = sui(10 * MIN_UNIT);

        let receipt = pool.add_liquidity(&mut ctx, &mut payment, 10 * MIN_UNIT).unwrap();

        assert_eq!(receipt.value(), 10 * MIN_UNIT);
        assert_eq!(payment.value(), 0);
        assert_eq!(pool.get_supply(), 10 * MIN_UNIT);
        assert_eq!(pool.get_assets(), 10 * MIN_UNIT);
        assert_eq!(ctx.events.filter_by_type(EventType::LiquidityAdded).len(), 1);
    }

    #[test]
    fn test_add_liquidity_partial_coin() {
        let mut pool = Pool::new();
        let mut payment = sui(5 * MIN_UNIT);

        let receipt = pool.add_liquidity(&mut ctx(), &mut payment, 2 * MIN_UNIT).unwrap();

        assert_eq!(receipt.value(), 2 * MIN_UNIT);
        assert_eq!(payment.value(), 3 * MIN_UNIT);
    }

    #[test]
    fn test_add_liquidity_boundary() {
        let mut pool = Pool::new();
        let mut ctx = ctx();
        let mut payment = sui(2 * MIN_UNIT);

        let receipt = pool.add_liquidity(&mut ctx, &mut payment, MIN_UNIT).unwrap();
        assert_eq!(receipt.value(), MIN_UNIT);

        let result = pool.add_liquidity(&mut ctx, &mut payment, MIN_UNIT - 1);
        assert_eq!(
            result,
            Err(SuidError::AmountTooLow {
                amount: MIN_UNIT - 1,
                minimum: MIN_UNIT,
            })
        );
    }

    #[test]
    fn test_rejected_deposit_changes_nothing() {
        let mut pool = Pool::new();
        let mut ctx = ctx();
        let mut payment = sui(MIN_UNIT - 1);

        let result = pool.add_liquidity(&mut ctx, &mut payment, MIN_UNIT - 1);

        assert!(matches!(result, Err(SuidError::AmountTooLow { .. })));
        assert_eq!(payment.value(), MIN_UNIT - 1);
        assert_eq!(pool.snapshot(), PoolSnapshot { reserve: 0, total_issued: 0 });
        assert!(ctx.events.is_empty());
    }

    #[test]
    fn test_add_liquidity_insufficient_payment() {
        let mut pool = Pool::new();
        let mut payment = sui(MIN_UNIT);

        let result = pool.add_liquidity(&mut ctx(), &mut payment, 2 * MIN_UNIT);

        assert!(matches!(result, Err(SuidError::InsufficientBalance { .. })));
        assert_eq!(payment.value(), MIN_UNIT);
        assert_eq!(pool.get_assets(), 0);
    }

    #[test]
    fn test_add_liquidity_overflow() {
        let mut pool = Pool::new();
        let mut ctx = ctx();
        let mut whale = sui(u64::MAX);
        pool.add_liquidity(&mut ctx, &mut whale, u64::MAX).unwrap();

        let mut more = sui(MIN_UNIT);
        let result = pool.add_liquidity(&mut ctx, &mut more, MIN_UNIT);

        assert_eq!(result, Err(SuidError::Overflow));
        assert_eq!(more.value(), MIN_UNIT);
        assert_eq!(pool.get_assets(), u64::MAX);
        assert_eq!(pool.get_supply(), u64::MAX);
    }

    #[test]
    fn test_remove_liquidity_releases_one_to_one() {
        let mut pool = Pool::new();
        let mut ctx = ctx();
        let mut payment = sui(10 * MIN_UNIT);
        let mut receipt = pool.add_liquidity(&mut ctx, &mut payment, 10 * MIN_UNIT).unwrap();

        let released = pool.remove_liquidity(&mut ctx, &mut receipt, 4 * MIN_UNIT).unwrap();

        assert_eq!(released.value(), 4 * MIN_UNIT);
        assert_eq!(receipt.value(), 6 * MIN_UNIT);
        assert_eq!(pool.get_supply(), 6 * MIN_UNIT);
        assert_eq!(pool.get_assets(), 6 * MIN_UNIT);
        assert_eq!(ctx.events.filter_by_type(EventType::LiquidityRemoved).len(), 1);
    }

    #[test]
    fn test_remove_liquidity_boundary() {
        let mut pool = Pool::new();
        let mut ctx = ctx();
        let mut payment = sui(3 * MIN_UNIT);
        let mut receipt = pool.add_liquidity(&mut ctx, &mut payment, 3 * MIN_UNIT).unwrap();

        let result = pool.remove_liquidity(&mut ctx, &mut receipt, MIN_UNIT - 1);
        assert!(matches!(result, Err(SuidError::AmountTooLow { .. })));
        assert_eq!(receipt.value(), 3 * MIN_UNIT);

        let released = pool.remove_liquidity(&mut ctx, &mut receipt, MIN_UNIT).unwrap();
        assert_eq!(released.value(), MIN_UNIT);
    }

    #[test]
    fn test_remove_liquidity_more_than_held() {
        let mut pool = Pool::new();
        let mut ctx = ctx();
        let mut payment = sui(2 * MIN_UNIT);
        let mut receipt = pool.add_liquidity(&mut ctx, &mut payment, 2 * MIN_UNIT).unwrap();

        let result = pool.remove_liquidity(&mut ctx, &mut receipt, 3 * MIN_UNIT);

        assert!(matches!(result, Err(SuidError::InsufficientBalance { .. })));
        assert_eq!(pool.snapshot().reserve, 2 * MIN_UNIT);
    }

    #[test]
    fn test_remove_liquidity_reserve_guard() {
        let mut pool = Pool::new();
        let mut ctx = ctx();
        let mut payment = sui(5 * MIN_UNIT);
        let mut receipt = pool.add_liquidity(&mut ctx, &mut payment, 5 * MIN_UNIT).unwrap();
        let _drained = pool.take_reserve_for_testing(2 * MIN_UNIT);
        let before = pool.snapshot();

        let result = pool.remove_liquidity(&mut ctx, &mut receipt, 5 * MIN_UNIT);

        assert_eq!(
            result,
            Err(SuidError::InsufficientReserve {
                available: 3 * MIN_UNIT,
                requested: 5 * MIN_UNIT,
            })
        );
        assert_eq!(receipt.value(), 5 * MIN_UNIT);
        assert_eq!(pool.snapshot(), before);
        assert_eq!(ctx.events.filter_by_type(EventType::LiquidityRemoved).len(), 0);
    }

    #[test]
    fn test_snapshot_serialization() {
        let snapshot = PoolSnapshot {
            reserve: 30 * MIN_UNIT,
            total_issued: 30 * MIN_UNIT,
        };

        let restored = PoolSnapshot::from_bytes(&snapshot.to_bytes().unwrap()).unwrap();

        assert_eq!(restored, snapshot);
        assert!(restored.is_balanced());
    }

    #[test]
    fn test_metadata() {
        assert_eq!(get_symbol(), "SUID");
        assert_eq!(get_decimals(), 9);
        assert_eq!(Suid::SYMBOL, get_symbol());
        assert!(!get_name().is_empty());
    }
}
