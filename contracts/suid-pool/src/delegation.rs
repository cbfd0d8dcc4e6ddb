//! Delegation Facade
//!
//! Hands SUI to an external staking registry and takes it back. Nothing in
//! this module holds state or touches a [`Pool`](crate::Pool): staked funds
//! are not drawn from the pool reserve and withdrawn funds do not return to
//! it. Whoever calls [`stake`] supplies SUI they already own.
//!
//! Accepted stake is owned by the registry. The caller keeps only a
//! [`StakedSui`] receipt, which holds no funds; the SUI comes back solely
//! through [`unstake`].
//!
//! Registry failures pass through unchanged. Because a failed call must not
//! cost the caller their funds, a rejection carries the coin (or handle)
//! back alongside the registry's own error.

use core::fmt;

use tracing::{debug, warn};

use suid_common::{
    coin::{Coin, Sui},
    events::SuidEvent,
    types::{DelegationId, TxContext, ValidatorId},
};

// ============ Delegation Handle ============

/// Opaque receipt for a delegation to one validator.
///
/// Carries no funds: the principal stays with the registry, which checks the
/// receipt against its own records on withdrawal. Not `Clone`: one handle,
/// one withdrawal.
#[derive(Debug, PartialEq, Eq)]
pub struct StakedSui {
    id: DelegationId,
    validator: ValidatorId,
    principal: u64,
    activation_epoch: u64,
}

impl StakedSui {
    /// Built by registries when accepting a stake
    pub fn new(
        id: DelegationId,
        validator: ValidatorId,
        principal: u64,
        activation_epoch: u64,
    ) -> Self {
        Self {
            id,
            validator,
            principal,
            activation_epoch,
        }
    }

    /// Registry-assigned identifier
    pub fn id(&self) -> DelegationId {
        self.id
    }

    /// Validator the stake is delegated to
    pub fn validator(&self) -> ValidatorId {
        self.validator
    }

    /// Staked amount
    pub fn principal_amount(&self) -> u64 {
        self.principal
    }

    /// First epoch in which the stake counts towards the validator
    pub fn activation_epoch(&self) -> u64 {
        self.activation_epoch
    }
}

// ============ Rejections ============

/// A stake the registry refused, with the funds handed back
#[derive(Debug)]
pub struct StakeRejected<E> {
    /// Registry error, unmodified
    pub error: E,
    /// The coin that was offered
    pub funds: Coin<Sui>,
}

/// A withdrawal the registry refused, with the handle handed back
#[derive(Debug)]
pub struct UnstakeRejected<E> {
    /// Registry error, unmodified
    pub error: E,
    /// The handle that was presented
    pub handle: StakedSui,
}

impl<E: fmt::Display> fmt::Display for StakeRejected<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stake rejected: {}", self.error)
    }
}

impl<E: fmt::Display> fmt::Display for UnstakeRejected<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unstake rejected: {}", self.error)
    }
}

// ============ Registry Port ============

/// External validator-staking subsystem
///
/// Implementations own every staking rule (validator set, minimum stake,
/// epochs). Withdrawal timing is theirs too: callers must not assume a
/// handle can be redeemed in the epoch it was created.
pub trait StakingRegistry {
    /// Registry-specific failure
    type Error: fmt::Debug;

    /// Delegate `stake` to `validator`. On success the registry keeps the
    /// coin and answers with a receipt.
    fn request_add_stake(
        &mut self,
        ctx: &TxContext,
        stake: Coin<Sui>,
        validator: ValidatorId,
    ) -> Result<StakedSui, StakeRejected<Self::Error>>;

    /// Retire the delegation behind `staked` and release its funds
    fn request_withdraw_stake(
        &mut self,
        ctx: &TxContext,
        staked: StakedSui,
    ) -> Result<Coin<Sui>, UnstakeRejected<Self::Error>>;
}

// ============ Facade Operations ============

/// Delegate `funds` to `validator` through `registry`.
///
/// No pool accounting changes.
pub fn stake<R: StakingRegistry>(
    registry: &mut R,
    ctx: &mut TxContext,
    funds: Coin<Sui>,
    validator: ValidatorId,
) -> Result<StakedSui, StakeRejected<R::Error>> {
    let amount = funds.value();

    match registry.request_add_stake(ctx, funds, validator) {
        Ok(handle) => {
            ctx.events.emit(SuidEvent::StakeRequested {
                sender: ctx.sender,
                validator,
                delegation_id: handle.id(),
                amount,
                epoch: ctx.epoch,
            });
            debug!(validator = ?&validator[..4], amount, "stake delegated");
            Ok(handle)
        }
        Err(rejected) => {
            warn!(validator = ?&validator[..4], amount, error = ?rejected.error, "stake rejected");
            Err(rejected)
        }
    }
}

/// Withdraw the delegation behind `handle` through `registry`.
///
/// No pool accounting changes. The returned SUI belongs to the caller.
pub fn unstake<R: StakingRegistry>(
    registry: &mut R,
    ctx: &mut TxContext,
    handle: StakedSui,
) -> Result<Coin<Sui>, UnstakeRejected<R::Error>> {
    let delegation_id = handle.id();
    let validator = handle.validator();

    match registry.request_withdraw_stake(ctx, handle) {
        Ok(funds) => {
            ctx.events.emit(SuidEvent::UnstakeRequested {
                sender: ctx.sender,
                validator,
                delegation_id,
                amount: funds.value(),
                epoch: ctx.epoch,
            });
            debug!(validator = ?&validator[..4], amount = funds.value(), "stake withdrawn");
            Ok(funds)
        }
        Err(rejected) => {
            warn!(validator = ?&validator[..4], error = ?rejected.error, "unstake rejected");
            Err(rejected)
        }
    }
}
