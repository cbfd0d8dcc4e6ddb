//! In-Memory Staking Registry
//!
//! Reference [`StakingRegistry`] used by tests and local simulation. It
//! keeps a validator set, enforces a minimum stake, activates delegations
//! one epoch after the request, and returns principal only on withdrawal.
//! Rewards are out of scope.
//!
//! The registry holds every staked coin itself. A [`StakedSui`] receipt is
//! redeemed only by the address that staked, and only against a live
//! record with the same validator and amount.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use sha2::{Digest, Sha256};
use tracing::{debug, info};

use suid_common::{
    coin::{Balance, Coin, Sui},
    constants::staking::{ACTIVATION_DELAY_EPOCHS, MIN_STAKE},
    types::{Address, DelegationId, TxContext, ValidatorId},
};

use crate::delegation::{StakeRejected, StakedSui, StakingRegistry, UnstakeRejected};

/// Domain separator for delegation ids
const DELEGATION_ID_DOMAIN: &[u8] = b"suid/delegation/v1";

// ============ Errors ============

/// Failures reported by the in-memory registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StakingError {
    /// Validator is not in the active set
    UnknownValidator { validator: ValidatorId },
    /// Stake below the registry minimum
    BelowMinimumStake { amount: u64, minimum: u64 },
    /// Handle does not match a live delegation
    UnknownStake { id: DelegationId },
    /// Handle presented by an address other than the staker
    NotOwner { id: DelegationId },
}

impl StakingError {
    /// Returns a human-readable error code for logging/debugging
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownValidator { .. } => "S001_UNKNOWN_VALIDATOR",
            Self::BelowMinimumStake { .. } => "S002_BELOW_MIN_STAKE",
            Self::UnknownStake { .. } => "S003_UNKNOWN_STAKE",
            Self::NotOwner { .. } => "S004_NOT_OWNER",
        }
    }
}

impl fmt::Display for StakingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BelowMinimumStake { amount, minimum } => {
                write!(f, "{}: stake {} below minimum {}", self.code(), amount, minimum)
            }
            _ => f.write_str(self.code()),
        }
    }
}

impl std::error::Error for StakingError {}

// ============ Config ============

/// Registry parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Minimum principal per delegation
    pub min_stake: u64,
    /// Epoch the registry starts in
    pub starting_epoch: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            min_stake: MIN_STAKE,
            starting_epoch: 0,
        }
    }
}

// ============ Registry ============

/// One live delegation and the SUI backing it
#[derive(Debug)]
struct DelegationRecord {
    owner: Address,
    validator: ValidatorId,
    principal: Balance<Sui>,
    activation_epoch: u64,
}

/// In-memory validator staking registry
#[derive(Debug)]
pub struct InMemoryStakingRegistry {
    config: RegistryConfig,
    epoch: u64,
    validators: BTreeSet<ValidatorId>,
    delegations: BTreeMap<DelegationId, DelegationRecord>,
    nonce: u64,
}

impl Default for InMemoryStakingRegistry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

impl InMemoryStakingRegistry {
    /// Create an empty registry
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            config,
            epoch: config.starting_epoch,
            validators: BTreeSet::new(),
            delegations: BTreeMap::new(),
            nonce: 0,
        }
    }

    /// Add a validator to the active set
    pub fn add_validator(&mut self, validator: ValidatorId) -> bool {
        self.validators.insert(validator)
    }

    /// Remove a validator from the active set. Existing delegations stay
    /// withdrawable; new stakes are refused.
    pub fn remove_validator(&mut self, validator: &ValidatorId) -> bool {
        self.validators.remove(validator)
    }

    /// Whether `validator` accepts new stake
    pub fn is_active_validator(&self, validator: &ValidatorId) -> bool {
        self.validators.contains(validator)
    }

    /// Current epoch
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Move to the next epoch
    pub fn advance_epoch(&mut self) -> u64 {
        self.epoch += 1;
        info!(epoch = self.epoch, "staking epoch advanced");
        self.epoch
    }

    /// Total principal across all live delegations. Every unit is held by
    /// the registry.
    pub fn total_staked(&self) -> u64 {
        self.delegations.values().map(|d| d.principal.value()).sum()
    }

    /// Principal delegated to `validator` that is active this epoch
    pub fn active_stake(&self, validator: &ValidatorId) -> u64 {
        self.delegations
            .values()
            .filter(|d| &d.validator == validator && d.activation_epoch <= self.epoch)
            .map(|d| d.principal.value())
            .sum()
    }

    /// Principal delegated to `validator` still waiting for activation
    pub fn pending_stake(&self, validator: &ValidatorId) -> u64 {
        self.delegations
            .values()
            .filter(|d| &d.validator == validator && d.activation_epoch > self.epoch)
            .map(|d| d.principal.value())
            .sum()
    }

    /// Number of live delegations
    pub fn delegation_count(&self) -> usize {
        self.delegations.len()
    }

    fn next_delegation_id(&mut self, sender: &Address, validator: &ValidatorId) -> DelegationId {
        self.nonce += 1;
        generate_delegation_id(sender, validator, self.epoch, self.nonce)
    }
}

impl StakingRegistry for InMemoryStakingRegistry {
    type Error = StakingError;

    fn request_add_stake(
        &mut self,
        ctx: &TxContext,
        stake: Coin<Sui>,
        validator: ValidatorId,
    ) -> Result<StakedSui, StakeRejected<StakingError>> {
        if !self.is_active_validator(&validator) {
            return Err(StakeRejected {
                error: StakingError::UnknownValidator { validator },
                funds: stake,
            });
        }

        let amount = stake.value();
        if amount < self.config.min_stake {
            return Err(StakeRejected {
                error: StakingError::BelowMinimumStake {
                    amount,
                    minimum: self.config.min_stake,
                },
                funds: stake,
            });
        }

        let id = self.next_delegation_id(&ctx.sender, &validator);
        let activation_epoch = self.epoch + ACTIVATION_DELAY_EPOCHS;
        self.delegations.insert(
            id,
            DelegationRecord {
                owner: ctx.sender,
                validator,
                principal: stake.into_balance(),
                activation_epoch,
            },
        );
        debug!(amount, activation_epoch, "delegation recorded");

        Ok(StakedSui::new(id, validator, amount, activation_epoch))
    }

    fn request_withdraw_stake(
        &mut self,
        ctx: &TxContext,
        staked: StakedSui,
    ) -> Result<Coin<Sui>, UnstakeRejected<StakingError>> {
        let id = staked.id();

        // 1. Receipt must match a live record
        let record = match self.delegations.get(&id) {
            Some(record)
                if record.validator == staked.validator()
                    && record.principal.value() == staked.principal_amount() =>
            {
                record
            }
            _ => {
                return Err(UnstakeRejected {
                    error: StakingError::UnknownStake { id },
                    handle: staked,
                })
            }
        };

        // 2. Only the staker may redeem it
        if record.owner != ctx.sender {
            return Err(UnstakeRejected {
                error: StakingError::NotOwner { id },
                handle: staked,
            });
        }

        // 3. Retire the record and release its principal
        let principal = match self.delegations.remove(&id) {
            Some(record) => record.principal,
            None => {
                return Err(UnstakeRejected {
                    error: StakingError::UnknownStake { id },
                    handle: staked,
                })
            }
        };
        debug!(amount = principal.value(), "delegation retired");

        Ok(Coin::from_balance(principal))
    }
}

// ============ Helper Functions ============

/// Generate a deterministic delegation ID
pub fn generate_delegation_id(
    sender: &Address,
    validator: &ValidatorId,
    epoch: u64,
    nonce: u64,
) -> DelegationId {
    let mut hasher = Sha256::new();
    hasher.update(DELEGATION_ID_DOMAIN);
    hasher.update(sender);
    hasher.update(validator);
    hasher.update(epoch.to_le_bytes());
    hasher.update(nonce.to_le_bytes());
    let result = hasher.finalize();
    let mut id = [0u8; 32];
    id.copy_from_slice(&result);
    id
}

// ============ Tests ============
