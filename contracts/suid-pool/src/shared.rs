//! Shared Pool Handle
//!
//! The pool is one piece of mutable state that any caller may touch. This
//! handle passes it around explicitly behind a mutex: every method takes the
//! lock once, runs exactly one pool operation, and releases it, so readers
//! only ever see the counters between operations.

use std::sync::Arc;

use parking_lot::Mutex;

use suid_common::{
    coin::{Coin, Sui},
    errors::SuidResult,
    types::TxContext,
};

use crate::{Pool, PoolSnapshot, Suid};

/// Cloneable, thread-safe handle to a single [`Pool`]
#[derive(Debug, Clone)]
pub struct SharedPool {
    inner: Arc<Mutex<Pool>>,
}

impl SharedPool {
    /// Share a pool, typically the one returned by [`Pool::initialize`]
    pub fn new(pool: Pool) -> Self {
        Self {
            inner: Arc::new(Mutex::new(pool)),
        }
    }

    /// See [`Pool::add_liquidity`]
    pub fn add_liquidity(
        &self,
        ctx: &mut TxContext,
        payment: &mut Coin<Sui>,
        amount: u64,
    ) -> SuidResult<Coin<Suid>> {
        self.inner.lock().add_liquidity(ctx, payment, amount)
    }

    /// See [`Pool::remove_liquidity`]
    pub fn remove_liquidity(
        &self,
        ctx: &mut TxContext,
        receipt: &mut Coin<Suid>,
        amount: u64,
    ) -> SuidResult<Coin<Sui>> {
        self.inner.lock().remove_liquidity(ctx, receipt, amount)
    }

    /// Total SUID issued
    pub fn get_supply(&self) -> u64 {
        self.inner.lock().get_supply()
    }

    /// Total SUI held
    pub fn get_assets(&self) -> u64 {
        self.inner.lock().get_assets()
    }

    /// Both counters under one lock
    pub fn snapshot(&self) -> PoolSnapshot {
        self.inner.lock().snapshot()
    }

    /// Check the conservation law under one lock
    pub fn verify_conservation(&self) -> SuidResult<()> {
        self.inner.lock().verify_conservation()
    }
}
