//! SUID Common Library
//!
//! Shared types, constants, and fungible-asset primitives for the SUID
//! liquid-staking pool. The pool crate builds its ledger on top of these.
//!
//! ## Modules
//!
//! - **Constants**: asset metadata, `MIN_UNIT`, staking parameters
//! - **Errors**: `SuidError` with stable codes
//! - **Coin**: linear `Balance`/`Coin` and the witness-gated `Supply`
//! - **Events**: typed, serializable event log
//! - **Validation**: `check!` and the conservation guards
//! - **Math**: checked arithmetic and the fixed 1:1 conversion
//!
//! This crate is `no_std` compatible when built without the `std` feature.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Re-export Vec for submodules based on feature
#[cfg(not(feature = "std"))]
pub use alloc::vec::Vec;
#[cfg(feature = "std")]
pub use std::vec::Vec;

pub mod constants;
pub mod errors;
pub mod types;
pub mod math;
pub mod events;
pub mod validation;
pub mod coin;

// Re-exports for convenience
pub use constants::*;
pub use errors::*;
pub use types::*;
pub use math::*;
pub use events::*;
pub use validation::{
    require_min_unit, require_sufficient_balance, require_sufficient_reserve,
    supply_matches_reserve,
};
pub use coin::*;
