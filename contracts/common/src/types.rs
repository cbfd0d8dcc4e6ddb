//! Core Types for the SUID Pool

use crate::events::EventLog;

/// Type alias for account addresses
pub type Address = [u8; 32];

/// Type alias for validator identities
pub type ValidatorId = [u8; 32];

/// Type alias for delegation handle identifiers
pub type DelegationId = [u8; 32];

// ============ Transaction Context ============

/// Per-operation context supplied by the caller.
///
/// Carries who is acting, in which epoch, and the log that successful
/// operations append their events to.
#[derive(Debug, Clone)]
pub struct TxContext {
    /// Address of the caller
    pub sender: Address,
    /// Current staking epoch
    pub epoch: u64,
    /// Event log for emitting events
    pub events: EventLog,
}

impl TxContext {
    /// Create a context with an empty event log
    pub fn new(sender: Address, epoch: u64) -> Self {
        Self {
            sender,
            epoch,
            events: EventLog::new(),
        }
    }
}
