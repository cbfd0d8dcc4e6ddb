//! Pool Events
//!
//! Events are appended during successful operations and can be indexed
//! off-chain for balances, analytics and notifications. Failed operations
//! never emit.

use crate::Vec;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use crate::errors::{SuidError, SuidResult};
use crate::types::{Address, DelegationId, ValidatorId};

/// Event types for indexing and filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
#[borsh(use_discriminant = true)]
#[repr(u8)]
pub enum EventType {
    // Pool Ledger Events (0x01 - 0x1F)
    LiquidityAdded = 0x01,
    LiquidityRemoved = 0x02,

    // Delegation Events (0x20 - 0x3F)
    StakeRequested = 0x20,
    UnstakeRequested = 0x21,
}

/// Main event enum containing all pool events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub enum SuidEvent {
    // ============ Pool Ledger Events ============

    /// Emitted when SUI is deposited and SUID minted
    LiquidityAdded {
        sender: Address,
        sui_in: u64,
        suid_out: u64,
        new_reserve: u64,
        new_supply: u64,
        epoch: u64,
    },

    /// Emitted when SUID is burned and SUI released
    LiquidityRemoved {
        sender: Address,
        suid_in: u64,
        sui_out: u64,
        new_reserve: u64,
        new_supply: u64,
        epoch: u64,
    },

    // ============ Delegation Events ============

    /// Emitted when SUI is handed to the staking registry
    StakeRequested {
        sender: Address,
        validator: ValidatorId,
        delegation_id: DelegationId,
        amount: u64,
        epoch: u64,
    },

    /// Emitted when a delegation is withdrawn from the staking registry
    UnstakeRequested {
        sender: Address,
        validator: ValidatorId,
        delegation_id: DelegationId,
        amount: u64,
        epoch: u64,
    },
}

impl SuidEvent {
    /// Get the event type for filtering
    pub fn event_type(&self) -> EventType {
        match self {
            Self::LiquidityAdded { .. } => EventType::LiquidityAdded,
            Self::LiquidityRemoved { .. } => EventType::LiquidityRemoved,
            Self::StakeRequested { .. } => EventType::StakeRequested,
            Self::UnstakeRequested { .. } => EventType::UnstakeRequested,
        }
    }

    /// Get the epoch when event occurred
    pub fn epoch(&self) -> u64 {
        match self {
            Self::LiquidityAdded { epoch, .. }
            | Self::LiquidityRemoved { epoch, .. }
            | Self::StakeRequested { epoch, .. }
            | Self::UnstakeRequested { epoch, .. } => *epoch,
        }
    }

    /// Address that triggered the event
    pub fn sender(&self) -> Address {
        match self {
            Self::LiquidityAdded { sender, .. }
            | Self::LiquidityRemoved { sender, .. }
            | Self::StakeRequested { sender, .. }
            | Self::UnstakeRequested { sender, .. } => *sender,
        }
    }

    /// Serialize event to bytes for storage/transmission
    pub fn to_bytes(&self) -> SuidResult<Vec<u8>> {
        borsh::to_vec(self).map_err(|_| SuidError::Encoding)
    }

    /// Deserialize event from bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        borsh::from_slice(bytes).ok()
    }
}

/// Event log for collecting multiple events during execution
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<SuidEvent>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Emit an event (add to log)
    pub fn emit(&mut self, event: SuidEvent) {
        self.events.push(event);
    }

    /// Get all events
    pub fn events(&self) -> &[SuidEvent] {
        &self.events
    }

    /// Take ownership of all events
    pub fn into_events(self) -> Vec<SuidEvent> {
        self.events
    }

    /// Filter events by type
    pub fn filter_by_type(&self, event_type: EventType) -> Vec<&SuidEvent> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Most recent event, if any
    pub fn last(&self) -> Option<&SuidEvent> {
        self.events.last()
    }

    /// Check if any events were emitted
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// Get number of events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Clear all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
