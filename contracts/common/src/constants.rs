//! Protocol Constants
//!
//! All fixed amounts and asset metadata for the SUID liquid-staking pool.
//! Both assets use the same 9-decimal denomination, so one whole unit of
//! either is `1_000_000_000` base units.

/// Base asset metadata (the staked coin)
pub mod sui {
    /// Token name
    pub const NAME: &str = "Sui";
    /// Token symbol
    pub const SYMBOL: &str = "SUI";
    /// Decimal places
    pub const DECIMALS: u8 = 9;
    /// One unit with decimals (1 SUI = 1_000_000_000 MIST)
    pub const ONE: u64 = 1_000_000_000;
}

/// Receipt asset metadata (the liquid-staking derivative)
pub mod suid {
    /// Token name
    pub const NAME: &str = "Staked SUI Derivative";
    /// Token symbol
    pub const SYMBOL: &str = "SUID";
    /// Decimal places, identical to the base asset so amounts convert 1:1
    pub const DECIMALS: u8 = 9;
}

/// Pool Ledger parameters
pub mod pool {
    use super::sui::ONE;

    /// Smallest accepted deposit or withdrawal (one whole unit).
    /// Anything below is dust and is rejected with `AmountTooLow`.
    pub const MIN_UNIT: u64 = ONE;

    /// Exchange rate numerator (receipt units per base unit)
    pub const EXCHANGE_RATE_NUM: u64 = 1;

    /// Exchange rate denominator
    pub const EXCHANGE_RATE_DEN: u64 = 1;
}

/// Staking registry parameters
///
/// These belong to the external staking subsystem. The pool never checks
/// them; the in-memory registry enforces them so tests see realistic
/// collaborator failures.
pub mod staking {
    use super::sui::ONE;

    /// Minimum principal for a single delegation
    pub const MIN_STAKE: u64 = ONE;

    /// Epochs between a stake request and its activation
    pub const ACTIVATION_DELAY_EPOCHS: u64 = 1;
}
