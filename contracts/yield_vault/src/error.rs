use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ============================================
    // AUTHORIZATION ERRORS (10-19)
    // ============================================
    /// Caller is neither the owner nor an admin
    Unauthorized = 10,
    /// Caller is not the genesis owner
    NotOwner = 11,

    // ============================================
    // VALIDATION ERRORS (20-29)
    // ============================================
    /// Risk tier must be 1, 2 or 3
    InvalidRiskTier = 20,
    /// Amount or share count must be positive
    InvalidAmount = 21,
    /// Platform fee above the 10% ceiling
    FeeTooHigh = 22,
    /// Deposit below the vault minimum
    BelowMinimumDeposit = 23,
    /// Name longer than 64 characters
    NameTooLong = 24,
    /// Protocol label longer than 32 characters
    ProtocolTooLong = 25,
    /// Risk score must be within 1..=10
    InvalidRiskScore = 26,
    /// Deposit too small to mint a single share
    ZeroShares = 27,

    // ============================================
    // NOT FOUND ERRORS (30-39)
    // ============================================
    VaultNotFound = 30,
    StrategyNotFound = 31,
    PositionNotFound = 32,

    // ============================================
    // STATE ERRORS (40-49)
    // ============================================
    AlreadyInitialized = 40,
    NotInitialized = 41,
    /// Emergency pause is active
    ContractPaused = 42,
    VaultInactive = 43,
    StrategyInactive = 44,

    // ============================================
    // LIMIT ERRORS (50-59)
    // ============================================
    /// Withdrawal exceeds held shares
    InsufficientShares = 50,
    /// Account already tracks the maximum number of vaults
    VaultIndexFull = 51,

    // ============================================
    // INTERNAL / EXTERNAL ERRORS (60-69)
    // ============================================
    /// Checked arithmetic failed
    MathOverflow = 60,
    /// Asset transfer was rejected by the token contract
    TransferFailed = 61,
}

/// Failure class of an [`Error`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Authorization,
    Validation,
    NotFound,
    State,
    Limit,
    Internal,
    Transfer,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match *self as u32 {
            10..=19 => ErrorKind::Authorization,
            20..=29 => ErrorKind::Validation,
            30..=39 => ErrorKind::NotFound,
            40..=49 => ErrorKind::State,
            50..=59 => ErrorKind::Limit,
            61 => ErrorKind::Transfer,
            _ => ErrorKind::Internal,
        }
    }
}
