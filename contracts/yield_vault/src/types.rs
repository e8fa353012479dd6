use soroban_sdk::{contracttype, Address, String};

// Constants
pub const BASIS_POINTS: u128 = 10_000; // 100% = 10,000 basis points
pub const FULL_ALLOCATION_BPS: u32 = 10_000;
pub const DEFAULT_PLATFORM_FEE_BPS: u32 = 50; // 0.5%
pub const MAX_PLATFORM_FEE_BPS: u32 = 1_000; // 10% hard ceiling
pub const BLOCKS_PER_YEAR: u128 = 5_256_000; // ~6s ledgers

pub const MAX_NAME_LEN: u32 = 64;
pub const MAX_PROTOCOL_LEN: u32 = 32;
pub const MAX_ACCOUNT_VAULTS: u32 = 20;
pub const MIN_RISK_SCORE: u32 = 1;
pub const MAX_RISK_SCORE: u32 = 10;

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RiskTier {
    /// Lowest-risk strategy only
    Conservative = 1,
    /// Two-strategy candidate set
    Balanced = 2,
    /// All default strategies
    Aggressive = 3,
}

impl RiskTier {
    pub fn from_u32(tier: u32) -> Option<RiskTier> {
        match tier {
            1 => Some(RiskTier::Conservative),
            2 => Some(RiskTier::Balanced),
            3 => Some(RiskTier::Aggressive),
            _ => None,
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Vault {
    /// Sequential vault identifier
    pub id: u32,
    pub name: String,
    /// Asset accepted by the vault
    pub asset: Address,
    /// Shares outstanding across all positions
    pub total_shares: u128,
    /// Assets under management, including harvested yield
    pub total_assets: u128,
    /// Strategy currently holding the full allocation
    pub strategy_id: u32,
    pub risk_tier: RiskTier,
    pub min_deposit: u128,
    pub active: bool,
    /// Ledger sequence at creation
    pub created_at: u32,
    /// Ledger sequence of the last yield accrual
    pub last_harvest: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Position {
    pub shares: u128,
    pub first_deposit: u32,
    pub last_compound: u32,
    /// Cumulative assets deposited
    pub total_deposited: u128,
    /// Cumulative net assets paid out
    pub total_withdrawn: u128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Strategy {
    pub id: u32,
    pub name: String,
    pub protocol: String,
    pub apy_bps: u32,
    pub capacity: u128,
    /// Sum of total_assets of every vault assigned to this strategy
    pub utilization: u128,
    /// 1 (safest) to 10
    pub risk_score: u32,
    pub active: bool,
    pub target: Address,
    pub last_updated: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlatformStats {
    pub total_value_locked: u128,
    pub vault_count: u32,
    pub strategy_count: u32,
    pub platform_fee_bps: u32,
    pub paused: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerConfig {
    pub owner: Address,
    pub asset: Address,
    pub treasury: Address,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    // Instance storage
    Initialized,
    Owner,
    Asset,
    Treasury,
    PlatformFee,
    Paused,
    TotalValueLocked,
    VaultCounter,
    StrategyCounter,
    // Persistent storage
    Admin(Address),
    Vault(u32),
    Strategy(u32),
    Position(u32, Address),   // (vault_id, account)
    Allocation(u32, u32),     // (vault_id, strategy_id) -> bps
    AccountVaults(Address),   // account -> Vec<vault_id>
}
