use soroban_sdk::{contracttype, Address};

use crate::types::RiskTier;

#[contracttype]
#[derive(Clone, Debug)]
pub struct InitializedEvent {
    pub owner: Address,
    pub asset: Address,
    pub treasury: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct VaultCreatedEvent {
    pub vault_id: u32,
    pub strategy_id: u32,
    pub risk_tier: RiskTier,
    pub min_deposit: u128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct DepositEvent {
    pub vault_id: u32,
    pub account: Address,
    pub amount: u128,
    pub shares: u128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct WithdrawEvent {
    pub vault_id: u32,
    pub account: Address,
    pub shares: u128,
    pub gross: u128,
    pub fee: u128,
    pub net: u128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct HarvestEvent {
    pub vault_id: u32,
    pub strategy_id: u32,
    pub yield_amount: u128,
    pub total_assets: u128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct RebalanceEvent {
    pub vault_id: u32,
    pub old_strategy_id: u32,
    pub new_strategy_id: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct StrategyAddedEvent {
    pub strategy_id: u32,
    pub apy_bps: u32,
    pub risk_score: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct StrategyApyEvent {
    pub strategy_id: u32,
    pub old_apy_bps: u32,
    pub new_apy_bps: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct StrategyStatusEvent {
    pub strategy_id: u32,
    pub active: bool,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct PlatformFeeEvent {
    pub old_fee_bps: u32,
    pub new_fee_bps: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct AdminEvent {
    pub account: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct PauseEvent {
    pub paused: bool,
    pub caller: Address,
}
