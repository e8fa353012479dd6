use crate::error::Error;
use crate::types::{DataKey, Position, Strategy, Vault, DEFAULT_PLATFORM_FEE_BPS};
use soroban_sdk::{Address, Env, Vec};

pub struct Storage;

impl Storage {
    // Initialization
    pub fn is_initialized(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Initialized)
    }

    pub fn set_initialized(env: &Env) {
        env.storage().instance().set(&DataKey::Initialized, &true);
    }

    // Owner / config
    pub fn get_owner(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(Error::NotInitialized)
    }

    pub fn set_owner(env: &Env, owner: &Address) {
        env.storage().instance().set(&DataKey::Owner, owner);
    }

    pub fn get_asset(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Asset)
            .ok_or(Error::NotInitialized)
    }

    pub fn set_asset(env: &Env, asset: &Address) {
        env.storage().instance().set(&DataKey::Asset, asset);
    }

    pub fn get_treasury(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Treasury)
            .ok_or(Error::NotInitialized)
    }

    pub fn set_treasury(env: &Env, treasury: &Address) {
        env.storage().instance().set(&DataKey::Treasury, treasury);
    }

    pub fn get_platform_fee(env: &Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::PlatformFee)
            .unwrap_or(DEFAULT_PLATFORM_FEE_BPS)
    }

    pub fn set_platform_fee(env: &Env, fee_bps: u32) {
        env.storage().instance().set(&DataKey::PlatformFee, &fee_bps);
    }

    pub fn is_paused(env: &Env) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::Paused)
            .unwrap_or(false)
    }

    pub fn set_paused(env: &Env, paused: bool) {
        env.storage().instance().set(&DataKey::Paused, &paused);
    }

    pub fn get_tvl(env: &Env) -> u128 {
        env.storage()
            .instance()
            .get(&DataKey::TotalValueLocked)
            .unwrap_or(0)
    }

    pub fn set_tvl(env: &Env, tvl: u128) {
        env.storage().instance().set(&DataKey::TotalValueLocked, &tvl);
    }

    // ID counters
    pub fn get_vault_count(env: &Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::VaultCounter)
            .unwrap_or(0)
    }

    pub fn next_vault_id(env: &Env) -> Result<u32, Error> {
        let next = Self::get_vault_count(env)
            .checked_add(1)
            .ok_or(Error::MathOverflow)?;
        env.storage().instance().set(&DataKey::VaultCounter, &next);
        Ok(next)
    }

    pub fn get_strategy_count(env: &Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::StrategyCounter)
            .unwrap_or(0)
    }

    pub fn next_strategy_id(env: &Env) -> Result<u32, Error> {
        let next = Self::get_strategy_count(env)
            .checked_add(1)
            .ok_or(Error::MathOverflow)?;
        env.storage().instance().set(&DataKey::StrategyCounter, &next);
        Ok(next)
    }

    // Admin set
    pub fn is_admin_member(env: &Env, account: &Address) -> bool {
        env.storage()
            .persistent()
            .get(&DataKey::Admin(account.clone()))
            .unwrap_or(false)
    }

    pub fn set_admin_member(env: &Env, account: &Address, member: bool) {
        env.storage()
            .persistent()
            .set(&DataKey::Admin(account.clone()), &member);
    }

    // Vaults
    pub fn get_vault(env: &Env, vault_id: u32) -> Option<Vault> {
        env.storage().persistent().get(&DataKey::Vault(vault_id))
    }

    pub fn set_vault(env: &Env, vault: &Vault) {
        env.storage()
            .persistent()
            .set(&DataKey::Vault(vault.id), vault);
    }

    // Strategies
    pub fn get_strategy(env: &Env, strategy_id: u32) -> Option<Strategy> {
        env.storage()
            .persistent()
            .get(&DataKey::Strategy(strategy_id))
    }

    pub fn set_strategy(env: &Env, strategy: &Strategy) {
        env.storage()
            .persistent()
            .set(&DataKey::Strategy(strategy.id), strategy);
    }

    // Allocations
    pub fn get_allocation(env: &Env, vault_id: u32, strategy_id: u32) -> u32 {
        env.storage()
            .persistent()
            .get(&DataKey::Allocation(vault_id, strategy_id))
            .unwrap_or(0)
    }

    pub fn set_allocation(env: &Env, vault_id: u32, strategy_id: u32, bps: u32) {
        env.storage()
            .persistent()
            .set(&DataKey::Allocation(vault_id, strategy_id), &bps);
    }

    pub fn remove_allocation(env: &Env, vault_id: u32, strategy_id: u32) {
        env.storage()
            .persistent()
            .remove(&DataKey::Allocation(vault_id, strategy_id));
    }

    // Positions
    pub fn get_position(env: &Env, vault_id: u32, account: &Address) -> Option<Position> {
        env.storage()
            .persistent()
            .get(&DataKey::Position(vault_id, account.clone()))
    }

    pub fn set_position(env: &Env, vault_id: u32, account: &Address, position: &Position) {
        env.storage()
            .persistent()
            .set(&DataKey::Position(vault_id, account.clone()), position);
    }

    pub fn remove_position(env: &Env, vault_id: u32, account: &Address) {
        env.storage()
            .persistent()
            .remove(&DataKey::Position(vault_id, account.clone()));
    }

    // Account index
    pub fn get_account_vaults(env: &Env, account: &Address) -> Vec<u32> {
        env.storage()
            .persistent()
            .get(&DataKey::AccountVaults(account.clone()))
            .unwrap_or(Vec::new(env))
    }

    pub fn set_account_vaults(env: &Env, account: &Address, vaults: &Vec<u32>) {
        env.storage()
            .persistent()
            .set(&DataKey::AccountVaults(account.clone()), vaults);
    }
}
