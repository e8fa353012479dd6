#![no_std]

mod access;
mod accounting;
mod error;
mod events;
mod position;
mod storage;
mod strategy;
mod types;
mod vault;

pub use error::{Error, ErrorKind};
pub use types::{LedgerConfig, PlatformStats, Position, RiskTier, Strategy, Vault};

use access::Access;
use events::InitializedEvent;
use position::Positions;
use storage::Storage;
use strategy::Strategies;
use vault::Vaults;

use soroban_sdk::{contract, contractimpl, Address, Env, String, Symbol, Vec};

#[contract]
pub struct YieldVault;

#[contractimpl]
impl YieldVault {
    // ============================================
    // INITIALIZATION & ADMIN
    // ============================================

    /// Initialize the ledger and seed the default strategies
    ///
    /// `owner` becomes the permanent admin; it is not stored in the admin set.
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    pub fn initialize(
        env: Env,
        owner: Address,
        asset: Address,
        treasury: Address,
    ) -> Result<(), Error> {
        if Storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        owner.require_auth();

        Storage::set_initialized(&env);
        Storage::set_owner(&env, &owner);
        Storage::set_asset(&env, &asset);
        Storage::set_treasury(&env, &treasury);
        Storage::set_platform_fee(&env, types::DEFAULT_PLATFORM_FEE_BPS);
        Storage::set_paused(&env, false);
        Storage::set_tvl(&env, 0);

        Strategies::seed_defaults(&env)?;

        env.events().publish(
            (Symbol::new(&env, "initialized"),),
            InitializedEvent {
                owner,
                asset,
                treasury,
            },
        );

        Ok(())
    }

    /// Grant admin rights (owner only)
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `NotOwner`: Caller is not the owner
    pub fn add_admin(env: Env, account: Address, caller: Address) -> Result<bool, Error> {
        Access::add_admin(&env, &account, &caller)
    }

    /// Revoke admin rights (owner only)
    pub fn remove_admin(env: Env, account: Address, caller: Address) -> Result<bool, Error> {
        Access::remove_admin(&env, &account, &caller)
    }

    /// Change the fee recipient (owner only)
    pub fn set_treasury(env: Env, treasury: Address, caller: Address) -> Result<bool, Error> {
        Access::set_treasury(&env, &treasury, &caller)
    }

    /// Set the withdrawal fee in basis points (admin only, max 1000)
    ///
    /// # Errors
    /// - `Unauthorized`: Caller is not admin
    /// - `FeeTooHigh`: Rate above 10%
    pub fn set_platform_fee(env: Env, new_fee_bps: u32, caller: Address) -> Result<u32, Error> {
        Access::set_platform_fee(&env, new_fee_bps, &caller)
    }

    /// Flip the emergency pause; returns the new state (admin only)
    pub fn toggle_emergency_pause(env: Env, caller: Address) -> Result<bool, Error> {
        Access::toggle_emergency_pause(&env, &caller)
    }

    // ============================================
    // STRATEGIES
    // ============================================

    pub fn add_strategy(
        env: Env,
        name: String,
        protocol: String,
        apy_bps: u32,
        capacity: u128,
        risk_score: u32,
        target: Address,
        caller: Address,
    ) -> Result<u32, Error> {
        Strategies::add_strategy(
            &env, name, protocol, apy_bps, capacity, risk_score, target, &caller,
        )
    }

    /// # Errors
    /// - `Unauthorized`: Caller is not admin
    /// - `StrategyNotFound`: Strategy doesn't exist
    pub fn update_strategy_apy(
        env: Env,
        strategy_id: u32,
        new_apy_bps: u32,
        caller: Address,
    ) -> Result<u32, Error> {
        Strategies::update_apy(&env, strategy_id, new_apy_bps, &caller)
    }

    pub fn set_strategy_active(
        env: Env,
        strategy_id: u32,
        active: bool,
        caller: Address,
    ) -> Result<bool, Error> {
        Strategies::set_active(&env, strategy_id, active, &caller)
    }

    // ============================================
    // VAULTS
    // ============================================

    pub fn create_vault(
        env: Env,
        name: String,
        risk_tier: u32,
        min_deposit: u128,
        caller: Address,
    ) -> Result<u32, Error> {
        Vaults::create_vault(&env, name, risk_tier, min_deposit, &caller)
    }

    pub fn rebalance_vault(
        env: Env,
        vault_id: u32,
        new_strategy_id: u32,
        caller: Address,
    ) -> Result<bool, Error> {
        Vaults::rebalance_vault(&env, vault_id, new_strategy_id, &caller)
    }

    pub fn harvest_vault(env: Env, vault_id: u32) -> Result<bool, Error> {
        Vaults::harvest_vault(&env, vault_id)
    }

    // ============================================
    // POSITIONS
    // ============================================

    pub fn deposit(env: Env, vault_id: u32, amount: u128, caller: Address) -> Result<u128, Error> {
        Positions::deposit(&env, vault_id, amount, &caller)
    }

    pub fn withdraw(env: Env, vault_id: u32, shares: u128, caller: Address) -> Result<u128, Error> {
        Positions::withdraw(&env, vault_id, shares, &caller)
    }

    // ============================================
    // VIEW FUNCTIONS
    // ============================================

    pub fn get_vault_info(env: Env, vault_id: u32) -> Option<Vault> {
        Storage::get_vault(&env, vault_id)
    }

    pub fn get_user_position(env: Env, vault_id: u32, account: Address) -> Option<Position> {
        Storage::get_position(&env, vault_id, &account)
    }

    /// Current asset value of an account's shares (0 without a position)
    pub fn get_user_vault_value(env: Env, vault_id: u32, account: Address) -> u128 {
        Positions::value_of(&env, vault_id, &account)
    }

    pub fn get_strategy_info(env: Env, strategy_id: u32) -> Option<Strategy> {
        Storage::get_strategy(&env, strategy_id)
    }

    pub fn get_vault_allocation(env: Env, vault_id: u32, strategy_id: u32) -> u32 {
        Storage::get_allocation(&env, vault_id, strategy_id)
    }

    pub fn get_platform_stats(env: Env) -> PlatformStats {
        PlatformStats {
            total_value_locked: Storage::get_tvl(&env),
            vault_count: Storage::get_vault_count(&env),
            strategy_count: Storage::get_strategy_count(&env),
            platform_fee_bps: Storage::get_platform_fee(&env),
            paused: Storage::is_paused(&env),
        }
    }

    pub fn get_config(env: Env) -> Option<LedgerConfig> {
        Some(LedgerConfig {
            owner: Storage::get_owner(&env).ok()?,
            asset: Storage::get_asset(&env).ok()?,
            treasury: Storage::get_treasury(&env).ok()?,
        })
    }

    pub fn get_user_vaults(env: Env, account: Address) -> Vec<u32> {
        Storage::get_account_vaults(&env, &account)
    }

    pub fn get_best_apy(env: Env) -> u32 {
        Strategies::best_apy(&env)
    }

    pub fn is_user_admin(env: Env, account: Address) -> bool {
        Access::is_admin(&env, &account)
    }
}
