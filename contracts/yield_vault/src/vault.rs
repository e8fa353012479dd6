use crate::access::Access;
use crate::accounting::accrue_yield;
use crate::error::Error;
use crate::events::{HarvestEvent, RebalanceEvent, VaultCreatedEvent};
use crate::storage::Storage;
use crate::strategy::Strategies;
use crate::types::{RiskTier, Vault, FULL_ALLOCATION_BPS, MAX_NAME_LEN};
use soroban_sdk::{Address, Env, String, Symbol};

pub struct Vaults;

impl Vaults {
    /// Create a vault and assign its initial strategy (admin only)
    ///
    /// # Errors
    /// - `Unauthorized`: Caller is not admin
    /// - `ContractPaused`: Contract is paused
    /// - `NameTooLong`: Name exceeds 64 characters
    /// - `InvalidRiskTier`: Tier not in 1..=3
    pub fn create_vault(
        env: &Env,
        name: String,
        risk_tier: u32,
        min_deposit: u128,
        caller: &Address,
    ) -> Result<u32, Error> {
        Access::require_admin(env, caller)?;
        Access::require_not_paused(env)?;

        if name.len() > MAX_NAME_LEN {
            return Err(Error::NameTooLong);
        }
        let risk_tier = RiskTier::from_u32(risk_tier).ok_or(Error::InvalidRiskTier)?;

        let strategy_id = Strategies::select_for_tier(env, risk_tier)?;
        let vault_id = Storage::next_vault_id(env)?;
        let now = env.ledger().sequence();

        let vault = Vault {
            id: vault_id,
            name,
            asset: Storage::get_asset(env)?,
            total_shares: 0,
            total_assets: 0,
            strategy_id,
            risk_tier,
            min_deposit,
            active: true,
            created_at: now,
            last_harvest: now,
        };

        Storage::set_vault(env, &vault);
        Storage::set_allocation(env, vault_id, strategy_id, FULL_ALLOCATION_BPS);

        env.events().publish(
            (Symbol::new(env, "vault_created"), vault_id),
            VaultCreatedEvent {
                vault_id,
                strategy_id,
                risk_tier,
                min_deposit,
            },
        );

        Ok(vault_id)
    }

    /// Move a vault's full allocation to another strategy (admin only)
    ///
    /// Pending yield is harvested at the old strategy's rate first.
    ///
    /// # Errors
    /// - `Unauthorized`: Caller is not admin
    /// - `ContractPaused`: Contract is paused
    /// - `VaultNotFound` / `StrategyNotFound`
    /// - `StrategyInactive`: Target strategy is deactivated
    pub fn rebalance_vault(
        env: &Env,
        vault_id: u32,
        new_strategy_id: u32,
        caller: &Address,
    ) -> Result<bool, Error> {
        Access::require_admin(env, caller)?;
        Access::require_not_paused(env)?;

        let mut vault = Self::get(env, vault_id)?;
        let target = Strategies::get(env, new_strategy_id)?;
        if !target.active {
            return Err(Error::StrategyInactive);
        }

        Self::harvest(env, &mut vault)?;

        let old_strategy_id = vault.strategy_id;
        Strategies::sub_utilization(env, old_strategy_id, vault.total_assets)?;
        Strategies::add_utilization(env, new_strategy_id, vault.total_assets)?;

        Storage::remove_allocation(env, vault_id, old_strategy_id);
        Storage::set_allocation(env, vault_id, new_strategy_id, FULL_ALLOCATION_BPS);

        vault.strategy_id = new_strategy_id;
        Storage::set_vault(env, &vault);

        env.events().publish(
            (Symbol::new(env, "rebalance"), vault_id),
            RebalanceEvent {
                vault_id,
                old_strategy_id,
                new_strategy_id,
            },
        );

        Ok(true)
    }

    /// Accrue pending yield for a vault. Zero accrual is a successful no-op.
    ///
    /// # Errors
    /// - `ContractPaused`: Contract is paused
    /// - `VaultNotFound`: Vault doesn't exist
    /// - `VaultInactive`: Vault is deactivated
    pub fn harvest_vault(env: &Env, vault_id: u32) -> Result<bool, Error> {
        Access::require_not_paused(env)?;

        let mut vault = Self::get(env, vault_id)?;
        if !vault.active {
            return Err(Error::VaultInactive);
        }

        let accrued = Self::harvest(env, &mut vault)?;
        Storage::set_vault(env, &vault);

        Ok(accrued > 0)
    }

    /// Book pending yield into `vault` and the platform totals.
    /// The caller persists the vault.
    pub fn harvest(env: &Env, vault: &mut Vault) -> Result<u128, Error> {
        let strategy = Strategies::get(env, vault.strategy_id)?;
        let accrued = accrue_yield(vault, strategy.apy_bps, env.ledger().sequence())?;

        if accrued > 0 {
            Strategies::add_utilization(env, strategy.id, accrued)?;
            Self::increase_tvl(env, accrued)?;

            env.events().publish(
                (Symbol::new(env, "harvest"), vault.id),
                HarvestEvent {
                    vault_id: vault.id,
                    strategy_id: strategy.id,
                    yield_amount: accrued,
                    total_assets: vault.total_assets,
                },
            );
        }

        Ok(accrued)
    }

    pub fn get(env: &Env, vault_id: u32) -> Result<Vault, Error> {
        Storage::get_vault(env, vault_id).ok_or(Error::VaultNotFound)
    }

    pub fn increase_tvl(env: &Env, amount: u128) -> Result<(), Error> {
        let tvl = Storage::get_tvl(env)
            .checked_add(amount)
            .ok_or(Error::MathOverflow)?;
        Storage::set_tvl(env, tvl);
        Ok(())
    }

    pub fn decrease_tvl(env: &Env, amount: u128) -> Result<(), Error> {
        let tvl = Storage::get_tvl(env)
            .checked_sub(amount)
            .ok_or(Error::MathOverflow)?;
        Storage::set_tvl(env, tvl);
        Ok(())
    }
}
