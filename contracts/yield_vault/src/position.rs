use crate::access::Access;
use crate::accounting::{assets_for_shares, platform_fee, shares_for_deposit};
use crate::error::Error;
use crate::events::{DepositEvent, WithdrawEvent};
use crate::storage::Storage;
use crate::strategy::Strategies;
use crate::types::{Position, MAX_ACCOUNT_VAULTS};
use crate::vault::Vaults;
use soroban_sdk::{token, Address, Env, Symbol};

pub struct Positions;

impl Positions {
    /// Deposit assets and mint vault shares
    ///
    /// Pending yield is accrued before pricing the new shares, so earlier
    /// depositors are not diluted.
    ///
    /// # Errors
    /// - `ContractPaused`: Contract is paused
    /// - `InvalidAmount`: Amount is zero
    /// - `VaultNotFound`: Vault doesn't exist
    /// - `VaultInactive`: Vault is deactivated
    /// - `BelowMinimumDeposit`: Amount under the vault minimum
    /// - `ZeroShares`: Amount too small to mint a share at the current price
    /// - `VaultIndexFull`: Account already tracks 20 vaults
    /// - `TransferFailed`: Asset transfer into custody was rejected
    pub fn deposit(
        env: &Env,
        vault_id: u32,
        amount: u128,
        caller: &Address,
    ) -> Result<u128, Error> {
        Access::require_not_paused(env)?;

        if amount == 0 {
            return Err(Error::InvalidAmount);
        }

        caller.require_auth();

        let mut vault = Vaults::get(env, vault_id)?;
        if !vault.active {
            return Err(Error::VaultInactive);
        }
        if amount < vault.min_deposit {
            return Err(Error::BelowMinimumDeposit);
        }

        Vaults::harvest(env, &mut vault)?;

        let shares = shares_for_deposit(amount, vault.total_assets, vault.total_shares)?;
        if shares == 0 {
            return Err(Error::ZeroShares);
        }

        let now = env.ledger().sequence();
        let existing = Storage::get_position(env, vault_id, caller);
        let is_new = existing.is_none();
        let mut position = existing.unwrap_or(Position {
            shares: 0,
            first_deposit: now,
            last_compound: now,
            total_deposited: 0,
            total_withdrawn: 0,
        });

        let mut account_vaults = Storage::get_account_vaults(env, caller);
        if is_new {
            if account_vaults.len() >= MAX_ACCOUNT_VAULTS {
                return Err(Error::VaultIndexFull);
            }
            account_vaults.push_back(vault_id);
        }

        Self::transfer(env, caller, &env.current_contract_address(), amount)?;

        position.shares = position
            .shares
            .checked_add(shares)
            .ok_or(Error::MathOverflow)?;
        position.total_deposited = position
            .total_deposited
            .checked_add(amount)
            .ok_or(Error::MathOverflow)?;
        position.last_compound = now;

        vault.total_shares = vault
            .total_shares
            .checked_add(shares)
            .ok_or(Error::MathOverflow)?;
        vault.total_assets = vault
            .total_assets
            .checked_add(amount)
            .ok_or(Error::MathOverflow)?;

        Strategies::add_utilization(env, vault.strategy_id, amount)?;
        Vaults::increase_tvl(env, amount)?;

        Storage::set_position(env, vault_id, caller, &position);
        Storage::set_vault(env, &vault);
        if is_new {
            Storage::set_account_vaults(env, caller, &account_vaults);
        }

        env.events().publish(
            (Symbol::new(env, "deposit"), vault_id, caller.clone()),
            DepositEvent {
                vault_id,
                account: caller.clone(),
                amount,
                shares,
            },
        );

        Ok(shares)
    }

    /// Burn shares and pay out their asset value net of the platform fee
    ///
    /// Vault totals drop by the gross amount; the fee goes to the treasury.
    ///
    /// # Errors
    /// - `ContractPaused`: Contract is paused
    /// - `InvalidAmount`: Zero shares requested
    /// - `VaultNotFound` / `PositionNotFound`
    /// - `InsufficientShares`: More shares than the caller holds
    /// - `TransferFailed`: Payout or fee transfer was rejected
    pub fn withdraw(
        env: &Env,
        vault_id: u32,
        shares: u128,
        caller: &Address,
    ) -> Result<u128, Error> {
        Access::require_not_paused(env)?;

        if shares == 0 {
            return Err(Error::InvalidAmount);
        }

        caller.require_auth();

        let mut vault = Vaults::get(env, vault_id)?;
        let mut position =
            Storage::get_position(env, vault_id, caller).ok_or(Error::PositionNotFound)?;
        if shares > position.shares {
            return Err(Error::InsufficientShares);
        }

        Vaults::harvest(env, &mut vault)?;

        let gross = assets_for_shares(shares, vault.total_assets, vault.total_shares)?;
        let fee = platform_fee(gross, Storage::get_platform_fee(env))?;
        let net = gross.checked_sub(fee).ok_or(Error::MathOverflow)?;

        if shares == position.shares {
            Storage::remove_position(env, vault_id, caller);
        } else {
            position.shares -= shares;
            position.total_withdrawn = position
                .total_withdrawn
                .checked_add(net)
                .ok_or(Error::MathOverflow)?;
            Storage::set_position(env, vault_id, caller, &position);
        }

        vault.total_shares = vault
            .total_shares
            .checked_sub(shares)
            .ok_or(Error::MathOverflow)?;
        vault.total_assets = vault
            .total_assets
            .checked_sub(gross)
            .ok_or(Error::MathOverflow)?;
        Storage::set_vault(env, &vault);

        Strategies::sub_utilization(env, vault.strategy_id, gross)?;
        Vaults::decrease_tvl(env, gross)?;

        let custody = env.current_contract_address();
        Self::transfer(env, &custody, caller, net)?;
        if fee > 0 {
            let treasury = Storage::get_treasury(env)?;
            Self::transfer(env, &custody, &treasury, fee)?;
        }

        env.events().publish(
            (Symbol::new(env, "withdraw"), vault_id, caller.clone()),
            WithdrawEvent {
                vault_id,
                account: caller.clone(),
                shares,
                gross,
                fee,
                net,
            },
        );

        Ok(net)
    }

    /// Asset value of an account's shares at stored vault totals
    pub fn value_of(env: &Env, vault_id: u32, account: &Address) -> u128 {
        let (Some(vault), Some(position)) = (
            Storage::get_vault(env, vault_id),
            Storage::get_position(env, vault_id, account),
        ) else {
            return 0;
        };

        assets_for_shares(position.shares, vault.total_assets, vault.total_shares).unwrap_or(0)
    }

    /// Move `amount` of the vault asset through the token contract.
    /// Any rejection aborts the enclosing call.
    fn transfer(env: &Env, from: &Address, to: &Address, amount: u128) -> Result<(), Error> {
        if amount == 0 {
            return Ok(());
        }

        let amount = i128::try_from(amount).map_err(|_| Error::MathOverflow)?;
        let asset = Storage::get_asset(env)?;

        match token::Client::new(env, &asset).try_transfer(from, to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(Error::TransferFailed),
        }
    }
}
