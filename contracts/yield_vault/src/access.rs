use crate::error::Error;
use crate::events::{AdminEvent, PauseEvent, PlatformFeeEvent};
use crate::storage::Storage;
use crate::types::MAX_PLATFORM_FEE_BPS;
use soroban_sdk::{Address, Env, Symbol};

pub struct Access;

impl Access {
    /// Owner first, then the admin set
    pub fn is_admin(env: &Env, account: &Address) -> bool {
        match Storage::get_owner(env) {
            Ok(owner) if owner == *account => true,
            _ => Storage::is_admin_member(env, account),
        }
    }

    pub fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
        if !Storage::is_initialized(env) {
            return Err(Error::NotInitialized);
        }

        caller.require_auth();

        if !Self::is_admin(env, caller) {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }

    pub fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
        let owner = Storage::get_owner(env)?;

        caller.require_auth();

        if owner != *caller {
            return Err(Error::NotOwner);
        }
        Ok(())
    }

    pub fn require_not_paused(env: &Env) -> Result<(), Error> {
        if !Storage::is_initialized(env) {
            return Err(Error::NotInitialized);
        }
        if Storage::is_paused(env) {
            return Err(Error::ContractPaused);
        }
        Ok(())
    }

    /// Grant admin rights (owner only)
    pub fn add_admin(env: &Env, account: &Address, caller: &Address) -> Result<bool, Error> {
        Self::require_owner(env, caller)?;

        Storage::set_admin_member(env, account, true);

        env.events().publish(
            (Symbol::new(env, "admin_added"),),
            AdminEvent {
                account: account.clone(),
            },
        );

        Ok(true)
    }

    /// Revoke admin rights (owner only). The owner itself is never in the set.
    pub fn remove_admin(env: &Env, account: &Address, caller: &Address) -> Result<bool, Error> {
        Self::require_owner(env, caller)?;

        Storage::set_admin_member(env, account, false);

        env.events().publish(
            (Symbol::new(env, "admin_removed"),),
            AdminEvent {
                account: account.clone(),
            },
        );

        Ok(true)
    }

    pub fn set_treasury(env: &Env, treasury: &Address, caller: &Address) -> Result<bool, Error> {
        Self::require_owner(env, caller)?;

        Storage::set_treasury(env, treasury);

        env.events().publish(
            (Symbol::new(env, "treasury_set"),),
            AdminEvent {
                account: treasury.clone(),
            },
        );

        Ok(true)
    }

    pub fn set_platform_fee(env: &Env, new_fee_bps: u32, caller: &Address) -> Result<u32, Error> {
        Self::require_admin(env, caller)?;

        if new_fee_bps > MAX_PLATFORM_FEE_BPS {
            return Err(Error::FeeTooHigh);
        }

        let old_fee_bps = Storage::get_platform_fee(env);
        Storage::set_platform_fee(env, new_fee_bps);

        env.events().publish(
            (Symbol::new(env, "platform_fee"),),
            PlatformFeeEvent {
                old_fee_bps,
                new_fee_bps,
            },
        );

        Ok(new_fee_bps)
    }

    /// Flip the global emergency pause
    pub fn toggle_emergency_pause(env: &Env, caller: &Address) -> Result<bool, Error> {
        Self::require_admin(env, caller)?;

        let paused = !Storage::is_paused(env);
        Storage::set_paused(env, paused);

        env.events().publish(
            (Symbol::new(env, "pause"),),
            PauseEvent {
                paused,
                caller: caller.clone(),
            },
        );

        Ok(paused)
    }
}
