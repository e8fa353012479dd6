use crate::error::Error;
use crate::types::{Vault, BASIS_POINTS, BLOCKS_PER_YEAR};

/// Calculate shares to mint for a deposit
///
/// Formula: shares = amount × total_shares / total_assets
///
/// The first depositor (no shares outstanding) receives shares 1:1.
/// Division truncates, so rounding dust stays with the pool.
///
/// Example:
/// - total_assets: 10,500, total_shares: 10,000
/// - amount: 1,000
/// - shares: 1,000 × 10,000 / 10,500 = 952
pub fn shares_for_deposit(
    amount: u128,
    total_assets: u128,
    total_shares: u128,
) -> Result<u128, Error> {
    if total_shares == 0 {
        return Ok(amount);
    }

    amount
        .checked_mul(total_shares)
        .ok_or(Error::MathOverflow)?
        .checked_div(total_assets)
        .ok_or(Error::MathOverflow)
}

/// Calculate the asset value of shares
///
/// Formula: assets = shares × total_assets / total_shares
pub fn assets_for_shares(
    shares: u128,
    total_assets: u128,
    total_shares: u128,
) -> Result<u128, Error> {
    if total_shares == 0 {
        return Ok(0);
    }

    shares
        .checked_mul(total_assets)
        .ok_or(Error::MathOverflow)?
        .checked_div(total_shares)
        .ok_or(Error::MathOverflow)
}

/// Calculate yield earned over a number of ledgers
///
/// Formula: yield = total_assets × apy_bps × blocks / (10,000 × BLOCKS_PER_YEAR)
///
/// Example:
/// - total_assets: 10,000,000
/// - apy: 4.5% (450 basis points)
/// - blocks: 5,256,000 (one year)
/// - yield: 450,000
pub fn yield_for_period(total_assets: u128, apy_bps: u32, blocks: u32) -> Result<u128, Error> {
    let denominator = BASIS_POINTS
        .checked_mul(BLOCKS_PER_YEAR)
        .ok_or(Error::MathOverflow)?;

    total_assets
        .checked_mul(apy_bps as u128)
        .ok_or(Error::MathOverflow)?
        .checked_mul(blocks as u128)
        .ok_or(Error::MathOverflow)?
        .checked_div(denominator)
        .ok_or(Error::MathOverflow)
}

/// Accrue pending yield into the vault
///
/// Returns the amount added to `total_assets`. A zero result is not an
/// error: short intervals and low rates truncate to nothing, and the
/// harvest clock keeps running until a non-zero amount is booked.
/// An empty vault earns nothing, so its clock restarts at `current_block`.
pub fn accrue_yield(vault: &mut Vault, apy_bps: u32, current_block: u32) -> Result<u128, Error> {
    if vault.total_assets == 0 {
        vault.last_harvest = current_block;
        return Ok(0);
    }

    let elapsed = current_block.saturating_sub(vault.last_harvest);
    let accrued = yield_for_period(vault.total_assets, apy_bps, elapsed)?;

    if accrued > 0 {
        vault.total_assets = vault
            .total_assets
            .checked_add(accrued)
            .ok_or(Error::MathOverflow)?;
        vault.last_harvest = current_block;
    }

    Ok(accrued)
}

/// Calculate the platform fee on a payout
///
/// Formula: fee = amount × fee_bps / 10,000
///
/// Example:
/// - amount: 5,000,000
/// - fee: 0.5% (50 basis points)
/// - fee: 25,000, net payout: 4,975,000
pub fn platform_fee(amount: u128, fee_bps: u32) -> Result<u128, Error> {
    amount
        .checked_mul(fee_bps as u128)
        .ok_or(Error::MathOverflow)?
        .checked_div(BASIS_POINTS)
        .ok_or(Error::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RiskTier;
    use soroban_sdk::{testutils::Address as _, Address, Env, String};

    fn create_test_vault(env: &Env, total_assets: u128, last_harvest: u32) -> Vault {
        Vault {
            id: 1,
            name: String::from_str(env, "Test Vault"),
            asset: Address::generate(env),
            total_shares: total_assets,
            total_assets,
            strategy_id: 1,
            risk_tier: RiskTier::Conservative,
            min_deposit: 1,
            active: true,
            created_at: 0,
            last_harvest,
        }
    }

    #[test]
    fn test_first_deposit_is_one_to_one() {
        assert_eq!(shares_for_deposit(5_000_000, 0, 0).unwrap(), 5_000_000);
    }

    #[test]
    fn test_deposit_after_yield() {
        // 2,000 assets backing 1,000 shares
        assert_eq!(shares_for_deposit(500, 2_000, 1_000).unwrap(), 250);
    }

    #[test]
    fn test_deposit_truncates_toward_pool() {
        // 100 × 333 / 1000 = 33.3
        assert_eq!(shares_for_deposit(100, 1_000, 333).unwrap(), 33);
    }

    #[test]
    fn test_deposit_with_shares_but_no_assets() {
        assert_eq!(
            shares_for_deposit(100, 0, 10),
            Err(Error::MathOverflow)
        );
    }

    #[test]
    fn test_assets_for_shares() {
        assert_eq!(assets_for_shares(3_000_000, 10_000_000, 10_000_000).unwrap(), 3_000_000);
        assert_eq!(assets_for_shares(500, 2_000, 1_000).unwrap(), 1_000);
        assert_eq!(assets_for_shares(1, 2, 3).unwrap(), 0);
    }

    #[test]
    fn test_assets_for_shares_empty_vault() {
        assert_eq!(assets_for_shares(1_000, 0, 0).unwrap(), 0);
    }

    #[test]
    fn test_yield_for_full_year() {
        let accrued = yield_for_period(10_000_000, 450, 5_256_000).unwrap();
        assert_eq!(accrued, 450_000);
    }

    #[test]
    fn test_yield_truncates_to_zero() {
        // 1,000 × 450 × 10 / 52,560,000,000 < 1
        assert_eq!(yield_for_period(1_000, 450, 10).unwrap(), 0);
    }

    #[test]
    fn test_accrue_updates_vault() {
        let env = Env::default();
        let mut vault = create_test_vault(&env, 10_000_000, 100);

        let accrued = accrue_yield(&mut vault, 1_500, 100 + 52_560).unwrap();

        // 10,000,000 × 1,500 × 52,560 / 52,560,000,000 = 15,000
        assert_eq!(accrued, 15_000);
        assert_eq!(vault.total_assets, 10_015_000);
        assert_eq!(vault.total_shares, 10_000_000);
        assert_eq!(vault.last_harvest, 100 + 52_560);
    }

    #[test]
    fn test_accrue_zero_keeps_clock() {
        let env = Env::default();
        let mut vault = create_test_vault(&env, 1_000, 100);

        let accrued = accrue_yield(&mut vault, 450, 110).unwrap();

        assert_eq!(accrued, 0);
        assert_eq!(vault.total_assets, 1_000);
        assert_eq!(vault.last_harvest, 100);
    }

    #[test]
    fn test_accrue_empty_vault_restarts_clock() {
        let env = Env::default();
        let mut vault = create_test_vault(&env, 0, 100);

        let accrued = accrue_yield(&mut vault, 1_500, 90_000).unwrap();

        assert_eq!(accrued, 0);
        assert_eq!(vault.last_harvest, 90_000);
    }

    #[test]
    fn test_platform_fee() {
        assert_eq!(platform_fee(5_000_000, 50).unwrap(), 25_000);
        assert_eq!(platform_fee(3_000_000, 50).unwrap(), 15_000);
        assert_eq!(platform_fee(199, 50).unwrap(), 0);
        assert_eq!(platform_fee(1_000, 0).unwrap(), 0);
    }

    #[test]
    fn test_overflow_is_reported() {
        assert_eq!(platform_fee(u128::MAX, 2), Err(Error::MathOverflow));
        assert_eq!(
            shares_for_deposit(u128::MAX, 1, 2),
            Err(Error::MathOverflow)
        );
    }
}
