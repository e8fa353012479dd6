use crate::access::Access;
use crate::error::Error;
use crate::events::{StrategyAddedEvent, StrategyApyEvent, StrategyStatusEvent};
use crate::storage::Storage;
use crate::types::{
    RiskTier, Strategy, MAX_NAME_LEN, MAX_PROTOCOL_LEN, MAX_RISK_SCORE, MIN_RISK_SCORE,
};
use soroban_sdk::{vec, Address, Env, String, Symbol, Vec};

/// Genesis catalog: (name, protocol, apy_bps, capacity, risk_score)
const DEFAULT_STRATEGIES: [(&str, &str, u32, u128, u32); 3] = [
    ("Stable Lending", "lending", 450, 1_000_000_000_000, 2),
    ("Liquidity Provision", "amm", 850, 500_000_000_000, 5),
    ("Leveraged Yield", "farming", 1_500, 250_000_000_000, 8),
];

pub struct Strategies;

impl Strategies {
    /// Seed the default strategies (ids 1..=3). Called once from `initialize`.
    pub fn seed_defaults(env: &Env) -> Result<(), Error> {
        let target = env.current_contract_address();
        for (name, protocol, apy_bps, capacity, risk_score) in DEFAULT_STRATEGIES {
            Self::insert(
                env,
                String::from_str(env, name),
                String::from_str(env, protocol),
                apy_bps,
                capacity,
                risk_score,
                target.clone(),
            )?;
        }
        Ok(())
    }

    /// Register a new strategy (admin only)
    ///
    /// # Errors
    /// - `Unauthorized`: Caller is not admin
    /// - `NameTooLong` / `ProtocolTooLong`: Label limits exceeded
    /// - `InvalidRiskScore`: Score outside 1..=10
    pub fn add_strategy(
        env: &Env,
        name: String,
        protocol: String,
        apy_bps: u32,
        capacity: u128,
        risk_score: u32,
        target: Address,
        caller: &Address,
    ) -> Result<u32, Error> {
        Access::require_admin(env, caller)?;

        if name.len() > MAX_NAME_LEN {
            return Err(Error::NameTooLong);
        }
        if protocol.len() > MAX_PROTOCOL_LEN {
            return Err(Error::ProtocolTooLong);
        }
        if !(MIN_RISK_SCORE..=MAX_RISK_SCORE).contains(&risk_score) {
            return Err(Error::InvalidRiskScore);
        }

        Self::insert(env, name, protocol, apy_bps, capacity, risk_score, target)
    }

    fn insert(
        env: &Env,
        name: String,
        protocol: String,
        apy_bps: u32,
        capacity: u128,
        risk_score: u32,
        target: Address,
    ) -> Result<u32, Error> {
        let strategy_id = Storage::next_strategy_id(env)?;

        let strategy = Strategy {
            id: strategy_id,
            name,
            protocol,
            apy_bps,
            capacity,
            utilization: 0,
            risk_score,
            active: true,
            target,
            last_updated: env.ledger().sequence(),
        };
        Storage::set_strategy(env, &strategy);

        env.events().publish(
            (Symbol::new(env, "strategy_added"), strategy_id),
            StrategyAddedEvent {
                strategy_id,
                apy_bps,
                risk_score,
            },
        );

        Ok(strategy_id)
    }

    pub fn update_apy(
        env: &Env,
        strategy_id: u32,
        new_apy_bps: u32,
        caller: &Address,
    ) -> Result<u32, Error> {
        Access::require_admin(env, caller)?;

        let mut strategy = Self::get(env, strategy_id)?;
        let old_apy_bps = strategy.apy_bps;

        strategy.apy_bps = new_apy_bps;
        strategy.last_updated = env.ledger().sequence();
        Storage::set_strategy(env, &strategy);

        env.events().publish(
            (Symbol::new(env, "strategy_apy"), strategy_id),
            StrategyApyEvent {
                strategy_id,
                old_apy_bps,
                new_apy_bps,
            },
        );

        Ok(new_apy_bps)
    }

    /// Activate or deactivate a strategy. Strategies are never deleted.
    pub fn set_active(
        env: &Env,
        strategy_id: u32,
        active: bool,
        caller: &Address,
    ) -> Result<bool, Error> {
        Access::require_admin(env, caller)?;

        let mut strategy = Self::get(env, strategy_id)?;
        strategy.active = active;
        strategy.last_updated = env.ledger().sequence();
        Storage::set_strategy(env, &strategy);

        env.events().publish(
            (Symbol::new(env, "strategy_status"), strategy_id),
            StrategyStatusEvent {
                strategy_id,
                active,
            },
        );

        Ok(active)
    }

    /// Highest APY among active strategies, 0 when there are none
    pub fn best_apy(env: &Env) -> u32 {
        let mut best = 0;
        for strategy_id in 1..=Storage::get_strategy_count(env) {
            if let Some(strategy) = Storage::get_strategy(env, strategy_id) {
                if strategy.active && strategy.apy_bps > best {
                    best = strategy.apy_bps;
                }
            }
        }
        best
    }

    /// Candidate strategies per tier, in preference order
    pub fn candidates(env: &Env, tier: RiskTier) -> Vec<u32> {
        match tier {
            RiskTier::Conservative => vec![env, 1],
            RiskTier::Balanced => vec![env, 1, 2],
            RiskTier::Aggressive => vec![env, 1, 2, 3],
        }
    }

    /// Static selection: always the first candidate of the tier's list.
    pub fn select_for_tier(env: &Env, tier: RiskTier) -> Result<u32, Error> {
        let strategy_id = Self::candidates(env, tier)
            .first()
            .ok_or(Error::StrategyNotFound)?;
        // Must have been seeded
        Self::get(env, strategy_id)?;
        Ok(strategy_id)
    }

    pub fn get(env: &Env, strategy_id: u32) -> Result<Strategy, Error> {
        Storage::get_strategy(env, strategy_id).ok_or(Error::StrategyNotFound)
    }

    pub fn add_utilization(env: &Env, strategy_id: u32, amount: u128) -> Result<(), Error> {
        if amount == 0 {
            return Ok(());
        }
        let mut strategy = Self::get(env, strategy_id)?;
        strategy.utilization = strategy
            .utilization
            .checked_add(amount)
            .ok_or(Error::MathOverflow)?;
        Storage::set_strategy(env, &strategy);
        Ok(())
    }

    pub fn sub_utilization(env: &Env, strategy_id: u32, amount: u128) -> Result<(), Error> {
        if amount == 0 {
            return Ok(());
        }
        let mut strategy = Self::get(env, strategy_id)?;
        strategy.utilization = strategy
            .utilization
            .checked_sub(amount)
            .ok_or(Error::MathOverflow)?;
        Storage::set_strategy(env, &strategy);
        Ok(())
    }
}
