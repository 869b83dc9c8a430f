#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, symbol_short, Address, Env, String,
    Symbol, Vec,
};

use points_ledger::PointsLedgerClient;
use reward_nft::RewardNftClient;

// ─────────────────────────────────────────────────────────────
// Types & Storage Keys
// ─────────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PointTier {
    pub tier: Tier,
    pub min_points: i128,
    pub rewards: Vec<Symbol>,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UnlockKind {
    Content,
    Nft,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Unlockable {
    pub id: Symbol,
    pub kind: UnlockKind,
    pub threshold: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnlockRecord {
    pub id: Symbol,
    pub kind: UnlockKind,
    pub unlocked_at: u64,
}

/// Combined answer for the tier-and-unlockables read: the current tier
/// (`None` below Bronze) and whatever became reachable since last asked.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TierStatus {
    pub tier: Option<PointTier>,
    pub newly_unlocked: Vec<Unlockable>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    pub ledger: Address,
    pub nft: Option<Address>,
}

#[contracttype]
pub enum DataKey {
    Config,                    // Instance
    Unlocked(Address, Symbol), // Persistent: UnlockRecord
    UnlockList(Address),       // Persistent: Vec<UnlockRecord>
}

// ─────────────────────────────────────────────────────────────
// Errors & Events
// ─────────────────────────────────────────────────────────────

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TierError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    TotalUnavailable = 4,
}

const EVT_UNLOCK: Symbol = symbol_short!("unlock");
const EVT_MINT_FAIL: Symbol = symbol_short!("mint_fail");

// ─────────────────────────────────────────────────────────────
// Static tables
// ─────────────────────────────────────────────────────────────

/// Point tiers, ascending and strictly increasing in `min_points`. A
/// user's tier is the highest row at or below their total.
fn point_tiers(env: &Env) -> Vec<PointTier> {
    Vec::from_array(
        env,
        [
            PointTier {
                tier: Tier::Bronze,
                min_points: 1_000,
                rewards: Vec::from_array(env, [Symbol::new(env, "newsletter")]),
            },
            PointTier {
                tier: Tier::Silver,
                min_points: 2_500,
                rewards: Vec::from_array(
                    env,
                    [Symbol::new(env, "newsletter"), Symbol::new(env, "event_invites")],
                ),
            },
            PointTier {
                tier: Tier::Gold,
                min_points: 5_000,
                rewards: Vec::from_array(
                    env,
                    [
                        Symbol::new(env, "newsletter"),
                        Symbol::new(env, "event_invites"),
                        Symbol::new(env, "campus_tour"),
                    ],
                ),
            },
            PointTier {
                tier: Tier::Platinum,
                min_points: 10_000,
                rewards: Vec::from_array(
                    env,
                    [
                        Symbol::new(env, "newsletter"),
                        Symbol::new(env, "event_invites"),
                        Symbol::new(env, "campus_tour"),
                        Symbol::new(env, "gala_dinner"),
                    ],
                ),
            },
        ],
    )
}

fn unlockables(env: &Env) -> Vec<Unlockable> {
    fn entry(env: &Env, id: &str, kind: UnlockKind, threshold: i128) -> Unlockable {
        Unlockable {
            id: Symbol::new(env, id),
            kind,
            threshold,
        }
    }
    Vec::from_array(
        env,
        [
            entry(env, "insider_guide", UnlockKind::Content, 500),
            entry(env, "video_library", UnlockKind::Content, 1_000),
            entry(env, "alumni_stories", UnlockKind::Content, 2_500),
            entry(env, "mentor_session", UnlockKind::Content, 5_000),
            entry(env, "bronze_medallion", UnlockKind::Nft, 1_000),
            entry(env, "silver_medallion", UnlockKind::Nft, 2_500),
            entry(env, "gold_medallion", UnlockKind::Nft, 5_000),
            entry(env, "founders_medallion", UnlockKind::Nft, 10_000),
        ],
    )
}

// ─────────────────────────────────────────────────────────────
// Contract
// ─────────────────────────────────────────────────────────────

#[contract]
pub struct TierRewards;

#[contractimpl]
impl TierRewards {
    pub fn initialize(
        env: Env,
        admin: Address,
        ledger: Address,
        nft: Option<Address>,
    ) -> Result<(), TierError> {
        if env.storage().instance().has(&DataKey::Config) {
            return Err(TierError::AlreadyInitialized);
        }
        admin.require_auth();
        env.storage()
            .instance()
            .set(&DataKey::Config, &Config { admin, ledger, nft });
        Ok(())
    }

    pub fn set_nft_contract(env: Env, admin: Address, nft: Address) -> Result<(), TierError> {
        admin.require_auth();
        let mut cfg = Self::cfg(&env)?;
        if cfg.admin != admin {
            return Err(TierError::Unauthorized);
        }
        cfg.nft = Some(nft);
        env.storage().instance().set(&DataKey::Config, &cfg);
        Ok(())
    }

    /// Highest tier at or below the user's total; `None` below Bronze.
    pub fn resolve_tier(env: Env, user: Address) -> Result<Option<PointTier>, TierError> {
        let cfg = Self::cfg(&env)?;
        let total = Self::fetch_total(&env, &cfg, &user)?;
        Ok(Self::tier_for(&env, total))
    }

    /// Record and return every unlockable the user now qualifies for and
    /// has not unlocked before. Already-unlocked items are never
    /// re-reported.
    pub fn resolve_unlockables(env: Env, user: Address) -> Result<Vec<Unlockable>, TierError> {
        let cfg = Self::cfg(&env)?;
        let total = Self::fetch_total(&env, &cfg, &user)?;
        Ok(Self::unlock_new(&env, &cfg, &user, total))
    }

    /// Tier and new unlocks in one read, off a single total fetch.
    pub fn tier_status(env: Env, user: Address) -> Result<TierStatus, TierError> {
        let cfg = Self::cfg(&env)?;
        let total = Self::fetch_total(&env, &cfg, &user)?;
        Ok(TierStatus {
            tier: Self::tier_for(&env, total),
            newly_unlocked: Self::unlock_new(&env, &cfg, &user, total),
        })
    }

    // Views

    pub fn get_unlocks(env: Env, user: Address) -> Vec<UnlockRecord> {
        env.storage()
            .persistent()
            .get(&DataKey::UnlockList(user))
            .unwrap_or(Vec::new(&env))
    }

    pub fn has_unlocked(env: Env, user: Address, unlockable_id: Symbol) -> bool {
        env.storage()
            .persistent()
            .has(&DataKey::Unlocked(user, unlockable_id))
    }

    pub fn list_tiers(env: Env) -> Vec<PointTier> {
        point_tiers(&env)
    }

    pub fn list_unlockables(env: Env) -> Vec<Unlockable> {
        unlockables(&env)
    }

    // ────────────────────────────────
    // Internal helpers
    // ────────────────────────────────

    fn cfg(env: &Env) -> Result<Config, TierError> {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(TierError::NotInitialized)
    }

    fn fetch_total(env: &Env, cfg: &Config, user: &Address) -> Result<i128, TierError> {
        let ledger = PointsLedgerClient::new(env, &cfg.ledger);
        match ledger.try_get_total(user) {
            Ok(Ok(total)) => Ok(total),
            _ => Err(TierError::TotalUnavailable),
        }
    }

    fn tier_for(env: &Env, total: i128) -> Option<PointTier> {
        let mut current = None;
        for tier in point_tiers(env).iter() {
            if tier.min_points <= total {
                current = Some(tier);
            } else {
                break;
            }
        }
        current
    }

    fn unlock_new(env: &Env, cfg: &Config, user: &Address, total: i128) -> Vec<Unlockable> {
        let mut newly = Vec::new(env);
        let now = env.ledger().timestamp();
        for unlockable in unlockables(env).iter() {
            if total < unlockable.threshold {
                continue;
            }
            if env
                .storage()
                .persistent()
                .has(&DataKey::Unlocked(user.clone(), unlockable.id.clone()))
            {
                continue;
            }

            // The record is written before the mint attempt, so a failed
            // mint cannot re-report the unlockable later.
            let record = UnlockRecord {
                id: unlockable.id.clone(),
                kind: unlockable.kind,
                unlocked_at: now,
            };
            env.storage().persistent().set(
                &DataKey::Unlocked(user.clone(), unlockable.id.clone()),
                &record,
            );
            let mut list: Vec<UnlockRecord> = env
                .storage()
                .persistent()
                .get(&DataKey::UnlockList(user.clone()))
                .unwrap_or(Vec::new(env));
            list.push_back(record);
            env.storage()
                .persistent()
                .set(&DataKey::UnlockList(user.clone()), &list);

            if unlockable.kind == UnlockKind::Nft {
                if let Some(nft) = &cfg.nft {
                    let minter = RewardNftClient::new(env, nft);
                    let minted = minter.try_mint(
                        user,
                        &unlockable.id,
                        &String::from_str(env, "Recruit Rewards Medallion"),
                    );
                    if minted.is_err() {
                        env.events()
                            .publish((EVT_MINT_FAIL, user.clone()), unlockable.id.clone());
                    }
                }
            }

            env.events()
                .publish((EVT_UNLOCK, user.clone()), unlockable.id.clone());
            newly.push_back(unlockable);
        }
        newly
    }
}

// ─────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────
