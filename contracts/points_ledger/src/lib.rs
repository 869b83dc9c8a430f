#![no_std]

mod catalog;
mod storage;
pub mod types;


use soroban_sdk::{
    contract, contractimpl, symbol_short, Address, BytesN, Env, String, Symbol, Vec,
};

use crate::storage::*;
use crate::types::*;

const EVT_ACCRUE: Symbol = symbol_short!("accrue");
const EVT_REPLAY: Symbol = symbol_short!("replay");
const EVT_REGISTER: Symbol = symbol_short!("register");

const SECONDS_PER_DAY: u64 = 86_400;

// Upper bound on per-unit context values. Caps the point multiplication
// well below i128 range.
const MAX_UNITS: i128 = 1_000_000_000;

#[contract]
pub struct PointsLedger;

#[contractimpl]
impl PointsLedger {
    pub fn initialize(env: Env, admin: Address, share_daily_cap: i128) -> Result<(), LedgerError> {
        if has_config(&env) {
            return Err(LedgerError::AlreadyInitialized);
        }
        admin.require_auth();
        if share_daily_cap <= 0 {
            return Err(LedgerError::InvalidParams);
        }
        set_config(&env, &Config {
            admin,
            share_daily_cap,
        });
        env.storage().instance().set(&DataKey::NextEntryId, &1u64);
        Ok(())
    }

    /// Adjust the per-day point cap on social shares (admin only).
    pub fn set_share_daily_cap(
        env: Env,
        admin: Address,
        share_daily_cap: i128,
    ) -> Result<(), LedgerError> {
        admin.require_auth();
        let mut cfg = get_config(&env)?;
        if cfg.admin != admin {
            return Err(LedgerError::Unauthorized);
        }
        if share_daily_cap <= 0 {
            return Err(LedgerError::InvalidParams);
        }
        cfg.share_daily_cap = share_daily_cap;
        set_config(&env, &cfg);
        Ok(())
    }

    /// Create the user's profile. Registering an existing user is a no-op.
    pub fn register_user(env: Env, user: Address) -> Result<(), LedgerError> {
        get_config(&env)?;
        user.require_auth();
        if get_user(&env, &user).is_some() {
            return Ok(());
        }
        let joined_at = env.ledger().timestamp();
        set_user(&env, &user, &UserProfile { joined_at });
        env.events().publish((EVT_REGISTER, user), joined_at);
        Ok(())
    }

    /// Record one user activity and award its points.
    ///
    /// `units` carries the per-unit context (whole dollars donated, messages
    /// sent, active minutes) and must be zero for fixed-point activities.
    /// When `idem_key` is given, a replay of the same key returns the
    /// original receipt without appending a second entry, so retried
    /// requests cannot double-award.
    ///
    /// Daily caps clip the award to whatever headroom is left for the
    /// `(user, activity)` pair in the current UTC day, re-summed from
    /// today's ledger entries. A fully capped accrual still appends a
    /// zero-point entry and advances the activity counter: the action
    /// happened, only the points stop.
    pub fn accrue(
        env: Env,
        user: Address,
        activity: Activity,
        units: i128,
        note: String,
        idem_key: Option<BytesN<32>>,
    ) -> Result<AccrualReceipt, LedgerError> {
        let cfg = get_config(&env)?;
        user.require_auth();
        if get_user(&env, &user).is_none() {
            return Err(LedgerError::UserNotFound);
        }

        if let Some(key) = &idem_key {
            if let Some(prior) = get_dedup(&env, &user, key) {
                env.events().publish((EVT_REPLAY, user), prior.entry_id);
                return Ok(prior);
            }
        }

        let def = catalog::definition(&activity);
        let mut entries = get_entries(&env, &user);
        let now = env.ledger().timestamp();

        let points = match def.per_unit {
            None => {
                if units != 0 {
                    return Err(LedgerError::InvalidContext);
                }
                def.base_points
            }
            Some(per_unit) => {
                if units <= 0 || units > MAX_UNITS {
                    return Err(LedgerError::InvalidContext);
                }
                let raw = per_unit.points_per_unit * units;
                let cap = match activity {
                    Activity::SocialShare => Some(cfg.share_daily_cap),
                    _ => per_unit.daily_cap,
                };
                match cap {
                    None => raw,
                    Some(cap) => {
                        let today = day_index(now);
                        let spent = points_today(&entries, &activity, today);
                        raw.min((cap - spent).max(0))
                    }
                }
            }
        };

        let entry = PointLedgerEntry {
            id: next_entry_id(&env),
            activity,
            units,
            points,
            note,
            created_at: now,
        };
        entries.push_back(entry.clone());
        set_entries(&env, &user, &entries);

        let new_total = get_total(&env, &user) + points;
        set_total(&env, &user, new_total);

        let actions = if def.per_unit.is_some() { units as u64 } else { 1 };
        bump_count(&env, &user, &activity, actions);

        let receipt = AccrualReceipt {
            entry_id: entry.id,
            points,
            new_total,
        };
        if let Some(key) = &idem_key {
            set_dedup(&env, &user, key, &receipt);
        }

        env.events().publish((EVT_ACCRUE, user), (points, new_total));
        Ok(receipt)
    }

    // ────────────────────────────────
    // Views
    // ────────────────────────────────

    pub fn is_registered(env: Env, user: Address) -> bool {
        get_user(&env, &user).is_some()
    }

    pub fn get_total(env: Env, user: Address) -> i128 {
        get_total(&env, &user)
    }

    /// Fold of the entry list. Always equals `get_total`; exposed so the
    /// cached total can be reconciled against the ledger.
    pub fn audit_total(env: Env, user: Address) -> i128 {
        let entries = get_entries(&env, &user);
        let mut sum: i128 = 0;
        for entry in entries.iter() {
            sum += entry.points;
        }
        sum
    }

    pub fn get_history(env: Env, user: Address) -> Vec<PointLedgerEntry> {
        get_entries(&env, &user)
    }

    /// How often the user performed an activity. Unit-denominated for
    /// per-unit activities (messages, shares, answers), call-denominated
    /// for fixed ones. Badge requirements are predicates over these.
    pub fn get_activity_count(env: Env, user: Address, activity: Activity) -> u64 {
        get_count(&env, &user, &activity)
    }

    pub fn get_config(env: Env) -> Result<Config, LedgerError> {
        get_config(&env)
    }
}

fn day_index(timestamp: u64) -> u64 {
    timestamp / SECONDS_PER_DAY
}

fn points_today(entries: &Vec<PointLedgerEntry>, activity: &Activity, today: u64) -> i128 {
    let mut spent: i128 = 0;
    for i in (0..entries.len()).rev() {
        let entry = entries.get(i).unwrap();
        if day_index(entry.created_at) < today {
            break;
        }
        if entry.activity == *activity {
            spent += entry.points;
        }
    }
    spent
}
