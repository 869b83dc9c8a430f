#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, symbol_short, Address, Env, String,
    Symbol, Vec,
};

use points_ledger::types::Activity;
use points_ledger::PointsLedgerClient;

//
// ──────────────────────────────────────────────────────────
// DATA KEYS
// ──────────────────────────────────────────────────────────
//

#[contracttype]
pub enum DataKey {
    /// Contract configuration
    Config,
    /// Global referral statistics
    Stats,
    /// Counter for referral record ids
    NextReferralId,
    /// Maps referred Address to their ReferralRecord
    Referral(Address),
    /// Maps referrer Address to list of referred Addresses
    ReferralsList(Address),
    /// Maps referrer Address to count of referrals past Pending (u32)
    ConvertedCount(Address),
}

//
// ──────────────────────────────────────────────────────────
// TYPES
// ──────────────────────────────────────────────────────────
//

/// Pipeline position of a referred candidate. Transitions only move
/// forward; `Pending` means invited but not yet signed up.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReferralStatus {
    Pending,
    Applied,
    Interview,
    Background,
    Hired,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReferralRecord {
    pub id: u64,
    pub referrer: Address,
    pub referred: Address,
    pub status: ReferralStatus,
    pub created_at: u64,
    pub updated_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReferralStats {
    pub total_referrals: u32,
    pub converted_referrals: u32,
    pub hired_referrals: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    pub ledger: Address,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ReferralError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    NotFound = 4,
    SelfReferral = 5,
    AlreadyReferred = 6,
    InvalidTransition = 7,
}

const EVT_REFER: Symbol = symbol_short!("refer");
const EVT_STATUS: Symbol = symbol_short!("status");
const EVT_RWD_FAIL: Symbol = symbol_short!("rwd_fail");

const RANK_APPLIED: u32 = 1;
const RANK_HIRED: u32 = 4;

fn rank(status: &ReferralStatus) -> u32 {
    match status {
        ReferralStatus::Pending => 0,
        ReferralStatus::Applied => RANK_APPLIED,
        ReferralStatus::Interview => 2,
        ReferralStatus::Background => 3,
        ReferralStatus::Hired => RANK_HIRED,
    }
}

//
// ──────────────────────────────────────────────────────────
// CONTRACT
// ──────────────────────────────────────────────────────────
//

#[contract]
pub struct ReferralContract;

#[contractimpl]
impl ReferralContract {
    // ───────────── INITIALIZATION ─────────────

    /// Initialize with the admin who advances referral statuses and the
    /// points ledger that receives signup/hire awards.
    pub fn initialize(env: Env, admin: Address, ledger: Address) -> Result<(), ReferralError> {
        if env.storage().instance().has(&DataKey::Config) {
            return Err(ReferralError::AlreadyInitialized);
        }
        admin.require_auth();

        env.storage()
            .instance()
            .set(&DataKey::Config, &Config { admin, ledger });
        env.storage().instance().set(&DataKey::NextReferralId, &1u64);
        env.storage().instance().set(
            &DataKey::Stats,
            &ReferralStats {
                total_referrals: 0,
                converted_referrals: 0,
                hired_referrals: 0,
            },
        );
        Ok(())
    }

    // ───────────── REGISTRATION ─────────────

    /// Record that `referred` joined through `referrer`. The record starts
    /// `Pending`; points only flow once the candidate moves forward.
    pub fn register_referral(
        env: Env,
        referrer: Address,
        referred: Address,
    ) -> Result<u64, ReferralError> {
        Self::config(&env)?;
        referred.require_auth();

        if referrer == referred {
            return Err(ReferralError::SelfReferral);
        }
        if env
            .storage()
            .persistent()
            .has(&DataKey::Referral(referred.clone()))
        {
            return Err(ReferralError::AlreadyReferred);
        }

        let id: u64 = env
            .storage()
            .instance()
            .get(&DataKey::NextReferralId)
            .unwrap_or(1);
        env.storage()
            .instance()
            .set(&DataKey::NextReferralId, &(id + 1));

        let now = env.ledger().timestamp();
        let record = ReferralRecord {
            id,
            referrer: referrer.clone(),
            referred: referred.clone(),
            status: ReferralStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        env.storage()
            .persistent()
            .set(&DataKey::Referral(referred.clone()), &record);

        let mut list: Vec<Address> = env
            .storage()
            .persistent()
            .get(&DataKey::ReferralsList(referrer.clone()))
            .unwrap_or(Vec::new(&env));
        list.push_back(referred.clone());
        env.storage()
            .persistent()
            .set(&DataKey::ReferralsList(referrer.clone()), &list);

        let mut stats = Self::stats(&env);
        stats.total_referrals += 1;
        env.storage().instance().set(&DataKey::Stats, &stats);

        env.events().publish((EVT_REFER, referred), (referrer, id));
        Ok(id)
    }

    // ───────────── STATUS PIPELINE ─────────────

    /// Advance a referral along the pipeline (admin only). Skipping stages
    /// forward is allowed; moving backward or standing still is not. The
    /// first departure from `Pending` counts the referral as converted.
    /// Crossing `Applied` awards the referrer signup points, crossing
    /// `Hired` the hire points; a failed award is published and does not
    /// block the transition.
    pub fn advance_status(
        env: Env,
        referred: Address,
        status: ReferralStatus,
    ) -> Result<(), ReferralError> {
        let cfg = Self::config(&env)?;
        cfg.admin.require_auth();

        let mut record: ReferralRecord = env
            .storage()
            .persistent()
            .get(&DataKey::Referral(referred.clone()))
            .ok_or(ReferralError::NotFound)?;

        let old = rank(&record.status);
        let new = rank(&status);
        if new <= old {
            return Err(ReferralError::InvalidTransition);
        }

        let mut stats = Self::stats(&env);
        if record.status == ReferralStatus::Pending {
            let converted: u32 = env
                .storage()
                .persistent()
                .get(&DataKey::ConvertedCount(record.referrer.clone()))
                .unwrap_or(0);
            env.storage().persistent().set(
                &DataKey::ConvertedCount(record.referrer.clone()),
                &(converted + 1),
            );
            stats.converted_referrals += 1;
        }

        if old < RANK_APPLIED && new >= RANK_APPLIED {
            Self::award_referrer(
                &env,
                &cfg,
                &record.referrer,
                Activity::ReferralSignup,
                "referral signup",
            );
        }
        if old < RANK_HIRED && new >= RANK_HIRED {
            Self::award_referrer(
                &env,
                &cfg,
                &record.referrer,
                Activity::ReferralHired,
                "referral hired",
            );
            stats.hired_referrals += 1;
        }
        env.storage().instance().set(&DataKey::Stats, &stats);

        record.status = status;
        record.updated_at = env.ledger().timestamp();
        env.storage()
            .persistent()
            .set(&DataKey::Referral(referred.clone()), &record);

        env.events()
            .publish((EVT_STATUS, referred), (record.referrer, status));
        Ok(())
    }

    fn award_referrer(env: &Env, cfg: &Config, referrer: &Address, activity: Activity, note: &str) {
        let ledger = PointsLedgerClient::new(env, &cfg.ledger);
        let result = ledger.try_accrue(
            referrer,
            &activity,
            &0i128,
            &String::from_str(env, note),
            &None,
        );
        if result.is_err() {
            env.events()
                .publish((EVT_RWD_FAIL, referrer.clone()), activity);
        }
    }

    // ───────────── VIEWS ─────────────

    pub fn get_referral(env: Env, referred: Address) -> Option<ReferralRecord> {
        env.storage().persistent().get(&DataKey::Referral(referred))
    }

    pub fn get_referrals(env: Env, referrer: Address) -> Vec<Address> {
        env.storage()
            .persistent()
            .get(&DataKey::ReferralsList(referrer))
            .unwrap_or(Vec::new(&env))
    }

    /// Referrals past `Pending` for this referrer. Referral-tier badges
    /// are evaluated over this counter, never over the points awarded.
    pub fn get_converted_count(env: Env, referrer: Address) -> u32 {
        env.storage()
            .persistent()
            .get(&DataKey::ConvertedCount(referrer))
            .unwrap_or(0)
    }

    pub fn get_statistics(env: Env) -> ReferralStats {
        Self::stats(&env)
    }

    // ───────────── HELPERS ─────────────

    fn config(env: &Env) -> Result<Config, ReferralError> {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(ReferralError::NotInitialized)
    }

    fn stats(env: &Env) -> ReferralStats {
        env.storage().instance().get(&DataKey::Stats).unwrap_or(ReferralStats {
            total_referrals: 0,
            converted_referrals: 0,
            hired_referrals: 0,
        })
    }
}

#[cfg(test)]
mod test;
