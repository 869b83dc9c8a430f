#![no_std]

mod catalog;
mod storage;
pub mod types;


use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, Map, String, Symbol, Vec};

use points_ledger::types::{Activity, BadgeId};
use points_ledger::PointsLedgerClient;
use referral::ReferralContractClient;

use crate::storage::Storage;
use crate::types::*;

const EVT_BADGE: Symbol = symbol_short!("badge");
const EVT_RWD_FAIL: Symbol = symbol_short!("rwd_fail");

#[contract]
pub struct Badges;

#[contractimpl]
impl Badges {
    /// Initialize with the points ledger that backs activity counters and
    /// receives badge-point accruals. The referral source can be wired
    /// later; until then, referral-count badges evaluate as incomplete.
    pub fn initialize(
        env: Env,
        admin: Address,
        ledger: Address,
        referral: Option<Address>,
    ) -> Result<(), BadgeError> {
        if Storage::has_config(&env) {
            return Err(BadgeError::AlreadyInitialized);
        }
        admin.require_auth();
        Storage::set_config(&env, &Config {
            admin,
            ledger,
            referral,
        });
        Ok(())
    }

    pub fn set_referral_source(env: Env, admin: Address, referral: Address) -> Result<(), BadgeError> {
        admin.require_auth();
        let mut cfg = Storage::config(&env)?;
        if cfg.admin != admin {
            return Err(BadgeError::Unauthorized);
        }
        cfg.referral = Some(referral);
        Storage::set_config(&env, &cfg);
        Ok(())
    }

    /// One evaluation pass over the whole catalog.
    ///
    /// Walks badges in catalog order, skips ones the user already owns,
    /// and awards every badge whose requirements all hold right now, not
    /// just the first. Each counter is fetched at most once per pass. A
    /// badge whose counters could not all be read is reported under
    /// `incomplete` and left unawarded; an unreachable ledger fails the
    /// whole pass instead.
    ///
    /// Every new award is recorded (at most once per user and badge,
    /// never retracted) and the badge's own points are accrued through
    /// the ledger. Those points land in the total read by the tier
    /// resolver, but no requirement is phrased over points, so the pass
    /// never re-enters itself.
    pub fn evaluate(env: Env, user: Address) -> Result<EvaluationReport, BadgeError> {
        let cfg = Storage::config(&env)?;
        let ledger = PointsLedgerClient::new(&env, &cfg.ledger);
        if ledger.try_is_registered(&user).is_err() {
            return Err(BadgeError::EvaluationIncomplete);
        }

        let mut fetched: Map<Counter, Option<u64>> = Map::new(&env);
        let mut newly_awarded: Vec<BadgeDef> = Vec::new(&env);
        let mut incomplete: Vec<BadgeId> = Vec::new(&env);
        let now = env.ledger().timestamp();

        for def in catalog::badges(&env).iter() {
            if Storage::has_award(&env, &user, &def.id) {
                continue;
            }

            let mut all_met = true;
            let mut decided = true;
            for requirement in def.requirements.iter() {
                let count = match fetched.get(requirement.counter) {
                    Some(cached) => cached,
                    None => {
                        let fresh =
                            Self::fetch_counter(&env, &cfg, &ledger, &user, &requirement.counter);
                        fetched.set(requirement.counter, fresh);
                        fresh
                    }
                };
                match count {
                    None => decided = false,
                    Some(n) if n >= requirement.at_least => {}
                    Some(_) => all_met = false,
                }
            }
            if !decided {
                // A known miss decides the badge; an unreadable counter
                // only makes it incomplete.
                if all_met {
                    incomplete.push_back(def.id);
                }
                continue;
            }
            if !all_met {
                continue;
            }

            Storage::push_award(&env, &user, &BadgeAward {
                badge: def.id,
                earned_at: now,
            });
            let accrued = ledger.try_accrue(
                &user,
                &Activity::BadgeEarned(def.id),
                &0i128,
                &String::from_str(&env, "badge award"),
                &None,
            );
            if accrued.is_err() {
                env.events().publish((EVT_RWD_FAIL, user.clone()), def.id);
            }
            env.events().publish((EVT_BADGE, user.clone()), def.id);
            newly_awarded.push_back(def);
        }

        Ok(EvaluationReport {
            newly_awarded,
            incomplete,
        })
    }

    // ────────────────────────────────
    // Views
    // ────────────────────────────────

    pub fn get_awards(env: Env, user: Address) -> Vec<BadgeAward> {
        Storage::awards(&env, &user)
    }

    pub fn has_badge(env: Env, user: Address, badge: BadgeId) -> bool {
        Storage::has_award(&env, &user, &badge)
    }

    pub fn list_badges(env: Env) -> Vec<BadgeDef> {
        catalog::badges(&env)
    }

    // ────────────────────────────────
    // Internal helpers
    // ────────────────────────────────

    fn fetch_counter(
        env: &Env,
        cfg: &Config,
        ledger: &PointsLedgerClient<'_>,
        user: &Address,
        counter: &Counter,
    ) -> Option<u64> {
        let activity = match counter {
            Counter::ConvertedReferrals => {
                let source = cfg.referral.clone()?;
                let referrals = ReferralContractClient::new(env, &source);
                return match referrals.try_get_converted_count(user) {
                    Ok(Ok(count)) => Some(count as u64),
                    _ => None,
                };
            }
            Counter::ChatMessages => Activity::ChatMessage,
            Counter::PracticeTests => Activity::PracticeTest,
            Counter::DocumentDownloads => Activity::DocumentDownload,
            Counter::SocialShares => Activity::SocialShare,
            Counter::TriviaAnswers => Activity::TriviaCorrect,
            Counter::ApplicationsSubmitted => Activity::ApplicationSubmitted,
        };
        match ledger.try_get_activity_count(user, &activity) {
            Ok(Ok(count)) => Some(count),
            _ => None,
        }
    }
}
