use soroban_sdk::{Address, Env, Vec};

use points_ledger::types::BadgeId;

use crate::types::{BadgeAward, BadgeError, Config, DataKey};

pub struct Storage;

impl Storage {
    pub fn has_config(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Config)
    }

    pub fn set_config(env: &Env, config: &Config) {
        env.storage().instance().set(&DataKey::Config, config);
    }

    pub fn config(env: &Env) -> Result<Config, BadgeError> {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(BadgeError::NotInitialized)
    }

    pub fn has_award(env: &Env, user: &Address, badge: &BadgeId) -> bool {
        env.storage()
            .persistent()
            .has(&DataKey::Award(user.clone(), *badge))
    }

    pub fn push_award(env: &Env, user: &Address, award: &BadgeAward) {
        env.storage()
            .persistent()
            .set(&DataKey::Award(user.clone(), award.badge), award);
        let mut list = Self::awards(env, user);
        list.push_back(award.clone());
        env.storage()
            .persistent()
            .set(&DataKey::AwardList(user.clone()), &list);
    }

    pub fn awards(env: &Env, user: &Address) -> Vec<BadgeAward> {
        env.storage()
            .persistent()
            .get(&DataKey::AwardList(user.clone()))
            .unwrap_or(Vec::new(env))
    }
}
