use soroban_sdk::{Address, BytesN, Env, Vec};

use crate::types::{AccrualReceipt, Activity, Config, DataKey, LedgerError, PointLedgerEntry, UserProfile};

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_config(env: &Env) -> Result<Config, LedgerError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(LedgerError::NotInitialized)
}

pub fn next_entry_id(env: &Env) -> u64 {
    let id: u64 = env
        .storage()
        .instance()
        .get(&DataKey::NextEntryId)
        .unwrap_or(1);
    env.storage().instance().set(&DataKey::NextEntryId, &(id + 1));
    id
}

pub fn get_user(env: &Env, user: &Address) -> Option<UserProfile> {
    env.storage().persistent().get(&DataKey::User(user.clone()))
}

pub fn set_user(env: &Env, user: &Address, profile: &UserProfile) {
    env.storage()
        .persistent()
        .set(&DataKey::User(user.clone()), profile);
}

pub fn get_entries(env: &Env, user: &Address) -> Vec<PointLedgerEntry> {
    env.storage()
        .persistent()
        .get(&DataKey::Entries(user.clone()))
        .unwrap_or(Vec::new(env))
}

pub fn set_entries(env: &Env, user: &Address, entries: &Vec<PointLedgerEntry>) {
    env.storage()
        .persistent()
        .set(&DataKey::Entries(user.clone()), entries);
}

pub fn get_total(env: &Env, user: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Total(user.clone()))
        .unwrap_or(0)
}

pub fn set_total(env: &Env, user: &Address, total: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Total(user.clone()), &total);
}

pub fn get_count(env: &Env, user: &Address, activity: &Activity) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::Count(user.clone(), *activity))
        .unwrap_or(0)
}

pub fn bump_count(env: &Env, user: &Address, activity: &Activity, by: u64) {
    let current = get_count(env, user, activity);
    env.storage()
        .persistent()
        .set(&DataKey::Count(user.clone(), *activity), &(current + by));
}

pub fn get_dedup(env: &Env, user: &Address, key: &BytesN<32>) -> Option<AccrualReceipt> {
    env.storage()
        .persistent()
        .get(&DataKey::Dedup(user.clone(), key.clone()))
}

pub fn set_dedup(env: &Env, user: &Address, key: &BytesN<32>, receipt: &AccrualReceipt) {
    env.storage()
        .persistent()
        .set(&DataKey::Dedup(user.clone(), key.clone()), receipt);
}
