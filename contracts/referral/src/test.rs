#![cfg(test)]

use super::*;
use points_ledger::PointsLedger;
use soroban_sdk::{testutils::Address as _, Address, Env};

fn setup(env: &Env) -> (ReferralContractClient<'_>, PointsLedgerClient<'_>, Address) {
    env.mock_all_auths();
    let admin = Address::generate(env);

    let ledger_id = env.register_contract(None, PointsLedger);
    let ledger = PointsLedgerClient::new(env, &ledger_id);
    ledger.initialize(&admin, &75i128);

    let referral_id = env.register_contract(None, ReferralContract);
    let client = ReferralContractClient::new(env, &referral_id);
    client.initialize(&admin, &ledger_id);

    (client, ledger, admin)
}

#[test]
fn test_initialize_once() {
    let env = Env::default();
    let (client, _ledger, admin) = setup(&env);
    let err = client.try_initialize(&admin, &Address::generate(&env));
    assert_eq!(err, Err(Ok(ReferralError::AlreadyInitialized)));
}

#[test]
fn test_register_referral() {
    let env = Env::default();
    let (client, _ledger, _admin) = setup(&env);

    let referrer = Address::generate(&env);
    let referred = Address::generate(&env);

    let id = client.register_referral(&referrer, &referred);
    assert_eq!(id, 1);

    let record = client.get_referral(&referred).unwrap();
    assert_eq!(record.referrer, referrer);
    assert_eq!(record.status, ReferralStatus::Pending);

    let list = client.get_referrals(&referrer);
    assert_eq!(list.len(), 1);
    assert_eq!(list.get(0), Some(referred));

    let stats = client.get_statistics();
    assert_eq!(stats.total_referrals, 1);
    assert_eq!(stats.converted_referrals, 0);

    // Pending referrals are not conversions yet.
    assert_eq!(client.get_converted_count(&referrer), 0);
}

#[test]
fn test_self_referral_rejected() {
    let env = Env::default();
    let (client, _ledger, _admin) = setup(&env);
    let user = Address::generate(&env);

    let err = client.try_register_referral(&user, &user);
    assert_eq!(err, Err(Ok(ReferralError::SelfReferral)));
}

#[test]
fn test_double_registration_rejected() {
    let env = Env::default();
    let (client, _ledger, _admin) = setup(&env);

    let referrer_a = Address::generate(&env);
    let referrer_b = Address::generate(&env);
    let referred = Address::generate(&env);

    client.register_referral(&referrer_a, &referred);
    let err = client.try_register_referral(&referrer_b, &referred);
    assert_eq!(err, Err(Ok(ReferralError::AlreadyReferred)));
}

#[test]
fn test_signup_award_on_applied() {
    let env = Env::default();
    let (client, ledger, _admin) = setup(&env);

    let referrer = Address::generate(&env);
    let referred = Address::generate(&env);
    ledger.register_user(&referrer);

    client.register_referral(&referrer, &referred);
    client.advance_status(&referred, &ReferralStatus::Applied);

    let record = client.get_referral(&referred).unwrap();
    assert_eq!(record.status, ReferralStatus::Applied);

    assert_eq!(client.get_converted_count(&referrer), 1);
    assert_eq!(ledger.get_total(&referrer), 100);
}

#[test]
fn test_hire_award_scenario() {
    // Referral reaching "hired" is a flat +500 on top of the signup +100.
    let env = Env::default();
    let (client, ledger, _admin) = setup(&env);

    let referrer = Address::generate(&env);
    let referred = Address::generate(&env);
    ledger.register_user(&referrer);

    client.register_referral(&referrer, &referred);
    client.advance_status(&referred, &ReferralStatus::Applied);
    client.advance_status(&referred, &ReferralStatus::Interview);
    client.advance_status(&referred, &ReferralStatus::Hired);

    assert_eq!(ledger.get_total(&referrer), 600);
    assert_eq!(client.get_converted_count(&referrer), 1);

    let stats = client.get_statistics();
    assert_eq!(stats.converted_referrals, 1);
    assert_eq!(stats.hired_referrals, 1);
}

#[test]
fn test_skip_to_hired_awards_both_milestones() {
    let env = Env::default();
    let (client, ledger, _admin) = setup(&env);

    let referrer = Address::generate(&env);
    let referred = Address::generate(&env);
    ledger.register_user(&referrer);

    client.register_referral(&referrer, &referred);
    client.advance_status(&referred, &ReferralStatus::Hired);

    assert_eq!(ledger.get_total(&referrer), 600);
    assert_eq!(client.get_converted_count(&referrer), 1);
}

#[test]
fn test_backward_transition_rejected() {
    let env = Env::default();
    let (client, ledger, _admin) = setup(&env);

    let referrer = Address::generate(&env);
    let referred = Address::generate(&env);
    ledger.register_user(&referrer);

    client.register_referral(&referrer, &referred);
    client.advance_status(&referred, &ReferralStatus::Interview);

    let err = client.try_advance_status(&referred, &ReferralStatus::Applied);
    assert_eq!(err, Err(Ok(ReferralError::InvalidTransition)));

    let err = client.try_advance_status(&referred, &ReferralStatus::Interview);
    assert_eq!(err, Err(Ok(ReferralError::InvalidTransition)));
}

#[test]
fn test_unknown_referral() {
    let env = Env::default();
    let (client, _ledger, _admin) = setup(&env);

    let err = client.try_advance_status(&Address::generate(&env), &ReferralStatus::Applied);
    assert_eq!(err, Err(Ok(ReferralError::NotFound)));
}

#[test]
fn test_failed_award_does_not_block_transition() {
    let env = Env::default();
    let (client, ledger, _admin) = setup(&env);

    // Referrer never registered with the ledger: the accrual fails, the
    // pipeline still moves.
    let referrer = Address::generate(&env);
    let referred = Address::generate(&env);

    client.register_referral(&referrer, &referred);
    client.advance_status(&referred, &ReferralStatus::Applied);

    let record = client.get_referral(&referred).unwrap();
    assert_eq!(record.status, ReferralStatus::Applied);
    assert_eq!(client.get_converted_count(&referrer), 1);
    assert_eq!(ledger.get_total(&referrer), 0);
}
