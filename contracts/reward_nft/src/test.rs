#![cfg(test)]

use super::*;
use soroban_sdk::{testutils::Address as _, Address, Env, String, Symbol};

#[test]
fn test_medallion_lifecycle() {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register_contract(None, RewardNft);
    let client = RewardNftClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let minter = Address::generate(&env);
    let user_a = Address::generate(&env);
    let user_b = Address::generate(&env);

    client.initialize(&admin, &minter);

    let unlockable = Symbol::new(&env, "bronze_medallion");
    let metadata = String::from_str(&env, "Recruit Rewards Medallion");
    let token_id = client.mint(&user_a, &unlockable, &metadata);

    assert_eq!(token_id, 1u32);
    assert_eq!(client.total_supply(), 1u32);
    assert_eq!(client.owner_of(&token_id), user_a);

    let medallion = client.get_medallion(&token_id).unwrap();
    assert_eq!(medallion.unlockable_id, unlockable);
    assert_eq!(medallion.owner, user_a);
    assert_eq!(medallion.metadata, metadata);

    // Transfer from user_a → user_b
    client.transfer(&user_a, &user_b, &token_id);

    assert_eq!(client.owner_of(&token_id), user_b);
    assert_eq!(client.total_supply(), 1u32);

    let collection_a = client.get_collection(&user_a);
    let collection_b = client.get_collection(&user_b);
    assert_eq!(collection_a.len(), 0);
    assert_eq!(collection_b.len(), 1);
    assert_eq!(collection_b.get(0).unwrap(), token_id);
}

#[test]
fn test_token_ids_are_sequential() {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register_contract(None, RewardNft);
    let client = RewardNftClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let minter = Address::generate(&env);
    let user = Address::generate(&env);

    client.initialize(&admin, &minter);

    let first = client.mint(
        &user,
        &Symbol::new(&env, "bronze_medallion"),
        &String::from_str(&env, "Recruit Rewards Medallion"),
    );
    let second = client.mint(
        &user,
        &Symbol::new(&env, "silver_medallion"),
        &String::from_str(&env, "Recruit Rewards Medallion"),
    );

    assert_eq!(first, 1u32);
    assert_eq!(second, 2u32);
    assert_eq!(client.total_supply(), 2u32);
    assert_eq!(client.get_collection(&user).len(), 2);
}

#[test]
#[should_panic(expected = "Already initialized")]
fn test_already_initialized() {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register_contract(None, RewardNft);
    let client = RewardNftClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let minter = Address::generate(&env);
    client.initialize(&admin, &minter);
    client.initialize(&admin, &minter); // should panic
}

#[test]
#[should_panic(expected = "Token does not exist")]
fn test_transfer_non_existent_token() {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register_contract(None, RewardNft);
    let client = RewardNftClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let minter = Address::generate(&env);
    let user_a = Address::generate(&env);
    let user_b = Address::generate(&env);

    client.initialize(&admin, &minter);

    client.transfer(&user_a, &user_b, &999u32); // non-existent
}

#[test]
#[should_panic(expected = "Cannot transfer to self")]
fn test_transfer_to_self() {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register_contract(None, RewardNft);
    let client = RewardNftClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let minter = Address::generate(&env);
    let user = Address::generate(&env);

    client.initialize(&admin, &minter);

    let token_id = client.mint(
        &user,
        &Symbol::new(&env, "gold_medallion"),
        &String::from_str(&env, "Recruit Rewards Medallion"),
    );

    client.transfer(&user, &user, &token_id); // should panic
}

#[test]
#[should_panic(expected = "Not the owner")]
fn test_transfer_requires_ownership() {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register_contract(None, RewardNft);
    let client = RewardNftClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let minter = Address::generate(&env);
    let owner = Address::generate(&env);
    let other = Address::generate(&env);
    let third = Address::generate(&env);

    client.initialize(&admin, &minter);

    let token_id = client.mint(
        &owner,
        &Symbol::new(&env, "gold_medallion"),
        &String::from_str(&env, "Recruit Rewards Medallion"),
    );

    client.transfer(&other, &third, &token_id); // should panic
}
