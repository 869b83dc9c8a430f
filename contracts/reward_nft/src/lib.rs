#![no_std]
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, String, Symbol, Vec};

#[contracttype]
#[derive(Clone)]
pub struct Medallion {
    pub owner: Address,
    pub unlockable_id: Symbol,
    pub metadata: String,
    pub minted_at: u64,
}

#[contracttype]
pub enum DataKey {
    Medallion(u32),      // Persistent
    Collection(Address), // Persistent
    NextTokenId,         // Instance
    TotalSupply,         // Instance
    Admin,               // Instance
    Minter,              // Instance
}

#[contract]
pub struct RewardNft;

#[contractimpl]
impl RewardNft {
    /// Initialize with an admin and the contract allowed to mint (the
    /// tier resolver).
    pub fn initialize(env: Env, admin: Address, minter: Address) {
        if env.storage().instance().has(&DataKey::Admin) {
            panic!("Already initialized");
        }
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Minter, &minter);
        env.storage().instance().set(&DataKey::NextTokenId, &1u32);
        env.storage().instance().set(&DataKey::TotalSupply, &0u32);
    }

    /// Swap the minting contract (admin only).
    pub fn set_minter(env: Env, minter: Address) {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .expect("Not initialized");
        admin.require_auth();
        env.storage().instance().set(&DataKey::Minter, &minter);
    }

    /// Mint a medallion for a newly qualified unlockable (minter only).
    /// Medallions are permanent; there is no burn.
    pub fn mint(env: Env, to: Address, unlockable_id: Symbol, metadata: String) -> u32 {
        let minter: Address = env
            .storage()
            .instance()
            .get(&DataKey::Minter)
            .expect("Not initialized");
        minter.require_auth();

        let token_id: u32 = env.storage().instance().get(&DataKey::NextTokenId).unwrap();

        let medallion = Medallion {
            owner: to.clone(),
            unlockable_id,
            metadata,
            minted_at: env.ledger().timestamp(),
        };
        env.storage()
            .persistent()
            .set(&DataKey::Medallion(token_id), &medallion);

        let mut collection: Vec<u32> = env
            .storage()
            .persistent()
            .get(&DataKey::Collection(to.clone()))
            .unwrap_or(Vec::new(&env));
        collection.push_back(token_id);
        env.storage()
            .persistent()
            .set(&DataKey::Collection(to), &collection);

        env.storage()
            .instance()
            .set(&DataKey::NextTokenId, &(token_id + 1));
        let total: u32 = env.storage().instance().get(&DataKey::TotalSupply).unwrap();
        env.storage().instance().set(&DataKey::TotalSupply, &(total + 1));

        token_id
    }

    /// SEP-41: Transfer ownership
    pub fn transfer(env: Env, from: Address, to: Address, token_id: u32) {
        from.require_auth();

        if from == to {
            panic!("Cannot transfer to self");
        }

        let mut medallion: Medallion = env
            .storage()
            .persistent()
            .get(&DataKey::Medallion(token_id))
            .expect("Token does not exist");

        if medallion.owner != from {
            panic!("Not the owner");
        }

        let old: Vec<u32> = env
            .storage()
            .persistent()
            .get(&DataKey::Collection(from.clone()))
            .unwrap_or(Vec::new(&env));
        let mut kept: Vec<u32> = Vec::new(&env);
        for id in old.iter() {
            if id != token_id {
                kept.push_back(id);
            }
        }
        env.storage()
            .persistent()
            .set(&DataKey::Collection(from), &kept);

        let mut to_collection: Vec<u32> = env
            .storage()
            .persistent()
            .get(&DataKey::Collection(to.clone()))
            .unwrap_or(Vec::new(&env));
        to_collection.push_back(token_id);
        env.storage()
            .persistent()
            .set(&DataKey::Collection(to.clone()), &to_collection);

        medallion.owner = to;
        env.storage()
            .persistent()
            .set(&DataKey::Medallion(token_id), &medallion);
    }

    /// SEP-41: Get owner of a token
    pub fn owner_of(env: Env, token_id: u32) -> Address {
        let medallion: Medallion = env
            .storage()
            .persistent()
            .get(&DataKey::Medallion(token_id))
            .expect("Token does not exist");
        medallion.owner
    }

    pub fn get_medallion(env: Env, token_id: u32) -> Option<Medallion> {
        env.storage().persistent().get(&DataKey::Medallion(token_id))
    }

    pub fn get_collection(env: Env, user: Address) -> Vec<u32> {
        env.storage()
            .persistent()
            .get(&DataKey::Collection(user))
            .unwrap_or(Vec::new(&env))
    }

    pub fn total_supply(env: Env) -> u32 {
        env.storage().instance().get(&DataKey::TotalSupply).unwrap_or(0)
    }
}

mod test;
