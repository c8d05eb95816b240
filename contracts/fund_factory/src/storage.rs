use handguard::constants::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD};
use soroban_sdk::{contracttype, Address, BytesN, Env, Vec};

use handguard::types::FundInfo;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    Initialized,
    FundCount,
    Fund(u32),
    CreatorFunds(Address),
}

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Token charged for creating a fund
    pub fee_token: Address,
    pub oracle: Address,
    pub treasury: Address,
    pub dex: Address,
    pub wrapped_native: Address,
    pub fund_wasm_hash: BytesN<32>,
    /// Fixed at initialization
    pub creation_fee: i128,
}

fn bump(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn save_config(env: &Env, config: Config) {
    env.storage().persistent().set(&DataKey::Config, &config);
    bump(env, &DataKey::Config);
}

pub fn get_config(env: &Env) -> Config {
    let config = env
        .storage()
        .persistent()
        .get(&DataKey::Config)
        .expect("Factory: Config not set");
    bump(env, &DataKey::Config);

    config
}

pub fn get_fund_count(env: &Env) -> u32 {
    let count = env
        .storage()
        .persistent()
        .get(&DataKey::FundCount)
        .unwrap_or(0);
    if count > 0 {
        bump(env, &DataKey::FundCount);
    }

    count
}

pub fn save_fund_count(env: &Env, count: u32) {
    env.storage().persistent().set(&DataKey::FundCount, &count);
    bump(env, &DataKey::FundCount);
}

pub fn get_fund(env: &Env, id: u32) -> Option<FundInfo> {
    let key = DataKey::Fund(id);
    let fund = env.storage().persistent().get(&key);
    if fund.is_some() {
        bump(env, &key);
    }

    fund
}

pub fn save_fund(env: &Env, info: &FundInfo) {
    let key = DataKey::Fund(info.id);
    env.storage().persistent().set(&key, info);
    bump(env, &key);
}

pub fn get_creator_funds(env: &Env, creator: &Address) -> Vec<u32> {
    let key = DataKey::CreatorFunds(creator.clone());
    match env.storage().persistent().get(&key) {
        Some(ids) => {
            bump(env, &key);
            ids
        }
        None => Vec::new(env),
    }
}

pub fn append_creator_fund(env: &Env, creator: &Address, id: u32) {
    let mut ids = get_creator_funds(env, creator);
    ids.push_back(id);

    let key = DataKey::CreatorFunds(creator.clone());
    env.storage().persistent().set(&key, &ids);
    bump(env, &key);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Initialized)
        .unwrap_or(false)
}

pub fn set_initialized(env: &Env) {
    env.storage().persistent().set(&DataKey::Initialized, &true);
    bump(env, &DataKey::Initialized);
}
