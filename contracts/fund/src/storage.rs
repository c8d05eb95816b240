use handguard::constants::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD};
use soroban_sdk::{contracttype, Address, Env, Map, Vec};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    Creator,
    Basket,
    Proportions,
}

// ################################################################
//                             Config
// ################################################################

/// References used for pricing and swaps. They are read at the start of every
/// operation and only replaced through the owner updaters.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Destination of the treasury part of every fee
    pub treasury: Address,
    pub oracle: Address,
    pub dex: Address,
    /// Payment asset, and the numeraire of every swap
    pub wrapped_native: Address,
    pub slippage_bps: u32,
}

fn save_persistent<V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>>(env: &Env, key: &DataKey, value: &V) {
    env.storage().persistent().set(key, value);
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn save_config(env: &Env, config: &Config) {
    save_persistent(env, &DataKey::Config, config);
}

pub fn get_config(env: &Env) -> Config {
    let config = env
        .storage()
        .persistent()
        .get(&DataKey::Config)
        .expect("Fund: Config not set");
    bump_persistent(env, &DataKey::Config);

    config
}

pub fn save_creator(env: &Env, creator: &Address) {
    save_persistent(env, &DataKey::Creator, creator);
}

pub fn get_creator(env: &Env) -> Address {
    let creator = env
        .storage()
        .persistent()
        .get(&DataKey::Creator)
        .expect("Fund: Creator not set");
    bump_persistent(env, &DataKey::Creator);

    creator
}

pub fn save_basket(env: &Env, basket: &Vec<Address>) {
    save_persistent(env, &DataKey::Basket, basket);
}

pub fn get_basket(env: &Env) -> Vec<Address> {
    let basket = env
        .storage()
        .persistent()
        .get(&DataKey::Basket)
        .unwrap_or(Vec::new(env));
    bump_persistent(env, &DataKey::Basket);

    basket
}

/// Target weights of every basket token, always summing to 100
pub fn save_proportions(env: &Env, proportions: &Map<Address, u32>) {
    save_persistent(env, &DataKey::Proportions, proportions);
}

pub fn get_proportions(env: &Env) -> Map<Address, u32> {
    let proportions = env
        .storage()
        .persistent()
        .get(&DataKey::Proportions)
        .unwrap_or(Map::new(env));
    bump_persistent(env, &DataKey::Proportions);

    proportions
}
