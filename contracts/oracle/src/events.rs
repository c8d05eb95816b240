use soroban_sdk::{Address, Env, Symbol};

pub struct OracleEvents {}

impl OracleEvents {
    /// Emitted when the oracle is initialized
    ///
    /// - topics - `["initialize", owner: Address]`
    /// - data - `[max_price_age: u64]`
    pub fn initialize(env: &Env, owner: Address, max_price_age: u64) {
        let topics = (Symbol::new(env, "initialize"), owner);
        env.events().publish(topics, max_price_age);
    }

    /// Emitted when a feed is registered, or replaced, for a token
    ///
    /// - topics - `["price_feed_set", token: Address]`
    /// - data - `[feed: Address]`
    pub fn price_feed_set(env: &Env, token: Address, feed: Address) {
        let topics = (Symbol::new(env, "price_feed_set"), token);
        env.events().publish(topics, feed);
    }

    /// - topics - `["max_price_age_updated"]`
    /// - data - `[max_price_age: u64]`
    pub fn max_price_age_updated(env: &Env, max_price_age: u64) {
        let topics = (Symbol::new(env, "max_price_age_updated"),);
        env.events().publish(topics, max_price_age);
    }
}
