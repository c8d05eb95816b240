use soroban_sdk::{Address, Env, String, Symbol, Vec};

pub struct FactoryEvents {}

impl FactoryEvents {
    /// Emitted once, when the registry is initialized
    ///
    /// - topics - `["initialize", owner: Address]`
    /// - data - `[fee_token: Address, creation_fee: i128]`
    pub fn initialize(env: &Env, owner: Address, fee_token: Address, creation_fee: i128) {
        let topics = (Symbol::new(env, "initialize"), owner);
        env.events().publish(topics, (fee_token, creation_fee));
    }

    /// Emitted for every deployed fund. Off-chain indexers rebuild the fund
    /// directory from it.
    ///
    /// - topics - `["fund_created", fund_id: u32, creator: Address]`
    /// - data - `[name: String, ticker: String, fund_address: Address, tokens: Vec<Address>]`
    pub fn fund_created(
        env: &Env,
        fund_id: u32,
        creator: Address,
        name: String,
        ticker: String,
        fund_address: Address,
        tokens: Vec<Address>,
    ) {
        let topics = (Symbol::new(env, "fund_created"), fund_id, creator);
        env.events()
            .publish(topics, (name, ticker, fund_address, tokens));
    }

    /// - topics - `["treasury_updated"]`
    /// - data - `[treasury: Address]`
    pub fn treasury_updated(env: &Env, treasury: Address) {
        env.events()
            .publish((Symbol::new(env, "treasury_updated"),), treasury);
    }

    pub fn oracle_updated(env: &Env, oracle: Address) {
        env.events()
            .publish((Symbol::new(env, "oracle_updated"),), oracle);
    }

    pub fn dex_updated(env: &Env, dex: Address) {
        env.events().publish((Symbol::new(env, "dex_updated"),), dex);
    }

    pub fn wrapped_native_updated(env: &Env, wrapped_native: Address) {
        env.events()
            .publish((Symbol::new(env, "wrapped_native_updated"),), wrapped_native);
    }
}
