use soroban_sdk::{Address, Env, Symbol, Vec};

pub struct FundEvents {}

impl FundEvents {
    /// Emitted when shares are bought with native
    ///
    /// - topics - `["fund_token_bought", buyer: Address]`
    /// - data - `[amount: i128, shares_minted: i128, fee: i128]`
    pub fn fund_token_bought(env: &Env, buyer: Address, amount: i128, shares_minted: i128, fee: i128) {
        let topics = (Symbol::new(env, "fund_token_bought"), buyer);
        env.events().publish(topics, (amount, shares_minted, fee));
    }

    /// Emitted when shares are redeemed for native
    ///
    /// - topics - `["fund_token_sold", seller: Address]`
    /// - data - `[shares_burned: i128, native_returned: i128, fee: i128]`
    pub fn fund_token_sold(env: &Env, seller: Address, shares_burned: i128, native_returned: i128, fee: i128) {
        let topics = (Symbol::new(env, "fund_token_sold"), seller);
        env.events().publish(topics, (shares_burned, native_returned, fee));
    }

    /// Emitted at the end of every rebalance pass
    ///
    /// - topics - `["rebalanced"]`
    /// - data - `[nav_usd: i128]`
    pub fn rebalanced(env: &Env, nav_usd: i128) {
        let topics = (Symbol::new(env, "rebalanced"),);
        env.events().publish(topics, nav_usd);
    }

    /// - topics - `["proportions_updated"]`
    /// - data - `[tokens: Vec<Address>, percentages: Vec<u32>]`
    pub fn proportions_updated(env: &Env, tokens: Vec<Address>, percentages: Vec<u32>) {
        let topics = (Symbol::new(env, "proportions_updated"),);
        env.events().publish(topics, (tokens, percentages));
    }

    /// - topics - `["treasury_updated"]`
    /// - data - `[treasury: Address]`
    pub fn treasury_updated(env: &Env, treasury: Address) {
        env.events()
            .publish((Symbol::new(env, "treasury_updated"),), treasury);
    }

    /// - topics - `["oracle_updated"]`
    /// - data - `[oracle: Address]`
    pub fn oracle_updated(env: &Env, oracle: Address) {
        env.events()
            .publish((Symbol::new(env, "oracle_updated"),), oracle);
    }

    /// - topics - `["dex_updated"]`
    /// - data - `[dex: Address]`
    pub fn dex_updated(env: &Env, dex: Address) {
        env.events().publish((Symbol::new(env, "dex_updated"),), dex);
    }

    pub fn wrapped_native_updated(env: &Env, wrapped_native: Address) {
        env.events()
            .publish((Symbol::new(env, "wrapped_native_updated"),), wrapped_native);
    }

    pub fn slippage_updated(env: &Env, slippage_bps: u32) {
        env.events()
            .publish((Symbol::new(env, "slippage_updated"),), slippage_bps);
    }
}
