use handguard::testutils::{MockPriceFeed, MockPriceFeedClient};
use soroban_sdk::{Address, Env};

use crate::contract::{PriceOracle, PriceOracleClient};

pub const ONE_HOUR: u64 = 3600;

pub fn deploy_oracle_contract<'a>(
    env: &Env,
    owner: &Address,
    max_price_age: u64,
) -> PriceOracleClient<'a> {
    let oracle = PriceOracleClient::new(env, &env.register(PriceOracle, ()));

    oracle.initialize(owner, &max_price_age);

    oracle
}

pub fn deploy_price_feed<'a>(env: &Env, decimals: u32, answer: i128) -> MockPriceFeedClient<'a> {
    MockPriceFeedClient::new(env, &env.register(MockPriceFeed, (decimals, answer)))
}
