use soroban_sdk::{contractclient, contracttype, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundData {
    /// Price reported by the feed, scaled by the feed's own decimals
    pub answer: i128,
    /// Ledger timestamp of the last update
    pub updated_at: u64,
}

/// A single-asset USD aggregator registered with the price oracle.
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeedInterface {
    fn decimals(env: Env) -> u32;

    fn latest_round_data(env: Env) -> RoundData;
}

/// The surface of the price oracle consumed by funds.
#[contractclient(name = "PriceOracleClient")]
pub trait PriceOracleInterface {
    /// USD price of `token` with 8 decimals
    fn get_price(env: Env, token: Address) -> i128;
}
