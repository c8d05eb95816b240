use soroban_sdk::{contracttype, Address, String, Vec};

/// Constructor arguments of a fund, assembled by the registry
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundParams {
    pub name: String,
    pub ticker: String,
    pub tokens: Vec<Address>,
    pub treasury: Address,
    pub oracle: Address,
    pub dex: Address,
    pub wrapped_native: Address,
}

/// Directory entry kept by the registry for every created fund
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundInfo {
    pub id: u32,
    pub address: Address,
    pub creator: Address,
    pub name: String,
    pub ticker: String,
    pub tokens: Vec<Address>,
}
