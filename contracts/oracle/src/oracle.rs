use handguard::error::ErrorCode;
use soroban_sdk::{contractclient, Address, Env};

use crate::storage::Config;

#[contractclient(name = "PriceOracleClient")]
pub trait PriceOracleTrait {
    fn initialize(env: Env, owner: Address, max_price_age: u64) -> Result<(), ErrorCode>;

    fn set_price_feed(env: Env, sender: Address, token: Address, feed: Address) -> Result<(), ErrorCode>;

    fn update_max_price_age(env: Env, sender: Address, max_price_age: u64) -> Result<(), ErrorCode>;

    fn transfer_ownership(env: Env, sender: Address, new_owner: Address) -> Result<(), ErrorCode>;

    // ################################################################
    //                             Queries
    // ################################################################

    /// USD price of `token` scaled to 8 decimals
    fn get_price(env: Env, token: Address) -> Result<i128, ErrorCode>;

    fn get_price_feed(env: Env, token: Address) -> Option<Address>;

    fn get_config(env: Env) -> Config;

    fn owner(env: Env) -> Result<Address, ErrorCode>;
}
