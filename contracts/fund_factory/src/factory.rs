use handguard::{error::ErrorCode, types::FundInfo};
use soroban_sdk::{contractclient, Address, BytesN, Env, String, Vec};

use crate::storage::Config;

#[contractclient(name = "FundFactoryClient")]
pub trait FundFactoryTrait {
    #[allow(clippy::too_many_arguments)]
    fn initialize(
        env: Env,
        owner: Address,
        fee_token: Address,
        oracle: Address,
        treasury: Address,
        dex: Address,
        wrapped_native: Address,
        fund_wasm_hash: BytesN<32>,
        creation_fee: i128,
    ) -> Result<(), ErrorCode>;

    /// Charges the creation fee and deploys a fund owned by `creator`
    fn create_fund(
        env: Env,
        creator: Address,
        name: String,
        ticker: String,
        tokens: Vec<Address>,
    ) -> Result<Address, ErrorCode>;

    fn update_treasury(env: Env, sender: Address, treasury: Address) -> Result<(), ErrorCode>;

    fn update_oracle(env: Env, sender: Address, oracle: Address) -> Result<(), ErrorCode>;

    fn update_dex(env: Env, sender: Address, dex: Address) -> Result<(), ErrorCode>;

    fn update_wrapped_native(env: Env, sender: Address, wrapped_native: Address) -> Result<(), ErrorCode>;

    fn update_fund_wasm_hash(env: Env, sender: Address, fund_wasm_hash: BytesN<32>) -> Result<(), ErrorCode>;

    fn transfer_ownership(env: Env, sender: Address, new_owner: Address) -> Result<(), ErrorCode>;

    // ################################################################
    //                             Queries
    // ################################################################

    fn get_fund(env: Env, index: u32) -> Result<FundInfo, ErrorCode>;

    fn get_fund_address(env: Env, index: u32) -> Result<Address, ErrorCode>;

    /// Fund addresses with ids in `[start, end)`
    fn get_funds(env: Env, start: u32, end: u32) -> Result<Vec<Address>, ErrorCode>;

    fn get_creator_funds(env: Env, creator: Address) -> Vec<u32>;

    fn get_total_funds(env: Env) -> u32;

    fn get_config(env: Env) -> Config;

    fn owner(env: Env) -> Result<Address, ErrorCode>;
}
