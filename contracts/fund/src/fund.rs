use handguard::error::ErrorCode;
use soroban_sdk::{contractclient, Address, Env, Map, Vec};

use crate::storage::Config;

#[contractclient(name = "FundClient")]
pub trait FundTrait {
    // ################################################################
    //                             OWNER
    // ################################################################

    fn set_proportions(
        env: Env,
        sender: Address,
        tokens: Vec<Address>,
        percentages: Vec<u32>,
    ) -> Result<(), ErrorCode>;

    /// Returns the NAV in USD measured before trading
    fn rebalance(env: Env, sender: Address) -> Result<i128, ErrorCode>;

    fn update_treasury(env: Env, sender: Address, treasury: Address) -> Result<(), ErrorCode>;

    fn update_oracle(env: Env, sender: Address, oracle: Address) -> Result<(), ErrorCode>;

    fn update_dex(env: Env, sender: Address, dex: Address) -> Result<(), ErrorCode>;

    fn update_wrapped_native(env: Env, sender: Address, wrapped_native: Address) -> Result<(), ErrorCode>;

    fn update_slippage(env: Env, sender: Address, slippage_bps: u32) -> Result<(), ErrorCode>;

    fn transfer_ownership(env: Env, sender: Address, new_owner: Address) -> Result<(), ErrorCode>;

    // ################################################################
    //                             USER
    // ################################################################

    /// Pays `amount` of native into the fund, returns the shares minted
    fn buy(env: Env, buyer: Address, amount: i128) -> Result<i128, ErrorCode>;

    /// Redeems `shares`, returns the native paid out after fees
    fn sell(env: Env, seller: Address, shares: i128) -> Result<i128, ErrorCode>;

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn creator(env: Env) -> Address;

    fn owner(env: Env) -> Result<Address, ErrorCode>;

    fn get_underlying_tokens(env: Env) -> Vec<Address>;

    fn target_proportion(env: Env, token: Address) -> u32;

    fn get_proportions(env: Env) -> Map<Address, u32>;

    /// NAV in native units
    fn get_current_fund_value(env: Env) -> Result<i128, ErrorCode>;

    /// NAV in USD, 8 decimals
    fn get_nav_usd(env: Env) -> Result<i128, ErrorCode>;

    fn get_token_balance(env: Env, token: Address) -> i128;

    fn treasury(env: Env) -> Address;

    fn oracle(env: Env) -> Address;

    fn dex(env: Env) -> Address;

    fn wrapped_native(env: Env) -> Address;

    fn get_config(env: Env) -> Config;
}
