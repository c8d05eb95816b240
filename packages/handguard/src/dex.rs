use soroban_sdk::{contractclient, Address, Env};

/// Swap router of the liquidity venue used by funds.
///
/// The router pulls the input from `sender` and sends the output back to
/// `sender`. Calls revert when `deadline` (ledger timestamp) has passed, when
/// a bound is breached or when the venue lacks liquidity.
#[contractclient(name = "DexRouterClient")]
pub trait DexRouterInterface {
    /// Returns the amount of `token_out` received
    #[allow(clippy::too_many_arguments)]
    fn swap_exact_in(
        env: Env,
        sender: Address,
        token_in: Address,
        token_out: Address,
        amount_in: i128,
        min_amount_out: i128,
        deadline: u64,
    ) -> i128;

    /// Returns the amount of `token_in` spent
    #[allow(clippy::too_many_arguments)]
    fn swap_exact_out(
        env: Env,
        sender: Address,
        token_in: Address,
        token_out: Address,
        amount_out: i128,
        max_amount_in: i128,
        deadline: u64,
    ) -> i128;

    fn get_amount_out(env: Env, token_in: Address, token_out: Address, amount_in: i128) -> i128;

    fn get_amount_in(env: Env, token_in: Address, token_out: Address, amount_out: i128) -> i128;
}
