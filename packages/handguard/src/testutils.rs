//! Contract doubles for the external collaborators of the protocol.

use soroban_sdk::{
    contract, contractimpl, contracttype, panic_with_error, token, Address, Env,
};

use crate::{
    constants::BPS_DENOMINATOR,
    dex::DexRouterInterface,
    error::{ErrorCode, HandguardResult},
    math::helpers::{mul_div_ceil, mul_div_floor, token_value_usd, usd_to_token_amount},
    oracle::{PriceFeedInterface, RoundData},
    unwrap_or_panic,
};

#[contracttype]
#[derive(Clone)]
enum MockKey {
    Decimals,
    Round,
    Price(Address),
    Haircut,
}

/// Price feed with an answer settable by anyone
#[contract]
pub struct MockPriceFeed;

#[contractimpl]
impl MockPriceFeed {
    pub fn __constructor(env: Env, decimals: u32, answer: i128) {
        env.storage().instance().set(&MockKey::Decimals, &decimals);
        Self::set_answer(env, answer);
    }

    pub fn set_answer(env: Env, answer: i128) {
        let updated_at = env.ledger().timestamp();
        Self::set_round(env, answer, updated_at);
    }

    pub fn set_round(env: Env, answer: i128, updated_at: u64) {
        env.storage()
            .instance()
            .set(&MockKey::Round, &RoundData { answer, updated_at });
    }
}

#[contractimpl]
impl PriceFeedInterface for MockPriceFeed {
    fn decimals(env: Env) -> u32 {
        env.storage().instance().get(&MockKey::Decimals).unwrap_or(8)
    }

    fn latest_round_data(env: Env) -> RoundData {
        env.storage()
            .instance()
            .get(&MockKey::Round)
            .unwrap_or(RoundData {
                answer: 0,
                updated_at: 0,
            })
    }
}

/// Router filling swaps from its own reserves at fixed USD prices (8 decimals),
/// minus an optional haircut in bps to simulate bad fills.
#[contract]
pub struct MockDexRouter;

#[contractimpl]
impl MockDexRouter {
    pub fn set_price(env: Env, token: Address, price: i128) {
        env.storage().instance().set(&MockKey::Price(token), &price);
    }

    pub fn set_haircut(env: Env, haircut_bps: i128) {
        env.storage().instance().set(&MockKey::Haircut, &haircut_bps);
    }
}

fn read_price(env: &Env, token: &Address) -> HandguardResult<i128> {
    env.storage()
        .instance()
        .get(&MockKey::Price(token.clone()))
        .ok_or(ErrorCode::InsufficientLiquidity)
}

fn read_haircut(env: &Env) -> i128 {
    env.storage().instance().get(&MockKey::Haircut).unwrap_or(0)
}

fn quote_out(env: &Env, token_in: &Address, token_out: &Address, amount_in: i128) -> HandguardResult<i128> {
    let decimals_in = token::Client::new(env, token_in).decimals();
    let decimals_out = token::Client::new(env, token_out).decimals();

    let value = token_value_usd(env, amount_in, read_price(env, token_in)?, decimals_in)?;
    let gross = usd_to_token_amount(env, value, read_price(env, token_out)?, decimals_out)?;

    mul_div_floor(env, gross, BPS_DENOMINATOR - read_haircut(env), BPS_DENOMINATOR)
}

fn quote_in(env: &Env, token_in: &Address, token_out: &Address, amount_out: i128) -> HandguardResult<i128> {
    let decimals_in = token::Client::new(env, token_in).decimals();
    let decimals_out = token::Client::new(env, token_out).decimals();

    let gross = mul_div_ceil(env, amount_out, BPS_DENOMINATOR, BPS_DENOMINATOR - read_haircut(env))?;
    let value = mul_div_ceil(env, gross, read_price(env, token_out)?, 10_i128.pow(decimals_out))?;

    mul_div_ceil(env, value, 10_i128.pow(decimals_in), read_price(env, token_in)?)
}

fn settle(
    env: &Env,
    sender: &Address,
    token_in: &Address,
    token_out: &Address,
    amount_in: i128,
    amount_out: i128,
) -> HandguardResult {
    let router = env.current_contract_address();
    let out_client = token::Client::new(env, token_out);
    if out_client.balance(&router) < amount_out {
        return Err(ErrorCode::InsufficientLiquidity);
    }

    token::Client::new(env, token_in).transfer(sender, &router, &amount_in);
    out_client.transfer(&router, sender, &amount_out);

    Ok(())
}

#[contractimpl]
impl DexRouterInterface for MockDexRouter {
    fn swap_exact_in(
        env: Env,
        sender: Address,
        token_in: Address,
        token_out: Address,
        amount_in: i128,
        min_amount_out: i128,
        deadline: u64,
    ) -> i128 {
        sender.require_auth();
        if env.ledger().timestamp() > deadline {
            panic_with_error!(&env, ErrorCode::DeadlineExpired);
        }

        let amount_out = unwrap_or_panic!(&env, quote_out(&env, &token_in, &token_out, amount_in));
        if amount_out < min_amount_out {
            panic_with_error!(&env, ErrorCode::SlippageExceeded);
        }

        unwrap_or_panic!(
            &env,
            settle(&env, &sender, &token_in, &token_out, amount_in, amount_out)
        );
        amount_out
    }

    fn swap_exact_out(
        env: Env,
        sender: Address,
        token_in: Address,
        token_out: Address,
        amount_out: i128,
        max_amount_in: i128,
        deadline: u64,
    ) -> i128 {
        sender.require_auth();
        if env.ledger().timestamp() > deadline {
            panic_with_error!(&env, ErrorCode::DeadlineExpired);
        }

        let amount_in = unwrap_or_panic!(&env, quote_in(&env, &token_in, &token_out, amount_out));
        if amount_in > max_amount_in {
            panic_with_error!(&env, ErrorCode::SlippageExceeded);
        }

        unwrap_or_panic!(
            &env,
            settle(&env, &sender, &token_in, &token_out, amount_in, amount_out)
        );
        amount_in
    }

    fn get_amount_out(env: Env, token_in: Address, token_out: Address, amount_in: i128) -> i128 {
        unwrap_or_panic!(&env, quote_out(&env, &token_in, &token_out, amount_in))
    }

    fn get_amount_in(env: Env, token_in: Address, token_out: Address, amount_out: i128) -> i128 {
        unwrap_or_panic!(&env, quote_in(&env, &token_in, &token_out, amount_out))
    }
}
