use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{Env, Vec};

use crate::{
    constants::{BPS_DENOMINATOR, CREATOR_FEE_SHARE_BPS, FEE_BPS, PERCENT_DENOMINATOR},
    error::{ErrorCode, HandguardResult},
    math_error, validate,
};

use super::safe_math::SafeMath;

pub fn mul_div_floor(
    env: &Env,
    value: i128,
    numerator: i128,
    denominator: i128,
) -> HandguardResult<i128> {
    validate!(env, denominator != 0, ErrorCode::MathError)?;
    value
        .fixed_mul_floor(numerator, denominator)
        .ok_or_else(math_error!(env))
}

pub fn mul_div_ceil(
    env: &Env,
    value: i128,
    numerator: i128,
    denominator: i128,
) -> HandguardResult<i128> {
    validate!(env, denominator != 0, ErrorCode::MathError)?;
    value
        .fixed_mul_ceil(numerator, denominator)
        .ok_or_else(math_error!(env))
}

/// `value × percent / 100`
pub fn get_percentage(env: &Env, value: i128, percent: u32) -> HandguardResult<i128> {
    mul_div_floor(env, value, percent as i128, PERCENT_DENOMINATOR as i128)
}

/// `value × bps / 10_000`
pub fn get_bps(env: &Env, value: i128, bps: i128) -> HandguardResult<i128> {
    mul_div_floor(env, value, bps, BPS_DENOMINATOR)
}

pub fn decimals_factor(env: &Env, decimals: u32) -> HandguardResult<i128> {
    10_i128.safe_pow(decimals, env)
}

/// USD value (price precision) of `amount` base units of a token with `decimals`
pub fn token_value_usd(env: &Env, amount: i128, price: i128, decimals: u32) -> HandguardResult<i128> {
    mul_div_floor(env, amount, price, decimals_factor(env, decimals)?)
}

/// Base units of a token with `decimals` worth `value_usd` at `price`
pub fn usd_to_token_amount(
    env: &Env,
    value_usd: i128,
    price: i128,
    decimals: u32,
) -> HandguardResult<i128> {
    validate!(env, price > 0, ErrorCode::OracleNonPositive)?;
    mul_div_floor(env, value_usd, decimals_factor(env, decimals)?, price)
}

/// Splits the protocol fee on `amount` into `(fee, creator_share, treasury_share)`
pub fn split_fee(env: &Env, amount: i128) -> HandguardResult<(i128, i128, i128)> {
    let fee = get_bps(env, amount, FEE_BPS)?;
    let creator_share = get_bps(env, fee, CREATOR_FEE_SHARE_BPS)?;
    let treasury_share = fee.safe_sub(creator_share, env)?;

    Ok((fee, creator_share, treasury_share))
}

/// Equal weights for a basket of `count` tokens. Integer division leaves a
/// remainder which is assigned to the last entry so the weights sum to 100.
pub fn equal_proportions(env: &Env, count: u32) -> HandguardResult<Vec<u32>> {
    validate!(env, count > 0, ErrorCode::EmptyTokenList)?;

    let base = PERCENT_DENOMINATOR.safe_div(count, env)?;
    let last = PERCENT_DENOMINATOR.safe_sub(base.safe_mul(count - 1, env)?, env)?;

    let mut proportions = Vec::new(env);
    for _ in 0..count - 1 {
        proportions.push_back(base);
    }
    proportions.push_back(last);

    Ok(proportions)
}
