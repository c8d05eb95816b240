use soroban_sdk::{Address, Env};

use crate::{
    constants::{BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD},
    error::{ErrorCode, HandguardResult},
    math::safe_math::SafeMath,
    validate,
};

use super::LedgerKey;

pub fn check_nonnegative_amount(env: &Env, amount: i128) -> HandguardResult {
    validate!(
        env,
        amount >= 0,
        ErrorCode::NegativeAmount,
        "negative amount is not allowed",
        amount
    )
}

pub fn read_balance(env: &Env, addr: &Address) -> i128 {
    let key = LedgerKey::Balance(addr.clone());
    if let Some(balance) = env.storage().persistent().get::<LedgerKey, i128>(&key) {
        env.storage()
            .persistent()
            .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
        balance
    } else {
        0
    }
}

fn write_balance(env: &Env, addr: &Address, amount: i128) {
    let key = LedgerKey::Balance(addr.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn receive_balance(env: &Env, addr: &Address, amount: i128) -> HandguardResult {
    let balance = read_balance(env, addr);
    write_balance(env, addr, balance.safe_add(amount, env)?);
    Ok(())
}

pub fn spend_balance(env: &Env, addr: &Address, amount: i128) -> HandguardResult {
    let balance = read_balance(env, addr);
    validate!(
        env,
        balance >= amount,
        ErrorCode::InsufficientBalance,
        "insufficient balance",
        balance,
        amount
    )?;
    write_balance(env, addr, balance - amount);
    Ok(())
}

pub fn read_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&LedgerKey::TotalSupply)
        .unwrap_or(0)
}

fn write_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&LedgerKey::TotalSupply, &supply);
}

/// Credits `to` and grows the supply by the same amount
pub fn mint(env: &Env, to: &Address, amount: i128) -> HandguardResult {
    check_nonnegative_amount(env, amount)?;
    receive_balance(env, to, amount)?;
    write_total_supply(env, read_total_supply(env).safe_add(amount, env)?);
    Ok(())
}

/// Debits `from` and shrinks the supply by the same amount
pub fn burn(env: &Env, from: &Address, amount: i128) -> HandguardResult {
    check_nonnegative_amount(env, amount)?;
    spend_balance(env, from, amount)?;
    write_total_supply(env, read_total_supply(env).safe_sub(amount, env)?);
    Ok(())
}

pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> HandguardResult {
    check_nonnegative_amount(env, amount)?;
    spend_balance(env, from, amount)?;
    receive_balance(env, to, amount)
}
