use soroban_sdk::{Address, Env};

use crate::{
    error::{ErrorCode, HandguardResult},
    validate,
};

use super::{AllowanceDataKey, AllowanceValue, LedgerKey};

pub fn read_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let key = LedgerKey::Allowance(AllowanceDataKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    if let Some(allowance) = env.storage().temporary().get::<_, AllowanceValue>(&key) {
        if allowance.expiration_ledger < env.ledger().sequence() {
            AllowanceValue {
                amount: 0,
                expiration_ledger: allowance.expiration_ledger,
            }
        } else {
            allowance
        }
    } else {
        AllowanceValue {
            amount: 0,
            expiration_ledger: 0,
        }
    }
}

pub fn write_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> HandguardResult {
    validate!(
        env,
        amount == 0 || expiration_ledger >= env.ledger().sequence(),
        ErrorCode::InvalidExpirationLedger,
        "expiration_ledger is less than ledger seq when amount > 0"
    )?;

    let key = LedgerKey::Allowance(AllowanceDataKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    env.storage().temporary().set(
        &key,
        &AllowanceValue {
            amount,
            expiration_ledger,
        },
    );

    if amount > 0 {
        let live_for = expiration_ledger - env.ledger().sequence();
        env.storage().temporary().extend_ttl(&key, live_for, live_for);
    }

    Ok(())
}

pub fn spend_allowance(env: &Env, from: &Address, spender: &Address, amount: i128) -> HandguardResult {
    let allowance = read_allowance(env, from, spender);
    validate!(
        env,
        allowance.amount >= amount,
        ErrorCode::InsufficientAllowance,
        "insufficient allowance",
        allowance.amount,
        amount
    )?;

    if amount > 0 {
        write_allowance(
            env,
            from,
            spender,
            allowance.amount - amount,
            allowance.expiration_ledger,
        )?;
    }

    Ok(())
}
