use soroban_sdk::{token, Address, Env, String, Vec};

use crate::{
    constants::{
        INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, MAX_FUND_TOKENS, ZERO_ACCOUNT,
        ZERO_CONTRACT,
    },
    error::{ErrorCode, HandguardResult},
    validate,
};

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Whether `address` is one of the all-zero strkeys clients use for "unset"
pub fn is_zero_address(env: &Env, address: &Address) -> bool {
    *address == Address::from_string(&String::from_str(env, ZERO_ACCOUNT))
        || *address == Address::from_string(&String::from_str(env, ZERO_CONTRACT))
}

pub fn validate_address(env: &Env, address: &Address, err: ErrorCode) -> HandguardResult {
    validate!(env, !is_zero_address(env, address), err)
}

pub fn validate_fund_identity(env: &Env, name: &String, ticker: &String) -> HandguardResult {
    validate!(env, name.len() > 0, ErrorCode::EmptyFundName, "Fund name cannot be empty")?;
    validate!(env, ticker.len() > 0, ErrorCode::EmptyFundTicker, "Fund ticker cannot be empty")
}

/// Checks the shape of a basket: non-empty, bounded, free of duplicates and
/// of zero addresses.
pub fn validate_basket(env: &Env, tokens: &Vec<Address>) -> HandguardResult {
    validate!(env, !tokens.is_empty(), ErrorCode::EmptyTokenList, "Must have at least one token")?;
    validate!(
        env,
        tokens.len() <= MAX_FUND_TOKENS,
        ErrorCode::TooManyTokens,
        "Too many tokens",
        tokens.len()
    )?;

    for (i, token) in tokens.iter().enumerate() {
        validate_address(env, &token, ErrorCode::InvalidTokenAddress)?;

        let seen = tokens.slice(0..i as u32);
        validate!(
            env,
            !seen.contains(&token),
            ErrorCode::DuplicateToken,
            "Duplicate tokens not allowed",
            token
        )?;
    }

    Ok(())
}

/// A basket token must be a live contract answering the token interface
pub fn validate_token_contract(env: &Env, token: &Address) -> HandguardResult {
    let answers = matches!(token::Client::new(env, token).try_decimals(), Ok(Ok(_)));
    validate!(
        env,
        answers,
        ErrorCode::InvalidTokenAddress,
        "Invalid token address",
        token.clone()
    )
}
