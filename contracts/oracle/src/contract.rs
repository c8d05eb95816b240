use handguard::{
    constants::PRICE_DECIMALS,
    error::{ErrorCode, HandguardResult},
    math::safe_math::SafeMath,
    oracle::PriceFeedClient,
    ownable::{self, read_owner, require_owner, write_owner},
    utils::bump_instance,
    validate,
};
use soroban_sdk::{contract, contractimpl, contractmeta, log, Address, Env};

use crate::{
    events::OracleEvents,
    oracle::PriceOracleTrait,
    storage::{
        get_config, get_price_feed, is_initialized, save_config, save_price_feed, set_initialized,
        Config,
    },
};

contractmeta!(
    key = "Description",
    val = "Registry of USD price feeds for the tokens held by Handguard index funds"
);

#[contract]
pub struct PriceOracle;

/// Rescales a feed answer from the feed's decimals to the oracle's 8 decimals
fn normalize_price(env: &Env, answer: i128, decimals: u32) -> HandguardResult<i128> {
    let price = if decimals > PRICE_DECIMALS {
        answer.safe_div(10_i128.safe_pow(decimals - PRICE_DECIMALS, env)?, env)?
    } else {
        answer.safe_mul(10_i128.safe_pow(PRICE_DECIMALS - decimals, env)?, env)?
    };

    validate!(
        env,
        price > 0,
        ErrorCode::OracleNonPositive,
        "Oracle: normalize_price: price rounds to zero",
        answer,
        decimals
    )?;

    Ok(price)
}

#[contractimpl]
impl PriceOracleTrait for PriceOracle {
    fn initialize(env: Env, owner: Address, max_price_age: u64) -> Result<(), ErrorCode> {
        if is_initialized(&env) {
            log!(
                &env,
                "Oracle: Initialize: initializing contract twice is not allowed"
            );
            return Err(ErrorCode::AlreadyInitialized);
        }

        set_initialized(&env);
        write_owner(&env, &owner);
        bump_instance(&env);

        save_config(&env, Config { max_price_age });

        OracleEvents::initialize(&env, owner, max_price_age);

        Ok(())
    }

    fn set_price_feed(env: Env, sender: Address, token: Address, feed: Address) -> Result<(), ErrorCode> {
        require_owner(&env, &sender)?;
        bump_instance(&env);

        save_price_feed(&env, &token, &feed);

        OracleEvents::price_feed_set(&env, token, feed);

        Ok(())
    }

    fn update_max_price_age(env: Env, sender: Address, max_price_age: u64) -> Result<(), ErrorCode> {
        require_owner(&env, &sender)?;
        bump_instance(&env);

        save_config(
            &env,
            Config {
                max_price_age,
                ..get_config(&env)
            },
        );

        OracleEvents::max_price_age_updated(&env, max_price_age);

        Ok(())
    }

    fn transfer_ownership(env: Env, sender: Address, new_owner: Address) -> Result<(), ErrorCode> {
        bump_instance(&env);
        ownable::transfer_ownership(&env, &sender, &new_owner)
    }

    // ################################################################
    //                             Queries
    // ################################################################

    fn get_price(env: Env, token: Address) -> Result<i128, ErrorCode> {
        bump_instance(&env);

        let feed = get_price_feed(&env, &token).ok_or_else(|| {
            log!(&env, "Oracle: get_price: Price feed not found", token.clone());
            ErrorCode::PriceFeedNotFound
        })?;

        let feed_client = PriceFeedClient::new(&env, &feed);
        let round = feed_client.latest_round_data();

        validate!(
            &env,
            round.answer > 0,
            ErrorCode::OracleNonPositive,
            "Oracle: get_price: non positive answer",
            round.answer
        )?;

        let config = get_config(&env);
        if config.max_price_age > 0 {
            let age = env.ledger().timestamp().saturating_sub(round.updated_at);
            validate!(
                &env,
                age <= config.max_price_age,
                ErrorCode::OracleStale,
                "Oracle: get_price: stale answer",
                age
            )?;
        }

        normalize_price(&env, round.answer, feed_client.decimals())
    }

    fn get_price_feed(env: Env, token: Address) -> Option<Address> {
        bump_instance(&env);
        get_price_feed(&env, &token)
    }

    fn get_config(env: Env) -> Config {
        bump_instance(&env);
        get_config(&env)
    }

    fn owner(env: Env) -> Result<Address, ErrorCode> {
        bump_instance(&env);
        read_owner(&env)
    }
}

