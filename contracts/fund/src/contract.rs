use handguard::{
    constants::DEFAULT_SLIPPAGE_BPS,
    error::{ErrorCode, HandguardResult},
    ledger::{
        allowance::{read_allowance, spend_allowance, write_allowance},
        balance::{self, check_nonnegative_amount, read_balance, read_total_supply},
        metadata::{read_decimal, read_name, read_symbol, write_metadata},
    },
    math::{
        helpers::{equal_proportions, get_percentage, mul_div_floor, split_fee},
        safe_math::SafeMath,
    },
    ownable::{self, read_owner, require_owner, write_owner},
    types::FundParams,
    unwrap_or_panic,
    utils::{bump_instance, validate_address, validate_basket, validate_fund_identity},
    validate, validate_bps,
};
use soroban_sdk::{
    contract, contractimpl, contractmeta, token, Address, Env, Map, String, Vec,
};
use soroban_token_sdk::{metadata::TokenMetadata, TokenUtils};

use crate::{
    events::FundEvents,
    fund::FundTrait,
    nav::{value_fund, Valuation},
    rebalance::rebalance_holdings,
    storage::{
        get_basket, get_config, get_creator, get_proportions, save_basket, save_config,
        save_creator, save_proportions, Config,
    },
    swap::SwapAdapter,
};

contractmeta!(
    key = "Description",
    val = "Handguard index fund: a basket of tokens bought and sold with native through shares"
);

#[contract]
pub struct Fund;

/// Pays the protocol fee on `amount` out of the fund's native balance and
/// returns it
fn pay_fees(env: &Env, config: &Config, amount: i128) -> HandguardResult<i128> {
    let (fee, creator_share, treasury_share) = split_fee(env, amount)?;

    let fund = env.current_contract_address();
    let native = token::Client::new(env, &config.wrapped_native);
    if creator_share > 0 {
        native.transfer(&fund, &get_creator(env), &creator_share);
    }
    if treasury_share > 0 {
        native.transfer(&fund, &config.treasury, &treasury_share);
    }

    Ok(fee)
}

/// Shares minted for a purchase of `amount`. Later buyers are priced on the
/// `net` value they add so the fee never comes out of existing holders.
fn shares_for_purchase(
    env: &Env,
    amount: i128,
    net: i128,
    supply: i128,
    valuation: &Valuation,
) -> HandguardResult<i128> {
    if supply == 0 {
        return Ok(amount);
    }

    let nav_native = valuation.nav_native(env)?;
    validate!(
        env,
        nav_native > 0,
        ErrorCode::ZeroNetAssetValue,
        "Fund: buy: shares outstanding against an empty fund",
        supply
    )?;

    let shares = mul_div_floor(env, net, supply, nav_native)?;
    validate!(
        env,
        shares > 0,
        ErrorCode::PurchaseTooSmall,
        "Fund: buy: purchase too small",
        amount
    )?;

    Ok(shares)
}

/// Swaps the weighted portions of `net` native into the basket tokens
fn allocate(env: &Env, config: &Config, valuation: &Valuation, net: i128) -> HandguardResult {
    let proportions = get_proportions(env);
    let swap = SwapAdapter::new(env, config);

    for holding in valuation.holdings.iter() {
        let weight = proportions.get(holding.token.clone()).unwrap_or(0);
        if weight == 0 || holding.token == config.wrapped_native {
            continue;
        }

        let portion = get_percentage(env, net, weight)?;
        swap.swap_exact_in(&valuation.native, &holding, portion)?;
    }

    Ok(())
}

/// Native collected by redeeming `shares` out of `supply`
fn redeem_slices(env: &Env, config: &Config, valuation: &Valuation, shares: i128, supply: i128) -> HandguardResult<i128> {
    let swap = SwapAdapter::new(env, config);

    let mut proceeds: i128 = 0;
    if !valuation.native_in_basket {
        proceeds = mul_div_floor(env, valuation.native.balance, shares, supply)?;
    }

    for holding in valuation.holdings.iter() {
        let slice = mul_div_floor(env, holding.balance, shares, supply)?;
        if slice == 0 {
            continue;
        }

        let received = if holding.token == config.wrapped_native {
            slice
        } else {
            swap.swap_exact_in(&holding, &valuation.native, slice)?
        };
        proceeds = proceeds.safe_add(received, env)?;
    }

    Ok(proceeds)
}

#[contractimpl]
impl Fund {
    pub fn __constructor(env: Env, creator: Address, params: FundParams) {
        unwrap_or_panic!(&env, validate_fund_identity(&env, &params.name, &params.ticker));
        unwrap_or_panic!(&env, validate_basket(&env, &params.tokens));
        for (address, err) in [
            (&params.treasury, ErrorCode::InvalidTreasuryAddress),
            (&params.oracle, ErrorCode::InvalidOracleAddress),
            (&params.dex, ErrorCode::InvalidDexAddress),
            (&params.wrapped_native, ErrorCode::InvalidWrappedNativeAddress),
        ] {
            unwrap_or_panic!(&env, validate_address(&env, address, err));
        }

        let weights = unwrap_or_panic!(&env, equal_proportions(&env, params.tokens.len()));
        let mut proportions = Map::new(&env);
        for (token, weight) in params.tokens.iter().zip(weights.iter()) {
            proportions.set(token, weight);
        }

        // shares are denominated like the payment asset
        let decimal = token::Client::new(&env, &params.wrapped_native).decimals();

        write_owner(&env, &creator);
        save_creator(&env, &creator);
        save_basket(&env, &params.tokens);
        save_proportions(&env, &proportions);
        save_config(
            &env,
            &Config {
                treasury: params.treasury,
                oracle: params.oracle,
                dex: params.dex,
                wrapped_native: params.wrapped_native,
                slippage_bps: DEFAULT_SLIPPAGE_BPS,
            },
        );
        write_metadata(
            &env,
            TokenMetadata {
                decimal,
                name: params.name,
                symbol: params.ticker,
            },
        );
        bump_instance(&env);
    }
}

#[contractimpl]
impl FundTrait for Fund {
    // ################################################################
    //                             OWNER
    // ################################################################

    fn set_proportions(
        env: Env,
        sender: Address,
        tokens: Vec<Address>,
        percentages: Vec<u32>,
    ) -> Result<(), ErrorCode> {
        require_owner(&env, &sender)?;
        validate!(
            &env,
            tokens.len() == percentages.len(),
            ErrorCode::ArrayLengthMismatch,
            "Array lengths mismatch",
            tokens.len(),
            percentages.len()
        )?;
        bump_instance(&env);

        let basket = get_basket(&env);
        let mut listed: Map<Address, u32> = Map::new(&env);
        let mut total: u32 = 0;
        for (token, percentage) in tokens.iter().zip(percentages.iter()) {
            validate!(
                &env,
                basket.contains(&token),
                ErrorCode::TokenNotInBasket,
                "Fund: set_proportions: token not in basket",
                token.clone()
            )?;
            validate!(
                &env,
                !listed.contains_key(token.clone()),
                ErrorCode::DuplicateToken,
                "Fund: set_proportions: token listed twice",
                token.clone()
            )?;
            validate!(
                &env,
                percentage <= 100,
                ErrorCode::ProportionsSumInvalid,
                "Proportions must sum to 100",
                percentage
            )?;
            listed.set(token, percentage);
            total = total.safe_add(percentage, &env)?;
        }
        validate!(
            &env,
            total == 100,
            ErrorCode::ProportionsSumInvalid,
            "Proportions must sum to 100",
            total
        )?;

        let mut proportions = Map::new(&env);
        for token in basket.iter() {
            let weight = listed.get(token.clone()).unwrap_or(0);
            proportions.set(token, weight);
        }
        save_proportions(&env, &proportions);

        FundEvents::proportions_updated(&env, tokens, percentages);

        rebalance_holdings(&env, &get_config(&env), &basket)?;

        Ok(())
    }

    fn rebalance(env: Env, sender: Address) -> Result<i128, ErrorCode> {
        require_owner(&env, &sender)?;
        bump_instance(&env);

        rebalance_holdings(&env, &get_config(&env), &get_basket(&env))
    }

    fn update_treasury(env: Env, sender: Address, treasury: Address) -> Result<(), ErrorCode> {
        require_owner(&env, &sender)?;
        validate_address(&env, &treasury, ErrorCode::InvalidTreasuryAddress)?;
        bump_instance(&env);

        save_config(
            &env,
            &Config {
                treasury: treasury.clone(),
                ..get_config(&env)
            },
        );
        FundEvents::treasury_updated(&env, treasury);

        Ok(())
    }

    fn update_oracle(env: Env, sender: Address, oracle: Address) -> Result<(), ErrorCode> {
        require_owner(&env, &sender)?;
        validate_address(&env, &oracle, ErrorCode::InvalidOracleAddress)?;
        bump_instance(&env);

        save_config(
            &env,
            &Config {
                oracle: oracle.clone(),
                ..get_config(&env)
            },
        );
        FundEvents::oracle_updated(&env, oracle);

        Ok(())
    }

    fn update_dex(env: Env, sender: Address, dex: Address) -> Result<(), ErrorCode> {
        require_owner(&env, &sender)?;
        validate_address(&env, &dex, ErrorCode::InvalidDexAddress)?;
        bump_instance(&env);

        save_config(
            &env,
            &Config {
                dex: dex.clone(),
                ..get_config(&env)
            },
        );
        FundEvents::dex_updated(&env, dex);

        Ok(())
    }

    fn update_wrapped_native(env: Env, sender: Address, wrapped_native: Address) -> Result<(), ErrorCode> {
        require_owner(&env, &sender)?;
        validate_address(&env, &wrapped_native, ErrorCode::InvalidWrappedNativeAddress)?;
        bump_instance(&env);

        save_config(
            &env,
            &Config {
                wrapped_native: wrapped_native.clone(),
                ..get_config(&env)
            },
        );
        FundEvents::wrapped_native_updated(&env, wrapped_native);

        Ok(())
    }

    fn update_slippage(env: Env, sender: Address, slippage_bps: u32) -> Result<(), ErrorCode> {
        require_owner(&env, &sender)?;
        validate_bps!(&env, slippage_bps)?;
        bump_instance(&env);

        save_config(
            &env,
            &Config {
                slippage_bps,
                ..get_config(&env)
            },
        );
        FundEvents::slippage_updated(&env, slippage_bps);

        Ok(())
    }

    fn transfer_ownership(env: Env, sender: Address, new_owner: Address) -> Result<(), ErrorCode> {
        bump_instance(&env);
        ownable::transfer_ownership(&env, &sender, &new_owner)
    }

    // ################################################################
    //                             USER
    // ################################################################

    fn buy(env: Env, buyer: Address, amount: i128) -> Result<i128, ErrorCode> {
        buyer.require_auth();
        validate!(&env, amount > 0, ErrorCode::ZeroPurchaseAmount, "Must send value")?;
        bump_instance(&env);

        let config = get_config(&env);
        let valuation = value_fund(&env, &config, &get_basket(&env))?;
        let (fee, _, _) = split_fee(&env, amount)?;
        let net = amount.safe_sub(fee, &env)?;
        let shares = shares_for_purchase(&env, amount, net, read_total_supply(&env), &valuation)?;

        let fund = env.current_contract_address();
        token::Client::new(&env, &config.wrapped_native).transfer(&buyer, &fund, &amount);

        pay_fees(&env, &config, amount)?;
        allocate(&env, &config, &valuation, net)?;

        balance::mint(&env, &buyer, shares)?;
        TokenUtils::new(&env).events().mint(fund, buyer.clone(), shares);
        FundEvents::fund_token_bought(&env, buyer, amount, shares, fee);

        Ok(shares)
    }

    fn sell(env: Env, seller: Address, shares: i128) -> Result<i128, ErrorCode> {
        seller.require_auth();
        validate!(
            &env,
            shares > 0,
            ErrorCode::ZeroSellAmount,
            "Amount must be greater than 0"
        )?;
        validate!(
            &env,
            read_balance(&env, &seller) >= shares,
            ErrorCode::InsufficientFundTokens,
            "Insufficient fund tokens",
            shares
        )?;
        bump_instance(&env);

        let config = get_config(&env);
        let valuation = value_fund(&env, &config, &get_basket(&env))?;
        let proceeds = redeem_slices(&env, &config, &valuation, shares, read_total_supply(&env))?;
        validate!(
            &env,
            proceeds > 0,
            ErrorCode::NoValueToReturn,
            "No value to return",
            shares
        )?;

        let fee = pay_fees(&env, &config, proceeds)?;
        let net = proceeds.safe_sub(fee, &env)?;

        balance::burn(&env, &seller, shares)?;
        TokenUtils::new(&env).events().burn(seller.clone(), shares);

        token::Client::new(&env, &config.wrapped_native).transfer(
            &env.current_contract_address(),
            &seller,
            &net,
        );
        FundEvents::fund_token_sold(&env, seller, shares, net, fee);

        Ok(net)
    }

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn creator(env: Env) -> Address {
        bump_instance(&env);
        get_creator(&env)
    }

    fn owner(env: Env) -> Result<Address, ErrorCode> {
        bump_instance(&env);
        read_owner(&env)
    }

    fn get_underlying_tokens(env: Env) -> Vec<Address> {
        bump_instance(&env);
        get_basket(&env)
    }

    fn target_proportion(env: Env, token: Address) -> u32 {
        bump_instance(&env);
        get_proportions(&env).get(token).unwrap_or(0)
    }

    fn get_proportions(env: Env) -> Map<Address, u32> {
        bump_instance(&env);
        get_proportions(&env)
    }

    fn get_current_fund_value(env: Env) -> Result<i128, ErrorCode> {
        bump_instance(&env);
        value_fund(&env, &get_config(&env), &get_basket(&env))?.nav_native(&env)
    }

    fn get_nav_usd(env: Env) -> Result<i128, ErrorCode> {
        bump_instance(&env);
        Ok(value_fund(&env, &get_config(&env), &get_basket(&env))?.nav_usd)
    }

    fn get_token_balance(env: Env, token: Address) -> i128 {
        bump_instance(&env);
        token::Client::new(&env, &token).balance(&env.current_contract_address())
    }

    fn treasury(env: Env) -> Address {
        bump_instance(&env);
        get_config(&env).treasury
    }

    fn oracle(env: Env) -> Address {
        bump_instance(&env);
        get_config(&env).oracle
    }

    fn dex(env: Env) -> Address {
        bump_instance(&env);
        get_config(&env).dex
    }

    fn wrapped_native(env: Env) -> Address {
        bump_instance(&env);
        get_config(&env).wrapped_native
    }

    fn get_config(env: Env) -> Config {
        bump_instance(&env);
        get_config(&env)
    }
}

// ################################################################
//                          Share token
// ################################################################

#[contractimpl]
impl Fund {
    pub fn total_supply(env: Env) -> i128 {
        bump_instance(&env);
        read_total_supply(&env)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        bump_instance(&env);
        read_allowance(&env, &from, &spender).amount
    }

    pub fn approve(env: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();
        unwrap_or_panic!(&env, check_nonnegative_amount(&env, amount));

        bump_instance(&env);

        unwrap_or_panic!(
            &env,
            write_allowance(&env, &from, &spender, amount, expiration_ledger)
        );
        TokenUtils::new(&env)
            .events()
            .approve(from, spender, amount, expiration_ledger);
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        bump_instance(&env);
        read_balance(&env, &id)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();

        bump_instance(&env);

        unwrap_or_panic!(&env, balance::transfer(&env, &from, &to, amount));
        TokenUtils::new(&env).events().transfer(from, to, amount);
    }

    pub fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        unwrap_or_panic!(&env, check_nonnegative_amount(&env, amount));

        bump_instance(&env);

        unwrap_or_panic!(&env, spend_allowance(&env, &from, &spender, amount));
        unwrap_or_panic!(&env, balance::transfer(&env, &from, &to, amount));
        TokenUtils::new(&env).events().transfer(from, to, amount);
    }

    pub fn decimals(env: Env) -> u32 {
        read_decimal(&env)
    }

    pub fn name(env: Env) -> String {
        read_name(&env)
    }

    pub fn symbol(env: Env) -> String {
        read_symbol(&env)
    }
}

