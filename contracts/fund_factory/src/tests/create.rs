use handguard::{
    constants::{MAX_FUND_TOKENS, ZERO_CONTRACT},
    error::ErrorCode,
    types::FundInfo,
};
use handguard_fund::FundClient;
use pretty_assertions::assert_eq;
use soroban_sdk::{
    testutils::{Address as _, Events},
    vec, Address, Env, IntoVal, String, Symbol, Val, Vec,
};

use super::setup::{
    deploy_token_contract, dummy_wasm_hash, install_fund_wasm, setup_factory, CREATION_FEE, ONE,
};

#[test]
fn create_fund_deploys_and_registers() {
    let env = Env::default();
    let hash = install_fund_wasm(&env);
    let t = setup_factory(&env, hash);
    let name = String::from_str(&env, "Stellar Blue Chips");
    let ticker = String::from_str(&env, "SBC");

    let address = t
        .factory
        .create_fund(&t.creator, &name, &ticker, &t.tokens);

    let fund = FundClient::new(&env, &address);
    assert_eq!(fund.creator(), t.creator);
    assert_eq!(fund.owner(), t.creator);
    assert_eq!(fund.name(), name);
    assert_eq!(fund.symbol(), ticker);
    assert_eq!(fund.get_underlying_tokens(), t.tokens);
    assert_eq!(fund.treasury(), t.treasury);
    assert_eq!(fund.oracle(), t.oracle);
    assert_eq!(fund.dex(), t.dex);
    assert_eq!(fund.wrapped_native(), t.native);
    assert_eq!(fund.target_proportion(&t.tokens.get(0).unwrap()), 50);

    assert_eq!(
        t.factory.get_fund(&0),
        FundInfo {
            id: 0,
            address: address.clone(),
            creator: t.creator.clone(),
            name,
            ticker,
            tokens: t.tokens.clone(),
        }
    );
    assert_eq!(t.factory.get_fund_address(&0), address);
    assert_eq!(t.factory.get_total_funds(), 1);
    assert_eq!(t.factory.get_creator_funds(&t.creator), vec![&env, 0]);
}

#[test]
fn creation_fee_goes_to_treasury() {
    let env = Env::default();
    let hash = install_fund_wasm(&env);
    let t = setup_factory(&env, hash);

    t.factory.create_fund(
        &t.creator,
        &String::from_str(&env, "Stellar Blue Chips"),
        &String::from_str(&env, "SBC"),
        &t.tokens,
    );

    assert_eq!(t.fee_token.balance(&t.creator), 1_000 * ONE - CREATION_FEE);
    assert_eq!(t.fee_token.balance(&t.treasury), CREATION_FEE);
    assert_eq!(
        t.fee_token.allowance(&t.creator, &t.factory.address),
        9 * CREATION_FEE
    );
}

#[test]
fn create_fund_emits_created_event() {
    let env = Env::default();
    let hash = install_fund_wasm(&env);
    let t = setup_factory(&env, hash);
    let name = String::from_str(&env, "Stellar Blue Chips");
    let ticker = String::from_str(&env, "SBC");

    let address = t
        .factory
        .create_fund(&t.creator, &name, &ticker, &t.tokens);

    let topics: Vec<Val> = (Symbol::new(&env, "fund_created"), 0_u32, t.creator.clone()).into_val(&env);
    let (_, _, data) = env
        .events()
        .all()
        .iter()
        .find(|(contract, event_topics, _)| *contract == t.factory.address && *event_topics == topics)
        .unwrap();
    let payload: (String, String, Address, Vec<Address>) = data.into_val(&env);

    assert_eq!(payload, (name, ticker, address, t.tokens.clone()));
}

#[test]
fn ids_are_dense_and_tracked_per_creator() {
    let env = Env::default();
    let hash = install_fund_wasm(&env);
    let t = setup_factory(&env, hash);
    let other = Address::generate(&env);
    t.fee_token.mint(&other, &CREATION_FEE);
    t.fee_token
        .approve(&other, &t.factory.address, &CREATION_FEE, &10_000);

    let ticker = String::from_str(&env, "IDX");
    let first = t.factory.create_fund(
        &t.creator,
        &String::from_str(&env, "First"),
        &ticker,
        &t.tokens,
    );
    let second = t.factory.create_fund(
        &other,
        &String::from_str(&env, "Second"),
        &ticker,
        &t.tokens,
    );
    let third = t.factory.create_fund(
        &t.creator,
        &String::from_str(&env, "Third"),
        &ticker,
        &t.tokens,
    );

    assert_eq!(t.factory.get_total_funds(), 3);
    assert_eq!(
        t.factory.get_funds(&0, &3),
        vec![&env, first, second.clone(), third.clone()]
    );
    assert_eq!(t.factory.get_funds(&1, &3), vec![&env, second, third]);
    assert_eq!(t.factory.get_creator_funds(&t.creator), vec![&env, 0, 2]);
    assert_eq!(t.factory.get_creator_funds(&other), vec![&env, 1]);
    assert_eq!(t.fee_token.balance(&other), 0);
}

#[test]
fn invalid_metadata_is_rejected() {
    let env = Env::default();
    let t = setup_factory(&env, dummy_wasm_hash(&env));
    let name = String::from_str(&env, "Stellar Blue Chips");
    let ticker = String::from_str(&env, "SBC");
    let empty = String::from_str(&env, "");

    assert_eq!(
        t.factory
            .try_create_fund(&t.creator, &empty, &ticker, &t.tokens),
        Err(Ok(ErrorCode::EmptyFundName))
    );
    assert_eq!(
        t.factory
            .try_create_fund(&t.creator, &name, &empty, &t.tokens),
        Err(Ok(ErrorCode::EmptyFundTicker))
    );
    assert_eq!(
        t.factory
            .try_create_fund(&t.creator, &name, &ticker, &vec![&env]),
        Err(Ok(ErrorCode::EmptyTokenList))
    );
}

#[test]
fn invalid_baskets_are_rejected() {
    let env = Env::default();
    let t = setup_factory(&env, dummy_wasm_hash(&env));
    let name = String::from_str(&env, "Stellar Blue Chips");
    let ticker = String::from_str(&env, "SBC");
    let tok1 = t.tokens.get(0).unwrap();

    let mut many = vec![&env];
    for _ in 0..=MAX_FUND_TOKENS {
        many.push_back(deploy_token_contract(&env, &t.owner));
    }
    assert_eq!(
        t.factory.try_create_fund(&t.creator, &name, &ticker, &many),
        Err(Ok(ErrorCode::TooManyTokens))
    );

    assert_eq!(
        t.factory.try_create_fund(
            &t.creator,
            &name,
            &ticker,
            &vec![&env, tok1.clone(), tok1.clone()]
        ),
        Err(Ok(ErrorCode::DuplicateToken))
    );

    let zero = Address::from_string(&String::from_str(&env, ZERO_CONTRACT));
    assert_eq!(
        t.factory
            .try_create_fund(&t.creator, &name, &ticker, &vec![&env, tok1.clone(), zero]),
        Err(Ok(ErrorCode::InvalidTokenAddress))
    );

    // an address without a token contract behind it
    let not_a_token = Address::generate(&env);
    assert_eq!(
        t.factory
            .try_create_fund(&t.creator, &name, &ticker, &vec![&env, tok1, not_a_token]),
        Err(Ok(ErrorCode::InvalidTokenAddress))
    );

    assert_eq!(t.factory.get_total_funds(), 0);
    assert_eq!(t.fee_token.balance(&t.creator), 1_000 * ONE);
}

#[test]
fn creators_without_fee_are_rejected() {
    let env = Env::default();
    let t = setup_factory(&env, dummy_wasm_hash(&env));
    let name = String::from_str(&env, "Stellar Blue Chips");
    let ticker = String::from_str(&env, "SBC");

    let broke = Address::generate(&env);
    t.fee_token.mint(&broke, &(CREATION_FEE - 1));
    t.fee_token
        .approve(&broke, &t.factory.address, &CREATION_FEE, &10_000);
    assert_eq!(
        t.factory.try_create_fund(&broke, &name, &ticker, &t.tokens),
        Err(Ok(ErrorCode::InsufficientFeeBalance))
    );

    let unapproved = Address::generate(&env);
    t.fee_token.mint(&unapproved, &CREATION_FEE);
    t.fee_token
        .approve(&unapproved, &t.factory.address, &(CREATION_FEE - 1), &10_000);
    assert_eq!(
        t.factory
            .try_create_fund(&unapproved, &name, &ticker, &t.tokens),
        Err(Ok(ErrorCode::InsufficientFeeAllowance))
    );

    assert_eq!(t.fee_token.balance(&t.treasury), 0);
    assert_eq!(t.factory.get_total_funds(), 0);
}
