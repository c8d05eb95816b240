use handguard::error::ErrorCode;
use pretty_assertions::assert_eq;
use soroban_sdk::{
    testutils::{Address as _, Events},
    vec, Address, Env, IntoVal, Symbol, Val, Vec,
};

use super::setup::{deploy_fund_contract, deploy_token_contract, setup_fund, Market, ONE};

#[test]
fn first_purchase_mints_one_to_one() {
    let env = Env::default();
    let t = setup_fund(&env);

    let shares = t.fund.buy(&t.buyer, &(10 * ONE));

    assert_eq!(shares, 10 * ONE);
    assert_eq!(t.fund.balance(&t.buyer), 10 * ONE);
    assert_eq!(t.fund.total_supply(), 10 * ONE);
    assert_eq!(t.market.native.client.balance(&t.buyer), 990 * ONE);
}

#[test]
fn purchase_fee_is_split_between_creator_and_treasury() {
    let env = Env::default();
    let t = setup_fund(&env);

    t.fund.buy(&t.buyer, &(10 * ONE));

    // 1% of 10 native, half each
    assert_eq!(t.market.native.client.balance(&t.creator), 500_000);
    assert_eq!(t.market.native.client.balance(&t.treasury), 500_000);
}

#[test]
fn net_payment_is_allocated_by_weight() {
    let env = Env::default();
    let t = setup_fund(&env);

    t.fund.buy(&t.buyer, &(10 * ONE));

    // 4.95 native per side, worth $0.396 at $0.08
    assert_eq!(t.fund.get_token_balance(&t.market.tok1.address()), 3_960_000);
    assert_eq!(t.fund.get_token_balance(&t.market.tok2.address()), 1_584_000);
    assert_eq!(t.fund.get_token_balance(&t.market.native.address()), 0);

    assert_eq!(t.fund.get_nav_usd(), 79_200_000);
    assert_eq!(t.fund.get_current_fund_value(), 99_000_000);
}

#[test]
fn later_purchases_mint_against_nav() {
    let env = Env::default();
    let t = setup_fund(&env);
    let second_buyer = Address::generate(&env);
    t.market.native.admin.mint(&second_buyer, &(100 * ONE));

    t.fund.buy(&t.buyer, &(10 * ONE));
    let nav = t.fund.get_current_fund_value();
    let supply = t.fund.total_supply();

    let shares = t.fund.buy(&second_buyer, &(5 * ONE));

    // priced on the 4.95 native that reaches the basket
    assert_eq!(shares, (5 * ONE - 500_000) * supply / nav);
    assert_eq!(shares, 50_000_000);
    assert_eq!(t.fund.total_supply(), supply + shares);
    assert_eq!(
        t.fund.balance(&t.buyer) + t.fund.balance(&second_buyer),
        t.fund.total_supply()
    );
}

#[test]
fn later_purchases_keep_existing_holders_whole() {
    let env = Env::default();
    let t = setup_fund(&env);
    let second_buyer = Address::generate(&env);
    t.market.native.admin.mint(&second_buyer, &(100 * ONE));

    t.fund.buy(&t.buyer, &(10 * ONE));
    let stake = |holder: &Address| {
        t.fund.get_current_fund_value() * t.fund.balance(holder) / t.fund.total_supply()
    };
    let before = stake(&t.buyer);

    t.fund.buy(&second_buyer, &(5 * ONE));

    assert_eq!(before, 99_000_000);
    assert_eq!(stake(&t.buyer), before);
    assert_eq!(stake(&second_buyer), 49_500_000);
}

#[test]
fn purchase_emits_bought_event() {
    let env = Env::default();
    let t = setup_fund(&env);

    t.fund.buy(&t.buyer, &(10 * ONE));

    let topics: Vec<Val> = (Symbol::new(&env, "fund_token_bought"), t.buyer.clone()).into_val(&env);
    let (_, _, data) = env
        .events()
        .all()
        .iter()
        .find(|(contract, event_topics, _)| *contract == t.fund.address && *event_topics == topics)
        .unwrap();
    let (amount, shares, fee): (i128, i128, i128) = data.into_val(&env);

    assert_eq!((amount, shares, fee), (10 * ONE, 10 * ONE, 1_000_000));
}

#[test]
fn zero_purchase_fails() {
    let env = Env::default();
    let t = setup_fund(&env);

    assert_eq!(
        t.fund.try_buy(&t.buyer, &0),
        Err(Ok(ErrorCode::ZeroPurchaseAmount))
    );
}

#[test]
fn dust_purchase_against_large_nav_fails() {
    let env = Env::default();
    let t = setup_fund(&env);

    t.fund.buy(&t.buyer, &(10 * ONE));
    // idle native counts toward NAV
    t.market
        .native
        .admin
        .mint(&t.fund.address, &(10_000 * ONE));

    assert_eq!(
        t.fund.try_buy(&t.buyer, &1),
        Err(Ok(ErrorCode::PurchaseTooSmall))
    );
}

#[test]
fn native_basket_portion_is_kept_without_swap() {
    let env = Env::default();
    env.mock_all_auths();
    env.cost_estimate().budget().reset_unlimited();

    let market = Market::new(&env);
    let creator = Address::generate(&env);
    let treasury = Address::generate(&env);
    let buyer = Address::generate(&env);
    market.native.admin.mint(&buyer, &(100 * ONE));

    let tokens = vec![&env, market.native.address(), market.tok1.address()];
    let fund = deploy_fund_contract(&env, &market, &creator, &treasury, tokens);

    fund.buy(&buyer, &(10 * ONE));

    assert_eq!(fund.get_token_balance(&market.native.address()), 49_500_000);
    assert_eq!(fund.get_token_balance(&market.tok1.address()), 3_960_000);
    assert_eq!(fund.get_current_fund_value(), 99_000_000);
}

#[test]
#[should_panic(expected = "Error(Contract, #29)")]
fn purchase_with_unpriced_token_aborts() {
    let env = Env::default();
    env.mock_all_auths();
    env.cost_estimate().budget().reset_unlimited();

    let market = Market::new(&env);
    let creator = Address::generate(&env);
    let treasury = Address::generate(&env);
    let buyer = Address::generate(&env);
    market.native.admin.mint(&buyer, &(100 * ONE));

    let unlisted = deploy_token_contract(&env, &market.admin);
    let tokens = vec![&env, market.tok1.address(), unlisted.address()];
    let fund = deploy_fund_contract(&env, &market, &creator, &treasury, tokens);

    fund.buy(&buyer, &(10 * ONE));
}

#[test]
#[should_panic(expected = "Error(Contract, #32)")]
fn fill_below_slippage_tolerance_aborts() {
    let env = Env::default();
    let t = setup_fund(&env);

    // 5% worse than the oracle, tolerance is 3%
    t.market.router.set_haircut(&500);

    t.fund.buy(&t.buyer, &(10 * ONE));
}

#[test]
fn failed_purchase_leaves_no_trace() {
    let env = Env::default();
    let t = setup_fund(&env);
    t.market.router.set_haircut(&500);

    assert!(t.fund.try_buy(&t.buyer, &(10 * ONE)).is_err());

    assert_eq!(t.fund.total_supply(), 0);
    assert_eq!(t.fund.balance(&t.buyer), 0);
    assert_eq!(t.market.native.client.balance(&t.buyer), 1_000 * ONE);
    assert_eq!(t.market.native.client.balance(&t.creator), 0);
    assert_eq!(t.fund.get_token_balance(&t.market.tok1.address()), 0);
}

#[test]
fn wider_tolerance_accepts_worse_fills() {
    let env = Env::default();
    let t = setup_fund(&env);
    t.market.router.set_haircut(&500);

    t.fund.update_slippage(&t.creator, &600);
    t.fund.buy(&t.buyer, &(10 * ONE));

    assert_eq!(t.fund.get_token_balance(&t.market.tok1.address()), 3_762_000);
    assert_eq!(t.fund.get_token_balance(&t.market.tok2.address()), 1_504_800);
}
