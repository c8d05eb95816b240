use handguard::error::ErrorCode;
use pretty_assertions::assert_eq;
use soroban_sdk::{testutils::Address as _, vec, Address, Env};

use super::setup::{deploy_fund_contract, setup_fund, Market, ONE};

#[test]
fn full_exit_returns_basket_value_minus_fee() {
    let env = Env::default();
    let t = setup_fund(&env);
    t.fund.buy(&t.buyer, &(10 * ONE));

    let returned = t.fund.sell(&t.buyer, &(10 * ONE));

    // both slices swap back to 4.95 native, 1% fee on 9.9 native
    assert_eq!(returned, 98_010_000);
    assert_eq!(
        t.market.native.client.balance(&t.buyer),
        990 * ONE + 98_010_000
    );
    assert_eq!(t.fund.total_supply(), 0);
    assert_eq!(t.fund.balance(&t.buyer), 0);
    assert_eq!(t.fund.get_token_balance(&t.market.tok1.address()), 0);
    assert_eq!(t.fund.get_token_balance(&t.market.tok2.address()), 0);

    assert_eq!(t.market.native.client.balance(&t.creator), 500_000 + 495_000);
    assert_eq!(t.market.native.client.balance(&t.treasury), 500_000 + 495_000);
}

#[test]
fn partial_exit_redeems_proportional_slices() {
    let env = Env::default();
    let t = setup_fund(&env);
    t.fund.buy(&t.buyer, &(10 * ONE));

    let returned = t.fund.sell(&t.buyer, &(5 * ONE));

    assert_eq!(returned, 49_005_000);
    assert_eq!(t.fund.balance(&t.buyer), 5 * ONE);
    assert_eq!(t.fund.total_supply(), 5 * ONE);
    assert_eq!(t.fund.get_token_balance(&t.market.tok1.address()), 1_980_000);
    assert_eq!(t.fund.get_token_balance(&t.market.tok2.address()), 792_000);
}

#[test]
fn idle_native_is_shared_on_exit() {
    let env = Env::default();
    let t = setup_fund(&env);
    t.fund.buy(&t.buyer, &(10 * ONE));
    t.market.native.admin.mint(&t.fund.address, &(10 * ONE));

    let returned = t.fund.sell(&t.buyer, &(5 * ONE));

    // half of the idle 10 native plus half of the basket
    assert_eq!(returned, 98_505_000);
    assert_eq!(t.fund.get_token_balance(&t.market.native.address()), 5 * ONE);
}

#[test]
fn native_basket_slice_is_paid_without_swap() {
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

    let returned = fund.sell(&buyer, &(10 * ONE));

    assert_eq!(returned, 98_010_000);
    assert_eq!(fund.get_token_balance(&market.native.address()), 0);
    assert_eq!(fund.get_token_balance(&market.tok1.address()), 0);
}

#[test]
fn zero_sell_fails() {
    let env = Env::default();
    let t = setup_fund(&env);
    t.fund.buy(&t.buyer, &(10 * ONE));

    assert_eq!(
        t.fund.try_sell(&t.buyer, &0),
        Err(Ok(ErrorCode::ZeroSellAmount))
    );
}

#[test]
fn selling_more_than_held_fails() {
    let env = Env::default();
    let t = setup_fund(&env);
    let stranger = Address::generate(&env);
    t.fund.buy(&t.buyer, &(10 * ONE));

    assert_eq!(
        t.fund.try_sell(&t.buyer, &(10 * ONE + 1)),
        Err(Ok(ErrorCode::InsufficientFundTokens))
    );
    assert_eq!(
        t.fund.try_sell(&stranger, &1),
        Err(Ok(ErrorCode::InsufficientFundTokens))
    );
    assert_eq!(t.fund.balance(&t.buyer), 10 * ONE);
}

#[test]
fn dust_sell_with_nothing_to_return_fails() {
    let env = Env::default();
    env.mock_all_auths();
    env.cost_estimate().budget().reset_unlimited();

    let market = Market::new(&env);
    let creator = Address::generate(&env);
    let treasury = Address::generate(&env);
    let buyer = Address::generate(&env);
    market.native.admin.mint(&buyer, &(100 * ONE));

    let tokens = vec![&env, market.tok1.address()];
    let fund = deploy_fund_contract(&env, &market, &creator, &treasury, tokens);
    fund.buy(&buyer, &(10 * ONE));
    assert_eq!(fund.get_token_balance(&market.tok1.address()), 7_920_000);

    // 7_920_000 × 1 / 100_000_000 rounds to zero
    assert_eq!(fund.try_sell(&buyer, &1), Err(Ok(ErrorCode::NoValueToReturn)));
    assert_eq!(fund.balance(&buyer), 10 * ONE);
}

#[test]
#[should_panic(expected = "Error(Contract, #32)")]
fn bad_fill_on_exit_aborts() {
    let env = Env::default();
    let t = setup_fund(&env);
    t.fund.buy(&t.buyer, &(10 * ONE));

    t.market.router.set_haircut(&500);

    t.fund.sell(&t.buyer, &(10 * ONE));
}

#[test]
fn round_trip_of_several_holders_conserves_shares() {
    let env = Env::default();
    let t = setup_fund(&env);
    let others = [Address::generate(&env), Address::generate(&env)];
    for other in others.iter() {
        t.market.native.admin.mint(other, &(100 * ONE));
    }

    t.fund.buy(&t.buyer, &(10 * ONE));
    t.fund.buy(&others[0], &(3 * ONE));
    t.fund.buy(&others[1], &(7 * ONE));
    t.fund.sell(&others[0], &t.fund.balance(&others[0]));
    t.fund.sell(&t.buyer, &(4 * ONE));

    let held = t.fund.balance(&t.buyer) + t.fund.balance(&others[0]) + t.fund.balance(&others[1]);
    assert_eq!(held, t.fund.total_supply());
    assert_eq!(t.fund.balance(&others[0]), 0);
}
