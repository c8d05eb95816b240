use handguard::{
    error::HandguardResult,
    math::{
        helpers::{get_percentage, usd_to_token_amount},
        safe_math::SafeMath,
    },
};
use soroban_sdk::{log, token, Address, Env, Map, Vec};

use crate::{
    events::FundEvents,
    nav::{value_fund, Holding, Valuation},
    storage::{get_proportions, Config},
    swap::SwapAdapter,
};

fn target_value(env: &Env, valuation: &Valuation, proportions: &Map<Address, u32>, token: &Address) -> HandguardResult<i128> {
    get_percentage(env, valuation.nav_usd, proportions.get(token.clone()).unwrap_or(0))
}

/// Swaps surplus holdings into native, then native into deficit holdings,
/// until every basket token sits near its target share of NAV. Returns the
/// NAV (USD) measured before trading.
pub fn rebalance_holdings(env: &Env, config: &Config, basket: &Vec<Address>) -> HandguardResult<i128> {
    let valuation = value_fund(env, config, basket)?;
    let nav_usd = valuation.nav_usd;

    if nav_usd == 0 {
        log!(env, "Fund: rebalance: nothing to rebalance");
        FundEvents::rebalanced(env, 0);
        return Ok(0);
    }

    let proportions = get_proportions(env);
    let swap = SwapAdapter::new(env, config);

    sell_surplus(env, config, &valuation, &proportions, &swap)?;
    buy_deficits(env, config, &valuation, &proportions, &swap)?;

    FundEvents::rebalanced(env, nav_usd);
    Ok(nav_usd)
}

fn sell_surplus(
    env: &Env,
    config: &Config,
    valuation: &Valuation,
    proportions: &Map<Address, u32>,
    swap: &SwapAdapter,
) -> HandguardResult {
    for holding in valuation.holdings.iter() {
        if holding.token == config.wrapped_native {
            continue;
        }
        let target = target_value(env, valuation, proportions, &holding.token)?;
        if holding.value_usd <= target {
            continue;
        }

        let excess_usd = holding.value_usd.safe_sub(target, env)?;
        let excess = usd_to_token_amount(env, excess_usd, holding.price, holding.decimals)?.min(holding.balance);
        swap.swap_exact_in(&holding, &valuation.native, excess)?;
    }

    Ok(())
}

/// Native the fund must keep when native is itself a basket token
fn native_reserve(env: &Env, valuation: &Valuation, proportions: &Map<Address, u32>) -> HandguardResult<i128> {
    if !valuation.native_in_basket {
        return Ok(0);
    }
    let native = &valuation.native;
    let target = target_value(env, valuation, proportions, &native.token)?;
    usd_to_token_amount(env, target, native.price, native.decimals)
}

fn buy_deficits(
    env: &Env,
    config: &Config,
    valuation: &Valuation,
    proportions: &Map<Address, u32>,
    swap: &SwapAdapter,
) -> HandguardResult {
    let fund = env.current_contract_address();
    let native_client = token::Client::new(env, &config.wrapped_native);
    let reserve = native_reserve(env, valuation, proportions)?;
    let native: &Holding = &valuation.native;

    for holding in valuation.holdings.iter() {
        if holding.token == config.wrapped_native {
            continue;
        }
        let target = target_value(env, valuation, proportions, &holding.token)?;
        if holding.value_usd >= target {
            continue;
        }

        let deficit_usd = target.safe_sub(holding.value_usd, env)?;
        let amount_out = usd_to_token_amount(env, deficit_usd, holding.price, holding.decimals)?;
        if amount_out == 0 {
            continue;
        }

        let available = native_client.balance(&fund).safe_sub(reserve, env)?;
        if available <= 0 {
            log!(env, "Fund: rebalance: no native left for deficits");
            break;
        }

        let max_amount_in = swap.max_amount_in(native, &holding, amount_out)?;
        if max_amount_in <= available {
            swap.swap_exact_out(native, &holding, amount_out, max_amount_in)?;
        } else {
            swap.swap_exact_in(native, &holding, available)?;
        }
    }

    Ok(())
}
