use handguard::{
    error::HandguardResult,
    math::{
        helpers::{token_value_usd, usd_to_token_amount},
        safe_math::SafeMath,
    },
    oracle::PriceOracleClient,
};
use soroban_sdk::{contracttype, token, Address, Env, Vec};

use crate::storage::Config;

/// One token held by the fund, priced at the moment it was read
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Holding {
    pub token: Address,
    pub balance: i128,
    /// USD price, 8 decimals
    pub price: i128,
    pub decimals: u32,
    /// USD value, 8 decimals
    pub value_usd: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Valuation {
    /// Basket holdings, in basket order
    pub holdings: Vec<Holding>,
    /// Native token holding. Counted separately only when it is not a basket token.
    pub native: Holding,
    pub native_in_basket: bool,
    pub nav_usd: i128,
}

impl Valuation {
    /// Net asset value expressed in native units
    pub fn nav_native(&self, env: &Env) -> HandguardResult<i128> {
        usd_to_token_amount(env, self.nav_usd, self.native.price, self.native.decimals)
    }
}

fn read_holding(env: &Env, oracle: &PriceOracleClient, token: &Address) -> HandguardResult<Holding> {
    let client = token::Client::new(env, token);
    let balance = client.balance(&env.current_contract_address());
    let decimals = client.decimals();
    let price = oracle.get_price(token);
    let value_usd = token_value_usd(env, balance, price, decimals)?;

    Ok(Holding {
        token: token.clone(),
        balance,
        price,
        decimals,
        value_usd,
    })
}

/// Prices every basket token plus the native token. A token without a usable
/// price aborts the whole valuation.
pub fn value_fund(env: &Env, config: &Config, basket: &Vec<Address>) -> HandguardResult<Valuation> {
    let oracle = PriceOracleClient::new(env, &config.oracle);

    let mut holdings = Vec::new(env);
    let mut nav_usd: i128 = 0;
    for token in basket.iter() {
        let holding = read_holding(env, &oracle, &token)?;
        nav_usd = nav_usd.safe_add(holding.value_usd, env)?;
        holdings.push_back(holding);
    }

    let native_in_basket = basket.contains(&config.wrapped_native);
    let native = read_holding(env, &oracle, &config.wrapped_native)?;
    if !native_in_basket {
        nav_usd = nav_usd.safe_add(native.value_usd, env)?;
    }

    Ok(Valuation {
        holdings,
        native,
        native_in_basket,
        nav_usd,
    })
}
