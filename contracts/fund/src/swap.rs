use handguard::{
    constants::{BPS_DENOMINATOR, SWAP_DEADLINE_SECONDS},
    dex::DexRouterClient,
    error::{ErrorCode, HandguardResult},
    math::{
        helpers::{decimals_factor, get_bps, mul_div_ceil, token_value_usd, usd_to_token_amount},
        safe_math::SafeMath,
    },
    validate,
};
use soroban_sdk::{
    auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation},
    log, vec, Address, Env, IntoVal, Symbol,
};

use crate::{nav::Holding, storage::Config};

/// Trades between the fund and the configured router. Every swap carries a
/// minimum (or maximum) bound derived from oracle prices and the fund's
/// slippage tolerance, plus a deadline of now + 5 minutes.
pub struct SwapAdapter<'a> {
    env: &'a Env,
    router: DexRouterClient<'a>,
    slippage_bps: u32,
}

impl<'a> SwapAdapter<'a> {
    pub fn new(env: &'a Env, config: &Config) -> Self {
        SwapAdapter {
            env,
            router: DexRouterClient::new(env, &config.dex),
            slippage_bps: config.slippage_bps,
        }
    }

    fn deadline(&self) -> u64 {
        self.env.ledger().timestamp() + SWAP_DEADLINE_SECONDS
    }

    /// Oracle-implied output of selling `amount_in` of `from` for `to`
    pub fn expected_amount_out(&self, from: &Holding, to: &Holding, amount_in: i128) -> HandguardResult<i128> {
        let value_usd = token_value_usd(self.env, amount_in, from.price, from.decimals)?;
        usd_to_token_amount(self.env, value_usd, to.price, to.decimals)
    }

    /// Oracle-implied input needed for `amount_out` of `to`, padded by the
    /// slippage tolerance
    pub fn max_amount_in(&self, from: &Holding, to: &Holding, amount_out: i128) -> HandguardResult<i128> {
        validate!(self.env, from.price > 0, ErrorCode::OracleNonPositive)?;

        let value_usd = mul_div_ceil(self.env, amount_out, to.price, decimals_factor(self.env, to.decimals)?)?;
        let needed = mul_div_ceil(self.env, value_usd, decimals_factor(self.env, from.decimals)?, from.price)?;

        mul_div_ceil(
            self.env,
            needed,
            BPS_DENOMINATOR.safe_add(self.slippage_bps as i128, self.env)?,
            BPS_DENOMINATOR,
        )
    }

    /// Lets the router pull exactly `amount` of `token` from the fund during
    /// the next call
    fn authorize_pull(&self, token: &Address, amount: i128) {
        let fund = self.env.current_contract_address();
        self.env.authorize_as_current_contract(vec![
            self.env,
            InvokerContractAuthEntry::Contract(SubContractInvocation {
                context: ContractContext {
                    contract: token.clone(),
                    fn_name: Symbol::new(self.env, "transfer"),
                    args: (fund, self.router.address.clone(), amount).into_val(self.env),
                },
                sub_invocations: vec![self.env],
            }),
        ]);
    }

    /// Sells exactly `amount_in` of `from`, returning the amount of `to` received
    pub fn swap_exact_in(&self, from: &Holding, to: &Holding, amount_in: i128) -> HandguardResult<i128> {
        if amount_in <= 0 {
            return Ok(0);
        }

        let expected = self.expected_amount_out(from, to, amount_in)?;
        let min_amount_out = get_bps(
            self.env,
            expected,
            BPS_DENOMINATOR.safe_sub(self.slippage_bps as i128, self.env)?,
        )?;

        self.authorize_pull(&from.token, amount_in);
        let amount_out = self.router.swap_exact_in(
            &self.env.current_contract_address(),
            &from.token,
            &to.token,
            &amount_in,
            &min_amount_out,
            &self.deadline(),
        );

        log!(
            self.env,
            "Fund: swap_exact_in: filled",
            from.token.clone(),
            to.token.clone(),
            amount_in,
            amount_out
        );

        Ok(amount_out)
    }

    /// Buys exactly `amount_out` of `to` spending at most `max_amount_in` of
    /// `from`, returning the amount of `from` spent
    pub fn swap_exact_out(
        &self,
        from: &Holding,
        to: &Holding,
        amount_out: i128,
        max_amount_in: i128,
    ) -> HandguardResult<i128> {
        if amount_out <= 0 {
            return Ok(0);
        }

        let quoted_in = self
            .router
            .get_amount_in(&from.token, &to.token, &amount_out);
        validate!(
            self.env,
            quoted_in <= max_amount_in,
            ErrorCode::SlippageExceeded,
            "Fund: swap_exact_out: quote above bound",
            quoted_in,
            max_amount_in
        )?;

        self.authorize_pull(&from.token, quoted_in);
        let amount_in = self.router.swap_exact_out(
            &self.env.current_contract_address(),
            &from.token,
            &to.token,
            &amount_out,
            &quoted_in,
            &self.deadline(),
        );

        log!(
            self.env,
            "Fund: swap_exact_out: filled",
            from.token.clone(),
            to.token.clone(),
            amount_in,
            amount_out
        );

        Ok(amount_in)
    }
}
