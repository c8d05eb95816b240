use handguard::{
    constants::MAX_TOKEN_DECIMALS,
    error::ErrorCode,
    ledger::{
        allowance::{read_allowance, spend_allowance, write_allowance},
        balance::{self, check_nonnegative_amount, read_balance, read_total_supply},
        metadata::{read_decimal, read_name, read_symbol, write_metadata},
    },
    ownable::{read_owner, write_owner},
    unwrap_or_panic,
    utils::bump_instance,
};
use soroban_sdk::token::{self, Interface as _};
use soroban_sdk::{contract, contractimpl, contractmeta, log, panic_with_error, Address, Env, String};
use soroban_token_sdk::metadata::TokenMetadata;
use soroban_token_sdk::TokenUtils;

contractmeta!(
    key = "Description",
    val = "Handguard governance token, paid as the fee to create an index fund"
);

#[contract]
pub struct FeeToken;

#[contractimpl]
impl FeeToken {
    pub fn __constructor(env: Env, owner: Address, decimal: u32, name: String, symbol: String) {
        if decimal > MAX_TOKEN_DECIMALS {
            log!(&env, "Fee Token: Constructor: decimal must not be greater than 18");
            panic_with_error!(&env, ErrorCode::InvalidDecimals);
        }
        write_owner(&env, &owner);
        write_metadata(
            &env,
            TokenMetadata {
                decimal,
                name,
                symbol,
            },
        );
    }

    pub fn mint(env: Env, to: Address, amount: i128) {
        unwrap_or_panic!(&env, check_nonnegative_amount(&env, amount));
        let owner = unwrap_or_panic!(&env, read_owner(&env));
        owner.require_auth();

        bump_instance(&env);

        unwrap_or_panic!(&env, balance::mint(&env, &to, amount));
        TokenUtils::new(&env).events().mint(owner, to, amount);
    }

    pub fn set_admin(env: Env, new_owner: Address) {
        let owner = unwrap_or_panic!(&env, read_owner(&env));
        owner.require_auth();

        bump_instance(&env);

        write_owner(&env, &new_owner);
        TokenUtils::new(&env).events().set_admin(owner, new_owner);
    }

    pub fn owner(env: Env) -> Address {
        bump_instance(&env);
        unwrap_or_panic!(&env, read_owner(&env))
    }

    pub fn total_supply(env: Env) -> i128 {
        bump_instance(&env);
        read_total_supply(&env)
    }
}

#[contractimpl]
impl token::Interface for FeeToken {
    fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        bump_instance(&env);
        read_allowance(&env, &from, &spender).amount
    }

    fn approve(env: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
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

    fn balance(env: Env, id: Address) -> i128 {
        bump_instance(&env);
        read_balance(&env, &id)
    }

    fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();

        bump_instance(&env);

        unwrap_or_panic!(&env, balance::transfer(&env, &from, &to, amount));
        TokenUtils::new(&env).events().transfer(from, to, amount);
    }

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        unwrap_or_panic!(&env, check_nonnegative_amount(&env, amount));

        bump_instance(&env);

        unwrap_or_panic!(&env, spend_allowance(&env, &from, &spender, amount));
        unwrap_or_panic!(&env, balance::transfer(&env, &from, &to, amount));
        TokenUtils::new(&env).events().transfer(from, to, amount);
    }

    fn burn(env: Env, from: Address, amount: i128) {
        from.require_auth();

        bump_instance(&env);

        unwrap_or_panic!(&env, balance::burn(&env, &from, amount));
        TokenUtils::new(&env).events().burn(from, amount);
    }

    fn burn_from(env: Env, spender: Address, from: Address, amount: i128) {
        spender.require_auth();
        unwrap_or_panic!(&env, check_nonnegative_amount(&env, amount));

        bump_instance(&env);

        unwrap_or_panic!(&env, spend_allowance(&env, &from, &spender, amount));
        unwrap_or_panic!(&env, balance::burn(&env, &from, amount));
        TokenUtils::new(&env).events().burn(from, amount);
    }

    fn decimals(env: Env) -> u32 {
        read_decimal(&env)
    }

    fn name(env: Env) -> String {
        read_name(&env)
    }

    fn symbol(env: Env) -> String {
        read_symbol(&env)
    }
}
