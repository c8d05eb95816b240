use handguard::{
    error::ErrorCode,
    ownable::{self, read_owner, require_owner, write_owner},
    types::{FundInfo, FundParams},
    utils::{
        bump_instance, validate_address, validate_basket, validate_fund_identity,
        validate_token_contract,
    },
    validate,
};
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, token, Address, BytesN, Env, String, Vec,
};

use crate::{
    events::FactoryEvents,
    factory::FundFactoryTrait,
    storage::{
        append_creator_fund, get_config, get_creator_funds, get_fund, get_fund_count,
        is_initialized, save_config, save_fund, save_fund_count, set_initialized, Config,
    },
    utils::deploy_fund_contract,
};

contractmeta!(
    key = "Description",
    val = "Registry deploying Handguard index funds against a creation fee"
);

#[contract]
pub struct FundFactory;

#[contractimpl]
impl FundFactoryTrait for FundFactory {
    #[allow(clippy::too_many_arguments)]
    fn initialize(
        env: Env,
        owner: Address,
        fee_token: Address,
        oracle: Address,
        treasury: Address,
        dex: Address,
        wrapped_native: Address,
        fund_wasm_hash: BytesN<32>,
        creation_fee: i128,
    ) -> Result<(), ErrorCode> {
        if is_initialized(&env) {
            log!(
                &env,
                "Factory: Initialize: initializing contract twice is not allowed"
            );
            return Err(ErrorCode::AlreadyInitialized);
        }

        validate!(
            &env,
            creation_fee > 0,
            ErrorCode::InvalidFeeAmount,
            "Factory: Initialize: creation fee must be positive",
            creation_fee
        )?;
        validate_address(&env, &treasury, ErrorCode::InvalidTreasuryAddress)?;
        validate_address(&env, &oracle, ErrorCode::InvalidOracleAddress)?;
        validate_address(&env, &dex, ErrorCode::InvalidDexAddress)?;
        validate_address(&env, &wrapped_native, ErrorCode::InvalidWrappedNativeAddress)?;

        set_initialized(&env);
        write_owner(&env, &owner);
        bump_instance(&env);

        save_config(
            &env,
            Config {
                fee_token: fee_token.clone(),
                oracle,
                treasury,
                dex,
                wrapped_native,
                fund_wasm_hash,
                creation_fee,
            },
        );
        save_fund_count(&env, 0);

        FactoryEvents::initialize(&env, owner, fee_token, creation_fee);

        Ok(())
    }

    fn create_fund(
        env: Env,
        creator: Address,
        name: String,
        ticker: String,
        tokens: Vec<Address>,
    ) -> Result<Address, ErrorCode> {
        creator.require_auth();
        bump_instance(&env);

        validate_fund_identity(&env, &name, &ticker)?;
        validate_basket(&env, &tokens)?;
        for token in tokens.iter() {
            validate_token_contract(&env, &token)?;
        }

        let config = get_config(&env);
        let factory = env.current_contract_address();
        let fee_token = token::Client::new(&env, &config.fee_token);

        validate!(
            &env,
            fee_token.balance(&creator) >= config.creation_fee,
            ErrorCode::InsufficientFeeBalance,
            "Insufficient HGI balance",
            creator.clone()
        )?;
        validate!(
            &env,
            fee_token.allowance(&creator, &factory) >= config.creation_fee,
            ErrorCode::InsufficientFeeAllowance,
            "Insufficient HGI allowance",
            creator.clone()
        )?;

        fee_token.transfer_from(&factory, &creator, &config.treasury, &config.creation_fee);

        let id = get_fund_count(&env);
        let fund_address = deploy_fund_contract(
            &env,
            config.fund_wasm_hash,
            id,
            &creator,
            FundParams {
                name: name.clone(),
                ticker: ticker.clone(),
                tokens: tokens.clone(),
                treasury: config.treasury,
                oracle: config.oracle,
                dex: config.dex,
                wrapped_native: config.wrapped_native,
            },
        );

        save_fund(
            &env,
            &FundInfo {
                id,
                address: fund_address.clone(),
                creator: creator.clone(),
                name: name.clone(),
                ticker: ticker.clone(),
                tokens: tokens.clone(),
            },
        );
        append_creator_fund(&env, &creator, id);
        save_fund_count(&env, id + 1);

        FactoryEvents::fund_created(&env, id, creator, name, ticker, fund_address.clone(), tokens);

        Ok(fund_address)
    }

    fn update_treasury(env: Env, sender: Address, treasury: Address) -> Result<(), ErrorCode> {
        require_owner(&env, &sender)?;
        validate_address(&env, &treasury, ErrorCode::InvalidTreasuryAddress)?;
        bump_instance(&env);

        save_config(
            &env,
            Config {
                treasury: treasury.clone(),
                ..get_config(&env)
            },
        );
        FactoryEvents::treasury_updated(&env, treasury);

        Ok(())
    }

    fn update_oracle(env: Env, sender: Address, oracle: Address) -> Result<(), ErrorCode> {
        require_owner(&env, &sender)?;
        validate_address(&env, &oracle, ErrorCode::InvalidOracleAddress)?;
        bump_instance(&env);

        save_config(
            &env,
            Config {
                oracle: oracle.clone(),
                ..get_config(&env)
            },
        );
        FactoryEvents::oracle_updated(&env, oracle);

        Ok(())
    }

    fn update_dex(env: Env, sender: Address, dex: Address) -> Result<(), ErrorCode> {
        require_owner(&env, &sender)?;
        validate_address(&env, &dex, ErrorCode::InvalidDexAddress)?;
        bump_instance(&env);

        save_config(
            &env,
            Config {
                dex: dex.clone(),
                ..get_config(&env)
            },
        );
        FactoryEvents::dex_updated(&env, dex);

        Ok(())
    }

    fn update_wrapped_native(env: Env, sender: Address, wrapped_native: Address) -> Result<(), ErrorCode> {
        require_owner(&env, &sender)?;
        validate_address(&env, &wrapped_native, ErrorCode::InvalidWrappedNativeAddress)?;
        bump_instance(&env);

        save_config(
            &env,
            Config {
                wrapped_native: wrapped_native.clone(),
                ..get_config(&env)
            },
        );
        FactoryEvents::wrapped_native_updated(&env, wrapped_native);

        Ok(())
    }

    fn update_fund_wasm_hash(env: Env, sender: Address, fund_wasm_hash: BytesN<32>) -> Result<(), ErrorCode> {
        require_owner(&env, &sender)?;
        bump_instance(&env);

        save_config(
            &env,
            Config {
                fund_wasm_hash,
                ..get_config(&env)
            },
        );

        Ok(())
    }

    fn transfer_ownership(env: Env, sender: Address, new_owner: Address) -> Result<(), ErrorCode> {
        bump_instance(&env);
        ownable::transfer_ownership(&env, &sender, &new_owner)
    }

    // ################################################################
    //                             Queries
    // ################################################################

    fn get_fund(env: Env, index: u32) -> Result<FundInfo, ErrorCode> {
        bump_instance(&env);

        get_fund(&env, index).ok_or_else(|| {
            log!(&env, "Factory: get_fund: Fund does not exist", index);
            ErrorCode::FundNotFound
        })
    }

    fn get_fund_address(env: Env, index: u32) -> Result<Address, ErrorCode> {
        Ok(Self::get_fund(env, index)?.address)
    }

    fn get_funds(env: Env, start: u32, end: u32) -> Result<Vec<Address>, ErrorCode> {
        bump_instance(&env);

        validate!(
            &env,
            start <= end,
            ErrorCode::InvalidIndexRange,
            "Invalid range",
            start,
            end
        )?;
        validate!(
            &env,
            end <= get_fund_count(&env),
            ErrorCode::IndexOutOfBounds,
            "End index out of bounds",
            end
        )?;

        let mut funds = Vec::new(&env);
        for id in start..end {
            let info = get_fund(&env, id).ok_or(ErrorCode::FundNotFound)?;
            funds.push_back(info.address);
        }

        Ok(funds)
    }

    fn get_creator_funds(env: Env, creator: Address) -> Vec<u32> {
        bump_instance(&env);
        get_creator_funds(&env, &creator)
    }

    fn get_total_funds(env: Env) -> u32 {
        bump_instance(&env);
        get_fund_count(&env)
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
