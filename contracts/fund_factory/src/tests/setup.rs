extern crate std;

use handguard_fee_token::{FeeToken, FeeTokenClient};
use soroban_sdk::{testutils::Address as _, Address, BytesN, Env, String, Vec};

use crate::contract::{FundFactory, FundFactoryClient};

const FUND_WASM: &str = "../../target/wasm32-unknown-unknown/release/handguard_fund.wasm";

pub const ONE: i128 = 10_000_000;
pub const CREATION_FEE: i128 = 100 * ONE;

pub fn install_fund_wasm(env: &Env) -> BytesN<32> {
    let wasm = std::fs::read(FUND_WASM)
        .unwrap_or_else(|_| panic!("{FUND_WASM} not found, run `make build` first"));
    env.deployer().upload_contract_wasm(wasm.as_slice())
}

/// Placeholder hash for tests that fail before anything is deployed
pub fn dummy_wasm_hash(env: &Env) -> BytesN<32> {
    BytesN::from_array(env, &[0; 32])
}

pub fn deploy_factory_contract<'a>(env: &Env) -> FundFactoryClient<'a> {
    FundFactoryClient::new(env, &env.register(FundFactory, ()))
}

pub fn deploy_token_contract(env: &Env, admin: &Address) -> Address {
    env.register_stellar_asset_contract_v2(admin.clone())
        .address()
}

pub struct FactoryTest<'a> {
    pub factory: FundFactoryClient<'a>,
    pub fee_token: FeeTokenClient<'a>,
    pub owner: Address,
    pub treasury: Address,
    pub oracle: Address,
    pub dex: Address,
    pub native: Address,
    /// Holds 1000 HGI and has approved the registry for ten creations
    pub creator: Address,
    pub tokens: Vec<Address>,
}

pub fn setup_factory<'a>(env: &Env, fund_wasm_hash: BytesN<32>) -> FactoryTest<'a> {
    env.mock_all_auths();
    env.cost_estimate().budget().reset_unlimited();

    let owner = Address::generate(env);
    let treasury = Address::generate(env);
    let oracle = Address::generate(env);
    let dex = Address::generate(env);
    let creator = Address::generate(env);
    let native = deploy_token_contract(env, &owner);
    let tokens = soroban_sdk::vec![
        env,
        deploy_token_contract(env, &owner),
        deploy_token_contract(env, &owner)
    ];

    let fee_token = FeeTokenClient::new(
        env,
        &env.register(
            FeeToken,
            (
                owner.clone(),
                7_u32,
                String::from_str(env, "Handguard Index"),
                String::from_str(env, "HGI"),
            ),
        ),
    );

    let factory = deploy_factory_contract(env);
    factory.initialize(
        &owner,
        &fee_token.address,
        &oracle,
        &treasury,
        &dex,
        &native,
        &fund_wasm_hash,
        &CREATION_FEE,
    );

    fee_token.mint(&creator, &(1_000 * ONE));
    fee_token.approve(&creator, &factory.address, &(10 * CREATION_FEE), &10_000);

    FactoryTest {
        factory,
        fee_token,
        owner,
        treasury,
        oracle,
        dex,
        native,
        creator,
        tokens,
    }
}
