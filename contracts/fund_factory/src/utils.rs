use handguard::types::FundParams;
use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env};

/// Deploys a fund under a salt unique to `(id, creator)`, running its
/// constructor with `(creator, params)`
pub fn deploy_fund_contract(
    env: &Env,
    wasm_hash: BytesN<32>,
    id: u32,
    creator: &Address,
    params: FundParams,
) -> Address {
    let mut salt = Bytes::new(env);
    salt.append(&id.to_xdr(env));
    salt.append(&creator.clone().to_xdr(env));
    let salt = env.crypto().sha256(&salt);

    env.deployer()
        .with_current_contract(salt)
        .deploy_v2(wasm_hash, (creator.clone(), params))
}
