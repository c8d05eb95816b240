use soroban_sdk::{contracttype, log, Address, Env, Symbol};

use crate::error::{ErrorCode, HandguardResult};

#[contracttype]
#[derive(Clone)]
enum OwnableKey {
    Owner,
}

pub fn read_owner(env: &Env) -> HandguardResult<Address> {
    env.storage()
        .instance()
        .get(&OwnableKey::Owner)
        .ok_or(ErrorCode::NotAuthorized)
}

pub fn write_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&OwnableKey::Owner, owner);
}

/// Guard placed at the top of every owner-restricted entry point
pub fn require_owner(env: &Env, sender: &Address) -> HandguardResult {
    sender.require_auth();

    if *sender != read_owner(env)? {
        log!(env, "You are not authorized!", sender);
        return Err(ErrorCode::NotAuthorized);
    }

    Ok(())
}

/// - topics - `["ownership_transferred", previous_owner: Address]`
/// - data - `[new_owner: Address]`
pub fn transfer_ownership(env: &Env, sender: &Address, new_owner: &Address) -> HandguardResult {
    require_owner(env, sender)?;

    write_owner(env, new_owner);

    env.events().publish(
        (Symbol::new(env, "ownership_transferred"), sender.clone()),
        new_owner.clone(),
    );

    Ok(())
}
