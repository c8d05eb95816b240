//! Fungible balance ledger shared by the fee token and the fund shares.
//!
//! Balances, allowances and the supply counter are only ever written through
//! the functions of this module so that every debit is checked against the
//! stored balance before it is applied.

use soroban_sdk::{contracttype, Address};

pub mod allowance;
pub mod balance;
pub mod metadata;

#[derive(Clone)]
#[contracttype]
pub struct AllowanceDataKey {
    pub from: Address,
    pub spender: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[derive(Clone)]
#[contracttype]
pub enum LedgerKey {
    Balance(Address),
    Allowance(AllowanceDataKey),
    TotalSupply,
}
