#![no_std]

mod contract;
mod events;
mod fund;
mod nav;
mod rebalance;
mod storage;
mod swap;


pub use crate::contract::{Fund, FundClient};
pub use crate::storage::Config;
