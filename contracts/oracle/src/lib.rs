#![no_std]

mod contract;
mod events;
mod oracle;
mod storage;


pub use crate::contract::{PriceOracle, PriceOracleClient};
pub use crate::storage::Config;
