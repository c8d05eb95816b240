#![no_std]

mod contract;
mod events;
mod factory;
mod storage;
mod utils;


pub use crate::contract::{FundFactory, FundFactoryClient};
pub use crate::storage::Config;
