#![no_std]

pub mod constants;
pub mod dex;
pub mod error;
pub mod ledger;
pub mod macros;
pub mod math;
pub mod oracle;
pub mod ownable;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;
