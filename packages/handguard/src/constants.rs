// Ledger TTLs

pub const DAY_IN_LEDGERS: u32 = 17280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

// Precision

pub const BPS_DENOMINATOR: i128 = 10_000;
pub const PERCENT_DENOMINATOR: u32 = 100;

/// Every oracle price is a USD amount scaled to this many decimals
pub const PRICE_DECIMALS: u32 = 8;

pub const MAX_TOKEN_DECIMALS: u32 = 18;

// Fund parameters

/// Fee charged on every buy and sell
pub const FEE_BPS: i128 = 100;
/// Part of the fee routed to the fund creator, the rest goes to the treasury
pub const CREATOR_FEE_SHARE_BPS: i128 = 5_000;

pub const DEFAULT_SLIPPAGE_BPS: u32 = 300;
pub const MAX_SLIPPAGE_BPS: u32 = 10_000;
pub const SWAP_DEADLINE_SECONDS: u64 = 300;

pub const MAX_FUND_TOKENS: u32 = 10;

// Strkeys of the all-zero account and contract, used as "unset" markers by clients
pub const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";
pub const ZERO_CONTRACT: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";
