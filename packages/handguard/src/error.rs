use soroban_sdk::contracterror;

pub type HandguardResult<T = ()> = core::result::Result<T, ErrorCode>;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    AlreadyInitialized = 1,
    NotAuthorized = 2,

    // Fund creation
    EmptyFundName = 3,
    EmptyFundTicker = 4,
    EmptyTokenList = 5,
    TooManyTokens = 6,
    DuplicateToken = 7,
    InvalidTokenAddress = 8,
    InsufficientFeeBalance = 9,
    InsufficientFeeAllowance = 10,
    InvalidFeeAmount = 11,

    // Directory
    FundNotFound = 12,
    InvalidIndexRange = 13,
    IndexOutOfBounds = 14,

    // References
    InvalidTreasuryAddress = 15,
    InvalidOracleAddress = 16,
    InvalidDexAddress = 17,
    InvalidWrappedNativeAddress = 18,

    // Buy / Sell
    ZeroPurchaseAmount = 19,
    PurchaseTooSmall = 20,
    ZeroSellAmount = 21,
    InsufficientFundTokens = 22,
    NoValueToReturn = 23,
    ZeroNetAssetValue = 24,

    // Proportions
    ArrayLengthMismatch = 25,
    ProportionsSumInvalid = 26,
    TokenNotInBasket = 27,
    InvalidSlippage = 28,

    // Oracle
    PriceFeedNotFound = 29,
    OracleNonPositive = 30,
    OracleStale = 31,

    // Swaps
    SlippageExceeded = 32,
    DeadlineExpired = 33,
    InsufficientLiquidity = 34,

    // Ledger
    NegativeAmount = 35,
    InsufficientBalance = 36,
    InsufficientAllowance = 37,
    InvalidExpirationLedger = 38,
    InvalidDecimals = 39,

    MathError = 40,
}
