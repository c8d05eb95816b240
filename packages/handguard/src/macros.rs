/// Returns `Ok(())` when the assertion holds, otherwise logs the error code with
/// its location (and an optional message) and returns `Err`.
#[macro_export]
macro_rules! validate {
    ($env:expr, $assert:expr, $err:expr) => {
        {
            if ($assert) {
                Ok(())
            } else {
                let error_code: $crate::error::ErrorCode = $err;
                soroban_sdk::log!($env, "Error {} thrown at line {}", error_code as u32, line!());
                Err(error_code)
            }
        }
    };
    (
        $env:expr,
        $assert:expr,
        $err:expr,
        $($arg:tt)+
    ) => {
        {
        if ($assert) {
            Ok(())
        } else {
            let error_code: $crate::error::ErrorCode = $err;
            soroban_sdk::log!($env, "Error {} thrown at line {}", error_code as u32, line!());
            soroban_sdk::log!($env, $($arg)+);
            Err(error_code)
        }
        }
    };
}

#[macro_export]
macro_rules! math_error {
    ($env:expr) => {{
        || {
            let error_code = $crate::error::ErrorCode::MathError;
            soroban_sdk::log!($env, "Math error thrown at line {}", line!());
            error_code
        }
    }};
}

// Validate all bps to be between the range 0..10_000
#[macro_export]
macro_rules! validate_bps {
    ($env:expr, $($value:expr),+) => {
        {
            const MAX_BPS: u32 = $crate::constants::MAX_SLIPPAGE_BPS;
            let mut result: $crate::error::HandguardResult = Ok(());
            $(
                if result.is_ok() && $value > MAX_BPS {
                    soroban_sdk::log!($env, "The value {} is out of range. Must be between 0 and {} bps.", $value, MAX_BPS);
                    result = Err($crate::error::ErrorCode::InvalidSlippage);
                }
            )+
            result
        }
    };
}

/// Unwraps a `HandguardResult` inside entry points that cannot return one,
/// raising the contract error instead.
#[macro_export]
macro_rules! unwrap_or_panic {
    ($env:expr, $result:expr) => {
        match $result {
            Ok(value) => value,
            Err(error_code) => soroban_sdk::panic_with_error!($env, error_code),
        }
    };
}
