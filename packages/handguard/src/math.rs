pub mod helpers;
pub mod safe_math;
