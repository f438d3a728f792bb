//! Currency helpers
//!
//! Money is computed and stored as `f64`. Rounding goes through
//! `rust_decimal` on the exact binary value of the amount, so a cent tie is
//! only a tie when the stored double really sits on it (`1.005` is stored
//! just below and rounds down).

use rust_decimal::prelude::*;

/// Currency precision
const DECIMAL_PLACES: u32 = 2;

/// Exact decimal expansion of an f64; `None` when non-finite or beyond the
/// Decimal range
#[inline]
pub fn to_decimal(value: f64) -> Option<Decimal> {
    if value.is_finite() {
        Decimal::from_f64_retain(value)
    } else {
        None
    }
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Round an f64 amount to cents
///
/// Amounts too large for Decimal carry no cents and are returned as is.
/// Non-finite amounts degrade to 0.
pub fn round_currency(value: f64) -> f64 {
    if !value.is_finite() {
        tracing::warn!(value, "Non-finite amount, using 0");
        return 0.0;
    }
    match to_decimal(value) {
        Some(exact) => to_f64(exact),
        None => value,
    }
}
