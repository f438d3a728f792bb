//! Serde helpers for loosely-typed proposal documents
//!
//! Proposal JSON comes from form state, so numeric fields may arrive as
//! numbers, numeric strings, `null`, or not at all. Everything that is not
//! a finite number degrades to zero instead of failing the whole document.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Interpret a JSON value as a finite number, defaulting to 0
pub fn value_as_number(value: &Value) -> f64 {
    let number = match value {
        Value::Number(n) => n.as_f64().unwrap_or_default(),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or_default(),
        _ => 0.0,
    };
    if number.is_finite() { number } else { 0.0 }
}

/// `deserialize_with` target for lenient `f64` fields
pub fn number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_as_number(&value))
}

/// `deserialize_with` target treating an explicit `null` like a missing key
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `deserialize_with` target for lenient counters (negative and fractional
/// values are truncated toward zero)
pub fn count_or_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let number = value_as_number(&value);
    Ok(if number > 0.0 { number.floor() as u64 } else { 0 })
}
