//! Declarative per-field validators, applied with
//! `#[serde(deserialize_with = ...)]`.
//!
//! Failing a constraint rejects the whole model; no partially constructed
//! value ever escapes. The error message names the constraint, and serde
//! attaches the offending field on the way out.

use serde::{Deserialize, Deserializer};
use serde::de::Error;

/// Identifier strings must carry at least one character.
pub(crate) fn non_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    if value.is_empty() {
        return Err(D::Error::custom("string must not be empty"));
    }
    Ok(value)
}

/// Bounded 0..=100 integer (crew morale; see also `ShipCondition`).
pub(crate) fn percent<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = u32::deserialize(deserializer)?;
    if value > 100 {
        return Err(D::Error::custom(format!("{value} is out of range 0..=100")));
    }
    Ok(value)
}

/// Strictly positive counts and prices.
pub(crate) fn at_least_one<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = u32::deserialize(deserializer)?;
    if value == 0 {
        return Err(D::Error::custom("value must be at least 1"));
    }
    Ok(value)
}

/// Engine speed is defined from 1.0 upward.
pub(crate) fn min_speed<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value < 1.0 {
        return Err(D::Error::custom(format!("speed {value} is below 1.0")));
    }
    Ok(value)
}
