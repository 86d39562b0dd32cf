//! Serde helpers for service payloads.

use serde::{Deserialize, Deserializer};

/// Deserialize `null` the same way as an absent key.
///
/// Pair with `#[serde(default)]` so both cases yield `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
