//! Serde helper that treats an explicit `null` like an absent field.

use serde::{Deserialize, Deserializer};

/// Deserializes `null` as `T::default()`.
///
/// Combined with `#[serde(default)]`, an absent field and a `null` field both
/// become zero. Malformed values are still rejected.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
