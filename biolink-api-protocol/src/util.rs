use serde::{
    Deserialize,
    Deserializer,
};

/// Deserializes `null` like a missing field.
///
/// Use together with `#[serde(default)]`, which only covers absent keys.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
