// Module name shadows the `serde` crate; use `::serde` for the external crate.
use ::serde::{Deserialize, Deserializer};

/// Deserialize a field that must be present but may be `null`.
///
/// Plain `Option<T>` fields fall back to `None` when the key is missing.
/// Routing them through `deserialize_with` turns a missing key into a
/// "missing field" error while still accepting an explicit `null`.
///
/// ```ignore
/// #[derive(Deserialize)]
/// struct Body {
///     #[serde(deserialize_with = "gigboard_core::serde::required_nullable")]
///     phone: Option<String>,
/// }
/// ```
pub fn required_nullable<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(d)
}
