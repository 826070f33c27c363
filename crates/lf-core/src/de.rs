//! Serde helpers for Labfolder payloads.
//!
//! Labfolder returns ids as JSON strings on some endpoints and as numbers on
//! others, and sends `null` for empty lists. These helpers normalize both.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => s,
            RawId::Signed(n) => n.to_string(),
            RawId::Unsigned(n) => n.to_string(),
        }
    }
}

/// Deserialize an id given either as a string or an integer.
///
/// # Errors
///
/// Fails if the value is neither a string nor an integer.
pub fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(String::from)
}

/// Like [`id`], but `null`, a missing field and `""` all become `None`.
///
/// # Errors
///
/// Fails if the value is present and neither a string nor an integer.
pub fn opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawId>::deserialize(deserializer)?;
    Ok(raw.map(String::from).filter(|s| !s.is_empty()))
}

/// Treat an explicit `null` as the type's default.
///
/// # Errors
///
/// Fails if the value is present and does not deserialize as `T`.
pub fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
