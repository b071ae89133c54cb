//! Serde helpers for the JSON:API envelope

use serde::{Deserialize, Deserializer};

/// Deserializes a JSON:API `data` member into a sequence
///
/// The API returns an array for collection endpoints, a single object for
/// single-resource endpoints, and null or nothing at all in error
/// documents; all of them map onto a `Vec`.
pub fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        Many(Vec<T>),
        One(T),
    }

    Ok(match Option::<OneOrMany<T>>::deserialize(deserializer)? {
        Some(OneOrMany::Many(entities)) => entities,
        Some(OneOrMany::One(entity)) => vec![entity],
        None => Vec::new(),
    })
}
