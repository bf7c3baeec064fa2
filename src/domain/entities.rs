//! Domain entities. Pure data structures loaded from disk.
//!
//! No file or parser types here — loaders map documents into these.

use serde::{Deserialize, Deserializer};

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A scheduled meeting and the files describing its participants.
///
/// Missing or `null` fields deserialize to empty values. Field names accept both the
/// PascalCase spelling of the source documents and the lower-case one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Meeting {
    #[serde(deserialize_with = "null_as_default", rename = "Date", alias = "date")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default", rename = "Description", alias = "description")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default", rename = "URL", alias = "url", alias = "Url")]
    pub url: String,
    /// Paths of the participant user files, in load order.
    #[serde(
        deserialize_with = "null_as_default",
        rename = "ParticipantFiles",
        alias = "participantFiles",
        alias = "participant_files"
    )]
    pub participant_files: Vec<String>,
}

/// A meeting participant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "null_as_default", rename = "ID", alias = "id", alias = "Id")]
    pub id: i32,
    #[serde(deserialize_with = "null_as_default", rename = "Name", alias = "name")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default", rename = "Avatar", alias = "avatar")]
    pub avatar: String,
}
