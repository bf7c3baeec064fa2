//! Implements DataLoader for JSON documents.
//!
//! Unknown fields are ignored and missing fields default; the top level must be an object.

use crate::adapters::loaders::read_document;
use crate::domain::{DomainError, LoadError, Meeting, User};
use crate::ports::DataLoader;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

/// JSON file loader. Field names follow the entity attribute names.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonDataLoader;

impl JsonDataLoader {
    pub fn new() -> Self {
        Self
    }

    /// Parse a JSON document whose top level must be an object.
    fn parse<T: DeserializeOwned>(text: &str) -> Result<T, LoadError> {
        let value: Value = serde_json::from_str(text)?;
        if !value.is_object() {
            return Err(LoadError::RootMismatch {
                expected: "a JSON object",
                found: json_kind(&value).to_string(),
            });
        }
        Ok(serde_json::from_value(value)?)
    }

    fn load<T: DeserializeOwned>(path: &Path) -> Result<T, DomainError> {
        debug!(path = %path.display(), "reading JSON document");
        read_document(path)
            .and_then(|text| Self::parse::<T>(&text))
            .map_err(|e| DomainError::load(path, e))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl DataLoader for JsonDataLoader {
    fn load_meeting(&self, path: &Path) -> Result<Meeting, DomainError> {
        let meeting: Meeting = Self::load(path)?;
        info!(
            path = %path.display(),
            participants = meeting.participant_files.len(),
            "loaded meeting (JSON)"
        );
        Ok(meeting)
    }

    fn load_user(&self, path: &Path) -> Result<User, DomainError> {
        let user: User = Self::load(path)?;
        info!(path = %path.display(), id = user.id, "loaded user (JSON)");
        Ok(user)
    }
}
