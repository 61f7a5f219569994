//! Note model.

use eznotes_core::error::CoreError;
use eznotes_core::notes::validate_note_fields;
use eznotes_core::types::{NoteId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `notes` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for create and update.
///
/// Both fields are optional at the parsing stage so that a missing field is
/// reported as a validation error rather than a deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct NoteInput {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Validated title/description pair handed to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFields {
    pub title: String,
    pub description: String,
}

impl NoteFields {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

impl TryFrom<NoteInput> for NoteFields {
    type Error = CoreError;

    fn try_from(input: NoteInput) -> Result<Self, Self::Error> {
        validate_note_fields(input.title.as_deref(), input.description.as_deref())?;
        match (input.title, input.description) {
            (Some(title), Some(description)) => Ok(Self { title, description }),
            _ => Err(CoreError::Validation(
                "Fields 'title' and 'description' are required".to_string(),
            )),
        }
    }
}
