//! Wire types as the client sees them.

use eznotes_core::types::{NoteId, Timestamp};
use serde::{Deserialize, Serialize};

/// A note as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Title/description pair being typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NoteDraft {
    pub title: String,
    pub description: String,
}

impl NoteDraft {
    pub fn is_submittable(&self) -> bool {
        eznotes_core::notes::is_submittable(&self.title, &self.description)
    }
}

impl From<&Note> for NoteDraft {
    fn from(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            description: note.description.clone(),
        }
    }
}

/// `{ "message": ..., "note": ... }` body of create and update responses.
#[derive(Debug, Deserialize)]
pub struct NoteEnvelope {
    pub message: String,
    pub note: Note,
}
