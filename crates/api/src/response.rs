//! Response bodies shared by the note handlers.

use eznotes_db::models::note::Note;
use serde::Serialize;

pub const NOTE_CREATED: &str = "Note created successfully";
pub const NOTE_UPDATED: &str = "Note updated successfully";

/// `{ "message": ..., "note": ... }` body returned by create and update.
#[derive(Debug, Serialize)]
pub struct NoteResponse {
    pub message: &'static str,
    pub note: Note,
}

/// Confirmation string returned by delete.
pub fn deleted_message(id: impl std::fmt::Display) -> String {
    format!("Note deleted {id}")
}
