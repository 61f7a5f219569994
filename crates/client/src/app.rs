//! Controller: drives [`NotesApi`] calls and folds the results into
//! [`NotesState`].
//!
//! Every successful mutation is followed by a full list refresh. Failures
//! set an error message and leave the current list untouched.

use std::time::Instant;

use eznotes_core::types::NoteId;

use crate::api::{ClientError, NotesApi};
use crate::models::Note;
use crate::state::{FormMode, NotesState};

pub const MSG_CREATED: &str = "Note created successfully!";
pub const MSG_UPDATED: &str = "Note updated successfully!";
pub const MSG_DELETED: &str = "Note deleted successfully!";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this note?";

pub struct NotesApp {
    api: NotesApi,
    state: NotesState,
}

impl NotesApp {
    pub fn new(api: NotesApi) -> Self {
        Self {
            api,
            state: NotesState::new(),
        }
    }

    pub fn state(&self) -> &NotesState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut NotesState {
        &mut self.state
    }

    /// Re-fetch the full note list.
    pub async fn refresh(&mut self) {
        self.state.set_loading(true);
        self.state.dismiss_error();

        match self.api.list().await {
            Ok(notes) => {
                tracing::debug!(count = notes.len(), "Notes loaded");
                self.state.replace_notes(notes);
            }
            Err(e) => self.report(&e, Operation::Load),
        }

        self.state.set_loading(false);
    }

    /// Submit the form: create in [`FormMode::Create`], update when editing.
    ///
    /// Does nothing (returns `None`) when the trimmed title or description
    /// is empty. Returns the saved note on success.
    pub async fn submit(&mut self) -> Option<Note> {
        let draft = self.state.form().clone();
        if !draft.is_submittable() {
            return None;
        }

        match self.state.mode().clone() {
            FormMode::Create => match self.api.create(&draft).await {
                Ok(note) => {
                    tracing::info!(note_id = %note.id, "Note created");
                    self.state.finish_create();
                    self.state.set_success(MSG_CREATED, Instant::now());
                    self.refresh().await;
                    Some(note)
                }
                Err(e) => {
                    self.report(&e, Operation::Create);
                    None
                }
            },
            FormMode::Editing { id, .. } => match self.api.update(id, &draft).await {
                Ok(note) => {
                    tracing::info!(note_id = %note.id, "Note updated");
                    self.state.finish_edit();
                    self.state.set_success(MSG_UPDATED, Instant::now());
                    self.refresh().await;
                    Some(note)
                }
                Err(e) => {
                    self.report(&e, Operation::Update);
                    None
                }
            },
        }
    }

    /// Start editing the note with `id`, if it is in the current list.
    pub fn begin_edit(&mut self, id: NoteId) -> bool {
        match self.state.find(id).cloned() {
            Some(note) => {
                self.state.begin_edit(&note);
                true
            }
            None => false,
        }
    }

    /// Delete a note after `confirm` approves [`DELETE_PROMPT`].
    ///
    /// Returns `true` only if the server deleted the note.
    pub async fn delete<F>(&mut self, id: NoteId, confirm: F) -> bool
    where
        F: FnOnce(&str) -> bool,
    {
        if !confirm(DELETE_PROMPT) {
            return false;
        }

        match self.api.delete(id).await {
            Ok(_) => {
                tracing::info!(note_id = %id, "Note deleted");
                self.state.set_success(MSG_DELETED, Instant::now());
                self.refresh().await;
                true
            }
            Err(e) => {
                self.report(&e, Operation::Delete);
                false
            }
        }
    }

    /// Map a client error to the user-facing error banner.
    fn report(&mut self, err: &ClientError, op: Operation) {
        tracing::warn!(error = %err, operation = ?op, "Notes request failed");
        self.state.set_error(error_message(err, op), Instant::now());
    }
}

/// The request an error message refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Create,
    Update,
    Delete,
}

impl Operation {
    fn failure_text(self) -> &'static str {
        match self {
            Operation::Load => "Error loading notes",
            Operation::Create => "Error creating note",
            Operation::Update => "Error updating note",
            Operation::Delete => "Error deleting note",
        }
    }
}

/// User-facing text for a failed request.
///
/// Listing failures show the status code; the other operations only name
/// what failed. Transport failures are reported as connection errors.
pub fn error_message(err: &ClientError, op: Operation) -> String {
    match (err, op) {
        (ClientError::Status { status, .. }, Operation::Load) => {
            format!("{}: {}", op.failure_text(), status.as_u16())
        }
        (ClientError::Status { .. }, _) => op.failure_text().to_string(),
        (ClientError::Http(e), _) => format!("Connection error: {e}"),
    }
}
