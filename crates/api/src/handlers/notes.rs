//! Handlers for the notes resource.
//!
//! List, get, create, update and delete. Bodies are validated here, before
//! anything reaches the store; a path id that is not a well-formed note id
//! cannot name an existing note and is reported as not found.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use eznotes_core::error::CoreError;
use eznotes_core::types::NoteId;
use eznotes_db::models::note::{NoteFields, NoteInput};

use crate::error::{AppError, AppResult};
use crate::response::{deleted_message, NoteResponse, NOTE_CREATED, NOTE_UPDATED};
use crate::state::AppState;

/// Parse a path segment into a note id, treating garbage as not found.
fn parse_note_id(raw: &str) -> AppResult<NoteId> {
    raw.parse::<NoteId>()
        .map_err(|_| AppError::Core(CoreError::note_not_found(raw)))
}

/// Unwrap and validate a create/update body.
fn note_fields(payload: Result<Json<NoteInput>, JsonRejection>) -> AppResult<NoteFields> {
    let Json(input) = payload?;
    Ok(NoteFields::try_from(input)?)
}

/// GET /notes
///
/// List every note.
pub async fn list_notes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let notes = state.store.list().await?;
    Ok(Json(notes))
}

/// GET /notes/{id}
///
/// Get a single note by ID.
pub async fn get_note(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_note_id(&raw_id)?;
    let note = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::note_not_found(id)))?;

    Ok(Json(note))
}

/// POST /notes
///
/// Create a new note.
pub async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<NoteInput>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let fields = note_fields(payload)?;
    let note = state.store.create(&fields).await?;

    tracing::info!(note_id = %note.id, "Note created");

    Ok((
        StatusCode::CREATED,
        Json(NoteResponse {
            message: NOTE_CREATED,
            note,
        }),
    ))
}

/// PUT /notes/{id}
///
/// Replace a note's title and description.
pub async fn update_note(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<NoteInput>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let id = parse_note_id(&raw_id)?;
    let fields = note_fields(payload)?;

    let note = state
        .store
        .update(id, &fields)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::note_not_found(id)))?;

    tracing::info!(note_id = %id, "Note updated");

    Ok(Json(NoteResponse {
        message: NOTE_UPDATED,
        note,
    }))
}

/// DELETE /notes/{id}
///
/// Permanently delete a note.
pub async fn delete_note(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_note_id(&raw_id)?;
    let deleted = state.store.delete(id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::note_not_found(id)));
    }

    tracing::info!(note_id = %id, "Note deleted");

    Ok(Json(deleted_message(id)))
}
