//! In-memory [`NoteStore`] for tests and local development.
//!
//! Notes live in a `Vec` behind `std::sync::RwLock`, which keeps insertion
//! order as the natural list order.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use eznotes_core::types::{NoteId, Timestamp};
use uuid::Uuid;

use super::{NoteStore, StoreError};
use crate::models::note::{Note, NoteFields};

/// In-process note store.
#[derive(Default)]
pub struct InMemoryNoteStore {
    notes: RwLock<Vec<Note>>,
}

impl InMemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Note>>, StoreError> {
        self.notes
            .read()
            .map_err(|_| StoreError::Unavailable("note store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Note>>, StoreError> {
        self.notes
            .write()
            .map_err(|_| StoreError::Unavailable("note store lock poisoned".into()))
    }
}

/// Next `updated_at` for a note last touched at `previous`.
fn next_updated_at(previous: Timestamp, now: Timestamp) -> Timestamp {
    now.max(previous + Duration::microseconds(1))
}

#[async_trait]
impl NoteStore for InMemoryNoteStore {
    async fn list(&self) -> Result<Vec<Note>, StoreError> {
        Ok(self.read()?.clone())
    }

    async fn find_by_id(&self, id: NoteId) -> Result<Option<Note>, StoreError> {
        Ok(self.read()?.iter().find(|n| n.id == id).cloned())
    }

    async fn create(&self, input: &NoteFields) -> Result<Note, StoreError> {
        let now = Utc::now();
        let note = Note {
            id: Uuid::now_v7(),
            title: input.title.clone(),
            description: input.description.clone(),
            created_at: now,
            updated_at: now,
        };
        self.write()?.push(note.clone());
        Ok(note)
    }

    async fn update(&self, id: NoteId, input: &NoteFields) -> Result<Option<Note>, StoreError> {
        let mut notes = self.write()?;
        let Some(note) = notes.iter_mut().find(|n| n.id == id) else {
            return Ok(None);
        };
        note.title = input.title.clone();
        note.description = input.description.clone();
        note.updated_at = next_updated_at(note.updated_at, Utc::now());
        Ok(Some(note.clone()))
    }

    async fn delete(&self, id: NoteId) -> Result<bool, StoreError> {
        let mut notes = self.write()?;
        let before = notes.len();
        notes.retain(|n| n.id != id);
        Ok(notes.len() < before)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.read().map(|_| ())
    }
}
