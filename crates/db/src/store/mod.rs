//! Persistence handle injected into the API layer.
//!
//! The [`NoteStore`] trait is the only thing handlers see. "Not found" is
//! reported through `Option`/`bool` return values; [`StoreError`] is
//! reserved for infrastructure failures.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use eznotes_core::types::NoteId;

use crate::models::note::{Note, NoteFields};

pub use memory::InMemoryNoteStore;
pub use postgres::PgNoteStore;

/// Failure reported by a [`NoteStore`] backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Abstract note storage.
///
/// | Method | Purpose |
/// |--------|---------|
/// | [`list`](NoteStore::list) | All notes, natural (creation) order |
/// | [`find_by_id`](NoteStore::find_by_id) | One note, or `None` |
/// | [`create`](NoteStore::create) | Insert; assigns id and timestamps |
/// | [`update`](NoteStore::update) | Find-and-replace; `None` if absent |
/// | [`delete`](NoteStore::delete) | Find-and-delete; `false` if absent |
/// | [`ping`](NoteStore::ping) | Reachability check for `/health` |
#[async_trait]
pub trait NoteStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Note>, StoreError>;

    async fn find_by_id(&self, id: NoteId) -> Result<Option<Note>, StoreError>;

    async fn create(&self, input: &NoteFields) -> Result<Note, StoreError>;

    async fn update(&self, id: NoteId, input: &NoteFields) -> Result<Option<Note>, StoreError>;

    async fn delete(&self, id: NoteId) -> Result<bool, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}
