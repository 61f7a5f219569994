//! [`NoteStore`] backed by PostgreSQL through [`NoteRepo`].

use async_trait::async_trait;
use eznotes_core::types::NoteId;

use super::{NoteStore, StoreError};
use crate::models::note::{Note, NoteFields};
use crate::repositories::NoteRepo;
use crate::DbPool;

/// PostgreSQL note store. Cheap to clone (the pool is reference-counted).
#[derive(Clone)]
pub struct PgNoteStore {
    pool: DbPool,
}

impl PgNoteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl NoteStore for PgNoteStore {
    async fn list(&self) -> Result<Vec<Note>, StoreError> {
        Ok(NoteRepo::list(&self.pool).await?)
    }

    async fn find_by_id(&self, id: NoteId) -> Result<Option<Note>, StoreError> {
        Ok(NoteRepo::find_by_id(&self.pool, id).await?)
    }

    async fn create(&self, input: &NoteFields) -> Result<Note, StoreError> {
        Ok(NoteRepo::create(&self.pool, input).await?)
    }

    async fn update(&self, id: NoteId, input: &NoteFields) -> Result<Option<Note>, StoreError> {
        Ok(NoteRepo::update(&self.pool, id, input).await?)
    }

    async fn delete(&self, id: NoteId) -> Result<bool, StoreError> {
        Ok(NoteRepo::delete(&self.pool, id).await?)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
