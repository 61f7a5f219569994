//! Repository for the `notes` table.

use eznotes_core::types::NoteId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::note::{Note, NoteFields};

/// Column list for notes queries.
const COLUMNS: &str = "id, title, description, created_at, updated_at";

/// Provides CRUD operations for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// List every note in creation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes ORDER BY created_at ASC, id ASC");
        sqlx::query_as::<_, Note>(&query).fetch_all(pool).await
    }

    /// Find a note by its ID.
    pub async fn find_by_id(pool: &PgPool, id: NoteId) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = $1");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new note, returning the created row.
    ///
    /// `created_at` and `updated_at` both take the statement's `NOW()`, so
    /// they are equal on a fresh row.
    pub async fn create(pool: &PgPool, input: &NoteFields) -> Result<Note, sqlx::Error> {
        let query = format!(
            "INSERT INTO notes (id, title, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(Uuid::now_v7())
            .bind(&input.title)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Replace the title and description of a note, returning the new row.
    ///
    /// `updated_at` always moves forward by at least one microsecond, even
    /// when two updates land within the same clock tick.
    pub async fn update(
        pool: &PgPool,
        id: NoteId,
        input: &NoteFields,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET
                title = $2,
                description = $3,
                updated_at = GREATEST(NOW(), updated_at + INTERVAL '1 microsecond')
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a note. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: NoteId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
