#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a missing note.
    pub fn note_not_found(id: impl ToString) -> Self {
        CoreError::NotFound {
            entity: crate::notes::NOTE_ENTITY,
            id: id.to_string(),
        }
    }
}
