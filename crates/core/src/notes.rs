//! Note field rules and search matching.
//!
//! The API layer validates request bodies with [`validate_note_fields`]
//! before anything reaches the store. The client uses the same rules to
//! decide whether a form can be submitted, and [`matches_search`] for its
//! in-memory filter.

use crate::error::CoreError;

/// Entity name used in not-found errors.
pub const NOTE_ENTITY: &str = "Note";

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a single required text field.
///
/// The value must be present and contain something other than whitespace.
/// There is no length limit and the value itself is stored untrimmed.
pub fn validate_required_text(field: &str, value: Option<&str>) -> Result<(), String> {
    let value = value.ok_or_else(|| format!("Field '{field}' is required"))?;
    if value.trim().is_empty() {
        return Err(format!("Field '{field}' cannot be empty"));
    }
    Ok(())
}

/// Validate the `title` / `description` pair of a create or update body.
pub fn validate_note_fields(
    title: Option<&str>,
    description: Option<&str>,
) -> Result<(), CoreError> {
    validate_required_text("title", title).map_err(CoreError::Validation)?;
    validate_required_text("description", description).map_err(CoreError::Validation)?;
    Ok(())
}

/// Whether a draft is complete enough to submit (both fields non-blank).
pub fn is_submittable(title: &str, description: &str) -> bool {
    !title.trim().is_empty() && !description.trim().is_empty()
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Case-insensitive substring match against title OR description.
///
/// An empty term matches every note.
pub fn matches_search(title: &str, description: &str, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    title.to_lowercase().contains(&needle) || description.to_lowercase().contains(&needle)
}
