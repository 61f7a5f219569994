//! Plain-text rendering of [`NotesState`].

use std::fmt::Write;

use crate::state::{FormMode, NotesState};

/// Render the whole screen: header, status messages, form and note list.
pub fn render(state: &NotesState) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "EzNotes ({})", state.count_label());

    if let Some(error) = state.error() {
        let _ = writeln!(out, "[error] {error}");
    }
    if let Some(success) = state.success() {
        let _ = writeln!(out, "[ok] {success}");
    }

    let heading = match state.mode() {
        FormMode::Create => "New Note",
        FormMode::Editing { .. } => "Edit Note",
    };
    let form = state.form();
    let _ = writeln!(out, "\n{heading}");
    let _ = writeln!(out, "  title:       {}", form.title);
    let _ = writeln!(out, "  description: {}", form.description);

    out.push('\n');
    out.push_str(&render_list(state));
    out
}

/// Render only the (filtered) note list.
pub fn render_list(state: &NotesState) -> String {
    let mut out = String::new();

    if state.is_loading() {
        out.push_str("Loading notes...\n");
        return out;
    }

    if !state.search_term().is_empty() {
        let _ = writeln!(out, "Search: \"{}\"", state.search_term());
    }

    let notes = state.filtered_notes();
    if notes.is_empty() {
        let text = if state.search_term().is_empty() {
            "No notes yet. Create your first one!"
        } else {
            "No notes match your search."
        };
        let _ = writeln!(out, "{text}");
        return out;
    }

    let editing = state.editing_id();
    for (i, note) in notes.iter().enumerate() {
        let marker = if editing == Some(note.id) { "*" } else { " " };
        let _ = writeln!(out, "{marker}{:>3}. {}", i + 1, note.title);
        let _ = writeln!(out, "      {}", note.description);
        let _ = writeln!(
            out,
            "      {}  (updated {})",
            note.id,
            note.updated_at.format("%Y-%m-%d %H:%M")
        );
    }
    out
}
