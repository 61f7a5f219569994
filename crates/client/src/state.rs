//! Local view state: the note list, the shared create/edit form, the search
//! filter and transient status messages.
//!
//! Nothing here performs I/O. Times are passed in explicitly so message
//! expiry is deterministic.

use std::time::{Duration, Instant};

use eznotes_core::notes::matches_search;
use eznotes_core::types::NoteId;

use crate::models::{Note, NoteDraft};

/// How long success and error messages stay visible.
pub const MESSAGE_TTL: Duration = Duration::from_secs(3);

/// Which operation submitting the form performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    /// Submitting creates a new note from the create draft.
    Create,
    /// Submitting updates note `id` with the edit draft.
    Editing { id: NoteId, draft: NoteDraft },
}

/// A message shown until dismissed or until [`MESSAGE_TTL`] elapses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub shown_at: Instant,
}

impl StatusMessage {
    fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= MESSAGE_TTL
    }
}

#[derive(Debug, Clone)]
pub struct NotesState {
    notes: Vec<Note>,
    create_draft: NoteDraft,
    mode: FormMode,
    search_term: String,
    loading: bool,
    error: Option<StatusMessage>,
    success: Option<StatusMessage>,
}

impl Default for NotesState {
    fn default() -> Self {
        Self::new()
    }
}

impl NotesState {
    /// Initial state: nothing loaded yet, first fetch pending.
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            create_draft: NoteDraft::default(),
            mode: FormMode::Create,
            search_term: String::new(),
            loading: true,
            error: None,
            success: None,
        }
    }

    // -- notes ---------------------------------------------------------------

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Replace the whole list with a fresh server snapshot.
    pub fn replace_notes(&mut self, notes: Vec<Note>) {
        self.notes = notes;
    }

    pub fn find(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Notes matching the current search term, in list order.
    pub fn filtered_notes(&self) -> Vec<&Note> {
        self.notes
            .iter()
            .filter(|n| matches_search(&n.title, &n.description, &self.search_term))
            .collect()
    }

    /// "1 note saved" / "N notes saved".
    pub fn count_label(&self) -> String {
        match self.notes.len() {
            1 => "1 note saved".to_string(),
            n => format!("{n} notes saved"),
        }
    }

    // -- search --------------------------------------------------------------

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    // -- form ----------------------------------------------------------------

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn editing_id(&self) -> Option<NoteId> {
        match &self.mode {
            FormMode::Create => None,
            FormMode::Editing { id, .. } => Some(*id),
        }
    }

    /// The draft the form currently shows.
    pub fn form(&self) -> &NoteDraft {
        match &self.mode {
            FormMode::Create => &self.create_draft,
            FormMode::Editing { draft, .. } => draft,
        }
    }

    fn form_mut(&mut self) -> &mut NoteDraft {
        match &mut self.mode {
            FormMode::Create => &mut self.create_draft,
            FormMode::Editing { draft, .. } => draft,
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.form_mut().title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.form_mut().description = description.into();
    }

    /// Switch the form to editing a copy of `note`.
    ///
    /// The create draft is kept and comes back after the edit ends.
    pub fn begin_edit(&mut self, note: &Note) {
        self.mode = FormMode::Editing {
            id: note.id,
            draft: NoteDraft::from(note),
        };
    }

    /// Abandon the edit and return to the create form.
    pub fn cancel_edit(&mut self) {
        self.mode = FormMode::Create;
    }

    /// A create succeeded: clear the create draft.
    pub fn finish_create(&mut self) {
        self.create_draft = NoteDraft::default();
    }

    /// An update succeeded: back to the create form.
    pub fn finish_edit(&mut self) {
        self.mode = FormMode::Create;
    }

    // -- status --------------------------------------------------------------

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_ref().map(|m| m.text.as_str())
    }

    pub fn success(&self) -> Option<&str> {
        self.success.as_ref().map(|m| m.text.as_str())
    }

    pub fn set_error(&mut self, text: impl Into<String>, now: Instant) {
        self.error = Some(StatusMessage {
            text: text.into(),
            shown_at: now,
        });
    }

    pub fn set_success(&mut self, text: impl Into<String>, now: Instant) {
        self.success = Some(StatusMessage {
            text: text.into(),
            shown_at: now,
        });
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn dismiss_success(&mut self) {
        self.success = None;
    }

    /// Drop messages older than [`MESSAGE_TTL`].
    pub fn expire_messages(&mut self, now: Instant) {
        if self.error.as_ref().is_some_and(|m| m.is_expired(now)) {
            self.error = None;
        }
        if self.success.as_ref().is_some_and(|m| m.is_expired(now)) {
            self.success = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn note(title: &str, description: &str) -> Note {
        let now = Utc::now();
        Note {
            id: uuid::Uuid::now_v7(),
            title: title.into(),
            description: description.into(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn starts_loading_in_create_mode() {
        let state = NotesState::new();
        assert!(state.is_loading());
        assert_eq!(state.mode(), &FormMode::Create);
        assert!(state.notes().is_empty());
    }

    #[test]
    fn filter_matches_title_case_insensitively() {
        let mut state = NotesState::new();
        let alpha = note("Alpha", "");
        state.replace_notes(vec![alpha.clone(), note("Beta", "")]);

        state.set_search_term("alp");
        let filtered = state.filtered_notes();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, alpha.id);
    }

    #[test]
    fn filter_matches_description() {
        let mut state = NotesState::new();
        state.replace_notes(vec![note("Groceries", "Milk, eggs"), note("Work", "Report")]);

        state.set_search_term("EGG");
        let titles: Vec<_> = state.filtered_notes().iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["Groceries"]);
    }

    #[test]
    fn empty_search_shows_everything() {
        let mut state = NotesState::new();
        state.replace_notes(vec![note("a", "1"), note("b", "2")]);
        assert_eq!(state.filtered_notes().len(), 2);
    }

    #[test]
    fn count_label_pluralizes() {
        let mut state = NotesState::new();
        assert_eq!(state.count_label(), "0 notes saved");
        state.replace_notes(vec![note("a", "1")]);
        assert_eq!(state.count_label(), "1 note saved");
        state.replace_notes(vec![note("a", "1"), note("b", "2")]);
        assert_eq!(state.count_label(), "2 notes saved");
    }

    #[test]
    fn edit_then_cancel_restores_create_draft() {
        let mut state = NotesState::new();
        state.set_title("half typed");

        let existing = note("Existing", "body");
        state.begin_edit(&existing);
        assert_eq!(state.editing_id(), Some(existing.id));
        assert_eq!(state.form().title, "Existing");

        state.set_title("Changed");
        assert_eq!(state.form().title, "Changed");

        state.cancel_edit();
        assert_eq!(state.mode(), &FormMode::Create);
        assert_eq!(state.form().title, "half typed");
    }

    #[test]
    fn finish_create_clears_draft() {
        let mut state = NotesState::new();
        state.set_title("t");
        state.set_description("d");
        assert!(state.form().is_submittable());

        state.finish_create();
        assert_eq!(state.form(), &NoteDraft::default());
    }

    #[test]
    fn messages_expire_after_ttl() {
        let mut state = NotesState::new();
        let t0 = Instant::now();
        state.set_success("Note created successfully!", t0);
        state.set_error("Error creating note", t0 + Duration::from_secs(2));

        state.expire_messages(t0 + Duration::from_millis(2_999));
        assert!(state.success().is_some());

        state.expire_messages(t0 + MESSAGE_TTL);
        assert!(state.success().is_none());
        assert_eq!(state.error(), Some("Error creating note"));

        state.expire_messages(t0 + Duration::from_secs(5));
        assert!(state.error().is_none());
    }

    #[test]
    fn messages_can_be_dismissed() {
        let mut state = NotesState::new();
        let now = Instant::now();
        state.set_success("ok", now);
        state.set_error("bad", now);

        state.dismiss_error();
        assert!(state.error().is_none());
        assert_eq!(state.success(), Some("ok"));

        state.dismiss_success();
        assert!(state.success().is_none());
    }
}
