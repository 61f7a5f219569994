//! `eznotes-client` library crate.
//!
//! The HTTP client for the notes API, the local view state, and the
//! controller tying them together. The terminal front end lives in
//! `main.rs`.

pub mod api;
pub mod app;
pub mod command;
pub mod models;
pub mod state;
pub mod view;

pub use api::{ClientError, NotesApi};
pub use app::NotesApp;
pub use state::{FormMode, NotesState};
