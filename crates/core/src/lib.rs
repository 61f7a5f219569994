//! Domain types, errors and validation shared by every EzNotes crate.
//!
//! This crate has no internal dependencies so the server, the data access
//! layer and the client can all build on it.

pub mod error;
pub mod notes;
pub mod types;
