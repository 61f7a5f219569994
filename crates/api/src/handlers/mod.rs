//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the injected note store and map errors via
//! [`AppError`](crate::error::AppError).

pub mod notes;
