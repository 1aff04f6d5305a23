//! Rollcall web server library.
//!
//! Exposes the building blocks (config, state, error handling, form
//! parsing, rendering, routes) so integration tests and the binary
//! entrypoint can both access them.

pub mod config;
pub mod error;
pub mod form;
pub mod handlers;
pub mod render;
pub mod router;
pub mod state;
