//! Shared domain types for the rollcall workspace.

pub mod error;
pub mod types;
