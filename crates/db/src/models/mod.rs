//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//!
//! No update DTOs exist: every entity in this system is created-only.

pub mod course;
pub mod enrollment;
pub mod student;
