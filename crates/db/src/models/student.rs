//! Student entity model and DTOs.

use rollcall_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A student row from the `students` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub id: DbId,
    pub name: String,
    /// Unique across all students (`uq_students_email`).
    pub email: String,
}

/// DTO for creating a new student.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudent {
    pub name: String,
    pub email: String,
}
