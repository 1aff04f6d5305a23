//! Course entity model and DTOs.

use rollcall_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A course row from the `courses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
}

/// DTO for creating a new course.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourse {
    pub title: String,
    pub description: Option<String>,
}
