//! Enrollment entity model and DTOs.

use rollcall_core::types::{DateOnly, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An enrollment row from the `enrollments` table.
///
/// Joins one student to one course. Rows are removed automatically when
/// either parent is deleted (`ON DELETE CASCADE`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Enrollment {
    pub id: DbId,
    pub student_id: DbId,
    pub course_id: DbId,
    /// Defaults to the current date in the database.
    pub enrolled_on: DateOnly,
}

/// DTO for creating a new enrollment.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEnrollment {
    pub student_id: DbId,
    pub course_id: DbId,
}
