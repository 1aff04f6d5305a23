//! Repository for the `enrollments` table.

use sqlx::PgPool;

use crate::models::enrollment::{CreateEnrollment, Enrollment};

const COLUMNS: &str = "id, student_id, course_id, enrolled_on";

/// Provides create/list operations for enrollments.
pub struct EnrollmentRepo;

impl EnrollmentRepo {
    /// Insert a new enrollment, returning the created row.
    ///
    /// `enrolled_on` takes the database default (`CURRENT_DATE`). Fails
    /// with a foreign-key violation if either parent id does not exist,
    /// and with a unique violation (`uq_enrollments_student_course`) if
    /// the student is already enrolled in the course.
    pub async fn create(
        pool: &PgPool,
        input: &CreateEnrollment,
    ) -> Result<Enrollment, sqlx::Error> {
        let query = format!(
            "INSERT INTO enrollments (student_id, course_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(input.student_id)
            .bind(input.course_id)
            .fetch_one(pool)
            .await
    }

    /// List all enrollments in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Enrollment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM enrollments ORDER BY id ASC");
        sqlx::query_as::<_, Enrollment>(&query)
            .fetch_all(pool)
            .await
    }
}
