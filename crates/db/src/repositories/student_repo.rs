//! Repository for the `students` table.

use sqlx::PgPool;

use crate::models::student::{CreateStudent, Student};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email";

/// Provides create/list operations for students.
pub struct StudentRepo;

impl StudentRepo {
    /// Insert a new student, returning the created row.
    ///
    /// Fails with a unique violation (`uq_students_email`) if the email
    /// is already taken.
    pub async fn create(pool: &PgPool, input: &CreateStudent) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students (name, email)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// List all students in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students ORDER BY id ASC");
        sqlx::query_as::<_, Student>(&query).fetch_all(pool).await
    }
}
