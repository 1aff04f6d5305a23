//! Repository for the `courses` table.

use sqlx::PgPool;

use crate::models::course::{Course, CreateCourse};

const COLUMNS: &str = "id, title, description";

/// Provides create/list operations for courses.
pub struct CourseRepo;

impl CourseRepo {
    /// Insert a new course, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCourse) -> Result<Course, sqlx::Error> {
        let query = format!(
            "INSERT INTO courses (title, description)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// List all courses in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses ORDER BY id ASC");
        sqlx::query_as::<_, Course>(&query).fetch_all(pool).await
    }
}
