use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rollcall_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
///
/// The `/agregar` handler does NOT rely on this mapping for persistence
/// failures: those are rendered as a plain-text `Error: …` page via
/// [`user_message`], matching the behaviour the UI depends on.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `rollcall_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`)
///   map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            if db_err.code().as_deref() == Some(PG_UNIQUE_VIOLATION) {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

/// PostgreSQL error code for unique constraint violations.
const PG_UNIQUE_VIOLATION: &str = "23505";
/// PostgreSQL error code for foreign-key violations.
const PG_FOREIGN_KEY_VIOLATION: &str = "23503";

/// Describe a persistence failure for display on the error page.
///
/// Constraint violations get a friendly sentence; anything else falls
/// back to the error's own description.
pub fn user_message(err: &sqlx::Error) -> String {
    if let sqlx::Error::Database(db_err) = err {
        match db_err.code().as_deref() {
            Some(PG_UNIQUE_VIOLATION) => {
                return match db_err.constraint() {
                    Some("uq_students_email") => {
                        "a student with that email already exists".to_string()
                    }
                    Some("uq_enrollments_student_course") => {
                        "that student is already enrolled in that course".to_string()
                    }
                    _ => format!("duplicate value ({db_err})"),
                };
            }
            Some(PG_FOREIGN_KEY_VIOLATION) => {
                return match db_err.constraint() {
                    Some("fk_enrollments_student_id") => {
                        "no student exists with that id".to_string()
                    }
                    Some("fk_enrollments_course_id") => {
                        "no course exists with that id".to_string()
                    }
                    _ => format!("referenced row does not exist ({db_err})"),
                };
            }
            _ => {}
        }
    }
    err.to_string()
}
