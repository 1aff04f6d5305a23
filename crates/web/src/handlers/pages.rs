//! Handlers for the two page routes: the combined index and the
//! `/agregar` form target.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use rollcall_db::repositories::{CourseRepo, EnrollmentRepo, StudentRepo};

use crate::error::{user_message, AppResult};
use crate::form::{AddEntryForm, NewEntry};
use crate::render;
use crate::state::AppState;

/// GET /
///
/// Fetch every row of all three entities and render the combined page.
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let students = StudentRepo::list(&state.pool).await?;
    let courses = CourseRepo::list(&state.pool).await?;
    let enrollments = EnrollmentRepo::list(&state.pool).await?;

    Ok(Html(render::index_page(&students, &courses, &enrollments)))
}

/// POST /agregar
///
/// Dispatch the form on its `tipo` discriminator and create the matching
/// entity. Success redirects back to `/` (303, so the browser re-fetches
/// with GET). Persistence failures keep the historical contract: a 200
/// plain-text page whose body starts with `Error: `. Invalid forms
/// (unknown `tipo`, missing fields, non-numeric ids) are 400s.
pub async fn add_entry(State(state): State<AppState>, Form(form): Form<AddEntryForm>) -> Response {
    let entry = match NewEntry::try_from(form) {
        Ok(entry) => entry,
        Err(err) => {
            tracing::debug!(error = %err, "Rejected /agregar form");
            return (StatusCode::BAD_REQUEST, format!("Error: {err}")).into_response();
        }
    };

    let result = match entry {
        NewEntry::Student(input) => StudentRepo::create(&state.pool, &input)
            .await
            .map(|s| tracing::info!(id = s.id, "Created student")),
        NewEntry::Course(input) => CourseRepo::create(&state.pool, &input)
            .await
            .map(|c| tracing::info!(id = c.id, "Created course")),
        NewEntry::Enrollment(input) => EnrollmentRepo::create(&state.pool, &input)
            .await
            .map(|e| tracing::info!(id = e.id, "Created enrollment")),
    };

    match result {
        Ok(()) => Redirect::to("/").into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "Create failed");
            (StatusCode::OK, format!("Error: {}", user_message(&err))).into_response()
        }
    }
}
