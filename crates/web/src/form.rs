//! Parsing of the `/agregar` form body.
//!
//! The browser form submits a flat urlencoded body with a `tipo`
//! discriminator and whichever fields the chosen kind needs. That raw
//! shape is deserialized into [`AddEntryForm`] and then converted into
//! the tagged [`NewEntry`] sum type, so dispatch in the handler is an
//! exhaustive `match` instead of string comparisons scattered around.

use rollcall_core::error::CoreError;
use rollcall_db::models::course::CreateCourse;
use rollcall_db::models::enrollment::CreateEnrollment;
use rollcall_db::models::student::CreateStudent;
use serde::Deserialize;

/// Raw `/agregar` form body, exactly as the browser sends it.
///
/// Every field except `tipo` is optional at this layer; which ones are
/// required depends on the discriminator and is checked during
/// conversion to [`NewEntry`].
#[derive(Debug, Clone, Deserialize)]
pub struct AddEntryForm {
    pub tipo: String,
    // estudiante
    pub nombre: Option<String>,
    pub correo: Option<String>,
    // curso
    pub titulo: Option<String>,
    pub descripcion: Option<String>,
    // inscripcion
    pub estudiante_id: Option<String>,
    pub curso_id: Option<String>,
}

/// A validated create request for exactly one entity kind.
#[derive(Debug, Clone)]
pub enum NewEntry {
    Student(CreateStudent),
    Course(CreateCourse),
    Enrollment(CreateEnrollment),
}

impl TryFrom<AddEntryForm> for NewEntry {
    type Error = CoreError;

    /// Validate and convert the raw form into a [`NewEntry`].
    ///
    /// Unknown `tipo` values are rejected rather than silently dropped;
    /// missing required fields and non-numeric ids are validation errors.
    fn try_from(form: AddEntryForm) -> Result<Self, Self::Error> {
        match form.tipo.as_str() {
            "estudiante" => Ok(NewEntry::Student(CreateStudent {
                name: require(form.nombre, "nombre")?,
                email: require(form.correo, "correo")?,
            })),
            "curso" => Ok(NewEntry::Course(CreateCourse {
                title: require(form.titulo, "titulo")?,
                description: optional(form.descripcion),
            })),
            "inscripcion" => Ok(NewEntry::Enrollment(CreateEnrollment {
                student_id: require_id(form.estudiante_id, "estudiante_id")?,
                course_id: require_id(form.curso_id, "curso_id")?,
            })),
            other => Err(CoreError::Validation(format!(
                "unknown tipo '{other}' (expected estudiante, curso or inscripcion)"
            ))),
        }
    }
}

/// A required text field: present and non-blank after trimming.
fn require(value: Option<String>, name: &str) -> Result<String, CoreError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(CoreError::Validation(format!("field '{name}' is required"))),
    }
}

/// An optional text field: blank submissions collapse to `None`.
fn optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// A required integer id field.
fn require_id(value: Option<String>, name: &str) -> Result<i64, CoreError> {
    let raw = require(value, name)?;
    raw.trim()
        .parse()
        .map_err(|_| CoreError::Validation(format!("field '{name}' must be an integer id")))
}
