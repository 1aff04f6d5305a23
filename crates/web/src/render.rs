//! HTML rendering for the single-page UI.
//!
//! Builds the combined forms-plus-tables page returned by `GET /`.
//! Every interpolated field value goes through [`escape_html`], so
//! hostile input stored in the database cannot inject markup.

use rollcall_db::models::course::Course;
use rollcall_db::models::enrollment::Enrollment;
use rollcall_db::models::student::Student;

/// Escape a value for interpolation into HTML text or attribute content.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the full index page: three add-forms and three entity tables.
pub fn index_page(
    students: &[Student],
    courses: &[Course],
    enrollments: &[Enrollment],
) -> String {
    let mut page = String::with_capacity(4096);
    page.push_str(
        "<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Registro de cursos</title>\n</head>\n<body>\n",
    );
    push_forms(&mut page);
    page.push_str("<br>\n");
    push_students_table(&mut page, students);
    page.push_str("<br>\n");
    push_courses_table(&mut page, courses);
    page.push_str("<br>\n");
    push_enrollments_table(&mut page, enrollments);
    page.push_str("</body>\n</html>\n");
    page
}

fn push_forms(page: &mut String) {
    page.push_str(
        "<h2>Agregar Estudiante</h2>\n\
         <form method=\"POST\" action=\"/agregar\">\n\
         <input type=\"hidden\" name=\"tipo\" value=\"estudiante\">\n\
         Nombre: <input type=\"text\" name=\"nombre\" required><br>\n\
         Correo: <input type=\"email\" name=\"correo\" required><br>\n\
         <input type=\"submit\" value=\"Agregar Estudiante\">\n\
         </form>\n\
         <h2>Agregar Curso</h2>\n\
         <form method=\"POST\" action=\"/agregar\">\n\
         <input type=\"hidden\" name=\"tipo\" value=\"curso\">\n\
         Título: <input type=\"text\" name=\"titulo\" required><br>\n\
         Descripción: <input type=\"text\" name=\"descripcion\"><br>\n\
         <input type=\"submit\" value=\"Agregar Curso\">\n\
         </form>\n\
         <h2>Agregar Inscripción</h2>\n\
         <form method=\"POST\" action=\"/agregar\">\n\
         <input type=\"hidden\" name=\"tipo\" value=\"inscripcion\">\n\
         ID Estudiante: <input type=\"number\" name=\"estudiante_id\" required><br>\n\
         ID Curso: <input type=\"number\" name=\"curso_id\" required><br>\n\
         <input type=\"submit\" value=\"Agregar Inscripción\">\n\
         </form>\n",
    );
}

fn push_students_table(page: &mut String, students: &[Student]) {
    page.push_str(
        "<h3>Estudiantes</h3>\n<table border=\"1\">\n\
         <tr><th>ID</th><th>Nombre</th><th>Correo</th></tr>\n",
    );
    for s in students {
        page.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            s.id,
            escape_html(&s.name),
            escape_html(&s.email),
        ));
    }
    page.push_str("</table>\n");
}

fn push_courses_table(page: &mut String, courses: &[Course]) {
    page.push_str(
        "<h3>Cursos</h3>\n<table border=\"1\">\n\
         <tr><th>ID</th><th>Título</th><th>Descripción</th></tr>\n",
    );
    for c in courses {
        page.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            c.id,
            escape_html(&c.title),
            escape_html(c.description.as_deref().unwrap_or("")),
        ));
    }
    page.push_str("</table>\n");
}

fn push_enrollments_table(page: &mut String, enrollments: &[Enrollment]) {
    page.push_str(
        "<h3>Inscripciones</h3>\n<table border=\"1\">\n\
         <tr><th>ID</th><th>Estudiante ID</th><th>Curso ID</th><th>Fecha</th></tr>\n",
    );
    for e in enrollments {
        page.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            e.id, e.student_id, e.course_id, e.enrolled_on,
        ));
    }
    page.push_str("</table>\n");
}
