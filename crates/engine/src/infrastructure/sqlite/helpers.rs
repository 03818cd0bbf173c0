//! Row conversion and error mapping shared by the SQLite repositories.

use chrono::{DateTime, Utc};
use coursemgmt_domain::{
    Course, CourseId, Enrollment, EnrollmentId, EnrollmentStatus, Student, StudentId,
};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::infrastructure::ports::RepoError;

/// Map a failed write, translating constraint failures into typed errors.
pub fn map_write_error(operation: &'static str, key: impl ToString, err: sqlx::Error) -> RepoError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return RepoError::already_exists("Enrollment", key);
        }
        if db_err.is_check_violation() || db_err.is_foreign_key_violation() {
            return RepoError::constraint(db_err.message());
        }
    }
    RepoError::database(operation, err)
}

fn column<'r, T>(row: &'r SqliteRow, name: &str) -> Result<T, RepoError>
where
    T: sqlx::Decode<'r, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite>,
{
    row.try_get(name)
        .map_err(|e| RepoError::database("decode", format!("column '{name}': {e}")))
}

pub fn row_to_student(row: &SqliteRow) -> Result<Student, RepoError> {
    Ok(Student {
        id: StudentId::new(column(row, "id")?),
        email: column(row, "email")?,
        create_time: column::<DateTime<Utc>>(row, "create_time")?,
        update_time: column::<DateTime<Utc>>(row, "update_time")?,
    })
}

pub fn row_to_course(row: &SqliteRow) -> Result<Course, RepoError> {
    Ok(Course {
        id: CourseId::new(column(row, "id")?),
        name: column(row, "name")?,
        create_time: column::<DateTime<Utc>>(row, "create_time")?,
        update_time: column::<DateTime<Utc>>(row, "update_time")?,
    })
}

pub fn row_to_enrollment(row: &SqliteRow) -> Result<Enrollment, RepoError> {
    let id = EnrollmentId::new(column(row, "id")?);
    let status_code: i64 = column(row, "status")?;
    let status = EnrollmentStatus::try_from(status_code)
        .map_err(|e| RepoError::serialization(format!("enrollment {id}: {e}")))?;

    Ok(Enrollment {
        id,
        student_id: StudentId::new(column(row, "student_id")?),
        course_id: CourseId::new(column(row, "course_id")?),
        status,
        create_time: column::<DateTime<Utc>>(row, "create_time")?,
        update_time: column::<DateTime<Utc>>(row, "update_time")?,
    })
}
