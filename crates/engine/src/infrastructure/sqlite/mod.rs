//! SQLite database implementations.
//!
//! One pool is opened at startup and shared by every repository.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::infrastructure::ports::{ClockPort, RepoError};

mod course_repo;
mod enrollment_repo;
mod helpers;
mod student_repo;

pub use course_repo::SqliteCourseRepo;
pub use enrollment_repo::SqliteEnrollmentRepo;
pub use student_repo::SqliteStudentRepo;

/// Open a connection pool for `database_url`.
pub async fn connect(database_url: &str) -> Result<SqlitePool, RepoError> {
    SqlitePool::connect(database_url)
        .await
        .map_err(|e| RepoError::database("connect", e))
}

/// Create tables and indexes if they are missing.
///
/// `UNIQUE(student_id, course_id)` makes the store the final arbiter of
/// duplicate sign-ups.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), RepoError> {
    let statements = [
        r#"
        CREATE TABLE IF NOT EXISTS students (
            id INTEGER PRIMARY KEY,
            email TEXT NOT NULL,
            create_time TEXT NOT NULL,
            update_time TEXT NOT NULL
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS courses (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            create_time TEXT NOT NULL,
            update_time TEXT NOT NULL
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS course_enrollments (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            student_id INTEGER NOT NULL,
            course_id INTEGER NOT NULL,
            status INTEGER NOT NULL,
            create_time TEXT NOT NULL,
            update_time TEXT NOT NULL,
            UNIQUE (student_id, course_id)
        )
        "#,
        "CREATE INDEX IF NOT EXISTS course_enrollments_course_status ON course_enrollments (course_id, status)",
    ];

    for statement in statements {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| RepoError::database("ensure_schema", e))?;
    }

    tracing::info!("Database schema initialized");
    Ok(())
}

/// Create all SQLite repositories from a pool.
pub struct SqliteRepositories {
    pub student: Arc<SqliteStudentRepo>,
    pub course: Arc<SqliteCourseRepo>,
    pub enrollment: Arc<SqliteEnrollmentRepo>,
}

impl SqliteRepositories {
    pub fn new(pool: SqlitePool, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            student: Arc::new(SqliteStudentRepo::new(pool.clone())),
            course: Arc::new(SqliteCourseRepo::new(pool.clone())),
            enrollment: Arc::new(SqliteEnrollmentRepo::new(pool, clock)),
        }
    }
}
