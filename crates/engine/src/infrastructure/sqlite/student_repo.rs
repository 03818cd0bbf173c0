//! SQLite student repository implementation.

use async_trait::async_trait;
use coursemgmt_domain::{Student, StudentId};
use sqlx::SqlitePool;

use super::helpers::row_to_student;
use crate::infrastructure::ports::{RepoError, StudentRepo};

/// Repository for Student lookups.
pub struct SqliteStudentRepo {
    pool: SqlitePool,
}

impl SqliteStudentRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepo for SqliteStudentRepo {
    async fn get(&self, id: StudentId) -> Result<Option<Student>, RepoError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, create_time, update_time
            FROM students
            WHERE id = ?
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::database("get_student", e))?;

        row.as_ref().map(row_to_student).transpose()
    }
}
