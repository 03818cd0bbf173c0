//! SQLite course repository implementation.

use async_trait::async_trait;
use coursemgmt_domain::{Course, CourseId};
use sqlx::SqlitePool;

use super::helpers::row_to_course;
use crate::infrastructure::ports::{CourseRepo, RepoError};

/// Repository for Course lookups.
pub struct SqliteCourseRepo {
    pool: SqlitePool,
}

impl SqliteCourseRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepo for SqliteCourseRepo {
    async fn get(&self, id: CourseId) -> Result<Option<Course>, RepoError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, create_time, update_time
            FROM courses
            WHERE id = ?
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::database("get_course", e))?;

        row.as_ref().map(row_to_course).transpose()
    }
}
