//! SQLite enrollment ledger implementation.
//!
//! Rows live in `course_enrollments` and are never deleted; cancelling only
//! flips `status`.

use std::sync::Arc;

use async_trait::async_trait;
use coursemgmt_domain::{
    CourseId, Enrollment, EnrollmentId, EnrollmentStatus, NewEnrollment, StudentId,
};
use sqlx::SqlitePool;

use super::helpers::{map_write_error, row_to_enrollment};
use crate::infrastructure::ports::{ClockPort, EnrollmentRepo, RepoError};

/// Repository for the enrollment ledger.
pub struct SqliteEnrollmentRepo {
    pool: SqlitePool,
    clock: Arc<dyn ClockPort>,
}

impl SqliteEnrollmentRepo {
    pub fn new(pool: SqlitePool, clock: Arc<dyn ClockPort>) -> Self {
        Self { pool, clock }
    }
}

#[async_trait]
impl EnrollmentRepo for SqliteEnrollmentRepo {
    async fn create(&self, enrollment: &NewEnrollment) -> Result<Enrollment, RepoError> {
        let result = sqlx::query(
            r#"
            INSERT INTO course_enrollments (student_id, course_id, status, create_time, update_time)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(enrollment.student_id.get())
        .bind(enrollment.course_id.get())
        .bind(i64::from(enrollment.status))
        .bind(enrollment.create_time)
        .bind(enrollment.update_time)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_write_error(
                "create_enrollment",
                format!(
                    "student_id={} course_id={}",
                    enrollment.student_id, enrollment.course_id
                ),
                e,
            )
        })?;

        let id = EnrollmentId::new(result.last_insert_rowid());
        Ok(enrollment.clone().with_id(id))
    }

    async fn list_active_by_student(
        &self,
        student_id: StudentId,
    ) -> Result<Vec<Enrollment>, RepoError> {
        let rows = sqlx::query(
            r#"
            SELECT id, student_id, course_id, status, create_time, update_time
            FROM course_enrollments
            WHERE student_id = ? AND status = ?
            ORDER BY id
            "#,
        )
        .bind(student_id.get())
        .bind(i64::from(EnrollmentStatus::Active))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::database("list_active_by_student", e))?;

        rows.iter().map(row_to_enrollment).collect()
    }

    async fn list_by_student_and_course(
        &self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> Result<Vec<Enrollment>, RepoError> {
        let rows = sqlx::query(
            r#"
            SELECT id, student_id, course_id, status, create_time, update_time
            FROM course_enrollments
            WHERE student_id = ? AND course_id = ?
            ORDER BY id
            "#,
        )
        .bind(student_id.get())
        .bind(course_id.get())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::database("list_by_student_and_course", e))?;

        rows.iter().map(row_to_enrollment).collect()
    }

    async fn update_status(
        &self,
        student_id: StudentId,
        course_id: CourseId,
        new_status: EnrollmentStatus,
    ) -> Result<(), RepoError> {
        // Only rows whose current status may move to `new_status` are touched,
        // so a Cancelled row can never be re-activated here.
        let sources = EnrollmentStatus::allowed_sources(new_status);
        let placeholders = vec!["?"; sources.len()].join(", ");
        let sql = format!(
            "UPDATE course_enrollments SET status = ?, update_time = ? \
             WHERE student_id = ? AND course_id = ? AND status IN ({placeholders})"
        );

        let mut q = sqlx::query(&sql)
            .bind(i64::from(new_status))
            .bind(self.clock.now())
            .bind(student_id.get())
            .bind(course_id.get());
        for status in sources {
            q = q.bind(i64::from(status));
        }

        let result = q
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("update_status", e))?;

        if result.rows_affected() == 0 {
            return Err(RepoError::no_rows_affected("update_status"));
        }

        tracing::debug!(
            student_id = %student_id,
            course_id = %course_id,
            status = %new_status,
            rows = result.rows_affected(),
            "Enrollment status updated"
        );
        Ok(())
    }

    async fn list_classmates(&self, student_id: StudentId) -> Result<Vec<Enrollment>, RepoError> {
        let rows = sqlx::query(
            r#"
            SELECT ce.id, ce.student_id, ce.course_id, ce.status, ce.create_time, ce.update_time
            FROM course_enrollments ce
            JOIN course_enrollments ce2 ON ce.course_id = ce2.course_id
            WHERE ce2.student_id = ? AND ce.student_id != ? AND ce2.status = ? AND ce.status = ?
            ORDER BY ce.course_id, ce.student_id
            "#,
        )
        .bind(student_id.get())
        .bind(student_id.get())
        .bind(i64::from(EnrollmentStatus::Active))
        .bind(i64::from(EnrollmentStatus::Active))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::database("list_classmates", e))?;

        rows.iter().map(row_to_enrollment).collect()
    }
}
