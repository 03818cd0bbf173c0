//! Campus seeder for loading student/course fixtures into a scratch SQLite file.
//!
//! Students and courses are provisioned outside the application, so tests
//! insert them directly with SQL.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use coursemgmt_domain::{CourseId, EnrollmentStatus, StudentId};
use serde::Deserialize;
use sqlx::SqlitePool;
use tempfile::TempDir;

use super::{fixed_time, load_fixture};
use crate::infrastructure::clock::FixedClock;
use crate::infrastructure::ports::ClockPort;
use crate::infrastructure::sqlite::{self, SqliteRepositories};

#[derive(Debug, Clone, Deserialize)]
pub struct StudentData {
    pub id: i64,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CourseData {
    pub id: i64,
    pub name: String,
}

/// Raw contents of `test_data/campus.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct Campus {
    pub students: Vec<StudentData>,
    pub courses: Vec<CourseData>,
}

pub fn load_campus() -> Campus {
    load_fixture("campus.json")
}

/// A migrated SQLite database in a temporary directory.
///
/// The directory is removed when this value is dropped.
pub struct TestDatabase {
    pub pool: SqlitePool,
    pub clock: Arc<dyn ClockPort>,
    _dir: TempDir,
}

impl TestDatabase {
    /// Empty schema, no rows.
    pub async fn empty() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let db_path = dir.path().join("course_management.db");
        let url = format!("sqlite:{}?mode=rwc", db_path.to_string_lossy());

        let pool = sqlite::connect(&url).await.expect("connect sqlite");
        sqlite::ensure_schema(&pool).await.expect("ensure schema");

        Self {
            pool,
            clock: Arc::new(FixedClock(fixed_time())),
            _dir: dir,
        }
    }

    /// Schema plus every student and course from `campus.json`.
    pub async fn seeded() -> Self {
        let db = Self::empty().await;
        let campus = load_campus();
        for s in &campus.students {
            db.insert_student(s.id, &s.email).await;
        }
        for c in &campus.courses {
            db.insert_course(c.id, &c.name).await;
        }
        db
    }

    pub fn repositories(&self) -> SqliteRepositories {
        SqliteRepositories::new(self.pool.clone(), self.clock.clone())
    }

    pub async fn insert_student(&self, id: i64, email: &str) {
        let now = fixed_time();
        sqlx::query(
            "INSERT INTO students (id, email, create_time, update_time) VALUES (?, ?, ?, ?)",
        )
        .bind(id)
        .bind(email)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .expect("insert student");
    }

    pub async fn insert_course(&self, id: i64, name: &str) {
        let now = fixed_time();
        sqlx::query("INSERT INTO courses (id, name, create_time, update_time) VALUES (?, ?, ?, ?)")
            .bind(id)
            .bind(name)
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await
            .expect("insert course");
    }

    /// Insert a ledger row directly, bypassing the use cases.
    pub async fn insert_enrollment(
        &self,
        student_id: StudentId,
        course_id: CourseId,
        status: EnrollmentStatus,
    ) {
        let now: DateTime<Utc> = fixed_time();
        sqlx::query(
            "INSERT INTO course_enrollments (student_id, course_id, status, create_time, update_time) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(student_id.get())
        .bind(course_id.get())
        .bind(i64::from(status))
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .expect("insert enrollment");
    }
}
