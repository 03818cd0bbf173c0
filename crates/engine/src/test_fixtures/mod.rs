//! Test fixtures loader for JSON fixture files and common test helpers.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::campus_seeder::TestDatabase;
//!
//! #[tokio::test]
//! async fn lists_courses() {
//!     let db = TestDatabase::seeded().await;
//!     // ... test logic against db.pool
//! }
//! ```

pub mod campus_seeder;

use std::path::PathBuf;

use chrono::{DateTime, TimeZone, Utc};
use coursemgmt_domain::{Course, CourseId, Student, StudentId};

// =============================================================================
// Fixture Loading
// =============================================================================

/// Load a JSON fixture from test_data/ directory.
///
/// # Panics
///
/// Panics if the fixture file cannot be read or parsed.
pub fn load_fixture<T: serde::de::DeserializeOwned>(path: &str) -> T {
    let fixture_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_data")
        .join(path);
    let content = std::fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture '{}': {}",
            fixture_path.display(),
            e
        )
    });
    serde_json::from_str(&content).unwrap_or_else(|e| {
        panic!(
            "Failed to parse fixture '{}': {}",
            fixture_path.display(),
            e
        )
    })
}

// =============================================================================
// Common Builders
// =============================================================================

/// A whole-second timestamp, so values survive a round trip through the store.
pub fn fixed_time() -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000, 0)
        .single()
        .expect("valid fixed timestamp")
}

pub fn student(id: i64, email: &str) -> Student {
    Student::new(StudentId::new(id), email, fixed_time())
}

pub fn course(id: i64, name: &str) -> Course {
    Course::new(CourseId::new(id), name, fixed_time())
}
