//! Repository port traits for database access.

use async_trait::async_trait;
use coursemgmt_domain::{
    Course, CourseId, Enrollment, EnrollmentStatus, NewEnrollment, Student, StudentId,
};

use super::error::RepoError;

// =============================================================================
// Database Ports (one per entity type)
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepo: Send + Sync {
    /// `Ok(None)` when no student has this id.
    async fn get(&self, id: StudentId) -> Result<Option<Student>, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepo: Send + Sync {
    /// `Ok(None)` when no course has this id.
    async fn get(&self, id: CourseId) -> Result<Option<Course>, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentRepo: Send + Sync {
    /// Insert a ledger row and return it with the store-assigned id.
    ///
    /// Fails with `RepoError::AlreadyExists` if the (student, course) pair is taken.
    async fn create(&self, enrollment: &NewEnrollment) -> Result<Enrollment, RepoError>;

    /// Active rows for the student, in store order.
    async fn list_active_by_student(
        &self,
        student_id: StudentId,
    ) -> Result<Vec<Enrollment>, RepoError>;

    /// Rows of any status for the pair.
    async fn list_by_student_and_course(
        &self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> Result<Vec<Enrollment>, RepoError>;

    /// Move the pair's row(s) to `new_status`.
    ///
    /// Fails with `RepoError::NoRowsAffected` if nothing matched.
    async fn update_status(
        &self,
        student_id: StudentId,
        course_id: CourseId,
        new_status: EnrollmentStatus,
    ) -> Result<(), RepoError>;

    /// One Active row per (other student, shared course) for every course the
    /// student is actively enrolled in. The student's own rows are excluded.
    async fn list_classmates(&self, student_id: StudentId) -> Result<Vec<Enrollment>, RepoError>;
}
