//! Enrollment entity module.
//!
//! Wraps the enrollment ledger. Creation is the only place timestamps are
//! decided; everything else delegates straight to the repository.

use std::sync::Arc;

use coursemgmt_domain::{self as domain, CourseId, EnrollmentStatus, NewEnrollment, StudentId};

use crate::infrastructure::ports::{ClockPort, EnrollmentRepo, RepoError};

/// Enrollment entity - handles ledger operations.
pub struct Enrollment {
    repo: Arc<dyn EnrollmentRepo>,
    clock: Arc<dyn ClockPort>,
}

impl Enrollment {
    pub fn new(repo: Arc<dyn EnrollmentRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { repo, clock }
    }

    /// Persist a new ledger row with create/update time set to now.
    pub async fn create(
        &self,
        student_id: StudentId,
        course_id: CourseId,
        status: EnrollmentStatus,
    ) -> Result<domain::Enrollment, RepoError> {
        let enrollment = NewEnrollment::new(student_id, course_id, status, self.clock.now());
        self.repo.create(&enrollment).await
    }

    /// Active enrollments for a student.
    pub async fn list_active_by_student(
        &self,
        student_id: StudentId,
    ) -> Result<Vec<domain::Enrollment>, RepoError> {
        self.repo.list_active_by_student(student_id).await
    }

    /// Every enrollment for the pair, whatever its status.
    pub async fn list_by_student_and_course(
        &self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> Result<Vec<domain::Enrollment>, RepoError> {
        self.repo
            .list_by_student_and_course(student_id, course_id)
            .await
    }

    pub async fn update_status(
        &self,
        student_id: StudentId,
        course_id: CourseId,
        new_status: EnrollmentStatus,
    ) -> Result<(), RepoError> {
        self.repo
            .update_status(student_id, course_id, new_status)
            .await
    }

    pub async fn list_classmates(
        &self,
        student_id: StudentId,
    ) -> Result<Vec<domain::Enrollment>, RepoError> {
        self.repo.list_classmates(student_id).await
    }
}
