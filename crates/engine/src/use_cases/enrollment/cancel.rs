//! Cancel course use case.

use std::sync::Arc;

use coursemgmt_domain::{CourseId, EnrollmentStatus, StudentId};

use crate::entities::Enrollment;

use super::error::EnrollmentError;

/// Cancel course use case.
///
/// Flips the pair's ledger row to Cancelled. Student and course are not
/// looked up first; a missing row surfaces as the generic cancel failure.
pub struct CancelCourse {
    enrollment: Arc<Enrollment>,
}

impl CancelCourse {
    pub fn new(enrollment: Arc<Enrollment>) -> Self {
        Self { enrollment }
    }

    pub async fn execute(
        &self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> Result<(), EnrollmentError> {
        self.enrollment
            .update_status(student_id, course_id, EnrollmentStatus::Cancelled)
            .await
            .map_err(|e| {
                tracing::warn!(
                    error = %e,
                    student_id = %student_id,
                    course_id = %course_id,
                    "Failed to cancel enrollment"
                );
                EnrollmentError::infrastructure("failed to cancel course enrollment", e)
            })?;

        tracing::info!(student_id = %student_id, course_id = %course_id, "Enrollment cancelled");
        Ok(())
    }
}
