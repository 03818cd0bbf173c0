//! Course sign-up use case.
//!
//! Enrolls a student in a course after checking that both exist and that
//! the pair has no ledger history.

use std::sync::Arc;

use coursemgmt_domain::{CourseId, EnrollmentStatus, StudentId};

use crate::entities::{Course, Enrollment, Student};

use super::error::EnrollmentError;
use super::types::SignUpResult;

/// Course sign-up use case.
///
/// Orchestrates: student lookup, course lookup, duplicate check, creation.
pub struct CourseSignUp {
    student: Arc<Student>,
    course: Arc<Course>,
    enrollment: Arc<Enrollment>,
}

impl CourseSignUp {
    pub fn new(student: Arc<Student>, course: Arc<Course>, enrollment: Arc<Enrollment>) -> Self {
        Self {
            student,
            course,
            enrollment,
        }
    }

    /// Execute the sign-up use case.
    ///
    /// # Returns
    /// * `Ok(SignUpResult)` - Active enrollment created
    /// * `Err(EnrollmentError)` - Rejected or failed; nothing was written
    pub async fn execute(
        &self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> Result<SignUpResult, EnrollmentError> {
        let student = self
            .student
            .get(student_id)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, student_id = %student_id, "Failed to load student");
                EnrollmentError::infrastructure("failed to retrieve student data", e)
            })?
            .ok_or_else(|| {
                tracing::debug!(student_id = %student_id, "Sign-up rejected: unknown student");
                EnrollmentError::StudentNotFound
            })?;

        let course = self
            .course
            .get(course_id)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, course_id = %course_id, "Failed to load course");
                EnrollmentError::infrastructure("failed to retrieve course data", e)
            })?
            .ok_or_else(|| {
                tracing::debug!(course_id = %course_id, "Sign-up rejected: unknown course");
                EnrollmentError::CourseNotFound
            })?;

        // Any prior row blocks sign-up, including a cancelled one
        let existing = self
            .enrollment
            .list_by_student_and_course(student_id, course_id)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, student_id = %student_id, course_id = %course_id, "Failed to check enrollment history");
                EnrollmentError::infrastructure("failed to retrieve course data", e)
            })?;
        if !existing.is_empty() {
            tracing::debug!(student_id = %student_id, course_id = %course_id, "Sign-up rejected: enrolled before");
            return Err(EnrollmentError::AlreadyEnrolled);
        }

        let created = self
            .enrollment
            .create(student_id, course_id, EnrollmentStatus::Active)
            .await
            .map_err(|e| {
                if e.is_already_exists() {
                    // Lost a race with a concurrent sign-up for the same pair
                    tracing::debug!(student_id = %student_id, course_id = %course_id, "Sign-up rejected by store uniqueness");
                    EnrollmentError::AlreadyEnrolled
                } else {
                    tracing::warn!(error = %e, student_id = %student_id, course_id = %course_id, "Failed to create enrollment");
                    EnrollmentError::infrastructure("failed to sign up course", e)
                }
            })?;

        tracing::info!(
            enrollment_id = %created.id,
            student_id = %student_id,
            course_id = %course_id,
            "Student signed up for course"
        );

        Ok(SignUpResult {
            enrollment_id: created.id,
            student_id: created.student_id,
            student_email: student.email,
            course_id: created.course_id,
            course_name: course.name,
            status: created.status,
            create_time: created.create_time,
            update_time: created.update_time,
        })
    }
}
