//! List courses use case.
//!
//! Returns the courses a student is actively enrolled in.

use std::sync::Arc;

use coursemgmt_domain::StudentId;

use crate::entities::{Course, Enrollment, Student};

use super::error::EnrollmentError;
use super::types::EnrolledCourse;

pub struct ListCourses {
    student: Arc<Student>,
    course: Arc<Course>,
    enrollment: Arc<Enrollment>,
}

impl ListCourses {
    pub fn new(student: Arc<Student>, course: Arc<Course>, enrollment: Arc<Enrollment>) -> Self {
        Self {
            student,
            course,
            enrollment,
        }
    }

    /// Active enrollments of `student_id`, in ledger order.
    ///
    /// A dangling course reference aborts the whole listing.
    pub async fn execute(
        &self,
        student_id: StudentId,
    ) -> Result<Vec<EnrolledCourse>, EnrollmentError> {
        self.student
            .get(student_id)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, student_id = %student_id, "Failed to load student");
                EnrollmentError::infrastructure("failed to retrieve student data", e)
            })?
            .ok_or_else(|| {
                tracing::debug!(student_id = %student_id, "Course listing rejected: unknown student");
                EnrollmentError::StudentNotFound
            })?;

        let enrollments = self
            .enrollment
            .list_active_by_student(student_id)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, student_id = %student_id, "Failed to list enrollments");
                EnrollmentError::infrastructure("failed to retrieve enrollments", e)
            })?;

        let mut courses = Vec::with_capacity(enrollments.len());
        for enrollment in enrollments {
            let course = self
                .course
                .get(enrollment.course_id)
                .await
                .map_err(|e| {
                    tracing::warn!(error = %e, course_id = %enrollment.course_id, "Failed to load course");
                    EnrollmentError::infrastructure("failed to retrieve course data", e)
                })?
                .ok_or_else(|| {
                    tracing::debug!(course_id = %enrollment.course_id, "Enrollment references missing course");
                    EnrollmentError::MissingCourse(enrollment.course_id)
                })?;

            courses.push(EnrolledCourse {
                course_id: enrollment.course_id,
                course_name: course.name,
                status: enrollment.status,
                create_time: enrollment.create_time,
                update_time: enrollment.update_time,
            });
        }

        Ok(courses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::{
        MockCourseRepo, MockEnrollmentRepo, MockStudentRepo, RepoError,
    };
    use crate::test_fixtures::{course, fixed_time, student};
    use coursemgmt_domain::{CourseId, EnrollmentId, EnrollmentStatus, NewEnrollment};

    fn use_case(
        student_repo: MockStudentRepo,
        course_repo: MockCourseRepo,
        enrollment_repo: MockEnrollmentRepo,
    ) -> ListCourses {
        ListCourses::new(
            Arc::new(Student::new(Arc::new(student_repo))),
            Arc::new(Course::new(Arc::new(course_repo))),
            Arc::new(Enrollment::new(
                Arc::new(enrollment_repo),
                Arc::new(FixedClock(fixed_time())),
            )),
        )
    }

    fn known_student() -> MockStudentRepo {
        let mut repo = MockStudentRepo::new();
        repo.expect_get()
            .returning(|id| Ok(Some(student(id.get(), "a@x.com"))));
        repo
    }

    fn active(id: i64, course_id: i64) -> coursemgmt_domain::Enrollment {
        NewEnrollment::new(
            StudentId::new(1),
            CourseId::new(course_id),
            EnrollmentStatus::Active,
            fixed_time(),
        )
        .with_id(EnrollmentId::new(id))
    }

    #[tokio::test]
    async fn when_student_not_found_returns_error() {
        let mut student_repo = MockStudentRepo::new();
        student_repo.expect_get().returning(|_| Ok(None));
        let mut enrollment_repo = MockEnrollmentRepo::new();
        enrollment_repo.expect_list_active_by_student().never();

        let err = use_case(student_repo, MockCourseRepo::new(), enrollment_repo)
            .execute(StudentId::new(9))
            .await
            .expect_err("unknown student");

        assert_eq!(err.to_string(), "student data not found");
    }

    #[tokio::test]
    async fn one_entry_per_active_enrollment_in_order() {
        let mut enrollment_repo = MockEnrollmentRepo::new();
        enrollment_repo
            .expect_list_active_by_student()
            .returning(|_| Ok(vec![active(1, 102), active(2, 101)]));
        let mut course_repo = MockCourseRepo::new();
        course_repo.expect_get().returning(|id| {
            let name = if id.get() == 101 { "Intro" } else { "Databases" };
            Ok(Some(course(id.get(), name)))
        });

        let courses = use_case(known_student(), course_repo, enrollment_repo)
            .execute(StudentId::new(1))
            .await
            .expect("listing succeeds");

        let names: Vec<&str> = courses.iter().map(|c| c.course_name.as_str()).collect();
        assert_eq!(names, vec!["Databases", "Intro"]);
        assert!(courses.iter().all(|c| c.status == EnrollmentStatus::Active));
    }

    #[tokio::test]
    async fn no_enrollments_yields_empty_list() {
        let mut enrollment_repo = MockEnrollmentRepo::new();
        enrollment_repo
            .expect_list_active_by_student()
            .returning(|_| Ok(vec![]));
        let mut course_repo = MockCourseRepo::new();
        course_repo.expect_get().never();

        let courses = use_case(known_student(), course_repo, enrollment_repo)
            .execute(StudentId::new(1))
            .await
            .expect("listing succeeds");

        assert!(courses.is_empty());
    }

    #[tokio::test]
    async fn missing_course_aborts_listing() {
        let mut enrollment_repo = MockEnrollmentRepo::new();
        enrollment_repo
            .expect_list_active_by_student()
            .returning(|_| Ok(vec![active(1, 101), active(2, 555)]));
        let mut course_repo = MockCourseRepo::new();
        course_repo.expect_get().returning(|id| {
            if id.get() == 101 {
                Ok(Some(course(101, "Intro")))
            } else {
                Ok(None)
            }
        });

        let err = use_case(known_student(), course_repo, enrollment_repo)
            .execute(StudentId::new(1))
            .await
            .expect_err("dangling course");

        assert!(matches!(err, EnrollmentError::MissingCourse(id) if id == CourseId::new(555)));
        assert_eq!(err.to_string(), "course data is not found for courseID: 555");
    }

    #[tokio::test]
    async fn enrollment_listing_failure_is_infrastructure() {
        let mut enrollment_repo = MockEnrollmentRepo::new();
        enrollment_repo
            .expect_list_active_by_student()
            .returning(|_| Err(RepoError::database("list_active_by_student", "locked")));

        let err = use_case(known_student(), MockCourseRepo::new(), enrollment_repo)
            .execute(StudentId::new(1))
            .await
            .expect_err("store failure");

        assert!(err.is_infrastructure());
        assert_eq!(err.to_string(), "failed to retrieve enrollments");
    }
}
