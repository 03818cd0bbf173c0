//! Application state and composition.

use std::sync::Arc;
use std::time::Duration;

use crate::entities;
use crate::infrastructure::{
    ports::{ClockPort, CourseRepo, EnrollmentRepo, StudentRepo},
    sqlite::SqliteRepositories,
};
use crate::use_cases;

/// Upper bound on a single use-case call unless configured otherwise.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Main application state.
///
/// Holds all use cases. Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
    pub request_timeout: Duration,
}

/// Container for all use cases.
pub struct UseCases {
    pub enrollment: use_cases::EnrollmentUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(repos: SqliteRepositories, clock: Arc<dyn ClockPort>) -> Self {
        // Port traits from SQLite
        let student_repo: Arc<dyn StudentRepo> = repos.student.clone();
        let course_repo: Arc<dyn CourseRepo> = repos.course.clone();
        let enrollment_repo: Arc<dyn EnrollmentRepo> = repos.enrollment.clone();

        // Entity services
        let student = Arc::new(entities::Student::new(student_repo));
        let course = Arc::new(entities::Course::new(course_repo));
        let enrollment = Arc::new(entities::Enrollment::new(enrollment_repo, clock));

        let enrollment_uc = use_cases::EnrollmentUseCases::new(
            Arc::new(use_cases::enrollment::CourseSignUp::new(
                student.clone(),
                course.clone(),
                enrollment.clone(),
            )),
            Arc::new(use_cases::enrollment::ListCourses::new(
                student.clone(),
                course.clone(),
                enrollment.clone(),
            )),
            Arc::new(use_cases::enrollment::CancelCourse::new(enrollment.clone())),
            Arc::new(use_cases::enrollment::ListClassmates::new(
                student, course, enrollment,
            )),
        );

        Self {
            use_cases: UseCases {
                enrollment: enrollment_uc,
            },
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
