//! Enrollment use cases.
//!
//! Sign-up, cancellation and the two enrollment listings.

use std::sync::Arc;

mod cancel;
mod error;
mod list_classmates;
mod list_courses;
mod sign_up;
mod types;

pub use cancel::CancelCourse;
pub use error::EnrollmentError;
pub use list_classmates::ListClassmates;
pub use list_courses::ListCourses;
pub use sign_up::CourseSignUp;
pub use types::{Classmate, CourseClassmates, EnrolledCourse, SignUpResult};

/// Container for enrollment use cases.
pub struct EnrollmentUseCases {
    pub sign_up: Arc<CourseSignUp>,
    pub list_courses: Arc<ListCourses>,
    pub cancel: Arc<CancelCourse>,
    pub list_classmates: Arc<ListClassmates>,
}

impl EnrollmentUseCases {
    pub fn new(
        sign_up: Arc<CourseSignUp>,
        list_courses: Arc<ListCourses>,
        cancel: Arc<CancelCourse>,
        list_classmates: Arc<ListClassmates>,
    ) -> Self {
        Self {
            sign_up,
            list_courses,
            cancel,
            list_classmates,
        }
    }
}
