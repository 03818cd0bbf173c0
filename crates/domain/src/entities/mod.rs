//! Domain entities - Core business objects with identity

mod course;
mod enrollment;
mod student;

pub use course::Course;
pub use enrollment::{Enrollment, EnrollmentStatus, NewEnrollment};
pub use student::Student;
