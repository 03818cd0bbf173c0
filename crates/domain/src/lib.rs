//! Course management domain.
//!
//! Plain data types for the three entities of the system (student, course,
//! enrollment) plus the invariants that belong to them. No I/O lives here.

pub mod entities;
pub mod error;
pub mod ids;

pub use entities::{Course, Enrollment, EnrollmentStatus, NewEnrollment, Student};
pub use error::DomainError;
pub use ids::{CourseId, EnrollmentId, StudentId};
