//! Entity modules - Domain capability encapsulation.
//!
//! Each module wraps operations for a domain entity type.
//! They depend on repository ports and provide the building blocks for use cases.

pub mod course;
pub mod enrollment;
pub mod student;

pub use course::Course;
pub use enrollment::Enrollment;
pub use student::Student;
