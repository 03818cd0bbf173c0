//! Course Management Protocol - Wire types for the HTTP API
//!
//! This crate contains the JSON request payloads and response envelopes
//! exchanged with clients.
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json, and chrono
//! 2. **No business logic** - Pure data types and serialization
//! 3. **No domain IDs** - raw `i64` identifiers in DTOs

pub mod requests;
pub mod responses;

pub use requests::{CancelCourseRequest, CourseSignUpRequest, StudentQuery};
pub use responses::{
    CancelCourseResponse, ClassmateData, CourseClassmatesData, CourseDetailData,
    CourseEnrollmentData, CourseSignUpResponse, ListClassmatesResponse, ListCoursesResponse,
    ResponseStatus, StatusResponse,
};
