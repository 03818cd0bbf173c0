//! Response envelopes returned by the HTTP API.
//!
//! Every response carries a `status` tag and, on failure, a human-readable
//! `message`. Payload fields are omitted when absent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Status
// =============================================================================

/// Outcome tag shared by every response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    Success,
    Failure,
}

/// Body used when there is no payload, and for transport-level rejections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: ResponseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StatusResponse {
    pub fn success() -> Self {
        Self {
            status: ResponseStatus::Success,
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Failure,
            message: Some(message.into()),
        }
    }
}

// =============================================================================
// Sign-up
// =============================================================================

/// Denormalized view of a freshly created enrollment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseEnrollmentData {
    pub id: i64,
    pub student_id: i64,
    pub student_email: String,
    pub course_id: i64,
    pub course_name: String,
    pub status: i32,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSignUpResponse {
    pub status: ResponseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrollment_data: Option<CourseEnrollmentData>,
}

impl CourseSignUpResponse {
    pub fn success(data: CourseEnrollmentData) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: None,
            enrollment_data: Some(data),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Failure,
            message: Some(message.into()),
            enrollment_data: None,
        }
    }
}

// =============================================================================
// Course listing
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDetailData {
    pub course_id: i64,
    pub course_name: String,
    pub status: i32,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCoursesResponse {
    pub status: ResponseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courses: Option<Vec<CourseDetailData>>,
}

impl ListCoursesResponse {
    pub fn success(courses: Vec<CourseDetailData>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: None,
            courses: Some(courses),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Failure,
            message: Some(message.into()),
            courses: None,
        }
    }
}

// =============================================================================
// Cancellation
// =============================================================================

pub type CancelCourseResponse = StatusResponse;

// =============================================================================
// Classmates
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassmateData {
    pub student_id: String,
    pub student_email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseClassmatesData {
    pub course_id: i64,
    pub course_name: String,
    pub class_mates: Vec<ClassmateData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListClassmatesResponse {
    pub status: ResponseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub courses: Vec<CourseClassmatesData>,
}

impl ListClassmatesResponse {
    pub fn success(courses: Vec<CourseClassmatesData>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: None,
            courses,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Failure,
            message: Some(message.into()),
            courses: Vec::new(),
        }
    }
}
