//! Enrollment entity - The ledger row linking a student to a course
//!
//! Enrollments are created Active by a sign-up and may later be Cancelled.
//! Rows are never deleted and the transition is one-way.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{CourseId, DomainError, EnrollmentId, StudentId};

/// Lifecycle status of an enrollment, stored as its integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum EnrollmentStatus {
    Active = 1,
    Cancelled = 2,
}

impl EnrollmentStatus {
    pub const ALL: [EnrollmentStatus; 2] = [Self::Active, Self::Cancelled];

    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Whether a row currently in `self` may be moved to `next`.
    ///
    /// Re-applying the current status is allowed so that repeated cancels
    /// stay idempotent; Cancelled never goes back to Active.
    pub fn can_transition_to(self, next: EnrollmentStatus) -> bool {
        match (self, next) {
            (current, next) if current == next => true,
            (Self::Active, Self::Cancelled) => true,
            _ => false,
        }
    }

    /// Statuses from which a row may be moved to `next`.
    pub fn allowed_sources(next: EnrollmentStatus) -> Vec<EnrollmentStatus> {
        Self::ALL
            .into_iter()
            .filter(|status| status.can_transition_to(next))
            .collect()
    }
}

impl TryFrom<i64> for EnrollmentStatus {
    type Error = DomainError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Active),
            2 => Ok(Self::Cancelled),
            other => Err(DomainError::InvalidStatus(other)),
        }
    }
}

impl From<EnrollmentStatus> for i64 {
    fn from(status: EnrollmentStatus) -> Self {
        status as i64
    }
}

impl fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// An enrollment that has not been persisted yet (no store-assigned id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEnrollment {
    pub student_id: StudentId,
    pub course_id: CourseId,
    pub status: EnrollmentStatus,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

impl NewEnrollment {
    pub fn new(
        student_id: StudentId,
        course_id: CourseId,
        status: EnrollmentStatus,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            student_id,
            course_id,
            status,
            create_time: now,
            update_time: now,
        }
    }

    /// Attach the identifier the store assigned on insert.
    pub fn with_id(self, id: EnrollmentId) -> Enrollment {
        Enrollment {
            id,
            student_id: self.student_id,
            course_id: self.course_id,
            status: self.status,
            create_time: self.create_time,
            update_time: self.update_time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub student_id: StudentId,
    pub course_id: CourseId,
    pub status: EnrollmentStatus,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

impl Enrollment {
    pub fn is_active(&self) -> bool {
        self.status == EnrollmentStatus::Active
    }
}
