//! Enrollment operation errors.
//!
//! The `Display` text of every variant is the message returned to clients.

use coursemgmt_domain::{CourseId, StudentId};

use crate::infrastructure::ports::RepoError;

/// Errors that can occur during enrollment operations.
///
/// Business variants are expected rejections with no underlying cause.
/// `Infrastructure` wraps the store failure that stopped the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum EnrollmentError {
    #[error("student data not found")]
    StudentNotFound,
    #[error("course data not found")]
    CourseNotFound,
    #[error("student has enrolled before")]
    AlreadyEnrolled,
    /// A ledger row points at a course that no longer exists.
    #[error("course data is not found for courseID: {0}")]
    MissingCourse(CourseId),
    /// A ledger row points at a student that no longer exists.
    #[error("student data is not found for studentID: {0}")]
    MissingStudent(StudentId),
    #[error("{message}")]
    Infrastructure {
        message: String,
        #[source]
        source: RepoError,
    },
}

impl EnrollmentError {
    pub fn infrastructure(message: impl Into<String>, source: RepoError) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source,
        }
    }

    /// Rejections caused by the request itself rather than the store.
    pub fn is_business(&self) -> bool {
        !self.is_infrastructure()
    }

    pub fn is_infrastructure(&self) -> bool {
        matches!(self, Self::Infrastructure { .. })
    }

    /// The underlying store error, if any.
    pub fn repo_error(&self) -> Option<&RepoError> {
        match self {
            Self::Infrastructure { source, .. } => Some(source),
            _ => None,
        }
    }

    /// True when a cancel matched no ledger row.
    ///
    /// Clients see the generic cancel failure either way.
    pub fn is_nothing_to_cancel(&self) -> bool {
        self.repo_error()
            .is_some_and(RepoError::is_no_rows_affected)
    }
}
