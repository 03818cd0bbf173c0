//! Enrollment operation result types.

use chrono::{DateTime, Utc};
use coursemgmt_domain::{CourseId, EnrollmentId, EnrollmentStatus, StudentId};
use coursemgmt_shared::{ClassmateData, CourseClassmatesData, CourseDetailData, CourseEnrollmentData};

/// A new enrollment joined with the student's email and the course's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpResult {
    pub enrollment_id: EnrollmentId,
    pub student_id: StudentId,
    pub student_email: String,
    pub course_id: CourseId,
    pub course_name: String,
    pub status: EnrollmentStatus,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

/// One Active enrollment of a student, with the course name resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrolledCourse {
    pub course_id: CourseId,
    pub course_name: String,
    pub status: EnrollmentStatus,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classmate {
    pub student_id: StudentId,
    pub student_email: String,
}

/// A shared course and the other students actively enrolled in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseClassmates {
    pub course_id: CourseId,
    pub course_name: String,
    pub classmates: Vec<Classmate>,
}

// =============================================================================
// Conversion to Protocol Types
// =============================================================================

impl SignUpResult {
    pub fn to_protocol(&self) -> CourseEnrollmentData {
        CourseEnrollmentData {
            id: self.enrollment_id.get(),
            student_id: self.student_id.get(),
            student_email: self.student_email.clone(),
            course_id: self.course_id.get(),
            course_name: self.course_name.clone(),
            status: self.status.as_i32(),
            create_time: self.create_time,
            update_time: self.update_time,
        }
    }
}

impl EnrolledCourse {
    pub fn to_protocol(&self) -> CourseDetailData {
        CourseDetailData {
            course_id: self.course_id.get(),
            course_name: self.course_name.clone(),
            status: self.status.as_i32(),
            create_time: self.create_time,
            update_time: self.update_time,
        }
    }
}

impl CourseClassmates {
    pub fn to_protocol(&self) -> CourseClassmatesData {
        CourseClassmatesData {
            course_id: self.course_id.get(),
            course_name: self.course_name.clone(),
            class_mates: self
                .classmates
                .iter()
                .map(|c| ClassmateData {
                    student_id: c.student_id.to_string(),
                    student_email: c.student_email.clone(),
                })
                .collect(),
        }
    }
}
