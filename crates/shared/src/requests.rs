//! Request payloads accepted by the HTTP API.

use serde::{Deserialize, Serialize};

/// Body of `POST /signup`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSignUpRequest {
    #[serde(default)]
    pub student_id: i64,
    #[serde(default)]
    pub course_id: i64,
}

/// Body of `POST /cancel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelCourseRequest {
    #[serde(default)]
    pub student_id: i64,
    #[serde(default)]
    pub course_id: i64,
}

/// Query string of `GET /courses` and `GET /classmates`.
///
/// Kept as raw text so the handlers can tell "missing" apart from "not a number".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentQuery {
    #[serde(default)]
    pub student_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_ids_default_to_zero() {
        let req: CourseSignUpRequest =
            serde_json::from_str(r#"{"student_id": 5}"#).expect("deserialize");
        assert_eq!(req.student_id, 5);
        assert_eq!(req.course_id, 0);
    }
}
