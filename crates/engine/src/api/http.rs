//! HTTP routes.
//!
//! Business rejections are answered with 200 and a failure-tagged body.
//! Infrastructure failures and timeouts are answered with 500; their cause
//! is logged and never returned to the client.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use coursemgmt_domain::{CourseId, StudentId};
use coursemgmt_shared::{
    CancelCourseRequest, CancelCourseResponse, CourseSignUpRequest, CourseSignUpResponse,
    ListClassmatesResponse, ListCoursesResponse, StatusResponse, StudentQuery,
};

use crate::app::App;
use crate::use_cases::enrollment::EnrollmentError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/health", get(health))
        .route("/signup", post(sign_up))
        .route("/courses", get(list_courses))
        .route("/cancel", post(cancel_course))
        .route("/classmates", get(list_classmates))
}

async fn health() -> &'static str {
    "OK"
}

async fn sign_up(
    State(app): State<Arc<App>>,
    payload: Result<Json<CourseSignUpRequest>, JsonRejection>,
) -> Result<Json<CourseSignUpResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| {
        tracing::debug!(error = %e, "Rejected sign-up payload");
        ApiError::BadRequest("Invalid request payload".to_string())
    })?;
    if request.student_id == 0 || request.course_id == 0 {
        return Err(ApiError::BadRequest("Request Data is empty".to_string()));
    }

    let outcome = run_use_case(
        app.request_timeout,
        "course_sign_up",
        app.use_cases.enrollment.sign_up.execute(
            StudentId::new(request.student_id),
            CourseId::new(request.course_id),
        ),
    )
    .await?;

    Ok(Json(match outcome {
        Ok(result) => CourseSignUpResponse::success(result.to_protocol()),
        Err(message) => CourseSignUpResponse::failure(message),
    }))
}

async fn list_courses(
    State(app): State<Arc<App>>,
    query: Result<Query<StudentQuery>, QueryRejection>,
) -> Result<Json<ListCoursesResponse>, ApiError> {
    let raw = query.ok().and_then(|Query(q)| q.student_id);
    let student_id = raw
        .as_deref()
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or_else(|| ApiError::BadRequest("Invalid student ID".to_string()))?;
    if student_id == 0 {
        return Err(ApiError::BadRequest("Student ID Zero".to_string()));
    }

    let outcome = run_use_case(
        app.request_timeout,
        "list_courses",
        app.use_cases
            .enrollment
            .list_courses
            .execute(StudentId::new(student_id)),
    )
    .await?;

    Ok(Json(match outcome {
        Ok(courses) => {
            ListCoursesResponse::success(courses.iter().map(|c| c.to_protocol()).collect())
        }
        Err(message) => ListCoursesResponse::failure(message),
    }))
}

async fn cancel_course(
    State(app): State<Arc<App>>,
    payload: Result<Json<CancelCourseRequest>, JsonRejection>,
) -> Result<Json<CancelCourseResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| {
        tracing::debug!(error = %e, "Rejected cancel payload");
        ApiError::BadRequest("Invalid request payload".to_string())
    })?;
    if request.student_id == 0 || request.course_id == 0 {
        return Err(ApiError::BadRequest(
            "Invalid request payload (empty)".to_string(),
        ));
    }

    let outcome = run_use_case(
        app.request_timeout,
        "cancel_course",
        app.use_cases.enrollment.cancel.execute(
            StudentId::new(request.student_id),
            CourseId::new(request.course_id),
        ),
    )
    .await?;

    Ok(Json(match outcome {
        Ok(()) => CancelCourseResponse::success(),
        Err(message) => CancelCourseResponse::failure(message),
    }))
}

async fn list_classmates(
    State(app): State<Arc<App>>,
    query: Result<Query<StudentQuery>, QueryRejection>,
) -> Result<Json<ListClassmatesResponse>, ApiError> {
    let raw = query
        .ok()
        .and_then(|Query(q)| q.student_id)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::BadRequest("student_id is required".to_string()))?;
    let student_id: i64 = raw
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid student_id".to_string()))?;
    if student_id == 0 {
        return Err(ApiError::BadRequest(
            "Invalid request payload (empty)".to_string(),
        ));
    }

    let outcome = run_use_case(
        app.request_timeout,
        "list_classmates",
        app.use_cases
            .enrollment
            .list_classmates
            .execute(StudentId::new(student_id)),
    )
    .await?;

    Ok(Json(match outcome {
        Ok(courses) => {
            ListClassmatesResponse::success(courses.iter().map(|c| c.to_protocol()).collect())
        }
        Err(message) => ListClassmatesResponse::failure(message),
    }))
}

/// Run a use case under the request timeout.
///
/// Business rejections come back as `Ok(Err(message))`; infrastructure
/// failures and expiry become an `ApiError`. Expiry drops the in-flight
/// future along with any store call it was awaiting.
async fn run_use_case<T, F>(
    timeout: Duration,
    operation: &'static str,
    future: F,
) -> Result<Result<T, String>, ApiError>
where
    F: Future<Output = Result<T, EnrollmentError>>,
{
    match tokio::time::timeout(timeout, future).await {
        Err(_) => {
            tracing::error!(
                operation,
                timeout_ms = timeout.as_millis() as u64,
                "Request timed out"
            );
            Err(ApiError::Internal("request timed out".to_string()))
        }
        Ok(Ok(value)) => Ok(Ok(value)),
        Ok(Err(e)) if e.is_business() => Ok(Err(e.to_string())),
        Ok(Err(e)) => {
            tracing::error!(
                operation,
                error = %e,
                cause = ?e.repo_error(),
                "Request failed"
            );
            Err(ApiError::Internal(e.to_string()))
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(StatusResponse::failure(msg))).into_response()
            }
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(StatusResponse::failure(msg)),
            )
                .into_response(),
        }
    }
}
