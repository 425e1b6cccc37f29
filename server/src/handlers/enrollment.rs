use crate::error::ApiError;
use axum::extract::{Query, State};
use axum::Json;
use deducia::service::enrollment::EnrollOutcome;
use deducia::types::{Course, TestResult};
use deducia::ApplicationRuntime;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct EnrollRequest {
    pub student_id: i64,
    pub course_id: i64,
}

pub async fn enroll(
    State(runtime): State<Arc<ApplicationRuntime>>,
    Json(body): Json<EnrollRequest>,
) -> Result<Json<Value>, ApiError> {
    let message = match runtime.enrollment().enroll(body.student_id, body.course_id)? {
        EnrollOutcome::Enrolled => "Enrolled Successfully",
        EnrollOutcome::AlreadyEnrolled => "Already Enrolled",
    };
    Ok(Json(json!({ "success": true, "message": message })))
}

#[derive(Debug, Deserialize)]
pub struct StudentQuery {
    pub student_id: i64,
}

pub async fn my_batches(
    State(runtime): State<Arc<ApplicationRuntime>>,
    Query(query): Query<StudentQuery>,
) -> Result<Json<Vec<Course>>, ApiError> {
    Ok(Json(runtime.enrollment().my_batches(query.student_id)?))
}

pub async fn my_results(
    State(runtime): State<Arc<ApplicationRuntime>>,
    Query(query): Query<StudentQuery>,
) -> Result<Json<Vec<TestResult>>, ApiError> {
    Ok(Json(runtime.enrollment().my_results(query.student_id)?))
}
