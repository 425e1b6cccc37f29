use crate::error::ApiError;
use axum::extract::{Path, State};
use axum::Json;
use deducia::types::{NewQuestion, NewTest, Question, Test};
use deducia::ApplicationRuntime;
use serde_json::{json, Value};
use std::sync::Arc;

pub async fn create_test(
    State(runtime): State<Arc<ApplicationRuntime>>,
    Json(body): Json<NewTest>,
) -> Result<Json<Value>, ApiError> {
    let id = runtime.assessment().create_test(&body)?;
    Ok(Json(json!({ "success": true, "id": id })))
}

pub async fn list_tests(
    State(runtime): State<Arc<ApplicationRuntime>>,
) -> Result<Json<Vec<Test>>, ApiError> {
    Ok(Json(runtime.assessment().list_tests()?))
}

pub async fn add_question(
    State(runtime): State<Arc<ApplicationRuntime>>,
    Json(body): Json<NewQuestion>,
) -> Result<Json<Value>, ApiError> {
    runtime.assessment().add_question(&body)?;
    Ok(Json(json!({ "success": true })))
}

/// Question set served when a student starts a test. The payload includes
/// `correct_option`; grading happens client-side in the current dashboards.
pub async fn list_questions(
    State(runtime): State<Arc<ApplicationRuntime>>,
    Path(test_id): Path<i64>,
) -> Result<Json<Vec<Question>>, ApiError> {
    Ok(Json(runtime.assessment().questions_for_test(test_id)?))
}
