use crate::error::ApiError;
use axum::extract::{Path, Query, State};
use axum::Json;
use deducia::types::{Course, NewCourse};
use deducia::ApplicationRuntime;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct CourseFilter {
    pub teacher_id: Option<i64>,
}

pub async fn list_courses(
    State(runtime): State<Arc<ApplicationRuntime>>,
    Query(filter): Query<CourseFilter>,
) -> Result<Json<Vec<Course>>, ApiError> {
    Ok(Json(runtime.catalog().list_courses(filter.teacher_id)?))
}

pub async fn create_course(
    State(runtime): State<Arc<ApplicationRuntime>>,
    Json(body): Json<NewCourse>,
) -> Result<Json<Value>, ApiError> {
    let id = runtime.catalog().create_course(&body)?;
    Ok(Json(json!({
        "success": true,
        "message": "Course added successfully!",
        "id": id
    })))
}

/// Older dashboard builds post here without authorship or notes fields;
/// the missing values are stored as NULL.
pub async fn add_course(
    State(runtime): State<Arc<ApplicationRuntime>>,
    Json(body): Json<NewCourse>,
) -> Result<Json<Value>, ApiError> {
    runtime.catalog().create_course(&body)?;
    Ok(Json(json!({
        "success": true,
        "message": "Course added successfully!"
    })))
}

pub async fn delete_course(
    State(runtime): State<Arc<ApplicationRuntime>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    runtime.catalog().delete_course(id)?;
    Ok(Json(json!({
        "success": true,
        "message": "Course deleted successfully!"
    })))
}
