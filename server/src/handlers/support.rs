use crate::error::ApiError;
use axum::extract::State;
use axum::Json;
use deducia::types::{MentorRequestDetails, NewMentorRequest, NewSupportMessage};
use deducia::ApplicationRuntime;
use serde_json::{json, Value};
use std::sync::Arc;

pub async fn mentor_request(
    State(runtime): State<Arc<ApplicationRuntime>>,
    Json(body): Json<NewMentorRequest>,
) -> Result<Json<Value>, ApiError> {
    runtime.support().request_mentor(&body)?;
    Ok(Json(json!({
        "success": true,
        "message": "Request received! A mentor will contact you at your preferred time."
    })))
}

pub async fn contact(
    State(runtime): State<Arc<ApplicationRuntime>>,
    Json(body): Json<NewSupportMessage>,
) -> Result<Json<Value>, ApiError> {
    let ticket = runtime.support().submit_contact(&body)?;
    Ok(Json(json!({
        "success": true,
        "message": format!("Message Received! Ticket #{ticket}")
    })))
}

pub async fn teacher_requests(
    State(runtime): State<Arc<ApplicationRuntime>>,
) -> Result<Json<Vec<MentorRequestDetails>>, ApiError> {
    Ok(Json(runtime.support().list_mentor_requests()?))
}
