use crate::error::ApiError;
use axum::extract::State;
use axum::Json;
use deducia::service::identity::SignupOutcome;
use deducia::ApplicationRuntime;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct LoginRequest {
    pub phone: String,
}

pub async fn login(
    State(runtime): State<Arc<ApplicationRuntime>>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<Value>, ApiError> {
    let user = runtime.identity().login(&body.phone)?;
    Ok(Json(json!({ "success": true, "user": user })))
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct SignupRequest {
    pub phone: String,
    pub full_name: String,
}

pub async fn signup(
    State(runtime): State<Arc<ApplicationRuntime>>,
    Json(body): Json<SignupRequest>,
) -> Result<Json<Value>, ApiError> {
    match runtime.identity().signup(&body.phone, &body.full_name)? {
        SignupOutcome::Created(user) => Ok(Json(json!({ "success": true, "user": user }))),
        SignupOutcome::AlreadyRegistered => Ok(Json(json!({
            "success": false,
            "message": "User already exists. Please log in."
        }))),
    }
}
