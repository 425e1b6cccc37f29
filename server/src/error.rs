use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use deducia::error::DeduciaError;
use log::error;
use serde_json::json;

/// Wraps the domain error so each handler can bubble failures with `?`
/// and leave the HTTP mapping in one place.
pub struct ApiError(DeduciaError);

impl From<DeduciaError> for ApiError {
    fn from(err: DeduciaError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            DeduciaError::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "success": false, "message": format!("{field} is required") })),
            )
                .into_response(),

            // 401 rather than 404: the lookup doubles as the credential check.
            DeduciaError::UnknownUser(_) => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "success": false, "message": "User not found. Please sign up." })),
            )
                .into_response(),

            err => {
                error!("request failed: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": err.to_string() })),
                )
                    .into_response()
            }
        }
    }
}
