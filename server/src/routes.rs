use crate::handlers;
use axum::routing::{delete, get, post};
use axum::Router;
use deducia::ApplicationRuntime;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Builds the application router. Every endpoint dispatches to exactly one
/// handler; the dashboard clients are served cross-origin.
pub fn create_router(runtime: Arc<ApplicationRuntime>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(liveness))
        .route("/api/login", post(handlers::identity::login))
        .route("/api/signup", post(handlers::identity::signup))
        .route(
            "/api/courses",
            get(handlers::catalog::list_courses).post(handlers::catalog::create_course),
        )
        .route("/api/add-course", post(handlers::catalog::add_course))
        .route("/api/courses/{id}", delete(handlers::catalog::delete_course))
        .route(
            "/api/tests",
            get(handlers::assessment::list_tests).post(handlers::assessment::create_test),
        )
        .route("/api/questions", post(handlers::assessment::add_question))
        .route(
            "/api/tests/{id}/questions",
            get(handlers::assessment::list_questions),
        )
        .route("/api/my-batches", get(handlers::enrollment::my_batches))
        .route("/api/my-results", get(handlers::enrollment::my_results))
        .route("/api/enroll", post(handlers::enrollment::enroll))
        .route("/api/mentor-request", post(handlers::support::mentor_request))
        .route("/api/contact", post(handlers::support::contact))
        .route(
            "/api/teacher/requests",
            get(handlers::support::teacher_requests),
        )
        .layer(cors)
        .with_state(runtime)
}

async fn liveness() -> &'static str {
    "Deducia Backend is Running!"
}
