use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use deducia::ApplicationRuntimeBuilder;
use deducia_server::routes::create_router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn test_router() -> Router {
    let runtime = ApplicationRuntimeBuilder::default()
        .use_in_memory_db()
        .build()
        .expect("Failed to create in-memory runtime");
    create_router(Arc::new(runtime))
}

async fn read_body(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn send_json(router: &Router, method: Method, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    read_body(router.clone().oneshot(request).await.unwrap()).await
}

async fn send_get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    read_body(router.clone().oneshot(request).await.unwrap()).await
}

#[tokio::test]
async fn liveness_endpoint_responds_with_plain_text() {
    let router = test_router();
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"Deducia Backend is Running!");
}

#[tokio::test]
async fn login_without_phone_is_a_bad_request() {
    let router = test_router();
    let (status, body) = send_json(&router, Method::POST, "/api/login", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn login_with_unknown_phone_is_unauthorized() {
    let router = test_router();
    let (status, body) =
        send_json(&router, Method::POST, "/api/login", json!({ "phone": "0000000" })).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn signup_creates_a_student_account_that_can_log_in() {
    let router = test_router();

    let (status, body) = send_json(
        &router,
        Method::POST,
        "/api/signup",
        json!({ "phone": "9990001", "full_name": "Asha" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["user"]["role"], json!("student"));

    let (status, body) =
        send_json(&router, Method::POST, "/api/login", json!({ "phone": "9990001" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["full_name"], json!("Asha"));
}

#[tokio::test]
async fn second_signup_for_the_same_phone_is_soft_rejected() {
    let router = test_router();
    let payload = json!({ "phone": "5551234", "full_name": "Ravi" });

    let (status, body) = send_json(&router, Method::POST, "/api/signup", payload.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));

    let (status, body) = send_json(&router, Method::POST, "/api/signup", payload).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(false));
    assert!(body["message"].as_str().unwrap().contains("log in"));
}

#[tokio::test]
async fn course_listing_honours_the_teacher_filter() {
    let router = test_router();

    for (title, teacher_id) in [("Algebra I", 1), ("Botany", 2)] {
        let (status, body) = send_json(
            &router,
            Method::POST,
            "/api/courses",
            json!({
                "title": title,
                "description": "desc",
                "thumbnail_url": "https://cdn.example.com/t.png",
                "video_url": "https://cdn.example.com/v.mp4",
                "teacher_id": teacher_id
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["id"].as_i64().unwrap() > 0);
    }

    let (status, all) = send_get(&router, "/api/courses").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 2);

    let (status, filtered) = send_get(&router, "/api/courses?teacher_id=1").await;
    assert_eq!(status, StatusCode::OK);
    let filtered = filtered.as_array().unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0]["title"], json!("Algebra I"));
}

#[tokio::test]
async fn legacy_course_endpoint_accepts_the_reduced_payload() {
    let router = test_router();

    let (status, body) = send_json(
        &router,
        Method::POST,
        "/api/add-course",
        json!({
            "title": "History",
            "description": "desc",
            "thumbnail_url": "https://cdn.example.com/t.png",
            "video_url": "https://cdn.example.com/v.mp4"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert!(body.get("id").is_none());

    let (_, all) = send_get(&router, "/api/courses").await;
    let stored = &all.as_array().unwrap()[0];
    assert_eq!(stored["notes_url"], Value::Null);
    assert_eq!(stored["teacher_id"], Value::Null);
}

#[tokio::test]
async fn deleting_an_absent_course_still_succeeds() {
    let router = test_router();
    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/api/courses/9999")
        .body(Body::empty())
        .unwrap();
    let (status, body) = read_body(router.clone().oneshot(request).await.unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
}

#[tokio::test]
async fn tests_and_questions_round_trip_over_http() {
    let router = test_router();

    let (status, body) = send_json(
        &router,
        Method::POST,
        "/api/tests",
        json!({ "title": "Algebra I", "duration_minutes": 45, "teacher_id": 3 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let test_id = body["id"].as_i64().unwrap();

    let (status, body) = send_json(
        &router,
        Method::POST,
        "/api/questions",
        json!({
            "test_id": test_id,
            "question_text": "2 + 2 = ?",
            "option_a": "3",
            "option_b": "4",
            "option_c": "5",
            "option_d": "22",
            "correct_option": "B"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));

    let (status, tests) = send_get(&router, "/api/tests").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tests.as_array().unwrap().len(), 1);

    let (status, questions) =
        send_get(&router, &format!("/api/tests/{test_id}/questions")).await;
    assert_eq!(status, StatusCode::OK);
    let questions = questions.as_array().unwrap();
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0]["question_text"], json!("2 + 2 = ?"));
}

#[tokio::test]
async fn signup_enroll_and_list_batches_end_to_end() {
    let router = test_router();

    let (_, body) = send_json(
        &router,
        Method::POST,
        "/api/signup",
        json!({ "phone": "9990001", "full_name": "Asha" }),
    )
    .await;
    let student_id = body["user"]["id"].as_i64().unwrap();

    let (_, body) = send_json(
        &router,
        Method::POST,
        "/api/courses",
        json!({
            "title": "Algebra I",
            "description": "desc",
            "thumbnail_url": "https://cdn.example.com/t.png",
            "video_url": "https://cdn.example.com/v.mp4"
        }),
    )
    .await;
    let course_id = body["id"].as_i64().unwrap();

    let enroll_payload = json!({ "student_id": student_id, "course_id": course_id });
    let (status, body) =
        send_json(&router, Method::POST, "/api/enroll", enroll_payload.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));

    let (status, batches) =
        send_get(&router, &format!("/api/my-batches?student_id={student_id}")).await;
    assert_eq!(status, StatusCode::OK);
    let batches = batches.as_array().unwrap();
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0]["id"].as_i64().unwrap(), course_id);

    let (status, body) = send_json(&router, Method::POST, "/api/enroll", enroll_payload).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Already Enrolled"));

    let (_, batches) =
        send_get(&router, &format!("/api/my-batches?student_id={student_id}")).await;
    assert_eq!(batches.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn results_listing_is_empty_for_a_student_with_no_attempts() {
    let router = test_router();
    let (status, results) = send_get(&router, "/api/my-results?student_id=42").await;

    assert_eq!(status, StatusCode::OK);
    assert!(results.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn contact_messages_are_acknowledged_with_a_ticket_number() {
    let router = test_router();

    let (status, body) = send_json(
        &router,
        Method::POST,
        "/api/contact",
        json!({
            "name": "Asha",
            "phone": "9990001",
            "message": "The video for lesson 3 does not load"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Message Received! Ticket #1"));
}

#[tokio::test]
async fn mentor_requests_surface_on_the_teacher_dashboard() {
    let router = test_router();

    let (_, body) = send_json(
        &router,
        Method::POST,
        "/api/signup",
        json!({ "phone": "9990001", "full_name": "Asha" }),
    )
    .await;
    let student_id = body["user"]["id"].as_i64().unwrap();

    let (status, body) = send_json(
        &router,
        Method::POST,
        "/api/mentor-request",
        json!({
            "student_id": student_id,
            "subject": "Maths",
            "issue": "Stuck on factorisation",
            "preferred_time": "Evenings"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));

    let (status, requests) = send_get(&router, "/api/teacher/requests").await;
    assert_eq!(status, StatusCode::OK);
    let requests = requests.as_array().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["subject"], json!("Maths"));
    assert_eq!(requests[0]["full_name"], json!("Asha"));
    assert_eq!(requests[0]["phone"], json!("9990001"));
}
