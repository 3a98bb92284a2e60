//! Wire contract of the HTTP boundary: routes, status codes, camelCase
//! payloads and the `{"message": …}` error shape.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use propdesk::{RelationalStore, build_router, state::AppState};
use serde_json::{Value, json};
use tower::ServiceExt;

fn test_app() -> Router {
    build_router(AppState::new(Arc::new(RelationalStore::new())))
}

async fn request_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .oneshot(request)
        .await
        .expect("router should serve request");

    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();

    if body.is_empty() {
        return (status, Value::Null);
    }

    let value = serde_json::from_slice(&body).expect("body should be valid json");
    (status, value)
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

fn put(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

fn assert_message(problem: &Value) {
    assert!(
        problem.get("message").and_then(Value::as_str).is_some(),
        "error body must carry a message: {problem}"
    );
}

async fn create_agent(app: &Router, email: &str) -> Value {
    let (status, created) = request_json(
        app.clone(),
        post(
            "/agents",
            json!({
                "firstName": "Jane",
                "lastName": "Doe",
                "email": email
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    created
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = request_json(test_app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.get("status").and_then(Value::as_str), Some("ok"));
}

#[tokio::test]
async fn agent_lifecycle_matches_wire_contract() {
    let app = test_app();

    let created = create_agent(&app, "jane@example.com").await;
    assert_eq!(
        created.get("firstName").and_then(Value::as_str),
        Some("Jane")
    );
    assert_eq!(created.get("lastName").and_then(Value::as_str), Some("Doe"));
    assert!(created.get("id").and_then(Value::as_str).is_some());
    assert!(created.get("createdAt").and_then(Value::as_str).is_some());
    assert!(created.get("updatedAt").and_then(Value::as_str).is_some());
    // Optional field left out entirely when unset.
    assert!(created.get("mobileNumber").is_none());

    let id = created.get("id").and_then(Value::as_str).unwrap().to_string();

    let (status, problem) = request_json(
        app.clone(),
        post(
            "/agents",
            json!({
                "firstName": "Jane",
                "lastName": "Dupe",
                "email": "jane@example.com"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_message(&problem);

    let (status, problem) = request_json(
        app.clone(),
        post(
            "/agents",
            json!({
                "firstName": "Bad",
                "lastName": "Mail",
                "email": "not-an-email"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_message(&problem);

    let (status, problem) = request_json(
        app.clone(),
        post("/agents", json!({ "firstName": "No", "email": "no@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_message(&problem);

    let (status, problem) = request_json(app.clone(), get("/agents/not-a-uuid")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_message(&problem);

    let (status, problem) = request_json(
        app.clone(),
        get("/agents/00000000-0000-0000-0000-000000000000"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_message(&problem);

    let (status, patched) = request_json(
        app.clone(),
        put(&format!("/agents/{id}"), json!({ "mobileNumber": "555-0123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        patched.get("firstName").and_then(Value::as_str),
        Some("Jane")
    );
    assert_eq!(
        patched.get("mobileNumber").and_then(Value::as_str),
        Some("555-0123")
    );

    let (status, body) = request_json(app.clone(), delete(&format!("/agents/{id}"))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, problem) = request_json(app.clone(), get(&format!("/agents/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_message(&problem);

    let (status, problem) = request_json(app, delete(&format!("/agents/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_message(&problem);
}

#[tokio::test]
async fn property_creation_supports_email_fallback_and_title_uniqueness() {
    let app = test_app();
    create_agent(&app, "owner@example.com").await;

    let (status, created) = request_json(
        app.clone(),
        post(
            "/properties",
            json!({ "email": "owner@example.com", "title": "  Oak House  " }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        created.get("title").and_then(Value::as_str),
        Some("Oak House")
    );
    assert!(created.get("agentId").and_then(Value::as_str).is_some());

    let (status, problem) = request_json(
        app.clone(),
        post(
            "/properties",
            json!({ "email": "owner@example.com", "title": "oak house" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_message(&problem);

    let (status, problem) = request_json(
        app,
        post(
            "/properties",
            json!({
                "agentId": "11111111-1111-1111-1111-111111111111",
                "title": "Dangling Den"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_message(&problem);
}

#[tokio::test]
async fn families_and_tenants_require_existing_parents() {
    let app = test_app();
    create_agent(&app, "chain@example.com").await;

    let (status, property) = request_json(
        app.clone(),
        post(
            "/properties",
            json!({ "email": "chain@example.com", "title": "Chain House" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let property_id = property.get("id").and_then(Value::as_str).unwrap();

    let (status, problem) = request_json(
        app.clone(),
        post(
            "/families",
            json!({
                "propertyId": "22222222-2222-2222-2222-222222222222",
                "lastName": "Nowhere"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_message(&problem);

    let (status, family) = request_json(
        app.clone(),
        post(
            "/families",
            json!({ "propertyId": property_id, "lastName": "Rivera" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let family_id = family.get("id").and_then(Value::as_str).unwrap();

    let (status, tenant) = request_json(
        app.clone(),
        post(
            "/tenants",
            json!({
                "familyId": family_id,
                "firstName": "Ana",
                "middleName": "Lu",
                "lastName": "Rivera"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        tenant.get("familyId").and_then(Value::as_str),
        Some(family_id)
    );

    let (status, problem) = request_json(
        app,
        post(
            "/tenants",
            json!({
                "firstName": "Lost",
                "middleName": "No",
                "lastName": "Family"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_message(&problem);
}

#[tokio::test]
async fn notes_resolve_natural_keys() {
    let app = test_app();
    create_agent(&app, "writer@example.com").await;
    let (status, _) = request_json(
        app.clone(),
        post(
            "/properties",
            json!({ "email": "writer@example.com", "title": "Cedar Court" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, note) = request_json(
        app.clone(),
        post(
            "/notes",
            json!({
                "email": "writer@example.com",
                "propertyName": "cedar court",
                "description": "gutters need cleaning"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(note.get("agentId").and_then(Value::as_str).is_some());
    assert!(note.get("propertyId").and_then(Value::as_str).is_some());

    let (status, problem) = request_json(
        app.clone(),
        post(
            "/notes",
            json!({
                "email": "writer@example.com",
                "propertyName": "cedar court"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_message(&problem);

    let (status, listed) = request_json(
        app,
        get("/notes?email=writer@example.com"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn reminders_start_open_and_filter_by_agent() {
    let app = test_app();
    create_agent(&app, "kim@example.com").await;
    create_agent(&app, "other@example.com").await;
    let (status, _) = request_json(
        app.clone(),
        post(
            "/properties",
            json!({ "email": "kim@example.com", "title": "Birch Lodge" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, reminder) = request_json(
        app.clone(),
        post(
            "/reminders",
            json!({
                "email": "kim@example.com",
                "propertyName": "Birch Lodge",
                "title": "boiler inspection",
                "eventDate": "2026-09-01T09:00:00Z"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        reminder.get("isCompleted").and_then(Value::as_bool),
        Some(false)
    );
    let reminder_id = reminder.get("id").and_then(Value::as_str).unwrap();

    let (status, done) = request_json(
        app.clone(),
        put(
            &format!("/reminders/{reminder_id}"),
            json!({ "isCompleted": true }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(done.get("isCompleted").and_then(Value::as_bool), Some(true));
    assert_eq!(
        done.get("title").and_then(Value::as_str),
        Some("boiler inspection")
    );

    let (status, mine) = request_json(
        app.clone(),
        get("/reminders?email=kim@example.com"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(mine.as_array().map(Vec::len), Some(1));

    let (status, theirs) = request_json(
        app.clone(),
        get("/reminders?email=other@example.com"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(theirs.as_array().map(Vec::len), Some(0));

    let (status, problem) = request_json(
        app,
        get("/reminders?email=ghost@example.com"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_message(&problem);
}
