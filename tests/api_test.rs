use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use orgdir::db;
use orgdir::server;
use tower::util::ServiceExt; // for `oneshot`

// Helper to build the app against an in-memory database
async fn setup_test_app() -> Router {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    server::build_router(db)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn post_json(app: &Router, uri: &str, payload: serde_json::Value) -> axum::response::Response {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&payload).unwrap()))
        .unwrap();
    app.clone().oneshot(req).await.unwrap()
}

async fn put_empty(app: &Router, uri: &str) -> axum::response::Response {
    let req = Request::builder()
        .method("PUT")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(req).await.unwrap()
}

async fn get(app: &Router, uri: &str) -> axum::response::Response {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(req).await.unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = setup_test_app().await;

    let response = get(&app, "/api/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_create_department() {
    let app = setup_test_app().await;

    let response = post_json(&app, "/api/departments", serde_json::json!({ "title": "HR" })).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["title"], "HR");
    assert!(json["manager"].is_null());
    assert_eq!(json["workers"], serde_json::json!([]));
    assert_eq!(json["freelancers"], serde_json::json!([]));
}

#[tokio::test]
async fn test_create_department_empty_title_is_bad_request() {
    let app = setup_test_app().await;

    let response = post_json(&app, "/api/departments", serde_json::json!({ "title": "" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_get_department_not_found() {
    let app = setup_test_app().await;

    let response = get(&app, "/api/departments/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_assign_manager_not_found() {
    let app = setup_test_app().await;

    let response = post_json(&app, "/api/departments", serde_json::json!({ "title": "HR" })).await;
    let dept = body_json(response).await;
    let dept_id = dept["id"].as_i64().unwrap();

    let response = put_empty(&app, &format!("/api/departments/{}/manager/999", dept_id)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_manager_assignment_flow() {
    let app = setup_test_app().await;

    let dept = body_json(
        post_json(&app, "/api/departments", serde_json::json!({ "title": "HR" })).await,
    )
    .await;
    let dept_id = dept["id"].as_i64().unwrap();

    let alice = body_json(
        post_json(&app, "/api/employees", serde_json::json!({ "name": "Alice" })).await,
    )
    .await;
    let alice_id = alice["id"].as_i64().unwrap();
    // Employee output carries no department references
    assert!(alice.get("worker_department_id").is_none());
    assert!(alice.get("managed_department_id").is_none());
    assert!(alice.get("freelance_department_ids").is_none());

    let response = put_empty(
        &app,
        &format!("/api/departments/{}/manager/{}", dept_id, alice_id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["manager"]["id"].as_i64().unwrap(), alice_id);
    assert_eq!(json["manager"]["name"], "Alice");

    // Reverse lookup by employee id
    let response = get(&app, &format!("/api/departments/manager/{}", alice_id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"].as_i64().unwrap(), dept_id);
    assert_eq!(json["title"], "HR");
}

#[tokio::test]
async fn test_worker_assignment_is_idempotent_over_http() {
    let app = setup_test_app().await;

    let dept = body_json(
        post_json(&app, "/api/departments", serde_json::json!({ "title": "HR" })).await,
    )
    .await;
    let dept_id = dept["id"].as_i64().unwrap();

    let bob = body_json(
        post_json(&app, "/api/employees", serde_json::json!({ "name": "Bob" })).await,
    )
    .await;
    let bob_id = bob["id"].as_i64().unwrap();

    let uri = format!("/api/departments/{}/worker/{}", dept_id, bob_id);

    let first = body_json(put_empty(&app, &uri).await).await;
    assert_eq!(first["workers"].as_array().unwrap().len(), 1);

    let second = body_json(put_empty(&app, &uri).await).await;
    let workers = second["workers"].as_array().unwrap();
    assert_eq!(workers.len(), 1);
    assert_eq!(workers[0]["name"], "Bob");
}

#[tokio::test]
async fn test_freelancer_assignment_flow() {
    let app = setup_test_app().await;

    let hr = body_json(
        post_json(&app, "/api/departments", serde_json::json!({ "title": "HR" })).await,
    )
    .await;
    let eng = body_json(
        post_json(
            &app,
            "/api/departments",
            serde_json::json!({ "title": "Engineering" }),
        )
        .await,
    )
    .await;
    let carol = body_json(
        post_json(&app, "/api/employees", serde_json::json!({ "name": "Carol" })).await,
    )
    .await;

    let hr_id = hr["id"].as_i64().unwrap();
    let eng_id = eng["id"].as_i64().unwrap();
    let carol_id = carol["id"].as_i64().unwrap();

    for dept_id in [hr_id, eng_id] {
        let response = put_empty(
            &app,
            &format!("/api/departments/{}/freelancers/{}", dept_id, carol_id),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    // Repeat assignment stays a set
    let json = body_json(
        put_empty(
            &app,
            &format!("/api/departments/{}/freelancers/{}", hr_id, carol_id),
        )
        .await,
    )
    .await;
    let freelancers = json["freelancers"].as_array().unwrap();
    assert_eq!(freelancers.len(), 1);
    assert_eq!(freelancers[0]["name"], "Carol");
    // Embedded employees carry no back-references
    assert!(freelancers[0].get("freelance_department_ids").is_none());
}
