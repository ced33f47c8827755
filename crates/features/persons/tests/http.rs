use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use roster_database::Database;
use roster_kernel::prelude::*;
use roster_persons::SCHEMA;
use serde_json::{Value, json};
use tower::ServiceExt;
use utoipa_axum::router::OpenApiRouter;

const ABSENT_ID: &str = "000000000000000000000000";

async fn app() -> Router {
    let db = Database::builder()
        .url("mem://")
        .session("persons_http", "core")
        .schema(SCHEMA)
        .init()
        .await
        .expect("connect to mem://");

    let slice = roster_persons::init(&db).expect("init persons slice");

    let state = ApiState::builder()
        .config(ApiConfig::default())
        .db(db)
        .register_slice(slice)
        .build()
        .expect("build state");

    let (router, _api) = OpenApiRouter::new()
        .merge(roster_persons::persons_router())
        .with_state(state)
        .split_for_parts();

    router
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).expect("request")
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder().method("DELETE").uri(uri).body(Body::empty()).expect("request")
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Option<Value>) {
    let response = app.clone().oneshot(request).await.expect("send request");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("read body");
    let body =
        if bytes.is_empty() { None } else { Some(serde_json::from_slice(&bytes).expect("json")) };
    (status, body)
}

#[tokio::test]
async fn create_returns_created_person() {
    let app = app().await;

    let (status, body) = send(
        &app,
        json_request("POST", "/persons", &json!({"name": "Lucía", "age": 30, "city": "Lima"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let body = body.expect("body");
    assert_eq!(body["name"], "Lucía");
    assert_eq!(body["age"], 30);
    assert_eq!(body["city"], "Lima");
    assert_eq!(body["id"].as_str().expect("id").len(), 24);
}

#[tokio::test]
async fn create_with_invalid_payload_returns_400() {
    let app = app().await;

    let (status, body) = send(
        &app,
        json_request("POST", "/persons", &json!({"name": "", "age": -5, "city": " "})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body.expect("body")["message"],
        "name is required, age must be non-negative, city is required"
    );
}

#[tokio::test]
async fn create_rejects_unknown_fields() {
    let app = app().await;

    let payload = json!({"name": "Ana", "age": 25, "city": "Cusco", "nickname": "Anita"});
    let (status, _) = send(&app, json_request("POST", "/persons", &payload)).await;

    assert!(status.is_client_error());
}

#[tokio::test]
async fn list_returns_all_persons() {
    let app = app().await;

    let ana = json!({"name": "Ana", "age": 25, "city": "Cusco"});
    let marco = json!({"name": "Marco", "age": 41, "city": "Lima"});
    send(&app, json_request("POST", "/persons", &ana)).await;
    send(&app, json_request("POST", "/persons", &marco)).await;

    let (status, body) = send(&app, get("/persons")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.expect("body").as_array().expect("array").len(), 2);
}

#[tokio::test]
async fn get_absent_person_returns_404() {
    let app = app().await;

    let (status, body) = send(&app, get(&format!("/persons/{ABSENT_ID}"))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_none());
}

#[tokio::test]
async fn malformed_id_returns_400() {
    let app = app().await;

    let (status, body) = send(&app, get("/persons/not-a-valid-id")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body.expect("body")["message"].as_str().expect("message").to_owned();
    assert!(message.contains("identifier"), "unexpected message: {message}");

    let (status, _) = send(&app, delete("/persons/not-a-valid-id")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_replaces_person_fields() {
    let app = app().await;

    let (_, created) = send(
        &app,
        json_request("POST", "/persons", &json!({"name": "Ana", "age": 25, "city": "Cusco"})),
    )
    .await;
    let id = created.expect("body")["id"].as_str().expect("id").to_owned();

    let (status, updated) = send(
        &app,
        json_request(
            "PUT",
            &format!("/persons/{id}"),
            &json!({"name": "Ana María", "age": 26, "city": "Arequipa"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let updated = updated.expect("body");
    assert_eq!(updated["id"], id.as_str());
    assert_eq!(updated["city"], "Arequipa");

    let (_, found) = send(&app, get(&format!("/persons/{id}"))).await;
    assert_eq!(found.expect("body")["name"], "Ana María");
}

#[tokio::test]
async fn update_absent_person_returns_404() {
    let app = app().await;

    let (status, _) = send(
        &app,
        json_request(
            "PUT",
            &format!("/persons/{ABSENT_ID}"),
            &json!({"name": "Ana", "age": 25, "city": "Cusco"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_returns_204_then_404() {
    let app = app().await;

    let (_, created) = send(
        &app,
        json_request("POST", "/persons", &json!({"name": "Ana", "age": 25, "city": "Cusco"})),
    )
    .await;
    let id = created.expect("body")["id"].as_str().expect("id").to_owned();

    let (status, body) = send(&app, delete(&format!("/persons/{id}"))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_none());

    let (status, _) = send(&app, get(&format!("/persons/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, delete(&format!("/persons/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn search_filters_by_exact_city() {
    let app = app().await;

    for payload in [
        json!({"name": "Lucía", "age": 30, "city": "Lima"}),
        json!({"name": "Marco", "age": 41, "city": "Lima"}),
        json!({"name": "Ana", "age": 25, "city": "Cusco"}),
    ] {
        send(&app, json_request("POST", "/persons", &payload)).await;
    }

    let (status, body) = send(&app, get("/persons/search?city=Lima")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.expect("body").as_array().expect("array").len(), 2);

    let (status, body) = send(&app, get("/persons/search?city=Iquitos")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.expect("body").as_array().expect("array").len(), 0);
}
