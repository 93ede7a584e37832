use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use ihub::domain::config::ApiConfig;
use ihub_server::Server;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    Server::builder().config(ApiConfig::default()).build().expect("server builds").app()
}

async fn call(app: &Router, request: Request<Body>) -> (StatusCode, header::HeaderMap, Vec<u8>) {
    let response = app.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    (status, headers, bytes.to_vec())
}

async fn json_call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    let (status, _, bytes) = call(app, request).await;
    (status, serde_json::from_slice(&bytes).expect("json body"))
}

#[tokio::test]
async fn health_is_served() {
    let (status, body) = json_call(&app(), Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "backend-api");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn delete_list_create_scenario() {
    let app = app();

    let (status, body) = json_call(&app, Method::DELETE, "/api/items/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "message": "Item deleted" }));

    let (status, body) = json_call(&app, Method::GET, "/api/items", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    assert_eq!(body["data"][0]["id"], 1);
    assert_eq!(body["data"][1]["id"], 3);

    let (status, body) = json_call(&app, Method::POST, "/api/items", Some(json!({}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"], json!({ "id": 3, "name": "New Item", "type": "Unknown" }));
}

#[tokio::test]
async fn health_is_unaffected_by_collection_state() {
    let app = app();
    for id in 1..=3 {
        json_call(&app, Method::DELETE, &format!("/api/items/{id}"), None).await;
    }

    let (_, listing) = json_call(&app, Method::GET, "/api/items", None).await;
    assert_eq!(listing, json!({ "success": true, "count": 0, "data": [] }));

    let (status, body) = json_call(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let request = Request::builder()
        .uri("/api/items")
        .header(header::ORIGIN, "https://example.com")
        .body(Body::empty())
        .expect("request");

    let (status, headers, _) = call(&app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn cors_preflight_is_answered() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/items/1")
        .header(header::ORIGIN, "https://example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
        .body(Body::empty())
        .expect("request");

    let (status, headers, _) = call(&app(), request).await;
    assert!(status.is_success());
    assert!(headers.contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
}

#[tokio::test]
async fn openapi_document_lists_item_routes() {
    let (status, doc) = json_call(&app(), Method::GET, "/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/health"]["get"].is_object());
    assert!(doc["paths"]["/api/items"]["get"].is_object());
    assert!(doc["paths"]["/api/items"]["post"].is_object());
    assert!(doc["paths"]["/api/items/{id}"]["get"].is_object());
    assert!(doc["paths"]["/api/items/{id}"]["delete"].is_object());
}

#[tokio::test]
async fn docs_ui_is_served() {
    let request = Request::builder().uri("/docs").body(Body::empty()).expect("request");
    let (status, _, body) = call(&app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body.is_empty());
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let request = Request::builder().uri("/api/unknown").body(Body::empty()).expect("request");
    let (status, _, _) = call(&app(), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[test]
fn port_override_reaches_state() {
    let server = Server::builder().port(8123).build().expect("server builds");
    assert_eq!(server.state().config.server.port, 8123);
}
