//! The front door forwarding to a real gateway on a local socket.

mod common;

use api_lib::web::{front_door_router, state::ProxyState, static_files::Frontend};
use axum::{
    body::Body,
    http::{header, Request},
    routing::{any, get},
    Router,
};
use common::{bundle_dir, gateway, post_json, spawn, INDEX_HTML};
use hr_portal_core::fixtures;
use reqwest::{StatusCode, Url};
use serde_json::{json, Value};

fn front_door(backend: Url, frontend: &Frontend) -> Router {
    front_door_router(ProxyState::new(backend).unwrap(), frontend)
}

async fn front_door_to_gateway() -> Router {
    let addr = spawn(gateway(vec![])).await;
    let backend = Url::parse(&format!("http://{addr}")).unwrap();
    front_door(backend, &Frontend::discover(vec![]))
}

#[tokio::test]
async fn api_reads_are_relayed_with_status_and_content_type() {
    let res = common::get(front_door_to_gateway().await, "/api/documents/2").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.content_type.as_deref(), Some("application/json"));
    assert_eq!(
        res.json(),
        serde_json::to_value(&fixtures::documents()[1]).unwrap()
    );

    let res = common::get(front_door_to_gateway().await, "/api/employees/404").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.json(), json!({ "error": "Employee not found" }));
}

#[tokio::test]
async fn post_bodies_are_forwarded() {
    let res = post_json(
        front_door_to_gateway().await,
        "/api/auth/login",
        json!({ "email": "a@b.com", "password": "x" }),
    )
    .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["user"]["email"], "a@b.com");
}

/// Echoes back what the backend received.
async fn echo(request: Request<Body>) -> axum::Json<Value> {
    let method = request.method().to_string();
    let uri = request.uri().to_string();
    let auth = request
        .headers()
        .get("authorization")
        .map(|v| v.to_str().unwrap_or_default().to_string());
    let host = request
        .headers()
        .get("host")
        .map(|v| v.to_str().unwrap_or_default().to_string());
    axum::Json(json!({ "method": method, "uri": uri, "authorization": auth, "host": host }))
}

#[tokio::test]
async fn method_path_query_and_headers_reach_the_backend() {
    let addr = spawn(Router::new().route("/api/{*rest}", any(echo))).await;
    let backend = Url::parse(&format!("http://{addr}")).unwrap();
    let app = front_door(backend, &Frontend::discover(vec![]));

    let request = Request::delete("/api/documents/3?force=true")
        .header("authorization", "Bearer mock-jwt-token")
        .header("host", "portal.example")
        .body(Body::empty())
        .unwrap();
    let res = common::call(app, request).await;
    assert_eq!(res.status, StatusCode::OK);
    let seen = res.json();
    assert_eq!(seen["method"], "DELETE");
    assert_eq!(seen["uri"], "/api/documents/3?force=true");
    assert_eq!(seen["authorization"], "Bearer mock-jwt-token");
    assert_eq!(seen["host"], addr.to_string());
}

#[tokio::test]
async fn backend_redirects_are_relayed_not_followed() {
    let backend = Router::new()
        .route(
            "/api/old",
            get(|| async { (StatusCode::FOUND, [(header::LOCATION, "/api/target")]) }),
        )
        .route("/api/target", get(|| async { "followed" }));
    let addr = spawn(backend).await;
    let backend = Url::parse(&format!("http://{addr}")).unwrap();

    let res = common::get(front_door(backend, &Frontend::discover(vec![])), "/api/old").await;
    assert_eq!(res.status, StatusCode::FOUND);
    assert_ne!(res.text(), "followed");
}

#[tokio::test]
async fn unreachable_backend_is_a_502() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let backend = Url::parse(&format!("http://{addr}")).unwrap();

    let res = common::get(front_door(backend, &Frontend::discover(vec![])), "/api/health").await;
    assert_eq!(res.status, StatusCode::BAD_GATEWAY);
    assert_eq!(res.json(), json!({ "error": "Backend unavailable" }));
}

#[tokio::test]
async fn other_paths_serve_the_bundle() {
    let addr = spawn(gateway(vec![])).await;
    let backend = Url::parse(&format!("http://{addr}")).unwrap();
    let bundle = bundle_dir();
    let frontend = Frontend::discover(vec![bundle.path().to_path_buf()]);

    let res = common::get(front_door(backend.clone(), &frontend), "/training").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.text(), INDEX_HTML);

    let res = common::get(front_door(backend, &frontend), "/assets/app.js").await;
    assert_eq!(res.text(), "console.log('portal')");
}
