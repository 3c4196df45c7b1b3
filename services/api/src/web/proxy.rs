//! services/api/src/web/proxy.rs
//!
//! The front door: forwards `/api/` requests to the gateway and relays the
//! answer back. Only the status, `Content-Type` and body come back.

use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue},
    response::Response,
};
use bytes::Bytes;
use std::sync::Arc;
use tracing::debug;

use crate::error::ApiError;
use crate::web::state::ProxyState;

/// Largest request body forwarded to the gateway.
pub const MAX_FORWARD_BODY: usize = 10 * 1024 * 1024;

/// Connection-scoped headers that must not be forwarded, plus `Host`, which
/// the client sets for the backend, and `Content-Length`, which it recomputes.
const SKIPPED_REQUEST_HEADERS: [&str; 10] = [
    "connection",
    "host",
    "content-length",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "keep-alive",
];

fn forwarded_headers(incoming: &HeaderMap) -> HeaderMap {
    let mut headers = incoming.clone();
    for name in SKIPPED_REQUEST_HEADERS {
        headers.remove(name);
    }
    headers
}

/// Forwards the request with its method, path, query, headers and body.
pub async fn forward_api(
    State(state): State<Arc<ProxyState>>,
    req: Request,
) -> Result<Response, ApiError> {
    let (parts, body) = req.into_parts();
    let path_and_query = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let url = state
        .backend_url
        .join(path_and_query)
        .map_err(|e| ApiError::Internal(format!("cannot build backend url: {e}")))?;
    let body: Bytes = to_bytes(body, MAX_FORWARD_BODY).await?;
    debug!(method = %parts.method, %url, "Forwarding to backend");

    let upstream = state
        .client
        .request(parts.method, url)
        .headers(forwarded_headers(&parts.headers))
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let content_type: Option<HeaderValue> = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes: Bytes = upstream.bytes().await?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    if let Some(content_type) = content_type {
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, content_type);
    }
    Ok(response)
}
