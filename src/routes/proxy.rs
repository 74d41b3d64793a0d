//! Same-origin proxy to the catalog API.
//!
//! Forwards method, path, query string, body and the `content-type` and
//! `accept` headers. Status, `content-type` and body come back unchanged, so
//! API error bodies (`{"detail": ...}`) reach the console as the server wrote
//! them. When the API cannot be reached the proxy answers `502` with a body
//! in the same shape.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Headers copied onto the upstream request.
const FORWARDED_HEADERS: [header::HeaderName; 2] = [header::CONTENT_TYPE, header::ACCEPT];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("catalog API unreachable: {0}")]
    Upstream(String),

    #[error("catalog API response unreadable: {0}")]
    Body(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_GATEWAY, Json(serde_json::json!({ "detail": self.to_string() }))).into_response()
    }
}

/// Upstream URL for an incoming path and query.
pub fn upstream_url(base: &str, path_and_query: &str) -> String {
    format!("{}{path_and_query}", base.trim_end_matches('/'))
}

/// `ANY /api/v1/{*path}`
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    let url = upstream_url(&state.catalog_api_url, path_and_query);

    let mut request = state.http.request(method.clone(), &url).body(body);
    for name in FORWARDED_HEADERS {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value.clone());
        }
    }

    let upstream = request.send().await.map_err(|e| {
        tracing::warn!(%method, %url, error = %e, "catalog API request failed");
        ProxyError::Upstream(e.to_string())
    })?;
    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await.map_err(|e| {
        tracing::warn!(%method, %url, error = %e, "catalog API body read failed");
        ProxyError::Body(e.to_string())
    })?;

    tracing::debug!(%method, path = uri.path(), status = status.as_u16(), "proxied catalog request");

    let mut response = (status, bytes).into_response();
    match content_type {
        Some(value) => {
            response.headers_mut().insert(header::CONTENT_TYPE, value);
        }
        None => {
            response.headers_mut().remove(header::CONTENT_TYPE);
        }
    }
    Ok(response)
}
