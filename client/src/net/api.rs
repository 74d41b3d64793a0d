//! REST client for the catalog API.
//!
//! Requests are plain `ApiRequest` values built by the endpoint helpers
//! below, so the exact method, path and JSON body of every call can be
//! checked without a browser. A `Transport` executes them: in the browser
//! (hydrate) that is `gloo-net`; on the server it reports `Unavailable`
//! because these endpoints are only meaningful client-side.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx responses and undecodable bodies are kept
//! apart in `ApiError` so callers can show the server's `detail` verbatim
//! or fall back to a generic message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{Category, CategoryPayload, CategoryStats, ErrorBody, Product, ProductPage, ProductPayload};

/// Prefix shared by every catalog endpoint.
pub const API_BASE: &str = "/api/v1";

/// Page size used to fetch "all" products in one request.
pub const FULL_PAGE_SIZE: u32 = 100;

/// HTTP method of an `ApiRequest`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// A fully described catalog API call.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path including query string, relative to the page origin.
    pub path: String,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    fn new(method: Method, path: String) -> Self {
        Self { method, path, body: None }
    }

    fn with_json<T: Serialize>(method: Method, path: String, body: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(Self { method, path, body: Some(body) })
    }
}

/// Status and raw body of a completed call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx response into `ApiError::Rejected`.
    ///
    /// # Errors
    ///
    /// Returns `Rejected` carrying the server's `detail`, when it sent one.
    pub fn error_for_status(self) -> Result<Self, ApiError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ApiError::Rejected { status: self.status, detail: ErrorBody::detail_from(&self.body) })
        }
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns `Decode` if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Failure of a catalog API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network error, CORS, abort).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("server rejected request with status {status}")]
    Rejected { status: u16, detail: Option<String> },

    /// A 2xx body could not be decoded.
    #[error("response parse failed: {0}")]
    Decode(String),

    /// The request body could not be encoded.
    #[error("request encode failed: {0}")]
    Encode(String),

    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Message shown to the user for a failed `action`.
    ///
    /// A rejection with a server `detail` reads `"{action}: {detail}"`;
    /// everything else falls back to the generic `action` text.
    #[must_use]
    pub fn user_message(&self, action: &str) -> String {
        match self {
            Self::Rejected { detail: Some(detail), .. } => format!("{action}: {detail}"),
            _ => action.to_owned(),
        }
    }
}

// =============================================================================
// ENDPOINTS
// =============================================================================

/// `GET /products/?page=&page_size=[&category_id=]`
#[must_use]
pub fn list_products_request(page: u32, page_size: u32, category_id: Option<i64>) -> ApiRequest {
    let filter = category_id.map(|id| format!("&category_id={id}")).unwrap_or_default();
    ApiRequest::new(Method::Get, format!("{API_BASE}/products/?page={page}&page_size={page_size}{filter}"))
}

/// `GET /products/{id}`
#[must_use]
pub fn get_product_request(id: i64) -> ApiRequest {
    ApiRequest::new(Method::Get, format!("{API_BASE}/products/{id}"))
}

/// `POST /admin/products/`
///
/// # Errors
///
/// Returns `Encode` if the payload cannot be serialized.
pub fn create_product_request(payload: &ProductPayload) -> Result<ApiRequest, ApiError> {
    ApiRequest::with_json(Method::Post, format!("{API_BASE}/admin/products/"), payload)
}

/// `PUT /admin/products/{id}`
///
/// # Errors
///
/// Returns `Encode` if the payload cannot be serialized.
pub fn update_product_request(id: i64, payload: &ProductPayload) -> Result<ApiRequest, ApiError> {
    ApiRequest::with_json(Method::Put, format!("{API_BASE}/admin/products/{id}"), payload)
}

/// `DELETE /admin/products/{id}`
#[must_use]
pub fn delete_product_request(id: i64) -> ApiRequest {
    ApiRequest::new(Method::Delete, format!("{API_BASE}/admin/products/{id}"))
}

/// `GET /categories/`
#[must_use]
pub fn list_categories_request() -> ApiRequest {
    ApiRequest::new(Method::Get, format!("{API_BASE}/categories/"))
}

/// `GET /categories/stats/`
#[must_use]
pub fn category_stats_request() -> ApiRequest {
    ApiRequest::new(Method::Get, format!("{API_BASE}/categories/stats/"))
}

/// `POST /categories/`
///
/// # Errors
///
/// Returns `Encode` if the payload cannot be serialized.
pub fn create_category_request(payload: &CategoryPayload) -> Result<ApiRequest, ApiError> {
    ApiRequest::with_json(Method::Post, format!("{API_BASE}/categories/"), payload)
}

/// `PUT /categories/{id}`
///
/// # Errors
///
/// Returns `Encode` if the payload cannot be serialized.
pub fn update_category_request(id: i64, payload: &CategoryPayload) -> Result<ApiRequest, ApiError> {
    ApiRequest::with_json(Method::Put, format!("{API_BASE}/categories/{id}"), payload)
}

/// `DELETE /categories/{id}`
#[must_use]
pub fn delete_category_request(id: i64) -> ApiRequest {
    ApiRequest::new(Method::Delete, format!("{API_BASE}/categories/{id}"))
}

// =============================================================================
// TRANSPORT
// =============================================================================

/// Executes `ApiRequest`s.
pub trait Transport {
    fn execute(&self, request: &ApiRequest) -> impl Future<Output = Result<ApiResponse, ApiError>>;
}

/// `fetch`-backed transport for the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let builder = match request.method {
                Method::Get => Request::get(&request.path),
                Method::Post => Request::post(&request.path),
                Method::Put => Request::put(&request.path),
                Method::Delete => Request::delete(&request.path),
            };
            let sent = match &request.body {
                Some(body) => {
                    builder
                        .json(body)
                        .map_err(|e| ApiError::Encode(e.to_string()))?
                        .send()
                        .await
                }
                None => builder.send().await,
            };
            let resp = sent.map_err(|e| ApiError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}

// =============================================================================
// CATALOG CLIENT
// =============================================================================

/// Typed catalog API client over a `Transport`.
#[derive(Clone, Debug, Default)]
pub struct Catalog<T> {
    transport: T,
}

impl Catalog<BrowserTransport> {
    /// Client for same-origin calls from the browser.
    #[must_use]
    pub fn browser() -> Self {
        Self { transport: BrowserTransport }
    }
}

impl<T: Transport> Catalog<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn call(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.transport.execute(&request).await?.error_for_status()
    }

    async fn fetch<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        self.call(request).await?.json()
    }

    /// Fetch one page of products, optionally filtered by category on the server.
    ///
    /// # Errors
    ///
    /// Returns any `ApiError` from the call or decoding.
    pub async fn list_products(&self, page: u32, page_size: u32, category_id: Option<i64>) -> Result<ProductPage, ApiError> {
        self.fetch(list_products_request(page, page_size, category_id)).await
    }

    /// Fetch a single product.
    ///
    /// # Errors
    ///
    /// Returns any `ApiError` from the call or decoding.
    pub async fn get_product(&self, id: i64) -> Result<Product, ApiError> {
        self.fetch(get_product_request(id)).await
    }

    /// Create a product. Any 2xx counts as success; the body is ignored.
    ///
    /// # Errors
    ///
    /// Returns any `ApiError` from the call.
    pub async fn create_product(&self, payload: &ProductPayload) -> Result<(), ApiError> {
        self.call(create_product_request(payload)?).await.map(|_| ())
    }

    /// Replace a product's fields. Any 2xx counts as success; the body is ignored.
    ///
    /// # Errors
    ///
    /// Returns any `ApiError` from the call.
    pub async fn update_product(&self, id: i64, payload: &ProductPayload) -> Result<(), ApiError> {
        self.call(update_product_request(id, payload)?).await.map(|_| ())
    }

    /// Delete a product. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns any `ApiError` from the call.
    pub async fn delete_product(&self, id: i64) -> Result<(), ApiError> {
        self.call(delete_product_request(id)).await.map(|_| ())
    }

    /// Fetch every category.
    ///
    /// # Errors
    ///
    /// Returns any `ApiError` from the call or decoding.
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.fetch(list_categories_request()).await
    }

    /// Fetch per-category product counts.
    ///
    /// # Errors
    ///
    /// Returns any `ApiError` from the call or decoding.
    pub async fn category_stats(&self) -> Result<Vec<CategoryStats>, ApiError> {
        self.fetch(category_stats_request()).await
    }

    /// Create a category. Any 2xx counts as success; the body is ignored.
    ///
    /// # Errors
    ///
    /// Returns any `ApiError` from the call.
    pub async fn create_category(&self, payload: &CategoryPayload) -> Result<(), ApiError> {
        self.call(create_category_request(payload)?).await.map(|_| ())
    }

    /// Replace a category's fields. Any 2xx counts as success; the body is ignored.
    ///
    /// # Errors
    ///
    /// Returns any `ApiError` from the call.
    pub async fn update_category(&self, id: i64, payload: &CategoryPayload) -> Result<(), ApiError> {
        self.call(update_category_request(id, payload)?).await.map(|_| ())
    }

    /// Delete a category. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns any `ApiError` from the call.
    pub async fn delete_category(&self, id: i64) -> Result<(), ApiError> {
        self.call(delete_category_request(id)).await.map(|_| ())
    }
}
