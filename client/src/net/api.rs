//! REST API client for the admin backend.
//!
//! ARCHITECTURE
//! ============
//! [`ApiClient::request`] is the single choke point: it prefixes the base
//! URL, forces `Content-Type: application/json` (caller headers win), sends
//! through the [`Transport`], and unwraps the [`Envelope`]. Named operations
//! below only bind a path, a method, and a body shape.
//!
//! ERROR HANDLING
//! ==============
//! The HTTP status is never inspected. A body that is not an envelope is
//! [`ApiError::Parse`]; a non-zero `code` is [`ApiError::RequestFailed`].
//! Nothing is retried.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;
use super::transport::{ApiRequest, ReqwestTransport, Transport};
use super::types::{
    DashboardCharts, DashboardStats, DataItem, Envelope, LoginRequest, LoginResponse, Product, ProductStatusPatch,
    User,
};
use crate::config::ClientConfig;

const USERS: &str = "/users";
const PRODUCTS: &str = "/products";
const DATA_ITEMS: &str = "/data";

/// Per-call options, mirroring what a `fetch` init object carries.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    /// Pre-serialized JSON text.
    pub body: Option<String>,
    /// Extra headers. These override the default `Content-Type`.
    pub headers: HeaderMap,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self { method: Method::GET, body: None, headers: HeaderMap::new() }
    }
}

impl RequestOptions {
    /// Options for `method` with `body` serialized as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Payload`] if `body` cannot be serialized.
    pub fn json<B: Serialize + ?Sized>(method: Method, body: &B) -> Result<Self, ApiError> {
        let text = serde_json::to_string(body).map_err(|e| ApiError::Payload(e.to_string()))?;
        Ok(Self { method, body: Some(text), headers: HeaderMap::new() })
    }

    #[must_use]
    pub fn method(method: Method) -> Self {
        Self { method, ..Self::default() }
    }
}

/// Client bound to one backend base URL.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Build a client that talks HTTP via `reqwest`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::HttpClientBuild`] if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let transport = ReqwestTransport::new(config.request_timeout)?;
        Ok(Self::with_transport(&config.api_base_url, Arc::new(transport)))
    }

    /// Build a client over an arbitrary transport.
    #[must_use]
    pub fn with_transport(base_url: &str, transport: Arc<dyn Transport>) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned(), transport }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one request to `path` and unwrap the envelope into `T`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Transport`] if the request is not delivered
    /// - [`ApiError::Parse`] if the body is not a JSON envelope
    /// - [`ApiError::RequestFailed`] if the envelope `code` is not `0`
    /// - [`ApiError::Payload`] if `data` does not deserialize into `T`
    pub async fn request<T: DeserializeOwned>(&self, path: &str, options: RequestOptions) -> Result<T, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.extend(options.headers);

        let request = ApiRequest {
            method: options.method,
            url: format!("{}{}", self.base_url, path),
            headers,
            body: options.body,
        };
        tracing::debug!(method = %request.method, %path, "api request");

        let body = self.transport.send(request).await?;
        let result = unwrap_envelope(&body);
        if let Err(e) = &result {
            tracing::debug!(%path, error = %e, "api request failed");
        }
        result
    }

    async fn send_json<T, B>(&self, method: Method, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(path, RequestOptions::json(method, body)?).await
    }

    // =========================================================================
    // AUTH + DASHBOARD
    // =========================================================================

    /// `POST /login`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.send_json(Method::POST, "/login", &LoginRequest { username, password })
            .await
    }

    /// `GET /dashboard/stats`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.request("/dashboard/stats", RequestOptions::default())
            .await
    }

    /// `GET /dashboard/charts`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn dashboard_charts(&self) -> Result<DashboardCharts, ApiError> {
        self.request("/dashboard/charts", RequestOptions::default())
            .await
    }

    // =========================================================================
    // USERS
    // =========================================================================

    /// `GET /users`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.request(USERS, RequestOptions::default()).await
    }

    /// `POST /users`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn create_user<B: Serialize + ?Sized>(&self, body: &B) -> Result<Value, ApiError> {
        self.send_json(Method::POST, USERS, body).await
    }

    /// `PUT /users/:id`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn update_user<B: Serialize + ?Sized>(&self, id: u64, body: &B) -> Result<Value, ApiError> {
        self.send_json(Method::PUT, &member_path(USERS, id), body)
            .await
    }

    /// `DELETE /users/:id`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn delete_user(&self, id: u64) -> Result<Value, ApiError> {
        self.request(&member_path(USERS, id), RequestOptions::method(Method::DELETE))
            .await
    }

    // =========================================================================
    // PRODUCTS
    // =========================================================================

    /// `GET /products`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.request(PRODUCTS, RequestOptions::default()).await
    }

    /// `POST /products`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn create_product<B: Serialize + ?Sized>(&self, body: &B) -> Result<Value, ApiError> {
        self.send_json(Method::POST, PRODUCTS, body).await
    }

    /// `PUT /products/:id`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn update_product<B: Serialize + ?Sized>(&self, id: u64, body: &B) -> Result<Value, ApiError> {
        self.send_json(Method::PUT, &member_path(PRODUCTS, id), body)
            .await
    }

    /// `DELETE /products/:id`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn delete_product(&self, id: u64) -> Result<Value, ApiError> {
        self.request(&member_path(PRODUCTS, id), RequestOptions::method(Method::DELETE))
            .await
    }

    /// `PATCH /products/:id/status` with `{ status }`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn update_product_status(&self, id: u64, status: &str) -> Result<Value, ApiError> {
        self.send_json(Method::PATCH, &product_status_path(id), &ProductStatusPatch { status })
            .await
    }

    // =========================================================================
    // DATA ITEMS
    // =========================================================================

    /// `GET /data`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn list_data_items(&self) -> Result<Vec<DataItem>, ApiError> {
        self.request(DATA_ITEMS, RequestOptions::default()).await
    }

    /// `POST /data`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn create_data_item<B: Serialize + ?Sized>(&self, body: &B) -> Result<Value, ApiError> {
        self.send_json(Method::POST, DATA_ITEMS, body).await
    }

    /// `PUT /data/:id`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn update_data_item<B: Serialize + ?Sized>(&self, id: u64, body: &B) -> Result<Value, ApiError> {
        self.send_json(Method::PUT, &member_path(DATA_ITEMS, id), body)
            .await
    }

    /// `DELETE /data/:id`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn delete_data_item(&self, id: u64) -> Result<Value, ApiError> {
        self.request(&member_path(DATA_ITEMS, id), RequestOptions::method(Method::DELETE))
            .await
    }
}

fn member_path(collection: &str, id: u64) -> String {
    format!("{collection}/{id}")
}

fn product_status_path(id: u64) -> String {
    format!("{PRODUCTS}/{id}/status")
}

/// Decode a response body and accept only a zero-code envelope.
///
/// A body that is JSON but not an object fails like an envelope without a code.
pub(crate) fn unwrap_envelope<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let body: Value = serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))?;
    let envelope = Envelope::from_value(body);
    if !envelope.is_success() {
        return Err(ApiError::RequestFailed(envelope.failure_message().to_owned()));
    }
    serde_json::from_value(envelope.data).map_err(|e| ApiError::Payload(e.to_string()))
}
