//! HTTP transport seam beneath the API client.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`ApiClient`](super::api::ApiClient) builds an [`ApiRequest`] and hands it
//! to a [`Transport`], which only moves bytes: it returns the response body
//! text whatever the HTTP status, leaving envelope interpretation to the
//! client. Tests swap in a scripted transport.

use std::time::Duration;

use reqwest::Method;
use reqwest::header::HeaderMap;

use super::error::ApiError;

/// A fully resolved outbound request.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    /// Pre-serialized JSON body.
    pub body: Option<String>,
}

/// Sends one request and yields the raw response body.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the request cannot be delivered or
    /// the body cannot be read.
    async fn send(&self, request: ApiRequest) -> Result<String, ApiError>;
}

/// Production transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport. `timeout` bounds the whole request when set.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::HttpClientBuild`] if the TLS backend fails to initialize.
    pub fn new(timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http })
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<String, ApiError> {
        let mut builder = self
            .http
            .request(request.method, &request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        tracing::debug!(url = %request.url, status, bytes = text.len(), "api response received");
        Ok(text)
    }
}
