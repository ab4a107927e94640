//! Credential checks consulted by the session gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gate only needs "credentials in, token + user out". The live backend
//! answers through [`ApiClient`]; [`DemoAuthenticator`] answers locally with
//! the single built-in demo account so the console can run without a server.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{LoginResponse, LoginUser};

pub const DEMO_USERNAME: &str = "admin";
pub const DEMO_PASSWORD: &str = "admin123";
const DEMO_DISPLAY_NAME: &str = "Admin";
const DEMO_USER_ID: u64 = 1;
const DEMO_REJECTION: &str = "用户名或密码错误";

/// Exchanges credentials for a session token.
#[async_trait::async_trait]
pub trait Authenticator: Send + Sync {
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the credentials are rejected or the check
    /// could not be carried out.
    async fn authenticate(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError>;
}

#[async_trait::async_trait]
impl Authenticator for ApiClient {
    async fn authenticate(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.login(username, password).await
    }
}

#[async_trait::async_trait]
impl<T: Authenticator + ?Sized> Authenticator for Arc<T> {
    async fn authenticate(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        (**self).authenticate(username, password).await
    }
}

/// Offline authenticator accepting only `admin` / `admin123`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoAuthenticator;

#[async_trait::async_trait]
impl Authenticator for DemoAuthenticator {
    async fn authenticate(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        if username != DEMO_USERNAME || password != DEMO_PASSWORD {
            return Err(ApiError::RequestFailed(DEMO_REJECTION.to_owned()));
        }
        Ok(LoginResponse {
            token: demo_token(epoch_millis()),
            user: LoginUser {
                id: Some(DEMO_USER_ID),
                username: DEMO_USERNAME.to_owned(),
                name: DEMO_DISPLAY_NAME.to_owned(),
                avatar: None,
            },
        })
    }
}

fn demo_token(millis: u128) -> String {
    format!("mock-token-{millis}")
}

fn epoch_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis())
}
