//! Wire records exchanged with the admin backend.
//!
//! DESIGN
//! ======
//! Every endpoint wraps its payload in an [`Envelope`]. Resource records keep
//! a handful of typed fields and carry anything else the backend sends in a
//! flattened `extra` map, so a record read from one call can be written back
//! by another without dropping fields.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fallback error text when a failed envelope has no usable `message`.
pub const DEFAULT_FAILURE_MESSAGE: &str = "请求失败";

// =============================================================================
// ENVELOPE
// =============================================================================

/// The `{ code, message?, data? }` wrapper every response uses.
///
/// Fields are kept as raw JSON so a malformed `code` or `message` is treated
/// as a failed envelope rather than a parse error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Envelope {
    pub code: Value,
    pub message: Value,
    pub data: Value,
}

impl Envelope {
    /// Read the envelope fields out of a decoded body by key.
    ///
    /// Only a JSON object can carry an envelope. Arrays and scalars come back
    /// as the default envelope, which has no `code` and so never succeeds.
    #[must_use]
    pub fn from_value(body: Value) -> Self {
        let Value::Object(mut fields) = body else {
            return Self::default();
        };
        Self {
            code: fields.remove("code").unwrap_or_default(),
            message: fields.remove("message").unwrap_or_default(),
            data: fields.remove("data").unwrap_or_default(),
        }
    }

    /// `code` is numerically zero. `"0"`, `false`, and a missing code all fail.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_success(&self) -> bool {
        self.code.as_f64().is_some_and(|code| code == 0.0)
    }

    /// The backend's error text, or [`DEFAULT_FAILURE_MESSAGE`].
    #[must_use]
    pub fn failure_message(&self) -> &str {
        self.message
            .as_str()
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_FAILURE_MESSAGE)
    }
}

// =============================================================================
// AUTH
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: LoginUser,
}

/// User fields returned alongside a fresh token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Identity shown in the console chrome for the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: u64,
    pub username: String,
    pub avatar_url: String,
    pub role: String,
}

// =============================================================================
// DASHBOARD
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_users: u64,
    pub total_orders: u64,
    pub total_revenue: f64,
    pub growth_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCharts {
    pub weekly_visits: Vec<f64>,
    pub monthly_sales: Vec<f64>,
    pub category_distribution: Vec<CategoryShare>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub name: String,
    pub value: f64,
}

// =============================================================================
// RESOURCES
// =============================================================================

/// A console account managed on the users screen.
///
/// `id` is the one field a row must carry, since it addresses the row in
/// later calls. Everything else tolerates absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A catalogue entry on the products screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A row on the generic data screen. Only `id` is guaranteed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataItem {
    pub id: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductStatusPatch<'a> {
    pub status: &'a str,
}
