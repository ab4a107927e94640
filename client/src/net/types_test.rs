use super::*;
use serde_json::json;

fn envelope(value: Value) -> Envelope {
    Envelope::from_value(value)
}

// =============================================================================
// Envelope
// =============================================================================

#[test]
fn envelope_zero_code_is_success() {
    assert!(envelope(json!({ "code": 0, "data": [] })).is_success());
}

#[test]
fn envelope_float_zero_is_success() {
    assert!(envelope(json!({ "code": 0.0 })).is_success());
}

#[test]
fn envelope_non_zero_code_fails() {
    assert!(!envelope(json!({ "code": 401, "message": "unauthorized" })).is_success());
}

#[test]
fn envelope_string_zero_is_not_success() {
    assert!(!envelope(json!({ "code": "0", "data": 1 })).is_success());
}

#[test]
fn envelope_missing_code_is_not_success() {
    let env = envelope(json!({ "data": { "id": 1 } }));
    assert!(!env.is_success());
    assert_eq!(env.failure_message(), DEFAULT_FAILURE_MESSAGE);
}

#[test]
fn envelope_from_array_ignores_positional_fields() {
    let env = envelope(json!([0, "", { "leak": true }]));
    assert!(!env.is_success());
    assert_eq!(env.data, Value::Null);
    assert_eq!(env.failure_message(), DEFAULT_FAILURE_MESSAGE);
}

#[test]
fn envelope_from_scalar_is_not_success() {
    assert!(!envelope(json!(0)).is_success());
    assert!(!envelope(json!("0")).is_success());
}

#[test]
fn envelope_failure_message_prefers_server_text() {
    let env = envelope(json!({ "code": 1, "message": "用户名或密码错误" }));
    assert_eq!(env.failure_message(), "用户名或密码错误");
}

#[test]
fn envelope_empty_message_falls_back() {
    let env = envelope(json!({ "code": 1, "message": "" }));
    assert_eq!(env.failure_message(), DEFAULT_FAILURE_MESSAGE);
}

#[test]
fn envelope_non_string_message_falls_back() {
    let env = envelope(json!({ "code": 1, "message": 42 }));
    assert_eq!(env.failure_message(), DEFAULT_FAILURE_MESSAGE);
}

// =============================================================================
// Auth records
// =============================================================================

#[test]
fn login_response_without_avatar_or_id() {
    let resp: LoginResponse = serde_json::from_value(json!({
        "token": "abc",
        "user": { "username": "admin", "name": "Admin" }
    }))
    .unwrap();
    assert_eq!(resp.token, "abc");
    assert_eq!(resp.user.name, "Admin");
    assert!(resp.user.avatar.is_none());
    assert!(resp.user.id.is_none());
}

#[test]
fn login_request_serializes_credentials() {
    let body = serde_json::to_value(LoginRequest { username: "admin", password: "admin123" }).unwrap();
    assert_eq!(body, json!({ "username": "admin", "password": "admin123" }));
}

#[test]
fn profile_serializes_camel_case() {
    let profile = Profile {
        id: 1,
        username: "Admin".to_owned(),
        avatar_url: "https://example.test/a.png".to_owned(),
        role: "超级管理员".to_owned(),
    };
    let value = serde_json::to_value(&profile).unwrap();
    assert_eq!(value["avatarUrl"], "https://example.test/a.png");
    assert!(value.get("avatar_url").is_none());
}

// =============================================================================
// Resources
// =============================================================================

#[test]
fn user_keeps_unknown_fields() {
    let user: User = serde_json::from_value(json!({
        "id": 7,
        "username": "zhang",
        "email": "zhang@example.test",
        "createdAt": "2024-01-02"
    }))
    .unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.email.as_deref(), Some("zhang@example.test"));
    assert_eq!(user.extra.get("createdAt"), Some(&json!("2024-01-02")));

    let back = serde_json::to_value(&user).unwrap();
    assert_eq!(back["createdAt"], "2024-01-02");
    assert!(back.get("role").is_none());
}

#[test]
fn user_without_id_is_rejected() {
    let result: Result<User, _> = serde_json::from_value(json!({ "username": "ghost" }));
    assert!(result.is_err());
}

#[test]
fn user_without_username_still_parses() {
    let user: User = serde_json::from_value(json!({ "id": 4, "email": "x@example.test" })).unwrap();
    assert_eq!(user.id, 4);
    assert!(user.username.is_empty());
}

#[test]
fn product_without_name_still_parses() {
    let product: Product = serde_json::from_value(json!({ "id": 5, "price": 10 })).unwrap();
    assert!(product.name.is_empty());
    assert_eq!(product.price, Some(10.0));
}

#[test]
fn product_parses_known_fields() {
    let product: Product = serde_json::from_value(json!({
        "id": 3,
        "name": "Keyboard",
        "price": 199.5,
        "stock": 12,
        "status": "on_sale"
    }))
    .unwrap();
    assert_eq!(product.price, Some(199.5));
    assert_eq!(product.stock, Some(12));
    assert_eq!(product.status.as_deref(), Some("on_sale"));
    assert!(product.extra.is_empty());
}

#[test]
fn data_item_keeps_everything_but_id_in_extra() {
    let item: DataItem = serde_json::from_value(json!({ "id": 9, "title": "Q1", "value": 12 })).unwrap();
    assert_eq!(item.id, 9);
    assert_eq!(item.extra.len(), 2);
}

#[test]
fn dashboard_stats_parse_camel_case() {
    let stats: DashboardStats = serde_json::from_value(json!({
        "totalUsers": 120,
        "totalOrders": 45,
        "totalRevenue": 9876.5,
        "growthRate": 12.5
    }))
    .unwrap();
    assert_eq!(stats.total_users, 120);
    assert_eq!(stats.growth_rate, 12.5);
}

#[test]
fn dashboard_charts_parse_distribution() {
    let charts: DashboardCharts = serde_json::from_value(json!({
        "weeklyVisits": [1, 2, 3],
        "monthlySales": [],
        "categoryDistribution": [{ "name": "电子产品", "value": 40 }]
    }))
    .unwrap();
    assert_eq!(charts.weekly_visits.len(), 3);
    assert_eq!(charts.category_distribution[0].name, "电子产品");
}
