use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn from_lookup_defaults_when_nothing_set() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.default_role, "超级管理员");
    assert!(cfg.request_timeout.is_none());
}

#[test]
fn from_lookup_applies_overrides() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[
        (ENV_API_BASE_URL, "http://127.0.0.1:8080/api/"),
        (ENV_STATE_DIR, "/tmp/admin-state"),
        (ENV_DEFAULT_ROLE, "editor"),
        (ENV_DEFAULT_AVATAR, "https://example.test/a.png"),
        (ENV_REQUEST_TIMEOUT_SECS, "15"),
    ]))
    .unwrap();
    assert_eq!(cfg.api_base_url, "http://127.0.0.1:8080/api");
    assert_eq!(cfg.state_dir, PathBuf::from("/tmp/admin-state"));
    assert_eq!(cfg.default_role, "editor");
    assert_eq!(cfg.default_avatar_url, "https://example.test/a.png");
    assert_eq!(cfg.request_timeout, Some(Duration::from_secs(15)));
}

#[test]
fn from_lookup_treats_blank_values_as_unset() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[(ENV_API_BASE_URL, "   "), (ENV_DEFAULT_ROLE, "")])).unwrap();
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.default_role, DEFAULT_ROLE);
}

#[test]
fn from_lookup_rejects_non_numeric_timeout() {
    let err = ClientConfig::from_lookup(lookup_from(&[(ENV_REQUEST_TIMEOUT_SECS, "soon")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidValue { var: ENV_REQUEST_TIMEOUT_SECS, value: "soon".to_owned() });
}

#[test]
fn from_lookup_rejects_zero_timeout() {
    assert!(ClientConfig::from_lookup(lookup_from(&[(ENV_REQUEST_TIMEOUT_SECS, "0")])).is_err());
}
