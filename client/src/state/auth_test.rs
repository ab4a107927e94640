use super::*;

#[tokio::test]
async fn demo_accepts_builtin_account() {
    let resp = DemoAuthenticator
        .authenticate(DEMO_USERNAME, DEMO_PASSWORD)
        .await
        .unwrap();
    assert!(resp.token.starts_with("mock-token-"));
    assert_eq!(resp.user.id, Some(1));
    assert_eq!(resp.user.name, "Admin");
    assert!(resp.user.avatar.is_none());
}

#[tokio::test]
async fn demo_rejects_wrong_password() {
    let err = DemoAuthenticator
        .authenticate("admin", "wrong")
        .await
        .unwrap_err();
    assert!(err.is_rejection());
}

#[tokio::test]
async fn demo_rejects_unknown_user() {
    assert!(
        DemoAuthenticator
            .authenticate("root", DEMO_PASSWORD)
            .await
            .is_err()
    );
}

#[test]
fn demo_token_embeds_millis() {
    assert_eq!(demo_token(1_700_000_000_123), "mock-token-1700000000123");
}

#[test]
fn epoch_millis_is_after_2020() {
    assert!(epoch_millis() > 1_577_836_800_000);
}
