use chrono::{DateTime, Duration, Utc};
use yelp_client::error::AppError;
use yelp_client::model::auth::{Credentials, TokenResponse};

fn credentials_with_token(token: &str, expires_in_secs: i64) -> Credentials {
    let mut credentials = Credentials::new("client", "secret");
    credentials.access_token = token.to_string();
    credentials.expiry_date = Utc::now() + Duration::seconds(expires_in_secs);
    credentials
}

#[test]
fn test_new_credentials_have_no_token() {
    let credentials = Credentials::new("client", "secret");
    assert_eq!(credentials.client_id, "client");
    assert_eq!(credentials.client_secret, "secret");
    assert!(credentials.access_token.is_empty());
    assert!(!credentials.is_valid());
}

#[test]
fn test_empty_token_is_invalid_regardless_of_expiry() {
    let credentials = credentials_with_token("", 3600);
    assert!(!credentials.is_valid());
}

#[test]
fn test_token_with_past_expiry_is_invalid() {
    let credentials = credentials_with_token("T", -1);
    assert!(!credentials.is_valid());
}

#[test]
fn test_token_with_future_expiry_is_valid() {
    let credentials = credentials_with_token("T", 3600);
    assert!(credentials.is_valid());
}

#[test]
fn test_token_is_invalid_exactly_at_expiry() {
    let credentials = credentials_with_token("T", 60);
    let expiry = credentials.expiry_date;
    assert!(credentials.is_valid_at(expiry - Duration::seconds(1)));
    assert!(!credentials.is_valid_at(expiry));
}

#[test]
fn test_store_token_sets_absolute_expiry() {
    let mut credentials = Credentials::new("client", "secret");
    let t0 = Utc::now();

    credentials.store_token("T".to_string(), 3600, t0).unwrap();

    assert_eq!(credentials.access_token, "T");
    assert_eq!(credentials.expiry_date, t0 + Duration::seconds(3600));
    assert!(credentials.is_valid_at(t0 + Duration::seconds(1)));
    assert!(!credentials.is_valid_at(t0 + Duration::seconds(3601)));
}

#[test]
fn test_store_token_rejects_out_of_range_lifetime() {
    let mut credentials = credentials_with_token("old", 3600);
    let expiry = credentials.expiry_date;

    for expires_in in [i64::MAX, i64::MIN] {
        let result = credentials.store_token("new".to_string(), expires_in, Utc::now());
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    assert_eq!(credentials.access_token, "old");
    assert_eq!(credentials.expiry_date, expiry);
}

#[test]
fn test_store_token_rejects_expiry_past_max_date() {
    let mut credentials = Credentials::new("client", "secret");
    let now = DateTime::<Utc>::MAX_UTC - Duration::seconds(10);

    let result = credentials.store_token("T".to_string(), 60, now);

    assert!(result.is_err());
    assert!(credentials.access_token.is_empty());
}

#[test]
fn test_url_values_for_token_exchange() {
    let credentials = Credentials::new("my-id", "my-secret");
    let values = credentials.url_values();

    assert_eq!(
        values,
        vec![
            ("grant_type", "client_credentials".to_string()),
            ("client_id", "my-id".to_string()),
            ("client_secret", "my-secret".to_string()),
        ]
    );
}

#[test]
fn test_debug_redacts_secrets() {
    let mut credentials = Credentials::new("visible-id", "hidden-s3cr3t");
    credentials.access_token = "hidden-t0ken".to_string();
    let debug = format!("{credentials:?}");

    assert!(debug.contains("visible-id"));
    assert!(!debug.contains("hidden-s3cr3t"));
    assert!(!debug.contains("hidden-t0ken"));
    assert!(debug.contains("<redacted>"));
}

#[test]
fn test_token_response_deserialization() {
    let json = r#"{"access_token":"abc","token_type":"Bearer","expires_in":15552000}"#;
    let token: TokenResponse = serde_json::from_str(json).unwrap();

    assert_eq!(token.access_token, "abc");
    assert_eq!(token.token_type, "Bearer");
    assert_eq!(token.expires_in, 15_552_000);
}

#[test]
fn test_token_response_missing_token_fails() {
    let json = r#"{"token_type":"Bearer","expires_in":10}"#;
    assert!(serde_json::from_str::<TokenResponse>(json).is_err());
}
