use yelp_client::application::config::{Config, RestApiConfig};
use yelp_client::constants::{API_HOST, DEFAULT_TIMEOUT_SECS};

#[test]
fn test_rest_api_config_default() {
    let rest_api = RestApiConfig::default();
    assert_eq!(rest_api.base_url, API_HOST);
    assert_eq!(rest_api.timeout, DEFAULT_TIMEOUT_SECS);
}

#[test]
fn test_config_with_credentials() {
    let config = Config::with_credentials("my-id", "my-secret");

    assert_eq!(config.client_id, "my-id");
    assert_eq!(config.client_secret, "my-secret");
    assert_eq!(config.rest_api, RestApiConfig::default());
}

#[test]
fn test_config_credentials_have_no_token() {
    let config = Config::with_credentials("my-id", "my-secret");
    let credentials = config.credentials();

    assert_eq!(credentials.client_id, "my-id");
    assert_eq!(credentials.client_secret, "my-secret");
    assert!(credentials.access_token.is_empty());
    assert!(!credentials.is_valid());
}

#[test]
fn test_config_serialization_skips_secret() {
    let config = Config::with_credentials("my-id", "my-secret");

    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("my-id"));
    assert!(!json.contains("my-secret"));

    let display = config.to_string();
    assert!(!display.contains("my-secret"));
}

#[test]
fn test_config_deserialization_without_secret() {
    let json = r#"{"client_id":"my-id","rest_api":{"base_url":"http://localhost:8080","timeout":5}}"#;
    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.client_id, "my-id");
    assert!(config.client_secret.is_empty());
    assert_eq!(config.rest_api.base_url, "http://localhost:8080");
    assert_eq!(config.rest_api.timeout, 5);
}
