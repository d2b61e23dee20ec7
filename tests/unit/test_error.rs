use reqwest::StatusCode;
use std::error::Error;
use yelp_client::error::AppError;

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("location required".to_string());
    assert_eq!(error.to_string(), "invalid input: location required");
}

#[test]
fn test_app_error_display_unexpected_includes_status() {
    let error = AppError::Unexpected(StatusCode::NOT_FOUND);
    let text = error.to_string();
    assert!(text.contains("404"));
    assert!(text.contains("Not Found"));
}

// Note: reqwest::Error cannot be easily constructed in tests
// The Network variant is covered by the integration tests

#[test]
fn test_app_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();

    match &app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
    assert!(app_error.to_string().starts_with("json error:"));
    assert!(app_error.source().is_some());
}

#[test]
fn test_app_error_source_absent_for_local_errors() {
    assert!(AppError::InvalidInput("x".into()).source().is_none());
    assert!(AppError::Unexpected(StatusCode::BAD_REQUEST).source().is_none());
}
