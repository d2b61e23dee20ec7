/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Error type shared by every fallible operation in the crate

use reqwest::StatusCode;
use std::fmt;

/// Errors returned by the Yelp client
#[derive(Debug)]
pub enum AppError {
    /// Local validation failure, raised before any request is sent
    InvalidInput(String),
    /// Transport failure (connection, DNS, TLS, timeout)
    Network(reqwest::Error),
    /// The API answered with a status other than 200
    Unexpected(StatusCode),
    /// The response body could not be decoded
    Json(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Unexpected(status) => write!(f, "yelp request failed with status {status}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::InvalidInput(_) | AppError::Unexpected(_) => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}
