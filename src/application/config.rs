/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::{API_HOST, DEFAULT_TIMEOUT_SECS};
use crate::model::auth::Credentials;
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the Yelp REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: API_HOST.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the Yelp API client
pub struct Config {
    /// Client identifier issued by Yelp
    pub client_id: String,
    /// Client secret issued by Yelp
    #[serde(skip_serializing, default)]
    pub client_secret: String,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// Loads a `.env` file if present, then reads `YELP_CLIENT_ID`,
    /// `YELP_CLIENT_SECRET`, `YELP_REST_BASE_URL` and `YELP_REST_TIMEOUT`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let client_id = get_env_or_default("YELP_CLIENT_ID", String::from("default_client_id"));
        let client_secret =
            get_env_or_default("YELP_CLIENT_SECRET", String::from("default_client_secret"));

        if client_id == "default_client_id" {
            error!("YELP_CLIENT_ID not found in environment variables or .env file");
        }
        if client_secret == "default_client_secret" {
            error!("YELP_CLIENT_SECRET not found in environment variables or .env file");
        }

        Config {
            client_id,
            client_secret,
            rest_api: RestApiConfig {
                base_url: get_env_or_default("YELP_REST_BASE_URL", API_HOST.to_string()),
                timeout: get_env_or_default("YELP_REST_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
        }
    }

    /// Creates a configuration from explicit credentials, without reading the environment
    pub fn with_credentials(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Config {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            rest_api: RestApiConfig::default(),
        }
    }

    /// Credentials for the token exchange, with no cached token
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.client_id.clone(), self.client_secret.clone())
    }
}
