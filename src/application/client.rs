/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Client for the Yelp Fusion API
//!
//! Authentication is handled internally: the first request, and the first
//! request after the token expires, exchanges the client credentials for a
//! fresh bearer token.
//!
//! # Example
//! ```ignore
//! use yelp_client::prelude::*;
//!
//! let client = Client::new(reqwest::Client::new(), Credentials::new("id", "secret"));
//! let business = client.business_by_id("gary-danko-san-francisco").await?;
//! ```

use crate::application::config::Config;
use crate::application::interfaces::business::BusinessService;
use crate::constants::{API_HOST, BUSINESS_PATH, SEARCH_PATH, USER_AGENT};
use crate::error::AppError;
use crate::model::auth::Credentials;
use crate::model::business::Business;
use crate::model::http::HttpClient;
use crate::model::requests::SearchOptions;
use crate::model::responses::SearchResults;
use async_trait::async_trait;
use reqwest::Client as HttpInternalClient;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Client for the Yelp API with automatic token management
///
/// Cloning is cheap and clones share the cached token.
#[derive(Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client for the public Yelp API host
    ///
    /// # Arguments
    /// * `http_client` - Transport to use; any timeout must be configured on it
    /// * `credentials` - Client credentials, optionally carrying a cached token
    pub fn new(http_client: HttpInternalClient, credentials: Credentials) -> Self {
        Self::with_base_url(http_client, credentials, API_HOST)
    }

    /// Creates a client for a custom API host
    pub fn with_base_url(
        http_client: HttpInternalClient,
        credentials: Credentials,
        base_url: &str,
    ) -> Self {
        Self {
            http_client: Arc::new(HttpClient::new(http_client, credentials, base_url)),
        }
    }

    /// Creates a client from configuration
    ///
    /// Builds a transport with the configured timeout and this crate's user agent.
    ///
    /// # Errors
    /// Returns [`AppError::Network`] if the transport cannot be built.
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;
        Ok(Self::with_base_url(
            http_client,
            config.credentials(),
            &config.rest_api.base_url,
        ))
    }

    /// Exchanges the client credentials for a new access token
    ///
    /// Not needed before other calls; they fetch a token on demand.
    pub async fn fetch_token(&self) -> Result<(), AppError> {
        self.http_client.fetch_token().await
    }

    /// Snapshot of the credentials and the cached token
    pub async fn credentials(&self) -> Credentials {
        self.http_client.auth().credentials().await
    }
}

#[async_trait]
impl BusinessService for Client {
    async fn search(&self, options: &SearchOptions) -> Result<SearchResults, AppError> {
        options.validate()?;

        let mut url = self.http_client.url_for(SEARCH_PATH)?;
        url.query_pairs_mut().extend_pairs(options.url_values());

        info!("Searching businesses");
        let results: SearchResults = self.http_client.get(url).await?;
        debug!(
            "Search returned {} of {} businesses",
            results.businesses.len(),
            results.total
        );
        Ok(results)
    }

    async fn business_by_id(&self, business_id: &str) -> Result<Business, AppError> {
        if business_id.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "business id must not be empty".to_string(),
            ));
        }

        let mut url = self.http_client.url_for(BUSINESS_PATH)?;
        url.path_segments_mut()
            .map_err(|_| AppError::InvalidInput("base url cannot take path segments".to_string()))?
            .push(business_id);

        info!("Getting business: {}", business_id);
        let business: Business = self.http_client.get(url).await?;
        debug!("Business obtained: {}", business.name);
        Ok(business)
    }
}
