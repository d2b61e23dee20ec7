/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Authentication module for the Yelp API
//!
//! Owns the client credentials and the cached bearer token. The token is
//! checked and, when missing or expired, refreshed while holding a single
//! lock, so concurrent requests share one refresh instead of racing.

use crate::constants::TOKEN_PATH;
use crate::error::AppError;
use crate::model::auth::{Credentials, TokenResponse};
use crate::model::http::post_form;
use chrono::Utc;
use reqwest::Client;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Token manager for the Yelp API
pub struct Auth {
    client: Client,
    base_url: String,
    credentials: Mutex<Credentials>,
}

impl Auth {
    /// Creates a new Auth instance
    ///
    /// # Arguments
    /// * `client` - HTTP client used for the token exchange
    /// * `base_url` - Scheme and host of the API, without trailing slash
    /// * `credentials` - Client credentials, optionally carrying a cached token
    pub fn new(client: Client, base_url: String, credentials: Credentials) -> Self {
        Self {
            client,
            base_url,
            credentials: Mutex::new(credentials),
        }
    }

    /// Returns a usable access token, fetching a new one if needed
    ///
    /// # Returns
    /// * `Ok(String)` - Token valid at the time of the call
    /// * `Err(AppError)` - If the token exchange fails
    pub async fn access_token(&self) -> Result<String, AppError> {
        let mut credentials = self.credentials.lock().await;
        if !credentials.is_valid() {
            info!("Access token missing or expired, fetching a new one");
            self.exchange(&mut credentials).await?;
        }
        Ok(credentials.access_token.clone())
    }

    /// Exchanges the client credentials for a new token
    ///
    /// On failure the previously cached token and expiry are kept.
    pub async fn fetch_token(&self) -> Result<(), AppError> {
        let mut credentials = self.credentials.lock().await;
        self.exchange(&mut credentials).await
    }

    /// Snapshot of the current credentials
    pub async fn credentials(&self) -> Credentials {
        self.credentials.lock().await.clone()
    }

    async fn exchange(&self, credentials: &mut Credentials) -> Result<(), AppError> {
        let url = format!("{}{}", self.base_url, TOKEN_PATH);
        let token: TokenResponse =
            post_form(&self.client, &url, &credentials.url_values()).await?;

        debug!(
            "{} token expires in {} seconds",
            token.token_type, token.expires_in
        );
        credentials.store_token(token.access_token, token.expires_in, Utc::now())?;

        info!("✓ Access token refreshed, valid until {}", credentials.expiry_date);
        Ok(())
    }
}
