/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::GRANT_TYPE;
use crate::error::AppError;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Client credentials plus the access token obtained with them
///
/// The token starts empty and is only ever replaced by a successful token
/// exchange, see [`Credentials::store_token`].
#[derive(Clone, Default)]
pub struct Credentials {
    /// Client identifier issued by Yelp
    pub client_id: String,
    /// Client secret issued by Yelp
    pub client_secret: String,
    /// Cached bearer token, empty until fetched
    pub access_token: String,
    /// Instant after which the cached token is no longer accepted
    pub expiry_date: DateTime<Utc>,
}

impl Credentials {
    /// Creates credentials with no cached token
    ///
    /// # Arguments
    /// * `client_id` - Client identifier issued by Yelp
    /// * `client_secret` - Client secret issued by Yelp
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            access_token: String::new(),
            expiry_date: DateTime::<Utc>::default(),
        }
    }

    /// Checks whether the cached token can be used right now
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }

    /// Checks whether the cached token can be used at `now`
    ///
    /// A token is valid only when it is non-empty and `now` is strictly
    /// before its expiry.
    #[must_use]
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        !self.access_token.is_empty() && now < self.expiry_date
    }

    /// Form fields for the client-credentials token exchange
    #[must_use]
    pub fn url_values(&self) -> Vec<(&'static str, String)> {
        vec![
            ("grant_type", GRANT_TYPE.to_string()),
            ("client_id", self.client_id.clone()),
            ("client_secret", self.client_secret.clone()),
        ]
    }

    /// Replaces the cached token, expiring `expires_in` seconds after `now`
    ///
    /// # Errors
    /// Returns [`AppError::InvalidInput`] if the expiry is not representable;
    /// the cached token and expiry are left unchanged.
    pub fn store_token(
        &mut self,
        access_token: String,
        expires_in: i64,
        now: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let expiry_date = TimeDelta::try_seconds(expires_in)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                AppError::InvalidInput(format!("token lifetime out of range: {expires_in}"))
            })?;
        self.access_token = access_token;
        self.expiry_date = expiry_date;
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field(
                "access_token",
                &if self.access_token.is_empty() { "" } else { "<redacted>" },
            )
            .field("expiry_date", &self.expiry_date)
            .finish()
    }
}

/// Body returned by the token endpoint
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct TokenResponse {
    /// Bearer token
    pub access_token: String,
    /// Token type (always "Bearer")
    #[serde(default)]
    pub token_type: String,
    /// Lifetime of the token in seconds
    pub expires_in: i64,
}
