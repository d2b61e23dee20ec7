/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::auth::Auth;
use crate::error::AppError;
use crate::model::auth::Credentials;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Authenticated transport for the Yelp API
///
/// Resolves paths against the configured base URL, attaches the bearer token
/// (fetching a new one when the cached token is missing or expired) and
/// decodes successful responses.
pub struct HttpClient {
    auth: Arc<Auth>,
    http_client: Client,
    base_url: String,
}

impl HttpClient {
    /// Creates a transport talking to `base_url`
    ///
    /// # Arguments
    /// * `http_client` - Underlying reqwest client; timeouts and proxies are taken from it
    /// * `credentials` - Client credentials used for the token exchange
    /// * `base_url` - Scheme and host of the API, e.g. `https://api.yelp.com`
    pub fn new(http_client: Client, credentials: Credentials, base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        let auth = Arc::new(Auth::new(
            http_client.clone(),
            base_url.clone(),
            credentials,
        ));
        Self {
            auth,
            http_client,
            base_url,
        }
    }

    /// Resolves an API path against the base URL
    ///
    /// # Errors
    /// Returns [`AppError::InvalidInput`] if the resulting URL does not parse.
    pub fn url_for(&self, path: &str) -> Result<Url, AppError> {
        let raw = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        Url::parse(&raw).map_err(|e| AppError::InvalidInput(format!("invalid url {raw}: {e}")))
    }

    /// Makes an authenticated GET request and decodes the JSON body
    pub async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, AppError> {
        self.authed_do(Method::GET, url, None::<&()>, &[]).await
    }

    /// Makes an authenticated request and decodes the JSON body into `T`
    ///
    /// If the cached token is missing or expired a new one is fetched first;
    /// a failed fetch is returned without sending the request. Caller headers
    /// are applied before `Authorization`, which always carries the bearer
    /// token. Any status other than 200 is returned as
    /// [`AppError::Unexpected`] without decoding the body.
    pub async fn authed_do<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
        headers: &[(&str, &str)],
    ) -> Result<T, AppError> {
        let token = self.auth.access_token().await?;

        debug!("{} {}", method, url);

        let mut header_map = HeaderMap::new();
        for (name, value) in headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| AppError::InvalidInput(format!("invalid header name {name}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| AppError::InvalidInput(format!("invalid value for {name}: {e}")))?;
            header_map.insert(name, value);
        }
        let mut bearer = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| AppError::InvalidInput(format!("invalid access token: {e}")))?;
        bearer.set_sensitive(true);
        header_map.insert(AUTHORIZATION, bearer);

        let mut request = self.http_client.request(method, url).headers(header_map);
        if let Some(b) = body {
            request = request.json(b);
        }

        let response = request.send().await?;
        parse_response(response).await
    }

    /// Fetches a new token regardless of the cached one
    pub async fn fetch_token(&self) -> Result<(), AppError> {
        self.auth.fetch_token().await
    }

    /// Gets Auth reference
    pub fn auth(&self) -> &Auth {
        &self.auth
    }
}

/// Posts a form and decodes the JSON body into `T`
///
/// Used for the token exchange, which is the only unauthenticated call.
///
/// # Arguments
/// * `client` - The HTTP client to use for the request
/// * `url` - Full URL to post to
/// * `form` - Form fields, sent as `application/x-www-form-urlencoded`
pub async fn post_form<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    form: &[(&str, String)],
) -> Result<T, AppError> {
    debug!("POST {}", url);
    let response = client.post(url).form(form).send().await?;
    parse_response(response).await
}

/// Checks the status and decodes the body of a response
async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let status = response.status();
    debug!("Response status: {}", status);

    if status != StatusCode::OK {
        discard_body(response).await;
        return Err(AppError::Unexpected(status));
    }

    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Drains the body of a failed response so the connection can be released
///
/// Failing to read it does not change the outcome of the call, so the error is
/// only logged.
async fn discard_body(response: Response) {
    let status = response.status();
    match response.text().await {
        Ok(body) => error!("Request failed with status {}: {}", status, body),
        Err(e) => warn!("Failed to read body of {} response: {}", status, e),
    }
}
