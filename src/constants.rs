/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// Base URL for the Yelp API
pub const API_HOST: &str = "https://api.yelp.com";
/// Path used to search for businesses
pub const SEARCH_PATH: &str = "/v3/businesses/search";
/// Path prefix used to look up a business by its id
pub const BUSINESS_PATH: &str = "/v3/businesses";
/// Path used to exchange client credentials for a bearer token
pub const TOKEN_PATH: &str = "/oauth2/token";
/// OAuth2 grant type sent to the token endpoint
pub const GRANT_TYPE: &str = "client_credentials";
/// User agent string used in HTTP requests to identify this client to the Yelp API
pub const USER_AGENT: &str = "yelp-client/0.1.0";
/// Default timeout in seconds for REST requests built from [`crate::application::config::Config`]
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Maximum number of results the search endpoint returns per request
pub const MAX_SEARCH_LIMIT: u32 = 50;
/// Maximum search radius accepted by the search endpoint, in metres
pub const MAX_SEARCH_RADIUS: u32 = 40_000;
