/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Yelp Client Prelude
//!
//! Re-exports the types needed for most interactions with the Yelp API.
//!
//! ## Usage
//!
//! ```rust
//! use yelp_client::prelude::*;
//!
//! let config = Config::with_credentials("client-id", "client-secret");
//! let credentials = config.credentials();
//! assert!(!credentials.is_valid());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Yelp API client
pub use crate::application::config::{Config, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT AND AUTHENTICATION
// ============================================================================

/// Client and token management
pub use crate::application::auth::Auth;
pub use crate::application::client::Client;

/// Business service trait
pub use crate::application::interfaces::business::BusinessService;

/// Authenticated transport
pub use crate::model::http::HttpClient;

// ============================================================================
// MODELS
// ============================================================================

/// Credentials and token models
pub use crate::model::auth::{Credentials, TokenResponse};

/// Business models
pub use crate::model::business::{Business, Category, Coordinates, Location};

/// Search request and response models
pub use crate::model::requests::{PriceTier, SearchOptions, SortBy};
pub use crate::model::responses::{Region, SearchResults};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use chrono::{DateTime, Utc};
pub use reqwest::Method;
pub use tracing::{debug, error, info, warn};
