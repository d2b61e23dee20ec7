/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Yelp Client
//!
//! Asynchronous client for the Yelp Fusion API.
//!
//! The client exchanges the application's client id and secret for a bearer
//! token, keeps that token cached until it expires, and exposes the business
//! search and business lookup endpoints as typed calls.
//!
//! ## Usage
//!
//! ```ignore
//! use yelp_client::prelude::*;
//!
//! let client = Client::from_config(Config::new())?;
//! let options = SearchOptions::with_location("San Francisco").term("coffee");
//! let results = client.search(&options).await?;
//! for business in &results.businesses {
//!     println!("{} ({})", business.name, business.rating);
//! }
//! ```

/// Application layer: authentication, configuration and the public client
pub mod application;
/// Global constants (hosts, paths, user agent)
pub mod constants;
/// Crate error type
pub mod error;
/// Wire models and the authenticated HTTP transport
pub mod model;
/// Convenience re-exports
pub mod prelude;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
