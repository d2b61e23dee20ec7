/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::business::Business;
use crate::model::requests::SearchOptions;
use crate::model::responses::SearchResults;
use async_trait::async_trait;

/// Interface for the business endpoints
///
/// Implemented by [`crate::application::client::Client`]. Code that only needs
/// to search or look up businesses can depend on this trait and be handed a
/// test double instead of a live client.
#[async_trait]
pub trait BusinessService: Send + Sync {
    /// Searches businesses matching the given options
    ///
    /// The options are validated before any request is made.
    async fn search(&self, options: &SearchOptions) -> Result<SearchResults, AppError>;

    /// Gets a single business by its Yelp id
    async fn business_by_id(&self, business_id: &str) -> Result<Business, AppError>;
}
