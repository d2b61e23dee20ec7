/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::model::business::{Business, Coordinates, deserialize_null_as_default};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Envelope returned by the search endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct SearchResults {
    /// Matching businesses, in the order the API returned them
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub businesses: Vec<Business>,
    /// Total number of matches, which may exceed `businesses.len()`
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub total: i64,
    /// Region the search was resolved to
    pub region: Option<Region>,
}

impl SearchResults {
    /// Whether the search returned no businesses
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.businesses.is_empty()
    }
}

/// Region a search was resolved to
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Region {
    /// Centre of the searched area
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub center: Coordinates,
}
