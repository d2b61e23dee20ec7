/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::{MAX_SEARCH_LIMIT, MAX_SEARCH_RADIUS};
use crate::error::AppError;
use crate::model::business::Coordinates;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Ordering applied to search results
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    /// Yelp's default relevance ordering
    #[default]
    BestMatch,
    /// Highest rated first
    Rating,
    /// Most reviewed first
    ReviewCount,
    /// Closest first
    Distance,
}

impl SortBy {
    /// Wire value of the ordering
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::BestMatch => "best_match",
            SortBy::Rating => "rating",
            SortBy::ReviewCount => "review_count",
            SortBy::Distance => "distance",
        }
    }
}

/// Price tier filter, from `$` to `$$$$`
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum PriceTier {
    /// `$`
    #[serde(rename = "1")]
    Inexpensive,
    /// `$$`
    #[serde(rename = "2")]
    Moderate,
    /// `$$$`
    #[serde(rename = "3")]
    Pricey,
    /// `$$$$`
    #[serde(rename = "4")]
    UltraHighEnd,
}

impl PriceTier {
    /// Wire value of the tier (`1` to `4`)
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceTier::Inexpensive => "1",
            PriceTier::Moderate => "2",
            PriceTier::Pricey => "3",
            PriceTier::UltraHighEnd => "4",
        }
    }
}

/// Query parameters for a business search
///
/// Either a location string or coordinates must be set. Build one with
/// [`SearchOptions::with_location`] or [`SearchOptions::with_coordinates`] and
/// chain the optional filters:
///
/// ```
/// use yelp_client::model::requests::{SearchOptions, SortBy};
///
/// let options = SearchOptions::with_location("Lisbon")
///     .term("pastel de nata")
///     .sort_by(SortBy::Rating)
///     .limit(10);
/// assert!(options.is_valid());
/// ```
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct SearchOptions {
    /// Search term, e.g. `food` or a business name
    pub term: Option<String>,
    /// Free-form location, e.g. `New York City` or an address
    pub location: Option<String>,
    /// Point to search around
    pub coordinates: Option<Coordinates>,
    /// Search radius in metres
    pub radius: Option<u32>,
    /// Category aliases to filter by
    pub categories: Vec<String>,
    /// Locale, e.g. `en_US`
    pub locale: Option<String>,
    /// Number of results to return
    pub limit: Option<u32>,
    /// Offset into the result list
    pub offset: Option<u32>,
    /// Result ordering
    pub sort_by: Option<SortBy>,
    /// Price tiers to include
    pub price: Vec<PriceTier>,
    /// Only businesses open right now
    pub open_now: Option<bool>,
    /// Only businesses open at this unix time
    pub open_at: Option<i64>,
    /// Extra attribute filters, e.g. `hot_and_new`
    pub attributes: Vec<String>,
}

impl SearchOptions {
    /// Options searching around a free-form location
    #[must_use]
    pub fn with_location(location: impl Into<String>) -> Self {
        Self {
            location: Some(location.into()),
            ..Self::default()
        }
    }

    /// Options searching around a point
    #[must_use]
    pub fn with_coordinates(latitude: f64, longitude: f64) -> Self {
        Self {
            coordinates: Some(Coordinates::new(latitude, longitude)),
            ..Self::default()
        }
    }

    /// Sets the search term
    #[must_use]
    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    /// Sets the search radius in metres
    #[must_use]
    pub fn radius(mut self, radius: u32) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Adds a category alias filter
    #[must_use]
    pub fn category(mut self, alias: impl Into<String>) -> Self {
        self.categories.push(alias.into());
        self
    }

    /// Sets the locale
    #[must_use]
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Sets the number of results
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the result offset
    #[must_use]
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets the ordering
    #[must_use]
    pub fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    /// Adds a price tier
    #[must_use]
    pub fn price(mut self, tier: PriceTier) -> Self {
        if !self.price.contains(&tier) {
            self.price.push(tier);
        }
        self
    }

    /// Restricts results to businesses open now
    #[must_use]
    pub fn open_now(mut self, open_now: bool) -> Self {
        self.open_now = Some(open_now);
        self
    }

    /// Restricts results to businesses open at a unix time
    #[must_use]
    pub fn open_at(mut self, timestamp: i64) -> Self {
        self.open_at = Some(timestamp);
        self
    }

    /// Adds an attribute filter
    #[must_use]
    pub fn attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attributes.push(attribute.into());
        self
    }

    /// Checks the options, describing the first problem found
    ///
    /// # Errors
    /// Returns [`AppError::InvalidInput`] when neither a location nor
    /// coordinates are set, or when a filter is outside the range the API
    /// accepts.
    pub fn validate(&self) -> Result<(), AppError> {
        let has_location = self
            .location
            .as_deref()
            .is_some_and(|l| !l.trim().is_empty());
        if !has_location && self.coordinates.is_none() {
            return Err(AppError::InvalidInput(
                "search options require a location or coordinates".to_string(),
            ));
        }
        if let Some(limit) = self.limit.filter(|l| *l > MAX_SEARCH_LIMIT) {
            return Err(AppError::InvalidInput(format!(
                "search limit {limit} exceeds maximum of {MAX_SEARCH_LIMIT}"
            )));
        }
        if let Some(radius) = self.radius.filter(|r| *r > MAX_SEARCH_RADIUS) {
            return Err(AppError::InvalidInput(format!(
                "search radius {radius} exceeds maximum of {MAX_SEARCH_RADIUS} metres"
            )));
        }
        if self.open_now == Some(true) && self.open_at.is_some() {
            return Err(AppError::InvalidInput(
                "open_now and open_at cannot be combined".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether [`SearchOptions::validate`] passes
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Query pairs for the search endpoint, only for parameters that are set
    #[must_use]
    pub fn url_values(&self) -> Vec<(&'static str, String)> {
        let mut values = Vec::new();
        if let Some(term) = &self.term {
            values.push(("term", term.clone()));
        }
        if let Some(location) = &self.location {
            values.push(("location", location.clone()));
        }
        if let Some(coordinates) = &self.coordinates {
            values.push(("latitude", coordinates.latitude.to_string()));
            values.push(("longitude", coordinates.longitude.to_string()));
        }
        if let Some(radius) = self.radius {
            values.push(("radius", radius.to_string()));
        }
        if !self.categories.is_empty() {
            values.push(("categories", self.categories.join(",")));
        }
        if let Some(locale) = &self.locale {
            values.push(("locale", locale.clone()));
        }
        if let Some(limit) = self.limit {
            values.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            values.push(("offset", offset.to_string()));
        }
        if let Some(sort_by) = self.sort_by {
            values.push(("sort_by", sort_by.as_str().to_string()));
        }
        if !self.price.is_empty() {
            let tiers: Vec<&str> = self.price.iter().map(PriceTier::as_str).collect();
            values.push(("price", tiers.join(",")));
        }
        if let Some(open_now) = self.open_now {
            values.push(("open_now", open_now.to_string()));
        }
        if let Some(open_at) = self.open_at {
            values.push(("open_at", open_at.to_string()));
        }
        if !self.attributes.is_empty() {
            values.push(("attributes", self.attributes.join(",")));
        }
        values
    }
}
