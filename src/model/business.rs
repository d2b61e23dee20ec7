/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Deserializer, Serialize};

/// Decodes a JSON `null` as the default value of the field type
pub(crate) fn deserialize_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let opt = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// Category a business is listed under
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Category {
    /// Machine-readable alias, e.g. `coffee`
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub alias: String,
    /// Human-readable title, e.g. `Coffee & Tea`
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub title: String,
}

/// Geographic point
#[derive(DebugPretty, DisplaySimple, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub latitude: f64,
    /// Longitude in decimal degrees
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub longitude: f64,
}

impl Coordinates {
    /// Creates a new point
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Postal address of a business
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Location {
    /// Street address
    pub address1: Option<String>,
    /// Street address, line 2
    pub address2: Option<String>,
    /// Street address, line 3
    pub address3: Option<String>,
    /// City
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub city: String,
    /// Postal code
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub zip_code: String,
    /// ISO 3166-1 alpha-2 country code
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub country: String,
    /// ISO 3166-2 state code
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub state: String,
    /// Address lines formatted for display in the business's country
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub display_address: Vec<String>,
    /// Cross streets, when known
    pub cross_streets: Option<String>,
}

/// A business as returned by the Yelp API
///
/// Fields absent from the payload, or sent as `null`, decode to their default
/// value. The `display_phone` and `distance` fields are only populated by
/// searches.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Business {
    /// Unique Yelp identifier
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub id: String,
    /// Business name
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub name: String,
    /// URL of the main photo
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub image_url: String,
    /// Whether the owner has claimed the listing
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub is_claimed: bool,
    /// Whether the business has permanently closed
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub is_closed: bool,
    /// Yelp page of the business
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub url: String,
    /// Price tier, one to four `$` signs
    pub price: Option<String>,
    /// Rating from 1 to 5 in 0.5 steps
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub rating: f64,
    /// Number of reviews
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub review_count: i64,
    /// Phone number in E.164 format
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub phone: String,
    /// Photo URLs (lookup only, up to three)
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub photos: Vec<String>,
    /// Categories the business is listed under
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub categories: Vec<Category>,
    /// Position of the business
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub coordinates: Coordinates,
    /// Postal address
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub location: Location,
    /// Supported transactions, e.g. `pickup` or `delivery`
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub transactions: Vec<String>,
    /// Phone number formatted for display (search only)
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub display_phone: String,
    /// Distance in metres from the searched location (search only)
    pub distance: Option<f64>,
}

impl Business {
    /// Checks whether the business supports the given transaction type
    #[must_use]
    pub fn supports_transaction(&self, transaction: &str) -> bool {
        self.transactions.iter().any(|t| t == transaction)
    }
}
