//! The restaurant record and its identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::cuisine::Cuisine;
use super::geo::Coordinate;

/// Stable slug identifying a restaurant within a directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestaurantId(pub String);

impl RestaurantId {
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An immutable restaurant record. Created once at directory construction,
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub address: String,
    pub description: String,
    pub lat: f64,
    pub lon: f64,
    /// Asset name of the photo in the original app; shown as a captioned
    /// placeholder in the terminal.
    pub image: String,
    pub cuisine: Cuisine,
}

impl Restaurant {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }
}
