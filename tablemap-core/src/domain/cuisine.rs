//! Cuisine categories and the filter selection.
//!
//! `Cuisine` is the closed set of labels a restaurant can carry. The "All"
//! menu entry is not a cuisine: it lives in `CuisineFilter`, so no record can
//! ever hold the sentinel.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed category label used to tag restaurant records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cuisine {
    Mexican,
    Asian,
    Southern,
}

impl Cuisine {
    pub const ALL_CASES: [Cuisine; 3] = [Cuisine::Mexican, Cuisine::Asian, Cuisine::Southern];

    /// Menu/display label.
    pub fn label(self) -> &'static str {
        match self {
            Cuisine::Mexican => "Mexican Food",
            Cuisine::Asian => "Asian Food",
            Cuisine::Southern => "Southern/Comfort Food",
        }
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The menu selection: either the sentinel "All" or one specific cuisine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CuisineFilter {
    All,
    Only(Cuisine),
}

impl CuisineFilter {
    /// The four menu entries, in display order.
    pub const OPTIONS: [CuisineFilter; 4] = [
        CuisineFilter::All,
        CuisineFilter::Only(Cuisine::Mexican),
        CuisineFilter::Only(Cuisine::Asian),
        CuisineFilter::Only(Cuisine::Southern),
    ];

    /// Whether a record tagged `cuisine` passes this filter.
    pub fn matches(self, cuisine: Cuisine) -> bool {
        match self {
            CuisineFilter::All => true,
            CuisineFilter::Only(c) => c == cuisine,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CuisineFilter::All => "All",
            CuisineFilter::Only(c) => c.label(),
        }
    }
}

impl Default for CuisineFilter {
    fn default() -> Self {
        CuisineFilter::All
    }
}

impl fmt::Display for CuisineFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
