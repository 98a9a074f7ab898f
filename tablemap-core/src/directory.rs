//! The restaurant directory — ordered, read-only after construction.
//!
//! Ships with the built-in San Marcos dataset and can alternatively be
//! loaded from a TOML file so the data can be swapped without recompiling.
//! Loading validates what the type system cannot: unique IDs, in-range
//! coordinates, non-empty names.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Cuisine, CuisineFilter, Restaurant, RestaurantId};

/// The complete restaurant collection, in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Directory {
    restaurants: Vec<Restaurant>,
}

impl Directory {
    /// Load a directory from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, DirectoryError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| DirectoryError::Read { path: path.display().to_string(), source })?;
        Self::from_toml(&content)
    }

    /// Parse and validate a directory from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, DirectoryError> {
        let directory: Directory = toml::from_str(content)?;
        directory.validate()
    }

    /// Serialize the directory to TOML.
    pub fn to_toml(&self) -> Result<String, DirectoryError> {
        toml::to_string_pretty(self).map_err(|e| DirectoryError::Serialize(e.to_string()))
    }

    fn validate(self) -> Result<Self, DirectoryError> {
        let mut seen = HashSet::new();
        for r in &self.restaurants {
            if r.name.trim().is_empty() {
                return Err(DirectoryError::EmptyName { id: r.id.clone() });
            }
            if !seen.insert(r.id.clone()) {
                return Err(DirectoryError::DuplicateId { id: r.id.clone() });
            }
            r.coordinate()
                .validate()
                .map_err(|source| DirectoryError::Coordinate { id: r.id.clone(), source })?;
        }
        Ok(self)
    }

    /// The records passing `filter`, original order preserved.
    ///
    /// `All` returns every record unchanged; `Only(c)` returns exactly the
    /// records tagged `c`. Pure, no allocation beyond the reference vec.
    pub fn filtered(&self, filter: CuisineFilter) -> Vec<&Restaurant> {
        self.restaurants
            .iter()
            .filter(|r| filter.matches(r.cuisine))
            .collect()
    }

    pub fn get(&self, id: &RestaurantId) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| &r.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Restaurant> {
        self.restaurants.iter()
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    /// The built-in San Marcos, TX dataset.
    pub fn san_marcos() -> Self {
        fn entry(
            id: &str,
            name: &str,
            address: &str,
            description: &str,
            lat: f64,
            lon: f64,
            image: &str,
            cuisine: Cuisine,
        ) -> Restaurant {
            Restaurant {
                id: RestaurantId::new(id),
                name: name.into(),
                address: address.into(),
                description: description.into(),
                lat,
                lon,
                image: image.into(),
                cuisine,
            }
        }

        Self {
            restaurants: vec![
                entry(
                    "los-jambados-tacos",
                    "Los Jambados Tacos",
                    "302 Linda Dr, San Marcos, TX 78666",
                    "A local taco truck known for its authentic Mexican street tacos, \
                     flavorful meats, and casual atmosphere.",
                    29.8725,
                    -97.9406,
                    "tacos",
                    Cuisine::Mexican,
                ),
                entry(
                    "garcias",
                    "Garcia's",
                    "403 S LBJ Dr, San Marcos, TX 78666",
                    "A well-loved Tex-Mex restaurant serving classic dishes like enchiladas, \
                     fajitas, and breakfast tacos in a cozy setting.",
                    29.8776,
                    -97.9409,
                    "enchiladas",
                    Cuisine::Mexican,
                ),
                entry(
                    "guss-fried-chicken",
                    "Gus's World Famous Fried Chicken",
                    "110 E Martin Luther King Dr Suite 102, San Marcos, TX 78666",
                    "A popular chain specializing in crispy, spicy fried chicken with \
                     Southern-style sides like mac and cheese and baked beans.",
                    29.8796,
                    -97.9427,
                    "chicken",
                    Cuisine::Southern,
                ),
                entry(
                    "toro-ramen-poke-barn",
                    "Toro Ramen and Poke Barn",
                    "700 N LBJ Dr Suite 114, San Marcos, TX 78666",
                    "A modern eatery offering Japanese ramen bowls, poke bowls, and fusion \
                     dishes with fresh ingredients.",
                    29.8890,
                    -97.9418,
                    "poke",
                    Cuisine::Asian,
                ),
                entry(
                    "xian-sushi-noodle",
                    "Xian Sushi and Noodle",
                    "200 Springtown Way Suite 138, San Marcos, TX 78666",
                    "A restaurant featuring hand-pulled noodles, fresh sushi, and a mix of \
                     Chinese and Japanese-inspired dishes in a casual dining setting.",
                    29.8924,
                    -97.9225,
                    "noodles",
                    Cuisine::Asian,
                ),
            ],
        }
    }
}

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("read directory file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("parse directory TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("serialize directory: {0}")]
    Serialize(String),

    #[error("duplicate restaurant id {id}")]
    DuplicateId { id: RestaurantId },

    #[error("restaurant {id} has an empty name")]
    EmptyName { id: RestaurantId },

    #[error("restaurant {id}: {source}")]
    Coordinate {
        id: RestaurantId,
        source: crate::domain::GeoError,
    },
}
