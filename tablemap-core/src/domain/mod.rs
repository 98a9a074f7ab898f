//! Domain types for TableMap

pub mod cuisine;
pub mod geo;
pub mod restaurant;

pub use cuisine::{Cuisine, CuisineFilter};
pub use geo::{Coordinate, GeoError, Region, Span};
pub use restaurant::{Restaurant, RestaurantId};
