//! Coordinates, spans, and map viewport regions.
//!
//! A `Region` is a center point plus a zoom span, mirroring the viewport
//! model of the platform map widgets this data is handed to.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A WGS84 point, degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Range check against the valid degree intervals.
    pub fn validate(self) -> Result<Self, GeoError> {
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(GeoError::LatitudeOutOfRange(self.lat));
        }
        if !(-180.0..=180.0).contains(&self.lon) {
            return Err(GeoError::LongitudeOutOfRange(self.lon));
        }
        Ok(self)
    }
}

/// Zoom extent of a viewport, degrees in each axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub lat_delta: f64,
    pub lon_delta: f64,
}

impl Span {
    pub const fn new(lat_delta: f64, lon_delta: f64) -> Self {
        Self { lat_delta, lon_delta }
    }
}

/// A geographic viewport: center point plus zoom span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub center: Coordinate,
    pub span: Span,
}

impl Region {
    pub const fn new(center: Coordinate, span: Span) -> Self {
        Self { center, span }
    }

    /// Edges as (south, west, north, east).
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let half_lat = self.span.lat_delta / 2.0;
        let half_lon = self.span.lon_delta / 2.0;
        (
            self.center.lat - half_lat,
            self.center.lon - half_lon,
            self.center.lat + half_lat,
            self.center.lon + half_lon,
        )
    }

    pub fn contains(&self, point: Coordinate) -> bool {
        let (south, west, north, east) = self.bounds();
        point.lat >= south && point.lat <= north && point.lon >= west && point.lon <= east
    }

    /// Smallest region covering `points`, padded 20%, floored at `min_span`.
    ///
    /// Returns `None` for an empty slice: there is nothing to frame.
    pub fn fit(points: &[Coordinate], min_span: Span) -> Option<Region> {
        let first = points.first()?;
        let mut south = first.lat;
        let mut north = first.lat;
        let mut west = first.lon;
        let mut east = first.lon;
        for p in &points[1..] {
            south = south.min(p.lat);
            north = north.max(p.lat);
            west = west.min(p.lon);
            east = east.max(p.lon);
        }

        let center = Coordinate::new((south + north) / 2.0, (west + east) / 2.0);
        let span = Span::new(
            ((north - south) * 1.2).max(min_span.lat_delta),
            ((east - west) * 1.2).max(min_span.lon_delta),
        );
        Some(Region::new(center, span))
    }
}

#[derive(Debug, Error)]
pub enum GeoError {
    #[error("latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}
