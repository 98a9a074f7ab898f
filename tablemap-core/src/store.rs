//! Unidirectional store: state snapshots in, state snapshots out.
//!
//! All interactive state lives in `Model`. User interactions become
//! `Action`s, and `update` is the only place a new snapshot is produced.
//! Derived data (the filtered list, the pin set) is recomputed by the scene
//! renderer from the snapshot, never stored.

use serde::{Deserialize, Serialize};

use crate::directory::Directory;
use crate::domain::{Coordinate, CuisineFilter, Region, RestaurantId, Span};

/// Default listing viewport: downtown San Marcos.
pub const TOWN_CENTER: Coordinate = Coordinate::new(29.8822, -97.9377);

/// Listing map zoom span.
pub const LISTING_SPAN: Span = Span::new(0.05, 0.05);

/// Detail map zoom span, wider than the listing view.
pub const DETAIL_SPAN: Span = Span::new(0.20, 0.20);

/// Which screen is showing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Screen {
    Listing,
    /// A detail screen snapshots its region once at navigation time and
    /// keeps it until the user navigates away.
    Detail { id: RestaurantId, region: Region },
}

/// One immutable state snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub screen: Screen,
    pub filter: CuisineFilter,
    /// Row cursor into the filtered listing.
    pub cursor: usize,
    pub listing_region: Region,
}

impl Model {
    pub fn new() -> Self {
        Self {
            screen: Screen::Listing,
            filter: CuisineFilter::All,
            cursor: 0,
            listing_region: Region::new(TOWN_CENTER, LISTING_SPAN),
        }
    }

    /// Region to snapshot when navigating to a restaurant's detail screen.
    pub fn detail_region_for(coordinate: Coordinate) -> Region {
        Region::new(coordinate, DETAIL_SPAN)
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

/// A user interaction, ready to be folded into the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    SetFilter(CuisineFilter),
    CursorUp,
    CursorDown,
    /// Navigate to the detail screen for the cursor row.
    Open,
    /// Return to the listing, preserving filter and viewport.
    Back,
    /// Recenter the listing map over the current filtered pins.
    FitViewport,
}

/// The transition function. Pure: same snapshot + action + directory,
/// same result.
pub fn update(model: Model, action: Action, directory: &Directory) -> Model {
    match action {
        Action::SetFilter(filter) => Model {
            filter,
            // The filtered list changed shape under the cursor.
            cursor: 0,
            // The viewport stays put; FitViewport recenters explicitly.
            ..model
        },
        Action::CursorUp => Model {
            cursor: model.cursor.saturating_sub(1),
            ..model
        },
        Action::CursorDown => {
            let row_count = directory.filtered(model.filter).len();
            let cursor = if model.cursor + 1 < row_count {
                model.cursor + 1
            } else {
                model.cursor
            };
            Model { cursor, ..model }
        }
        Action::Open => {
            let filtered = directory.filtered(model.filter);
            match filtered.get(model.cursor) {
                Some(restaurant) => Model {
                    screen: Screen::Detail {
                        id: restaurant.id.clone(),
                        region: Model::detail_region_for(restaurant.coordinate()),
                    },
                    ..model
                },
                None => model,
            }
        }
        Action::Back => Model {
            screen: Screen::Listing,
            ..model
        },
        Action::FitViewport => {
            let points: Vec<Coordinate> = directory
                .filtered(model.filter)
                .iter()
                .map(|r| r.coordinate())
                .collect();
            match Region::fit(&points, LISTING_SPAN) {
                Some(region) => Model {
                    listing_region: region,
                    ..model
                },
                None => model,
            }
        }
    }
}
