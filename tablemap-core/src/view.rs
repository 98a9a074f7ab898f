//! Pure scene rendering: (snapshot, directory) → plain-data view description.
//!
//! The terminal layer consumes a `Scene` and maps it onto widgets. Nothing
//! in here knows about ratatui; the boundary carries only filtered records,
//! pins, and viewport regions as data.

use crate::directory::Directory;
use crate::domain::{Coordinate, Cuisine, Region, RestaurantId};
use crate::store::{Model, Screen};

pub const LISTING_TITLE: &str = "San Marcos Restaurants";

/// A labeled marker on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Pin {
    pub label: String,
    pub coordinate: Coordinate,
}

/// One row of the listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRow {
    pub id: RestaurantId,
    pub name: String,
    pub address: String,
    pub image: String,
    pub cuisine: Cuisine,
}

/// The listing screen as data.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingView {
    pub title: &'static str,
    pub filter_label: &'static str,
    pub rows: Vec<ListingRow>,
    pub cursor: usize,
    pub pins: Vec<Pin>,
    pub region: Region,
}

/// The detail screen as data.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub name: String,
    pub address: String,
    pub description: String,
    pub image: String,
    pub region: Region,
    pub pin: Pin,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Scene {
    Listing(ListingView),
    Detail(DetailView),
}

/// Render the current snapshot. Rows and pins derive from the same filtered
/// pass, so list and map can never disagree.
pub fn scene(model: &Model, directory: &Directory) -> Scene {
    match &model.screen {
        Screen::Listing => {
            let filtered = directory.filtered(model.filter);
            let rows = filtered
                .iter()
                .map(|r| ListingRow {
                    id: r.id.clone(),
                    name: r.name.clone(),
                    address: r.address.clone(),
                    image: r.image.clone(),
                    cuisine: r.cuisine,
                })
                .collect();
            let pins = filtered.iter().map(|r| pin_for(r.name.clone(), r.coordinate())).collect();
            Scene::Listing(ListingView {
                title: LISTING_TITLE,
                filter_label: model.filter.label(),
                rows,
                cursor: model.cursor,
                pins,
                region: model.listing_region,
            })
        }
        Screen::Detail { id, region } => {
            // The id was taken from the directory when the screen was
            // opened; a missing record here means the directory changed
            // underneath us, which the read-only contract rules out.
            let restaurant = directory
                .get(id)
                .unwrap_or_else(|| panic!("detail screen references unknown id {id}"));
            Scene::Detail(DetailView {
                name: restaurant.name.clone(),
                address: restaurant.address.clone(),
                description: restaurant.description.clone(),
                image: restaurant.image.clone(),
                region: *region,
                pin: pin_for(restaurant.name.clone(), restaurant.coordinate()),
            })
        }
    }
}

fn pin_for(label: String, coordinate: Coordinate) -> Pin {
    Pin { label, coordinate }
}
