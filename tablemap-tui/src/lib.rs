//! TableMap TUI — two-screen terminal interface for the restaurant guide.
//!
//! Screens:
//! 1. Listing — title, cuisine filter, restaurant list, map with pins
//! 2. Detail — photo placeholder, address, description, zoomed map
//!
//! Overlays: welcome, cuisine menu, help.

pub mod app;
pub mod input;
pub mod persistence;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use input::handle_key;
