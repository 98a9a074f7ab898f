//! TableMap Core — the toolkit-agnostic heart of the restaurant guide.
//!
//! This crate contains everything below the terminal:
//! - Domain types (cuisines, restaurants, coordinates, viewport regions)
//! - The restaurant directory with its built-in San Marcos dataset
//! - The cuisine filter contract
//! - A unidirectional store: state snapshots + pure `update` function
//! - A pure scene renderer producing plain-data view descriptions

pub mod directory;
pub mod domain;
pub mod store;
pub mod view;
