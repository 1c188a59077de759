// Pokedex Catalog Schema - Raw resource definitions
// This crate mirrors the subset of the catalog's JSON resources that the
// aggregation engine reads. Everything here is read-only wire data; the
// engine turns it into localized records.

// Re-export the main types
pub use ability_data::*;
pub use common::*;
pub use location_data::*;
pub use pokemon_data::*;
pub use pokemon_types::*;
pub use species_data::*;

pub mod ability_data;
pub mod common;
pub mod location_data;
pub mod pokemon_data;
pub mod pokemon_types;
pub mod species_data;
