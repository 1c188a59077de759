// In: src/lib.rs

//! Pokedex Aggregation Engine
//!
//! Turns catalog identifiers into localized creature records and evolution
//! chains. Each call fans out over the catalog's sub-resources concurrently,
//! tolerates failures item by item, and holds no state between calls.

// --- MODULE DECLARATIONS ---
// This declares the module hierarchy for the crate.
pub mod aggregate;
pub mod catalog;
pub mod config;
pub mod cursor;
pub mod errors;
pub mod evolution;
pub mod identifier;
pub mod joins;
pub mod localization;
pub mod mcp_interface;
pub mod pokemon;
pub mod versions;

#[cfg(test)]
mod tests;

// --- PUBLIC API RE-EXPORTS ---
// This section defines the public-facing API of the `pokedex-engine` crate,
// making it easy for users to import the most important types directly.

// --- From the `schema` crate ---
// Re-export the raw catalog resources and static enums.
pub use schema::{
    Ability, ChainLink, EvolutionChain, EvolutionDetail, GameIndex, LocationArea, NamedResource,
    Pokemon, PokemonSpecies, PokemonType, StatKind,
};

// --- From this crate's modules (`src/`) ---

// Orchestration entry points.
pub use aggregate::Aggregator;
pub use cursor::PaginationCursor;
pub use evolution::{EvolutionSequence, EvolutionStage};

// Catalog access.
pub use catalog::{CatalogClient, HttpCatalog, Locator, MemoryCatalog};

// Records and their parts.
pub use identifier::Identifier;
pub use localization::LocalizedText;
pub use pokemon::{AbilityEntry, CreatureRecord, EncounterLocation, StatVector, VersionIndexEntry};

pub use config::EngineConfig;

// Crate-specific error and result types.
pub use errors::{CatalogError, CatalogResult, EngineError, EngineResult};
