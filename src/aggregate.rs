//! Batch aggregation of creature records.
//!
//! Each identifier runs its own pipeline: the primary record first, then the
//! species, ability join, encounter join and version extraction together.
//! Pipelines share nothing; the batch waits for all of them, drops the ones
//! that failed a required fetch, and keeps input order unless a sort version
//! is given.

use crate::catalog::{fetch_resource, CatalogClient, HttpCatalog, LimitedCatalog, Locator};
use crate::config::EngineConfig;
use crate::cursor::PaginationCursor;
use crate::errors::{CatalogResult, EngineResult};
use crate::evolution::{self, EvolutionSequence};
use crate::identifier::Identifier;
use crate::joins;
use crate::localization;
use crate::pokemon::{type_labels, CreatureRecord, EncounterLocation, StatVector};
use crate::versions;
use futures::stream::{self, StreamExt};
use schema::{LocationAreaEncounter, Pokemon, PokemonSpecies};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Entry point for the presentation layer. Holds no per-request state, so one
/// instance can serve any number of concurrent calls.
#[derive(Clone)]
pub struct Aggregator {
    client: Arc<dyn CatalogClient>,
    config: EngineConfig,
}

impl Aggregator {
    /// Fails only if `config` is invalid. Every fetch made through this
    /// aggregator (and its clones) shares one `max_concurrency` ceiling.
    pub fn new(client: Arc<dyn CatalogClient>, config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        let client = Arc::new(LimitedCatalog::new(client, config.max_concurrency));
        Ok(Self { client, config })
    }

    /// An aggregator talking to the live catalog at `config.base_url`.
    pub fn with_http(config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        let client = HttpCatalog::from_config(&config)?;
        Self::new(Arc::new(client), config)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// A cursor starting at the configured identifier and window size.
    pub fn cursor(&self) -> EngineResult<PaginationCursor> {
        PaginationCursor::new(self.config.start_identifier, self.config.window_size)
    }

    /// Aggregate `identifiers` in input order. Identifiers whose primary or
    /// species fetch fails are left out.
    pub async fn aggregate(
        &self,
        identifiers: &[Identifier],
        requested_versions: &BTreeSet<String>,
    ) -> Vec<CreatureRecord> {
        let pipelines: Vec<_> = identifiers
            .iter()
            .map(|identifier| self.aggregate_one(identifier, requested_versions))
            .collect();

        let settled: Vec<Option<CreatureRecord>> = stream::iter(pipelines)
            .buffered(self.config.max_concurrency)
            .collect()
            .await;

        let records: Vec<CreatureRecord> = settled.into_iter().flatten().collect();
        info!(
            catalog = self.client.name(),
            requested = identifiers.len(),
            aggregated = records.len(),
            "Aggregated batch"
        );
        records
    }

    /// [`aggregate`](Self::aggregate), then a stable ascending sort on the
    /// ordinal for `sort_version` (records without one count as 0).
    pub async fn aggregate_sorted(
        &self,
        identifiers: &[Identifier],
        requested_versions: &BTreeSet<String>,
        sort_version: &str,
    ) -> Vec<CreatureRecord> {
        let mut records = self.aggregate(identifiers, requested_versions).await;
        versions::sort_by_version(&mut records, sort_version);
        records
    }

    /// Aggregate the cursor's current window, sorted by the configured
    /// primary version, and move the cursor past it.
    pub async fn load_window(
        &self,
        cursor: &mut PaginationCursor,
        requested_versions: &BTreeSet<String>,
    ) -> Vec<CreatureRecord> {
        let window = cursor.next_window();
        let records = self
            .aggregate_sorted(&window, requested_versions, &self.config.primary_version)
            .await;
        cursor.advance();
        records
    }

    /// Resolve the evolution chain of `species` into an ordered sequence.
    pub async fn build_evolution_sequence(
        &self,
        species: &Identifier,
    ) -> EngineResult<EvolutionSequence> {
        self.evolution_from(&Locator::Species(species.clone())).await
    }

    /// Resolve the evolution chain of an aggregated record through its
    /// species link, which also works for alternate forms.
    pub async fn evolution_sequence_for(
        &self,
        record: &CreatureRecord,
    ) -> EngineResult<EvolutionSequence> {
        self.evolution_from(&Locator::Url(record.species_ref.clone())).await
    }

    async fn evolution_from(&self, species: &Locator) -> EngineResult<EvolutionSequence> {
        evolution::build_for_species(
            self.client.as_ref(),
            species,
            &self.config.language,
            self.config.max_concurrency,
        )
        .await
    }

    async fn aggregate_one(
        &self,
        identifier: &Identifier,
        requested_versions: &BTreeSet<String>,
    ) -> Option<CreatureRecord> {
        match self.try_aggregate_one(identifier, requested_versions).await {
            Ok(record) => Some(record),
            Err(err) if err.is_not_found() => {
                debug!(identifier = %identifier, "Not in catalog, skipping");
                None
            }
            Err(err) => {
                warn!(identifier = %identifier, error = %err, "Aggregation failed, skipping");
                None
            }
        }
    }

    async fn try_aggregate_one(
        &self,
        identifier: &Identifier,
        requested_versions: &BTreeSet<String>,
    ) -> CatalogResult<CreatureRecord> {
        let client = self.client.as_ref();
        let config = &self.config;
        let language = config.language.as_str();

        let pokemon: Pokemon = fetch_resource(client, &Locator::Pokemon(identifier.clone())).await?;

        let species_locator = Locator::Url(pokemon.species.url.clone());
        let (species, abilities, encounters) = futures::join!(
            fetch_resource::<PokemonSpecies>(client, &species_locator),
            joins::join_abilities(
                client,
                &pokemon.abilities,
                language,
                &config.ability_fallback,
                config.max_concurrency,
            ),
            self.encounters_for(pokemon.id),
        );
        let species = species?;

        Ok(CreatureRecord {
            id: pokemon.id,
            display_name: localization::resolve(&species.names, language, &pokemon.name),
            description: localization::resolve_flavor_text(
                &species.flavor_text_entries,
                language,
                &config.description_fallback,
            ),
            image_ref: pokemon.sprites.front_default.clone(),
            height: pokemon.height,
            weight: pokemon.weight,
            type_labels: type_labels(&pokemon, language),
            abilities,
            stats: StatVector::from_pokemon(&pokemon),
            encounters,
            version_indices: versions::extract(&pokemon.game_indices, requested_versions),
            name: pokemon.name,
            species_ref: pokemon.species.url,
        })
    }

    /// Encounter locations for a pokemon; an unavailable list means none.
    async fn encounters_for(&self, pokemon_id: u32) -> Vec<EncounterLocation> {
        let locator = Locator::Encounters(Identifier::Id(pokemon_id));
        match fetch_resource::<Vec<LocationAreaEncounter>>(self.client.as_ref(), &locator).await {
            Ok(list) => {
                let areas: Vec<_> = list.into_iter().map(|e| e.location_area).collect();
                joins::join_locations(
                    self.client.as_ref(),
                    &areas,
                    &self.config.language,
                    self.config.max_concurrency,
                )
                .await
            }
            Err(err) => {
                warn!(pokemon = pokemon_id, error = %err, "Encounter list unavailable");
                Vec::new()
            }
        }
    }
}
