//! Concurrent joins of a record's ability and encounter references.
//!
//! Every reference produces exactly one output entry, in input order. A
//! failed fetch degrades its own entry and never touches its siblings.

use crate::catalog::{fetch_resource, CatalogClient, Locator};
use crate::localization;
use crate::pokemon::{AbilityEntry, EncounterLocation};
use futures::stream::{self, StreamExt};
use schema::{Ability, LocationArea, NamedResource, PokemonAbility};
use tracing::warn;

pub async fn join_abilities(
    client: &dyn CatalogClient,
    refs: &[PokemonAbility],
    language: &str,
    fallback_description: &str,
    concurrency: usize,
) -> Vec<AbilityEntry> {
    let lookups: Vec<_> = refs
        .iter()
        .map(|slot| resolve_ability(client, slot, language, fallback_description))
        .collect();

    stream::iter(lookups)
        .buffered(concurrency.max(1))
        .collect()
        .await
}

async fn resolve_ability(
    client: &dyn CatalogClient,
    slot: &PokemonAbility,
    language: &str,
    fallback_description: &str,
) -> AbilityEntry {
    let locator = Locator::Url(slot.ability.url.clone());
    match fetch_resource::<Ability>(client, &locator).await {
        Ok(ability) => AbilityEntry {
            name: localization::resolve(&ability.names, language, &slot.ability.name),
            description: localization::resolve_flavor_text(
                &ability.flavor_text_entries,
                language,
                fallback_description,
            ),
            is_hidden: slot.is_hidden,
        },
        Err(err) => {
            warn!(ability = %slot.ability.name, error = %err, "Ability lookup failed, using placeholder");
            AbilityEntry {
                name: slot.ability.name.clone(),
                description: fallback_description.to_string(),
                is_hidden: slot.is_hidden,
            }
        }
    }
}

pub async fn join_locations(
    client: &dyn CatalogClient,
    refs: &[NamedResource],
    language: &str,
    concurrency: usize,
) -> Vec<EncounterLocation> {
    let lookups: Vec<_> = refs
        .iter()
        .map(|area| resolve_location(client, area, language))
        .collect();

    stream::iter(lookups)
        .buffered(concurrency.max(1))
        .collect()
        .await
}

async fn resolve_location(
    client: &dyn CatalogClient,
    area: &NamedResource,
    language: &str,
) -> EncounterLocation {
    let locator = Locator::Url(area.url.clone());
    let label = match fetch_resource::<LocationArea>(client, &locator).await {
        Ok(resolved) => localization::resolve(&resolved.names, language, &resolved.name),
        Err(err) => {
            warn!(area = %area.name, error = %err, "Location lookup failed, using area name");
            area.name.clone()
        }
    };

    EncounterLocation {
        label,
        locator: area.url.clone(),
    }
}
