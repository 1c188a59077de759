//! Evolution chain resolution.
//!
//! A chain resource is a tree of links rooted at the base form. It is
//! flattened depth-first, pre-order (every stage precedes its descendants,
//! siblings keep catalog order), and each stage's species name is then
//! localized with one species fetch per stage.
//!
//! When a link lists several evolution details only the first is used.
//! Alternatives (e.g. "level up OR use an item") are dropped, not merged.

use crate::catalog::{fetch_resource, CatalogClient, Locator};
use crate::errors::{EngineError, EngineResult};
use crate::localization;
use futures::stream::{self, StreamExt};
use schema::{ChainLink, EvolutionChain, EvolutionDetail, PokemonSpecies};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionStage {
    pub species_name: String,
    pub min_level: Option<u32>,
    pub trigger_kind: Option<String>,
    pub trigger_item: Option<String>,
    /// Url of the species resource, used to navigate to the stage's own record
    pub species_ref: String,
    /// Distance from the chain root (root = 0)
    pub depth: usize,
}

impl EvolutionStage {
    pub fn species_id(&self) -> Option<u32> {
        schema::resource_id(&self.species_ref)
    }

    pub fn is_root(&self) -> bool {
        self.depth == 0
    }
}

impl fmt::Display for EvolutionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.species_name)?;
        match (self.min_level, &self.trigger_kind, &self.trigger_item) {
            (Some(level), _, _) => write!(f, " (Lv. {})", level),
            (None, Some(trigger), Some(item)) => write!(f, " ({}: {})", trigger, item),
            (None, Some(trigger), None) => write!(f, " ({})", trigger),
            (None, None, _) => Ok(()),
        }
    }
}

/// Flattened chain, root first. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StageList")]
pub struct EvolutionSequence {
    stages: Vec<EvolutionStage>,
}

/// Unchecked wire form of [`EvolutionSequence`].
#[derive(Deserialize)]
struct StageList {
    stages: Vec<EvolutionStage>,
}

impl TryFrom<StageList> for EvolutionSequence {
    type Error = String;

    fn try_from(list: StageList) -> Result<Self, Self::Error> {
        if list.stages.is_empty() {
            return Err("an evolution sequence needs at least its root stage".to_string());
        }
        Ok(Self { stages: list.stages })
    }
}

impl EvolutionSequence {
    pub fn stages(&self) -> &[EvolutionStage] {
        &self.stages
    }

    pub fn root(&self) -> &EvolutionStage {
        &self.stages[0]
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EvolutionStage> {
        self.stages.iter()
    }
}

impl<'a> IntoIterator for &'a EvolutionSequence {
    type Item = &'a EvolutionStage;
    type IntoIter = std::slice::Iter<'a, EvolutionStage>;

    fn into_iter(self) -> Self::IntoIter {
        self.stages.iter()
    }
}

impl fmt::Display for EvolutionSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stage) in self.stages.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{:indent$}{}", "", stage, indent = stage.depth * 2)?;
        }
        Ok(())
    }
}

/// A link waiting for its localized name.
#[derive(Debug, Clone)]
pub(crate) struct PendingStage<'a> {
    pub link: &'a ChainLink,
    pub depth: usize,
}

impl PendingStage<'_> {
    fn detail(&self) -> Option<&EvolutionDetail> {
        self.link.evolution_details.first()
    }
}

/// Pre-order walk with an explicit stack. Children are pushed in reverse so
/// they pop in catalog order.
pub(crate) fn flatten_chain(root: &ChainLink) -> Vec<PendingStage<'_>> {
    let mut order = Vec::with_capacity(root.node_count());
    let mut stack = vec![PendingStage {
        link: root,
        depth: 0,
    }];

    while let Some(pending) = stack.pop() {
        for child in pending.link.evolves_to.iter().rev() {
            stack.push(PendingStage {
                link: child,
                depth: pending.depth + 1,
            });
        }
        order.push(pending);
    }

    order
}

/// Resolve every stage of `root` into a localized sequence.
/// A failed species fetch keeps the stage under its catalog name.
pub async fn build(
    client: &dyn CatalogClient,
    root: &ChainLink,
    language: &str,
    concurrency: usize,
) -> EvolutionSequence {
    let pending = flatten_chain(root);
    debug!(root = %root.species.name, stages = pending.len(), "Resolving evolution chain");

    let lookups: Vec<_> = pending
        .iter()
        .map(|stage| resolve_stage(client, stage, language))
        .collect();

    let stages = stream::iter(lookups)
        .buffered(concurrency.max(1))
        .collect()
        .await;

    EvolutionSequence { stages }
}

async fn resolve_stage(
    client: &dyn CatalogClient,
    pending: &PendingStage<'_>,
    language: &str,
) -> EvolutionStage {
    let species = &pending.link.species;
    let locator = Locator::Url(species.url.clone());
    let species_name = match fetch_resource::<PokemonSpecies>(client, &locator).await {
        Ok(resolved) => localization::resolve(&resolved.names, language, &resolved.name),
        Err(err) => {
            warn!(species = %species.name, error = %err, "Species name lookup failed, using catalog name");
            species.name.clone()
        }
    };

    let detail = pending.detail();
    EvolutionStage {
        species_name,
        min_level: detail.and_then(|d| d.min_level),
        trigger_kind: detail.map(|d| d.trigger.name.clone()),
        trigger_item: detail.and_then(|d| d.item.as_ref().map(|item| item.name.clone())),
        species_ref: species.url.clone(),
        depth: pending.depth,
    }
}

/// Fetch the species at `species`, follow its evolution chain link and
/// resolve the chain.
pub async fn build_for_species(
    client: &dyn CatalogClient,
    species: &Locator,
    language: &str,
    concurrency: usize,
) -> EngineResult<EvolutionSequence> {
    let species_data: PokemonSpecies = fetch_resource(client, species).await?;

    let chain_ref = species_data
        .evolution_chain
        .ok_or_else(|| EngineError::MissingEvolutionChain(species_data.name.clone()))?;

    let chain: EvolutionChain = fetch_resource(client, &Locator::Url(chain_ref.url)).await?;
    Ok(build(client, &chain.chain, language, concurrency).await)
}
