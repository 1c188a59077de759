use crate::{ApiResource, FlavorText, Name, NamedResource};
use serde::{Deserialize, Serialize};

/// The `pokemon-species/{id}` resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSpecies {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub names: Vec<Name>,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorText>,
    #[serde(default)]
    pub evolution_chain: Option<ApiResource>,
}

/// One condition under which a chain link is reached from its parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionDetail {
    #[serde(default)]
    pub min_level: Option<u32>,
    pub trigger: NamedResource,
    #[serde(default)]
    pub item: Option<NamedResource>,
}

/// A node of the evolution tree. The root has no evolution details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetail>,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

impl ChainLink {
    /// Total number of links in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.evolves_to.iter().map(ChainLink::node_count).sum::<usize>()
    }
}

/// The `evolution-chain/{id}` resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionChain {
    pub id: u32,
    pub chain: ChainLink,
}
