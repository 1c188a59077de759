use crate::aggregate::Aggregator;
use crate::catalog::MemoryCatalog;
use crate::config::EngineConfig;
use serde_json::{json, Value};
use std::sync::Arc;

pub const ABILITY_FALLBACK: &str = "description unavailable";
pub const DESCRIPTION_FALLBACK: &str = "no description";

pub fn test_config() -> EngineConfig {
    EngineConfig {
        language: "ja".to_string(),
        ability_fallback: ABILITY_FALLBACK.to_string(),
        description_fallback: DESCRIPTION_FALLBACK.to_string(),
        max_concurrency: 4,
        ..EngineConfig::default()
    }
}

/// Share a populated catalog with an aggregator, keeping a handle for request counts.
pub fn aggregator_for(catalog: MemoryCatalog) -> (Aggregator, Arc<MemoryCatalog>) {
    let catalog = Arc::new(catalog);
    let aggregator = match Aggregator::new(catalog.clone(), test_config()) {
        Ok(aggregator) => aggregator,
        Err(err) => panic!("test configuration rejected: {}", err),
    };
    (aggregator, catalog)
}

fn language(tag: &str) -> Value {
    json!({"name": tag, "url": format!("https://pokeapi.co/api/v2/language/{}/", tag)})
}

fn names(catalog_name: &str, japanese: Option<&str>) -> Value {
    let mut entries = vec![json!({"name": catalog_name, "language": language("en")})];
    if let Some(ja) = japanese {
        entries.insert(0, json!({"name": ja, "language": language("ja")}));
    }
    Value::Array(entries)
}

/// A builder for a pokemon and the resources it links to.
///
/// # Example
/// ```
/// PokemonFixture::new(1, "bulbasaur")
///     .with_japanese_name("フシギダネ")
///     .with_ability("overgrow", 65)
///     .with_game_index("red", 153)
///     .install(&mut catalog);
/// ```
pub struct PokemonFixture {
    id: u32,
    name: String,
    japanese_name: Option<String>,
    types: Vec<String>,
    abilities: Vec<(String, u32, bool)>,
    game_indices: Vec<(String, u32)>,
    flavor_texts: Vec<(String, String)>,
    stats: Vec<(String, u16)>,
    encounters: Vec<(String, u32)>,
    evolution_chain: Option<u32>,
    species: Option<(u32, String)>,
}

impl PokemonFixture {
    pub fn new(id: u32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            japanese_name: None,
            types: vec!["normal".to_string()],
            abilities: Vec::new(),
            game_indices: Vec::new(),
            flavor_texts: Vec::new(),
            stats: vec![("hp".to_string(), 50), ("speed".to_string(), 50)],
            encounters: Vec::new(),
            evolution_chain: None,
            species: None,
        }
    }

    pub fn with_japanese_name(mut self, name: &str) -> Self {
        self.japanese_name = Some(name.to_string());
        self
    }

    pub fn with_types(mut self, types: &[&str]) -> Self {
        self.types = types.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_ability(mut self, name: &str, ability_id: u32) -> Self {
        self.abilities.push((name.to_string(), ability_id, false));
        self
    }

    pub fn with_hidden_ability(mut self, name: &str, ability_id: u32) -> Self {
        self.abilities.push((name.to_string(), ability_id, true));
        self
    }

    pub fn with_game_index(mut self, version: &str, ordinal: u32) -> Self {
        self.game_indices.push((version.to_string(), ordinal));
        self
    }

    pub fn with_flavor_text(mut self, language: &str, text: &str) -> Self {
        self.flavor_texts.push((language.to_string(), text.to_string()));
        self
    }

    pub fn with_stat(mut self, stat: &str, value: u16) -> Self {
        self.stats.retain(|(name, _)| name != stat);
        self.stats.push((stat.to_string(), value));
        self
    }

    /// Adds an encounter area; the area resource itself is installed too.
    pub fn with_encounter(mut self, area_name: &str, area_id: u32) -> Self {
        self.encounters.push((area_name.to_string(), area_id));
        self
    }

    pub fn with_evolution_chain(mut self, chain_id: u32) -> Self {
        self.evolution_chain = Some(chain_id);
        self
    }

    /// Link an alternate form to its base species instead of a species of its own.
    pub fn with_species(mut self, species_id: u32, species_name: &str) -> Self {
        self.species = Some((species_id, species_name.to_string()));
        self
    }

    /// Install the pokemon (under its id and name), its species and its encounter list.
    pub fn install(self, catalog: &mut MemoryCatalog) {
        let (species_id, species_name) = self
            .species
            .clone()
            .unwrap_or_else(|| (self.id, self.name.clone()));
        let species_url = catalog.url_for(&format!("pokemon-species/{}", species_id));

        let pokemon = json!({
            "id": self.id,
            "name": self.name,
            "height": 7,
            "weight": 69,
            "sprites": {"front_default": format!("https://img.example/{}.png", self.id)},
            "types": self.types.iter().enumerate().map(|(i, t)| json!({
                "slot": i + 1,
                "type": {"name": t, "url": catalog.url_for(&format!("type/{}", t))}
            })).collect::<Vec<_>>(),
            "stats": self.stats.iter().map(|(name, value)| json!({
                "base_stat": value,
                "effort": 0,
                "stat": {"name": name, "url": catalog.url_for(&format!("stat/{}", name))}
            })).collect::<Vec<_>>(),
            "abilities": self.abilities.iter().enumerate().map(|(i, (name, id, hidden))| json!({
                "ability": {"name": name, "url": catalog.url_for(&format!("ability/{}", id))},
                "is_hidden": hidden,
                "slot": i + 1
            })).collect::<Vec<_>>(),
            "game_indices": self.game_indices.iter().map(|(version, ordinal)| json!({
                "game_index": ordinal,
                "version": {"name": version, "url": catalog.url_for(&format!("version/{}", version))}
            })).collect::<Vec<_>>(),
            "species": {"name": species_name, "url": species_url},
        });
        catalog.insert(&format!("pokemon/{}", self.id), pokemon.clone());
        catalog.insert(&format!("pokemon/{}", self.name), pokemon);

        install_species(
            catalog,
            species_id,
            &species_name,
            self.japanese_name.as_deref(),
            &self.flavor_texts,
            self.evolution_chain,
        );

        let encounters: Vec<Value> = self
            .encounters
            .iter()
            .map(|(area, area_id)| {
                json!({
                    "location_area": {
                        "name": area,
                        "url": catalog.url_for(&format!("location-area/{}", area_id))
                    },
                    "version_details": []
                })
            })
            .collect();
        catalog.insert(&format!("pokemon/{}/encounters", self.id), Value::Array(encounters));

        for (area, area_id) in &self.encounters {
            catalog.insert(
                &format!("location-area/{}", area_id),
                json!({"id": area_id, "name": area, "names": []}),
            );
        }
    }
}

/// Install a species resource under its id and name.
pub fn install_species(
    catalog: &mut MemoryCatalog,
    id: u32,
    name: &str,
    japanese_name: Option<&str>,
    flavor_texts: &[(String, String)],
    evolution_chain: Option<u32>,
) {
    let chain = evolution_chain
        .map(|chain_id| json!({"url": catalog.url_for(&format!("evolution-chain/{}", chain_id))}))
        .unwrap_or(Value::Null);

    let species = json!({
        "id": id,
        "name": name,
        "names": names(name, japanese_name),
        "flavor_text_entries": flavor_texts.iter().map(|(tag, text)| json!({
            "flavor_text": text,
            "language": language(tag),
            "version": {"name": "red", "url": "https://pokeapi.co/api/v2/version/1/"}
        })).collect::<Vec<_>>(),
        "evolution_chain": chain,
    });
    catalog.insert(&format!("pokemon-species/{}", id), species.clone());
    catalog.insert(&format!("pokemon-species/{}", name), species);
}

/// Install an ability with a Japanese name and, optionally, Japanese flavor text.
pub fn install_ability(
    catalog: &mut MemoryCatalog,
    id: u32,
    name: &str,
    japanese_name: &str,
    japanese_text: Option<&str>,
) {
    let flavor: Vec<Value> = japanese_text
        .map(|text| {
            vec![json!({
                "flavor_text": text,
                "language": language("ja"),
                "version_group": {"name": "x-y", "url": "https://pokeapi.co/api/v2/version-group/15/"}
            })]
        })
        .unwrap_or_default();

    catalog.insert(
        &format!("ability/{}", id),
        json!({
            "id": id,
            "name": name,
            "names": names(name, Some(japanese_name)),
            "flavor_text_entries": flavor,
        }),
    );
}

/// A chain link for species `id`; `details` is its raw evolution-detail list.
pub fn chain_link(catalog: &MemoryCatalog, name: &str, id: u32, details: Vec<Value>, children: Vec<Value>) -> Value {
    json!({
        "species": {"name": name, "url": catalog.url_for(&format!("pokemon-species/{}", id))},
        "evolution_details": details,
        "evolves_to": children,
        "is_baby": false
    })
}

pub fn level_up(min_level: u32) -> Value {
    json!({
        "min_level": min_level,
        "trigger": {"name": "level-up", "url": "https://pokeapi.co/api/v2/evolution-trigger/1/"},
        "item": null
    })
}

pub fn use_item(item: &str) -> Value {
    json!({
        "min_level": null,
        "trigger": {"name": "use-item", "url": "https://pokeapi.co/api/v2/evolution-trigger/3/"},
        "item": {"name": item, "url": format!("https://pokeapi.co/api/v2/item/{}/", item)}
    })
}

pub fn trade() -> Value {
    json!({
        "min_level": null,
        "trigger": {"name": "trade", "url": "https://pokeapi.co/api/v2/evolution-trigger/2/"},
        "item": null
    })
}

pub fn install_chain(catalog: &mut MemoryCatalog, chain_id: u32, root: Value) {
    catalog.insert(
        &format!("evolution-chain/{}", chain_id),
        json!({"id": chain_id, "chain": root}),
    );
}
