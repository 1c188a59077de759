use schema::{Pokemon, PokemonType, StatKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One ability of a record, localized. A failed or untranslated lookup keeps
/// the entry and fills in the raw name / fallback description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityEntry {
    pub name: String,
    pub description: String,
    pub is_hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterLocation {
    pub label: String,
    pub locator: String,
}

/// A pokemon's position in one game version's numbering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionIndexEntry {
    pub version: String,
    pub ordinal: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatVector {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub special_attack: u16,
    pub special_defense: u16,
    pub speed: u16,
}

impl StatVector {
    /// Pull the six base stats out of a catalog record; missing stats are 0.
    pub fn from_pokemon(pokemon: &Pokemon) -> Self {
        let stat = |kind: StatKind| pokemon.base_stat(kind.catalog_name()).unwrap_or(0);
        Self {
            hp: stat(StatKind::Hp),
            attack: stat(StatKind::Attack),
            defense: stat(StatKind::Defense),
            special_attack: stat(StatKind::SpecialAttack),
            special_defense: stat(StatKind::SpecialDefense),
            speed: stat(StatKind::Speed),
        }
    }

    pub fn get(&self, kind: StatKind) -> u16 {
        match kind {
            StatKind::Hp => self.hp,
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::SpecialAttack => self.special_attack,
            StatKind::SpecialDefense => self.special_defense,
            StatKind::Speed => self.speed,
        }
    }

    pub fn total(&self) -> u32 {
        [
            self.hp,
            self.attack,
            self.defense,
            self.special_attack,
            self.special_defense,
            self.speed,
        ]
        .iter()
        .map(|&s| s as u32)
        .sum()
    }
}

/// The merged, localized view of one pokemon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureRecord {
    pub id: u32,
    pub name: String, // Raw catalog name
    /// Url of the species resource. Forms (e.g. `deoxys-attack`) share their
    /// base form's species, so this is not always `pokemon-species/{id}`.
    pub species_ref: String,
    pub display_name: String,
    pub image_ref: Option<String>,
    pub height: u32, // decimetres
    pub weight: u32, // hectograms
    pub type_labels: Vec<String>,
    pub abilities: Vec<AbilityEntry>,
    pub stats: StatVector,
    pub description: String,
    pub encounters: Vec<EncounterLocation>,
    pub version_indices: Vec<VersionIndexEntry>,
}

impl CreatureRecord {
    pub fn height_meters(&self) -> f32 {
        self.height as f32 / 10.0
    }

    pub fn weight_kilograms(&self) -> f32 {
        self.weight as f32 / 10.0
    }

    /// Ordinal of this record in `version`, 0 when it has none there.
    pub fn ordinal_for(&self, version: &str) -> u32 {
        crate::versions::ordinal_for(&self.version_indices, version)
    }
}

/// Localized labels for a record's types, in slot order.
pub fn type_labels(pokemon: &Pokemon, language: &str) -> Vec<String> {
    let mut slots: Vec<_> = pokemon.types.iter().collect();
    slots.sort_by_key(|slot| slot.slot);
    slots
        .into_iter()
        .map(|slot| {
            PokemonType::from_str(&slot.type_.name)
                .ok()
                .and_then(|t| t.localized_name(language))
                .map(str::to_string)
                .unwrap_or_else(|| slot.type_.name.clone())
        })
        .collect()
}

impl fmt::Display for CreatureRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // --- 1. Name and Pokedex Number ---
        writeln!(f, "{} (#{:03})", self.display_name, self.id)?;
        writeln!(f, "--------------------")?;

        // --- 2. Description ---
        writeln!(f, "{}", self.description)?;
        writeln!(f, "--------------------")?;

        // --- 3. Types and size ---
        writeln!(f, "Type(s): {}", self.type_labels.join(" / "))?;
        writeln!(
            f,
            "Height: {:.1} m  Weight: {:.1} kg",
            self.height_meters(),
            self.weight_kilograms()
        )?;
        writeln!(f, "--------------------")?;

        // --- 4. Base Stats ---
        writeln!(f, "Base Stats:")?;
        const LABEL_WIDTH: usize = 12;

        writeln!(f, "{:<LABEL_WIDTH$} : {}", "HP", self.stats.hp)?;
        writeln!(f, "{:<LABEL_WIDTH$} : {}", "Attack", self.stats.attack)?;
        writeln!(f, "{:<LABEL_WIDTH$} : {}", "Defense", self.stats.defense)?;
        writeln!(f, "{:<LABEL_WIDTH$} : {}", "Sp. Atk", self.stats.special_attack)?;
        writeln!(f, "{:<LABEL_WIDTH$} : {}", "Sp. Def", self.stats.special_defense)?;
        write!(f, "{:<LABEL_WIDTH$} : {}", "Speed", self.stats.speed)?;

        // The alternate form (`{:#}`) adds abilities, encounters and version numbers.
        if f.alternate() {
            writeln!(f)?;
            writeln!(f, "--------------------")?;
            writeln!(f, "Abilities:")?;
            for ability in &self.abilities {
                let hidden = if ability.is_hidden { " (hidden)" } else { "" };
                writeln!(f, "  {}{}: {}", ability.name, hidden, ability.description)?;
            }
            write!(f, "Encounters: ")?;
            if self.encounters.is_empty() {
                write!(f, "none")?;
            } else {
                let labels: Vec<&str> = self.encounters.iter().map(|e| e.label.as_str()).collect();
                write!(f, "{}", labels.join(", "))?;
            }
            for index in &self.version_indices {
                write!(f, "\n  {}: #{}", index.version, index.ordinal)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schema::{NamedResource, PokemonStat, PokemonTypeSlot, Sprites};

    fn sample_pokemon() -> Pokemon {
        let stat = |name: &str, value: u16| PokemonStat {
            base_stat: value,
            effort: 0,
            stat: NamedResource::new(name, "stat/"),
        };
        Pokemon {
            id: 6,
            name: "charizard".to_string(),
            height: 17,
            weight: 905,
            sprites: Sprites::default(),
            types: vec![
                PokemonTypeSlot {
                    slot: 2,
                    type_: NamedResource::new("flying", "type/3/"),
                },
                PokemonTypeSlot {
                    slot: 1,
                    type_: NamedResource::new("fire", "type/10/"),
                },
            ],
            stats: vec![
                stat("hp", 78),
                stat("attack", 84),
                stat("special-attack", 109),
                stat("speed", 100),
            ],
            abilities: Vec::new(),
            game_indices: Vec::new(),
            species: NamedResource::new("charizard", "pokemon-species/6/"),
        }
    }

    #[test]
    fn test_stat_vector_defaults_missing_stats_to_zero() {
        let stats = StatVector::from_pokemon(&sample_pokemon());
        assert_eq!(stats.hp, 78);
        assert_eq!(stats.special_attack, 109);
        assert_eq!(stats.defense, 0);
        assert_eq!(stats.special_defense, 0);
        assert_eq!(stats.get(StatKind::Speed), 100);
        assert_eq!(stats.total(), 78 + 84 + 109 + 100);
    }

    #[test]
    fn test_type_labels_follow_slot_order_and_language() {
        let pokemon = sample_pokemon();
        assert_eq!(type_labels(&pokemon, "ja"), vec!["ほのお", "ひこう"]);
        assert_eq!(type_labels(&pokemon, "en"), vec!["fire", "flying"]);
    }

    #[test]
    fn test_unknown_type_falls_back_to_catalog_name() {
        let mut pokemon = sample_pokemon();
        pokemon.types = vec![PokemonTypeSlot {
            slot: 1,
            type_: NamedResource::new("stellar", "type/19/"),
        }];
        assert_eq!(type_labels(&pokemon, "ja"), vec!["stellar"]);
    }

    #[test]
    fn test_record_unit_conversion_and_display() {
        let record = CreatureRecord {
            id: 6,
            name: "charizard".to_string(),
            species_ref: "https://pokeapi.co/api/v2/pokemon-species/6/".to_string(),
            display_name: "リザードン".to_string(),
            image_ref: None,
            height: 17,
            weight: 905,
            type_labels: vec!["ほのお".to_string(), "ひこう".to_string()],
            abilities: vec![AbilityEntry {
                name: "もうか".to_string(),
                description: "description unavailable".to_string(),
                is_hidden: false,
            }],
            stats: StatVector::from_pokemon(&sample_pokemon()),
            description: "It spits fire.".to_string(),
            encounters: Vec::new(),
            version_indices: vec![VersionIndexEntry {
                version: "red".to_string(),
                ordinal: 180,
            }],
        };

        assert!((record.height_meters() - 1.7).abs() < f32::EPSILON);
        assert!((record.weight_kilograms() - 90.5).abs() < 0.001);
        assert_eq!(record.ordinal_for("red"), 180);
        assert_eq!(record.ordinal_for("blue"), 0);

        let short = format!("{}", record);
        assert!(short.starts_with("リザードン (#006)"));
        assert!(!short.contains("Abilities"));

        let long = format!("{:#}", record);
        assert!(long.contains("もうか: description unavailable"));
        assert!(long.contains("Encounters: none"));
        assert!(long.contains("red: #180"));
    }
}
