use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, EnumString, IntoStaticStr};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, EnumString, IntoStaticStr, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PokemonType {
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Steel,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Dark,
    Fairy,
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.catalog_name())
    }
}

impl PokemonType {
    /// The name the catalog uses for this type (`"fire"`, `"psychic"`, ...).
    pub fn catalog_name(self) -> &'static str {
        self.into()
    }

    /// Localized label for this type, if the language has one.
    /// Only Japanese labels are bundled; everything else falls back to the catalog name.
    pub fn localized_name(self, language: &str) -> Option<&'static str> {
        use PokemonType::*;

        if language != "ja" {
            return None;
        }

        let label = match self {
            Normal => "ノーマル",
            Fighting => "かくとう",
            Flying => "ひこう",
            Poison => "どく",
            Ground => "じめん",
            Rock => "いわ",
            Bug => "むし",
            Ghost => "ゴースト",
            Steel => "はがね",
            Fire => "ほのお",
            Water => "みず",
            Grass => "くさ",
            Electric => "でんき",
            Psychic => "エスパー",
            Ice => "こおり",
            Dragon => "ドラゴン",
            Dark => "あく",
            Fairy => "フェアリー",
        };
        Some(label)
    }
}

/// The six base stats, named as the catalog names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum StatKind {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl StatKind {
    pub fn catalog_name(self) -> &'static str {
        self.into()
    }
}
