use crate::errors::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lookup key for one pokemon: a catalog number or a (case-insensitive) name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Identifier {
    Id(u32),
    Name(String),
}

impl Identifier {
    pub fn name(name: impl AsRef<str>) -> Self {
        Identifier::Name(name.as_ref().trim().to_lowercase())
    }

    pub fn as_id(&self) -> Option<u32> {
        match self {
            Identifier::Id(id) => Some(*id),
            Identifier::Name(_) => None,
        }
    }

    /// Parse a comma-separated query such as `"1, 4, Pikachu"`.
    /// Blank items are skipped; any invalid item fails the whole query.
    pub fn parse_list(query: &str) -> EngineResult<Vec<Identifier>> {
        query
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(Identifier::from_str)
            .collect()
    }
}

impl FromStr for Identifier {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(EngineError::InvalidIdentifier(s.to_string()));
        }

        if trimmed.chars().all(|c| c.is_ascii_digit()) {
            return match trimmed.parse::<u32>() {
                Ok(id) if id > 0 => Ok(Identifier::Id(id)),
                _ => Err(EngineError::InvalidIdentifier(s.to_string())),
            };
        }

        // Catalog names are lowercase ascii with hyphens ("mr-mime", "porygon-z")
        if trimmed.contains('/') || trimmed.chars().any(char::is_whitespace) {
            return Err(EngineError::InvalidIdentifier(s.to_string()));
        }

        Ok(Identifier::name(trimmed))
    }
}

impl From<u32> for Identifier {
    fn from(id: u32) -> Self {
        Identifier::Id(id)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Id(id) => write!(f, "{}", id),
            Identifier::Name(name) => write!(f, "{}", name),
        }
    }
}
