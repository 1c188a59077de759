use crate::{FlavorText, Name};
use serde::{Deserialize, Serialize};

/// The `ability/{id}` resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub names: Vec<Name>,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorText>,
}
