use crate::{Name, NamedResource};
use serde::{Deserialize, Serialize};

/// The `location-area/{id}` resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationArea {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub names: Vec<Name>,
    #[serde(default)]
    pub location: Option<NamedResource>,
}
