use serde::{Deserialize, Serialize};

/// A `{name, url}` pair pointing at another catalog resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

impl NamedResource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Numeric id embedded in the resource url, e.g. `.../pokemon-species/25/` -> 25.
    pub fn id(&self) -> Option<u32> {
        resource_id(&self.url)
    }
}

/// An unnamed link to another resource (the catalog uses these for evolution chains).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResource {
    pub url: String,
}

/// A localized name entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub name: String,
    pub language: NamedResource,
}

/// A localized flavor text entry. Species entries carry a `version`, ability
/// entries a `version_group`; neither matters for localization so both are optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorText {
    pub flavor_text: String,
    pub language: NamedResource,
    #[serde(default)]
    pub version: Option<NamedResource>,
    #[serde(default)]
    pub version_group: Option<NamedResource>,
}

/// Extract the trailing numeric path segment of a resource url.
pub fn resource_id(url: &str) -> Option<u32> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse().ok())
}
