//! Per-version pokedex numbers and ordering by them.

use crate::pokemon::{CreatureRecord, VersionIndexEntry};
use schema::GameIndex;
use std::collections::BTreeSet;

/// Main-series versions offered as filters, in release order.
pub const KNOWN_VERSIONS: [&str; 20] = [
    "red",
    "blue",
    "yellow",
    "gold",
    "silver",
    "crystal",
    "ruby",
    "sapphire",
    "emerald",
    "firered",
    "leafgreen",
    "diamond",
    "pearl",
    "platinum",
    "heartgold",
    "soulsilver",
    "black",
    "white",
    "black-2",
    "white-2",
];

/// Keep the indices whose version is in `requested`, in catalog order.
/// An empty request selects nothing.
pub fn extract(indices: &[GameIndex], requested: &BTreeSet<String>) -> Vec<VersionIndexEntry> {
    if requested.is_empty() {
        return Vec::new();
    }

    indices
        .iter()
        .filter(|index| requested.contains(&index.version.name))
        .map(|index| VersionIndexEntry {
            version: index.version.name.clone(),
            ordinal: index.game_index,
        })
        .collect()
}

/// Ordinal of the first entry for `version`, 0 when absent.
pub fn ordinal_for(entries: &[VersionIndexEntry], version: &str) -> u32 {
    entries
        .iter()
        .find(|entry| entry.version == version)
        .map(|entry| entry.ordinal)
        .unwrap_or(0)
}

/// Stable ascending sort by the ordinal in `version`. Records without an
/// entry for it sort as 0, ahead of every indexed record.
pub fn sort_by_version(records: &mut [CreatureRecord], version: &str) {
    records.sort_by_key(|record| record.ordinal_for(version));
}

/// Build a version set from loose names, e.g. a user's checkbox selection.
pub fn version_set<I, S>(versions: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    versions
        .into_iter()
        .map(|v| v.as_ref().trim().to_lowercase())
        .filter(|v| !v.is_empty())
        .collect()
}
