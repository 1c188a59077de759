//! Text front end shared by the CLI and the MCP server.
//!
//! Every handler takes plain text arguments, drives the [`Aggregator`] and
//! returns a human-readable answer. Failures become messages, never panics.

use crate::aggregate::Aggregator;
use crate::cursor::PaginationCursor;
use crate::evolution::EvolutionSequence;
use crate::identifier::Identifier;
use crate::pokemon::CreatureRecord;
use crate::versions::{self, KNOWN_VERSIONS};
use std::collections::BTreeSet;

/// Parse a comma- or whitespace-separated version list, keeping only known versions.
pub fn parse_versions(text: &str) -> Result<BTreeSet<String>, String> {
    let requested = versions::version_set(text.split(|c: char| c == ',' || c.is_whitespace()));
    let unknown: Vec<&str> = requested
        .iter()
        .map(String::as_str)
        .filter(|v| !KNOWN_VERSIONS.contains(v))
        .collect();

    if unknown.is_empty() {
        Ok(requested)
    } else {
        Err(format!(
            "Unknown version(s): {}. Choose from: {}",
            unknown.join(", "),
            KNOWN_VERSIONS.join(", ")
        ))
    }
}

/// One line per record: number, name, types and any selected version numbers.
pub fn display_record_list(records: &[CreatureRecord]) -> String {
    if records.is_empty() {
        return "No Pokémon found.".to_string();
    }

    let mut output = String::new();
    for record in records {
        output.push_str(&format!(
            "#{:03} {} ({})",
            record.id,
            record.display_name,
            record.type_labels.join(" / ")
        ));
        for index in &record.version_indices {
            output.push_str(&format!("  [{}: #{}]", index.version, index.ordinal));
        }
        output.push('\n');
    }
    output
}

pub fn display_record_detail(record: &CreatureRecord) -> String {
    format!("--- Pokémon Details ---\n{:#}", record)
}

pub fn display_evolution(sequence: &EvolutionSequence) -> String {
    format!("--- Evolution Chain ---\n{}", sequence)
}

/// Handles the "search" command: a comma-separated list of ids or names
pub async fn handle_search_command(aggregator: &Aggregator, query: &str, versions: &str) -> String {
    let identifiers = match Identifier::parse_list(query) {
        Ok(ids) if ids.is_empty() => {
            return "What do you want to search for? (e.g., '1, 4, pikachu')".to_string()
        }
        Ok(ids) => ids,
        Err(e) => return format!("{}", e),
    };
    let requested = match parse_versions(versions) {
        Ok(set) => set,
        Err(msg) => return msg,
    };

    let records = aggregator
        .aggregate_sorted(&identifiers, &requested, &aggregator.config().primary_version)
        .await;
    display_record_list(&records)
}

/// Handles the "load more" command: the next window of the shared cursor
pub async fn handle_load_more_command(
    aggregator: &Aggregator,
    cursor: &mut PaginationCursor,
    versions: &str,
) -> String {
    let requested = match parse_versions(versions) {
        Ok(set) => set,
        Err(msg) => return msg,
    };

    let first = cursor.next_identifier();
    let records = aggregator.load_window(cursor, &requested).await;
    format!(
        "--- #{} to #{} ---\n{}",
        first,
        cursor.next_identifier().saturating_sub(1),
        display_record_list(&records)
    )
}

/// Handles the "lookup pokemon" command: full record plus evolution chain
pub async fn handle_lookup_pokemon_command(aggregator: &Aggregator, name: &str) -> String {
    let identifier = match name.parse::<Identifier>() {
        Ok(id) => id,
        Err(_) => return "What Pokémon do you want to look up? (e.g., 'pikachu' or '25')".to_string(),
    };

    let records = aggregator
        .aggregate(std::slice::from_ref(&identifier), &BTreeSet::new())
        .await;
    let Some(record) = records.first() else {
        return format!("The Pokémon '{}' was not found.", name.trim());
    };

    let mut output = display_record_detail(record);
    match aggregator.evolution_sequence_for(record).await {
        Ok(sequence) => {
            output.push_str("\n\n");
            output.push_str(&display_evolution(&sequence));
        }
        Err(e) => output.push_str(&format!("\n\nEvolution chain unavailable: {}", e)),
    }
    output
}

/// Handles the "evolution" command for a species id or name
pub async fn handle_evolution_command(aggregator: &Aggregator, species: &str) -> String {
    let identifier = match species.parse::<Identifier>() {
        Ok(id) => id,
        Err(_) => return "Which species? (e.g., 'eevee' or '133')".to_string(),
    };

    match aggregator.build_evolution_sequence(&identifier).await {
        Ok(sequence) => display_evolution(&sequence),
        Err(e) => format!("Could not resolve the evolution chain of '{}': {}", species.trim(), e),
    }
}
