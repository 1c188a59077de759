//! Language selection with fallback.

use schema::{FlavorText, Name};
use serde::{Deserialize, Serialize};

/// A value tagged with the language it is written in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub language_tag: String,
    pub value: String,
}

impl LocalizedText {
    pub fn new(language_tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            language_tag: language_tag.into(),
            value: value.into(),
        }
    }
}

/// Anything carrying a language tag and a text value.
pub trait Localized {
    fn language_tag(&self) -> &str;
    fn text(&self) -> &str;
}

impl Localized for LocalizedText {
    fn language_tag(&self) -> &str {
        &self.language_tag
    }

    fn text(&self) -> &str {
        &self.value
    }
}

impl Localized for Name {
    fn language_tag(&self) -> &str {
        &self.language.name
    }

    fn text(&self) -> &str {
        &self.name
    }
}

impl Localized for FlavorText {
    fn language_tag(&self) -> &str {
        &self.language.name
    }

    fn text(&self) -> &str {
        &self.flavor_text
    }
}

/// First entry written in `target_tag`, if any.
pub fn find<'a, L: Localized>(entries: &'a [L], target_tag: &str) -> Option<&'a str> {
    entries
        .iter()
        .find(|entry| entry.language_tag() == target_tag)
        .map(|entry| entry.text())
}

/// Text of the first entry written in `target_tag`, or `fallback` when none is.
pub fn resolve<L: Localized>(entries: &[L], target_tag: &str, fallback: &str) -> String {
    find(entries, target_tag).unwrap_or(fallback).to_string()
}

/// Like [`resolve`], but collapses the hard line breaks and form feeds the
/// catalog embeds in flavor text into single spaces.
pub fn resolve_flavor_text(entries: &[FlavorText], target_tag: &str, fallback: &str) -> String {
    match find(entries, target_tag) {
        Some(text) => normalize_flavor_text(text),
        None => fallback.to_string(),
    }
}

/// Each run of line breaks and form feeds becomes one space. Other
/// whitespace, including the full-width U+3000 of Japanese text, is kept.
pub fn normalize_flavor_text(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    let mut in_break = false;
    for c in text.chars() {
        if matches!(c, '\n' | '\r' | '\u{c}') {
            if !in_break {
                normalized.push(' ');
            }
            in_break = true;
        } else {
            normalized.push(c);
            in_break = false;
        }
    }
    normalized
}
