//! Line tokenizer
//!
//! Splits one protocol line into positional fields and `[key] value`
//! attribute tags. Positional indexing matches the raw line: `parts[0]` is the
//! empty leading field, `parts[1]` the keyword, `parts[2]` the first argument.

use std::collections::HashMap;

use super::battle::Pokemon;

/// Keyed attribute tags pulled out of a line (`[from] item: Leftovers`, `[of] p2a: Foo`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(HashMap<String, String>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The `[from]` effect, if any
    pub fn from(&self) -> Option<&str> {
        self.get("from")
    }

    /// The `[of]` pokemon, if present and well formed
    pub fn of(&self) -> Option<Pokemon> {
        self.get("of").and_then(Pokemon::parse)
    }
}

/// A tokenized line borrowing from the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEvent<'a> {
    pub line: &'a str,
    pub parts: Vec<&'a str>,
    pub attributes: Attributes,
}

impl<'a> RawEvent<'a> {
    pub fn keyword(&self) -> &'a str {
        self.parts.get(1).copied().unwrap_or("")
    }

    /// Positional arguments after the keyword
    pub fn args(&self) -> &[&'a str] {
        self.parts.get(2..).unwrap_or(&[])
    }
}

/// Split "[key] value" into its key and value.
/// The key is lowercase ASCII letters and exactly one space separates it from the value.
fn parse_tag(field: &str) -> Option<(&str, &str)> {
    let rest = field.strip_prefix('[')?;
    let (key, value) = rest.split_once("] ")?;
    key.bytes()
        .all(|b| b.is_ascii_lowercase())
        .then_some((key, value))
}

/// Tokenize a single line. Returns None for empty lines and lines whose first
/// field is not empty (non-protocol output).
pub fn tokenize(line: &str) -> Option<RawEvent<'_>> {
    if line.is_empty() {
        return None;
    }

    let mut parts: Vec<&str> = line.split('|').collect();
    if parts.len() < 2 || !parts[0].is_empty() {
        return None;
    }

    // Scan back to front so removals don't shift the fields still to visit.
    // An earlier duplicate of a key overwrites the later one.
    let mut attributes = Attributes::new();
    for i in (2..parts.len()).rev() {
        if let Some((key, value)) = parse_tag(parts[i]) {
            attributes.insert(key, value);
            parts.remove(i);
        }
    }

    Some(RawEvent {
        line,
        parts,
        attributes,
    })
}
