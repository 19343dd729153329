//! Read-only game data: species, moves and items
//!
//! The compendium is loaded once from the simulator's JSON dumps and shared
//! between trackers behind an `Arc`. Keys are normalized ids. Entries flagged
//! `isNonstandard` (and `isUnreleased` for moves and items) are dropped at
//! load time, and a synthetic `recharge` move is added so that request
//! payloads carrying it resolve like any other move.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::{Path, PathBuf};

use scout_protocol::to_id;
use serde_json::Value;
use thiserror::Error;

use crate::types::{BaseStats, MoveCategory, Type};

mod raw;

#[cfg(test)]
pub(crate) mod fixtures;
mod tests;

/// Which table a lookup went to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Species,
    Move,
    Item,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntryKind::Species => "species",
            EntryKind::Move => "move",
            EntryKind::Item => "item",
        })
    }
}

/// Compendium errors
#[derive(Error, Debug)]
pub enum DexError {
    #[error("unknown compendium entry: {kind} {id:?}")]
    UnknownEntry { kind: EntryKind, id: String },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed {kind} data: {source}")]
    Json {
        kind: EntryKind,
        #[source]
        source: serde_json::Error,
    },
}

impl DexError {
    fn unknown(kind: EntryKind, id: &str) -> Self {
        DexError::UnknownEntry {
            kind,
            id: id.to_string(),
        }
    }
}

/// Accuracy of a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accuracy {
    Percent(u8),
    AlwaysHits,
}

/// A species entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesEntry {
    /// Ability ids in slot order ("0", "1", "H")
    pub abilities: Vec<String>,
    pub base_stats: BaseStats,
    pub types: Vec<Type>,
}

/// A move entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEntry {
    pub name: String,
    pub move_type: Type,
    pub category: MoveCategory,
    pub base_power: u32,
    pub accuracy: Accuracy,
    pub priority: i8,
    /// Base PP before PP Ups
    pub pp: u32,
    /// Raw target class ("normal", "self", "allySide", ...)
    pub target: String,
    /// Crystal id if this is a Z-move
    pub z_crystal: Option<String>,
}

/// An item entry. Only the Z-crystal fields are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemEntry {
    pub name: String,
    pub z_move_type: Option<Type>,
    /// Name of the move a signature crystal upgrades
    pub z_move_from: Option<String>,
}

/// Immutable game data snapshot
#[derive(Debug, Clone, Default)]
pub struct Compendium {
    species: HashMap<String, SpeciesEntry>,
    moves: HashMap<String, MoveEntry>,
    // Ordered so that "first item with a z-move type" is deterministic
    items: BTreeMap<String, ItemEntry>,
}

impl Compendium {
    /// Build from the three JSON documents
    pub fn from_json(pokedex: &str, movedex: &str, itemdex: &str) -> Result<Self, DexError> {
        let species: BTreeMap<String, raw::Species> = parse(EntryKind::Species, pokedex)?;
        let moves: BTreeMap<String, raw::Move> = parse(EntryKind::Move, movedex)?;
        let items: BTreeMap<String, raw::Item> = parse(EntryKind::Item, itemdex)?;

        let mut dex = Compendium {
            species: species
                .into_iter()
                .filter(|(_, s)| !flagged(&s.is_nonstandard))
                .map(|(id, s)| (to_id(&id), s.into_entry()))
                .collect(),
            moves: moves
                .into_iter()
                .filter(|(_, m)| !flagged(&m.is_nonstandard) && !flagged(&m.is_unreleased))
                .map(|(id, m)| (to_id(&id), m.into_entry()))
                .collect(),
            items: items
                .into_iter()
                .filter(|(_, i)| !flagged(&i.is_nonstandard) && !flagged(&i.is_unreleased))
                .map(|(id, i)| (to_id(&id), i.into_entry()))
                .collect(),
        };
        dex.moves.insert("recharge".to_string(), recharge());

        tracing::debug!(
            species = dex.species.len(),
            moves = dex.moves.len(),
            items = dex.items.len(),
            "Loaded compendium"
        );
        Ok(dex)
    }

    /// Load `pokedex.json`, `movedex.json` and `itemdex.json` from a directory
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, DexError> {
        let dir = dir.as_ref();
        let read = |name: &str| {
            let path = dir.join(name);
            std::fs::read_to_string(&path).map_err(|source| DexError::Io { path, source })
        };

        Self::from_json(
            &read("pokedex.json")?,
            &read("movedex.json")?,
            &read("itemdex.json")?,
        )
    }

    pub fn species(&self, id: &str) -> Result<&SpeciesEntry, DexError> {
        self.species
            .get(id)
            .ok_or_else(|| DexError::unknown(EntryKind::Species, id))
    }

    /// Look up a move, resolving hidden power ids with a trailing "60"
    pub fn move_entry(&self, id: &str) -> Result<&MoveEntry, DexError> {
        self.moves
            .get(self.resolve_move_id(id))
            .ok_or_else(|| DexError::unknown(EntryKind::Move, id))
    }

    pub fn has_move(&self, id: &str) -> bool {
        self.moves.contains_key(self.resolve_move_id(id))
    }

    pub fn item(&self, id: &str) -> Result<&ItemEntry, DexError> {
        self.items
            .get(id)
            .ok_or_else(|| DexError::unknown(EntryKind::Item, id))
    }

    /// Older request payloads append the base power to hidden power
    /// ("hiddenpowerfire60"). Strip it when the bare id exists.
    pub fn resolve_move_id<'a>(&self, id: &'a str) -> &'a str {
        if id.starts_with("hiddenpower") {
            if let Some(stripped) = id.strip_suffix("60") {
                if self.moves.contains_key(stripped) {
                    return stripped;
                }
            }
        }
        id
    }

    /// First crystal, by id, whose Z-move type matches
    pub fn z_crystal_for_type(&self, move_type: Type) -> Option<&str> {
        self.items
            .iter()
            .find(|(_, item)| item.z_move_type == Some(move_type))
            .map(|(id, _)| id.as_str())
    }
}

fn parse<T: serde::de::DeserializeOwned>(kind: EntryKind, json: &str) -> Result<T, DexError> {
    serde_json::from_str(json).map_err(|source| DexError::Json { kind, source })
}

/// A flag counts when present and not null or false
fn flagged(value: &Option<Value>) -> bool {
    !matches!(value, None | Some(Value::Null) | Some(Value::Bool(false)))
}

fn recharge() -> MoveEntry {
    MoveEntry {
        name: "Recharge".to_string(),
        move_type: Type::Normal,
        category: MoveCategory::Status,
        base_power: 0,
        accuracy: Accuracy::AlwaysHits,
        priority: 0,
        pp: 30,
        target: "self".to_string(),
        z_crystal: None,
    }
}
