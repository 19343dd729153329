//! On-disk shape of the compendium JSON

use std::collections::BTreeMap;

use scout_protocol::to_id;
use serde::Deserialize;
use serde::de::IgnoredAny;
use serde_json::Value;

use super::{Accuracy, ItemEntry, MoveEntry, SpeciesEntry, flagged};
use crate::types::{BaseStats, MoveCategory, Type};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct Species {
    #[serde(default)]
    abilities: BTreeMap<String, String>,
    #[serde(default)]
    base_stats: BaseStats,
    #[serde(default)]
    types: Vec<String>,
    #[serde(default)]
    pub is_nonstandard: Option<Value>,
    #[serde(default)]
    unreleased_hidden: Option<Value>,
}

impl Species {
    pub fn into_entry(self) -> SpeciesEntry {
        let hidden_unreleased = flagged(&self.unreleased_hidden);
        // Slot keys "0" < "1" < "H" < "S" sort into the simulator's order
        let abilities = self
            .abilities
            .into_iter()
            .filter(|(slot, _)| !(hidden_unreleased && slot == "H"))
            .map(|(_, name)| to_id(&name))
            .collect();

        SpeciesEntry {
            abilities,
            base_stats: self.base_stats,
            types: self.types.iter().filter_map(|t| Type::from_protocol(t)).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawAccuracy {
    Percent(u8),
    /// `true` in the data: the move never misses
    Flag(IgnoredAny),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct Move {
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    move_type: String,
    category: MoveCategory,
    #[serde(default)]
    base_power: u32,
    accuracy: RawAccuracy,
    #[serde(default)]
    priority: i8,
    #[serde(default)]
    pp: u32,
    #[serde(default)]
    target: String,
    #[serde(default)]
    is_z: Option<Value>,
    #[serde(default)]
    pub is_nonstandard: Option<Value>,
    #[serde(default)]
    pub is_unreleased: Option<Value>,
}

impl Move {
    pub fn into_entry(self) -> MoveEntry {
        MoveEntry {
            name: self.name,
            move_type: Type::from_protocol(&self.move_type).unwrap_or(Type::Typeless),
            category: self.category,
            base_power: self.base_power,
            accuracy: match self.accuracy {
                RawAccuracy::Percent(p) => Accuracy::Percent(p),
                RawAccuracy::Flag(_) => Accuracy::AlwaysHits,
            },
            priority: self.priority,
            pp: self.pp,
            target: self.target,
            z_crystal: self.is_z.as_ref().and_then(Value::as_str).map(to_id),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct Item {
    #[serde(default)]
    name: String,
    #[serde(default)]
    z_move_type: Option<String>,
    #[serde(default)]
    z_move_from: Option<String>,
    #[serde(default)]
    pub is_nonstandard: Option<Value>,
    #[serde(default)]
    pub is_unreleased: Option<Value>,
}

impl Item {
    pub fn into_entry(self) -> ItemEntry {
        ItemEntry {
            name: self.name,
            z_move_type: self.z_move_type.as_deref().and_then(Type::from_protocol),
            z_move_from: self.z_move_from,
        }
    }
}
