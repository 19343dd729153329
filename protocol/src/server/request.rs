//! `|request|` payloads: the JSON the server sends when a decision is due

use serde::{Deserialize, Deserializer};

use super::battle::{HpStatus, Player, PokemonDetails};

/// One decision request. Exactly one of `wait`, `force_switch`,
/// `team_preview` or `active` describes what is being asked.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleRequest {
    pub rqid: Option<u64>,

    /// Active slots and their usable moves
    #[serde(default)]
    pub active: Option<Vec<ActivePokemon>>,

    pub side: Option<SideInfo>,

    /// Per-slot flags; only their presence matters in singles
    #[serde(default)]
    pub force_switch: Option<Vec<bool>>,

    #[serde(default)]
    pub team_preview: bool,

    /// Nothing to decide until the opponent has moved
    #[serde(default)]
    pub wait: bool,
}

impl BattleRequest {
    pub fn is_force_switch(&self) -> bool {
        self.force_switch.is_some()
    }

    /// Whether the request asks for any choice at all
    pub fn needs_decision(&self) -> bool {
        !self.wait && (self.team_preview || self.is_force_switch() || self.active.is_some())
    }

    /// Moves of the first active slot
    pub fn active_moves(&self) -> Option<&[MoveSlot]> {
        let first = self.active.as_deref()?.first()?;
        Some(first.moves.as_slice())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivePokemon {
    #[serde(default)]
    pub moves: Vec<MoveSlot>,

    #[serde(default)]
    pub trapped: bool,

    #[serde(default)]
    pub maybe_trapped: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub name: String,

    pub id: String,

    /// Absent for Recharge and Struggle
    #[serde(default)]
    pub pp: Option<u32>,

    #[serde(default, rename = "maxpp")]
    pub max_pp: Option<u32>,

    #[serde(default)]
    pub target: String,

    /// Sent as a bool or as the name of whatever disabled the move
    #[serde(default, deserialize_with = "flag_or_reason")]
    pub disabled: bool,
}

fn flag_or_reason<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Disabled {
        Flag(bool),
        Reason(String),
    }

    Ok(match Disabled::deserialize(deserializer)? {
        Disabled::Flag(flag) => flag,
        Disabled::Reason(reason) => !reason.is_empty(),
    })
}

/// The requesting player's own side
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SideInfo {
    pub name: String,

    /// Seat id ("p1", "p2")
    pub id: String,

    /// Roster in party order
    #[serde(default)]
    pub pokemon: Vec<SidePokemon>,
}

impl SideInfo {
    pub fn player(&self) -> Option<Player> {
        Player::parse(&self.id)
    }
}

/// A fully known member of the requesting player's team
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidePokemon {
    /// "p1: Nickname"
    pub ident: String,

    /// "Species, L50, M"
    pub details: String,

    /// "current/max status", or "0 fnt"
    pub condition: String,

    #[serde(default)]
    pub active: bool,

    #[serde(default)]
    pub stats: PokemonStats,

    /// Move ids in slot order
    #[serde(default)]
    pub moves: Vec<String>,

    #[serde(default)]
    pub base_ability: String,

    /// Only sent once the ability differs from the native one
    #[serde(default)]
    pub ability: String,

    /// Item id, "" when nothing is held
    #[serde(default)]
    pub item: String,
}

impl SidePokemon {
    pub fn hp_status(&self) -> Option<HpStatus> {
        HpStatus::parse(&self.condition)
    }

    pub fn parsed_details(&self) -> PokemonDetails {
        PokemonDetails::parse(&self.details)
    }

    pub fn nickname(&self) -> &str {
        self.ident
            .split_once(": ")
            .map_or(self.ident.as_str(), |(_, name)| name)
    }
}

/// Stat spread of one of our own Pokemon, HP excluded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct PokemonStats {
    pub atk: u32,
    pub def: u32,
    pub spa: u32,
    pub spd: u32,
    pub spe: u32,
}
