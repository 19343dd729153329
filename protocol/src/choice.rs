//! Half-turn choices sent back to the simulator

use std::fmt;
use std::str::FromStr;

use crate::ParseError;
use crate::server::Player;

/// A single decision for one half-turn. Slots are 1-based, as on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    /// team SLOT (team preview lead)
    Team(usize),

    /// switch SLOT
    Switch(usize),

    /// move SLOT
    Move(usize),
}

impl Choice {
    /// Serialize choice to protocol format
    pub fn to_protocol_string(&self) -> String {
        match self {
            Self::Team(slot) => format!("team {}", slot),
            Self::Switch(slot) => format!("switch {}", slot),
            Self::Move(slot) => format!("move {}", slot),
        }
    }

    /// The 1-based slot this choice refers to
    pub fn slot(&self) -> usize {
        match self {
            Self::Team(slot) | Self::Switch(slot) | Self::Move(slot) => *slot,
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_protocol_string())
    }
}

impl FromStr for Choice {
    type Err = ParseError;

    /// Parse "team 1", "switch 2" or "move 3"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::EmptyMessage);
        }

        let (kind, slot) = s
            .split_once(' ')
            .ok_or_else(|| ParseError::MissingField("choice slot".to_string()))?;
        let slot: usize = slot
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidFormat(format!("bad choice slot: {}", slot)))?;
        if slot == 0 {
            return Err(ParseError::InvalidFormat("choice slots are 1-based".to_string()));
        }

        match kind {
            "team" => Ok(Self::Team(slot)),
            "switch" => Ok(Self::Switch(slot)),
            "move" => Ok(Self::Move(slot)),
            other => Err(ParseError::InvalidFormat(format!("unknown choice: {}", other))),
        }
    }
}

/// A choice addressed to one seat of a locally simulated battle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceMessage {
    pub player: Player,
    pub choice: Choice,
}

impl ChoiceMessage {
    pub fn new(player: Player, choice: Choice) -> Self {
        Self { player, choice }
    }

    /// Serialize to simulator input format: >p1 move 1
    pub fn to_wire_format(&self) -> String {
        format!(">{} {}", self.player.as_str(), self.choice)
    }
}
