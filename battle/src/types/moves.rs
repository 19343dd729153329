//! Moves as they sit in a Pokemon's move slots

use scout_protocol::{MoveSlot, to_id};
use serde::Deserialize;

use super::pokemon_type::Type;
use crate::dex::{Accuracy, Compendium, DexError};

/// Damage category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

/// Canonical target class. Every single-target or spread attack collapses to
/// `Normal` and every self-targeting move to `User`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MoveTarget {
    Normal,
    User,
    AdjacentAlly,
    Allies,
    AllySide,
    AllyTeam,
    All,
    FoeSide,
    Other(String),
}

impl MoveTarget {
    pub fn from_protocol(s: &str) -> Self {
        match s {
            "any" | "allAdjacentFoes" | "scripted" | "normal" | "allAdjacent" | "adjacentFoe"
            | "randomNormal" => MoveTarget::Normal,
            "adjacentAllyOrSelf" | "self" => MoveTarget::User,
            "adjacentAlly" => MoveTarget::AdjacentAlly,
            "allies" => MoveTarget::Allies,
            "allySide" => MoveTarget::AllySide,
            "allyTeam" => MoveTarget::AllyTeam,
            "all" => MoveTarget::All,
            "foeSide" => MoveTarget::FoeSide,
            other => MoveTarget::Other(other.to_string()),
        }
    }
}

/// A move known to be in a slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub id: String,
    pub move_type: Type,
    pub category: MoveCategory,
    pub power: u32,
    pub accuracy: Accuracy,
    pub priority: i8,
    pub max_pp: u32,
    pub pp: u32,
    pub target: MoveTarget,
    pub disabled: bool,
}

impl Move {
    /// Build a move from the compendium. PP defaults to the maximum.
    pub fn from_id(
        dex: &Compendium,
        id: &str,
        pp: Option<u32>,
        disabled: bool,
    ) -> Result<Self, DexError> {
        let id = to_id(id);
        let id = dex.resolve_move_id(&id);
        let entry = dex.move_entry(id)?;
        let max_pp = entry.pp * 8 / 5;

        Ok(Self {
            id: id.to_string(),
            move_type: entry.move_type,
            category: entry.category,
            power: entry.base_power,
            accuracy: entry.accuracy,
            priority: entry.priority,
            max_pp,
            pp: pp.unwrap_or(max_pp),
            target: MoveTarget::from_protocol(&entry.target),
            disabled,
        })
    }

    /// Build a move from a request's active move list
    pub fn from_request(dex: &Compendium, slot: &MoveSlot) -> Result<Self, DexError> {
        Self::from_id(dex, &slot.id, slot.pp, slot.disabled)
    }

    /// The 5/5 PP copy a transformed Pokemon gets
    pub fn transform_copy(dex: &Compendium, id: &str) -> Result<Self, DexError> {
        let mut copy = Self::from_id(dex, id, Some(5), false)?;
        copy.max_pp = 5;
        Ok(copy)
    }

    /// Spend one PP
    pub fn consume_pp(&mut self) {
        self.pp = self.pp.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dex::fixtures::test_dex;

    #[test]
    fn test_from_id_defaults_pp_to_max() {
        let dex = test_dex();
        let tackle = Move::from_id(&dex, "tackle", None, false).unwrap();
        assert_eq!(tackle.max_pp, 56);
        assert_eq!(tackle.pp, 56);
        assert_eq!(tackle.move_type, Type::Normal);
        assert_eq!(tackle.target, MoveTarget::Normal);
        assert_eq!(tackle.accuracy, Accuracy::Percent(100));
    }

    #[test]
    fn test_from_id_keeps_explicit_pp() {
        let dex = test_dex();
        let wish = Move::from_id(&dex, "Wish", Some(3), true).unwrap();
        assert_eq!(wish.id, "wish");
        assert_eq!(wish.pp, 3);
        assert_eq!(wish.max_pp, 16);
        assert!(wish.disabled);
        assert_eq!(wish.target, MoveTarget::User);
        assert_eq!(wish.category, MoveCategory::Status);

        let empty = Move::from_id(&dex, "tackle", Some(0), false).unwrap();
        assert_eq!(empty.pp, 0);
    }

    #[test]
    fn test_from_id_strips_hidden_power_suffix() {
        let dex = test_dex();
        let hp = Move::from_id(&dex, "hiddenpowerfire60", None, false).unwrap();
        assert_eq!(hp.id, "hiddenpowerfire");
        assert_eq!(hp.move_type, Type::Fire);
    }

    #[test]
    fn test_from_id_unknown() {
        let dex = test_dex();
        let err = Move::from_id(&dex, "notamove", None, false).unwrap_err();
        assert!(matches!(err, DexError::UnknownEntry { .. }));
    }

    #[test]
    fn test_target_collapse() {
        let dex = test_dex();
        let eq = Move::from_id(&dex, "earthquake", None, false).unwrap();
        assert_eq!(eq.target, MoveTarget::Normal);

        assert_eq!(MoveTarget::from_protocol("allySide"), MoveTarget::AllySide);
        assert_eq!(
            MoveTarget::from_protocol("weird"),
            MoveTarget::Other("weird".to_string())
        );
    }

    #[test]
    fn test_recharge_resolves() {
        let dex = test_dex();
        let recharge = Move::from_id(&dex, "recharge", None, false).unwrap();
        assert_eq!(recharge.max_pp, 48);
        assert_eq!(recharge.target, MoveTarget::User);
        assert_eq!(recharge.accuracy, Accuracy::AlwaysHits);
    }

    #[test]
    fn test_transform_copy() {
        let dex = test_dex();
        let copy = Move::transform_copy(&dex, "psychic").unwrap();
        assert_eq!(copy.pp, 5);
        assert_eq!(copy.max_pp, 5);
    }

    #[test]
    fn test_consume_pp_saturates() {
        let dex = test_dex();
        let mut tackle = Move::from_id(&dex, "tackle", Some(1), false).unwrap();
        tackle.consume_pp();
        tackle.consume_pp();
        assert_eq!(tackle.pp, 0);
    }
}
