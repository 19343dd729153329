//! TrackedBattle - main battle state tracking struct

use std::sync::Arc;

use scout_protocol::{GameType, Player, parse_battle_event};
use thiserror::Error;

use crate::dex::{Compendium, DexError};
use crate::types::{FieldState, PokemonState, SideState};

/// Errors that stop the tracker from applying an event
#[derive(Error, Debug)]
pub enum TrackError {
    #[error(transparent)]
    Dex(#[from] DexError),
}

/// What the last request asked of us
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestState {
    /// Nothing to decide until the opponent acts
    #[default]
    Waiting,
    /// The active Pokemon fainted or was forced out
    ForceSwitch,
    TeamPreview,
    /// A regular turn
    Move,
}

/// A battle being tracked from server messages
///
/// This struct reconstructs battle state from the protocol messages
/// received from the Pokemon Showdown server. It maintains the perspective
/// of one player and tracks what information has been revealed.
#[derive(Debug, Clone)]
pub struct TrackedBattle {
    // === Configuration ===
    pub(super) dex: Arc<Compendium>,

    /// Username whose `player` line decides our seat
    pub(super) player_name: String,

    // === Battle metadata ===
    /// Game type (singles, doubles, etc.)
    pub game_type: Option<GameType>,

    /// Generation (1-9)
    pub generation: u8,

    /// Format/tier name
    pub tier: String,

    /// Current turn number (0 = not started)
    pub turn: u32,

    // === State ===
    /// Global field state (weather, terrain, etc.)
    pub field: FieldState,

    /// Our side
    pub me: SideState,

    /// The opposing side
    pub opponent: SideState,

    /// What the last request asked for
    pub request_state: RequestState,

    // === Perspective ===
    /// Which seat we occupy, once known
    perspective: Option<Player>,

    // === Outcome ===
    /// Whether the battle has ended
    pub ended: bool,

    /// Winner's username (if ended)
    pub winner: Option<String>,

    /// Whether the battle ended in a tie
    pub tie: bool,
}

impl TrackedBattle {
    /// Create a new battle tracker
    pub fn new(dex: Arc<Compendium>, player_name: impl Into<String>) -> Self {
        Self {
            dex,
            player_name: player_name.into(),
            game_type: None,
            generation: 7,
            tier: String::new(),
            turn: 0,
            field: FieldState::new(),
            me: SideState::new(),
            opponent: SideState::new(),
            request_state: RequestState::Waiting,
            perspective: None,
            ended: false,
            winner: None,
            tie: false,
        }
    }

    /// Forget everything about the current battle
    pub fn reset(&mut self) {
        *self = Self::new(Arc::clone(&self.dex), std::mem::take(&mut self.player_name));
    }

    pub fn dex(&self) -> &Compendium {
        &self.dex
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Set the perspective (which player we are)
    pub fn set_perspective(&mut self, player: Player) {
        self.perspective = Some(player);
    }

    /// Get the current perspective
    pub fn perspective(&self) -> Option<Player> {
        self.perspective
    }

    /// Whether `player` is our seat. An unbound seat counts as the opponent.
    pub fn is_me(&self, player: Player) -> bool {
        self.perspective == Some(player)
    }

    /// The side a seat belongs to
    pub fn side(&self, player: Player) -> &SideState {
        if self.is_me(player) {
            &self.me
        } else {
            &self.opponent
        }
    }

    /// The side a seat belongs to, mutably
    pub fn side_mut(&mut self, player: Player) -> &mut SideState {
        if self.is_me(player) {
            &mut self.me
        } else {
            &mut self.opponent
        }
    }

    /// Active Pokemon of a seat
    pub fn active(&self, player: Player) -> Option<&PokemonState> {
        self.side(player).active_pokemon()
    }

    /// Active Pokemon of a seat, mutably
    pub fn active_mut(&mut self, player: Player) -> Option<&mut PokemonState> {
        self.side_mut(player).active_pokemon_mut()
    }

    // === Request state ===

    pub fn awaiting_opponent(&self) -> bool {
        self.request_state == RequestState::Waiting
    }

    pub fn forced_switch_pending(&self) -> bool {
        self.request_state == RequestState::ForceSwitch
    }

    pub fn team_preview_pending(&self) -> bool {
        self.request_state == RequestState::TeamPreview
    }

    /// A choice was sent; nothing to decide until the next request
    pub fn record_choice(&mut self) {
        self.request_state = RequestState::Waiting;
    }

    /// Check if battle has ended
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// Parse and apply one protocol line. Lines that fail to parse are logged
    /// and skipped.
    pub fn process_line(&mut self, line: &str) -> Result<(), TrackError> {
        match parse_battle_event(line) {
            Ok(Some(event)) => self.update(&event),
            Ok(None) => Ok(()),
            Err(e) => {
                tracing::debug!(error = %e, line, "Skipping malformed line");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dex::fixtures::test_dex;

    #[test]
    fn test_new_battle() {
        let battle = TrackedBattle::new(test_dex(), "Alice");
        assert_eq!(battle.player_name(), "Alice");
        assert_eq!(battle.turn, 0);
        assert!(battle.perspective().is_none());
        assert!(battle.awaiting_opponent());
        assert!(!battle.is_ended());
    }

    #[test]
    fn test_perspective() {
        let mut battle = TrackedBattle::new(test_dex(), "Alice");
        assert!(!battle.is_me(Player::P1));

        battle.set_perspective(Player::P2);
        assert!(battle.is_me(Player::P2));
        assert!(!battle.is_me(Player::P1));

        battle.side_mut(Player::P2).mega_used = true;
        assert!(battle.me.mega_used);
        assert!(!battle.side(Player::P1).mega_used);
    }

    #[test]
    fn test_request_state_accessors() {
        let mut battle = TrackedBattle::new(test_dex(), "Alice");

        battle.request_state = RequestState::ForceSwitch;
        assert!(battle.forced_switch_pending());
        assert!(!battle.awaiting_opponent());
        assert!(!battle.team_preview_pending());

        battle.record_choice();
        assert!(battle.awaiting_opponent());
    }

    #[test]
    fn test_process_line_skips_garbage() {
        let mut battle = TrackedBattle::new(test_dex(), "Alice");
        battle.process_line("|switch|nonsense").unwrap();
        battle.process_line("not a protocol line").unwrap();
        battle.process_line("|turn|3").unwrap();
        assert_eq!(battle.turn, 3);
    }

    #[test]
    fn test_reset() {
        let mut battle = TrackedBattle::new(test_dex(), "Alice");
        battle.set_perspective(Player::P1);
        battle.turn = 12;
        battle.ended = true;

        battle.reset();
        assert_eq!(battle.turn, 0);
        assert!(!battle.ended);
        assert!(battle.perspective().is_none());
        assert_eq!(battle.player_name(), "Alice");
    }
}
