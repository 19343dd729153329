//! Candidate choices for the pending decision

use scout_protocol::Choice;

use crate::tracking::{RequestState, TrackedBattle};

/// List the choices the last request allows, in slot order: moves first, then
/// switches. Empty while waiting on the opponent.
///
/// Only what the tracker knows is checked (disabled moves, fainted or active
/// switch targets). Trapping and similar restrictions are left to the caller.
pub fn available_choices(battle: &TrackedBattle) -> Vec<Choice> {
    match battle.request_state {
        RequestState::Waiting => Vec::new(),
        RequestState::TeamPreview => (1..=battle.me.roster.len()).map(Choice::Team).collect(),
        RequestState::ForceSwitch => switch_choices(battle).collect(),
        RequestState::Move => move_choices(battle).chain(switch_choices(battle)).collect(),
    }
}

/// Usable moves of our active Pokemon
pub fn move_choices(battle: &TrackedBattle) -> impl Iterator<Item = Choice> + '_ {
    battle
        .me
        .active_pokemon()
        .into_iter()
        .flat_map(|active| active.moves.iter().enumerate())
        .filter(|(_, slot)| slot.as_ref().is_some_and(|m| !m.disabled))
        .map(|(idx, _)| Choice::Move(idx + 1))
}

/// Healthy benched Pokemon we could bring in
pub fn switch_choices(battle: &TrackedBattle) -> impl Iterator<Item = Choice> + '_ {
    battle
        .me
        .members()
        .filter(|(idx, p)| battle.me.active != Some(*idx) && !p.is_fainted())
        .map(|(idx, _)| Choice::Switch(idx + 1))
}
