//! Side (player) state

use std::collections::{HashMap, HashSet};

use super::conditions::SideCondition;
use super::pokemon::PokemonState;
use super::stats::StatStages;
use super::status::Volatile;

/// One player's side of the battle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SideState {
    /// Roster in party order. `None` is a slot allocated for a Pokemon not
    /// seen yet.
    pub roster: Vec<Option<PokemonState>>,

    /// Index of the active Pokemon in `roster`
    pub active: Option<usize>,

    // === Cleared on switch ===
    /// Stat stage modifiers of whatever is active
    pub boosts: StatStages,

    pub volatiles: HashSet<Volatile>,

    /// Side conditions and how many layers of each are down
    pub conditions: HashMap<SideCondition, u8>,

    // === Once per battle ===
    pub mega_used: bool,
    pub z_used: bool,

    /// Roster length was fixed by a team size announcement
    size_announced: bool,
}

impl SideState {
    /// Create a new side state
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the active Pokemon
    pub fn active_pokemon(&self) -> Option<&PokemonState> {
        self.active.and_then(|idx| self.get(idx))
    }

    /// Get the active Pokemon mutably
    pub fn active_pokemon_mut(&mut self) -> Option<&mut PokemonState> {
        let idx = self.active?;
        self.get_mut(idx)
    }

    /// Get a Pokemon by roster index
    pub fn get(&self, index: usize) -> Option<&PokemonState> {
        self.roster.get(index).and_then(Option::as_ref)
    }

    /// Get a Pokemon by roster index mutably
    pub fn get_mut(&mut self, index: usize) -> Option<&mut PokemonState> {
        self.roster.get_mut(index).and_then(Option::as_mut)
    }

    /// Iterate over seen Pokemon with their roster index
    pub fn members(&self) -> impl Iterator<Item = (usize, &PokemonState)> {
        self.roster
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|p| (idx, p)))
    }

    /// Iterate over seen Pokemon mutably
    pub fn members_mut(&mut self) -> impl Iterator<Item = &mut PokemonState> {
        self.roster.iter_mut().flatten()
    }

    /// Find a Pokemon by species id
    pub fn find_species(&self, species: &str) -> Option<usize> {
        self.members()
            .find(|(_, p)| p.species == species)
            .map(|(idx, _)| idx)
    }

    /// Find a Pokemon by nickname and get a mutable reference
    pub fn find_nickname_mut(&mut self, nickname: &str) -> Option<&mut PokemonState> {
        self.members_mut().find(|p| p.nickname == nickname)
    }

    /// Count non-fainted Pokemon
    pub fn alive_count(&self) -> usize {
        self.members().filter(|(_, p)| !p.is_fainted()).count()
    }

    // === Roster bookkeeping ===

    /// Fix the roster at `size` empty slots
    pub fn announce_size(&mut self, size: usize) {
        self.roster = vec![None; size];
        self.active = None;
        self.size_announced = true;
    }

    pub fn is_size_announced(&self) -> bool {
        self.size_announced
    }

    /// Slot for a species seen switching in: the slot already holding it,
    /// else the first empty one. A roster of unknown size grows by one.
    /// None when the announced roster is full of other species.
    pub fn slot_for(&mut self, species: &str) -> Option<usize> {
        let found = self
            .roster
            .iter()
            .position(|slot| slot.as_ref().is_none_or(|p| p.species == species));

        match found {
            Some(idx) => Some(idx),
            None if !self.size_announced => {
                self.roster.push(None);
                Some(self.roster.len() - 1)
            }
            None => None,
        }
    }

    /// Move a roster member to the front and make it active, the way the
    /// simulator orders our own party
    pub fn bring_to_front(&mut self, index: usize) {
        self.roster.swap(0, index);
        self.active = Some(0);
    }

    /// Drop boosts and volatiles of the outgoing Pokemon
    pub fn clear_switch_state(&mut self) {
        self.boosts.clear();
        self.volatiles.clear();
    }

    // === Side conditions ===

    /// Check if side has a condition
    pub fn has_condition(&self, cond: SideCondition) -> bool {
        self.conditions.contains_key(&cond)
    }

    /// Get layers for a condition (0 if not present)
    pub fn condition_layers(&self, cond: SideCondition) -> u8 {
        self.conditions.get(&cond).copied().unwrap_or(0)
    }

    /// Add a side condition
    /// Returns true if the condition was added (false if already at max layers)
    pub fn add_condition(&mut self, cond: SideCondition) -> bool {
        let layers = self.conditions.entry(cond).or_insert(0);
        if *layers < cond.max_layers() {
            *layers += 1;
            true
        } else {
            false
        }
    }

    /// Remove a side condition along with all of its layers
    pub fn remove_condition(&mut self, cond: SideCondition) -> bool {
        self.conditions.remove(&cond).is_some()
    }
}
