//! Update logic for processing BattleEvent into battle state

use std::sync::Arc;

use scout_protocol::{BattleEvent, HpStatus, Player, Pokemon, PokemonDetails, ServerMessage, to_id};

use super::battle::{TrackError, TrackedBattle};
use crate::types::{Observed, PokemonState, SideCondition, Status, Volatile};

impl TrackedBattle {
    /// Update battle state from a server event. Events after the end of the
    /// battle are ignored.
    pub fn update(&mut self, event: &BattleEvent) -> Result<(), TrackError> {
        if self.ended {
            return Ok(());
        }
        let attrs = &event.attributes;

        match &event.message {
            // === Battle Initialization ===
            ServerMessage::Player { player, username } => {
                if self.perspective().is_none() && *username == self.player_name {
                    self.set_perspective(*player);
                }
            }

            ServerMessage::TeamSize { player, size } => {
                if self.perspective().is_some() && !self.is_me(*player) {
                    self.opponent.announce_size(*size);
                }
            }

            ServerMessage::GameType(game_type) => {
                self.game_type = Some(*game_type);
            }

            ServerMessage::Gen(generation) => {
                self.generation = *generation;
            }

            ServerMessage::Tier(tier) => {
                self.tier = tier.clone();
            }

            ServerMessage::TeamPreview(_) | ServerMessage::BattleStart | ServerMessage::Upkeep => {}

            // === Battle Progress ===
            ServerMessage::Request(Some(request)) => {
                self.apply_request(request)?;
            }

            ServerMessage::Request(None) => {}

            ServerMessage::Turn(turn) => {
                self.turn = *turn;
            }

            ServerMessage::Win(winner) => {
                tracing::info!(winner = %winner, turn = self.turn, "Battle ended");
                self.ended = true;
                self.winner = Some(winner.clone());
            }

            ServerMessage::Tie => {
                tracing::info!(turn = self.turn, "Battle ended in a tie");
                self.ended = true;
                self.tie = true;
            }

            // === Major Actions ===
            ServerMessage::Move {
                pokemon, move_name, ..
            } => {
                // Called and reflected moves say nothing about the moveset
                if !self.is_me(pokemon.player) && attrs.from().is_none() {
                    self.handle_opponent_move(pokemon.player, move_name)?;
                }
            }

            ServerMessage::Switch {
                pokemon,
                details,
                hp_status,
            }
            | ServerMessage::Drag {
                pokemon,
                details,
                hp_status,
            } => {
                self.handle_switch(pokemon, details, hp_status.as_ref())?;
            }

            ServerMessage::Replace {
                pokemon,
                details,
                hp_status,
            } => {
                self.handle_replace(pokemon, details, hp_status.as_ref())?;
            }

            ServerMessage::DetailsChange { pokemon, details, .. } => {
                let dex = Arc::clone(&self.dex);
                let mine = self.is_me(pokemon.player);
                if let Some(active) = self.active_mut(pokemon.player) {
                    let (native, current) = (active.base_ability.clone(), active.ability.clone());
                    active.change_form(&dex, &details.species)?;
                    // Our abilities come from requests and stay known
                    if mine && active.base_ability.is_unknown() {
                        active.base_ability = native;
                        active.ability = current;
                    }
                }
            }

            ServerMessage::FormeChange {
                pokemon, species, ..
            } => {
                // Our own forme changes arrive with the next request
                let dex = Arc::clone(&self.dex);
                if !self.is_me(pokemon.player)
                    && let Some(active) = self.active_mut(pokemon.player)
                {
                    active.change_forme(&dex, species)?;
                }
            }

            ServerMessage::Cant { .. } => {}

            ServerMessage::Faint(pokemon) => {
                if let Some(active) = self.active_mut(pokemon.player) {
                    active.faint();
                }
            }

            // === HP Changes ===
            ServerMessage::Damage { pokemon, hp_status }
            | ServerMessage::Heal { pokemon, hp_status }
            | ServerMessage::SetHp { pokemon, hp_status } => {
                if let (Some(active), Some(hp)) = (self.active_mut(pokemon.player), hp_status) {
                    active.apply_condition(hp);
                }
                self.attribute_effect(Some(pokemon.player), attrs);
            }

            // === Status ===
            ServerMessage::Status { pokemon, status } => {
                if let Some(active) = self.active_mut(pokemon.player) {
                    active.status = Status::from_protocol(status);
                }
                self.attribute_effect(Some(pokemon.player), attrs);
            }

            ServerMessage::CureStatus { pokemon, .. } => {
                let cured = if pokemon.is_active() {
                    self.active_mut(pokemon.player)
                } else {
                    self.side_mut(pokemon.player)
                        .find_nickname_mut(&pokemon.name)
                };
                if let Some(cured) = cured {
                    cured.status = None;
                }
                self.attribute_effect(Some(pokemon.player), attrs);
            }

            ServerMessage::CureTeam(pokemon) => {
                for member in self.side_mut(pokemon.player).members_mut() {
                    if !member.is_fainted() {
                        member.status = None;
                    }
                }
            }

            // === Boosts ===
            ServerMessage::Boost {
                pokemon,
                stat,
                amount,
            } => {
                self.side_mut(pokemon.player).boosts.boost(*stat, *amount);
                self.attribute_effect(Some(pokemon.player), attrs);
            }

            ServerMessage::Unboost {
                pokemon,
                stat,
                amount,
            } => {
                self.side_mut(pokemon.player).boosts.unboost(*stat, *amount);
                self.attribute_effect(Some(pokemon.player), attrs);
            }

            ServerMessage::SetBoost {
                pokemon,
                stat,
                amount,
            } => {
                // Anger Point reports 12
                self.side_mut(pokemon.player).boosts.set(*stat, *amount);
                self.attribute_effect(Some(pokemon.player), attrs);
            }

            ServerMessage::SwapBoost { source, stats, .. } => {
                self.me.boosts.swap_with(&mut self.opponent.boosts, stats);
                self.attribute_effect(Some(source.player), attrs);
            }

            ServerMessage::CopyBoost { source, stats, .. } => {
                if self.is_me(source.player) {
                    self.me.boosts.copy_from(&self.opponent.boosts, stats);
                } else {
                    self.opponent.boosts.copy_from(&self.me.boosts, stats);
                }
                self.attribute_effect(Some(source.player), attrs);
            }

            ServerMessage::InvertBoost(pokemon) => {
                self.side_mut(pokemon.player).boosts.invert();
                self.attribute_effect(Some(pokemon.player), attrs);
            }

            ServerMessage::ClearBoost(pokemon) => {
                self.side_mut(pokemon.player).boosts.clear();
                self.attribute_effect(Some(pokemon.player), attrs);
            }

            ServerMessage::ClearAllBoost => {
                self.me.boosts.clear();
                self.opponent.boosts.clear();
            }

            ServerMessage::ClearPositiveBoost { target, .. } => {
                self.side_mut(target.player).boosts.clear_positive();
                self.attribute_effect(Some(target.player), attrs);
            }

            ServerMessage::ClearNegativeBoost(pokemon) => {
                self.side_mut(pokemon.player).boosts.clear_negative();
                self.attribute_effect(Some(pokemon.player), attrs);
            }

            // === Field Conditions ===
            ServerMessage::Weather { weather, .. } => {
                if !self.field.apply_weather(weather) {
                    tracing::info!(weather = %weather, "Unknown weather");
                }
                if to_id(weather) != "none" {
                    self.attribute_effect(self.perspective(), attrs);
                }
            }

            ServerMessage::FieldStart(condition) => {
                if !self.field.apply_field_start(condition) {
                    tracing::info!(condition = %condition, "Unknown field condition");
                }
                self.attribute_effect(self.perspective(), attrs);
            }

            ServerMessage::FieldEnd(condition) => {
                if !self.field.apply_field_end(condition) {
                    tracing::info!(condition = %condition, "Unknown field condition");
                }
            }

            // === Side Conditions ===
            ServerMessage::SideStart { side, condition } => {
                match SideCondition::from_protocol(condition) {
                    Some(cond) => {
                        self.side_mut(side.player).add_condition(cond);
                    }
                    None => tracing::info!(condition = %condition, "Unknown side condition"),
                }
                self.attribute_effect(Some(side.player), attrs);
            }

            ServerMessage::SideEnd { side, condition } => {
                match SideCondition::from_protocol(condition) {
                    Some(cond) => {
                        self.side_mut(side.player).remove_condition(cond);
                    }
                    None => tracing::info!(condition = %condition, "Unknown side condition"),
                }
            }

            // === Volatile Effects ===
            ServerMessage::VolatileStart {
                pokemon,
                effect,
                detail,
            } => {
                self.handle_volatile_start(pokemon, effect, detail.as_deref(), attrs);
            }

            ServerMessage::VolatileEnd { pokemon, effect } => {
                match Volatile::from_protocol(effect) {
                    Some(volatile) => {
                        self.side_mut(pokemon.player).volatiles.remove(&volatile);
                    }
                    None => tracing::info!(effect = %effect, "Unknown volatile effect"),
                }
            }

            // === Items and Abilities ===
            ServerMessage::Item { pokemon, item } => {
                if let Some(active) = self.active_mut(pokemon.player) {
                    active.item = Observed::from_wire(item);
                }
                // Frisk names the holder in [of]
                self.attribute_effect(Some(pokemon.player), attrs);
            }

            ServerMessage::EndItem { pokemon, .. } => {
                if let Some(active) = self.active_mut(pokemon.player) {
                    active.item = Observed::Absent;
                }
            }

            ServerMessage::Ability { pokemon, ability } => {
                if let Some(active) = self.active_mut(pokemon.player) {
                    active.set_ability(ability);
                }
            }

            ServerMessage::EndAbility { pokemon, ability } => {
                if let Some(active) = self.active_mut(pokemon.player) {
                    // Transform sends -endability for an ability already replaced
                    let current = ability
                        .as_deref()
                        .is_none_or(|name| active.ability.is(&to_id(name)));
                    if current {
                        active.update_ability("");
                    }
                }
            }

            ServerMessage::Transform { pokemon, .. } => {
                self.handle_transform(pokemon, attrs)?;
            }

            ServerMessage::Mega {
                pokemon, megastone, ..
            } => {
                self.side_mut(pokemon.player).mega_used = true;
                if !self.is_me(pokemon.player)
                    && let Some(active) = self.active_mut(pokemon.player)
                {
                    active.item = Observed::from_wire(megastone);
                }
            }

            ServerMessage::ZPower(pokemon) => {
                self.side_mut(pokemon.player).z_used = true;
            }

            ServerMessage::Activate {
                pokemon,
                effect,
                args,
            } => {
                self.handle_activate(pokemon.as_ref(), effect, args, attrs)?;
            }

            // === Informational ===
            ServerMessage::Fail { .. }
            | ServerMessage::Miss { .. }
            | ServerMessage::Crit(_)
            | ServerMessage::SuperEffective(_)
            | ServerMessage::Resisted(_)
            | ServerMessage::Immune(_)
            | ServerMessage::Raw(_) => {}
        }

        Ok(())
    }

    /// Resolve a move used by the opponent and reveal it. Z-moves are mapped
    /// back to the base move and give away the crystal.
    fn handle_opponent_move(&mut self, player: Player, move_name: &str) -> Result<(), TrackError> {
        let dex = Arc::clone(&self.dex);
        let id = to_id(move_name);

        let (revealed, crystal) = match id.strip_prefix('z').filter(|base| dex.has_move(base)) {
            // Z-powered status move ("Z-Bulk Up")
            Some(base) if !dex.has_move(&id) => {
                let move_type = dex.move_entry(base)?.move_type;
                let crystal = dex.z_crystal_for_type(move_type).map(str::to_string);
                (Some(base.to_string()), crystal)
            }
            _ => {
                let entry = dex.move_entry(&id)?;
                match &entry.z_crystal {
                    Some(crystal) => {
                        let base = dex.item(crystal)?.z_move_from.as_deref().map(to_id);
                        (base, Some(crystal.clone()))
                    }
                    None => (Some(id.clone()), None),
                }
            }
        };

        let Some(active) = self.active_mut(player) else {
            tracing::debug!(id = %id, "Move from an opponent with no active Pokemon");
            return Ok(());
        };
        if let Some(crystal) = crystal {
            active.item = Observed::Known(crystal);
        }
        if let Some(base) = revealed {
            active.reveal_move(&dex, &base, true)?;
        }
        Ok(())
    }

    fn handle_switch(
        &mut self,
        pokemon: &Pokemon,
        details: &PokemonDetails,
        hp_status: Option<&HpStatus>,
    ) -> Result<(), TrackError> {
        let dex = Arc::clone(&self.dex);

        if self.is_me(pokemon.player) {
            let side = &mut self.me;
            side.clear_switch_state();
            if let Some(outgoing) = side.active_pokemon_mut() {
                outgoing.switch_out(&dex)?;
            }

            match side.find_species(&details.species_id()) {
                Some(idx) => {
                    side.bring_to_front(idx);
                    if let (Some(active), Some(hp)) = (side.active_pokemon_mut(), hp_status) {
                        active.apply_condition(hp);
                    }
                }
                None => {
                    tracing::warn!(species = %details.species, "Switched in a Pokemon missing from our roster");
                }
            }
        } else {
            let side = &mut self.opponent;
            if let Some(outgoing) = side.active_pokemon_mut() {
                outgoing.switch_out(&dex)?;
            }
            side.clear_switch_state();
            self.place_opponent(pokemon, details, hp_status)?;
        }

        Ok(())
    }

    /// Illusion broke: the active Pokemon is someone else. Nothing left the
    /// field, so boosts and volatiles stay.
    fn handle_replace(
        &mut self,
        pokemon: &Pokemon,
        details: &PokemonDetails,
        hp_status: Option<&HpStatus>,
    ) -> Result<(), TrackError> {
        if self.is_me(pokemon.player) {
            if let Some(idx) = self.me.find_species(&details.species_id()) {
                self.me.bring_to_front(idx);
            }
            return Ok(());
        }
        self.place_opponent(pokemon, details, hp_status)
    }

    /// Make the named opponent active, creating it on first sight
    fn place_opponent(
        &mut self,
        pokemon: &Pokemon,
        details: &PokemonDetails,
        hp_status: Option<&HpStatus>,
    ) -> Result<(), TrackError> {
        let dex = Arc::clone(&self.dex);
        let side = &mut self.opponent;
        let species = details.species_id();

        let Some(idx) = side.slot_for(&species) else {
            tracing::warn!(
                species = %species,
                size = side.roster.len(),
                "Opponent roster is full, ignoring switch"
            );
            side.active = None;
            return Ok(());
        };

        match side.roster[idx].as_mut() {
            Some(existing) => {
                if let Some(hp) = hp_status {
                    existing.apply_condition(hp);
                }
            }
            None => {
                let seen = PokemonState::from_switch(&dex, details, &pokemon.name, hp_status)?;
                tracing::debug!(species = %species, slot = idx, "New opponent Pokemon");
                side.roster[idx] = Some(seen);
            }
        }
        side.active = Some(idx);
        Ok(())
    }
}
