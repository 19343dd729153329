//! Merging `|request|` payloads into our own side

use std::sync::Arc;

use scout_protocol::BattleRequest;

use super::battle::{RequestState, TrackError, TrackedBattle};
use crate::types::{Move, PokemonState};

impl TrackedBattle {
    /// Apply a request payload. The first one builds our roster; later ones
    /// refresh it by species.
    pub fn apply_request(&mut self, request: &BattleRequest) -> Result<(), TrackError> {
        let dex = Arc::clone(&self.dex);

        if let Some(side) = &request.side {
            if self.perspective().is_none()
                && let Some(player) = side.player()
            {
                self.set_perspective(player);
            }

            if self.me.roster.is_empty() {
                self.me.roster = side
                    .pokemon
                    .iter()
                    .map(|entry| PokemonState::from_request(&dex, entry).map(Some))
                    .collect::<Result<_, _>>()?;
                self.me.active = (!self.me.roster.is_empty()).then_some(0);
                tracing::debug!(size = self.me.roster.len(), "Built own roster");
            } else {
                for entry in &side.pokemon {
                    let species = entry.parsed_details().species_id();
                    match self.me.find_species(&species) {
                        Some(idx) => {
                            if let Some(member) = self.me.get_mut(idx) {
                                member.merge_request(entry);
                            }
                        }
                        None => tracing::debug!(species = %species, "Request names an unknown team member"),
                    }
                }
            }
        }

        self.request_state = if request.wait {
            RequestState::Waiting
        } else if request.is_force_switch() {
            RequestState::ForceSwitch
        } else if request.team_preview {
            RequestState::TeamPreview
        } else {
            RequestState::Move
        };

        if self.request_state == RequestState::Move {
            let lead = request.side.as_ref().and_then(|side| side.pokemon.first());
            if let (Some(slots), Some(lead)) = (request.active_moves(), lead)
                && let Some(idx) = self.me.find_species(&lead.parsed_details().species_id())
                && let Some(member) = self.me.get_mut(idx)
            {
                member.moves = slots
                    .iter()
                    .map(|slot| Move::from_request(&dex, slot).map(Some))
                    .collect::<Result<_, _>>()?;
            }
        }

        Ok(())
    }
}
