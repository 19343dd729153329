//! Effect attribution, type changes, transform and one-off activations

use std::sync::Arc;

use scout_protocol::{Attributes, Player, Pokemon, to_id};

use super::battle::{TrackError, TrackedBattle};
use crate::types::{Move, Observed, Type, Volatile};

impl TrackedBattle {
    /// Apply a `[from] item: X` or `[from] ability: X` tag to the `[of]`
    /// Pokemon, or to the actor when there is no `[of]`
    pub(super) fn attribute_effect(&mut self, actor: Option<Player>, attrs: &Attributes) {
        let Some(from) = attrs.from() else {
            return;
        };
        let Some(owner) = attrs.of().map(|p| p.player).or(actor) else {
            return;
        };
        let Some(pokemon) = self.active_mut(owner) else {
            return;
        };

        if let Some(item) = from.strip_prefix("item: ") {
            pokemon.attribute_item(item);
        } else if let Some(ability) = from.strip_prefix("ability: ") {
            pokemon.set_ability(ability);
        }
    }

    pub(super) fn handle_volatile_start(
        &mut self,
        pokemon: &Pokemon,
        effect: &str,
        detail: Option<&str>,
        attrs: &Attributes,
    ) {
        let id = to_id(effect.strip_prefix("move: ").unwrap_or(effect));

        match id.as_str() {
            "typechange" => self.change_types(pokemon.player, detail, attrs),
            "typeadd" => {
                let added = detail.and_then(Type::from_protocol);
                if let (Some(added), Some(active)) = (added, self.active_mut(pokemon.player)) {
                    active.types.push(added);
                }
            }
            _ => match Volatile::from_protocol(effect) {
                Some(volatile) => {
                    self.side_mut(pokemon.player).volatiles.insert(volatile);
                }
                None => tracing::info!(effect = %effect, "Unknown volatile effect"),
            },
        }
    }

    fn change_types(&mut self, player: Player, detail: Option<&str>, attrs: &Attributes) {
        let from = attrs.from();

        if from == Some("move: Reflect Type") {
            let copied = attrs
                .of()
                .and_then(|of| self.active(of.player))
                .map(|source| source.types.clone());
            if let (Some(types), Some(active)) = (copied, self.active_mut(player)) {
                active.types = types;
            }
            return;
        }

        let Some(active) = self.active_mut(player) else {
            return;
        };
        if let Some(from) = from {
            let ability = from.strip_prefix("ability: ").unwrap_or(from);
            if matches!(to_id(ability).as_str(), "protean" | "colorchange") {
                active.set_ability(ability);
            }
        }
        active.types = Type::parse_list(detail.unwrap_or_default());
    }

    /// `-transform`: the transforming side copies the other side's boosts.
    /// When we transform, our own data also reveals the opponent's ability and
    /// moves.
    pub(super) fn handle_transform(
        &mut self,
        pokemon: &Pokemon,
        attrs: &Attributes,
    ) -> Result<(), TrackError> {
        let dex = Arc::clone(&self.dex);

        if self.is_me(pokemon.player) {
            self.me.boosts = self.opponent.boosts.clone();

            let (Some(own), Some(foe)) = (
                self.me.active_pokemon_mut(),
                self.opponent.active_pokemon_mut(),
            ) else {
                tracing::debug!("Transform without both active Pokemon");
                return Ok(());
            };

            if let Some(ability) = own.ability.known() {
                foe.set_ability(ability);
            }
            foe.moves = own
                .known_moves()
                .map(|m| Move::from_id(&dex, &m.id, None, false).map(Some))
                .collect::<Result<_, _>>()?;
            own.transform_into(&dex, foe)?;
        } else {
            self.attribute_effect(Some(pokemon.player), attrs);

            let (Some(foe), Some(own)) = (
                self.opponent.active_pokemon_mut(),
                self.me.active_pokemon(),
            ) else {
                tracing::debug!("Transform without both active Pokemon");
                return Ok(());
            };
            foe.transform_into(&dex, own)?;
            self.opponent.boosts = self.me.boosts.clone();
        }
        Ok(())
    }

    /// `-activate`: reveals from the effect prefix, then the few effects
    /// that move abilities or moves between the two sides
    pub(super) fn handle_activate(
        &mut self,
        pokemon: Option<&Pokemon>,
        effect: &str,
        args: &[String],
        attrs: &Attributes,
    ) -> Result<(), TrackError> {
        let dex = Arc::clone(&self.dex);
        let (kind, name) = match effect.split_once(": ") {
            Some((kind @ ("move" | "ability" | "item"), name)) => (Some(kind), name),
            _ => (None, effect),
        };
        let user = pokemon.map(|p| p.player);
        let of = attrs.of().map(|p| p.player);

        if let Some(user) = user
            && let Some(active) = self.active_mut(user)
        {
            match kind {
                Some("ability") => active.set_ability(name),
                Some("item") => active.item = Observed::from_wire(name),
                _ => {}
            }
        }

        match to_id(name).as_str() {
            "mummy" => {
                // args: the ability Mummy replaced
                if let (Some(of), Some(replaced)) = (of, args.first())
                    && let Some(touched) = self.active_mut(of)
                {
                    touched.set_ability(replaced);
                    touched.update_ability("mummy");
                }
            }
            "forewarn" => {
                if let (Some(of), Some(move_name)) = (of, args.first())
                    && !self.is_me(of)
                    && let Some(warned) = self.active_mut(of)
                {
                    warned.reveal_move(&dex, move_name, false)?;
                }
            }
            "skillswap" => {
                // args: the ability the user receives, then the one it gave away
                if let (Some(user), Some(of), Some(received), Some(given)) =
                    (user, of, args.first(), args.get(1))
                {
                    if let Some(swapper) = self.active_mut(user) {
                        swapper.set_ability(given);
                        swapper.update_ability(received);
                    }
                    if let Some(target) = self.active_mut(of) {
                        target.set_ability(received);
                        target.update_ability(given);
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }
}
