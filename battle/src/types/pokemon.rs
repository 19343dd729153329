//! Pokemon state types

use scout_protocol::{HpStatus, PokemonDetails, PokemonStats, SidePokemon, to_id};

use super::moves::Move;
use super::observed::Observed;
use super::pokemon_type::Type;
use super::stats::BaseStats;
use super::status::Status;
use crate::dex::{Compendium, DexError};

/// One roster member as far as the tracker knows it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonState {
    /// Species id the Pokemon is tracked under. Only a permanent change
    /// (Mega Evolution, Primal Reversion) replaces it.
    pub species: String,

    /// Forme currently on the field ("aegislashblade"). Reverts to
    /// `species` on switch out.
    pub forme: String,

    /// Level (1-100)
    pub level: u8,

    /// Gender ('M', 'F', or None for genderless)
    pub gender: Option<char>,

    pub nickname: String,

    // === HP ===
    /// Current HP. A percentage when `max_health` is 0.
    pub health: u32,

    /// Maximum HP, 0 when only a percentage is visible
    pub max_health: u32,

    /// Non-volatile status condition (including fainted)
    pub status: Option<Status>,

    // === Revealed information ===
    /// Move slots. `None` is a slot that has not been revealed yet.
    pub moves: Vec<Option<Move>>,

    /// Stat spread, known only for our own Pokemon
    pub stats: Observed<PokemonStats>,

    /// Native ability, restored on switch out
    pub base_ability: Observed<String>,

    /// Currently effective ability
    pub ability: Observed<String>,

    pub item: Observed<String>,

    // === Compendium data for the current forme ===
    /// Ability options of the species
    pub abilities: Vec<String>,

    pub base_stats: BaseStats,

    /// Current types (Soak, Reflect Type and friends change these)
    pub types: Vec<Type>,

    // === Transform ===
    /// Own moves from before a transform, present only while transformed
    moves_backup: Option<Vec<Option<Move>>>,
}

impl PokemonState {
    fn from_species(
        dex: &Compendium,
        details: &PokemonDetails,
        nickname: &str,
    ) -> Result<Self, DexError> {
        let species = details.species_id();
        let entry = dex.species(&species)?;

        Ok(Self {
            forme: species.clone(),
            species,
            level: details.level.unwrap_or(100),
            gender: details.gender,
            nickname: nickname.to_string(),
            health: 100,
            max_health: 0,
            status: None,
            moves: Vec::new(),
            stats: Observed::Unknown,
            base_ability: Observed::Unknown,
            ability: Observed::Unknown,
            item: Observed::Unknown,
            abilities: entry.abilities.clone(),
            base_stats: entry.base_stats,
            types: entry.types.clone(),
            moves_backup: None,
        })
    }

    /// A fully known member of our own team, from a request payload
    pub fn from_request(dex: &Compendium, entry: &SidePokemon) -> Result<Self, DexError> {
        let mut pokemon = Self::from_species(dex, &entry.parsed_details(), entry.nickname())?;

        if let Some(condition) = entry.hp_status() {
            pokemon.apply_condition(&condition);
        }
        pokemon.stats = Observed::Known(entry.stats);
        pokemon.moves = entry
            .moves
            .iter()
            .map(|id| Move::from_id(dex, id, None, false).map(Some))
            .collect::<Result<_, _>>()?;

        let native = if entry.base_ability.is_empty() {
            &entry.ability
        } else {
            &entry.base_ability
        };
        pokemon.base_ability = Observed::from_wire(native);
        pokemon.ability = pokemon.base_ability.clone();
        pokemon.item = Observed::from_wire(&entry.item);

        Ok(pokemon)
    }

    /// A partially known opponent, from its first switch-in
    pub fn from_switch(
        dex: &Compendium,
        details: &PokemonDetails,
        nickname: &str,
        condition: Option<&HpStatus>,
    ) -> Result<Self, DexError> {
        let mut pokemon = Self::from_species(dex, details, nickname)?;
        pokemon.moves = vec![None; 4];
        pokemon.adopt_sole_ability();

        if let Some(condition) = condition {
            pokemon.apply_condition(condition);
        }
        Ok(pokemon)
    }

    /// Refresh from a later request payload
    pub fn merge_request(&mut self, entry: &SidePokemon) {
        if let Some(condition) = entry.hp_status() {
            self.apply_condition(&condition);
        }
        self.stats = Observed::Known(entry.stats);
        if !entry.base_ability.is_empty() {
            self.base_ability = Observed::from_wire(&entry.base_ability);
        }
        if !entry.ability.is_empty() {
            self.update_ability(&entry.ability);
        }
        self.item = Observed::from_wire(&entry.item);
    }

    fn adopt_sole_ability(&mut self) {
        if let [only] = self.abilities.as_slice() {
            self.base_ability = Observed::Known(only.clone());
            self.ability = self.base_ability.clone();
        }
    }

    // === Abilities and items ===

    /// Reveal the current ability. The first reveal also fixes the native one.
    pub fn set_ability(&mut self, ability: &str) {
        let ability = Observed::from_wire(ability);
        if self.base_ability.is_unknown() {
            self.base_ability = ability.clone();
        }
        self.ability = ability;
    }

    /// Change the current ability only
    pub fn update_ability(&mut self, ability: &str) {
        self.ability = Observed::from_wire(ability);
    }

    /// Record an item named by a `[from] item:` attribution. A berry is eaten
    /// the moment it is named, so it never replaces an item already tracked.
    pub fn attribute_item(&mut self, item: &str) {
        let item = Observed::from_wire(item);
        if let Observed::Known(id) = &item {
            if id.ends_with("berry") && !self.item.is_unknown() {
                return;
            }
        }
        self.item = item;
    }

    // === HP and status ===

    pub fn apply_condition(&mut self, condition: &HpStatus) {
        self.health = condition.current;
        self.max_health = condition.max.unwrap_or(0);
        self.status = condition.status.as_deref().and_then(Status::from_protocol);
    }

    pub fn faint(&mut self) {
        self.health = 0;
        self.status = Some(Status::Fainted);
    }

    pub fn is_fainted(&self) -> bool {
        self.status == Some(Status::Fainted)
    }

    /// Get HP as percentage (0-100)
    pub fn hp_percent(&self) -> u32 {
        if self.max_health == 0 {
            self.health
        } else {
            self.health * 100 / self.max_health
        }
    }

    // === Moves ===

    /// Record a move seen in use. It goes into the first unrevealed slot, or
    /// the slot already holding it. A full moveset without it is left alone.
    pub fn reveal_move(
        &mut self,
        dex: &Compendium,
        id: &str,
        consume_pp: bool,
    ) -> Result<(), DexError> {
        let id = dex.resolve_move_id(&to_id(id)).to_string();

        let Some(slot) = self
            .moves
            .iter_mut()
            .find(|slot| slot.as_ref().is_none_or(|known| known.id == id))
        else {
            tracing::debug!(species = %self.species, id = %id, "Move does not fit the known moveset");
            return Ok(());
        };

        if slot.is_none() {
            *slot = Some(Move::from_id(dex, &id, None, false)?);
        }
        if let Some(known) = slot {
            if consume_pp {
                known.consume_pp();
            }
        }
        Ok(())
    }

    pub fn known_moves(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter().flatten()
    }

    // === Switching, transform and formes ===

    pub fn is_transformed(&self) -> bool {
        self.moves_backup.is_some()
    }

    /// Undo everything that does not survive leaving the field
    pub fn switch_out(&mut self, dex: &Compendium) -> Result<(), DexError> {
        if let Some(backup) = self.moves_backup.take() {
            self.moves = backup;
        }
        self.ability = self.base_ability.clone();

        let entry = dex.species(&self.species)?;
        self.forme = self.species.clone();
        self.abilities = entry.abilities.clone();
        self.base_stats = entry.base_stats;
        self.types = entry.types.clone();
        Ok(())
    }

    /// Become a copy of `target`. HP and the native ability are kept.
    pub fn transform_into(
        &mut self,
        dex: &Compendium,
        target: &PokemonState,
    ) -> Result<(), DexError> {
        let moves = target
            .moves
            .iter()
            .map(|slot| {
                slot.as_ref()
                    .map(|known| Move::transform_copy(dex, &known.id))
                    .transpose()
            })
            .collect::<Result<Vec<_>, _>>()?;

        let prior = std::mem::replace(&mut self.moves, moves);
        // A second transform keeps the original moves as the backup
        if self.moves_backup.is_none() {
            self.moves_backup = Some(prior);
        }

        self.ability = target.ability.clone();
        self.types = target.types.clone();
        self.base_stats = BaseStats {
            hp: self.base_stats.hp,
            ..target.base_stats
        };
        Ok(())
    }

    /// Permanently become another forme (Mega Evolution, Primal Reversion).
    /// The new forme is what the Pokemon is tracked under from now on.
    pub fn change_form(&mut self, dex: &Compendium, species: &str) -> Result<(), DexError> {
        let id = to_id(species);
        self.load_forme(dex, &id)?;
        self.species = id;

        self.base_ability = Observed::Unknown;
        self.ability = Observed::Unknown;
        self.adopt_sole_ability();
        Ok(())
    }

    /// Take on a forme until the next switch out (Stance Change, Zen Mode).
    /// A forme with a single ability option shows it as the current ability.
    pub fn change_forme(&mut self, dex: &Compendium, forme: &str) -> Result<(), DexError> {
        self.load_forme(dex, &to_id(forme))?;
        if let [only] = self.abilities.as_slice() {
            self.ability = Observed::Known(only.clone());
        }
        Ok(())
    }

    fn load_forme(&mut self, dex: &Compendium, id: &str) -> Result<(), DexError> {
        let entry = dex.species(id)?;
        self.abilities = entry.abilities.clone();
        self.base_stats = entry.base_stats;
        self.types = entry.types.clone();
        self.forme = id.to_string();
        Ok(())
    }
}
