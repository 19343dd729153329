//! Actions that change who is on the field: moves, switches, faints

use anyhow::Result;

use super::ServerMessage;
use super::battle::{Fields, HpStatus, Pokemon, PokemonDetails};
use crate::ParseError;

/// POKEMON|DETAILS|HP STATUS, the shape shared by switch, drag,
/// detailschange and replace
fn appearance(parts: &[&str]) -> Result<(Pokemon, PokemonDetails, Option<HpStatus>)> {
    let f = Fields(parts);
    Ok((f.pokemon(2)?, f.details(3), f.hp_status(4)))
}

/// |move|POKEMON|MOVE|TARGET
///
/// Bare flags such as `[miss]` or `[still]` stay positional and are ignored.
pub fn parse_move(parts: &[&str]) -> Result<ServerMessage> {
    let f = Fields(parts);
    let move_name = match f.text(3) {
        "" => return Err(ParseError::MissingField("move".to_string()).into()),
        name => name.to_string(),
    };

    Ok(ServerMessage::Move {
        pokemon: f.pokemon(2)?,
        move_name,
        target: f.maybe_pokemon(4),
    })
}

pub fn parse_switch(parts: &[&str]) -> Result<ServerMessage> {
    let (pokemon, details, hp_status) = appearance(parts)?;
    Ok(ServerMessage::Switch { pokemon, details, hp_status })
}

pub fn parse_drag(parts: &[&str]) -> Result<ServerMessage> {
    let (pokemon, details, hp_status) = appearance(parts)?;
    Ok(ServerMessage::Drag { pokemon, details, hp_status })
}

/// Permanent forme change (mega evolution, primal reversion)
pub fn parse_detailschange(parts: &[&str]) -> Result<ServerMessage> {
    let (pokemon, details, hp_status) = appearance(parts)?;
    Ok(ServerMessage::DetailsChange { pokemon, details, hp_status })
}

/// Illusion broken: the real identity of the active Pokemon
pub fn parse_replace(parts: &[&str]) -> Result<ServerMessage> {
    let (pokemon, details, hp_status) = appearance(parts)?;
    Ok(ServerMessage::Replace { pokemon, details, hp_status })
}

/// |-formechange|POKEMON|SPECIES|HP STATUS
pub fn parse_formechange(parts: &[&str]) -> Result<ServerMessage> {
    let f = Fields(parts);
    Ok(ServerMessage::FormeChange {
        pokemon: f.pokemon(2)?,
        species: f.string(3),
        hp_status: f.hp_status(4),
    })
}

/// |cant|POKEMON|REASON, optionally followed by the move that failed
pub fn parse_cant(parts: &[&str]) -> Result<ServerMessage> {
    let f = Fields(parts);
    Ok(ServerMessage::Cant {
        pokemon: f.pokemon(2)?,
        reason: f.string(3),
        move_name: f.maybe_string(4),
    })
}

pub fn parse_faint(parts: &[&str]) -> Result<ServerMessage> {
    Ok(ServerMessage::Faint(Fields(parts).pokemon(2)?))
}
