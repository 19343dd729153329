//! Secondary effects: HP, status, stat stages, field and side conditions,
//! volatiles, items and abilities

use anyhow::Result;

use super::ServerMessage;
use super::battle::{Fields, HpStatus, Pokemon, Stat};

/// POKEMON|HP STATUS
fn hp_change(parts: &[&str]) -> Result<(Pokemon, Option<HpStatus>)> {
    let f = Fields(parts);
    Ok((f.pokemon(2)?, f.hp_status(3)))
}

/// POKEMON|STAT|AMOUNT
fn stage_change(parts: &[&str]) -> Result<(Pokemon, Stat, i8)> {
    let f = Fields(parts);
    Ok((f.pokemon(2)?, f.stat(3)?, f.number(4, "amount")?))
}

/// Lines that carry nothing but the Pokemon they concern
fn subject(parts: &[&str]) -> Result<Pokemon> {
    Fields(parts).pokemon(2)
}

/// |-fail|POKEMON|ACTION
pub fn parse_fail(parts: &[&str]) -> Result<ServerMessage> {
    let f = Fields(parts);
    Ok(ServerMessage::Fail {
        pokemon: f.pokemon(2)?,
        action: f.maybe_string(3),
    })
}

/// |-miss|SOURCE|TARGET
pub fn parse_miss(parts: &[&str]) -> Result<ServerMessage> {
    let f = Fields(parts);
    Ok(ServerMessage::Miss {
        source: f.pokemon(2)?,
        target: f.maybe_pokemon(3),
    })
}

// === HP and status ===

pub fn parse_damage(parts: &[&str]) -> Result<ServerMessage> {
    let (pokemon, hp_status) = hp_change(parts)?;
    Ok(ServerMessage::Damage { pokemon, hp_status })
}

pub fn parse_heal(parts: &[&str]) -> Result<ServerMessage> {
    let (pokemon, hp_status) = hp_change(parts)?;
    Ok(ServerMessage::Heal { pokemon, hp_status })
}

pub fn parse_sethp(parts: &[&str]) -> Result<ServerMessage> {
    let (pokemon, hp_status) = hp_change(parts)?;
    Ok(ServerMessage::SetHp { pokemon, hp_status })
}

/// |-status|POKEMON|STATUS
pub fn parse_status(parts: &[&str]) -> Result<ServerMessage> {
    let f = Fields(parts);
    Ok(ServerMessage::Status {
        pokemon: f.pokemon(2)?,
        status: f.string(3),
    })
}

/// |-curestatus|POKEMON|STATUS. POKEMON is "p1a: Name" for the active member
/// and "p1: Name" for a benched one.
pub fn parse_curestatus(parts: &[&str]) -> Result<ServerMessage> {
    let f = Fields(parts);
    Ok(ServerMessage::CureStatus {
        pokemon: f.pokemon(2)?,
        status: f.string(3),
    })
}

pub fn parse_cureteam(parts: &[&str]) -> Result<ServerMessage> {
    subject(parts).map(ServerMessage::CureTeam)
}

// === Stat stages ===

pub fn parse_boost(parts: &[&str]) -> Result<ServerMessage> {
    let (pokemon, stat, amount) = stage_change(parts)?;
    Ok(ServerMessage::Boost { pokemon, stat, amount })
}

pub fn parse_unboost(parts: &[&str]) -> Result<ServerMessage> {
    let (pokemon, stat, amount) = stage_change(parts)?;
    Ok(ServerMessage::Unboost { pokemon, stat, amount })
}

pub fn parse_setboost(parts: &[&str]) -> Result<ServerMessage> {
    let (pokemon, stat, amount) = stage_change(parts)?;
    Ok(ServerMessage::SetBoost { pokemon, stat, amount })
}

/// |-swapboost|SOURCE|TARGET|STATS. No stat list means every stat.
pub fn parse_swapboost(parts: &[&str]) -> Result<ServerMessage> {
    let f = Fields(parts);
    Ok(ServerMessage::SwapBoost {
        source: f.pokemon(2)?,
        target: f.maybe_pokemon(3),
        stats: f.stats(4),
    })
}

/// |-copyboost|SOURCE|TARGET|STATS. SOURCE takes on TARGET's stages.
pub fn parse_copyboost(parts: &[&str]) -> Result<ServerMessage> {
    let f = Fields(parts);
    Ok(ServerMessage::CopyBoost {
        source: f.pokemon(2)?,
        target: f.maybe_pokemon(3),
        stats: f.stats(4),
    })
}

pub fn parse_invertboost(parts: &[&str]) -> Result<ServerMessage> {
    subject(parts).map(ServerMessage::InvertBoost)
}

pub fn parse_clearboost(parts: &[&str]) -> Result<ServerMessage> {
    subject(parts).map(ServerMessage::ClearBoost)
}

pub fn parse_clearallboost(_parts: &[&str]) -> Result<ServerMessage> {
    Ok(ServerMessage::ClearAllBoost)
}

/// |-clearpositiveboost|TARGET|POKEMON|EFFECT
pub fn parse_clearpositiveboost(parts: &[&str]) -> Result<ServerMessage> {
    let f = Fields(parts);
    Ok(ServerMessage::ClearPositiveBoost {
        target: f.pokemon(2)?,
        source: f.maybe_pokemon(3),
        effect: f.maybe_string(4),
    })
}

pub fn parse_clearnegativeboost(parts: &[&str]) -> Result<ServerMessage> {
    subject(parts).map(ServerMessage::ClearNegativeBoost)
}

// === Field and sides ===

/// |-weather|WEATHER, `[upkeep]` while it continues
pub fn parse_weather(parts: &[&str]) -> Result<ServerMessage> {
    let f = Fields(parts);
    let weather = match f.text(2) {
        "" => "none".to_string(),
        weather => weather.to_string(),
    };
    Ok(ServerMessage::Weather {
        weather,
        upkeep: f.has_flag("[upkeep]"),
    })
}

pub fn parse_fieldstart(parts: &[&str]) -> Result<ServerMessage> {
    Ok(ServerMessage::FieldStart(Fields(parts).string(2)))
}

pub fn parse_fieldend(parts: &[&str]) -> Result<ServerMessage> {
    Ok(ServerMessage::FieldEnd(Fields(parts).string(2)))
}

/// |-sidestart|SIDE|CONDITION
pub fn parse_sidestart(parts: &[&str]) -> Result<ServerMessage> {
    let f = Fields(parts);
    Ok(ServerMessage::SideStart {
        side: f.side(2)?,
        condition: f.string(3),
    })
}

/// |-sideend|SIDE|CONDITION
pub fn parse_sideend(parts: &[&str]) -> Result<ServerMessage> {
    let f = Fields(parts);
    Ok(ServerMessage::SideEnd {
        side: f.side(2)?,
        condition: f.string(3),
    })
}

// === Volatiles ===

/// |-start|POKEMON|EFFECT|DETAIL
pub fn parse_start(parts: &[&str]) -> Result<ServerMessage> {
    let f = Fields(parts);
    Ok(ServerMessage::VolatileStart {
        pokemon: f.pokemon(2)?,
        effect: f.string(3),
        detail: f.maybe_string(4),
    })
}

/// |-end|POKEMON|EFFECT
pub fn parse_end(parts: &[&str]) -> Result<ServerMessage> {
    let f = Fields(parts);
    Ok(ServerMessage::VolatileEnd {
        pokemon: f.pokemon(2)?,
        effect: f.string(3),
    })
}

// === Hit feedback ===

pub fn parse_crit(parts: &[&str]) -> Result<ServerMessage> {
    subject(parts).map(ServerMessage::Crit)
}

pub fn parse_supereffective(parts: &[&str]) -> Result<ServerMessage> {
    subject(parts).map(ServerMessage::SuperEffective)
}

pub fn parse_resisted(parts: &[&str]) -> Result<ServerMessage> {
    subject(parts).map(ServerMessage::Resisted)
}

pub fn parse_immune(parts: &[&str]) -> Result<ServerMessage> {
    subject(parts).map(ServerMessage::Immune)
}

// === Items, abilities and formes ===

/// |-item|POKEMON|ITEM
pub fn parse_item(parts: &[&str]) -> Result<ServerMessage> {
    let f = Fields(parts);
    Ok(ServerMessage::Item {
        pokemon: f.pokemon(2)?,
        item: f.string(3),
    })
}

/// |-enditem|POKEMON|ITEM, `[eat]` when a berry was consumed
pub fn parse_enditem(parts: &[&str]) -> Result<ServerMessage> {
    let f = Fields(parts);
    Ok(ServerMessage::EndItem {
        pokemon: f.pokemon(2)?,
        item: f.string(3),
        eat: f.has_flag("[eat]"),
    })
}

/// |-ability|POKEMON|ABILITY
pub fn parse_ability(parts: &[&str]) -> Result<ServerMessage> {
    let f = Fields(parts);
    Ok(ServerMessage::Ability {
        pokemon: f.pokemon(2)?,
        ability: f.string(3),
    })
}

/// |-endability|POKEMON, optionally naming the suppressed ability
pub fn parse_endability(parts: &[&str]) -> Result<ServerMessage> {
    let f = Fields(parts);
    Ok(ServerMessage::EndAbility {
        pokemon: f.pokemon(2)?,
        ability: f.maybe_string(3),
    })
}

/// |-transform|POKEMON|TARGET
pub fn parse_transform(parts: &[&str]) -> Result<ServerMessage> {
    let f = Fields(parts);
    Ok(ServerMessage::Transform {
        pokemon: f.pokemon(2)?,
        target: f.maybe_pokemon(3),
    })
}

/// |-mega|POKEMON|SPECIES|MEGASTONE
pub fn parse_mega(parts: &[&str]) -> Result<ServerMessage> {
    let f = Fields(parts);
    Ok(ServerMessage::Mega {
        pokemon: f.pokemon(2)?,
        species: f.string(3),
        megastone: f.string(4),
    })
}

pub fn parse_zpower(parts: &[&str]) -> Result<ServerMessage> {
    subject(parts).map(ServerMessage::ZPower)
}

/// |-activate|POKEMON|EFFECT|ARGS..., POKEMON may be empty
pub fn parse_activate(parts: &[&str]) -> Result<ServerMessage> {
    let f = Fields(parts);
    Ok(ServerMessage::Activate {
        pokemon: f.maybe_pokemon(2),
        effect: f.string(3),
        args: f.rest(4).iter().map(|s| s.to_string()).collect(),
    })
}
