//! Setup lines sent before the first turn

use anyhow::Result;

use super::ServerMessage;
use super::battle::{Fields, GameType};
use crate::ParseError;

/// |player|PLAYER|USERNAME|AVATAR|RATING
pub fn parse_player(parts: &[&str]) -> Result<ServerMessage> {
    let f = Fields(parts);
    Ok(ServerMessage::Player {
        player: f.player(2)?,
        username: f.string(3),
    })
}

/// |teamsize|PLAYER|NUMBER
pub fn parse_teamsize(parts: &[&str]) -> Result<ServerMessage> {
    let f = Fields(parts);
    Ok(ServerMessage::TeamSize {
        player: f.player(2)?,
        size: f.number(3, "team size")?,
    })
}

/// |gametype|GAMETYPE
pub fn parse_gametype(parts: &[&str]) -> Result<ServerMessage> {
    GameType::parse(Fields(parts).text(2))
        .map(ServerMessage::GameType)
        .ok_or_else(|| ParseError::MissingField("game type".to_string()).into())
}

/// |gen|GENNUM
pub fn parse_gen(parts: &[&str]) -> Result<ServerMessage> {
    Ok(ServerMessage::Gen(Fields(parts).number(2, "generation")?))
}

/// |tier|FORMATNAME
pub fn parse_tier(parts: &[&str]) -> Result<ServerMessage> {
    Ok(ServerMessage::Tier(Fields(parts).string(2)))
}

/// |teampreview, optionally with the number of picks
pub fn parse_teampreview(parts: &[&str]) -> Result<ServerMessage> {
    let picks = Fields(parts).number(2, "picks").ok();
    Ok(ServerMessage::TeamPreview(picks))
}

pub fn parse_start(_parts: &[&str]) -> Result<ServerMessage> {
    Ok(ServerMessage::BattleStart)
}
