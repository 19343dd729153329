//! Turn flow, decision requests and the end of the battle

use anyhow::{Context, Result};

use super::ServerMessage;
use super::battle::Fields;
use super::request::BattleRequest;

/// |request|JSON. The payload may itself contain `|`, so the fields are
/// joined back together. An empty payload is sent while the battle is set up.
pub fn parse_request(parts: &[&str]) -> Result<ServerMessage> {
    let payload = Fields(parts).rest(2).join("|");
    if payload.trim().is_empty() {
        return Ok(ServerMessage::Request(None));
    }

    let request: BattleRequest =
        serde_json::from_str(&payload).context("request payload is not valid JSON")?;
    Ok(ServerMessage::Request(Some(Box::new(request))))
}

pub fn parse_upkeep(_parts: &[&str]) -> Result<ServerMessage> {
    Ok(ServerMessage::Upkeep)
}

/// |turn|NUMBER
pub fn parse_turn(parts: &[&str]) -> Result<ServerMessage> {
    Ok(ServerMessage::Turn(Fields(parts).number(2, "turn")?))
}

/// |win|USER
pub fn parse_win(parts: &[&str]) -> Result<ServerMessage> {
    Ok(ServerMessage::Win(Fields(parts).string(2)))
}

pub fn parse_tie(_parts: &[&str]) -> Result<ServerMessage> {
    Ok(ServerMessage::Tie)
}
