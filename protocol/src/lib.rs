use thiserror::Error;

pub mod choice;
pub mod server;
pub mod sim;

pub use choice::{Choice, ChoiceMessage};
pub use server::{
    ActivePokemon, Attributes, BattleEvent, BattleRequest, GameType, HpStatus, MoveSlot, Player,
    Pokemon, PokemonDetails, PokemonStats, RawEvent, ServerMessage, Side, SideInfo, SidePokemon,
    Stat, parse_battle_event, parse_server_message, to_id, tokenize,
};
pub use sim::{Route, SimStreamRouter};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid message format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Empty message")]
    EmptyMessage,
}
