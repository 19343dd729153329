//! Partial-information battle state tracking for Pokemon Showdown.
//!
//! This crate rebuilds what one player can know about a battle from the
//! protocol lines the server sends to that player.
//!
//! # Overview
//!
//! `scout-battle` sits on top of `scout-protocol` (wire format):
//!
//! ```text
//! scout-protocol (wire format)
//!        │
//!        ▼
//! scout-battle (compendium + domain types + tracking) ← THIS CRATE
//!        │
//!        └─> decision policy (reads TrackedBattle, sends a Choice)
//! ```
//!
//! # Main Types
//!
//! ## Game Data
//! - [`Compendium`] - Species, move and item data, loaded once and shared
//!
//! ## Domain Types
//! - [`Move`] - A move slot with PP
//! - [`PokemonState`] - What is known about one Pokemon
//! - [`SideState`] - One player's side of the battle
//! - [`FieldState`] - Weather, terrain and field effects
//! - [`Observed`] - Unknown / known-absent / known values
//!
//! ## State Tracking
//! - [`TrackedBattle`] - Main entry point for tracking battle state from server messages
//! - [`query::available_choices`] - Choices for the pending decision
//!
//! # Example Usage
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use scout_battle::{Compendium, TrackedBattle, Weather};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dex = Arc::new(Compendium::load("data")?);
//! let mut battle = TrackedBattle::new(dex, "Alice");
//!
//! // Process server lines
//! battle.process_line("|switch|p2a: Lava|Heatran, L80, M|100/100")?;
//!
//! // Query battle state
//! if let Some(active) = battle.opponent.active_pokemon() {
//!     println!("Opponent: {} at {}%", active.species, active.hp_percent());
//! }
//!
//! // Check field conditions
//! if battle.field.weather == Some(Weather::Sun) {
//!     println!("Sun is active!");
//! }
//! # Ok(())
//! # }
//! ```

pub mod dex;
pub mod query;
pub mod tracking;
pub mod types;

// Re-export main types at crate root for convenience
pub use dex::{Compendium, DexError, EntryKind};
pub use tracking::{RequestState, TrackError, TrackedBattle};
pub use types::{
    BaseStats, FieldEffect, FieldState, Move, MoveCategory, MoveTarget, Observed, PokemonState, SideCondition,
    SideState, StatStages, Status, Terrain, Type, Volatile, Weather,
};

// Re-export commonly used protocol types
pub use scout_protocol::{Choice, GameType, Player, Stat};
