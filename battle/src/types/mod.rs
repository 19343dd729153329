//! Domain types for battle state tracking

mod conditions;
mod field;
mod moves;
mod observed;
mod pokemon;
mod pokemon_type;
mod side;
mod stats;
mod status;

pub use conditions::{FieldEffect, SideCondition, Terrain, Weather};
pub use field::FieldState;
pub use moves::{Move, MoveCategory, MoveTarget};
pub use observed::Observed;
pub use pokemon::PokemonState;
pub use pokemon_type::Type;
pub use side::SideState;
pub use stats::{BaseStats, StatStages};
pub use status::{Status, Volatile};
