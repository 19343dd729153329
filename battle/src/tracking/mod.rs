//! Battle state tracking from server messages

mod battle;
mod effects;
mod request;
mod updater;

pub use battle::{RequestState, TrackError, TrackedBattle};
