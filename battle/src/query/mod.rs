//! Query helpers for battle decision making
//!
//! This module lists the choices a policy can pick from for the pending
//! decision.

mod choices;

pub use choices::{available_choices, move_choices, switch_choices};
