//! Core engine types: seats, per-seat storage, RNG.
//!
//! These are independent of the card rules and are shared by the game,
//! the AI, and the session layer.

pub mod player;
pub mod rng;

pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
