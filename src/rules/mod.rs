//! Frank's Zoo rules: the game state machine and its notifications.
//!
//! `Game` owns the hands and turn state. It validates every move against the
//! card rules in [`crate::cards`] and never interprets AI or network concerns.
//!
//! - `game`: the state machine (`Game`)
//! - `builder`: set up a game from a seed or an explicit position
//! - `events`: the listener seam the host observes the game through

pub mod builder;
pub mod events;
pub mod game;

pub use builder::GameBuilder;
pub use events::{GameEvent, GameListener};
pub use game::{Game, InvalidGame, CARDS_PER_PLAYER, PLAYER_COUNT};
