//! # franks-zoo
//!
//! Rules engine and heuristic AI for Frank's Zoo, a four-player shedding
//! card game in which animals defeat the animals they prey on.
//!
//! ## Design Principles
//!
//! 1. **Rule Violations Are Not Errors**: `Game::make_move` returns `false`
//!    and leaves the state untouched. Only the session codec returns `Result`.
//!
//! 2. **Deterministic**: The deal and the AI tie-breaks both draw from a
//!    seeded `GameRng`, so a game replays exactly from its seeds.
//!
//! 3. **Cheap Copies**: Hands are persistent `im` maps. The AI's lookahead
//!    clones hands freely.
//!
//! ## Modules
//!
//! - `core`: Seats, per-seat storage, RNG
//! - `cards`: Card types, the predator table, hands and moves
//! - `rules`: The game state machine and its listener
//! - `ai`: Heuristic and random computer players
//! - `session`: Seating, seat rotation and wire payloads for networked play
//!
//! ## Example
//!
//! ```
//! use franks_zoo::{GameAi, HeuristicAi, Game};
//!
//! let mut game = Game::new(1);
//! let mut turns = 0;
//! while !game.ended() && turns < 500 {
//!     let mv = HeuristicAi::new(&game, game.current_turn()).next_move();
//!     assert!(game.make_move(&mv));
//!     turns += 1;
//! }
//! ```

pub mod core;
pub mod cards;
pub mod rules;
pub mod ai;
pub mod session;

// Re-export commonly used types
pub use crate::core::{GameRng, PlayerId, PlayerMap};

pub use crate::cards::{deck, CardType, Cards, Hand, Move, DECK_SIZE};

pub use crate::rules::{
    Game, GameBuilder, GameEvent, GameListener, CARDS_PER_PLAYER, PLAYER_COUNT,
};

pub use crate::ai::{AiConfig, CardWeights, GameAi, HeuristicAi, RandomAi};

pub use crate::session::{GameInfo, MoveInfo, PeerId, PlayerOrder, SessionError};
