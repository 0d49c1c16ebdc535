//! Computer players.
//!
//! ## Overview
//!
//! An AI is bound to one seat of one game and only ever reads it. The host
//! asks for a move with [`GameAi::next_move`] and applies it with
//! `Game::make_move`:
//!
//! ```rust
//! use franks_zoo::ai::{GameAi, HeuristicAi};
//! use franks_zoo::rules::Game;
//!
//! let mut game = Game::new(7);
//! let mv = {
//!     let mut ai = HeuristicAi::new(&game, game.current_turn());
//!     ai.next_move()
//! };
//! assert!(game.make_move(&mv));
//! ```
//!
//! - `HeuristicAi`: weight-based play with a bounded forced-win lookahead
//! - `RandomAi`: uniform random baseline
//! - `search`: move enumeration shared by both

pub mod config;
pub mod heuristic;
pub mod random;
pub mod search;

pub use config::{AiConfig, CardWeights};
pub use heuristic::HeuristicAi;
pub use random::RandomAi;
pub use search::{
    all_possible_moves, all_possible_opening_moves, has_winning_sequence, is_undefeatable_move,
    is_winning_move,
};

use crate::cards::{Hand, Move};
use crate::core::PlayerId;
use crate::rules::Game;

/// A computer player for one seat.
pub trait GameAi {
    /// The game this AI reads.
    fn game(&self) -> &Game;

    /// The seat this AI plays.
    fn player(&self) -> PlayerId;

    /// The move to make next. Pass if the game has ended or nothing fits.
    fn next_move(&mut self) -> Move;

    /// This seat's hand.
    fn my_hand(&self) -> &Hand {
        self.game().hand(self.player())
    }

    /// Every move `hand` could make right now, largest first.
    fn all_possible_moves(&self, hand: &Hand) -> Vec<Move> {
        search::all_possible_moves(self.game(), hand)
    }
}
