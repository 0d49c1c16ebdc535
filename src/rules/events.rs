//! Notifications a game sends to its host.
//!
//! The game owns at most one boxed listener and calls it synchronously from
//! inside `Game::make_move`. Listeners receive the game by shared reference
//! only, so they can observe but never re-enter the move protocol.

use std::sync::mpsc::Sender;

use serde::{Deserialize, Serialize};

use super::game::Game;
use crate::core::PlayerId;

/// Something that happened during a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// It is now `seat`'s turn.
    TurnChanged { seat: PlayerId },
    /// `seat` emptied its hand, finishing at `place` (1 = first).
    ///
    /// When the game ends, the last seat to empty its hand is reported with
    /// place 3.
    PlayerWon { seat: PlayerId, place: usize },
}

/// Receives game notifications.
///
/// Both methods default to doing nothing.
pub trait GameListener: Send {
    /// A seat has emptied its hand.
    fn on_player_won(&mut self, game: &Game, seat: PlayerId, place: usize) {
        let _ = (game, seat, place);
    }

    /// The turn has passed to `seat`.
    fn on_turn_changed(&mut self, seat: PlayerId, game: &Game) {
        let _ = (seat, game);
    }
}

/// Event-channel form: every notification is sent as a [`GameEvent`].
///
/// A dropped receiver is ignored.
impl GameListener for Sender<GameEvent> {
    fn on_player_won(&mut self, _game: &Game, seat: PlayerId, place: usize) {
        let _ = self.send(GameEvent::PlayerWon { seat, place });
    }

    fn on_turn_changed(&mut self, seat: PlayerId, _game: &Game) {
        let _ = self.send(GameEvent::TurnChanged { seat });
    }
}
