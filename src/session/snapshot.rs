//! Payloads exchanged between peers.
//!
//! ## Seat rotation
//!
//! Every peer shows itself as local seat 0. On the wire a game is always in
//! canonical seat order; [`GameInfo::for_peer`] rotates it into a peer's local
//! view and [`GameInfo::from_local`] rotates a local view back, so
//! `local = (canonical - my_seat) mod 4`.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::SessionError;
use super::order::{PeerId, PlayerOrder};
use crate::cards::Move;
use crate::rules::{Game, PLAYER_COUNT};

/// Pause a receiving peer inserts before showing an AI move.
pub const AI_MOVE_DELAY: Duration = Duration::from_secs(2);

/// A full game snapshot plus the seating, sent when a game starts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameInfo {
    /// The game in canonical seat order.
    pub game: Game,
    pub player_order: PlayerOrder,
}

impl GameInfo {
    pub fn new(game: Game, player_order: PlayerOrder) -> Self {
        Self { game, player_order }
    }

    /// Build from a peer's local view, undoing that peer's rotation.
    pub fn from_local(
        local: &Game,
        peer: &PeerId,
        player_order: PlayerOrder,
    ) -> Result<Self, SessionError> {
        let seat = player_order.seat_of(peer)?;
        let game = local.rotated(PLAYER_COUNT - seat.index());
        Ok(Self { game, player_order })
    }

    /// The game as `peer` sees it, with its own seat as seat 0.
    pub fn for_peer(&self, peer: &PeerId) -> Result<Game, SessionError> {
        let seat = self.player_order.seat_of(peer)?;
        Ok(self.game.rotated(seat.index()))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SessionError> {
        let bytes = bincode::serialize(self)?;
        debug!(len = bytes.len(), "encoded game info");
        Ok(bytes)
    }

    /// Decode a peer's payload.
    ///
    /// Seats, hand count and last move are checked while decoding; a payload
    /// that breaks them is a [`SessionError::Codec`] rather than a game that
    /// panics later.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SessionError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// A single move, broadcast after it has been made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveInfo {
    #[serde(rename = "move")]
    pub mv: Move,
    /// Set when an AI seat made the move. Only affects pacing.
    pub made_by_ai: bool,
}

impl MoveInfo {
    pub fn new(mv: Move, made_by_ai: bool) -> Self {
        Self { mv, made_by_ai }
    }

    /// How long the receiver waits before applying the move.
    #[must_use]
    pub fn ai_delay(&self) -> Duration {
        if self.made_by_ai {
            AI_MOVE_DELAY
        } else {
            Duration::ZERO
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SessionError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SessionError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
