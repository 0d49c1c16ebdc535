//! Errors raised by the session layer.
//!
//! Rule violations are never errors; they stay `false` returns on `Game`.

use super::order::PeerId;
use crate::core::PlayerId;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Codec error: {0}")]
    Codec(#[from] bincode::Error),
    #[error("Unknown peer {0}")]
    UnknownPeer(PeerId),
    #[error("{0} is already taken")]
    SeatTaken(PlayerId),
    #[error("Seat {0} is out of range")]
    SeatOutOfRange(u8),
}
