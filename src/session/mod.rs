//! Networked play: seating, seat rotation and the wire payloads.
//!
//! The transport itself is left to the host. This module only decides who
//! sits where, who runs the AI seats, and how a game or move is encoded
//! (bincode) for sending.

pub mod error;
pub mod order;
pub mod snapshot;

pub use error::SessionError;
pub use order::{PeerId, PlayerOrder};
pub use snapshot::{GameInfo, MoveInfo, AI_MOVE_DELAY};
