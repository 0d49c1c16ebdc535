//! Which peer sits in which seat.
//!
//! Seats with no peer are played by the AI. Exactly one peer, the one in the
//! lowest occupied seat, runs those AI turns and broadcasts their moves.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::SessionError;
use crate::core::PlayerId;
use crate::rules::PLAYER_COUNT;

/// Opaque identity of a connected peer, e.g. a device name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PeerId(pub String);

impl PeerId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl std::fmt::Display for PeerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Peer → seat assignments. No two peers share a seat.
///
/// Decoded assignments go through [`PlayerOrder::insert`], so a payload with
/// a shared or out-of-range seat is refused.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Seating")]
pub struct PlayerOrder {
    seats: FxHashMap<PeerId, PlayerId>,
}

#[derive(Deserialize)]
struct Seating {
    seats: FxHashMap<PeerId, PlayerId>,
}

impl TryFrom<Seating> for PlayerOrder {
    type Error = SessionError;

    fn try_from(seating: Seating) -> Result<Self, Self::Error> {
        let mut order = Self::new();
        for (peer, seat) in seating.seats {
            order.insert(peer, seat)?;
        }
        Ok(order)
    }
}

impl PlayerOrder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat peers in the given order, starting from seat 0.
    pub fn from_peers(peers: impl IntoIterator<Item = PeerId>) -> Result<Self, SessionError> {
        let mut order = Self::new();
        for (index, peer) in peers.into_iter().enumerate() {
            let seat = u8::try_from(index).unwrap_or(u8::MAX);
            order.insert(peer, PlayerId::new(seat))?;
        }
        Ok(order)
    }

    /// Put `peer` in `seat`, moving it if it already sits elsewhere.
    pub fn insert(&mut self, peer: PeerId, seat: PlayerId) -> Result<(), SessionError> {
        if seat.index() >= PLAYER_COUNT {
            return Err(SessionError::SeatOutOfRange(seat.0));
        }
        if self.seats.iter().any(|(other, &s)| s == seat && *other != peer) {
            return Err(SessionError::SeatTaken(seat));
        }
        self.seats.insert(peer, seat);
        Ok(())
    }

    /// The seat `peer` sits in.
    pub fn seat_of(&self, peer: &PeerId) -> Result<PlayerId, SessionError> {
        self.seats
            .get(peer)
            .copied()
            .ok_or_else(|| SessionError::UnknownPeer(peer.clone()))
    }

    /// The peer sitting in `seat`, if any.
    #[must_use]
    pub fn peer_at(&self, seat: PlayerId) -> Option<&PeerId> {
        self.seats
            .iter()
            .find(|&(_, &s)| s == seat)
            .map(|(peer, _)| peer)
    }

    /// Drop a disconnected peer. Its seat is handed to the AI.
    pub fn remove_peer(&mut self, peer: &PeerId) -> Option<PlayerId> {
        let seat = self.seats.remove(peer)?;
        info!(%peer, %seat, "peer left, seat is now AI-controlled");
        Some(seat)
    }

    /// Number of seated peers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Whether no peer sits in `seat`.
    #[must_use]
    pub fn is_ai_seat(&self, seat: PlayerId) -> bool {
        self.peer_at(seat).is_none()
    }

    /// Seats with no peer, in seat order.
    #[must_use]
    pub fn ai_seats(&self) -> Vec<PlayerId> {
        PlayerId::all(PLAYER_COUNT)
            .filter(|&seat| self.is_ai_seat(seat))
            .collect()
    }

    /// The peer that runs the AI seats: the one in the lowest seat.
    #[must_use]
    pub fn ai_runner(&self) -> Option<&PeerId> {
        self.seats
            .iter()
            .min_by_key(|&(_, &seat)| seat)
            .map(|(peer, _)| peer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peer(name: &str) -> PeerId {
        PeerId::new(name)
    }

    #[test]
    fn test_from_peers_assigns_seats_in_order() {
        let order = PlayerOrder::from_peers([peer("ann"), peer("bo")]).unwrap();

        assert_eq!(order.seat_of(&peer("ann")).unwrap(), PlayerId::new(0));
        assert_eq!(order.seat_of(&peer("bo")).unwrap(), PlayerId::new(1));
        assert_eq!(order.ai_seats(), vec![PlayerId::new(2), PlayerId::new(3)]);
    }

    #[test]
    fn test_too_many_peers() {
        let peers = ["a", "b", "c", "d", "e"].map(peer);
        let err = PlayerOrder::from_peers(peers).unwrap_err();
        assert!(matches!(err, SessionError::SeatOutOfRange(4)));
    }

    #[test]
    fn test_seat_taken() {
        let mut order = PlayerOrder::new();
        order.insert(peer("ann"), PlayerId::new(2)).unwrap();

        let err = order.insert(peer("bo"), PlayerId::new(2)).unwrap_err();
        assert!(matches!(err, SessionError::SeatTaken(seat) if seat == PlayerId::new(2)));

        // Re-seating the same peer is fine
        order.insert(peer("ann"), PlayerId::new(2)).unwrap();
        order.insert(peer("ann"), PlayerId::new(3)).unwrap();
        assert!(order.is_ai_seat(PlayerId::new(2)));
    }

    #[test]
    fn test_unknown_peer() {
        let order = PlayerOrder::new();
        let err = order.seat_of(&peer("ghost")).unwrap_err();
        assert_eq!(err.to_string(), "Unknown peer ghost");
    }

    #[test]
    fn test_remove_peer_hands_seat_to_ai() {
        let mut order = PlayerOrder::from_peers([peer("ann"), peer("bo"), peer("cy")]).unwrap();
        assert_eq!(order.ai_runner(), Some(&peer("ann")));

        assert_eq!(order.remove_peer(&peer("ann")), Some(PlayerId::new(0)));
        assert!(order.is_ai_seat(PlayerId::new(0)));
        assert_eq!(order.ai_runner(), Some(&peer("bo")));
        assert_eq!(order.remove_peer(&peer("ann")), None);
        assert_eq!(order.len(), 2);
    }

    #[test]
    fn test_decode_checks_seats() {
        let json = r#"{"seats":{"ann":0,"bo":3}}"#;
        let order: PlayerOrder = serde_json::from_str(json).unwrap();
        assert_eq!(order.seat_of(&peer("bo")).unwrap(), PlayerId::new(3));

        let err = serde_json::from_str::<PlayerOrder>(r#"{"seats":{"ann":0,"bo":0}}"#).unwrap_err();
        assert!(err.to_string().contains("Seat 0 is already taken"), "{}", err);

        let err = serde_json::from_str::<PlayerOrder>(r#"{"seats":{"ann":6}}"#).unwrap_err();
        assert!(err.to_string().contains("Seat 6 is out of range"), "{}", err);
    }
}
