//! Seat identification and per-seat data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat index. A Frank's Zoo table always has four seats, but the
//! helpers take the seat count explicitly so rotations stay self-describing.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by `Vec` for O(1) access, indexable by `PlayerId`.
//! Supports seat rotation, which is how a networked peer renumbers the table
//! so that its own seat becomes seat 0.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier. Seats are 0-based: the first seat is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Position in seat order, usable as a slice index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats of a table with `player_count` seats.
    ///
    /// ```
    /// use franks_zoo::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(seats.len(), 4);
    /// assert_eq!(seats[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }

    /// The seat after this one, wrapping at `player_count`.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Renumber this seat for a table rotated by `offset` seats.
    ///
    /// Seat `offset` becomes seat 0. Rotating by `player_count - offset`
    /// undoes the rotation.
    ///
    /// ```
    /// use franks_zoo::core::PlayerId;
    ///
    /// let seat = PlayerId::new(1);
    /// assert_eq!(seat.rotated(3, 4), PlayerId::new(2));
    /// assert_eq!(seat.rotated(3, 4).rotated(1, 4), seat);
    /// ```
    #[must_use]
    pub fn rotated(self, offset: usize, player_count: usize) -> Self {
        let offset = offset % player_count;
        Self(((self.index() + player_count - offset) % player_count) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// One value per seat, in seat order.
///
/// ```
/// use franks_zoo::core::{PlayerId, PlayerMap};
///
/// let mut cards_left: PlayerMap<u32> = PlayerMap::with_value(4, 15);
/// cards_left[PlayerId::new(1)] -= 3;
/// assert_eq!(cards_left.rotated(1)[PlayerId::new(0)], 12);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Build each seat's value from its id.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!((1..=255).contains(&player_count), "Seat count out of range");
        Self {
            data: PlayerId::all(player_count).map(factory).collect(),
        }
    }

    /// Every seat starts with a copy of `value`.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Wrap an existing vector, one entry per seat in seat order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!((1..=255).contains(&data.len()), "Seat count out of range");
        Self { data }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// `(seat, value)` pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all(self.data.len()).zip(&self.data)
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Rotate the table so that seat `offset` lands at index 0.
    ///
    /// `rotated(k)[i] == self[(i + k) % n]`, matching [`PlayerId::rotated`].
    #[must_use]
    pub fn rotated(&self, offset: usize) -> Self
    where
        T: Clone,
    {
        let mut data = self.data.clone();
        data.rotate_left(offset % self.data.len());
        Self { data }
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_display() {
        assert_eq!(PlayerId::new(3).index(), 3);
        assert_eq!(PlayerId::new(2).to_string(), "Seat 2");
        assert_eq!(PlayerId::default(), PlayerId::new(0));
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(PlayerId::new(2).next(4), PlayerId::new(3));
        assert_eq!(PlayerId::new(3).next(4), PlayerId::new(0));
    }

    #[test]
    fn test_rotated_seat() {
        // Seat 2 becomes local seat 0
        assert_eq!(PlayerId::new(2).rotated(2, 4), PlayerId::new(0));
        assert_eq!(PlayerId::new(0).rotated(2, 4), PlayerId::new(2));
        assert_eq!(PlayerId::new(1).rotated(0, 4), PlayerId::new(1));
        assert_eq!(PlayerId::new(1).rotated(4, 4), PlayerId::new(1));
    }

    #[test]
    fn test_rotated_map_matches_rotated_seat() {
        let map: PlayerMap<u8> = PlayerMap::new(4, |p| p.0 * 10);

        for offset in 0..4 {
            let rotated = map.rotated(offset);
            for seat in PlayerId::all(4) {
                assert_eq!(rotated[seat.rotated(offset, 4)], map[seat]);
            }
        }
    }

    #[test]
    fn test_rotation_inverts() {
        let map: PlayerMap<u8> = PlayerMap::from_vec(vec![1, 2, 3, 4]);
        assert_eq!(map.rotated(1).rotated(3), map);
        assert_eq!(map.rotated(1), PlayerMap::from_vec(vec![2, 3, 4, 1]));
    }

    #[test]
    fn test_iter_pairs_seats_with_values() {
        let hands = PlayerMap::from_vec(vec![15, 12, 0, 7]);

        let empty: Vec<PlayerId> = hands
            .iter()
            .filter(|&(_, &left)| left == 0)
            .map(|(seat, _)| seat)
            .collect();
        assert_eq!(empty, vec![PlayerId::new(2)]);
        assert_eq!(hands.values().sum::<u32>(), 34);
        assert_eq!(hands.player_count(), 4);
    }

    #[test]
    fn test_seat_values_survive_json() {
        let map = PlayerMap::new(4, |seat| seat.next(4));
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"data":[1,2,3,0]}"#);
        assert_eq!(serde_json::from_str::<PlayerMap<PlayerId>>(&json).unwrap(), map);
    }

    #[test]
    #[should_panic(expected = "Seat count out of range")]
    fn test_empty_table_rejected() {
        let _: PlayerMap<u32> = PlayerMap::from_vec(vec![]);
    }
}
