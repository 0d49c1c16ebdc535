//! A player's hand.
//!
//! Backed by a persistent `im::OrdMap`, so the copies the AI makes while
//! looking ahead are O(1) and iterate in card order.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use super::card::CardType;
use super::collection::{describe, Cards};
use super::moves::Move;

/// The cards a single seat is holding.
///
/// Hands inside a [`Game`](crate::rules::Game) only change through
/// [`Hand::make_move`]. Union (`+=`, `Sum`) builds new hands, such as the
/// opponents' combined cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "OrdMap<CardType, u32>", into = "OrdMap<CardType, u32>")]
pub struct Hand {
    cards: OrdMap<CardType, u32>,
}

impl Hand {
    /// Create a hand from (type, count) entries.
    ///
    /// Zero counts are dropped and repeated types are merged.
    pub fn new(entries: impl IntoIterator<Item = (CardType, u32)>) -> Self {
        let mut cards = OrdMap::new();
        for (card, count) in entries {
            if count > 0 {
                *cards.entry(card).or_insert(0) += count;
            }
        }
        Self { cards }
    }

    /// Whether this hand holds every card of `mv`.
    ///
    /// Pass can always be made.
    #[must_use]
    pub fn can_make_move(&self, mv: &Move) -> bool {
        mv.counts().all(|(card, count)| self.count_of(card) >= count)
    }

    /// Remove the cards of `mv` from this hand.
    ///
    /// Returns `false` and leaves the hand untouched if any card is missing.
    pub fn make_move(&mut self, mv: &Move) -> bool {
        if !self.can_make_move(mv) {
            return false;
        }
        for (card, count) in mv.counts() {
            let remaining = self.count_of(card) - count;
            if remaining == 0 {
                self.cards.remove(&card);
            } else {
                self.cards.insert(card, remaining);
            }
        }
        true
    }
}

impl Cards for Hand {
    fn count_of(&self, card: CardType) -> u32 {
        self.cards.get(&card).copied().unwrap_or(0)
    }

    fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<OrdMap<CardType, u32>> for Hand {
    fn from(cards: OrdMap<CardType, u32>) -> Self {
        Self::new(cards)
    }
}

impl From<Hand> for OrdMap<CardType, u32> {
    fn from(hand: Hand) -> Self {
        hand.cards
    }
}

impl<const N: usize> From<[(CardType, u32); N]> for Hand {
    fn from(entries: [(CardType, u32); N]) -> Self {
        Self::new(entries)
    }
}

impl FromIterator<CardType> for Hand {
    fn from_iter<I: IntoIterator<Item = CardType>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|card| (card, 1)))
    }
}

/// Multiset union: counts are added.
impl std::ops::AddAssign<&Hand> for Hand {
    fn add_assign(&mut self, other: &Hand) {
        for (card, count) in other.counts() {
            *self.cards.entry(card).or_insert(0) += count;
        }
    }
}

impl<'a> std::iter::Sum<&'a Hand> for Hand {
    fn sum<I: Iterator<Item = &'a Hand>>(iter: I) -> Self {
        iter.fold(Hand::default(), |mut total, hand| {
            total += hand;
            total
        })
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if Cards::is_empty(self) {
            return f.write_str("(empty)");
        }
        f.write_str(&describe(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CardType::*;

    fn sample() -> Hand {
        Hand::from([(Elephant, 3), (Whale, 2), (Fish, 4)])
    }

    #[test]
    fn test_can_make_move() {
        let hand = sample();
        assert!(hand.can_make_move(&Move::of(Elephant, 3)));
        assert!(hand.can_make_move(&Move::of(Elephant, 2)));
        assert!(hand.can_make_move(&Move::pass()));
        assert!(!hand.can_make_move(&Move::of(Elephant, 4)));
        assert!(hand.can_make_move(&Move::of(Elephant, 3).with(Whale, 2)));

        let empty = Hand::default();
        assert!(!empty.can_make_move(&Move::of(Elephant, 3)));
        assert!(!empty.can_make_move(&Move::of(Elephant, 2)));
        assert!(empty.can_make_move(&Move::pass()));
    }

    #[test]
    fn test_make_move() {
        let mut hand = sample();

        assert!(hand.make_move(&Move::of(Elephant, 2)));
        assert_eq!(hand, Hand::from([(Elephant, 1), (Whale, 2), (Fish, 4)]));

        assert!(!hand.make_move(&Move::of(Whale, 3)));
        assert_eq!(hand, Hand::from([(Elephant, 1), (Whale, 2), (Fish, 4)]));

        assert!(hand.make_move(&Move::of(Whale, 2)));
        assert_eq!(hand, Hand::from([(Elephant, 1), (Fish, 4)]));
        assert_eq!(hand.count_of(Whale), 0);
    }

    #[test]
    fn test_make_move_to_empty() {
        let mut hand = Hand::from([(Mouse, 1), (Joker, 1)]);
        assert!(hand.make_move(&Move::of(Mouse, 1).with(Joker, 1)));
        assert!(hand.is_empty());
        assert_eq!(hand.card_count(), 0);
    }

    #[test]
    fn test_partial_failure_leaves_hand_untouched() {
        let mut hand = Hand::from([(Elephant, 2), (Mosquito, 1)]);
        let before = hand.clone();
        assert!(!hand.make_move(&Move::of(Elephant, 2).with(Mosquito, 2)));
        assert_eq!(hand, before);
    }

    #[test]
    fn test_from_cards_and_sum() {
        let a: Hand = [Fish, Fish, Joker].into_iter().collect();
        let b = Hand::from([(Fish, 1), (Bear, 2)]);

        let total: Hand = [a, b].iter().sum();
        assert_eq!(total, Hand::from([(Fish, 3), (Bear, 2), (Joker, 1)]));
        assert_eq!(total.card_count(), 6);
    }

    #[test]
    fn test_sorted_vec() {
        let hand = Hand::from([(Elephant, 1), (Whale, 2)]);
        assert_eq!(hand.to_sorted_vec(), vec![Whale, Whale, Elephant]);
    }

    #[test]
    fn test_serde_round_trip() {
        let hand = sample();
        let json = serde_json::to_string(&hand).unwrap();
        let back: Hand = serde_json::from_str(&json).unwrap();
        assert_eq!(hand, back);
    }
}
