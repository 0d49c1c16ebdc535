//! Moves: a single play of cards, or a pass.
//!
//! A move is an immutable multiset of cards. Legality, the main card type
//! and the defeat relation are all derived from the multiset:
//!
//! - A legal move is a single kind of animal, optionally padded with the
//!   joker. Elephants may additionally be padded with mosquitoes, as long
//!   as the mosquitoes do not outnumber the elephants plus the joker.
//! - A move defeats the previous one by being exactly one card more of the
//!   same kind, or the same number of cards of a predator kind.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::CardType;
use super::collection::{describe, Cards};

/// Inline storage: a legal move holds at most three kinds
/// (main kind, mosquito, joker).
type MoveCards = SmallVec<[(CardType, u32); 3]>;

/// Elephant-equivalents for 2 to 5 cards, as (elephants, mosquitoes, jokers).
const ELEPHANT_VARIANTS: [&[(u32, u32, u32)]; 4] = [
    &[(2, 0, 0), (1, 0, 1), (1, 1, 0)],
    &[(3, 0, 0), (2, 0, 1), (1, 1, 1), (2, 1, 0)],
    &[(4, 0, 0), (3, 0, 1), (2, 1, 1), (3, 1, 0), (2, 2, 0), (1, 2, 1)],
    // Every entry must hold exactly five cards: (4, 1, 0) stands where a
    // three-card (2, 1, 0) would make a move that cannot beat four elephants.
    &[(5, 0, 0), (4, 0, 1), (3, 1, 1), (4, 1, 0), (3, 2, 0), (2, 2, 1)],
];

/// A single play: the cards put down by one player in one turn.
///
/// Equality is structural. The empty move is [`Move::pass`].
///
/// ## Example
///
/// ```
/// use franks_zoo::cards::{CardType, Move};
///
/// let crocodiles = Move::of(CardType::Crocodile, 2);
/// let elephants = Move::of(CardType::Elephant, 1).with(CardType::Joker, 1);
///
/// assert!(elephants.is_legal());
/// assert!(elephants.can_defeat(&crocodiles));
/// assert!(!crocodiles.can_defeat(&elephants));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "MoveCards", into = "MoveCards")]
pub struct Move {
    cards: MoveCards,
    card_count: u32,
}

impl Move {
    /// Create a move from (type, count) entries.
    ///
    /// Zero counts are dropped and repeated types are merged.
    pub fn new(entries: impl IntoIterator<Item = (CardType, u32)>) -> Self {
        let mut cards = MoveCards::new();
        for (card, count) in entries {
            if count == 0 {
                continue;
            }
            match cards.binary_search_by_key(&card, |&(c, _)| c) {
                Ok(i) => cards[i].1 += count,
                Err(i) => cards.insert(i, (card, count)),
            }
        }
        let card_count = cards.iter().map(|&(_, n)| n).sum();
        Self { cards, card_count }
    }

    /// The move of not playing any cards.
    #[must_use]
    pub fn pass() -> Self {
        Self {
            cards: MoveCards::new(),
            card_count: 0,
        }
    }

    /// `count` cards of a single type.
    #[must_use]
    pub fn of(card: CardType, count: u32) -> Self {
        Self::new([(card, count)])
    }

    /// This move with `count` more cards of `card` added.
    #[must_use]
    pub fn with(self, card: CardType, count: u32) -> Self {
        Self::new(self.cards.into_iter().chain(std::iter::once((card, count))))
    }

    /// Whether this is the pass move.
    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.cards.is_empty()
    }

    /// Total number of cards played.
    #[must_use]
    pub fn card_count(&self) -> u32 {
        self.card_count
    }

    /// Whether the cards form a valid play on their own.
    ///
    /// Pass is always legal. The joker cannot be played alone.
    #[must_use]
    pub fn is_legal(&self) -> bool {
        if self.is_pass() {
            return true;
        }

        let jokers = self.count_of(CardType::Joker);
        let kinds: SmallVec<[CardType; 3]> = self
            .cards
            .iter()
            .map(|&(card, _)| card)
            .filter(|&card| card != CardType::Joker)
            .collect();

        match kinds.as_slice() {
            [] => false,
            [_] => true,
            [CardType::Elephant, CardType::Mosquito] => {
                self.count_of(CardType::Elephant) + jokers >= self.count_of(CardType::Mosquito)
            }
            _ => false,
        }
    }

    /// The kind of animal this move counts as.
    ///
    /// `None` for pass and for illegal moves. Elephants padded with
    /// mosquitoes count as elephants.
    #[must_use]
    pub fn main_card_type(&self) -> Option<CardType> {
        if !self.is_legal() {
            return None;
        }
        if self.count_of(CardType::Elephant) > 0 && self.count_of(CardType::Mosquito) > 0 {
            return Some(CardType::Elephant);
        }
        self.cards
            .iter()
            .map(|&(card, _)| card)
            .find(|&card| card != CardType::Joker)
    }

    /// Every move that would defeat this one.
    ///
    /// One more card of the main kind in every variant, followed by the same
    /// number of cards of each predator kind in every variant. Empty for pass.
    #[must_use]
    pub fn defeatable_moves(&self) -> Vec<Move> {
        let Some(main) = self.main_card_type() else {
            return Vec::new();
        };

        let mut moves = Move::all_variants(main, self.card_count + 1);
        for &predator in main.predators() {
            moves.extend(Move::all_variants(predator, self.card_count));
        }
        moves
    }

    /// Whether this move may be played on top of `other`.
    ///
    /// Pass never defeats anything, and any legal non-pass move defeats a
    /// pass.
    ///
    /// # Panics
    ///
    /// Panics if a legal non-pass move has no main card type, which would be
    /// a bug in [`Move::is_legal`].
    #[must_use]
    pub fn can_defeat(&self, other: &Move) -> bool {
        if !self.is_legal() || !other.is_legal() {
            return false;
        }
        if self.is_pass() {
            return false;
        }
        if other.is_pass() {
            return true;
        }

        let mine = self
            .main_card_type()
            .expect("legal non-pass move always has a main card type");
        let theirs = other
            .main_card_type()
            .expect("legal non-pass move always has a main card type");

        (mine == theirs && self.card_count == other.card_count + 1)
            || (mine.is_predator_of(theirs) && self.card_count == other.card_count)
    }

    /// Every way to put down `count` cards that count as `card`.
    ///
    /// Any kind may swap one card for the joker. Elephants may also swap
    /// cards for mosquitoes, never more mosquitoes than elephants plus the
    /// joker. More than 5 elephant-equivalents is not possible with this
    /// deck and yields no variants.
    ///
    /// ```
    /// use franks_zoo::cards::{CardType, Move};
    ///
    /// let variants = Move::all_variants(CardType::Fish, 2);
    /// assert_eq!(
    ///     variants,
    ///     vec![
    ///         Move::of(CardType::Fish, 2),
    ///         Move::of(CardType::Fish, 1).with(CardType::Joker, 1),
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn all_variants(card: CardType, count: u32) -> Vec<Move> {
        match (card, count) {
            (_, 0) => Vec::new(),
            (_, 1) => vec![Move::of(card, 1)],
            (CardType::Elephant, 2..=5) => ELEPHANT_VARIANTS[count as usize - 2]
                .iter()
                .map(|&(elephants, mosquitoes, jokers)| {
                    Move::new([
                        (CardType::Elephant, elephants),
                        (CardType::Mosquito, mosquitoes),
                        (CardType::Joker, jokers),
                    ])
                })
                .collect(),
            (CardType::Elephant, _) => Vec::new(),
            _ => vec![
                Move::of(card, count),
                Move::of(card, count - 1).with(CardType::Joker, 1),
            ],
        }
    }
}

impl Default for Move {
    fn default() -> Self {
        Self::pass()
    }
}

impl Cards for Move {
    fn count_of(&self, card: CardType) -> u32 {
        self.cards
            .iter()
            .find(|&&(c, _)| c == card)
            .map_or(0, |&(_, n)| n)
    }
}

impl<const N: usize> From<[(CardType, u32); N]> for Move {
    fn from(entries: [(CardType, u32); N]) -> Self {
        Self::new(entries)
    }
}

impl From<MoveCards> for Move {
    fn from(cards: MoveCards) -> Self {
        Self::new(cards)
    }
}

impl From<Move> for MoveCards {
    fn from(mv: Move) -> Self {
        mv.cards
    }
}

impl FromIterator<CardType> for Move {
    fn from_iter<I: IntoIterator<Item = CardType>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|card| (card, 1)))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_pass() {
            return f.write_str("pass");
        }
        f.write_str(&describe(self))
    }
}
