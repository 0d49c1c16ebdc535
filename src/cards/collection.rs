//! The multiset capability shared by hands and moves.
//!
//! Both `Hand` and `Move` are a mapping from card type to a positive count.
//! Implementors only answer `count_of`; iteration, totals and the sorted
//! flat view are derived from it and always run in card-type order.

use super::card::CardType;

/// A collection of cards: card type → count, with no zero entries.
pub trait Cards {
    /// Number of cards of the given type (0 if absent).
    fn count_of(&self, card: CardType) -> u32;

    /// Iterate over (type, count) pairs with a positive count, in card order.
    fn counts(&self) -> Counts<'_, Self> {
        Counts {
            cards: self,
            next: 0,
        }
    }

    /// Total number of cards.
    fn card_count(&self) -> u32 {
        self.counts().map(|(_, n)| n).sum()
    }

    /// Whether the collection holds no cards at all.
    fn is_empty(&self) -> bool {
        self.counts().next().is_none()
    }

    /// Expand into individual cards sorted by card type.
    ///
    /// ```
    /// use franks_zoo::cards::{CardType, Cards, Move};
    ///
    /// let mv = Move::of(CardType::Elephant, 2).with(CardType::Whale, 1);
    /// assert_eq!(
    ///     mv.to_sorted_vec(),
    ///     vec![CardType::Whale, CardType::Elephant, CardType::Elephant]
    /// );
    /// ```
    fn to_sorted_vec(&self) -> Vec<CardType> {
        self.counts()
            .flat_map(|(card, n)| std::iter::repeat(card).take(n as usize))
            .collect()
    }
}

/// Iterator over the non-zero entries of a [`Cards`] collection.
pub struct Counts<'a, C: ?Sized> {
    cards: &'a C,
    next: usize,
}

impl<'a, C: Cards + ?Sized> Iterator for Counts<'a, C> {
    type Item = (CardType, u32);

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < CardType::COUNT {
            let card = CardType::ALL[self.next];
            self.next += 1;
            let count = self.cards.count_of(card);
            if count > 0 {
                return Some((card, count));
            }
        }
        None
    }
}

/// Render a collection as "2 elephant + 1 mosquito".
pub(crate) fn describe<C: Cards + ?Sized>(cards: &C) -> String {
    cards
        .counts()
        .map(|(card, n)| format!("{} {}", n, card))
        .collect::<Vec<_>>()
        .join(" + ")
}
