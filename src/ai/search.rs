//! Move enumeration and the forced-win lookahead.
//!
//! Everything here works on hands rather than games: the lookahead replays
//! moves on cloned hands, which `im` makes O(1), and never touches turn order.

use std::cmp::Reverse;

use crate::cards::{Cards, Hand, Move};
use crate::rules::Game;

/// Every legal move `hand` could open with.
///
/// For each type in the hand and each sub-count up to the number held, the
/// variants of that type and count the hand can pay for. Order follows the
/// hand's card order, then ascending sub-count.
#[must_use]
pub fn all_possible_opening_moves(hand: &Hand) -> Vec<Move> {
    hand.counts()
        .flat_map(|(card, held)| (1..=held).flat_map(move |n| Move::all_variants(card, n)))
        .filter(|mv| hand.can_make_move(mv) && mv.is_legal())
        .collect()
}

/// Every move `hand` could make in the current state of `game`, largest first.
///
/// Against a move on the table these are its defeating moves the hand can pay
/// for, otherwise the opening moves. The sort is stable, so moves with the same
/// card count keep their enumeration order.
#[must_use]
pub fn all_possible_moves(game: &Game, hand: &Hand) -> Vec<Move> {
    let mut moves = match game.last_move() {
        Some(last) => last
            .defeatable_moves()
            .into_iter()
            .filter(|mv| hand.can_make_move(mv))
            .collect(),
        None => all_possible_opening_moves(hand),
    };
    moves.sort_by_key(|mv| Reverse(mv.card_count()));
    moves
}

/// Whether playing `mv` empties `hand`.
#[must_use]
pub fn is_winning_move(mv: &Move, hand: &Hand) -> bool {
    let mut after = hand.clone();
    after.make_move(mv) && after.is_empty()
}

/// Whether nothing payable from `available` could defeat `mv`.
///
/// `available` is usually every card the opponents hold between them.
#[must_use]
pub fn is_undefeatable_move(mv: &Move, available: &Hand) -> bool {
    !mv.defeatable_moves()
        .iter()
        .any(|defeater| available.can_make_move(defeater))
}

/// Whether `hand` can win by itself from an opening position.
///
/// True if some opening move empties the hand, or some undefeatable opening
/// move leaves a hand that can again win by itself. Each undefeatable move
/// uses up one level of `depth`; at depth 0 the answer is `false`.
#[must_use]
pub fn has_winning_sequence(hand: &Hand, available: &Hand, depth: u32) -> bool {
    if depth == 0 {
        return false;
    }

    let mut openings = all_possible_opening_moves(hand);
    openings.sort_by_key(|mv| Reverse(mv.card_count()));

    openings.iter().any(|mv| {
        if is_winning_move(mv, hand) {
            return true;
        }
        if !is_undefeatable_move(mv, available) {
            return false;
        }
        let mut after = hand.clone();
        after.make_move(mv) && has_winning_sequence(&after, available, depth - 1)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardType::*;
    use crate::rules::GameBuilder;

    #[test]
    fn test_opening_moves_single_type() {
        let hand = Hand::from([(Fish, 2)]);
        let moves = all_possible_opening_moves(&hand);
        assert_eq!(moves, vec![Move::of(Fish, 1), Move::of(Fish, 2)]);
    }

    #[test]
    fn test_opening_moves_with_joker() {
        let hand = Hand::from([(Seal, 2), (Joker, 1)]);
        let moves = all_possible_opening_moves(&hand);

        assert!(moves.contains(&Move::of(Seal, 2)));
        assert!(moves.contains(&Move::of(Seal, 1).with(Joker, 1)));
        // A lone joker is never a legal move
        assert!(!moves.contains(&Move::of(Joker, 1)));
        assert!(moves.iter().all(Move::is_legal));
    }

    #[test]
    fn test_opening_moves_elephant_with_mosquito() {
        let hand = Hand::from([(Elephant, 2), (Mosquito, 1)]);
        let moves = all_possible_opening_moves(&hand);

        assert!(moves.contains(&Move::of(Elephant, 1).with(Mosquito, 1)));
        assert!(moves.contains(&Move::of(Mosquito, 1)));
    }

    #[test]
    fn test_possible_moves_sorted_by_count() {
        let game = GameBuilder::new()
            .hands([
                Hand::from([(Fish, 3), (Perch, 1)]),
                Hand::from([(Whale, 1)]),
                Hand::from([(Whale, 1)]),
                Hand::from([(Whale, 1)]),
            ])
            .build();

        let moves = all_possible_moves(&game, game.hand(game.current_turn()));
        let counts: Vec<u32> = moves.iter().map(Move::card_count).collect();
        assert_eq!(counts, vec![3, 2, 1, 1]);
        assert_eq!(moves[0], Move::of(Fish, 3));
    }

    #[test]
    fn test_possible_moves_against_last_move() {
        let game = GameBuilder::new()
            .hands([
                Hand::from([(Fish, 3), (Perch, 1), (Whale, 2)]),
                Hand::from([(Whale, 1)]),
                Hand::from([(Whale, 1)]),
                Hand::from([(Whale, 1)]),
            ])
            .last_move(Move::of(Fish, 1), crate::core::PlayerId::new(3))
            .build();

        let moves = all_possible_moves(&game, game.hand(game.current_turn()));
        assert_eq!(moves[0], Move::of(Fish, 2));
        assert!(moves.contains(&Move::of(Whale, 1)));
        assert!(moves.contains(&Move::of(Perch, 1)));
        assert!(!moves.contains(&Move::of(Fish, 1)));
    }

    #[test]
    fn test_winning_move() {
        let hand = Hand::from([(Lion, 2)]);
        assert!(is_winning_move(&Move::of(Lion, 2), &hand));
        assert!(!is_winning_move(&Move::of(Lion, 1), &hand));
        // Cannot pay for it
        assert!(!is_winning_move(&Move::of(Lion, 3), &hand));
    }

    #[test]
    fn test_undefeatable_move() {
        // Only elephants eat lions, and a bigger lion set would need 3 cards
        let available = Hand::from([(Lion, 1), (Fish, 4)]);
        assert!(is_undefeatable_move(&Move::of(Lion, 2), &available));

        let available = Hand::from([(Elephant, 2)]);
        assert!(!is_undefeatable_move(&Move::of(Lion, 2), &available));
    }

    #[test]
    fn test_winning_sequence_two_steps() {
        let hand = Hand::from([(Whale, 2), (Fish, 1)]);
        let available = Hand::from([(Mouse, 3)]);

        // Two whales cannot be beaten, then the fish goes out
        assert!(has_winning_sequence(&hand, &available, 2));
        assert!(!has_winning_sequence(&hand, &available, 1));
        assert!(!has_winning_sequence(&hand, &available, 0));
    }

    #[test]
    fn test_no_winning_sequence_when_beatable() {
        let hand = Hand::from([(Fish, 1), (Mouse, 1)]);
        let available = Hand::from([(Perch, 1), (Lion, 1)]);
        assert!(!has_winning_sequence(&hand, &available, 3));
    }
}
