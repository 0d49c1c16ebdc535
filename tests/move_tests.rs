//! Card, move and hand rules through the public API.
//!
//! These pin the fixed rule tables: predator lookups, legality, the defeat
//! relation and the affordability of moves.

use franks_zoo::cards::CardType::*;
use franks_zoo::cards::{deck, CardType, Cards, Hand, Move, DECK_SIZE};

// =============================================================================
// Predator Table
// =============================================================================

#[test]
fn test_predator_lookups() {
    assert_eq!(Hedgehog.predators(), &[Fox]);
    assert!(Whale.predators().is_empty());
    assert!(Joker.predators().is_empty());
    assert!(Elephant.is_predator_of(Crocodile));
    assert!(!Crocodile.is_predator_of(Elephant));
}

#[test]
fn test_joker_preys_on_nothing() {
    for card in CardType::ALL {
        assert!(!card.predators().contains(&Joker), "{}", card);
    }
}

#[test]
fn test_sorted_sequence_follows_card_order() {
    let hand = Hand::from([(Elephant, 5), (Whale, 4)]);
    let sorted = hand.to_sorted_vec();

    assert_eq!(sorted.len(), 9);
    assert!(sorted[..4].iter().all(|&c| c == Whale));
    assert!(sorted[4..].iter().all(|&c| c == Elephant));
}

#[test]
fn test_deck() {
    let cards = deck();
    assert_eq!(cards.len(), DECK_SIZE);
    assert_eq!(Hand::from_iter(cards.iter().copied()).count_of(Mosquito), 4);
    assert_eq!(cards.iter().filter(|&&c| c == Joker).count(), 1);
}

// =============================================================================
// Legality
// =============================================================================

#[test]
fn test_legality_table() {
    assert!(Move::of(Elephant, 1).with(Mosquito, 1).is_legal());
    assert!(Move::of(Elephant, 1).with(Joker, 1).with(Mosquito, 2).is_legal());
    assert!(!Move::of(Elephant, 1).with(Mosquito, 2).is_legal());
    assert!(!Move::of(Whale, 1).with(Elephant, 1).is_legal());
    assert!(!Move::of(Joker, 1).is_legal());
    assert!(Move::pass().is_legal());
}

#[test]
fn test_main_card_type() {
    assert_eq!(
        Move::of(Elephant, 2).with(Mosquito, 1).main_card_type(),
        Some(Elephant)
    );
    assert_eq!(Move::of(Mosquito, 3).main_card_type(), Some(Mosquito));
    assert_eq!(Move::of(Fish, 1).with(Joker, 1).main_card_type(), Some(Fish));
    assert_eq!(Move::of(Whale, 1).with(Elephant, 1).main_card_type(), None);
    assert_eq!(Move::pass().main_card_type(), None);
}

// =============================================================================
// Defeat Relation
// =============================================================================

#[test]
fn test_can_defeat_table() {
    assert!(Move::of(Elephant, 2).can_defeat(&Move::of(Crocodile, 2)));
    assert!(Move::of(Elephant, 1)
        .with(Joker, 1)
        .with(Mosquito, 2)
        .can_defeat(&Move::of(Crocodile, 4)));
    assert!(Move::of(Mouse, 2).can_defeat(&Move::of(Mouse, 1)));
    assert!(!Move::of(Mouse, 3).can_defeat(&Move::of(Mouse, 1)));
    assert!(!Move::of(Mouse, 2).can_defeat(&Move::of(Mouse, 2)));
    assert!(!Move::of(Crocodile, 2).can_defeat(&Move::of(Elephant, 2)));
}

#[test]
fn test_pass_never_defeats_and_is_always_beaten() {
    assert!(!Move::pass().can_defeat(&Move::of(Fish, 1)));
    assert!(!Move::pass().can_defeat(&Move::pass()));
    assert!(Move::of(Fish, 1).can_defeat(&Move::pass()));
}

#[test]
fn test_illegal_moves_defeat_nothing() {
    let illegal = Move::of(Whale, 1).with(Fish, 1);
    assert!(!illegal.can_defeat(&Move::of(Fish, 1)));
    assert!(!Move::of(Whale, 2).can_defeat(&illegal));
}

#[test]
fn test_defeatable_moves_of_three_bears() {
    let moves = Move::of(Bear, 3).defeatable_moves();

    let expected = [
        Move::of(Bear, 4),
        Move::of(Bear, 3).with(Joker, 1),
        Move::of(Whale, 3),
        Move::of(Whale, 2).with(Joker, 1),
        Move::of(Elephant, 3),
        Move::of(Elephant, 2).with(Joker, 1),
        Move::of(Elephant, 2).with(Mosquito, 1),
        Move::of(Elephant, 1).with(Mosquito, 1).with(Joker, 1),
    ];
    assert_eq!(moves.len(), 8);
    for mv in &expected {
        assert!(moves.contains(mv), "missing {}", mv);
    }
}

#[test]
fn test_defeatable_moves_of_three_whales() {
    let moves = Move::of(Whale, 3).defeatable_moves();
    assert_eq!(moves, vec![Move::of(Whale, 4), Move::of(Whale, 3).with(Joker, 1)]);
}

#[test]
fn test_defeatable_moves_all_defeat() {
    for card in CardType::ALL.into_iter().filter(|&c| c != Joker) {
        for count in 1..=4 {
            for target in Move::all_variants(card, count) {
                if !target.is_legal() {
                    continue;
                }
                for mv in target.defeatable_moves() {
                    assert!(mv.can_defeat(&target), "{} should defeat {}", mv, target);
                }
            }
        }
    }
}

#[test]
fn test_variants_have_requested_size() {
    for card in CardType::ALL {
        for count in 1..=5 {
            for mv in Move::all_variants(card, count) {
                assert_eq!(mv.card_count(), count, "{}", mv);
            }
        }
    }
}

#[test]
fn test_elephant_variant_counts() {
    let sizes: Vec<usize> = (2..=5)
        .map(|n| Move::all_variants(Elephant, n).len())
        .collect();
    assert_eq!(sizes, vec![3, 4, 6, 6]);
}

// =============================================================================
// Hand
// =============================================================================

#[test]
fn test_hand_make_move() {
    let mut hand = Hand::from([(Elephant, 3), (Whale, 2), (Fish, 4)]);

    assert!(hand.make_move(&Move::of(Elephant, 2)));
    assert_eq!(hand, Hand::from([(Elephant, 1), (Whale, 2), (Fish, 4)]));

    assert!(!hand.make_move(&Move::of(Whale, 3)));
    assert_eq!(hand, Hand::from([(Elephant, 1), (Whale, 2), (Fish, 4)]));
}

#[test]
fn test_hand_pass_is_always_affordable() {
    assert!(Hand::default().can_make_move(&Move::pass()));
    let mut hand = Hand::from([(Fox, 1)]);
    assert!(hand.make_move(&Move::pass()));
    assert_eq!(hand.card_count(), 1);
}

#[test]
fn test_hand_display() {
    let hand = Hand::from([(Mosquito, 1), (Elephant, 2)]);
    assert_eq!(hand.to_string(), "2 elephant + 1 mosquito");
    assert_eq!(Hand::default().to_string(), "(empty)");
}
