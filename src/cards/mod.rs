//! Card system: card types, hands, and moves.
//!
//! ## Key Types
//!
//! - `CardType`: The 13 card types and their predator relation
//! - `Cards`: Multiset capability shared by hands and moves
//! - `Hand`: A seat's mutable multiset of cards
//! - `Move`: An immutable play (or pass) with legality and defeat rules

pub mod card;
pub mod collection;
pub mod hand;
pub mod moves;

pub use card::{deck, CardType, ParseCardTypeError, DECK_SIZE};
pub use collection::{Cards, Counts};
pub use hand::Hand;
pub use moves::Move;
