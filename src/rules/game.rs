//! The game state machine.
//!
//! A game runs from the deal until at most one seat still holds cards.
//! `make_move` is the only way to change it: every rule violation is
//! reported as `false` and leaves the state untouched.
//!
//! ## Turn order
//!
//! Seats play in order, skipping seats whose hands are empty. When the turn
//! comes back round to the seat that made the last real play (everyone else
//! passed), `last_move` is cleared and that seat may open with anything.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::events::{GameEvent, GameListener};
use crate::cards::{deck, Cards, Hand, Move};
use crate::core::{GameRng, PlayerId, PlayerMap};

/// Number of seats at the table.
pub const PLAYER_COUNT: usize = 4;

/// Cards dealt to each seat.
pub const CARDS_PER_PLAYER: usize = 15;

/// Shuffle the deck and split it into one hand per seat.
pub(crate) fn deal_hands(rng: &mut GameRng) -> PlayerMap<Hand> {
    let mut cards = deck();
    rng.shuffle(&mut cards);

    let hands = cards
        .chunks(CARDS_PER_PLAYER)
        .map(|chunk| chunk.iter().copied().collect::<Hand>())
        .collect();

    PlayerMap::from_vec(hands)
}

/// Why a decoded game was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidGame {
    #[error("A game needs exactly 4 hands, got {0}")]
    HandCount(usize),
    #[error("Seat {0} is out of range")]
    SeatOutOfRange(u8),
    #[error("Last move {0} cannot be played")]
    UnplayableLastMove(Move),
    #[error("Last move {0} has no seat")]
    LastMoveWithoutSeat(Move),
    #[error("Ended flag {0} disagrees with the hands")]
    EndedFlag(bool),
}

/// A game of Frank's Zoo.
///
/// Cloning (or [`Game::snapshot`]) copies the state but not the listener.
/// Deserializing checks the decoded state before accepting it.
#[derive(Serialize, Deserialize)]
#[serde(try_from = "GameState")]
pub struct Game {
    player_hands: PlayerMap<Hand>,
    current_turn: PlayerId,
    ended: bool,
    /// The last non-pass move. `None` when an opening move is due.
    last_move: Option<Move>,
    last_move_made_by: Option<PlayerId>,
    total_played_card_count: u32,
    #[serde(skip)]
    listener: Option<Box<dyn GameListener>>,
}

impl Game {
    /// Deal a new game from the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::deal(&mut GameRng::new(seed))
    }

    /// Deal a new game from OS entropy.
    #[must_use]
    pub fn random() -> Self {
        Self::deal(&mut GameRng::from_entropy())
    }

    /// Shuffle the 60-card deck and deal 15 cards to each seat.
    pub fn deal(rng: &mut GameRng) -> Self {
        Self::from_parts(deal_hands(rng), PlayerId::new(0), None, 0)
    }

    pub(crate) fn from_parts(
        player_hands: PlayerMap<Hand>,
        current_turn: PlayerId,
        last_move: Option<(Move, PlayerId)>,
        total_played_card_count: u32,
    ) -> Self {
        assert_eq!(
            player_hands.player_count(),
            PLAYER_COUNT,
            "A game needs exactly {} hands",
            PLAYER_COUNT
        );
        assert!(current_turn.index() < PLAYER_COUNT, "Seat out of range");

        let ended = player_hands.values().filter(|h| !h.is_empty()).count() <= 1;
        let (last_move, last_move_made_by) = match last_move {
            Some((mv, seat)) => (Some(mv), Some(seat)),
            None => (None, None),
        };

        Self {
            player_hands,
            current_turn,
            ended,
            last_move,
            last_move_made_by,
            total_played_card_count,
            listener: None,
        }
    }

    // === Accessors ===

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        PLAYER_COUNT
    }

    /// All hands, indexed by seat.
    #[must_use]
    pub fn player_hands(&self) -> &PlayerMap<Hand> {
        &self.player_hands
    }

    /// One seat's hand.
    #[must_use]
    pub fn hand(&self, seat: PlayerId) -> &Hand {
        &self.player_hands[seat]
    }

    /// The hand of the seat whose turn it is.
    #[must_use]
    pub fn current_player_hand(&self) -> &Hand {
        &self.player_hands[self.current_turn]
    }

    /// The seat whose turn it is.
    #[must_use]
    pub fn current_turn(&self) -> PlayerId {
        self.current_turn
    }

    /// Whether at most one seat still holds cards.
    #[must_use]
    pub fn ended(&self) -> bool {
        self.ended
    }

    /// The move to beat, or `None` when an opening move is due.
    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.last_move.as_ref()
    }

    /// The seat that made `last_move`.
    #[must_use]
    pub fn last_move_made_by(&self) -> Option<PlayerId> {
        self.last_move_made_by
    }

    /// Cards played so far in this game.
    #[must_use]
    pub fn total_played_card_count(&self) -> u32 {
        self.total_played_card_count
    }

    /// Seats that still hold cards.
    #[must_use]
    pub fn remaining_players(&self) -> usize {
        self.player_hands.values().filter(|h| !h.is_empty()).count()
    }

    // === Listener ===

    /// Attach the listener that receives turn and win notifications.
    pub fn set_listener(&mut self, listener: Box<dyn GameListener>) {
        self.listener = Some(listener);
    }

    /// Detach and return the current listener.
    pub fn take_listener(&mut self) -> Option<Box<dyn GameListener>> {
        self.listener.take()
    }

    // === Moves ===

    /// Whether the current seat could make `mv` right now.
    ///
    /// Pass is always possible while the game is running.
    #[must_use]
    pub fn can_make_move(&self, mv: &Move) -> bool {
        if self.ended || !mv.is_legal() {
            return false;
        }
        if mv.is_pass() {
            return true;
        }
        self.defeats_last_move(mv) && self.current_player_hand().can_make_move(mv)
    }

    /// Make `mv` for the current seat.
    ///
    /// Returns `false`, with no effect, if the game has ended, the move is
    /// illegal, it does not defeat the last move, or the seat lacks the cards.
    pub fn make_move(&mut self, mv: &Move) -> bool {
        let seat = self.current_turn;

        if self.ended {
            trace!(%seat, %mv, "rejected: game has ended");
            return false;
        }
        if !mv.is_legal() {
            trace!(%seat, %mv, "rejected: illegal move");
            return false;
        }
        if mv.is_pass() {
            debug!(%seat, "pass");
            self.next_player();
            return true;
        }
        if !self.defeats_last_move(mv) {
            trace!(%seat, %mv, "rejected: does not defeat last move");
            return false;
        }
        if !self.player_hands[seat].make_move(mv) {
            trace!(%seat, %mv, "rejected: missing cards");
            return false;
        }

        self.last_move = Some(mv.clone());
        self.last_move_made_by = Some(seat);
        self.total_played_card_count += mv.card_count();
        debug!(%seat, %mv, played = self.total_played_card_count, "move made");

        if self.remaining_players() <= 1 {
            self.ended = true;
            let place = PLAYER_COUNT - 1;
            info!(%seat, place, "game over");
            self.emit(GameEvent::PlayerWon { seat, place });
            return true;
        }

        if self.player_hands[seat].is_empty() {
            let place = PLAYER_COUNT - self.remaining_players();
            info!(%seat, place, "player finished");
            self.emit(GameEvent::PlayerWon { seat, place });
        }

        self.next_player();
        true
    }

    fn defeats_last_move(&self, mv: &Move) -> bool {
        self.last_move
            .as_ref()
            .map_or(true, |last| mv.can_defeat(last))
    }

    fn next_player(&mut self) {
        loop {
            self.current_turn = self.current_turn.next(PLAYER_COUNT);

            if Some(self.current_turn) == self.last_move_made_by && self.last_move.is_some() {
                debug!(seat = %self.current_turn, "everyone passed, opening move due");
                self.last_move = None;
            }

            if !self.player_hands[self.current_turn].is_empty() {
                break;
            }
        }

        let seat = self.current_turn;
        self.emit(GameEvent::TurnChanged { seat });
    }

    fn emit(&mut self, event: GameEvent) {
        let Some(mut listener) = self.listener.take() else {
            return;
        };

        match event {
            GameEvent::TurnChanged { seat } => listener.on_turn_changed(seat, self),
            GameEvent::PlayerWon { seat, place } => listener.on_player_won(self, seat, place),
        }

        self.listener = Some(listener);
    }

    // === Copies ===

    /// Copy the game state without the listener.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        Self {
            player_hands: self.player_hands.clone(),
            current_turn: self.current_turn,
            ended: self.ended,
            last_move: self.last_move.clone(),
            last_move_made_by: self.last_move_made_by,
            total_played_card_count: self.total_played_card_count,
            listener: None,
        }
    }

    /// Renumber the seats so that seat `offset` becomes seat 0.
    ///
    /// Rotating by `PLAYER_COUNT - offset` undoes the rotation. The copy has
    /// no listener.
    #[must_use]
    pub fn rotated(&self, offset: usize) -> Self {
        Self {
            player_hands: self.player_hands.rotated(offset),
            current_turn: self.current_turn.rotated(offset, PLAYER_COUNT),
            last_move_made_by: self
                .last_move_made_by
                .map(|seat| seat.rotated(offset, PLAYER_COUNT)),
            ..self.snapshot()
        }
    }
}

/// Decoded form of a [`Game`], before its seats and hands are checked.
#[derive(Deserialize)]
struct GameState {
    player_hands: PlayerMap<Hand>,
    current_turn: PlayerId,
    ended: bool,
    last_move: Option<Move>,
    last_move_made_by: Option<PlayerId>,
    total_played_card_count: u32,
}

impl TryFrom<GameState> for Game {
    type Error = InvalidGame;

    fn try_from(state: GameState) -> Result<Self, Self::Error> {
        let hands = state.player_hands.player_count();
        if hands != PLAYER_COUNT {
            return Err(InvalidGame::HandCount(hands));
        }
        for seat in std::iter::once(state.current_turn).chain(state.last_move_made_by) {
            if seat.index() >= PLAYER_COUNT {
                return Err(InvalidGame::SeatOutOfRange(seat.0));
            }
        }
        if let Some(mv) = &state.last_move {
            if mv.main_card_type().is_none() {
                return Err(InvalidGame::UnplayableLastMove(mv.clone()));
            }
            if state.last_move_made_by.is_none() {
                return Err(InvalidGame::LastMoveWithoutSeat(mv.clone()));
            }
        }

        let game = Self {
            player_hands: state.player_hands,
            current_turn: state.current_turn,
            ended: state.ended,
            last_move: state.last_move,
            last_move_made_by: state.last_move_made_by,
            total_played_card_count: state.total_played_card_count,
            listener: None,
        };
        if game.ended != (game.remaining_players() <= 1) {
            return Err(InvalidGame::EndedFlag(game.ended));
        }
        Ok(game)
    }
}

impl Clone for Game {
    fn clone(&self) -> Self {
        self.snapshot()
    }
}

impl PartialEq for Game {
    fn eq(&self, other: &Self) -> bool {
        self.player_hands == other.player_hands
            && self.current_turn == other.current_turn
            && self.ended == other.ended
            && self.last_move == other.last_move
            && self.last_move_made_by == other.last_move_made_by
            && self.total_played_card_count == other.total_played_card_count
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("player_hands", &self.player_hands)
            .field("current_turn", &self.current_turn)
            .field("ended", &self.ended)
            .field("last_move", &self.last_move)
            .field("last_move_made_by", &self.last_move_made_by)
            .field("total_played_card_count", &self.total_played_card_count)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}
