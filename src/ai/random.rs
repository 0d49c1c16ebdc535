//! An AI that plays any possible move at random.

use super::GameAi;
use crate::cards::Move;
use crate::core::{GameRng, PlayerId};
use crate::rules::Game;

/// Picks uniformly among all possible moves and passes when there are none.
///
/// Useful as a weak baseline opponent for [`super::HeuristicAi`].
#[derive(Clone, Debug)]
pub struct RandomAi<'a> {
    game: &'a Game,
    player: PlayerId,
    rng: GameRng,
}

impl<'a> RandomAi<'a> {
    #[must_use]
    pub fn new(game: &'a Game, player: PlayerId, rng: GameRng) -> Self {
        assert!(player.index() < game.player_count(), "Seat out of range");
        Self { game, player, rng }
    }
}

impl GameAi for RandomAi<'_> {
    fn game(&self) -> &Game {
        self.game
    }

    fn player(&self) -> PlayerId {
        self.player
    }

    fn next_move(&mut self) -> Move {
        if self.game.ended() {
            return Move::pass();
        }
        let moves = self.all_possible_moves(self.my_hand());
        self.rng.choose(&moves).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardType::*, Hand};
    use crate::rules::GameBuilder;

    #[test]
    fn test_random_moves_are_possible() {
        let game = Game::new(21);
        for seed in 0..20 {
            let mut ai = RandomAi::new(&game, PlayerId::new(0), GameRng::new(seed));
            let mv = ai.next_move();
            assert!(!mv.is_pass());
            assert!(game.can_make_move(&mv));
        }
    }

    #[test]
    fn test_passes_without_options() {
        let game = GameBuilder::new()
            .hands([
                Hand::from([(Fish, 1)]),
                Hand::from([(Mouse, 1)]),
                Hand::from([(Bear, 1)]),
                Hand::from([(Bear, 1)]),
            ])
            .current_turn(PlayerId::new(1))
            .last_move(Move::of(Whale, 1), PlayerId::new(0))
            .build();

        let mut ai = RandomAi::new(&game, PlayerId::new(1), GameRng::new(0));
        assert!(ai.next_move().is_pass());
    }
}
