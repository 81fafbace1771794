//! Number race: a turn-based counting duel.
//!
//! Two players take turns adding between 1 and `max_step` to a running
//! total. Whoever lands the total exactly on the target wins; a step that
//! would overshoot is rejected so young players learn to count ahead.

use super::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

impl Player {
    fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The game goes on; it is the other player's turn.
    Continue,
    /// The moving player landed on the target and won.
    Won(Player),
}

#[derive(Debug, Clone)]
pub struct NumberRace {
    target: u32,
    max_step: u32,
    total: u32,
    turn: Player,
    winner: Option<Player>,
    moves: u32,
}

impl NumberRace {
    pub fn new(target: u32, max_step: u32) -> Result<Self, GameError> {
        if target == 0 {
            return Err(GameError::InvalidSetup("target must be positive".into()));
        }
        if max_step == 0 || max_step >= target {
            return Err(GameError::InvalidSetup(
                "max step must be between 1 and the target".into(),
            ));
        }
        Ok(NumberRace {
            target,
            max_step,
            total: 0,
            turn: Player::One,
            winner: None,
            moves: 0,
        })
    }

    /// Apply the current player's step.
    pub fn play(&mut self, step: u32) -> Result<TurnOutcome, GameError> {
        if self.winner.is_some() {
            return Err(GameError::Finished);
        }
        if step == 0 || step > self.max_step {
            return Err(GameError::InvalidMove(format!(
                "step must be between 1 and {}",
                self.max_step
            )));
        }
        // total <= target holds, so this cannot underflow or overflow.
        if step > self.target - self.total {
            return Err(GameError::InvalidMove(format!(
                "step overshoots the target of {}",
                self.target
            )));
        }

        self.total += step;
        self.moves += 1;

        if self.total == self.target {
            self.winner = Some(self.turn);
            Ok(TurnOutcome::Won(self.turn))
        } else {
            self.turn = self.turn.other();
            Ok(TurnOutcome::Continue)
        }
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Score for the progress store: fewer combined moves scores higher.
    /// `None` until the race is decided.
    pub fn score(&self) -> Option<u32> {
        self.winner.map(|_| self.target.saturating_sub(self.moves))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_setups() {
        assert!(matches!(
            NumberRace::new(0, 3),
            Err(GameError::InvalidSetup(_))
        ));
        assert!(matches!(
            NumberRace::new(10, 0),
            Err(GameError::InvalidSetup(_))
        ));
        assert!(matches!(
            NumberRace::new(10, 10),
            Err(GameError::InvalidSetup(_))
        ));
    }

    #[test]
    fn turns_alternate() {
        let mut game = NumberRace::new(21, 3).unwrap();
        assert_eq!(game.turn(), Player::One);
        game.play(2).unwrap();
        assert_eq!(game.turn(), Player::Two);
        game.play(3).unwrap();
        assert_eq!(game.turn(), Player::One);
        assert_eq!(game.total(), 5);
    }

    #[test]
    fn landing_on_target_wins() {
        let mut game = NumberRace::new(5, 3).unwrap();
        game.play(3).unwrap();
        let outcome = game.play(2).unwrap();
        assert_eq!(outcome, TurnOutcome::Won(Player::Two));
        assert_eq!(game.winner(), Some(Player::Two));
        assert_eq!(game.score(), Some(3));
    }

    #[test]
    fn overshooting_is_rejected_without_advancing_the_turn() {
        let mut game = NumberRace::new(5, 3).unwrap();
        game.play(3).unwrap();
        let err = game.play(3).unwrap_err();
        assert!(matches!(err, GameError::InvalidMove(_)));
        assert_eq!(game.turn(), Player::Two);
        assert_eq!(game.total(), 3);
    }

    #[test]
    fn out_of_range_steps_are_rejected() {
        let mut game = NumberRace::new(21, 3).unwrap();
        assert!(matches!(game.play(0), Err(GameError::InvalidMove(_))));
        assert!(matches!(game.play(4), Err(GameError::InvalidMove(_))));
    }

    #[test]
    fn no_moves_after_the_race_is_decided() {
        let mut game = NumberRace::new(3, 2).unwrap();
        game.play(2).unwrap();
        game.play(1).unwrap();
        assert_eq!(game.play(1), Err(GameError::Finished));
    }

    #[test]
    fn near_max_targets_do_not_overflow() {
        let mut game = NumberRace::new(u32::MAX, u32::MAX - 1).unwrap();
        game.play(u32::MAX - 1).unwrap();
        assert!(matches!(game.play(2), Err(GameError::InvalidMove(_))));
        assert_eq!(game.play(1).unwrap(), TurnOutcome::Won(Player::Two));
    }

    #[test]
    fn score_is_none_mid_race() {
        let mut game = NumberRace::new(21, 3).unwrap();
        game.play(1).unwrap();
        assert_eq!(game.score(), None);
    }
}
