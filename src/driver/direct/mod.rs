use log::{debug, info};

use super::{Driver, DriverError};
use crate::{
    game::{Game, GameEvent, GamePhase},
    solver::{Move, Solver},
};

/// Give up on a solver after this many moves without the game ending.
const MAX_MOVES: usize = 10_000;

/// A driver for direct interaction with an instance of `Game`.
pub struct DirectDriver {
    /// The game itself.
    game: Game,
    /// The solver which will attempt to play the game.
    solver: Solver,
    /// Moves applied so far.
    moves: usize,
}

impl DirectDriver {
    /// The game being played.
    #[cfg(test)]
    pub fn game(&self) -> &Game {
        &self.game
    }

    fn apply(&mut self, mv: Move) -> Result<(), DriverError> {
        debug!("Applying move {:?}", mv);
        self.moves += 1;
        match mv {
            Move::Key { slot, event } => self.game.press(slot, &event)?,
            Move::Help => self.game.request_help(),
            Move::Skip => self.game.skip()?,
        }
        Ok(())
    }

    fn handle_events(&mut self) {
        for event in self.game.take_events() {
            match event {
                GameEvent::RoundStarted(number) => {
                    if let Some(round) = self.game.round() {
                        info!(
                            "Round {}: {}{}{}",
                            number,
                            round.left,
                            "_".repeat(round.slots.len()),
                            round.right
                        );
                    }
                }
                GameEvent::Focus(index) => debug!("Focus slot {}", index),
                GameEvent::RoundWon | GameEvent::RoundLost | GameEvent::GameEnded => {
                    debug!("{:?}", event)
                }
            }
        }
    }
}

impl Driver for DirectDriver {
    fn new(game: Game, solver: Solver) -> Result<Self, DriverError> {
        Ok(DirectDriver {
            game,
            solver,
            moves: 0,
        })
    }

    fn play(&mut self) -> Result<(), DriverError> {
        self.game.start_game()?;
        self.handle_events();

        while self.game.phase() != GamePhase::Ended {
            let moves = self.solver.next_moves(&self.game);
            if moves.is_empty() || self.moves >= MAX_MOVES {
                return Err(DriverError::Stalled(self.moves));
            }

            let round_number = self.game.state.round_number;
            for mv in moves {
                self.apply(mv)?;
                if self.game.state.round_number != round_number {
                    // The rest of the batch was meant for the previous round
                    break;
                }
            }
            self.handle_events();
        }

        info!(
            "Game complete! Won {}, lost {}, skipped {}",
            self.game.state.rounds_won,
            self.game.state.rounds_lost,
            self.game.state.rounds_skipped
        );
        Ok(())
    }
}
