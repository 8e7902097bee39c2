use thiserror::Error;

use crate::{
    game::{FormatError, Game},
    solver::Solver,
};

pub mod direct;

/// Defines a game driver: the layer that feeds a bot's moves into the game and
/// reacts to what the game asks of its UI.
pub trait Driver {
    /// Construct a new instance of the driver for the given game and solver.
    fn new(game: Game, solver: Solver) -> Result<Self, DriverError>
    where
        Self: Sized;

    /// Play the game until it ends.
    fn play(&mut self) -> Result<(), DriverError>;
}

/// Failure modes for drivers.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("malformed sentence")]
    Format(#[from] FormatError),
    #[error("solver made no progress after {0} moves")]
    Stalled(usize),
}
