use strum::Display;

/// Where the game is in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum GamePhase {
    /// `start_game` hasn't been called yet.
    #[default]
    NotStarted,
    /// A round is in progress.
    Playing,
    /// The help budget ran out this round. The round can still be completed.
    Lost,
    /// The sentence queue ran dry.
    Ended,
}

/// Game state.
#[derive(Debug, Default)]
pub struct GameState {
    pub phase: GamePhase,
    /// Helps used in the current round.
    pub helps_used: usize,
    /// Helps allowed per round.
    pub max_helps: usize,
    /// How many rounds have been started, including the current one.
    pub round_number: usize,
    pub rounds_won: usize,
    pub rounds_lost: usize,
    pub rounds_skipped: usize,
}
