use log::{debug, info};

pub use data::{Sentence, Settings};
pub use round::{FormatError, Round};
pub use state::{GamePhase, GameState};

use crate::input::KeyEvent;
use slot::{FocusMove, SlotSignal};

pub mod data;
pub mod round;
pub mod slot;
mod state;
#[cfg(test)]
mod tests;

/// Something the UI layer should react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A new round began. Carries the round number, starting at 1.
    RoundStarted(usize),
    /// Input focus should move to the slot at this index.
    Focus(usize),
    RoundWon,
    /// The help budget ran out, every missing character has been revealed.
    RoundLost,
    GameEnded,
}

/// An instance of the fill-in-the-blank game. Owns the sentence queue and the
/// round being played.
#[derive(Debug)]
pub struct Game {
    /// Sentences left to play. Played from the back.
    queue: Vec<Sentence>,
    /// The round in progress.
    round: Option<Round>,
    /// Index of the slot with input focus.
    focus: usize,
    /// Game state.
    pub state: GameState,
    /// Events not yet taken by the UI layer.
    events: Vec<GameEvent>,
}

impl Game {
    pub fn new(settings: &Settings) -> Self {
        Game {
            queue: Vec::new(),
            round: None,
            focus: 0,
            state: GameState {
                max_helps: settings.max_helps,
                ..GameState::default()
            },
            events: Vec::new(),
        }
    }

    /// Set the sentences to play.
    pub fn load_queue(&mut self, sentences: Vec<Sentence>) {
        self.queue = sentences;
    }

    /// Start playing with the last sentence in the queue. The sentence stays
    /// queued so the anti-repeat check in `advance` sees it again.
    pub fn start_game(&mut self) -> Result<(), FormatError> {
        match self.queue.last().cloned() {
            Some(sentence) => self.start_round(&sentence),
            None => {
                self.end_game();
                Ok(())
            }
        }
    }

    /// Replace the current round with one for `sentence`.
    pub fn start_round(&mut self, sentence: &Sentence) -> Result<(), FormatError> {
        let round = Round::new(sentence)?;

        let mut had_slots = false;
        if let Some(previous) = self.round.as_mut() {
            for slot in &mut previous.slots {
                slot.reset();
                had_slots = true;
            }
        }

        self.round = Some(round);
        self.state.helps_used = 0;
        self.state.round_number += 1;
        self.set_phase(GamePhase::Playing);
        self.focus = 0;
        debug!(
            "Starting round {} with {:?}",
            self.state.round_number, sentence.question
        );
        self.events.push(GameEvent::RoundStarted(self.state.round_number));
        if had_slots {
            self.events.push(GameEvent::Focus(0));
        }
        Ok(())
    }

    /// Move on to the next queued sentence, or end the game if there is none.
    pub fn advance(&mut self) -> Result<(), FormatError> {
        let mut next = self.queue.pop();
        let repeated = matches!(
            (&self.round, &next),
            (Some(round), Some(sentence)) if round.sentence.question == sentence.question
        );
        if repeated {
            // Only one retry, the queue may still repeat after this
            next = self.queue.pop();
        }

        match next {
            Some(sentence) => {
                let result = self.start_round(&sentence);
                if result.is_err() {
                    // The round before it is already over, nothing is left to play
                    self.end_game();
                }
                result
            }
            None => {
                self.end_game();
                Ok(())
            }
        }
    }

    /// Deliver a keystroke to the slot at `index`.
    pub fn press(&mut self, index: usize, event: &KeyEvent) -> Result<(), FormatError> {
        if !self.is_active() {
            return Ok(());
        }
        let Some(slot) = self
            .round
            .as_mut()
            .and_then(|round| round.slots.get_mut(index))
        else {
            return Ok(());
        };

        let round_number = self.state.round_number;
        for signal in slot.press(event) {
            match signal {
                SlotSignal::Focus(direction) => self.move_focus(index, direction),
                SlotSignal::BecameCorrect => self.on_slot_correct(index)?,
            }
            if self.state.round_number != round_number || !self.is_active() {
                // The slot belonged to a round that's over
                break;
            }
        }
        Ok(())
    }

    /// Deliver a keystroke to the slot with input focus.
    #[allow(dead_code)]
    pub fn press_focused(&mut self, event: &KeyEvent) -> Result<(), FormatError> {
        self.press(self.focus, event)
    }

    /// A slot just became correct. Win the round if every slot is.
    pub fn on_slot_correct(&mut self, index: usize) -> Result<(), FormatError> {
        let Some(round) = &self.round else {
            return Ok(());
        };
        debug!("Slot {} is correct", index);
        if !round.is_solved() {
            return Ok(());
        }

        info!("Round {} won!", self.state.round_number);
        self.state.rounds_won += 1;
        self.events.push(GameEvent::RoundWon);
        self.advance()
    }

    /// Spend one help. The last help of the round reveals everything that is
    /// missing and loses the round.
    pub fn request_help(&mut self) {
        if !self.is_active() || self.help_disabled() {
            return;
        }
        let Some(round) = self.round.as_mut() else {
            return;
        };

        self.state.helps_used += 1;
        let incorrect = round.incorrect_slots();
        if self.state.helps_used == self.state.max_helps {
            for index in incorrect {
                round.slots[index].reveal_help();
            }
            self.lose_round();
        } else if let Some(index) = incorrect
            .into_iter()
            .find(|index| !round.slots[*index].has_help())
        {
            debug!("Revealing slot {}", index);
            round.slots[index].reveal_help();
        }
    }

    /// Give up on the current round.
    pub fn skip(&mut self) -> Result<(), FormatError> {
        if !self.is_active() {
            return Ok(());
        }
        info!("Round {} skipped", self.state.round_number);
        self.state.rounds_skipped += 1;
        self.advance()
    }

    pub fn help_disabled(&self) -> bool {
        self.state.helps_used == self.state.max_helps
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Index of the slot with input focus.
    #[allow(dead_code)]
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Sentences still queued.
    #[allow(dead_code)]
    pub fn queue(&self) -> &[Sentence] {
        &self.queue
    }

    /// Take every event raised since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn is_active(&self) -> bool {
        matches!(self.state.phase, GamePhase::Playing | GamePhase::Lost)
    }

    fn move_focus(&mut self, from: usize, direction: FocusMove) {
        let len = self.round.as_ref().map_or(0, |round| round.slots.len());
        let target = match direction {
            FocusMove::Previous => from.checked_sub(1),
            FocusMove::Next => Some(from + 1).filter(|next| *next < len),
        };
        // Moving past either end does nothing
        if let Some(target) = target {
            self.focus = target;
            self.events.push(GameEvent::Focus(target));
        }
    }

    fn set_phase(&mut self, phase: GamePhase) {
        if self.state.phase != phase {
            debug!("Game phase {} -> {}", self.state.phase, phase);
            self.state.phase = phase;
        }
    }

    fn lose_round(&mut self) {
        info!("Round {} lost!", self.state.round_number);
        self.set_phase(GamePhase::Lost);
        self.state.rounds_lost += 1;
        self.events.push(GameEvent::RoundLost);
    }

    fn end_game(&mut self) {
        info!(
            "Game over! Won {}, lost {}, skipped {}",
            self.state.rounds_won, self.state.rounds_lost, self.state.rounds_skipped
        );
        self.set_phase(GamePhase::Ended);
        self.round = None;
        self.events.push(GameEvent::GameEnded);
    }
}
