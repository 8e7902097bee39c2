use log::debug;
use rand::{seq::SliceRandom, thread_rng};
use std::collections::HashMap;
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    game::{Game, Sentence},
    input::KeyEvent,
};


/// Something the solver wants to do to the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Move {
    /// Press a key in the slot at the given index.
    Key { slot: usize, event: KeyEvent },
    /// Ask for help.
    Help,
    /// Give up on the round.
    Skip,
}

/// A bot that plays the game. Types answers it already knows, and learns the
/// rest from help.
#[derive(Debug, Default)]
pub struct Solver {
    /// Answers by question.
    pub answers: HashMap<String, String>,
}

impl Solver {
    /// A solver that already knows the answer to each of `sentences`.
    #[allow(dead_code)]
    pub fn knowing(sentences: &[Sentence]) -> Self {
        Solver {
            answers: sentences
                .iter()
                .map(|s| (s.question.clone(), s.answer.clone()))
                .collect(),
        }
    }

    /// The next batch of moves for the current round. Empty if there's no round.
    pub fn next_moves(&self, game: &Game) -> Vec<Move> {
        let Some(round) = game.round() else {
            return Vec::new();
        };

        let mut moves = Vec::new();
        if let Some(answer) = self.answers.get(&round.sentence.question) {
            let graphemes = answer.graphemes(true).collect::<Vec<_>>();
            let mut incorrect = round.incorrect_slots();
            incorrect.shuffle(&mut thread_rng());
            for index in incorrect {
                let slot = &round.slots[index];
                let Some(grapheme) = graphemes.get(index) else {
                    continue;
                };
                if slot.typed() == *grapheme {
                    // Already tried, the answer we know must be wrong
                    continue;
                }
                if !slot.is_empty() {
                    moves.push(Move::Key {
                        slot: index,
                        event: KeyEvent::delete(),
                    });
                }
                moves.push(Move::Key {
                    slot: index,
                    event: KeyEvent::typed(grapheme),
                });
            }
            if !moves.is_empty() {
                debug!("Typing known answer {:?}", answer);
                return moves;
            }
        }

        // Type whatever help has revealed so far
        for index in round.incorrect_slots() {
            let slot = &round.slots[index];
            if slot.has_help() {
                moves.push(Move::Key {
                    slot: index,
                    event: KeyEvent::typed(slot.help_text()),
                });
            }
        }
        if moves.is_empty() {
            moves.push(if game.help_disabled() {
                Move::Skip
            } else {
                Move::Help
            });
        }
        moves
    }
}
