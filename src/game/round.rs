use lazy_regex::regex;
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

use super::{data::Sentence, slot::LetterSlot};

/// A sentence that can't be turned into a round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("question {0:?} has no blank, it must contain `_` 1 or more times")]
    NoBlank(String),
    #[error("question {question:?} has {count} blanks, it must have exactly one")]
    MultipleBlanks { question: String, count: usize },
    #[error("question {0:?} has an empty answer")]
    EmptyAnswer(String),
}

/// A question template split around its blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateParts<'a> {
    pub left: &'a str,
    /// The delimiter run itself.
    #[allow(dead_code)]
    pub blank: &'a str,
    pub right: &'a str,
}

/// Split a template on its blank, the single contiguous run of `_`.
pub fn split_template(template: &str) -> Result<TemplateParts<'_>, FormatError> {
    let runs = regex!("_+").find_iter(template).collect::<Vec<_>>();
    match runs.as_slice() {
        [run] => Ok(TemplateParts {
            left: &template[..run.start()],
            blank: run.as_str(),
            right: &template[run.end()..],
        }),
        [] => Err(FormatError::NoBlank(template.to_owned())),
        _ => Err(FormatError::MultipleBlanks {
            question: template.to_owned(),
            count: runs.len(),
        }),
    }
}

/// One sentence being played.
#[derive(Debug, Clone)]
pub struct Round {
    /// The sentence this round was built from.
    pub sentence: Sentence,
    /// Question text before the blank.
    pub left: String,
    /// Question text after the blank.
    pub right: String,
    /// One slot per grapheme of the answer, in order.
    pub slots: Vec<LetterSlot>,
}

impl Round {
    pub fn new(sentence: &Sentence) -> Result<Self, FormatError> {
        let parts = split_template(&sentence.question)?;
        if sentence.answer.is_empty() {
            return Err(FormatError::EmptyAnswer(sentence.question.clone()));
        }

        Ok(Round {
            sentence: sentence.clone(),
            left: parts.left.to_owned(),
            right: parts.right.to_owned(),
            slots: sentence
                .answer
                .graphemes(true)
                .map(LetterSlot::new)
                .collect(),
        })
    }

    /// The expected answer, one grapheme per slot.
    #[cfg(test)]
    pub fn expected(&self) -> Vec<&str> {
        self.slots.iter().map(|s| s.expected()).collect()
    }

    /// Positions of every slot that is empty or wrong.
    pub fn incorrect_slots(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_empty() || !slot.is_correct())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_solved(&self) -> bool {
        self.incorrect_slots().is_empty()
    }
}
