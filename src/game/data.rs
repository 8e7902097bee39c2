use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

use super::round::{FormatError, Round};

/// A question with a blank and the word that fills it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// The question text. The blank is a run of `_`.
    pub question: String,
    /// The word that goes in the blank.
    pub answer: String,
}

impl Sentence {
    #[cfg(test)]
    pub fn new(question: &str, answer: &str) -> Self {
        Sentence {
            question: question.to_owned(),
            answer: answer.to_owned(),
        }
    }
}

/// Game settings, all optional in the settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// How many times help can be asked for in a single round.
    pub max_helps: usize,
    /// A JSON file of sentences to play instead of the built-in ones.
    pub sentences: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            max_helps: 3,
            sentences: None,
        }
    }
}

/// Failure modes when loading game content.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {0:?}")]
    Io(PathBuf, #[source] std::io::Error),
    #[error("failed to parse {0:?}")]
    Json(PathBuf, #[source] serde_json::Error),
    #[error("sentence {index} is malformed")]
    Malformed {
        index: usize,
        #[source]
        source: FormatError,
    },
    #[error("a round needs at least one help, got max_helps = 0")]
    NoHelps,
}

lazy_static! {
    /// The sentences the game ships with, in play order.
    pub static ref SENTENCES: Vec<Sentence> =
        serde_json::from_str(include_str!("data/sentences.json")).unwrap();
}

/// Load settings from a JSON file.
pub fn load_settings(path: &Path) -> Result<Settings, DataError> {
    let raw = fs::read_to_string(path).map_err(|e| DataError::Io(path.to_owned(), e))?;
    let settings: Settings =
        serde_json::from_str(&raw).map_err(|e| DataError::Json(path.to_owned(), e))?;
    if settings.max_helps == 0 {
        return Err(DataError::NoHelps);
    }
    Ok(settings)
}

/// Load and validate a JSON array of sentences.
pub fn load_sentences(path: &Path) -> Result<Vec<Sentence>, DataError> {
    let raw = fs::read_to_string(path).map_err(|e| DataError::Io(path.to_owned(), e))?;
    let sentences: Vec<Sentence> =
        serde_json::from_str(&raw).map_err(|e| DataError::Json(path.to_owned(), e))?;
    validate_sentences(&sentences)?;
    Ok(sentences)
}

/// Reject any sentence that couldn't be played, before it reaches a player.
pub fn validate_sentences(sentences: &[Sentence]) -> Result<(), DataError> {
    for (index, sentence) in sentences.iter().enumerate() {
        Round::new(sentence).map_err(|source| DataError::Malformed { index, source })?;
    }
    Ok(())
}
