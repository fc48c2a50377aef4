// src/core/types.rs
use serde::{Deserialize, Serialize};

/// A whitespace-delimited piece of input, split into the word and its
/// trailing punctuation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub word: &'a str,
    pub punct: &'a str,
}

impl Token<'_> {
    pub fn is_punctuation_only(&self) -> bool {
        self.word.is_empty()
    }
}

/// One source/target pair of the merged dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// English -> Lowkeese.
    Forward,
    /// Lowkeese -> English.
    Reverse,
}

impl Direction {
    pub fn label(self) -> &'static str {
        match self {
            Direction::Forward => "English → Lowkeese",
            Direction::Reverse => "Lowkeese → English",
        }
    }
}

/// Result of `detect_and_translate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoTranslation {
    pub text: String,
    /// `None` when the input was blank and nothing was translated.
    pub direction: Option<Direction>,
    pub direction_label: String,
}

impl AutoTranslation {
    pub fn blank() -> Self {
        Self {
            text: String::new(),
            direction: None,
            direction_label: "–".to_string(),
        }
    }

    pub fn detected(text: String, direction: Direction) -> Self {
        Self {
            text,
            direction: Some(direction),
            direction_label: format!("Auto: {}", direction.label()),
        }
    }
}
