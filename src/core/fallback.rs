// File: src/core/fallback.rs
//! What the forward translator emits for English words it has no entry for.
//!
//! `MarkerFallback` maps a word to a fixed marker by its ending.
//! `SyllableFallback` invents a fresh Lowkeese word and commits it to the
//! dictionary so the same English word keeps its translation.

use crate::core::dictionary::DictionaryManager;
use crate::core::lexicon::{
    name_token, ACTION_MARKER, COMMON_NOUN_MARKER, CONCEPT_MARKER, MANNER_MARKER, OBJECT_WORDS,
    PERSON_WORDS, PLACE_WORDS, SYLLABLES, VERB_WORDS,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

/// Regenerations at one core length before the core grows a syllable.
const ATTEMPTS_PER_LENGTH: usize = 64;

pub trait FallbackStrategy {
    /// Renders an English word that has no dictionary entry.
    fn render(&mut self, word: &str, dictionary: &mut DictionaryManager) -> String;
}

/// Deterministic marker tokens chosen by surface morphology.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerFallback;

impl FallbackStrategy for MarkerFallback {
    fn render(&mut self, word: &str, _dictionary: &mut DictionaryManager) -> String {
        let lower = word.to_lowercase();
        if lower.ends_with("ing") {
            ACTION_MARKER.to_string()
        } else if lower.ends_with("ly") {
            MANNER_MARKER.to_string()
        } else if ["ness", "tion", "ment"].iter().any(|s| lower.ends_with(s)) {
            CONCEPT_MARKER.to_string()
        } else if word.chars().next().is_some_and(char::is_lowercase) {
            COMMON_NOUN_MARKER.to_string()
        } else {
            name_token(word)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCategory {
    Name,
    Place,
    Object,
    Person,
    Verb,
    Generic,
}

impl WordCategory {
    pub fn guess(word: &str) -> Self {
        if word.chars().next().is_some_and(|c| c.is_ascii_uppercase()) {
            return WordCategory::Name;
        }
        let lower = word.to_lowercase();
        let lower = lower.as_str();
        if PLACE_WORDS.contains(&lower) {
            WordCategory::Place
        } else if OBJECT_WORDS.contains(&lower) {
            WordCategory::Object
        } else if PERSON_WORDS.contains(&lower) {
            WordCategory::Person
        } else if VERB_WORDS.contains(&lower) {
            WordCategory::Verb
        } else {
            WordCategory::Generic
        }
    }

    fn ending(self) -> &'static str {
        match self {
            WordCategory::Place => "lo",
            WordCategory::Object => "kē",
            WordCategory::Verb => "key",
            WordCategory::Person => "low",
            WordCategory::Name | WordCategory::Generic => "",
        }
    }
}

/// Invents syllable words and writes each new pair through to the store.
pub struct SyllableFallback {
    rng: StdRng,
}

impl SyllableFallback {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn core(&mut self, count: usize) -> String {
        let parts: Vec<&str> = (0..count)
            .map(|_| *SYLLABLES.choose(&mut self.rng).unwrap_or(&SYLLABLES[0]))
            .collect();
        if count <= 2 {
            parts.concat()
        } else {
            parts.join("-")
        }
    }

    fn make_token(&mut self, category: WordCategory, extra: usize) -> String {
        match category {
            WordCategory::Name => {
                let first = self.core(1 + extra);
                let second = self.core(1);
                format!("lōkē-{}-{}", first, second)
            }
            _ => self.core(2 + extra) + category.ending(),
        }
    }
}

impl Default for SyllableFallback {
    fn default() -> Self {
        Self::new()
    }
}

impl FallbackStrategy for SyllableFallback {
    fn render(&mut self, word: &str, dictionary: &mut DictionaryManager) -> String {
        let lower = word.to_lowercase();
        if let Some(existing) = dictionary.lookup_forward(&lower) {
            return existing.to_string();
        }

        let category = WordCategory::guess(word);
        let mut attempts = 0;
        let token = loop {
            let candidate = self.make_token(category, attempts / ATTEMPTS_PER_LENGTH);
            match dictionary.lookup_reverse(&candidate) {
                Some(owner) if owner != lower => attempts += 1,
                _ => break candidate,
            }
        };

        debug!(word, token = %token, attempts, "generated lowkeese word");
        dictionary.teach(&lower, &token);
        token
    }
}
