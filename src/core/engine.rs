// File: src/core/engine.rs
use crate::config::EngineConfig;
use crate::core::detect::detect_direction;
use crate::core::dictionary::DictionaryManager;
use crate::core::fallback::{FallbackStrategy, MarkerFallback};
use crate::core::forward::ForwardTranslator;
use crate::core::reverse::ReverseTranslator;
use crate::core::types::{AutoTranslation, Direction};
use crate::errors::Result;
use crate::persistence::DictionaryStore;
use tracing::debug;

// The engine is composed of the dictionary and the two translators.
// All persistent state lives in the dictionary.
pub struct LowkeeseEngine {
    pub dictionary: DictionaryManager,
    forward: ForwardTranslator,
    reverse: ReverseTranslator,
}

impl LowkeeseEngine {
    /// Base dictionary, marker fallback, no persistence.
    pub fn new() -> Self {
        Self::from_parts(DictionaryManager::new(), Box::new(MarkerFallback))
    }

    pub fn with_store(store: Box<dyn DictionaryStore>, fallback: Box<dyn FallbackStrategy>) -> Self {
        Self::from_parts(DictionaryManager::with_store(store), fallback)
    }

    pub fn from_parts(dictionary: DictionaryManager, fallback: Box<dyn FallbackStrategy>) -> Self {
        Self {
            dictionary,
            forward: ForwardTranslator::new(fallback),
            reverse: ReverseTranslator::new(),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::with_store(config.build_store(), config.build_fallback())
    }

    /// English -> Lowkeese. Takes `&mut self` because the syllable fallback
    /// commits the words it invents.
    pub fn translate_forward(&mut self, text: &str) -> String {
        self.forward.translate(text, &mut self.dictionary)
    }

    /// Lowkeese -> English.
    pub fn translate_reverse(&self, text: &str) -> String {
        self.reverse.translate(text, &self.dictionary)
    }

    pub fn detect_and_translate(&mut self, text: &str) -> AutoTranslation {
        let Some(direction) = detect_direction(text) else {
            return AutoTranslation::blank();
        };
        debug!(?direction, "auto-detected direction");
        let translated = match direction {
            Direction::Forward => self.translate_forward(text),
            Direction::Reverse => self.translate_reverse(text),
        };
        AutoTranslation::detected(translated, direction)
    }

    pub fn teach(&mut self, english: &str, lowkeese: &str) {
        self.dictionary.teach(english, lowkeese);
    }

    /// Explicit write of both dictionaries; unlike `teach`, failures surface.
    pub fn save_dictionary(&mut self) -> Result<()> {
        self.dictionary.save()?;
        Ok(())
    }
}

impl Default for LowkeeseEngine {
    fn default() -> Self {
        Self::new()
    }
}
