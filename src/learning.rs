// File: src/learning.rs
use crate::core::tokenizer::normalize;

/// A word pair the user taught, normalized and ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaughtPair {
    /// Lowercased English word or phrase.
    pub source: String,
    /// Lowkeese exactly as typed, minus outer and repeated whitespace.
    pub target: String,
}

impl TaughtPair {
    /// Returns `None` when either side is blank after normalization.
    pub fn new(source: &str, target: &str) -> Option<Self> {
        let source = normalize(source).to_lowercase();
        let target = normalize(target);
        if source.is_empty() || target.is_empty() {
            return None;
        }
        Some(Self { source, target })
    }

    /// Key under which the target is found in the reverse dictionary.
    pub fn reverse_key(&self) -> String {
        self.target.to_lowercase()
    }

    /// Multi-word sources are applied by the forward phrase pass.
    pub fn is_phrase(&self) -> bool {
        self.source.contains(' ')
    }
}
