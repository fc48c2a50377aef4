// File: src/core/detect.rs
use crate::core::lexicon::LOWKEESE_SIGNATURE;
use crate::core::types::Direction;

/// Guesses whether `text` is Lowkeese: the signature must show up at least
/// once, and at least once per two words.
pub fn is_probably_lowkeese(text: &str) -> bool {
    let lower = text.to_lowercase();
    let word_count = lower.split_whitespace().count();
    let hits = lower.matches(LOWKEESE_SIGNATURE).count();
    hits > 0 && hits as f64 >= word_count as f64 / 2.0
}

/// Which translator auto mode should run, or `None` for blank input.
pub fn detect_direction(text: &str) -> Option<Direction> {
    if text.trim().is_empty() {
        None
    } else if is_probably_lowkeese(text) {
        Some(Direction::Reverse)
    } else {
        Some(Direction::Forward)
    }
}
