// File: src/core/tokenizer.rs
use crate::core::lexicon::PUNCTUATION;
use crate::core::types::Token;
use regex::Regex;
use std::sync::OnceLock;

/// Trims both ends and collapses every internal whitespace run to one space.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(&c)
}

/// Splits off the maximal trailing run of `. , ! ? …`.
///
/// A punctuation-only token yields an empty word.
pub fn split_word_punct(token: &str) -> Token<'_> {
    let word = token.trim_end_matches(is_punctuation);
    Token {
        word,
        punct: &token[word.len()..],
    }
}

/// Splits text into raw whitespace-delimited tokens, punctuation attached.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Joins output words, glues punctuation to the word before it and
/// capitalizes the first character.
pub fn finish_sentence(words: &[String]) -> String {
    static SPACE_BEFORE_PUNCT: OnceLock<Regex> = OnceLock::new();
    let re = SPACE_BEFORE_PUNCT.get_or_init(|| Regex::new(r"\s+([.,!?…])").expect("static regex"));

    let joined = words.join(" ");
    let glued = re.replace_all(&joined, "$1");
    capitalize_first(&glued)
}

pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
