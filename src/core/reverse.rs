// File: src/core/reverse.rs
use crate::core::dictionary::DictionaryManager;
use crate::core::lexicon::{
    FIRST_PERSON_MARKER, GENERIC_MARKER_PREFIX, GENERIC_PLACEHOLDER, MAX_SPAN, NAME_MARKER,
    SPECIAL_LITERALS,
};
use crate::core::tokenizer::{finish_sentence, normalize, split_word_punct, tokenize};
use regex::Regex;
use std::iter;
use tracing::debug;

/// One piece of English output.
#[derive(Debug)]
struct Emitted {
    text: String,
    /// Came from a bare first-person marker, so a following name marker
    /// turns it into a self-introduction.
    first_person: bool,
}

impl Emitted {
    fn plain(text: String) -> Self {
        Self {
            text,
            first_person: false,
        }
    }
}

/// Lowkeese -> English, longest match first.
pub struct ReverseTranslator {
    name_marker: Regex,
}

impl ReverseTranslator {
    pub fn new() -> Self {
        let pattern = format!(r"(?i)^{}\((.+)\)$", regex::escape(NAME_MARKER));
        Self {
            name_marker: Regex::new(&pattern).expect("name marker pattern is valid"),
        }
    }

    pub fn translate(&self, input: &str, dictionary: &DictionaryManager) -> String {
        let tokens = tokenize(&normalize(input));
        if tokens.is_empty() {
            return String::new();
        }

        let mut out: Vec<Emitted> = Vec::with_capacity(tokens.len());
        let mut i = 0;
        while i < tokens.len() {
            if let Some((span, emitted)) = match_span(&tokens[i..], dictionary) {
                debug!(position = i, span, "span match");
                out.push(emitted);
                i += span;
                continue;
            }
            self.resolve_single(&tokens[i], dictionary, &mut out);
            i += 1;
        }

        let words: Vec<String> = out.into_iter().map(|e| e.text).collect();
        finish_sentence(&words)
    }

    fn resolve_single(&self, token: &str, dictionary: &DictionaryManager, out: &mut Vec<Emitted>) {
        let parts = split_word_punct(token);
        if parts.is_punctuation_only() {
            out.push(Emitted::plain(token.to_string()));
            return;
        }
        let (word, punct) = (parts.word, parts.punct);

        // Longest candidate first: the word with all of its punctuation, then
        // with less of it, down to the bare word.
        let cuts: Vec<usize> = punct
            .char_indices()
            .map(|(at, _)| at)
            .chain(iter::once(punct.len()))
            .collect();

        for &cut in cuts.iter().rev() {
            let candidate = &token[..word.len() + cut];
            if let Some(source) = dictionary.lookup_reverse(candidate) {
                let rest = &punct[cut..];
                out.push(Emitted {
                    text: format!("{}{}", source, rest),
                    first_person: rest.is_empty()
                        && candidate.to_lowercase() == FIRST_PERSON_MARKER,
                });
                return;
            }
        }

        // Shadowed in practice: the base layer maps every literal itself.
        for &cut in cuts.iter().rev() {
            let candidate = token[..word.len() + cut].to_lowercase();
            if let Some((_, source)) = SPECIAL_LITERALS.iter().find(|(lit, _)| *lit == candidate) {
                out.push(Emitted::plain(format!("{}{}", source, &punct[cut..])));
                return;
            }
        }

        if let Some(caps) = self.name_marker.captures(word) {
            let name = &caps[1];
            match out.last_mut() {
                Some(prev) if prev.first_person => {
                    prev.text = format!("my name is {}{}", name, punct);
                    prev.first_person = false;
                }
                _ => out.push(Emitted::plain(format!("{}{}", name, punct))),
            }
            return;
        }

        if word.to_lowercase().starts_with(GENERIC_MARKER_PREFIX) {
            out.push(Emitted::plain(format!("{}{}", GENERIC_PLACEHOLDER, punct)));
            return;
        }

        // Unknown: keep it, it is most likely a borrowed name.
        out.push(Emitted::plain(token.to_string()));
    }
}

impl Default for ReverseTranslator {
    fn default() -> Self {
        Self::new()
    }
}

/// Tries windows of `MAX_SPAN` down to two tokens at the start of `rest`.
fn match_span(rest: &[String], dictionary: &DictionaryManager) -> Option<(usize, Emitted)> {
    for span in (2..=MAX_SPAN.min(rest.len())).rev() {
        let window = &rest[..span];
        if let Some(source) = dictionary.lookup_reverse(&window.join(" ")) {
            return Some((span, Emitted::plain(source.to_string())));
        }

        let last = split_word_punct(&window[span - 1]);
        if last.punct.is_empty() || last.word.is_empty() {
            continue;
        }
        let key = format!("{} {}", window[..span - 1].join(" "), last.word);
        if let Some(source) = dictionary.lookup_reverse(&key) {
            return Some((span, Emitted::plain(format!("{}{}", source, last.punct))));
        }
    }
    None
}
