// File: src/core/forward.rs
use crate::core::dictionary::DictionaryManager;
use crate::core::fallback::FallbackStrategy;
use crate::core::tokenizer::{normalize, split_word_punct};
use regex::Regex;
use std::ops::Range;
use tracing::{debug, warn};

/// A multi-word English phrase and what replaces it.
struct PhrasePattern {
    regex: Regex,
    replacement: String,
}

/// Running text of the phrase pass plus the byte ranges it has inserted.
#[derive(Debug, Default)]
struct MarkedText {
    text: String,
    inserted: Vec<Range<usize>>,
}

impl MarkedText {
    fn plain(text: String) -> Self {
        Self {
            text,
            inserted: Vec::new(),
        }
    }

    /// Appends `self.text[range]` to `out`, carrying over the inserted
    /// ranges that overlap it.
    fn copy_into(&self, range: Range<usize>, out: &mut MarkedText) {
        let base = out.text.len();
        for r in &self.inserted {
            let start = r.start.max(range.start);
            let end = r.end.min(range.end);
            if start < end {
                out.inserted
                    .push(base + start - range.start..base + end - range.start);
            }
        }
        out.text.push_str(&self.text[range]);
    }

    fn push_inserted(&mut self, replacement: &str) {
        let start = self.text.len();
        self.text.push_str(replacement);
        self.inserted.push(start..self.text.len());
    }

    fn is_inserted(&self, span: Range<usize>) -> bool {
        self.inserted
            .iter()
            .any(|r| r.start <= span.start && span.end <= r.end)
    }
}

/// English -> Lowkeese.
///
/// Phrases are substituted into the running text first, longest first, so a
/// later phrase sees the output of earlier ones. Words a phrase inserted are
/// kept as they are; every other token is looked up on its own and anything
/// unknown goes to the fallback strategy.
pub struct ForwardTranslator {
    fallback: Box<dyn FallbackStrategy>,
    phrases: Vec<PhrasePattern>,
    compiled_revision: Option<u64>,
}

impl ForwardTranslator {
    pub fn new(fallback: Box<dyn FallbackStrategy>) -> Self {
        Self {
            fallback,
            phrases: Vec::new(),
            compiled_revision: None,
        }
    }

    pub fn translate(&mut self, input: &str, dictionary: &mut DictionaryManager) -> String {
        let raw = normalize(input);
        if raw.is_empty() {
            return String::new();
        }

        self.refresh_phrases(dictionary);
        let marked = self.substitute_phrases(raw);

        // Normalized text and normalized replacements keep single spaces.
        let mut out = Vec::new();
        let mut offset = 0;
        for raw_token in marked.text.split(' ') {
            let start = offset;
            offset += raw_token.len() + 1;

            let token = split_word_punct(raw_token);
            if token.is_punctuation_only() {
                out.push(token.punct.to_string());
                continue;
            }
            let rendered = if marked.is_inserted(start..start + token.word.len()) {
                token.word.to_string()
            } else {
                self.render_word(token.word, dictionary)
            };
            out.push(rendered + token.punct);
        }
        out.join(" ")
    }

    fn render_word(&mut self, word: &str, dictionary: &mut DictionaryManager) -> String {
        if let Some(target) = dictionary.lookup_forward(word) {
            return target.to_string();
        }
        self.fallback.render(word, dictionary)
    }

    fn substitute_phrases(&self, text: String) -> MarkedText {
        let mut current = MarkedText::plain(text);
        for phrase in &self.phrases {
            if !phrase.regex.is_match(&current.text) {
                continue;
            }
            let mut next = MarkedText::default();
            let mut last = 0;
            for m in phrase.regex.find_iter(&current.text) {
                current.copy_into(last..m.start(), &mut next);
                next.push_inserted(&phrase.replacement);
                last = m.end();
            }
            current.copy_into(last..current.text.len(), &mut next);
            current = next;
        }
        current
    }

    fn refresh_phrases(&mut self, dictionary: &DictionaryManager) {
        let revision = dictionary.phrase_revision();
        if self.compiled_revision == Some(revision) {
            return;
        }

        self.phrases = dictionary
            .phrases()
            .into_iter()
            .filter_map(|(source, target)| match phrase_regex(&source) {
                Ok(regex) => Some(PhrasePattern {
                    regex,
                    replacement: target,
                }),
                Err(e) => {
                    warn!(phrase = %source, error = %e, "skipping phrase");
                    None
                }
            })
            .collect();
        self.compiled_revision = Some(revision);
        debug!(count = self.phrases.len(), revision, "compiled phrase patterns");
    }
}

/// Case-insensitive, whole-word match of a literal phrase.
fn phrase_regex(phrase: &str) -> Result<Regex, regex::Error> {
    let mut pattern = String::from("(?i)");
    if phrase.starts_with(char::is_alphanumeric) {
        pattern.push_str(r"\b");
    }
    pattern.push_str(&regex::escape(phrase));
    if phrase.ends_with(char::is_alphanumeric) {
        pattern.push_str(r"\b");
    }
    Regex::new(&pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fallback::{MarkerFallback, SyllableFallback};

    fn translate(text: &str) -> String {
        let mut dict = DictionaryManager::new();
        ForwardTranslator::new(Box::new(MarkerFallback)).translate(text, &mut dict)
    }

    #[test]
    fn words_are_looked_up_case_insensitively() {
        assert_eq!(translate("You and ME"), "lokēlow lowkē lowkey");
    }

    #[test]
    fn punctuation_is_reattached() {
        assert_eq!(translate("Hello!"), "lowkey!!");
        assert_eq!(translate("yes, maybe?"), "kē!, lowkey??");
        assert_eq!(translate("you ?"), "lokēlow ?");
    }

    #[test]
    fn blank_input_gives_blank_output() {
        assert_eq!(translate(""), "");
        assert_eq!(translate("  \n\t "), "");
    }

    #[test]
    fn phrases_win_over_words() {
        assert_eq!(translate("Good morning"), "lowkē lōwlo");
        assert_eq!(translate("good"), "lowkē!");
        assert_eq!(translate("how are you?"), "lowkē-ār lokēlow?");
        assert_eq!(translate("are you"), "lowkey-ār lokēlow");
    }

    #[test]
    fn phrases_respect_word_boundaries() {
        // "thank you" inside "thank youth" must not match.
        assert_eq!(translate("thank youth"), "kēkē kēkē");
    }

    #[test]
    fn longest_phrase_is_applied_first() {
        assert_eq!(translate("what is your name"), "lōwkē lowkey-īs lōkē-low");
    }

    #[test]
    fn self_introduction_keeps_the_name() {
        assert_eq!(translate("My name is Sam."), "lowkey lōkē(Sam).");
    }

    #[test]
    fn unknown_words_use_the_fallback() {
        assert_eq!(translate("running quickly"), "kēkē-lōw kēkē-ley");
    }

    #[test]
    fn later_phrases_see_earlier_substitutions() {
        let mut dict = DictionaryManager::new();
        // Matches only once "good morning" has been rewritten.
        dict.teach("lōwlo pal", "kēlō");
        let mut forward = ForwardTranslator::new(Box::new(MarkerFallback));
        assert_eq!(forward.translate("good morning pal", &mut dict), "lowkē kēlō");
    }

    #[test]
    fn taught_phrases_are_picked_up() {
        let mut dict = DictionaryManager::new();
        let mut forward = ForwardTranslator::new(Box::new(MarkerFallback));
        assert_eq!(forward.translate("good luck", &mut dict), "lowkē! kēkē");
        dict.teach("good luck", "lowkē kēkey");
        assert_eq!(forward.translate("good luck", &mut dict), "lowkē kēkey");
    }

    #[test]
    fn english_words_inside_taught_targets_are_still_translated() {
        let mut dict = DictionaryManager::new();
        dict.teach("buddy", "friend zē");
        let mut forward = ForwardTranslator::new(Box::new(MarkerFallback));
        assert_eq!(forward.translate("my friend", &mut dict), "lowkey kēkē");
        assert_eq!(forward.translate("buddy", &mut dict), "friend zē");
    }

    #[test]
    fn syllable_mode_invents_words_found_inside_targets() {
        let mut dict = DictionaryManager::new();
        dict.teach("buddy", "friend zē");
        let mut forward = ForwardTranslator::new(Box::new(SyllableFallback::seeded(5)));
        let token = forward.translate("friend", &mut dict);
        assert_ne!(token, "friend");
        assert_eq!(dict.lookup_forward("friend"), Some(token.as_str()));
        assert_eq!(dict.lookup_reverse(&token), Some("friend"));
    }

    #[test]
    fn only_phrase_output_is_kept_verbatim() {
        let mut dict = DictionaryManager::new();
        let mut forward = ForwardTranslator::new(Box::new(MarkerFallback));
        // Typed by hand, "lōwlo" is an unknown English word.
        assert_eq!(forward.translate("lōwlo", &mut dict), "kēkē");
        assert_eq!(forward.translate("good morning lōwlo", &mut dict), "lowkē lōwlo kēkē");
    }

    #[test]
    fn inserted_ranges_follow_later_substitutions() {
        let mut marked = MarkedText::plain("ab cd".to_string());
        marked.inserted.push(0..2);
        let mut next = MarkedText::default();
        marked.copy_into(0..3, &mut next);
        next.push_inserted("xyz");
        assert_eq!(next.text, "ab xyz");
        assert!(next.is_inserted(0..2));
        assert!(next.is_inserted(3..6));
        assert!(!next.is_inserted(2..4));
    }

    #[test]
    fn phrase_regex_escapes_metacharacters() {
        let re = phrase_regex("a.b c").unwrap();
        assert!(re.is_match("x A.B C y"));
        assert!(!re.is_match("axb c"));
    }
}
