// Integration tests for the two translators and auto mode

use lowkeese_core::core::fallback::SyllableFallback;
use lowkeese_core::core::lexicon::{BASE_PHRASES, BASE_WORDS};
use lowkeese_core::core::tokenizer::normalize;
use lowkeese_core::persistence::NullStore;
use lowkeese_core::{Direction, LowkeeseEngine};
use std::collections::HashMap;

/// Base words whose target no other word shares.
fn unambiguous_words() -> Vec<(&'static str, &'static str)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for (_, target) in BASE_WORDS {
        *counts.entry(target.to_lowercase()).or_insert(0) += 1;
    }
    BASE_WORDS
        .iter()
        .copied()
        .filter(|(_, target)| counts[&target.to_lowercase()] == 1)
        .collect()
}

// ============ Round Trips ============

#[test]
fn test_unambiguous_base_words_round_trip() {
    let mut engine = LowkeeseEngine::new();
    let words = unambiguous_words();
    assert!(words.len() > 15, "expected most of the base to be unambiguous");

    for (english, target) in words {
        let lowkeese = engine.translate_forward(english);
        assert_eq!(lowkeese, target);
        let back = engine.translate_reverse(&lowkeese);
        assert_eq!(back.to_lowercase(), english, "{english} -> {lowkeese} -> {back}");
    }
}

#[test]
fn test_base_phrases_round_trip_except_self_introduction() {
    let mut engine = LowkeeseEngine::new();
    for (english, _) in BASE_PHRASES {
        let lowkeese = engine.translate_forward(english);
        let back = engine.translate_reverse(&lowkeese);
        if *english == "my name is" {
            // "lowkey" belongs to the word layer.
            assert_eq!(back, "My");
        } else {
            assert_eq!(back.to_lowercase(), *english);
        }
    }
}

#[test]
fn test_shared_targets_are_lossy() {
    let mut engine = LowkeeseEngine::new();

    // i, me and my all render as "lowkey"; only "my" comes back.
    assert_eq!(engine.translate_forward("me"), "lowkey");
    assert_eq!(engine.translate_reverse("lowkey"), "My");

    // bad and no share "low-key".
    assert_eq!(engine.translate_forward("bad"), "low-key");
    assert_eq!(engine.translate_reverse("low-key"), "No");

    // tired and bye share "lowkey…".
    let farewell = engine.translate_forward("bye");
    assert_eq!(engine.translate_reverse(&farewell), "Tired");
}

#[test]
fn test_sentence_round_trip() {
    let mut engine = LowkeeseEngine::new();
    let lowkeese = engine.translate_forward("Nice to meet you, my name is Sam!");
    assert_eq!(lowkeese, "lowkē lowkey-lo kē lokēlow, lowkey lōkē(Sam)!");
    assert_eq!(
        engine.translate_reverse(&lowkeese),
        "Nice to meet you, my name is Sam!"
    );
}

#[test]
fn test_name_marker_round_trips_verbatim() {
    let mut engine = LowkeeseEngine::new();
    let lowkeese = engine.translate_forward("you and McKenzie");
    assert_eq!(lowkeese, "lokēlow lowkē lōkē(McKenzie)");
    assert_eq!(engine.translate_reverse(&lowkeese), "You and McKenzie");
}

#[test]
fn test_marker_fallback_is_lossy_but_stable() {
    let mut engine = LowkeeseEngine::new();
    let first = engine.translate_forward("we are walking slowly");
    let second = engine.translate_forward("we are walking slowly");
    assert_eq!(first, second);
    assert_eq!(first, "lowkey-lōw lowkey-ār kēkē-lōw kēkē-ley");
    assert_eq!(engine.translate_reverse(&first), "We are something something");
}

// ============ Teaching ============

#[test]
fn test_teach_then_translate() {
    let mut engine = LowkeeseEngine::new();
    engine.teach("Cat", "zorple");
    assert_eq!(engine.translate_forward("cat"), "zorple");
    assert!(engine.translate_reverse("zorple").starts_with("Cat"));
}

#[test]
fn test_teach_is_last_write_wins() {
    let mut engine = LowkeeseEngine::new();
    engine.teach("cat", "zorple");
    engine.teach("cat", "miffē");
    assert_eq!(engine.translate_forward("cat"), "miffē");
    assert_eq!(engine.translate_reverse("miffē"), "Cat");

    engine.teach("kitten", "miffē");
    assert_eq!(engine.translate_reverse("miffē"), "Kitten");
    assert_eq!(engine.translate_forward("cat"), "miffē");
}

#[test]
fn test_blank_teach_changes_nothing() {
    let mut engine = LowkeeseEngine::new();
    engine.teach("   ", "zorple");
    engine.teach("cat", "  ");
    assert_eq!(engine.dictionary.user_len(), 0);
    assert_eq!(engine.translate_forward("cat"), "kēkē");
}

#[test]
fn test_taught_multi_token_target_uses_span_scan() {
    let mut engine = LowkeeseEngine::new();
    engine.teach("good luck", "lowkē kē-kē");
    assert_eq!(engine.translate_forward("Good luck!"), "lowkē kē-kē!");
    assert_eq!(engine.translate_reverse("lowkē kē-kē!"), "Good luck!");
}

// ============ Edge Cases ============

#[test]
fn test_empty_input() {
    let mut engine = LowkeeseEngine::new();
    assert_eq!(engine.translate_forward(""), "");
    assert_eq!(engine.translate_reverse(""), "");
}

#[test]
fn test_greeting_punctuation() {
    let mut engine = LowkeeseEngine::new();
    let lowkeese = engine.translate_forward("Hello!");
    assert_eq!(lowkeese, "lowkey!!");

    let back = engine.translate_reverse(&lowkeese);
    assert_eq!(back, "Hi!");
    assert!(back.ends_with('!'));
    assert!(!back.contains(" !"));
    assert!(back.starts_with(char::is_uppercase));
}

#[test]
fn test_longest_match_precedence() {
    let engine = LowkeeseEngine::new();
    // "lowkē" alone is "and", but "lowkē lōwlo" is one phrase.
    assert_eq!(engine.translate_reverse("lowkē"), "And");
    assert_eq!(engine.translate_reverse("lowkē lōwlo"), "Good morning");
    assert_eq!(
        engine.translate_reverse("lokēlow lowkē lōwlo"),
        "You good morning"
    );
}

#[test]
fn test_reverse_space_before_punctuation_is_removed() {
    let engine = LowkeeseEngine::new();
    assert_eq!(engine.translate_reverse("lokēlow   ?  lowkē !"), "You? and!");
}

#[test]
fn test_normalize_idempotence() {
    for s in ["", "  a  b  ", "\tlowkey\n\nlōkē(Sam) ", "one", "   "] {
        assert_eq!(normalize(&normalize(s)), normalize(s));
    }
}

// ============ Auto Mode ============

#[test]
fn test_detect_and_translate_both_ways() {
    let mut engine = LowkeeseEngine::new();

    let result = engine.detect_and_translate("thank you");
    assert_eq!(result.direction, Some(Direction::Forward));
    assert_eq!(result.text, "kē lokēlow");

    let result = engine.detect_and_translate(&result.text);
    assert_eq!(result.direction, Some(Direction::Reverse));
    assert_eq!(result.text, "Thank you");
}

// ============ Syllable Mode ============

#[test]
fn test_syllable_mode_is_reversible() {
    let mut engine =
        LowkeeseEngine::with_store(Box::new(NullStore), Box::new(SyllableFallback::seeded(3)));

    let lowkeese = engine.translate_forward("my friend plays xbox at school");
    assert_eq!(engine.translate_forward("my friend plays xbox at school"), lowkeese);
    assert_eq!(
        engine.translate_reverse(&lowkeese),
        "My friend plays xbox at school"
    );
}
