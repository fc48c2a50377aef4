// File: src/core/lexicon.rs
//! Built-in vocabulary and the fixed tokens the translators fall back on.
//!
//! Several words deliberately share a target (`i`, `me` and `my` all render
//! as `lowkey`). Only the last of them is reachable in reverse.

/// Single-word base layer, in insertion order. Later entries win the
/// reverse mapping when targets collide.
pub const BASE_WORDS: &[(&str, &str)] = &[
    // pronouns
    ("i", "lowkey"),
    ("me", "lowkey"),
    ("my", "lowkey"),
    ("you", "lokēlow"),
    ("we", "lowkey-lōw"),
    ("they", "lowkey-lōwlow"),
    // greetings
    ("hello", "lowkey!"),
    ("hi", "lowkey!"),
    ("bye", "lowkey…"),
    // particles
    ("and", "lowkē"),
    ("with", "lowkey-lō"),
    ("to", "lowkey-lo"),
    ("in", "lōwkey"),
    ("on", "lokēlo"),
    ("at", "lōwkeylo"),
    ("after", "lōwkey…"),
    // quality, yes/no/maybe
    ("good", "lowkē!"),
    ("bad", "low-key"),
    ("yes", "kē!"),
    ("no", "low-key"),
    ("maybe", "lowkey?"),
    // feelings
    ("tired", "lowkey…"),
    ("happy", "lowkē!!"),
    ("sad", "lōwkey…"),
    ("bored", "low-key…"),
    ("confused", "lowkey?!"),
    ("scary", "lōwkey!"),
    // be-verbs
    ("am", "lowkey-ēm"),
    ("are", "lowkey-ār"),
    ("is", "lowkey-īs"),
];

/// Multi-word idioms, substituted before any per-word lookup.
pub const BASE_PHRASES: &[(&str, &str)] = &[
    ("nice to meet you", "lowkē lowkey-lo kē lokēlow"),
    ("what is your name", "lōwkē lowkey-īs lōkē-low"),
    ("see you later", "kēlow lōkē-lōw"),
    ("how are you", "lowkē-ār lokēlow"),
    ("my name is", "lowkey"),
    ("good morning", "lowkē lōwlo"),
    ("good night", "lowkē kēlōw"),
    ("thank you", "kē lokēlow"),
];

/// Longest token window the reverse scan tries before single tokens.
pub const MAX_SPAN: usize = 4;

/// Characters that make up a trailing punctuation run.
pub const PUNCTUATION: &[char] = &['.', ',', '!', '?', '…'];

// Reverse literals, consulted when the dictionary has lost them.
pub const GREETING_TOKEN: &str = "lowkey!";
pub const FAREWELL_TOKEN: &str = "lowkey…";
pub const REFUSAL_TOKEN: &str = "low-key";

pub const SPECIAL_LITERALS: &[(&str, &str)] = &[
    (GREETING_TOKEN, "hello"),
    (FAREWELL_TOKEN, "bye"),
    (REFUSAL_TOKEN, "no"),
];

/// Marker for "I"/"me"/"my"; a name marker right after it reads as a
/// self-introduction.
pub const FIRST_PERSON_MARKER: &str = "lowkey";

// Fallback markers for unknown English words.
pub const GENERIC_MARKER_PREFIX: &str = "kēkē";
pub const ACTION_MARKER: &str = "kēkē-lōw";
pub const MANNER_MARKER: &str = "kēkē-ley";
pub const CONCEPT_MARKER: &str = "kēkē-lōk";
pub const COMMON_NOUN_MARKER: &str = "kēkē";
pub const NAME_MARKER: &str = "lōkē";

/// What an unknown generic marker turns back into.
pub const GENERIC_PLACEHOLDER: &str = "something";

/// Substring whose frequency marks text as Lowkeese.
pub const LOWKEESE_SIGNATURE: &str = "low";

/// Syllables the generative fallback builds words from.
pub const SYLLABLES: &[&str] = &["low", "lokē", "lōw", "lowkē", "key", "kē", "lōk", "lowy", "ley"];

pub const PLACE_WORDS: &[&str] = &[
    "school", "park", "city", "street", "office", "home", "house", "room",
];

pub const OBJECT_WORDS: &[&str] = &[
    "phone", "controller", "game", "app", "message", "messages", "pc", "xbox",
];

pub const PERSON_WORDS: &[&str] = &[
    "friend", "friends", "teacher", "mum", "mom", "dad", "brother", "sister", "family",
];

pub const VERB_WORDS: &[&str] = &[
    "go", "went", "come", "came", "play", "walk", "run", "talk", "say", "said", "going",
    "playing", "running", "talking",
];

/// Formats the name-wrapping token for a proper noun.
pub fn name_token(name: &str) -> String {
    format!("{}({})", NAME_MARKER, name)
}
