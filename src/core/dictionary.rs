// File: src/core/dictionary.rs
use crate::core::lexicon::{BASE_PHRASES, BASE_WORDS};
use crate::core::types::DictionaryEntry;
use crate::errors::StoreError;
use crate::learning::TaughtPair;
use crate::persistence::{DictionaryStore, NullStore, StoredMap, FORWARD_KEY, REVERSE_KEY};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// One direction-pair of mappings. Keys are always lowercase.
#[derive(Debug, Clone, Default)]
struct Layer {
    forward: HashMap<String, String>,
    reverse: HashMap<String, String>,
}

impl Layer {
    fn base() -> Self {
        let mut layer = Self::default();
        // Phrases first so a word wins any target it shares with a phrase.
        for &(source, target) in BASE_PHRASES.iter().chain(BASE_WORDS) {
            layer.forward.insert(source.to_string(), target.to_string());
            layer.reverse.insert(target.to_lowercase(), source.to_string());
        }
        layer
    }

    fn from_stored(forward: StoredMap, reverse: StoredMap) -> Self {
        Self {
            forward: forward
                .into_iter()
                .map(|(k, v)| (k.to_lowercase(), v))
                .collect(),
            reverse: reverse
                .into_iter()
                .map(|(k, v)| (k.to_lowercase(), v))
                .collect(),
        }
    }
}

/// Owns both directional dictionaries: a fixed base layer and a user layer
/// that shadows it. Every successful `teach` is written through to the store.
pub struct DictionaryManager {
    base: Layer,
    user: Layer,
    phrase_revision: u64,
    store: Box<dyn DictionaryStore>,
}

impl DictionaryManager {
    /// Base dictionary only, nothing persisted.
    pub fn new() -> Self {
        Self::with_store(Box::new(NullStore))
    }

    /// Builds the base layer and loads the user layer from `store`.
    /// Missing or unreadable data leaves the user layer empty.
    pub fn with_store(store: Box<dyn DictionaryStore>) -> Self {
        let forward = load_or_empty(store.as_ref(), FORWARD_KEY);
        let reverse = load_or_empty(store.as_ref(), REVERSE_KEY);
        info!(
            forward = forward.len(),
            reverse = reverse.len(),
            "loaded user dictionary"
        );

        Self {
            base: Layer::base(),
            user: Layer::from_stored(forward, reverse),
            phrase_revision: 0,
            store,
        }
    }

    /// Case-insensitive English -> Lowkeese lookup.
    pub fn lookup_forward(&self, word: &str) -> Option<&str> {
        let key = word.to_lowercase();
        self.user
            .forward
            .get(&key)
            .or_else(|| self.base.forward.get(&key))
            .map(String::as_str)
    }

    /// Case-insensitive Lowkeese -> English lookup of a word or phrase.
    pub fn lookup_reverse(&self, phrase: &str) -> Option<&str> {
        let key = phrase.to_lowercase();
        self.user
            .reverse
            .get(&key)
            .or_else(|| self.base.reverse.get(&key))
            .map(String::as_str)
    }

    /// Records `source <-> target` in both directions and persists both maps.
    /// Blank input is ignored. Returns whether anything was stored.
    pub fn teach(&mut self, source: &str, target: &str) -> bool {
        let Some(pair) = TaughtPair::new(source, target) else {
            debug!(source, target, "ignoring blank teach request");
            return false;
        };

        info!(source = %pair.source, target = %pair.target, "teaching pair");
        let reverse_key = pair.reverse_key();
        if pair.is_phrase() {
            self.phrase_revision += 1;
        }
        self.user
            .forward
            .insert(pair.source.clone(), pair.target.clone());
        self.user.reverse.insert(reverse_key, pair.source);
        self.flush();
        true
    }

    /// Multi-word English keys with their targets, longest first.
    pub fn phrases(&self) -> Vec<(String, String)> {
        let mut phrases: Vec<(String, String)> = self
            .merged_forward()
            .into_iter()
            .filter(|(source, _)| source.contains(' '))
            .collect();
        phrases.sort_by(|(a, _), (b, _)| {
            let words = |s: &str| s.split(' ').count();
            words(b)
                .cmp(&words(a))
                .then_with(|| b.len().cmp(&a.len()))
                .then_with(|| a.cmp(b))
        });
        phrases
    }

    /// Bumped whenever a new multi-word source is taught.
    pub fn phrase_revision(&self) -> u64 {
        self.phrase_revision
    }

    /// The merged forward dictionary, sorted by source.
    pub fn entries(&self) -> Vec<DictionaryEntry> {
        let mut entries: Vec<DictionaryEntry> = self
            .merged_forward()
            .into_iter()
            .map(|(source, target)| DictionaryEntry { source, target })
            .collect();
        entries.sort_by(|a, b| a.source.cmp(&b.source));
        entries
    }

    /// Number of pairs the user layer holds.
    pub fn user_len(&self) -> usize {
        self.user.forward.len()
    }

    fn merged_forward(&self) -> StoredMap {
        let mut merged = self.base.forward.clone();
        merged.extend(self.user.forward.clone());
        merged
    }

    fn merged_reverse(&self) -> StoredMap {
        let mut merged = self.base.reverse.clone();
        merged.extend(self.user.reverse.clone());
        merged
    }

    /// Writes both merged maps, stopping at the first failure.
    pub fn save(&mut self) -> Result<(), StoreError> {
        let forward = self.merged_forward();
        let reverse = self.merged_reverse();
        self.store.save(FORWARD_KEY, &forward)?;
        self.store.save(REVERSE_KEY, &reverse)
    }

    /// Whole-map write of both directions. Failures are logged and dropped.
    fn flush(&mut self) {
        let forward = self.merged_forward();
        let reverse = self.merged_reverse();
        if let Err(e) = self.store.save(FORWARD_KEY, &forward) {
            warn!(key = FORWARD_KEY, error = %e, "could not save dictionary");
        }
        if let Err(e) = self.store.save(REVERSE_KEY, &reverse) {
            warn!(key = REVERSE_KEY, error = %e, "could not save dictionary");
        }
    }
}

impl Default for DictionaryManager {
    fn default() -> Self {
        Self::new()
    }
}

fn load_or_empty(store: &dyn DictionaryStore, key: &str) -> StoredMap {
    store.load(key).unwrap_or_else(|e| {
        warn!(key, error = %e, "discarding unreadable dictionary");
        StoredMap::new()
    })
}
