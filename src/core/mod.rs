// File: src/core/mod.rs
pub mod detect;
pub mod dictionary;
pub mod engine;
pub mod fallback;
pub mod forward;
pub mod lexicon;
pub mod reverse;
pub mod tokenizer;
pub mod types;
