// src/lib.rs

pub mod config;
pub mod core;
pub mod errors;
pub mod learning;
pub mod persistence;

pub use crate::config::EngineConfig;
pub use crate::core::dictionary::DictionaryManager;
pub use crate::core::engine::LowkeeseEngine;
pub use crate::core::types::{AutoTranslation, Direction};
