// File: src/config.rs
use crate::core::fallback::{FallbackStrategy, MarkerFallback, SyllableFallback};
use crate::errors::{ConfigError, Result};
use crate::persistence::{DictionaryStore, FileStore, MemoryStore, NullStore, StoreFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Environment variable the shell reads a config path from.
pub const CONFIG_ENV: &str = "LOWKEESE_CONFIG";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackMode {
    /// Fixed marker tokens; nothing is written on translation.
    #[default]
    Marker,
    /// Invented syllable words, committed to the dictionary.
    Syllable,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    File,
    Memory,
    #[serde(rename = "none")]
    Disabled,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    pub format: StoreFormat,
    /// Defaults to the platform data directory.
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub fallback: FallbackMode,
    /// Seeds the syllable generator; unseeded runs use OS entropy.
    pub seed: Option<u64>,
    pub store: StoreConfig,
}

impl EngineConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config)
    }

    /// A missing file silently means defaults; a broken one is logged first.
    pub fn from_file_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(crate::errors::LowkeeseError::Config(ConfigError::Read { source, .. }))
                if source.kind() == ErrorKind::NotFound =>
            {
                Self::default()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "using default config");
                Self::default()
            }
        }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.store.dir.clone().unwrap_or_else(default_data_dir)
    }

    /// Directory the dictionaries are written to, if they reach disk at all.
    pub fn saved_dir(&self) -> Option<PathBuf> {
        match self.store.backend {
            StoreBackend::File => Some(self.data_dir()),
            StoreBackend::Memory | StoreBackend::Disabled => None,
        }
    }

    pub fn build_store(&self) -> Box<dyn DictionaryStore> {
        match self.store.backend {
            StoreBackend::File => Box::new(FileStore::new(self.data_dir(), self.store.format)),
            StoreBackend::Memory => Box::new(MemoryStore::new()),
            StoreBackend::Disabled => Box::new(NullStore),
        }
    }

    pub fn build_fallback(&self) -> Box<dyn FallbackStrategy> {
        match (self.fallback, self.seed) {
            (FallbackMode::Marker, _) => Box::new(MarkerFallback),
            (FallbackMode::Syllable, Some(seed)) => Box::new(SyllableFallback::seeded(seed)),
            (FallbackMode::Syllable, None) => Box::new(SyllableFallback::new()),
        }
    }
}

pub fn default_data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    path.push("lowkeese");
    path
}

pub fn default_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("lowkeese");
    path.push("config.json");
    path
}
