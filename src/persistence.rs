// File: src/persistence.rs
use crate::errors::StoreError;
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tempfile::NamedTempFile;

/// Store key of the English -> Lowkeese mapping.
pub const FORWARD_KEY: &str = "lowkeese_rev_en2low_v3";
/// Store key of the Lowkeese -> English mapping.
pub const REVERSE_KEY: &str = "lowkeese_rev_low2en_v3";

/// A flat string-to-string mapping as it is persisted.
pub type StoredMap = HashMap<String, String>;

/// Key-value persistence for the two directional dictionaries.
///
/// `load` of an absent key is an empty map, not an error.
pub trait DictionaryStore {
    fn load(&self, key: &str) -> Result<StoredMap, StoreError>;
    fn save(&mut self, key: &str, map: &StoredMap) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreFormat {
    #[default]
    Json,
    Binary,
}

impl StoreFormat {
    fn extension(self) -> &'static str {
        match self {
            StoreFormat::Json => "json",
            StoreFormat::Binary => "bin",
        }
    }
}

/// One file per key inside a directory, replaced atomically on every save.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
    format: StoreFormat,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>, format: StoreFormat) -> Self {
        Self { dir: dir.into(), format }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", key, self.format.extension()))
    }
}

impl DictionaryStore for FileStore {
    fn load(&self, key: &str) -> Result<StoredMap, StoreError> {
        let path = self.path_for(key);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(StoredMap::new()),
            Err(e) => return Err(e.into()),
        };
        let reader = BufReader::new(file);
        match self.format {
            StoreFormat::Json => serde_json::from_reader(reader).map_err(|source| StoreError::Json {
                key: key.to_string(),
                source,
            }),
            StoreFormat::Binary => {
                bincode::deserialize_from(reader).map_err(|source| StoreError::Binary {
                    key: key.to_string(),
                    source,
                })
            }
        }
    }

    fn save(&mut self, key: &str, map: &StoredMap) -> Result<(), StoreError> {
        save_atomically(&self.path_for(key), key, map, self.format)
    }
}

fn save_atomically(
    path: &Path,
    key: &str,
    map: &StoredMap,
    format: StoreFormat,
) -> Result<(), StoreError> {
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    // Sorted so that identical dictionaries produce identical files.
    let ordered: BTreeMap<&String, &String> = map.iter().collect();

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        match format {
            StoreFormat::Json => serde_json::to_writer_pretty(&mut writer, &ordered).map_err(
                |source| StoreError::Json {
                    key: key.to_string(),
                    source,
                },
            )?,
            StoreFormat::Binary => bincode::serialize_into(&mut writer, &ordered).map_err(
                |source| StoreError::Binary {
                    key: key.to_string(),
                    source,
                },
            )?,
        }
        writer.flush()?;
    }

    temp_file.persist(path)?;
    Ok(())
}

/// In-process store. Clones share the same maps, so a test can keep a handle
/// and inspect what the engine wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    maps: Rc<RefCell<HashMap<String, StoredMap>>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a key with raw contents, bypassing the write counter.
    pub fn insert_raw(&self, key: &str, map: StoredMap) {
        self.maps.borrow_mut().insert(key.to_string(), map);
    }

    pub fn snapshot(&self, key: &str) -> Option<StoredMap> {
        self.maps.borrow().get(key).cloned()
    }

    /// Total number of `save` calls across all keys.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl DictionaryStore for MemoryStore {
    fn load(&self, key: &str) -> Result<StoredMap, StoreError> {
        Ok(self.maps.borrow().get(key).cloned().unwrap_or_default())
    }

    fn save(&mut self, key: &str, map: &StoredMap) -> Result<(), StoreError> {
        self.maps.borrow_mut().insert(key.to_string(), map.clone());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// No persistence backend at all: loads are empty, saves vanish.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

impl DictionaryStore for NullStore {
    fn load(&self, _key: &str) -> Result<StoredMap, StoreError> {
        Ok(StoredMap::new())
    }

    fn save(&mut self, _key: &str, _map: &StoredMap) -> Result<(), StoreError> {
        Ok(())
    }
}
