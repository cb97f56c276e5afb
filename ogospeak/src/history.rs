//! Translation history: insert-once ordered caches and their export document
//!
//! Two independent caches exist for the process lifetime, one for words and
//! one for sentences. Entries are recorded by fire-and-forget tasks after a
//! successful translation and are never evicted.

use std::collections::BTreeMap;
use std::sync::RwLock;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Insert-once, ordered store of original -> translated pairs
///
/// A key is unique: the first insert wins and later inserts of the same key
/// are dropped. Iteration is always in ascending key order regardless of
/// insertion order. Readers share the lock; an insert takes it exclusively.
pub struct HistoryCache {
    store: RwLock<BTreeMap<String, String>>,
}

impl HistoryCache {
    pub fn new() -> Self {
        HistoryCache {
            store: RwLock::new(BTreeMap::new()),
        }
    }

    /// Record a translation. A key that is already present keeps its first
    /// value.
    pub fn insert(&self, original: String, translated: String) {
        let mut store = self
            .store
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        store.entry(original).or_insert(translated);
    }

    /// Point-in-time snapshot of the cache in ascending key order.
    pub fn export(&self) -> Vec<HistoryEntry> {
        let store = self
            .store
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        store
            .iter()
            .map(|(original, translated)| HistoryEntry {
                original: original.clone(),
                translated: translated.clone(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.store
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for HistoryCache {
    fn default() -> Self {
        Self::new()
    }
}

/// One original -> translated pair, serialized as `{"original":"translated"}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub original: String,
    pub translated: String,
}

impl Serialize for HistoryEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.original, &self.translated)?;
        map.end()
    }
}

/// The word and sentence caches of one process
///
/// The two caches are independent and never lock against each other.
pub struct History {
    pub words: HistoryCache,
    pub sentences: HistoryCache,
}

impl History {
    pub fn new() -> Self {
        History {
            words: HistoryCache::new(),
            sentences: HistoryCache::new(),
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

/// Combined export document: `{"history":[ ... ]}`
///
/// Word entries come first, then sentence entries, each cache in key order.
#[derive(Debug, serde::Serialize)]
pub struct HistoryDocument {
    history: Vec<HistoryEntry>,
}

impl HistoryDocument {
    pub fn snapshot(history: &History) -> Self {
        let mut entries = history.words.export();
        entries.extend(history.sentences.export());
        HistoryDocument { history: entries }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.history
    }
}
