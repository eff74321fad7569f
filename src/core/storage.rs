//! Key-value persistence port
//!
//! Tools persist their history, favorites and saved items as JSON values
//! under string keys. The embedded redb database is the default backend,
//! with an in-memory fallback when the database cannot be opened.

use redb::{Database, ReadableTable, TableDefinition};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

use crate::shared::error::{ToolError, ToolResult};
use crate::shared::settings::AppSettings;

/// Keys used by the tools
pub mod keys {
    pub const UNIT_HISTORY: &str = "unitConverterHistory";
    pub const UNIT_FAVORITES: &str = "unitConverterFavorites";
    pub const DECISION_HISTORY: &str = "randomDecisionHistory";
    pub const DECISION_SETS: &str = "randomDecisionSets";
    pub const DECISION_SETTINGS: &str = "randomDecisionSettings";
    pub const ALPHABET_HISTORY: &str = "alphabetGeneratorHistory";
    pub const COLOR_HISTORY: &str = "colorConverterHistory";
    pub const SAVED_COLORS: &str = "colorConverterSavedColors";
    pub const SAVED_PALETTES: &str = "colorConverterSavedPalettes";
    pub const REGEX_PATTERNS: &str = "regexSavedPatterns";
}

/// Redb table definition for tool state
/// Key: storage key, Value: JSON text
const STATE_TABLE: TableDefinition<&str, &str> = TableDefinition::new("tool_state");

const DATABASE_FILE: &str = "tool_state.redb";

/// Persistent key-value store holding JSON values
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> ToolResult<Option<Value>>;
    fn set(&self, key: &str, value: &Value) -> ToolResult<()>;
    fn remove(&self, key: &str) -> ToolResult<()>;
}

/// Read and deserialize a value. Entries that no longer match `T` are
/// logged and treated as absent.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> ToolResult<Option<T>> {
    let Some(value) = store.get(key)? else {
        return Ok(None);
    };
    match serde_json::from_value(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => {
            warn!(key, error = %e, "Discarding unreadable stored value");
            Ok(None)
        }
    }
}

pub fn save_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> ToolResult<()> {
    let value = serde_json::to_value(value)?;
    store.set(key, &value)
}

fn storage_err(context: &str, err: impl std::fmt::Display) -> ToolError {
    ToolError::Storage(format!("{}: {}", context, err))
}

/// Redb-based storage implementation
pub struct RedbStore {
    db: Database,
}

impl RedbStore {
    pub fn open(path: &Path) -> ToolResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ToolError::Io(format!("Failed to create data directory: {}", e)))?;
        }

        let db = Database::create(path).map_err(|e| storage_err("Failed to create database", e))?;

        // Initialize table so read transactions never see it missing
        {
            let write_txn = db
                .begin_write()
                .map_err(|e| storage_err("Failed to begin write transaction", e))?;
            {
                let _table = write_txn
                    .open_table(STATE_TABLE)
                    .map_err(|e| storage_err("Failed to open table", e))?;
            }
            write_txn
                .commit()
                .map_err(|e| storage_err("Failed to commit transaction", e))?;
        }

        info!(path = %path.display(), "Opened tool state database");
        Ok(Self { db })
    }
}

impl KeyValueStore for RedbStore {
    fn get(&self, key: &str) -> ToolResult<Option<Value>> {
        let read_txn = self
            .db
            .begin_read()
            .map_err(|e| storage_err("Failed to begin read", e))?;
        let table = read_txn
            .open_table(STATE_TABLE)
            .map_err(|e| storage_err("Failed to open table", e))?;

        let entry = table
            .get(key)
            .map_err(|e| storage_err("Failed to read entry", e))?;

        match entry {
            Some(guard) => match serde_json::from_str(guard.value()) {
                Ok(value) => Ok(Some(value)),
                Err(e) => {
                    warn!(key, error = %e, "Stored entry is not valid JSON");
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &Value) -> ToolResult<()> {
        let serialized = serde_json::to_string(value)?;

        let write_txn = self
            .db
            .begin_write()
            .map_err(|e| storage_err("Failed to begin write", e))?;
        {
            let mut table = write_txn
                .open_table(STATE_TABLE)
                .map_err(|e| storage_err("Failed to open table", e))?;
            table
                .insert(key, serialized.as_str())
                .map_err(|e| storage_err("Failed to insert", e))?;
        }
        write_txn
            .commit()
            .map_err(|e| storage_err("Failed to commit", e))?;

        Ok(())
    }

    fn remove(&self, key: &str) -> ToolResult<()> {
        let write_txn = self
            .db
            .begin_write()
            .map_err(|e| storage_err("Failed to begin write", e))?;
        {
            let mut table = write_txn
                .open_table(STATE_TABLE)
                .map_err(|e| storage_err("Failed to open table", e))?;
            table
                .remove(key)
                .map_err(|e| storage_err("Failed to remove key", e))?;
        }
        write_txn
            .commit()
            .map_err(|e| storage_err("Failed to commit", e))?;

        Ok(())
    }
}

/// In-memory storage (tests, and fallback if the database cannot be opened)
#[derive(Default)]
pub struct InMemoryStore {
    entries: Mutex<HashMap<String, Value>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> ToolResult<Option<Value>> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| ToolError::Storage(format!("Mutex poisoned: {}", e)))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &Value) -> ToolResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| ToolError::Storage(format!("Mutex poisoned: {}", e)))?;
        entries.insert(key.to_string(), value.clone());
        Ok(())
    }

    fn remove(&self, key: &str) -> ToolResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| ToolError::Storage(format!("Mutex poisoned: {}", e)))?;
        entries.remove(key);
        Ok(())
    }
}

/// Open the database under the configured data directory, falling back to
/// memory so the tools keep working without persistence.
pub fn open_default_store(settings: &AppSettings) -> Arc<dyn KeyValueStore> {
    let opened = settings
        .data_dir()
        .and_then(|dir| RedbStore::open(&dir.join(DATABASE_FILE)));

    match opened {
        Ok(store) => Arc::new(store),
        Err(e) => {
            warn!(error = %e, "Failed to initialize database, using in-memory fallback");
            Arc::new(InMemoryStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn exercise(store: &dyn KeyValueStore) {
        assert_eq!(store.get("missing").unwrap(), None);

        store.set("a", &json!({ "n": 1 })).unwrap();
        assert_eq!(store.get("a").unwrap(), Some(json!({ "n": 1 })));

        store.set("a", &json!([1, 2, 3])).unwrap();
        assert_eq!(store.get("a").unwrap(), Some(json!([1, 2, 3])));

        store.remove("a").unwrap();
        assert_eq!(store.get("a").unwrap(), None);

        // Removing an absent key is not an error
        store.remove("a").unwrap();
    }

    #[test]
    fn test_in_memory_store() {
        exercise(&InMemoryStore::new());
    }

    #[test]
    fn test_redb_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = RedbStore::open(&dir.path().join("state.redb")).unwrap();
        exercise(&store);
    }

    #[test]
    fn test_redb_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.redb");
        {
            let store = RedbStore::open(&path).unwrap();
            store.set(keys::UNIT_HISTORY, &json!(["entry"])).unwrap();
        }
        let store = RedbStore::open(&path).unwrap();
        assert_eq!(store.get(keys::UNIT_HISTORY).unwrap(), Some(json!(["entry"])));
    }

    #[test]
    fn test_load_json_discards_mismatched_shape() {
        let store = InMemoryStore::new();
        store.set("numbers", &json!("not a list")).unwrap();
        let loaded: Option<Vec<u32>> = load_json(&store, "numbers").unwrap();
        assert_eq!(loaded, None);

        save_json(&store, "numbers", &vec![1u32, 2]).unwrap();
        let loaded: Option<Vec<u32>> = load_json(&store, "numbers").unwrap();
        assert_eq!(loaded, Some(vec![1, 2]));
    }

    #[test]
    fn test_default_store_uses_configured_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = AppSettings::default();
        settings.storage.data_dir = Some(dir.path().to_string_lossy().into_owned());

        let store = open_default_store(&settings);
        store.set("k", &json!(true)).unwrap();
        assert!(dir.path().join(DATABASE_FILE).exists());
    }
}
