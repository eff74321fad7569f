//! Persisted record lists
//!
//! `BoundedHistory` keeps the newest entries first and drops the oldest past
//! its limit. `SavedList` holds user-curated records (favorites, saved sets,
//! palettes, patterns) without a limit. Both read and write the whole list
//! under one storage key.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

use crate::core::storage::{load_json, save_json, KeyValueStore};
use crate::shared::error::ToolResult;
use crate::shared::types::{
    ConversionHistoryEntry, DecisionHistoryItem, DecisionSet, FavoriteConversion,
    GenerationHistoryItem, SavedColor, SavedPalette, SavedPattern,
};

/// Default number of entries a history keeps
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// A persisted record with a stable id
pub trait Record: Serialize + DeserializeOwned + Clone {
    fn record_id(&self) -> &str;
}

macro_rules! impl_record {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Record for $ty {
                fn record_id(&self) -> &str {
                    &self.id
                }
            }
        )*
    };
}

impl_record!(
    ConversionHistoryEntry,
    FavoriteConversion,
    DecisionHistoryItem,
    DecisionSet,
    GenerationHistoryItem,
    SavedColor,
    SavedPalette,
    SavedPattern,
);

fn load_list<T: Record>(store: &dyn KeyValueStore, key: &str) -> ToolResult<Vec<T>> {
    Ok(load_json(store, key)?.unwrap_or_default())
}

/// Newest-first list truncated to `limit` entries
pub struct BoundedHistory<T> {
    store: Arc<dyn KeyValueStore>,
    key: &'static str,
    limit: usize,
    _record: PhantomData<T>,
}

impl<T: Record> BoundedHistory<T> {
    pub fn new(store: Arc<dyn KeyValueStore>, key: &'static str, limit: usize) -> Self {
        Self {
            store,
            key,
            limit,
            _record: PhantomData,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn push(&self, item: T) -> ToolResult<()> {
        let mut items = self.items()?;
        items.insert(0, item);
        if items.len() > self.limit {
            items.truncate(self.limit);
        }
        save_json(self.store.as_ref(), self.key, &items)?;
        debug!(key = self.key, len = items.len(), "History updated");
        Ok(())
    }

    /// Entries, most recent first
    pub fn items(&self) -> ToolResult<Vec<T>> {
        load_list(self.store.as_ref(), self.key)
    }

    pub fn get(&self, id: &str) -> ToolResult<Option<T>> {
        Ok(self.items()?.into_iter().find(|item| item.record_id() == id))
    }

    pub fn remove(&self, id: &str) -> ToolResult<bool> {
        let mut items = self.items()?;
        let before = items.len();
        items.retain(|item| item.record_id() != id);
        if items.len() == before {
            return Ok(false);
        }
        save_json(self.store.as_ref(), self.key, &items)?;
        Ok(true)
    }

    pub fn len(&self) -> ToolResult<usize> {
        Ok(self.items()?.len())
    }

    pub fn is_empty(&self) -> ToolResult<bool> {
        Ok(self.len()? == 0)
    }

    pub fn clear(&self) -> ToolResult<()> {
        self.store.remove(self.key)
    }
}

/// Unbounded list of saved records, newest first
pub struct SavedList<T> {
    store: Arc<dyn KeyValueStore>,
    key: &'static str,
    _record: PhantomData<T>,
}

impl<T: Record> SavedList<T> {
    pub fn new(store: Arc<dyn KeyValueStore>, key: &'static str) -> Self {
        Self {
            store,
            key,
            _record: PhantomData,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn list(&self) -> ToolResult<Vec<T>> {
        load_list(self.store.as_ref(), self.key)
    }

    pub fn add(&self, item: T) -> ToolResult<()> {
        self.prepend_all(vec![item])
    }

    /// Adds `item` unless an entry already matches it. Returns whether it was added.
    pub fn add_unique<F>(&self, item: T, is_same: F) -> ToolResult<bool>
    where
        F: Fn(&T, &T) -> bool,
    {
        let mut items = self.list()?;
        if items.iter().any(|existing| is_same(existing, &item)) {
            debug!(key = self.key, "Skipping duplicate entry");
            return Ok(false);
        }
        items.insert(0, item);
        save_json(self.store.as_ref(), self.key, &items)?;
        Ok(true)
    }

    /// Puts `new_items` in front of the stored entries, keeping their order
    pub fn prepend_all(&self, new_items: Vec<T>) -> ToolResult<()> {
        let existing = self.list()?;
        let mut items = new_items;
        items.extend(existing);
        save_json(self.store.as_ref(), self.key, &items)
    }

    pub fn remove(&self, id: &str) -> ToolResult<bool> {
        let mut items = self.list()?;
        let before = items.len();
        items.retain(|item| item.record_id() != id);
        if items.len() == before {
            return Ok(false);
        }
        save_json(self.store.as_ref(), self.key, &items)?;
        Ok(true)
    }

    pub fn clear(&self) -> ToolResult<()> {
        self.store.remove(self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::InMemoryStore;
    use chrono::Utc;

    fn entry(id: &str) -> GenerationHistoryItem {
        GenerationHistoryItem {
            id: id.to_string(),
            date: Utc::now(),
            combinations: vec![id.to_uppercase()],
        }
    }

    fn favorite(id: &str, from: &str, to: &str) -> FavoriteConversion {
        FavoriteConversion {
            id: id.to_string(),
            from_unit: from.to_string(),
            from_unit_name: from.to_string(),
            to_unit: to.to_string(),
            to_unit_name: to.to_string(),
            category: "length".to_string(),
        }
    }

    #[test]
    fn test_push_and_get_items() {
        let history = BoundedHistory::new(Arc::new(InMemoryStore::new()), "h", 10);
        history.push(entry("first")).unwrap();
        history.push(entry("second")).unwrap();

        let items = history.items().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "second"); // Most recent first
        assert_eq!(items[1].id, "first");
    }

    #[test]
    fn test_history_is_bounded() {
        let history = BoundedHistory::new(Arc::new(InMemoryStore::new()), "h", 3);
        for i in 0..10 {
            history.push(entry(&format!("item{}", i))).unwrap();
        }

        let items = history.items().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].id, "item9");
        assert_eq!(items[2].id, "item7");
    }

    #[test]
    fn test_remove_and_clear() {
        let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryStore::new());
        let history = BoundedHistory::new(store.clone(), "h", 10);
        history.push(entry("a")).unwrap();
        history.push(entry("b")).unwrap();

        assert!(history.remove("a").unwrap());
        assert!(!history.remove("a").unwrap());
        assert_eq!(history.len().unwrap(), 1);
        assert!(history.get("b").unwrap().is_some());

        history.clear().unwrap();
        assert!(history.is_empty().unwrap());
        assert_eq!(store.get("h").unwrap(), None);
    }

    #[test]
    fn test_saved_list_rejects_duplicates() {
        let favorites = SavedList::new(Arc::new(InMemoryStore::new()), "f");
        let same_pair = |a: &FavoriteConversion, b: &FavoriteConversion| {
            a.category == b.category && a.from_unit == b.from_unit && a.to_unit == b.to_unit
        };

        assert!(favorites.add_unique(favorite("1", "m", "ft"), same_pair).unwrap());
        assert!(!favorites.add_unique(favorite("2", "m", "ft"), same_pair).unwrap());
        assert!(favorites.add_unique(favorite("3", "ft", "m"), same_pair).unwrap());

        let ids: Vec<String> = favorites.list().unwrap().into_iter().map(|f| f.id).collect();
        assert_eq!(ids, vec!["3", "1"]);
    }

    #[test]
    fn test_prepend_all_keeps_order() {
        let saved = SavedList::new(Arc::new(InMemoryStore::new()), "s");
        saved.add(entry("old")).unwrap();
        saved.prepend_all(vec![entry("x"), entry("y")]).unwrap();

        let ids: Vec<String> = saved.list().unwrap().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["x", "y", "old"]);

        assert!(saved.remove("x").unwrap());
        assert_eq!(saved.list().unwrap().len(), 2);
    }
}
