//! Tool registry with enum dispatch
//!
//! Every tool is a unit struct implementing `ToolFeature`. `AppFeature`
//! dispatches statically over them, so the set of tools is fixed at
//! compile time.

use enum_dispatch::enum_dispatch;
use std::sync::OnceLock;
use tracing::{debug, info};

use crate::core::storage::KeyValueStore;
use crate::shared::error::ToolResult;
use crate::shared::types::ToolDescriptor;

pub mod alphabet;
pub mod color;
pub mod decision;
pub mod regex_tester;
pub mod unit_converter;

#[enum_dispatch]
pub trait ToolFeature: Send + Sync {
    /// Unique identifier for this tool
    fn id(&self) -> &'static str;

    /// Navigation entry: name, description, route and icon
    fn descriptor(&self) -> ToolDescriptor;

    /// Storage keys holding this tool's persisted state
    fn storage_keys(&self) -> &'static [&'static str];
}

#[enum_dispatch(ToolFeature)]
#[derive(Clone)]
pub enum AppFeature {
    AlphabetGenerator(alphabet::AlphabetGeneratorFeature),
    ColorConverter(color::ColorConverterFeature),
    DecisionMaker(decision::DecisionMakerFeature),
    RegexTester(regex_tester::RegexTesterFeature),
    UnitConverter(unit_converter::UnitConverterFeature),
}

impl AppFeature {
    /// Every tool, in home page order
    pub fn all() -> Vec<Self> {
        vec![
            AppFeature::AlphabetGenerator(alphabet::AlphabetGeneratorFeature),
            AppFeature::ColorConverter(color::ColorConverterFeature),
            AppFeature::DecisionMaker(decision::DecisionMakerFeature),
            AppFeature::RegexTester(regex_tester::RegexTesterFeature),
            AppFeature::UnitConverter(unit_converter::UnitConverterFeature),
        ]
    }

    pub fn find(id: &str) -> Option<Self> {
        Self::all().into_iter().find(|feature| feature.id() == id)
    }
}

/// Cached navigation entries
static NAVIGATION: OnceLock<Vec<ToolDescriptor>> = OnceLock::new();

/// Navigation entries for every tool (built once)
pub fn navigation() -> &'static [ToolDescriptor] {
    NAVIGATION.get_or_init(|| {
        let items: Vec<ToolDescriptor> = AppFeature::all().iter().map(|feature| feature.descriptor()).collect();
        debug!(count = items.len(), "Built navigation index");
        items
    })
}

/// Tool served at `path`
pub fn find_by_path(path: &str) -> Option<&'static ToolDescriptor> {
    navigation().iter().find(|item| item.path == path)
}

/// Removes everything the tool has persisted
pub fn clear_tool_data(store: &dyn KeyValueStore, feature: &AppFeature) -> ToolResult<()> {
    for key in feature.storage_keys() {
        store.remove(key)?;
    }
    info!(tool = feature.id(), "Cleared tool data");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::InMemoryStore;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn test_ids_paths_and_keys_are_unique() {
        let features = AppFeature::all();
        assert_eq!(features.len(), 5);

        let ids: HashSet<&str> = features.iter().map(|f| f.id()).collect();
        assert_eq!(ids.len(), features.len());

        let paths: HashSet<&str> = navigation().iter().map(|d| d.path.as_str()).collect();
        assert_eq!(paths.len(), features.len());

        let mut keys = HashSet::new();
        for feature in &features {
            for key in feature.storage_keys() {
                assert!(keys.insert(*key), "key {} claimed twice", key);
            }
        }
    }

    #[test]
    fn test_navigation_order_and_lookup() {
        let names: Vec<&str> = navigation().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Alphabet Generator",
                "Color Format Converter",
                "Random Decision Maker",
                "Regex Pattern Tester",
                "Unit Converter",
            ]
        );

        assert_eq!(find_by_path("/color-tools").unwrap().icon, "🎨");
        assert!(find_by_path("/nowhere").is_none());
        assert_eq!(AppFeature::find("regex_tester").unwrap().descriptor().path, "/regex-pattern-tester");
        assert!(AppFeature::find("calculator").is_none());
    }

    #[test]
    fn test_clear_tool_data_only_touches_own_keys() {
        let store = InMemoryStore::new();
        let decision = AppFeature::DecisionMaker(decision::DecisionMakerFeature);
        let regex = AppFeature::RegexTester(regex_tester::RegexTesterFeature);

        for key in decision.storage_keys().iter().chain(regex.storage_keys()) {
            store.set(key, &json!([1])).unwrap();
        }

        clear_tool_data(&store, &decision).unwrap();
        for key in decision.storage_keys() {
            assert_eq!(store.get(key).unwrap(), None);
        }
        for key in regex.storage_keys() {
            assert!(store.get(key).unwrap().is_some());
        }
    }
}
