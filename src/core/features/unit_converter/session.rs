use chrono::Utc;
use std::sync::Arc;

use super::{builtin_registry, format_value, UnitRegistry};
use crate::core::history::{BoundedHistory, SavedList};
use crate::core::storage::{keys, KeyValueStore};
use crate::shared::error::ToolResult;
use crate::shared::settings::UnitConverterSettings;
use crate::shared::types::{
    generate_id, ConversionHistoryEntry, ConvertUnitsRequest, ConvertUnitsResponse, FavoriteConversion,
};

/// Conversions with persisted history and favorites
pub struct UnitConverterSession<'r> {
    registry: &'r UnitRegistry,
    history: BoundedHistory<ConversionHistoryEntry>,
    favorites: SavedList<FavoriteConversion>,
    display_decimals: usize,
}

impl UnitConverterSession<'static> {
    pub fn new(store: Arc<dyn KeyValueStore>, settings: &UnitConverterSettings) -> Self {
        Self::with_registry(builtin_registry(), store, settings)
    }
}

impl<'r> UnitConverterSession<'r> {
    pub fn with_registry(
        registry: &'r UnitRegistry,
        store: Arc<dyn KeyValueStore>,
        settings: &UnitConverterSettings,
    ) -> Self {
        Self {
            registry,
            history: BoundedHistory::new(store.clone(), keys::UNIT_HISTORY, settings.history_limit),
            favorites: SavedList::new(store, keys::UNIT_FAVORITES),
            display_decimals: settings.display_decimals,
        }
    }

    /// Converts and records the conversion, newest first
    pub fn convert(&self, request: &ConvertUnitsRequest) -> ToolResult<ConvertUnitsResponse> {
        let result = self.registry.convert_request(request)?;
        let from = self.registry.find_unit(&request.category, &request.from_unit)?;
        let to = self.registry.find_unit(&request.category, &request.to_unit)?;

        self.history.push(ConversionHistoryEntry {
            id: generate_id(),
            from_value: request.value,
            from_unit: from.id.to_string(),
            from_unit_name: from.name.to_string(),
            to_value: result,
            to_unit: to.id.to_string(),
            to_unit_name: to.name.to_string(),
            category: request.category.clone(),
            date: Utc::now(),
        })?;

        Ok(ConvertUnitsResponse {
            result,
            formatted_result: format_value(result, self.display_decimals),
            category: request.category.clone(),
            from_unit: request.from_unit.clone(),
            to_unit: request.to_unit.clone(),
        })
    }

    /// Clipboard line: "1 Kilometer = 1000 Meter"
    pub fn summary(&self, request: &ConvertUnitsRequest, response: &ConvertUnitsResponse) -> ToolResult<String> {
        let from = self.registry.find_unit(&request.category, &request.from_unit)?;
        let to = self.registry.find_unit(&request.category, &request.to_unit)?;
        Ok(format!(
            "{} {} = {} {}",
            format_value(request.value, self.display_decimals),
            from.name,
            response.formatted_result,
            to.name
        ))
    }

    pub fn history(&self) -> ToolResult<Vec<ConversionHistoryEntry>> {
        self.history.items()
    }

    pub fn clear_history(&self) -> ToolResult<()> {
        self.history.clear()
    }

    /// Request that repeats a recorded conversion
    pub fn replay(&self, entry_id: &str) -> ToolResult<Option<ConvertUnitsRequest>> {
        Ok(self.history.get(entry_id)?.map(|entry| ConvertUnitsRequest {
            category: entry.category,
            from_unit: entry.from_unit,
            to_unit: entry.to_unit,
            value: entry.from_value,
        }))
    }

    /// Saves the unit pair. Returns false if the same pair is already a favorite.
    pub fn add_favorite(&self, category: &str, from_unit: &str, to_unit: &str) -> ToolResult<bool> {
        let from = self.registry.find_unit(category, from_unit)?;
        let to = self.registry.find_unit(category, to_unit)?;

        let favorite = FavoriteConversion {
            id: generate_id(),
            from_unit: from.id.to_string(),
            from_unit_name: from.name.to_string(),
            to_unit: to.id.to_string(),
            to_unit_name: to.name.to_string(),
            category: category.to_string(),
        };
        self.favorites.add_unique(favorite, |a, b| {
            a.from_unit == b.from_unit && a.to_unit == b.to_unit && a.category == b.category
        })
    }

    pub fn is_favorite(&self, category: &str, from_unit: &str, to_unit: &str) -> ToolResult<bool> {
        Ok(self
            .favorites
            .list()?
            .iter()
            .any(|fav| fav.category == category && fav.from_unit == from_unit && fav.to_unit == to_unit))
    }

    pub fn remove_favorite(&self, id: &str) -> ToolResult<bool> {
        self.favorites.remove(id)
    }

    pub fn favorites(&self) -> ToolResult<Vec<FavoriteConversion>> {
        self.favorites.list()
    }
}
