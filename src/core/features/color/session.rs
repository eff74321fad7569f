use chrono::Utc;
use std::sync::Arc;

use crate::core::history::SavedList;
use crate::core::storage::{keys, load_json, save_json, KeyValueStore};
use crate::shared::error::{ToolError, ToolResult};
use crate::shared::types::{generate_id, ColorValue, SavedColor, SavedPalette};

/// Recently used colors kept, newest first
pub const COLOR_HISTORY_LIMIT: usize = 20;

/// Color history, saved colors and saved palettes
pub struct ColorSession {
    store: Arc<dyn KeyValueStore>,
    saved_colors: SavedList<SavedColor>,
    palettes: SavedList<SavedPalette>,
}

fn require_name(name: &str, what: &str) -> ToolResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ToolError::InvalidInput(format!("Please enter a name for your {}", what)));
    }
    Ok(name.to_string())
}

impl ColorSession {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            saved_colors: SavedList::new(store.clone(), keys::SAVED_COLORS),
            palettes: SavedList::new(store.clone(), keys::SAVED_PALETTES),
            store,
        }
    }

    pub fn history(&self) -> ToolResult<Vec<ColorValue>> {
        Ok(load_json(self.store.as_ref(), keys::COLOR_HISTORY)?.unwrap_or_default())
    }

    /// Adds a color to the history unless one with the same hex is already there
    pub fn record(&self, color: &ColorValue) -> ToolResult<bool> {
        let mut history = self.history()?;
        if history.iter().any(|existing| existing.hex == color.hex) {
            return Ok(false);
        }
        history.insert(0, color.clone());
        history.truncate(COLOR_HISTORY_LIMIT);
        save_json(self.store.as_ref(), keys::COLOR_HISTORY, &history)?;
        Ok(true)
    }

    pub fn clear_history(&self) -> ToolResult<()> {
        self.store.remove(keys::COLOR_HISTORY)
    }

    pub fn save_color(&self, name: &str, color: &ColorValue) -> ToolResult<SavedColor> {
        let saved = SavedColor {
            id: generate_id(),
            name: require_name(name, "color")?,
            color: color.clone(),
            date: Utc::now(),
        };
        self.saved_colors.add(saved.clone())?;
        Ok(saved)
    }

    pub fn saved_colors(&self) -> ToolResult<Vec<SavedColor>> {
        self.saved_colors.list()
    }

    pub fn delete_color(&self, id: &str) -> ToolResult<bool> {
        self.saved_colors.remove(id)
    }

    /// Stores `base` followed by its accompanying colors
    pub fn save_palette(&self, name: &str, base: &ColorValue, accents: &[ColorValue]) -> ToolResult<SavedPalette> {
        let mut colors = Vec::with_capacity(accents.len() + 1);
        colors.push(base.clone());
        colors.extend_from_slice(accents);

        let palette = SavedPalette {
            id: generate_id(),
            name: require_name(name, "palette")?,
            colors,
            date: Utc::now(),
        };
        self.palettes.add(palette.clone())?;
        Ok(palette)
    }

    pub fn palettes(&self) -> ToolResult<Vec<SavedPalette>> {
        self.palettes.list()
    }

    pub fn delete_palette(&self, id: &str) -> ToolResult<bool> {
        self.palettes.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::features::color::{harmony, Harmony};
    use crate::core::storage::InMemoryStore;

    fn session() -> ColorSession {
        ColorSession::new(Arc::new(InMemoryStore::new()))
    }

    fn color(hex: &str) -> ColorValue {
        ColorValue::from_hex(hex).unwrap()
    }

    #[test]
    fn test_history_skips_known_colors() {
        let session = session();
        assert!(session.record(&color("#FF0000")).unwrap());
        assert!(session.record(&color("#00FF00")).unwrap());
        assert!(!session.record(&color("#f00")).unwrap());

        let hexes: Vec<String> = session.history().unwrap().into_iter().map(|c| c.hex).collect();
        assert_eq!(hexes, vec!["#00FF00", "#FF0000"]);

        session.clear_history().unwrap();
        assert!(session.history().unwrap().is_empty());
    }

    #[test]
    fn test_history_is_bounded() {
        let session = session();
        for value in 0..30u8 {
            session.record(&ColorValue::from_rgb(crate::shared::types::Rgb { r: value, g: 0, b: 0 })).unwrap();
        }
        let history = session.history().unwrap();
        assert_eq!(history.len(), COLOR_HISTORY_LIMIT);
        assert_eq!(history[0].rgb.r, 29);
    }

    #[test]
    fn test_saved_colors() {
        let session = session();
        assert!(session.save_color("  ", &color("#123456")).is_err());

        let saved = session.save_color(" Brand blue ", &color("#4A90E2")).unwrap();
        assert_eq!(saved.name, "Brand blue");
        assert_eq!(session.saved_colors().unwrap().len(), 1);

        assert!(session.delete_color(&saved.id).unwrap());
        assert!(!session.delete_color(&saved.id).unwrap());
    }

    #[test]
    fn test_saved_palettes_start_with_base() {
        let session = session();
        let base = color("#FF0000");
        let accents = harmony(&base, Harmony::Triadic);
        let palette = session.save_palette("Primary", &base, &accents).unwrap();

        assert_eq!(palette.colors.len(), 3);
        assert_eq!(palette.colors[0].hex, "#FF0000");
        assert_eq!(session.palettes().unwrap()[0].id, palette.id);

        assert!(session.delete_palette(&palette.id).unwrap());
        assert!(session.palettes().unwrap().is_empty());
        assert!(session.save_palette("", &base, &accents).is_err());
    }
}
