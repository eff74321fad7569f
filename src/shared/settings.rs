use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;
use ts_rs::TS;

use crate::shared::error::{ToolError, ToolResult};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "settings.ts")]
pub struct AppSettings {
    pub logging: LoggingSettings,
    pub unit_converter: UnitConverterSettings,
    pub decision: DecisionSettings,
    pub alphabet: AlphabetSettings,
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "settings.ts")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "settings.ts")]
pub struct LoggingSettings {
    /// EnvFilter directive, overridden by RUST_LOG
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "settings.ts")]
pub struct UnitConverterSettings {
    pub history_limit: usize,
    pub display_decimals: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "settings.ts")]
pub struct DecisionSettings {
    pub max_history_items: usize,
    pub exclude_previous_results: bool,
    /// Wheel animation length. Only the front end reads it; draws are never delayed.
    pub spin_duration_secs: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "settings.ts")]
pub struct AlphabetSettings {
    pub history_limit: usize,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "settings.ts")]
pub struct StorageSettings {
    /// Overrides the per-user data directory
    pub data_dir: Option<String>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl Default for UnitConverterSettings {
    fn default() -> Self {
        Self {
            history_limit: 50,
            display_decimals: 8,
        }
    }
}

impl Default for DecisionSettings {
    fn default() -> Self {
        Self {
            max_history_items: 50,
            exclude_previous_results: false,
            spin_duration_secs: 3.0,
        }
    }
}

impl Default for AlphabetSettings {
    fn default() -> Self {
        Self { history_limit: 50 }
    }
}

fn project_dirs() -> ToolResult<ProjectDirs> {
    ProjectDirs::from("com", "jvst", "jvst-tools")
        .ok_or_else(|| ToolError::Io("Failed to determine project directories".to_string()))
}

impl AppSettings {
    pub fn get_settings_path() -> ToolResult<PathBuf> {
        Ok(project_dirs()?.config_dir().join("settings.json"))
    }

    /// Directory holding the persisted tool state
    pub fn data_dir(&self) -> ToolResult<PathBuf> {
        match &self.storage.data_dir {
            Some(dir) => Ok(PathBuf::from(dir)),
            None => Ok(project_dirs()?.data_dir().to_path_buf()),
        }
    }

    /// Load settings from the per-user config directory, writing defaults on first run
    pub async fn load() -> ToolResult<Self> {
        let path = Self::get_settings_path()?;
        Self::load_from(&path).await
    }

    pub async fn load_from(path: &Path) -> ToolResult<Self> {
        if !path.exists() {
            let settings = Self::default();
            settings.save_to(path).await?;
            info!(path = %path.display(), "Wrote default settings");
            return Ok(settings);
        }

        let content = fs::read_to_string(path)
            .await
            .map_err(|e| ToolError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = serde_json::from_str(&content)
            .map_err(|e| ToolError::Serialization(format!("Failed to parse settings: {}", e)))?;
        info!(path = %path.display(), "Loaded settings");
        Ok(settings)
    }

    pub async fn save(&self) -> ToolResult<()> {
        let path = Self::get_settings_path()?;
        self.save_to(&path).await
    }

    pub async fn save_to(&self, path: &Path) -> ToolResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ToolError::Io(format!("Failed to create config directory: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;

        fs::write(path, content)
            .await
            .map_err(|e| ToolError::Io(format!("Failed to write settings file: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_first_load_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = AppSettings::load_from(&path).await.unwrap();
        assert_eq!(settings, AppSettings::default());
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = AppSettings::default();
        settings.decision.max_history_items = 10;
        settings.logging.format = LogFormat::Json;
        settings.storage.data_dir = Some("/tmp/jvst".to_string());
        settings.save_to(&path).await.unwrap();

        let loaded = AppSettings::load_from(&path).await.unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(loaded.data_dir().unwrap(), PathBuf::from("/tmp/jvst"));
    }

    #[tokio::test]
    async fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "decision": { "exclude_previous_results": true } }"#)
            .await
            .unwrap();

        let loaded = AppSettings::load_from(&path).await.unwrap();
        assert!(loaded.decision.exclude_previous_results);
        assert_eq!(loaded.decision.max_history_items, 50);
        assert_eq!(loaded.decision.spin_duration_secs, 3.0);
        assert_eq!(loaded.unit_converter.display_decimals, 8);
    }

    #[tokio::test]
    async fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").await.unwrap();

        let err = AppSettings::load_from(&path).await.unwrap_err();
        assert!(matches!(err, ToolError::Serialization(_)));
    }
}
