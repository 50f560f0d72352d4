//! Application settings model

use serde::{Deserialize, Serialize};

use crate::state::ViewTab;
use crate::storage::{KeyValueStorage, SETTINGS_KEY};
use crate::Result;

/// Theme mode options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light theme
    Light,
    /// Dark theme
    Dark,
    /// Follow system preference
    #[default]
    System,
}

/// Content font size steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// User preferences shared by all Lumina clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Theme mode
    pub theme: ThemeMode,
    /// Content font size
    pub font_size: FontSize,
    /// View shown on startup
    pub default_view: ViewTab,
    /// Whether the editor saves automatically
    pub auto_save: bool,
    /// Whether cloud sync is enabled
    pub sync_enabled: bool,
    /// Whether reminder notifications are enabled
    pub notifications_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::System,
            font_size: FontSize::Medium,
            default_view: ViewTab::Notes,
            auto_save: true,
            sync_enabled: false,
            notifications_enabled: true,
        }
    }
}

impl Settings {
    /// Load settings from storage, falling back to defaults when absent
    pub fn load(storage: &dyn KeyValueStorage) -> Result<Self> {
        match storage.get(SETTINGS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Self::default()),
        }
    }

    /// Persist settings to storage
    pub fn save(&self, storage: &dyn KeyValueStorage) -> Result<()> {
        storage.set(SETTINGS_KEY, &serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.theme, ThemeMode::System);
        assert_eq!(settings.font_size, FontSize::Medium);
        assert!(settings.auto_save);
        assert!(!settings.sync_enabled);
    }

    #[test]
    fn test_settings_load_missing_returns_default() {
        let storage = MemoryStorage::new();
        let settings = Settings::load(&storage).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_settings_round_trip() {
        let storage = MemoryStorage::new();
        let settings = Settings {
            theme: ThemeMode::Dark,
            font_size: FontSize::Large,
            default_view: ViewTab::Spaces,
            auto_save: false,
            sync_enabled: true,
            notifications_enabled: false,
        };
        settings.save(&storage).unwrap();
        assert_eq!(Settings::load(&storage).unwrap(), settings);
    }
}
