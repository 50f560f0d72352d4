use std::path::Path;

use lumina_core::models::{FontSize, Settings, ThemeMode};
use lumina_core::state::ViewTab;
use lumina_core::storage::FileStorage;

use crate::error::CliError;

pub fn run_config_show(data_dir: &Path) -> Result<(), CliError> {
    let storage = FileStorage::new(data_dir)?;
    let settings = Settings::load(&storage)?;
    println!("{}", serde_json::to_string_pretty(&settings)?);
    Ok(())
}

pub fn run_config_set(key: &str, value: &str, data_dir: &Path) -> Result<(), CliError> {
    let storage = FileStorage::new(data_dir)?;
    let mut settings = Settings::load(&storage)?;
    apply_setting(&mut settings, key, value)?;
    settings.save(&storage)?;
    println!("{key} = {value}");
    Ok(())
}

pub fn apply_setting(settings: &mut Settings, key: &str, value: &str) -> Result<(), CliError> {
    match key {
        "theme" => {
            settings.theme = match value {
                "light" => ThemeMode::Light,
                "dark" => ThemeMode::Dark,
                "system" => ThemeMode::System,
                _ => return Err(invalid_value(key, value, "light, dark, system")),
            };
        }
        "font-size" => {
            settings.font_size = match value {
                "small" => FontSize::Small,
                "medium" => FontSize::Medium,
                "large" => FontSize::Large,
                _ => return Err(invalid_value(key, value, "small, medium, large")),
            };
        }
        "default-view" => {
            settings.default_view = match value {
                "notes" => ViewTab::Notes,
                "spaces" => ViewTab::Spaces,
                "graph" => ViewTab::Graph,
                _ => return Err(invalid_value(key, value, "notes, spaces, graph")),
            };
        }
        "auto-save" => settings.auto_save = parse_bool(key, value)?,
        "sync-enabled" => settings.sync_enabled = parse_bool(key, value)?,
        "notifications" => settings.notifications_enabled = parse_bool(key, value)?,
        _ => {
            return Err(CliError::Config(format!(
                "unknown setting '{key}' (expected theme, font-size, default-view, auto-save, sync-enabled, notifications)"
            )))
        }
    }
    Ok(())
}

fn parse_bool(key: &str, value: &str) -> Result<bool, CliError> {
    match value {
        "true" | "on" => Ok(true),
        "false" | "off" => Ok(false),
        _ => Err(invalid_value(key, value, "true, false")),
    }
}

fn invalid_value(key: &str, value: &str, expected: &str) -> CliError {
    CliError::Config(format!(
        "invalid value '{value}' for '{key}' (expected one of: {expected})"
    ))
}
