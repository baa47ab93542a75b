//! Game settings and preferences
//!
//! Stored as JSON next to the executable (or wherever the driver points).
//! A missing or broken file never stops the game; defaults are used instead.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to read or write a settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed run seed; random when absent
    pub seed: Option<u64>,
    /// Start in fullscreen
    pub fullscreen: bool,

    // === HUD ===
    /// Show score, lives and wave counters
    pub show_hud: bool,

    // === Accessibility ===
    /// Reduced motion (no invulnerability blinking)
    pub reduced_motion: bool,

    // === Headless driver ===
    /// Seconds of autopilot play for a headless run
    pub demo_seconds: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            fullscreen: false,

            // HUD
            show_hud: true,

            // Accessibility
            reduced_motion: false,

            // Headless
            demo_seconds: 60,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42, "reduced_motion": true }"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert!(settings.reduced_motion);
        assert!(settings.show_hud);
        assert_eq!(settings.demo_seconds, 60);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = Settings::from_json("{ seed: ").unwrap_err();
        assert!(matches!(err, SettingsError::Json(_)));
        assert!(err.to_string().starts_with("invalid settings JSON"));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = std::env::temp_dir().join("zaydroids-settings-does-not-exist.json");
        assert!(matches!(Settings::load(&path), Err(SettingsError::Io(_))));
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("zaydroids-settings-{}.json", std::process::id()));
        let settings = Settings {
            seed: Some(7),
            fullscreen: true,
            ..Settings::default()
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings);
        let _ = fs::remove_file(&path);
    }
}
