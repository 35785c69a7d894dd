//! Application settings persistence
//!
//! Handles saving and loading user preferences.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::rating::{BandTable, LidPolicy, RatingConfig, TrackPolicy};

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Rating widget configuration
    pub rating: RatingSettings,
    /// Display and interface settings
    pub display: DisplaySettings,
}

/// Rating widget settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingSettings {
    /// Heading shown above the face
    pub title_text: String,
    /// Offer the written feedback field
    pub enable_written_feedback: bool,
    /// Rating shown when the widget opens (0.0 to 1.0)
    pub initial_value: f32,
    /// Sentiment band table
    pub band_table: BandTable,
    /// How the moving eye lid follows the rating
    pub lid_policy: LidPolicy,
    /// Handling of drag positions beyond the track ends
    pub track_policy: TrackPolicy,
    /// Duration of the face and background transitions in milliseconds
    pub transition_ms: u64,
}

/// Display-related settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Use a dark theme for the acknowledgment dialog
    pub dark_mode: bool,
    /// Interface language code ("en" or "zh")
    pub language: String,
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            title_text: "Do you enjoy our app?".to_string(),
            enable_written_feedback: true,
            initial_value: 0.0,
            band_table: BandTable::FourBand,
            lid_policy: LidPolicy::TiedToRating,
            track_policy: TrackPolicy::Clamp,
            transition_ms: 350,
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            language: "en".to_string(),
        }
    }
}

impl RatingSettings {
    /// Widget configuration described by these settings
    pub fn to_config(&self) -> RatingConfig {
        RatingConfig::new(self.title_text.clone())
            .written_feedback(self.enable_written_feedback)
            .initial_value(self.initial_value)
            .band_table(self.band_table)
            .lid_policy(self.lid_policy)
            .track_policy(self.track_policy)
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "ratingface", "RatingFace")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };

        match Self::load_from_file(&path) {
            Ok(settings) => settings,
            Err(SettingsError::Io(e)) => {
                tracing::debug!("No settings at {}: {}", path.display(), e);
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_settings_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("ratingface-test-{}-{}", std::process::id(), name))
            .join("settings.json")
    }

    #[test]
    fn defaults_match_widget_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.rating.title_text, "Do you enjoy our app?");
        assert!(settings.rating.enable_written_feedback);
        assert_eq!(settings.rating.initial_value, 0.0);
        assert_eq!(settings.rating.band_table, BandTable::FourBand);
        assert_eq!(settings.display.language, "en");

        let config = settings.rating.to_config();
        assert_eq!(config, RatingConfig::new("Do you enjoy our app?"));
    }

    #[test]
    fn save_and_load_round_trip() {
        let path = temp_settings_path("round-trip");
        let mut settings = Settings::default();
        settings.rating.band_table = BandTable::ThreeBand;
        settings.rating.initial_value = 0.5;
        settings.rating.enable_written_feedback = false;
        settings.display.language = "zh".to_string();

        settings.save_to_file(&path).unwrap();
        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded, settings);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let json = r#"{ "rating": { "band_table": "three_band", "lid_policy": "open" } }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.rating.band_table, BandTable::ThreeBand);
        assert_eq!(settings.rating.lid_policy, LidPolicy::Open);
        assert_eq!(settings.rating.track_policy, TrackPolicy::Clamp);
        assert_eq!(settings.rating.transition_ms, 350);
        assert_eq!(settings.display, DisplaySettings::default());
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = temp_settings_path("missing");
        assert!(matches!(
            Settings::load_from_file(&path),
            Err(SettingsError::Io(_))
        ));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let path = temp_settings_path("malformed");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();
        let result = Settings::load_from_file(&path);
        assert!(matches!(result, Err(SettingsError::Parse(_))));
        assert!(result.unwrap_err().to_string().starts_with("Parse error"));

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
