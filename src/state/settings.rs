/// User settings for the puppy catalog window
///
/// Settings live in an optional JSON file in the user's config directory:
/// - Linux: ~/.config/puppy-adopt/settings.json
/// - macOS: ~/Library/Application Support/puppy-adopt/settings.json
/// - Windows: %APPDATA%\puppy-adopt\settings.json
///
/// Every field has a default, so a missing file or a partial file is fine.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors while reading the settings file
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Use the dark theme instead of the light one
    pub dark_theme: bool,

    /// Directory holding the puppy photos
    /// - None = bundled `assets/puppies`
    pub assets_dir: Option<PathBuf>,

    /// Number of grid columns (minimum 1)
    pub columns: usize,

    /// Initial window size in logical pixels
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_theme: false,
            assets_dir: None,
            columns: 2,
            // Phone-like portrait window
            window_width: 412.0,
            window_height: 860.0,
        }
    }
}

impl Settings {
    /// Parse from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Convert to a JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(json) => Ok(Self::from_json(&json)?.normalized()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Load settings from the default location
    pub fn load() -> Result<Self, SettingsError> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Where the settings file is expected, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("puppy-adopt");
        path.push("settings.json");
        Some(path)
    }

    fn normalized(mut self) -> Self {
        self.columns = self.columns.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("settings.json")).unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.columns, 2);
        assert!(!settings.dark_theme);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "dark_theme": true }}"#).unwrap();

        let settings = Settings::load_from(file.path()).unwrap();

        assert!(settings.dark_theme);
        assert_eq!(settings.columns, 2);
        assert_eq!(settings.assets_dir, None);
    }

    #[test]
    fn test_zero_columns_clamped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "columns": 0 }}"#).unwrap();

        let settings = Settings::load_from(file.path()).unwrap();
        assert_eq!(settings.columns, 1);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = Settings::load_from(file.path());
        assert!(matches!(result, Err(SettingsError::Parse(_))));
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = Settings {
            dark_theme: true,
            assets_dir: Some(PathBuf::from("/tmp/puppies")),
            ..Settings::default()
        };

        let restored = Settings::from_json(&settings.to_json().unwrap()).unwrap();
        assert_eq!(settings, restored);
    }
}
