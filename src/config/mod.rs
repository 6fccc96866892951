//! Highlight Configuration
//!
//! Tunable thresholds for recognition filtering and highlight rendering,
//! stored in TOML format.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Highlight settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightSettings {
    /// Recognition filtering settings
    pub recognition: RecognitionSettings,
    /// Rendering settings
    pub highlight: HighlightStyle,
}

impl Default for HighlightSettings {
    fn default() -> Self {
        Self {
            recognition: RecognitionSettings::default(),
            highlight: HighlightStyle::default(),
        }
    }
}

/// Recognition filtering settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionSettings {
    /// Minimum confidence for a region to participate in matching (0.0 - 1.0)
    pub confidence_threshold: f64,
}

impl Default for RecognitionSettings {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.5,
        }
    }
}

/// Rendering settings for matched regions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightStyle {
    /// Window margin around a matched region, as a fraction of its height
    pub outset_ratio: f64,
    /// Minimum on-screen height in destination pixels before a region gets
    /// an outline (strictly greater-than)
    pub outline_min_height: f64,
    /// Width of the light outer stroke
    pub outline_outer_width: f64,
    /// Width of the dark inner stroke
    pub outline_inner_width: f64,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            outset_ratio: 0.1,
            outline_min_height: 20.0,
            outline_outer_width: 3.0,
            outline_inner_width: 1.0,
        }
    }
}

/// Load settings from file
pub fn load_settings(path: &Path) -> Result<HighlightSettings> {
    let content = std::fs::read_to_string(path)?;
    let settings: HighlightSettings = toml::from_str(&content)?;
    Ok(settings)
}

/// Save settings to file
pub fn save_settings(settings: &HighlightSettings, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(settings)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_settings() {
        let settings = HighlightSettings::default();

        assert!((settings.recognition.confidence_threshold - 0.5).abs() < 1e-9);
        assert!((settings.highlight.outset_ratio - 0.1).abs() < 1e-9);
        assert!((settings.highlight.outline_min_height - 20.0).abs() < 1e-9);
        assert!((settings.highlight.outline_outer_width - 3.0).abs() < 1e-9);
        assert!((settings.highlight.outline_inner_width - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_settings_serialization_roundtrip() {
        let settings = HighlightSettings::default();

        let toml_str = toml::to_string_pretty(&settings).unwrap();
        let parsed: HighlightSettings = toml::from_str(&toml_str).unwrap();

        assert_eq!(
            settings.recognition.confidence_threshold,
            parsed.recognition.confidence_threshold
        );
        assert_eq!(settings.highlight.outset_ratio, parsed.highlight.outset_ratio);
        assert_eq!(
            settings.highlight.outline_min_height,
            parsed.highlight.outline_min_height
        );
    }

    #[test]
    fn test_settings_with_custom_values() {
        let mut settings = HighlightSettings::default();
        settings.recognition.confidence_threshold = 0.8;
        settings.highlight.outline_min_height = 30.0;

        let toml_str = toml::to_string_pretty(&settings).unwrap();
        let parsed: HighlightSettings = toml::from_str(&toml_str).unwrap();

        assert!((parsed.recognition.confidence_threshold - 0.8).abs() < 1e-9);
        assert!((parsed.highlight.outline_min_height - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_save_and_load_settings() {
        let settings = HighlightSettings::default();
        let temp_file = NamedTempFile::new().unwrap();

        save_settings(&settings, temp_file.path()).unwrap();
        let loaded = load_settings(temp_file.path()).unwrap();

        assert_eq!(
            settings.recognition.confidence_threshold,
            loaded.recognition.confidence_threshold
        );
        assert_eq!(
            settings.highlight.outline_outer_width,
            loaded.highlight.outline_outer_width
        );
    }

    #[test]
    fn test_load_settings_file_not_found() {
        let result = load_settings(Path::new("/nonexistent/path/settings.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "this is not valid toml {{{{").unwrap();

        let result = load_settings(temp_file.path());
        assert!(result.is_err());
    }
}
