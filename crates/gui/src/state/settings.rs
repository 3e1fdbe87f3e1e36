//! Editor settings
//!
//! Only cosmetic preferences live here. Placement rules (zoom and scale
//! bounds, rotation step, size divisor) are constants in `state::view` and
//! `state::scene`.

use serde::{Deserialize, Serialize};

use super::view::NIGHT_BRIGHTNESS;

/// UI language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Russian,
}

impl Language {
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Russian => "Русский",
        }
    }

    pub fn all() -> &'static [Language] {
        &[Language::English, Language::Russian]
    }
}

/// UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    /// Font size in points
    pub font_size: f32,
    #[serde(default)]
    pub language: Language,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            language: Language::English,
        }
    }
}

/// Canvas colors and the night filter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasSettings {
    /// Background color RGB
    pub background_color: [u8; 3],
    /// Fill color RGB for items without a loaded image
    pub item_color: [u8; 3],
    /// Selection outline color RGB
    pub selection_color: [u8; 3],
    /// Brightness factor applied in night mode (0.0 - 1.0)
    pub night_brightness: f32,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            background_color: [245, 241, 234],
            item_color: [176, 148, 116],
            selection_color: [0, 150, 255],
            night_brightness: NIGHT_BRIGHTNESS,
        }
    }
}

/// All editor settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditorSettings {
    #[serde(default)]
    pub ui: UiSettings,
    #[serde(default)]
    pub canvas: CanvasSettings,
}

impl EditorSettings {
    /// Settings with out-of-range values pulled back into range
    pub fn sanitized(mut self) -> Self {
        self.ui.font_size = self.ui.font_size.clamp(8.0, 32.0);
        self.canvas.night_brightness = self.canvas.night_brightness.clamp(0.0, 1.0);
        self
    }
}

#[cfg(feature = "native")]
mod file {
    use std::path::PathBuf;

    use super::EditorSettings;
    use crate::error::{EditorError, EditorResult};

    fn settings_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "roomeditor", "room-editor")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    impl EditorSettings {
        /// Load settings from file, or return default if not found
        pub fn load() -> Self {
            let Some(path) = settings_path() else {
                return Self::default();
            };
            let Ok(json) = std::fs::read_to_string(&path) else {
                return Self::default();
            };
            match serde_json::from_str::<EditorSettings>(&json) {
                Ok(settings) => settings.sanitized(),
                Err(e) => {
                    tracing::warn!("Ignoring malformed settings file {}: {e}", path.display());
                    Self::default()
                }
            }
        }

        /// Save settings to file
        pub fn save(&self) -> EditorResult<()> {
            let Some(path) = settings_path() else {
                return Ok(());
            };
            let settings_err = |source| EditorError::Settings {
                path: path.clone(),
                source,
            };
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir).map_err(settings_err)?;
            }
            let json = serde_json::to_string_pretty(self).map_err(EditorError::Export)?;
            std::fs::write(&path, json).map_err(settings_err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: EditorSettings =
            serde_json::from_str(r#"{"ui": {"font_size": 16.0}}"#).unwrap();
        assert_eq!(settings.ui.font_size, 16.0);
        assert_eq!(settings.ui.language, Language::English);
        assert_eq!(settings.canvas.night_brightness, NIGHT_BRIGHTNESS);
    }

    #[test]
    fn test_sanitized_clamps() {
        let mut settings = EditorSettings::default();
        settings.ui.font_size = 200.0;
        settings.canvas.night_brightness = 3.0;
        let settings = settings.sanitized();
        assert_eq!(settings.ui.font_size, 32.0);
        assert_eq!(settings.canvas.night_brightness, 1.0);
    }
}
