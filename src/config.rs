use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::keybindings::PageAction;

/// Frame interval used when settings.json does not say otherwise (~30 fps)
pub const DEFAULT_TICK_RATE_MS: u64 = 33;

fn default_tick_rate_ms() -> u64 {
    DEFAULT_TICK_RATE_MS
}

fn default_particle_count() -> usize {
    40
}

fn default_true() -> bool {
    true
}

/// Application settings (~/.portfolio/settings.json)
///
/// User preferences chosen inside the page (language, palette) are not kept
/// here; they live in the preference store next to this file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Animation frame interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Number of backdrop particles (0 disables the backdrop)
    #[serde(default = "default_particle_count")]
    pub particle_count: usize,
    /// Draw the trailing cursor effect under the mouse pointer
    #[serde(default = "default_true")]
    pub cursor_effect: bool,
    /// Key overrides: action -> list of key strings
    /// Example: {"scroll_down": ["j", "Down"]}
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub keybindings: HashMap<PageAction, Vec<String>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            particle_count: default_particle_count(),
            cursor_effect: true,
            keybindings: HashMap::new(),
        }
    }
}

impl Settings {
    /// Returns the config directory path (~/.portfolio)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".portfolio"))
    }

    /// Returns the preference store path (~/.portfolio/preferences.json)
    pub fn preferences_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("preferences.json"))
    }

    /// Returns the debug log directory (~/.portfolio/debug)
    pub fn debug_dir() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("debug"))
    }

    /// Loads settings from the config file, returns default if not found or invalid
    pub fn load() -> Self {
        match Self::config_dir() {
            Some(dir) => Self::load_from(&dir).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "settings.json unusable, using defaults");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Loads settings from `dir/settings.json`, writing defaults first if the file is missing
    pub fn load_from(dir: &Path) -> Result<Self> {
        let path = dir.join("settings.json");
        if !path.exists() {
            let defaults = Self::default();
            defaults.save_to(dir)?;
            return Ok(defaults);
        }

        let content = fs::read_to_string(&path)?;
        let settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    /// Writes `settings.json` into `dir` using atomic write pattern
    pub fn save_to(&self, dir: &Path) -> Result<()> {
        ensure_private_dir(dir)?;

        let config_path = dir.join("settings.json");
        let temp_path = dir.join("settings.json.tmp");
        let content = serde_json::to_string_pretty(self)?;

        // Atomic write: write to temp file first, then rename
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, &config_path)?;

        Ok(())
    }
}

/// Creates `dir` if needed, user-only on Unix
pub fn ensure_private_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = fs::Permissions::from_mode(0o700);
            let _ = fs::set_permissions(dir, perms);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PortfolioError;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.tick_rate_ms, DEFAULT_TICK_RATE_MS);
        assert_eq!(settings.particle_count, 40);
        assert!(settings.cursor_effect);
        assert!(settings.keybindings.is_empty());
    }

    #[test]
    fn test_parse_partial_json() {
        let json = r#"{"particle_count": 5}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.particle_count, 5);
        assert_eq!(settings.tick_rate_ms, DEFAULT_TICK_RATE_MS);
        assert!(settings.cursor_effect);
    }

    #[test]
    fn test_parse_keybinding_overrides() {
        let json = r#"{"keybindings": {"scroll_down": ["n"]}}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(
            settings.keybindings.get(&PageAction::ScrollDown),
            Some(&vec!["n".to_string()])
        );
    }

    #[test]
    fn test_load_from_creates_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(dir.path()).unwrap();
        assert_eq!(settings.tick_rate_ms, DEFAULT_TICK_RATE_MS);
        assert!(dir.path().join("settings.json").exists());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            particle_count: 7,
            cursor_effect: false,
            ..Settings::default()
        };
        settings.save_to(dir.path()).unwrap();
        assert!(!dir.path().join("settings.json.tmp").exists());

        let reloaded = Settings::load_from(dir.path()).unwrap();
        assert_eq!(reloaded.particle_count, 7);
        assert!(!reloaded.cursor_effect);
    }

    #[test]
    fn test_invalid_json_is_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("settings.json"), "{not json").unwrap();
        assert!(matches!(
            Settings::load_from(dir.path()),
            Err(PortfolioError::Json(_))
        ));
    }
}
