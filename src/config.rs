use configparser::ini::Ini;
use log::{info, warn};
use once_cell::sync::Lazy;
use std::fs;
use std::path::Path;
use std::sync::Mutex;

const SETTINGS_DIR: &str = "save";
const SETTINGS_INI_PATH: &str = "save/settings.ini";

#[derive(Debug, Clone)]
pub struct Settings {
    /// Outward note speed in pixels per second.
    pub note_speed: f32,
    /// Fixed sleep between frames, in milliseconds.
    pub frame_interval_ms: u64,
    /// Optional path to a JSON song catalog; the built-in catalog is used
    /// when absent.
    pub catalog_path: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            note_speed: 100.0,
            frame_interval_ms: 10,
            catalog_path: None,
        }
    }
}

static SETTINGS: Lazy<Mutex<Settings>> = Lazy::new(|| Mutex::new(Settings::default()));

/// Creates the default settings file if it doesn't exist.
fn create_default_files() -> Result<(), std::io::Error> {
    info!("Settings file not found, creating defaults in '{}'.", SETTINGS_DIR);
    fs::create_dir_all(SETTINGS_DIR)?;

    if !Path::new(SETTINGS_INI_PATH).exists() {
        let defaults = Settings::default();
        let mut conf = Ini::new();
        conf.set("gameplay", "NoteSpeed", Some(format!("{}", defaults.note_speed)));
        conf.set("gameplay", "FrameIntervalMs", Some(format!("{}", defaults.frame_interval_ms)));
        conf.set("songs", "CatalogPath", Some("".to_string()));
        conf.write(SETTINGS_INI_PATH)?;
    }

    Ok(())
}

pub fn load() {
    if !Path::new(SETTINGS_INI_PATH).exists() {
        if let Err(e) = create_default_files() {
            warn!("Failed to create default settings file: {}", e);
            // Proceed with default struct values.
            return;
        }
    }

    let mut settings = SETTINGS.lock().unwrap();
    let defaults = Settings::default();

    let mut conf = Ini::new();
    if conf.load(SETTINGS_INI_PATH).is_ok() {
        settings.note_speed = conf
            .get("gameplay", "NoteSpeed")
            .and_then(|v| v.parse::<f32>().ok())
            .filter(|v| v.is_finite() && *v > 0.0)
            .unwrap_or(defaults.note_speed);
        settings.frame_interval_ms = conf
            .get("gameplay", "FrameIntervalMs")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(defaults.frame_interval_ms);
        settings.catalog_path = conf.get("songs", "CatalogPath").filter(|v| !v.is_empty());
    } else {
        warn!("Failed to load '{}', using default settings.", SETTINGS_INI_PATH);
    }
}

/// Returns a copy of the currently loaded settings.
pub fn get() -> Settings {
    SETTINGS.lock().unwrap().clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.note_speed, 100.0);
        assert_eq!(settings.frame_interval_ms, 10);
        assert!(settings.catalog_path.is_none());
    }
}
