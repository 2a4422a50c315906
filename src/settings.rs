use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Persistent preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub live_counter: bool,
    pub speed_increase: bool,
    /// Only meaningful while speed_increase is on
    pub independent_speed: bool,
    pub high_score: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self { live_counter: false, speed_increase: true, independent_speed: true, high_score: 0 }
    }
}

/// The three user-togglable preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    LiveCounter,
    SpeedIncrease,
    IndependentSpeed,
}

impl Settings {
    /// Restores "independent speed implies speed increase"
    pub fn normalized(mut self) -> Self {
        if !self.speed_increase {
            self.independent_speed = false;
        }
        self
    }

    /// Flips one preference. Returns false when the flip was refused
    /// (independent speed cannot be enabled without speed increase).
    pub fn toggle(&mut self, key: SettingKey) -> bool {
        match key {
            SettingKey::LiveCounter => self.live_counter = !self.live_counter,
            SettingKey::SpeedIncrease => {
                self.speed_increase = !self.speed_increase;
                if !self.speed_increase {
                    self.independent_speed = false;
                }
            }
            SettingKey::IndependentSpeed => {
                if !self.speed_increase && !self.independent_speed {
                    return false;
                }
                self.independent_speed = !self.independent_speed;
            }
        }
        true
    }

    /// The values that decide how meals change speed
    pub fn speed_baseline(&self) -> (bool, bool) {
        (self.speed_increase, self.independent_speed)
    }
}

/// Durable storage for Settings
pub trait SettingsStore {
    /// Absent storage is not an error: it loads the defaults
    fn load(&self) -> Result<Settings>;
    /// Persists all fields at once
    fn save(&mut self, settings: &Settings) -> Result<()>;
}

/// Pretty JSON file next to the executable
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }
        let text = fs::read_to_string(&self.path)?;
        let settings: Settings = serde_json::from_str(&text)?;
        Ok(settings.normalized())
    }

    fn save(&mut self, settings: &Settings) -> Result<()> {
        let text = serde_json::to_string_pretty(settings)?;
        // write-then-rename so a reader never sees a half-written file
        let tmp = self.temp_path();
        fs::write(&tmp, text)?;
        fs::rename(&tmp, &self.path)?;
        debug!("Settings saved to {}", self.path.display());
        Ok(())
    }
}

/// In-memory store for headless runs and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    saved: Option<Settings>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(settings: Settings) -> Self {
        Self { saved: Some(settings), saves: 0 }
    }

    pub fn saved(&self) -> Option<Settings> {
        self.saved
    }

    /// Number of save calls so far
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Settings> {
        Ok(self.saved.unwrap_or_default().normalized())
    }

    fn save(&mut self, settings: &Settings) -> Result<()> {
        self.saved = Some(*settings);
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert!(!s.live_counter);
        assert!(s.speed_increase);
        assert!(s.independent_speed);
        assert_eq!(s.high_score, 0);
    }

    #[test]
    fn test_disabling_speed_increase_clears_independent() {
        let mut s = Settings::default();
        assert!(s.toggle(SettingKey::SpeedIncrease));
        assert!(!s.speed_increase);
        assert!(!s.independent_speed);

        // refused while speed increase is off
        assert!(!s.toggle(SettingKey::IndependentSpeed));
        assert!(!s.independent_speed);

        s.toggle(SettingKey::SpeedIncrease);
        assert!(s.toggle(SettingKey::IndependentSpeed));
        assert!(s.independent_speed);
    }

    #[test]
    fn test_live_counter_toggle() {
        let mut s = Settings::default();
        s.toggle(SettingKey::LiveCounter);
        assert!(s.live_counter);
        assert_eq!(s.speed_baseline(), Settings::default().speed_baseline());
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("settings.json"));
        assert_eq!(store.load().unwrap(), Settings::default());
        assert!(!store.path().exists());

        let s = Settings { live_counter: true, speed_increase: true, independent_speed: false, high_score: 12 };
        store.save(&s).unwrap();
        assert!(store.path().exists());
        assert_eq!(store.load().unwrap(), s);
        assert!(!dir.path().join("settings.json.tmp").exists());
    }

    #[test]
    fn test_file_store_partial_and_inconsistent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "speed_increase": false, "high_score": 4 }"#).unwrap();
        let s = JsonFileStore::new(&path).load().unwrap();
        assert!(!s.live_counter);
        assert!(!s.speed_increase);
        assert!(!s.independent_speed);
        assert_eq!(s.high_score, 4);
    }

    #[test]
    fn test_file_store_malformed_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "[1, 2").unwrap();
        assert!(JsonFileStore::new(&path).load().is_err());
    }

    #[test]
    fn test_memory_store_counts_saves() {
        let mut store = MemoryStore::new();
        store.save(&Settings::default()).unwrap();
        store.save(&Settings::default()).unwrap();
        assert_eq!(store.saves(), 2);
    }
}
