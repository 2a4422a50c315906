use std::fs;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grid::Grid;
use crate::snake::MIN_LENGTH;

/// Tunable constants of the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Pixels per grid cell, used to derive the grid from the viewport
    pub cell_size: f32,
    /// Grid used before the viewport is known and in headless runs
    pub fallback_width: i32,
    pub fallback_height: i32,
    /// Length of every freshly created snake
    pub initial_length: usize,
    /// Movement interval every snake starts with
    pub base_interval_ms: f64,
    /// How much one meal shortens an interval
    pub speed_decrement_ms: f64,
    /// Floor for any interval
    pub min_interval_ms: f64,
    /// Minimum gap between two accepted direction changes
    pub direction_debounce_ms: f64,
    pub settings_path: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell_size: 20.0,
            fallback_width: 40,
            fallback_height: 30,
            initial_length: MIN_LENGTH,
            base_interval_ms: 150.0,
            speed_decrement_ms: 5.0,
            min_interval_ms: 50.0,
            direction_debounce_ms: 60.0,
            settings_path: "snake_settings.json".to_string(),
        }
    }
}

impl GameConfig {
    /// Reads a JSON config file. A missing file gives the defaults; a broken
    /// one is reported and also gives the defaults.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::read(path) {
            Ok(config) => config.sanitized(),
            Err(e) => {
                warn!("Ignoring config file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Pulls out-of-range values back into something playable
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.cell_size.is_nan() || self.cell_size <= 0.0 {
            self.cell_size = defaults.cell_size;
        }
        self.fallback_width = self.fallback_width.max(MIN_LENGTH as i32);
        self.fallback_height = self.fallback_height.max(MIN_LENGTH as i32);
        self.initial_length = self.initial_length.max(MIN_LENGTH);
        if self.base_interval_ms.is_nan() || self.base_interval_ms <= 0.0 {
            self.base_interval_ms = defaults.base_interval_ms;
        }
        self.speed_decrement_ms = self.speed_decrement_ms.max(0.0);
        self.min_interval_ms = self.min_interval_ms.clamp(0.0, self.base_interval_ms);
        self.direction_debounce_ms = self.direction_debounce_ms.max(0.0);
        self
    }

    pub fn fallback_grid(&self) -> Grid {
        Grid::new(self.fallback_width, self.fallback_height)
    }

    /// Grid that fits in a viewport of the given pixel size. Each side is at
    /// least MIN_LENGTH cells so a fresh snake never overlaps itself.
    pub fn grid_for_viewport(&self, width_px: f32, height_px: f32) -> Grid {
        let min = MIN_LENGTH as i32;
        Grid::new(
            ((width_px / self.cell_size).floor() as i32).max(min),
            ((height_px / self.cell_size).floor() as i32).max(min),
        )
    }
}
