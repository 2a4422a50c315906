use crate::grid::Direction;
use crate::settings::SettingKey;

/// Discrete player intents, one per physical input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Direction(Direction),
    TogglePause,
    Restart,
    ToggleSettingsOpen,
    CloseSettings,
    ToggleSetting(SettingKey),
    /// Handled by the window layer; the simulation ignores it
    ToggleFullscreen,
}

/// Rejects direction changes that arrive too soon after the last accepted one
#[derive(Debug, Clone, Copy)]
pub struct DirectionThrottle {
    min_gap_ms: f64,
    last_accepted_ms: Option<f64>,
}

impl DirectionThrottle {
    pub fn new(min_gap_ms: f64) -> Self {
        Self { min_gap_ms, last_accepted_ms: None }
    }

    pub fn is_open(&self, now_ms: f64) -> bool {
        match self.last_accepted_ms {
            Some(last) => now_ms - last >= self.min_gap_ms,
            None => true,
        }
    }

    pub fn record(&mut self, now_ms: f64) {
        self.last_accepted_ms = Some(now_ms);
    }

    pub fn reset(&mut self) {
        self.last_accepted_ms = None;
    }
}
