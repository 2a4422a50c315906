use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Paused,
    GameOver,
}

/// Pause / game-over / settings modal state.
///
/// `settings_open` is only ever true outside Running. While Paused the speed
/// settings seen at pause time are kept as a baseline, and `restart_required`
/// tells whether the live settings have drifted from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    phase: Phase,
    settings_open: bool,
    baseline: Option<(bool, bool)>,
    restart_required: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self { phase: Phase::Running, settings_open: false, baseline: None, restart_required: false }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn settings_open(&self) -> bool {
        self.settings_open
    }

    pub fn restart_required(&self) -> bool {
        self.restart_required
    }

    /// Running <-> Paused. Ignored in GameOver. Returns true if the phase changed.
    pub fn toggle_pause(&mut self, settings: &Settings) -> bool {
        match self.phase {
            Phase::Running => {
                self.phase = Phase::Paused;
                self.baseline = Some(settings.speed_baseline());
                self.restart_required = false;
                true
            }
            Phase::Paused => {
                self.phase = Phase::Running;
                self.settings_open = false;
                self.baseline = None;
                self.restart_required = false;
                true
            }
            Phase::GameOver => false,
        }
    }

    pub fn end_game(&mut self) {
        self.phase = Phase::GameOver;
    }

    pub fn can_restart(&self) -> bool {
        self.phase != Phase::Running
    }

    /// Back to a fresh Running session
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Opens or closes the settings view. Refused while Running.
    pub fn toggle_settings(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.settings_open = !self.settings_open;
        true
    }

    pub fn close_settings(&mut self) -> bool {
        if self.is_running() || !self.settings_open {
            return false;
        }
        self.settings_open = false;
        true
    }

    /// Recomputes the restart warning after a settings change
    pub fn settings_changed(&mut self, settings: &Settings) {
        if self.phase != Phase::Paused {
            return;
        }
        self.restart_required = self.baseline.is_some_and(|b| b != settings.speed_baseline());
    }
}
