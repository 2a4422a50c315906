use crate::grid::{Cell, Grid};
use crate::session::Phase;
use crate::snake::Snake;

/// Read-only view handed to the renderer each frame
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub grid: Grid,
    pub snakes: &'a [Snake],
    pub food: Cell,
    pub phase: Phase,
    pub settings_open: bool,
    pub live_counter: bool,
    pub speed_increase: bool,
    pub independent_speed: bool,
    pub high_score: u32,
    /// Speed settings changed during this pause; takes effect cleanly after a restart
    pub restart_required: bool,
}

impl Snapshot<'_> {
    pub fn snake_count(&self) -> usize {
        self.snakes.len()
    }
}
