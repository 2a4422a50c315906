use log::{debug, error, info, warn};
use rand::Rng;
use rand::rngs::ThreadRng;

use crate::collision::{Collision, find_collision};
use crate::config::GameConfig;
use crate::food::spawn_food;
use crate::grid::{Cell, Direction, Grid};
use crate::input::{DirectionThrottle, Intent};
use crate::session::Session;
use crate::settings::{SettingKey, Settings, SettingsStore};
use crate::snake::Snake;
use crate::snapshot::Snapshot;
use crate::speed::SpeedPolicy;

/// What happened during one call to `Simulation::update`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    /// Discrete steps taken, summed over all snakes
    pub steps: usize,
    /// Food items eaten
    pub meals: usize,
    /// Set when this frame ended the game
    pub collision: Option<Collision>,
}

/// The whole game state: snakes, food, shared heading, session and settings.
///
/// Everything mutates through this one context, driven by the frame loop:
/// `handle` for player intents, `update` once per frame, `resize` when the
/// viewport changes, `snapshot` for drawing.
pub struct Simulation<S, R = ThreadRng> {
    config: GameConfig,
    grid: Grid,
    snakes: Vec<Snake>,
    food: Cell,
    heading: Direction,
    session: Session,
    settings: Settings,
    throttle: DirectionThrottle,
    store: S,
    rng: R,
}

impl<S: SettingsStore> Simulation<S, ThreadRng> {
    pub fn new(config: GameConfig, grid: Grid, store: S) -> Self {
        Self::with_rng(config, grid, store, rand::thread_rng())
    }
}

impl<S: SettingsStore, R: Rng> Simulation<S, R> {
    /// Loads settings from `store` (defaults if unreadable) and starts a game
    pub fn with_rng(config: GameConfig, grid: Grid, store: S, mut rng: R) -> Self {
        let settings = match store.load() {
            Ok(settings) => settings.normalized(),
            Err(e) => {
                warn!("Could not load settings, using defaults: {}", e);
                Settings::default()
            }
        };
        let food = spawn_food(grid, None, &mut rng);
        let mut sim = Self {
            throttle: DirectionThrottle::new(config.direction_debounce_ms),
            config,
            grid,
            snakes: Vec::new(),
            food,
            heading: Direction::Right,
            session: Session::new(),
            settings,
            store,
            rng,
        };
        sim.fresh_round();
        info!(
            "Game started on {}x{} grid, high score {}",
            grid.width(),
            grid.height(),
            sim.settings.high_score
        );
        sim
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn snakes(&self) -> &[Snake] {
        &self.snakes
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replaces the snakes and food with a prepared layout. Not used by the
    /// game loop; this is the hook for tests and scripted tooling.
    /// Coordinates are wrapped onto the grid; the shared heading follows the
    /// first snake.
    pub fn arrange(&mut self, snakes: Vec<Snake>, food: Cell) {
        if snakes.is_empty() {
            return;
        }
        self.snakes = snakes;
        for snake in self.snakes.iter_mut() {
            snake.rewrap(self.grid);
        }
        self.heading = self.snakes[0].direction();
        self.food = self.grid.wrap(food);
    }

    /// Moves the food, wrapped onto the grid. Hook for tests and scripted
    /// tooling, like `arrange`.
    pub fn place_food(&mut self, cell: Cell) {
        self.food = self.grid.wrap(cell);
    }

    fn fresh_round(&mut self) {
        self.heading = Direction::Right;
        self.snakes = vec![Snake::new(
            self.grid.center(),
            self.heading,
            self.config.initial_length,
            self.grid,
            self.config.base_interval_ms,
        )];
        self.food = spawn_food(self.grid, None, &mut self.rng);
        self.session.reset();
        self.throttle.reset();
    }

    /// Applies one player intent. Returns true if it changed anything.
    pub fn handle(&mut self, intent: Intent, now_ms: f64) -> bool {
        match intent {
            Intent::Direction(direction) => self.steer(direction, now_ms),
            Intent::TogglePause => {
                let changed = self.session.toggle_pause(&self.settings);
                if changed {
                    info!("Session {:?}", self.session.phase());
                }
                changed
            }
            Intent::Restart => self.restart(),
            Intent::ToggleSettingsOpen => self.session.toggle_settings(),
            Intent::CloseSettings => self.session.close_settings(),
            Intent::ToggleSetting(key) => self.toggle_setting(key),
            Intent::ToggleFullscreen => false,
        }
    }

    /// Broadcasts a new heading to every snake. Dropped when not Running,
    /// when it reverses the lead snake, or when inside the debounce window.
    pub fn steer(&mut self, direction: Direction, now_ms: f64) -> bool {
        if !self.session.is_running() {
            return false;
        }
        if direction.is_opposite(self.snakes[0].direction()) {
            return false;
        }
        if !self.throttle.is_open(now_ms) {
            return false;
        }
        self.throttle.record(now_ms);
        self.heading = direction;
        for snake in self.snakes.iter_mut() {
            snake.set_direction(direction);
        }
        true
    }

    /// Starts a new game from Paused or GameOver. The high score survives.
    pub fn restart(&mut self) -> bool {
        if !self.session.can_restart() {
            return false;
        }
        self.fresh_round();
        info!("Game restarted");
        true
    }

    fn toggle_setting(&mut self, key: SettingKey) -> bool {
        if !self.session.settings_open() {
            return false;
        }
        if !self.settings.toggle(key) {
            return false;
        }
        self.persist();
        self.session.settings_changed(&self.settings);
        true
    }

    /// Advances the game by one frame: every snake that existed at frame
    /// start feeds `delta_ms` into its own timer and steps if due, then a
    /// single collision check runs over the result. Frozen outside Running,
    /// timers included.
    pub fn update(&mut self, delta_ms: f64) -> FrameReport {
        let mut report = FrameReport::default();
        if !self.session.is_running() {
            return report;
        }

        let count = self.snakes.len();
        for i in 0..count {
            if self.snakes[i].timer_mut().advance(delta_ms) {
                report.steps += 1;
                if self.step_snake(i) {
                    report.meals += 1;
                }
            }
        }

        if let Some(hit) = find_collision(&self.snakes) {
            self.end_game(hit);
            report.collision = Some(hit);
        }
        report
    }

    /// One discrete step of one snake. Returns true if it ate.
    fn step_snake(&mut self, index: usize) -> bool {
        let head = self.snakes[index].push_head(self.heading, self.grid);
        let ate = head == self.food;
        if ate {
            self.feed(index);
        }
        self.snakes[index].settle_tail();
        ate
    }

    fn feed(&mut self, eater: usize) {
        self.food = spawn_food(self.grid, Some(self.food), &mut self.rng);
        self.snakes[eater].grow();

        // the newborn is pushed before speed scaling but excluded from it
        let born = self.snakes.len();
        let head = self.grid.random_cell(&mut self.rng);
        let direction = self.snakes[eater].direction();
        self.snakes.push(Snake::new(
            head,
            direction,
            self.config.initial_length,
            self.grid,
            self.config.base_interval_ms,
        ));
        debug!("Snake {} ate, spawned snake {} at {:?}", eater, born, head);

        SpeedPolicy::from_settings(&self.settings).apply(
            &mut self.snakes[..born],
            eater,
            self.config.speed_decrement_ms,
            self.config.min_interval_ms,
        );
    }

    fn end_game(&mut self, hit: Collision) {
        self.session.end_game();
        let count = self.snakes.len() as u32;
        info!("Game over: snake {} hit {:?} at {:?} with {} snakes", hit.snake, hit.kind, hit.cell, count);
        if count > self.settings.high_score {
            self.settings.high_score = count;
            info!("New high score {}", count);
            self.persist();
        }
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.settings) {
            error!("Could not save settings: {}", e);
        }
    }

    /// Moves everything onto a new grid. The lead snake is re-wrapped in
    /// place; the others are relocated at random with length and direction
    /// kept. Food is redrawn if it fell outside.
    pub fn resize(&mut self, grid: Grid) {
        if grid == self.grid {
            return;
        }
        self.grid = grid;
        if let Some((lead, rest)) = self.snakes.split_first_mut() {
            lead.rewrap(grid);
            for snake in rest {
                let head = grid.random_cell(&mut self.rng);
                snake.relocate(head, grid);
            }
        }
        if !grid.contains(self.food) {
            self.food = spawn_food(grid, None, &mut self.rng);
        }
        info!("Grid resized to {}x{}", grid.width(), grid.height());
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: self.grid,
            snakes: &self.snakes,
            food: self.food,
            phase: self.session.phase(),
            settings_open: self.session.settings_open(),
            live_counter: self.settings.live_counter,
            speed_increase: self.settings.speed_increase,
            independent_speed: self.settings.independent_speed,
            high_score: self.settings.high_score,
            restart_required: self.session.restart_required(),
        }
    }
}
