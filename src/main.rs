use std::fs::File;
use std::path::Path;

use log::{info, warn};
use macroquad::audio::{self, PlaySoundParams, Sound, load_sound_from_bytes};
use macroquad::prelude::*;
use simplelog::{LevelFilter, WriteLogger};
use snake_swarm::{
    Cell, Direction, FrameClock, GameConfig, Intent, JsonFileStore, Phase, SettingKey, Simulation,
    Snapshot,
};

mod tones;

const CONFIG_PATH: &str = "snake_config.json";
const LOG_PATH: &str = "snake_swarm.log";

// Palette
const BACKGROUND: Color = Color::new(0.05, 0.06, 0.08, 1.0);
const FOOD: Color = Color::new(0.95, 0.3, 0.3, 1.0);
const HUD: Color = Color::new(0.8, 0.85, 0.9, 1.0);
const DIM: Color = Color::new(0.5, 0.55, 0.6, 1.0);
const WARNING: Color = Color::new(1.0, 0.75, 0.2, 1.0);
const SNAKE_COLORS: [Color; 6] = [
    Color::new(0.3, 0.9, 0.4, 1.0),
    Color::new(0.3, 0.6, 1.0, 1.0),
    Color::new(0.95, 0.8, 0.25, 1.0),
    Color::new(0.8, 0.4, 0.95, 1.0),
    Color::new(0.25, 0.9, 0.9, 1.0),
    Color::new(1.0, 0.55, 0.25, 1.0),
];

// Key bindings, read with is_key_pressed so each press yields one intent
const BINDINGS: [(KeyCode, Intent); 17] = [
    (KeyCode::Up, Intent::Direction(Direction::Up)),
    (KeyCode::W, Intent::Direction(Direction::Up)),
    (KeyCode::Down, Intent::Direction(Direction::Down)),
    (KeyCode::S, Intent::Direction(Direction::Down)),
    (KeyCode::Left, Intent::Direction(Direction::Left)),
    (KeyCode::A, Intent::Direction(Direction::Left)),
    (KeyCode::Right, Intent::Direction(Direction::Right)),
    (KeyCode::D, Intent::Direction(Direction::Right)),
    (KeyCode::Space, Intent::TogglePause),
    (KeyCode::P, Intent::TogglePause),
    (KeyCode::R, Intent::Restart),
    (KeyCode::Tab, Intent::ToggleSettingsOpen),
    (KeyCode::Escape, Intent::CloseSettings),
    (KeyCode::Key1, Intent::ToggleSetting(SettingKey::LiveCounter)),
    (KeyCode::Key2, Intent::ToggleSetting(SettingKey::SpeedIncrease)),
    (KeyCode::Key3, Intent::ToggleSetting(SettingKey::IndependentSpeed)),
    (KeyCode::F, Intent::ToggleFullscreen),
];

fn read_intents() -> Vec<Intent> {
    BINDINGS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|(_, intent)| *intent)
        .collect()
}

fn init_logging() {
    match File::create(LOG_PATH) {
        Ok(file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Info, simplelog::Config::default(), file) {
                eprintln!("Logging disabled: {}", e);
            }
        }
        Err(e) => eprintln!("Logging disabled, cannot create {}: {}", LOG_PATH, e),
    }
}

async fn load_tone(frequency_hz: f32, duration_secs: f32, volume: f32) -> Option<Sound> {
    match load_sound_from_bytes(&tones::sine_wav(frequency_hz, duration_secs, volume)).await {
        Ok(sound) => Some(sound),
        Err(e) => {
            warn!("Sound unavailable: {}", e);
            None
        }
    }
}

fn play(sound: Option<&Sound>, volume: f32) {
    if let Some(sound) = sound {
        audio::play_sound(sound, PlaySoundParams { looped: false, volume });
    }
}

/// Pixel placement of the grid inside the window
struct Layout {
    cell: f32,
    off_x: f32,
    off_y: f32,
}

impl Layout {
    fn new(snap: &Snapshot, cell: f32) -> Self {
        let off_x = (screen_width() - cell * snap.grid.width() as f32) * 0.5;
        let off_y = (screen_height() - cell * snap.grid.height() as f32) * 0.5;
        Self { cell, off_x, off_y }
    }

    fn center_of(&self, c: Cell) -> (f32, f32) {
        (
            self.off_x + (c.x as f32 + 0.5) * self.cell,
            self.off_y + (c.y as f32 + 0.5) * self.cell,
        )
    }

    fn fill(&self, c: Cell, inset: f32, color: Color) {
        draw_rectangle(
            self.off_x + c.x as f32 * self.cell + inset,
            self.off_y + c.y as f32 * self.cell + inset,
            self.cell - inset * 2.0,
            self.cell - inset * 2.0,
            color,
        );
    }
}

fn draw_eyes(layout: &Layout, head: Cell, direction: Direction) {
    let (dx, dy) = direction.delta();
    let (dx, dy) = (dx as f32, dy as f32);
    let (cx, cy) = layout.center_of(head);
    let r = layout.cell * 0.12;
    for side in [-1.0, 1.0] {
        // forward of center, spread across the perpendicular (-dy, dx)
        let ex = cx + dx * layout.cell * 0.2 - dy * side * layout.cell * 0.2;
        let ey = cy + dy * layout.cell * 0.2 + dx * side * layout.cell * 0.2;
        draw_circle(ex, ey, r, WHITE);
        draw_circle(ex + dx * r * 0.4, ey + dy * r * 0.4, r * 0.5, BLACK);
    }
}

fn draw_centered(text: &str, y: f32, size: u16, color: Color) {
    let m = measure_text(text, None, size, 1.0);
    draw_text(text, (screen_width() - m.width) * 0.5, y, size as f32, color);
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

fn draw_settings(snap: &Snapshot, mut y: f32) {
    draw_centered("SETTINGS", y, 32, HUD);
    y += 40.0;
    draw_centered(&format!("1: Live counter [{}]", on_off(snap.live_counter)), y, 22, WHITE);
    y += 28.0;
    draw_centered(&format!("2: Speed increase [{}]", on_off(snap.speed_increase)), y, 22, WHITE);
    y += 28.0;
    let independent = if snap.speed_increase { WHITE } else { DIM };
    draw_centered(&format!("3: Independent speed [{}]", on_off(snap.independent_speed)), y, 22, independent);
    y += 36.0;
    if snap.restart_required {
        draw_centered("Speed settings changed - R to restart", y, 20, WARNING);
        y += 28.0;
    }
    draw_centered("Tab/Esc: Close", y, 18, DIM);
}

fn draw(snap: &Snapshot, cell: f32) {
    clear_background(BACKGROUND);
    let layout = Layout::new(snap, cell);

    for (i, snake) in snap.snakes.iter().enumerate() {
        let color = SNAKE_COLORS[i % SNAKE_COLORS.len()];
        for c in snake.body().iter().skip(1) {
            layout.fill(*c, 1.0, color);
        }
        layout.fill(snake.head(), 0.0, color);
        draw_eyes(&layout, snake.head(), snake.direction());
    }

    let (fx, fy) = layout.center_of(snap.food);
    draw_circle(fx, fy, cell * 0.4, FOOD);

    // HUD
    if snap.live_counter {
        draw_text(&format!("Snakes: {}", snap.snake_count()), 8.0, 20.0, 24.0, HUD);
    }
    let best = format!("Best: {}", snap.high_score);
    let m = measure_text(&best, None, 20, 1.0);
    draw_text(&best, screen_width() - m.width - 8.0, 20.0, 20.0, DIM);

    if snap.phase == Phase::Running {
        return;
    }
    draw_rectangle(0.0, 0.0, screen_width(), screen_height(), Color::new(0.0, 0.0, 0.0, 0.5));
    let y = screen_height() * 0.3;
    if snap.settings_open {
        draw_settings(snap, y);
        return;
    }
    match snap.phase {
        Phase::Paused => {
            draw_centered("PAUSED", y, 40, HUD);
            draw_centered("Space: Resume  R: Restart  Tab: Settings", y + 40.0, 20, WHITE);
        }
        Phase::GameOver => {
            draw_centered("GAME OVER", y, 40, HUD);
            let score = format!("Snakes: {}  Best: {}", snap.snake_count(), snap.high_score);
            draw_centered(&score, y + 40.0, 24, WHITE);
            draw_centered("R: Restart  Tab: Settings  Q: Quit", y + 72.0, 20, WHITE);
        }
        Phase::Running => {}
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Snake Swarm".to_owned(),
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    init_logging();
    info!("Starting Snake Swarm");

    let config = GameConfig::load(Path::new(CONFIG_PATH));
    let store = JsonFileStore::new(&config.settings_path);
    info!("Settings file {}", store.path().display());
    let grid = if screen_width() > 0.0 && screen_height() > 0.0 {
        config.grid_for_viewport(screen_width(), screen_height())
    } else {
        config.fallback_grid()
    };
    let cell = config.cell_size;
    let mut sim = Simulation::new(config, grid, store);

    let eat_sound = load_tone(880.0, 0.08, 0.6).await;
    let die_sound = load_tone(110.0, 0.25, 0.7).await;

    let mut clock = FrameClock::new();
    let mut fullscreen = false;

    loop {
        let now = get_time();
        let dt = clock.delta_ms(now);

        if is_key_pressed(KeyCode::Q) {
            break;
        }

        // minimized windows report a zero-sized viewport
        if screen_width() > 0.0 && screen_height() > 0.0 {
            sim.resize(sim.config().grid_for_viewport(screen_width(), screen_height()));
        }

        for intent in read_intents() {
            if intent == Intent::ToggleFullscreen {
                fullscreen = !fullscreen;
                set_fullscreen(fullscreen);
                continue;
            }
            sim.handle(intent, now * 1000.0);
        }

        let report = sim.update(dt);
        if report.meals > 0 {
            play(eat_sound.as_ref(), 0.35);
        }
        if report.collision.is_some() {
            play(die_sound.as_ref(), 0.6);
        }

        draw(&sim.snapshot(), cell);
        next_frame().await;
    }

    info!("Quit with high score {}", sim.settings().high_score);
}
