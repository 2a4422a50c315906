//! Snake Swarm - one shared heading steering a growing population of snakes
//!
//! The library holds the whole simulation core with no window or input
//! dependencies:
//! - Toroidal grid and wrapping (grid)
//! - Per-snake movement timers and the frame clock (clock)
//! - Snake entities, food, collisions and speed scaling
//! - Persisted settings and the pause/settings session state machine
//! - The simulation context that ties them together (simulation)
//!
//! The binary in `main.rs` is a thin macroquad front end over it.

pub mod clock;
pub mod collision;
pub mod config;
pub mod error;
pub mod food;
pub mod grid;
pub mod input;
pub mod session;
pub mod settings;
pub mod simulation;
pub mod snake;
pub mod snapshot;
pub mod speed;

pub use clock::{FrameClock, MoveTimer};
pub use collision::{Collision, CollisionKind};
pub use config::GameConfig;
pub use error::{Error, Result};
pub use grid::{Cell, Direction, Grid};
pub use input::{DirectionThrottle, Intent};
pub use session::{Phase, Session};
pub use settings::{JsonFileStore, MemoryStore, SettingKey, Settings, SettingsStore};
pub use simulation::{FrameReport, Simulation};
pub use snake::Snake;
pub use snapshot::Snapshot;
pub use speed::SpeedPolicy;
