use log::debug;

use crate::settings::Settings;
use crate::snake::Snake;

/// How a meal changes movement intervals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedPolicy {
    /// Speed never changes
    Constant,
    /// Every snake speeds up when any snake eats
    Global,
    /// Only the snake that ate speeds up
    PerSnake,
}

impl SpeedPolicy {
    pub fn from_settings(settings: &Settings) -> Self {
        match (settings.speed_increase, settings.independent_speed) {
            (false, _) => SpeedPolicy::Constant,
            (true, false) => SpeedPolicy::Global,
            (true, true) => SpeedPolicy::PerSnake,
        }
    }

    /// Applies one meal by `snakes[eater]`. The caller passes only the snakes
    /// that existed before the meal, so a snake born from it keeps the base
    /// interval.
    pub fn apply(self, snakes: &mut [Snake], eater: usize, decrement_ms: f64, floor_ms: f64) {
        match self {
            SpeedPolicy::Constant => {}
            SpeedPolicy::PerSnake => {
                if let Some(snake) = snakes.get_mut(eater) {
                    snake.timer_mut().speed_up(decrement_ms, floor_ms);
                    debug!("Snake {} interval now {}ms", eater, snake.timer().interval_ms());
                }
            }
            SpeedPolicy::Global => {
                for snake in snakes.iter_mut() {
                    snake.timer_mut().speed_up(decrement_ms, floor_ms);
                }
                debug!("All {} snakes sped up", snakes.len());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Cell, Direction, Grid};

    fn snakes(n: usize) -> Vec<Snake> {
        (0..n)
            .map(|i| Snake::new(Cell::new(2, i as i32 * 2), Direction::Right, 3, Grid::new(20, 20), 100.0))
            .collect()
    }

    fn intervals(snakes: &[Snake]) -> Vec<f64> {
        snakes.iter().map(|s| s.timer().interval_ms()).collect()
    }

    #[test]
    fn test_policy_from_settings() {
        let mut s = Settings::default();
        assert_eq!(SpeedPolicy::from_settings(&s), SpeedPolicy::PerSnake);
        s.independent_speed = false;
        assert_eq!(SpeedPolicy::from_settings(&s), SpeedPolicy::Global);
        s.speed_increase = false;
        assert_eq!(SpeedPolicy::from_settings(&s), SpeedPolicy::Constant);
    }

    #[test]
    fn test_constant() {
        let mut pool = snakes(3);
        SpeedPolicy::Constant.apply(&mut pool, 1, 10.0, 50.0);
        assert_eq!(intervals(&pool), vec![100.0, 100.0, 100.0]);
    }

    #[test]
    fn test_per_snake() {
        let mut pool = snakes(3);
        SpeedPolicy::PerSnake.apply(&mut pool, 1, 10.0, 50.0);
        assert_eq!(intervals(&pool), vec![100.0, 90.0, 100.0]);
    }

    #[test]
    fn test_global_skips_newborn() {
        let mut pool = snakes(3);
        let born = pool.len() - 1;
        SpeedPolicy::Global.apply(&mut pool[..born], 0, 30.0, 50.0);
        SpeedPolicy::Global.apply(&mut pool[..born], 0, 30.0, 50.0);
        assert_eq!(intervals(&pool), vec![50.0, 50.0, 100.0]);
    }
}
