use std::collections::HashMap;

use crate::grid::Cell;
use crate::snake::Snake;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// Head ran into its own body
    Own,
    /// Head ran into another snake, head or body
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collision {
    /// Index of the snake whose head collided
    pub snake: usize,
    pub cell: Cell,
    pub kind: CollisionKind,
}

/// Finds the first head that shares its cell with any other segment of any
/// snake. A head never matches itself, but does match the rest of its own body.
///
/// Every segment is counted once, so a head collides exactly when its cell
/// holds two or more segments.
pub fn find_collision(snakes: &[Snake]) -> Option<Collision> {
    let mut occupancy: HashMap<Cell, u32> = HashMap::new();
    for snake in snakes {
        for c in snake.body() {
            *occupancy.entry(*c).or_insert(0) += 1;
        }
    }

    snakes.iter().enumerate().find_map(|(i, snake)| {
        let head = snake.head();
        if occupancy.get(&head).copied().unwrap_or(0) < 2 {
            return None;
        }
        let kind = if snake.body()[1..].contains(&head) {
            CollisionKind::Own
        } else {
            CollisionKind::Other
        };
        Some(Collision { snake: i, cell: head, kind })
    })
}
