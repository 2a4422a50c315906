use crate::clock::MoveTimer;
use crate::grid::{Cell, Direction, Grid};

/// Shortest body a snake is ever created with
pub const MIN_LENGTH: usize = 3;

/// One snake entity. Body head is at index 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: Vec<Cell>,
    direction: Direction,
    growing: bool,
    timer: MoveTimer,
}

impl Snake {
    /// Lays the body out behind `head`, opposite to `direction`, wrapped
    /// onto the grid. Lengths below MIN_LENGTH are raised to it.
    pub fn new(head: Cell, direction: Direction, length: usize, grid: Grid, interval_ms: f64) -> Self {
        let length = length.max(MIN_LENGTH);
        let back = direction.opposite();
        let mut body = Vec::with_capacity(length);
        let mut c = grid.wrap(head);
        body.push(c);
        for _ in 1..length {
            c = grid.step(c, back);
            body.push(c);
        }
        Self { body, direction, growing: false, timer: MoveTimer::new(interval_ms) }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Never true: bodies start at MIN_LENGTH and only grow
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn is_growing(&self) -> bool {
        self.growing
    }

    pub fn timer(&self) -> &MoveTimer {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut MoveTimer {
        &mut self.timer
    }

    /// First half of a step: adopts the shared heading and pushes the new
    /// wrapped head. Returns the new head.
    pub fn push_head(&mut self, heading: Direction, grid: Grid) -> Cell {
        self.direction = heading;
        let new_head = grid.step(self.head(), heading);
        self.body.insert(0, new_head);
        new_head
    }

    /// Marks the snake to keep its tail on this step
    pub fn grow(&mut self) {
        self.growing = true;
    }

    /// Second half of a step: drops the tail unless growth is pending, in
    /// which case the flag is consumed instead.
    pub fn settle_tail(&mut self) {
        if self.growing {
            self.growing = false;
        } else {
            self.body.pop();
        }
    }

    /// Re-wraps every segment onto a (possibly resized) grid
    pub fn rewrap(&mut self, grid: Grid) {
        for c in self.body.iter_mut() {
            *c = grid.wrap(*c);
        }
    }

    /// Moves the whole body to a new head, keeping length, heading, growth
    /// and timer state
    pub fn relocate(&mut self, head: Cell, grid: Grid) {
        let back = self.direction.opposite();
        let mut c = grid.wrap(head);
        for seg in self.body.iter_mut() {
            *seg = c;
            c = grid.step(c, back);
        }
    }
}
