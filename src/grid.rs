use rand::Rng;

/// Direction a snake can move in
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit delta (dx, dy) for one step, y grows downwards
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True if turning from self to other is a 180-degree turn
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// A grid position. Also used as a raw (unwrapped) offset before wrapping.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Neighbour in the given direction, not wrapped
    pub fn moved(self, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell { x: self.x + dx, y: self.y + dy }
    }
}

/// Toroidal grid: opposite edges are adjacent
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    /// Dimensions below 1 are raised to 1
    pub fn new(width: i32, height: i32) -> Self {
        Self { width: width.max(1), height: height.max(1) }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn center(&self) -> Cell {
        Cell { x: self.width / 2, y: self.height / 2 }
    }

    pub fn contains(&self, c: Cell) -> bool {
        c.x >= 0 && c.y >= 0 && c.x < self.width && c.y < self.height
    }

    /// Canonical in-bounds form of any cell. Uses euclidean remainder so
    /// negative coordinates wrap to the far edge.
    pub fn wrap(&self, c: Cell) -> Cell {
        Cell { x: c.x.rem_euclid(self.width), y: c.y.rem_euclid(self.height) }
    }

    /// One wrapped step from `c` in `direction`
    pub fn step(&self, c: Cell, direction: Direction) -> Cell {
        self.wrap(c.moved(direction))
    }

    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        Cell { x: rng.gen_range(0..self.width), y: rng.gen_range(0..self.height) }
    }
}
