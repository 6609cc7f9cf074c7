/// A playfield position in pixels, always a multiple of the grid pitch.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    /// The neighbouring cell one pitch away in `direction`.
    pub fn step(self, direction: Direction, pitch: i32) -> Cell {
        match direction {
            Direction::Up => Cell { x: self.x, y: self.y - pitch },
            Direction::Down => Cell { x: self.x, y: self.y + pitch },
            Direction::Left => Cell { x: self.x - pitch, y: self.y },
            Direction::Right => Cell { x: self.x + pitch, y: self.y },
        }
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Order in which held keys are considered when several are down at once.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}
