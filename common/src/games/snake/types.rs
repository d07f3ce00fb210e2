use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn manhattan_distance(&self, other: Point) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        self.opposite() == *other
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSize {
    pub width: usize,
    pub height: usize,
}

impl FieldSize {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    pub fn cell_count(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Neighbouring cell in `direction`, or `None` when it would leave the field.
    pub fn step(&self, from: Point, direction: Direction) -> Option<Point> {
        match direction {
            Direction::Up if from.y > 0 => Some(Point::new(from.x, from.y - 1)),
            Direction::Down if from.y + 1 < self.height => Some(Point::new(from.x, from.y + 1)),
            Direction::Left if from.x > 0 => Some(Point::new(from.x - 1, from.y)),
            Direction::Right if from.x + 1 < self.width => Some(Point::new(from.x + 1, from.y)),
            _ => None,
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Point::new(x, y)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Idle,
    Running,
    Paused,
    Over,
    Won,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEndReason {
    WallCollision,
    SelfCollision,
    BoardFilled,
}

/// Result of a single `advance` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Skipped,
    Moved,
    Ate,
    Ended(GameEndReason),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposites() {
        assert!(Direction::Up.is_opposite(&Direction::Down));
        assert!(Direction::Left.is_opposite(&Direction::Right));
        assert!(!Direction::Up.is_opposite(&Direction::Left));
        assert!(!Direction::Up.is_opposite(&Direction::Up));
    }

    #[test]
    fn test_step_stops_at_edges() {
        let field = FieldSize::square(3);
        assert_eq!(field.step(Point::new(0, 0), Direction::Up), None);
        assert_eq!(field.step(Point::new(0, 0), Direction::Left), None);
        assert_eq!(field.step(Point::new(2, 2), Direction::Down), None);
        assert_eq!(field.step(Point::new(2, 2), Direction::Right), None);
        assert_eq!(field.step(Point::new(1, 1), Direction::Up), Some(Point::new(1, 0)));
        assert_eq!(field.step(Point::new(1, 1), Direction::Right), Some(Point::new(2, 1)));
    }

    #[test]
    fn test_cells_covers_field() {
        let field = FieldSize::new(4, 3);
        let cells: Vec<Point> = field.cells().collect();
        assert_eq!(cells.len(), 12);
        assert!(cells.iter().all(|p| field.contains(*p)));
    }
}
