use std::collections::{HashSet, VecDeque};

use super::types::{Direction, FieldSize, Point};

/// Snake body, head first. `body_set` mirrors `body` for occupancy checks.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    body_set: HashSet<Point>,
}

impl Snake {
    /// Builds a snake of `length` cells with its head at `start_pos`, the rest
    /// trailing behind so the first move in `direction` is legal. Segments that
    /// would fall off the field are not added.
    pub fn new(
        start_pos: Point,
        direction: Direction,
        length: usize,
        field_size: &FieldSize,
    ) -> Self {
        let capacity = length.clamp(1, field_size.cell_count().max(1));
        let mut body = VecDeque::with_capacity(capacity);
        let mut body_set = HashSet::with_capacity(capacity);

        body.push_back(start_pos);
        body_set.insert(start_pos);

        let behind = direction.opposite();
        let mut segment = start_pos;
        for _ in 1..length {
            match field_size.step(segment, behind) {
                Some(next) => {
                    segment = next;
                    body.push_back(segment);
                    body_set.insert(segment);
                }
                None => break,
            }
        }

        Self { body, body_set }
    }

    #[cfg(test)]
    pub(crate) fn from_cells(cells: &[Point]) -> Self {
        let body: VecDeque<Point> = cells.iter().copied().collect();
        let body_set = body.iter().copied().collect();
        Self { body, body_set }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.body_set.contains(point)
    }

    /// Whether moving the head onto `point` hits the body. The tail cell is
    /// free unless the snake grows on this move.
    pub fn collides_with(&self, point: &Point, growing: bool) -> bool {
        self.contains(point) && (growing || *point != self.tail())
    }

    pub fn body(&self) -> impl Iterator<Item = &Point> {
        self.body.iter()
    }

    pub(super) fn push_head(&mut self, point: Point) {
        self.body.push_front(point);
        self.body_set.insert(point);
    }

    pub(super) fn pop_tail(&mut self) {
        if self.body.len() <= 1 {
            return;
        }
        // After chasing its own tail the new head sits on the popped cell.
        if let Some(tail) = self.body.pop_back()
            && tail != self.head()
        {
            self.body_set.remove(&tail);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_single_cell() {
        let snake = Snake::new(Point::new(10, 10), Direction::Right, 1, &FieldSize::square(20));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), snake.tail());
    }

    #[test]
    fn test_new_trails_behind_direction() {
        let snake = Snake::new(Point::new(10, 10), Direction::Right, 3, &FieldSize::square(20));
        let body: Vec<Point> = snake.body().copied().collect();
        assert_eq!(
            body,
            vec![Point::new(10, 10), Point::new(9, 10), Point::new(8, 10)]
        );
    }

    #[test]
    fn test_new_truncates_at_wall() {
        let snake = Snake::new(Point::new(1, 0), Direction::Right, 5, &FieldSize::square(20));
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.tail(), Point::new(0, 0));
    }

    #[test]
    fn test_tail_is_free_unless_growing() {
        let snake = Snake::from_cells(&[
            Point::new(2, 1),
            Point::new(1, 1),
            Point::new(1, 2),
            Point::new(2, 2),
        ]);
        let tail = Point::new(2, 2);
        assert!(!snake.collides_with(&tail, false));
        assert!(snake.collides_with(&tail, true));
        assert!(snake.collides_with(&Point::new(1, 1), false));
    }

    #[test]
    fn test_push_and_pop_keep_set_in_sync() {
        let mut snake = Snake::from_cells(&[Point::new(1, 1), Point::new(0, 1)]);
        snake.push_head(Point::new(2, 1));
        snake.pop_tail();
        assert_eq!(snake.len(), 2);
        assert!(!snake.contains(&Point::new(0, 1)));
        assert!(snake.contains(&Point::new(2, 1)));
    }

    #[test]
    fn test_new_with_huge_length_stops_at_wall() {
        let field = FieldSize::square(5);
        let snake = Snake::new(Point::new(3, 0), Direction::Right, usize::MAX, &field);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.tail(), Point::new(0, 0));
    }
}
