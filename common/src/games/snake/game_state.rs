use crate::games::SessionRng;
use crate::log;
use super::settings::SnakeSessionSettings;
use super::snake::Snake;
use super::types::{Direction, FieldSize, GameEndReason, GameStatus, Point, TickOutcome};

const MAX_SAMPLING_ATTEMPTS: usize = 64;

#[derive(Clone, Debug)]
pub struct SnakeGameState {
    snake: Snake,
    food: Option<Point>,
    direction: Direction,
    score: u32,
    status: GameStatus,
    end_reason: Option<GameEndReason>,
    field_size: FieldSize,
    food_score: u32,
}

impl SnakeGameState {
    /// Fresh `Idle` board. The configured food cell is used when it is free,
    /// otherwise one is drawn at random.
    pub fn new(settings: &SnakeSessionSettings, rng: &mut SessionRng) -> Self {
        let snake = settings.initial_snake();
        let food = settings
            .initial_food
            .filter(|food| settings.field_size.contains(*food) && !snake.contains(food))
            .or_else(|| place_food(&snake, &settings.field_size, rng));

        Self {
            snake,
            food,
            direction: settings.start_direction,
            score: 0,
            status: GameStatus::Idle,
            end_reason: None,
            field_size: settings.field_size,
            food_score: settings.food_score,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Point> {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn end_reason(&self) -> Option<GameEndReason> {
        self.end_reason
    }

    pub fn field_size(&self) -> FieldSize {
        self.field_size
    }

    pub(super) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    /// Reversals are refused so the applied direction never flips in one tick.
    pub(super) fn set_direction(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(&self.direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Moves the snake one cell. Does nothing unless the game is running.
    /// A collision leaves the board exactly as it was before the call.
    pub fn advance(&mut self, rng: &mut SessionRng) -> TickOutcome {
        if self.status != GameStatus::Running {
            return TickOutcome::Skipped;
        }

        let head = self.snake.head();
        let Some(next_head) = self.field_size.step(head, self.direction) else {
            return self.end(GameEndReason::WallCollision);
        };

        let growing = self.food == Some(next_head);
        if self.snake.collides_with(&next_head, growing) {
            return self.end(GameEndReason::SelfCollision);
        }

        self.snake.push_head(next_head);

        if !growing {
            self.snake.pop_tail();
            return TickOutcome::Moved;
        }

        self.score += self.food_score;
        self.food = place_food(&self.snake, &self.field_size, rng);
        log!(
            "Ate food at ({}, {}). Score: {}, length: {}",
            next_head.x,
            next_head.y,
            self.score,
            self.snake.len()
        );

        if self.food.is_none() {
            return self.end(GameEndReason::BoardFilled);
        }
        TickOutcome::Ate
    }

    fn end(&mut self, reason: GameEndReason) -> TickOutcome {
        self.status = match reason {
            GameEndReason::BoardFilled => GameStatus::Won,
            GameEndReason::WallCollision | GameEndReason::SelfCollision => GameStatus::Over,
        };
        self.end_reason = Some(reason);
        log!("Game ended: {:?}, score {}", reason, self.score);
        TickOutcome::Ended(reason)
    }

    #[cfg(test)]
    pub(crate) fn from_parts(
        field_size: FieldSize,
        cells: &[Point],
        direction: Direction,
        food: Option<Point>,
    ) -> Self {
        Self {
            snake: Snake::from_cells(cells),
            food,
            direction,
            score: 0,
            status: GameStatus::Running,
            end_reason: None,
            field_size,
            food_score: super::settings::DEFAULT_FOOD_SCORE,
        }
    }
}

/// Uniformly picks a cell not covered by `snake`, or `None` when the field is
/// full. Sparse fields use rejection sampling with a bounded number of draws;
/// dense fields (or unlucky draws) fall back to scanning the free cells.
pub fn place_food(snake: &Snake, field_size: &FieldSize, rng: &mut SessionRng) -> Option<Point> {
    let cell_count = field_size.cell_count();
    if snake.len() >= cell_count {
        return None;
    }

    if snake.len() * 2 <= cell_count {
        for _ in 0..MAX_SAMPLING_ATTEMPTS {
            let candidate = Point::new(
                rng.random_range(0..field_size.width),
                rng.random_range(0..field_size.height),
            );
            if !snake.contains(&candidate) {
                return Some(candidate);
            }
        }
    }

    let free_cells: Vec<Point> = field_size
        .cells()
        .filter(|cell| !snake.contains(cell))
        .collect();
    rng.choose(&free_cells).copied()
}
