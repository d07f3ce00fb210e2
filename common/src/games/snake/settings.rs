use std::time::Duration;

use super::snake::Snake;
use super::types::{Direction, FieldSize, Point};

pub const DEFAULT_GRID_SIZE: usize = 20;
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(150);
pub const DEFAULT_FOOD_SCORE: u32 = 10;

const MIN_FIELD_SIZE: usize = 5;
const MAX_FIELD_SIZE: usize = 100;
const MIN_TICK_INTERVAL_MS: u128 = 50;
const MAX_TICK_INTERVAL_MS: u128 = 5000;

#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSessionSettings {
    pub field_size: FieldSize,
    pub tick_interval: Duration,
    pub food_score: u32,
    pub start_position: Point,
    pub start_direction: Direction,
    pub initial_length: usize,
    /// Food cell of a fresh game. `None` places it at random.
    pub initial_food: Option<Point>,
}

impl Default for SnakeSessionSettings {
    fn default() -> Self {
        Self {
            field_size: FieldSize::square(DEFAULT_GRID_SIZE),
            tick_interval: DEFAULT_TICK_INTERVAL,
            food_score: DEFAULT_FOOD_SCORE,
            start_position: Point::new(10, 10),
            start_direction: Direction::Right,
            initial_length: 1,
            initial_food: Some(Point::new(15, 15)),
        }
    }
}

impl SnakeSessionSettings {
    pub fn initial_snake(&self) -> Snake {
        Snake::new(
            self.start_position,
            self.start_direction,
            self.initial_length,
            &self.field_size,
        )
    }

    pub fn validate(&self) -> Result<(), String> {
        let FieldSize { width, height } = self.field_size;
        if !(MIN_FIELD_SIZE..=MAX_FIELD_SIZE).contains(&width) {
            return Err(format!(
                "Field width must be between {} and {}, got {}",
                MIN_FIELD_SIZE, MAX_FIELD_SIZE, width
            ));
        }
        if !(MIN_FIELD_SIZE..=MAX_FIELD_SIZE).contains(&height) {
            return Err(format!(
                "Field height must be between {} and {}, got {}",
                MIN_FIELD_SIZE, MAX_FIELD_SIZE, height
            ));
        }

        let tick_ms = self.tick_interval.as_millis();
        if !(MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&tick_ms) {
            return Err(format!(
                "Tick interval must be between {}ms and {}ms, got {}ms",
                MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS, tick_ms
            ));
        }
        if self.food_score == 0 {
            return Err("Food score must be at least 1".to_string());
        }
        if !self.field_size.contains(self.start_position) {
            return Err(format!(
                "Start position ({}, {}) is outside the field",
                self.start_position.x, self.start_position.y
            ));
        }
        if self.initial_length == 0 {
            return Err("Initial snake length must be at least 1".to_string());
        }
        let cell_count = self.field_size.cell_count();
        if self.initial_length > cell_count {
            return Err(format!(
                "Initial snake length {} exceeds the {} cells of the field",
                self.initial_length, cell_count
            ));
        }

        let snake = self.initial_snake();
        if snake.len() < self.initial_length {
            return Err(format!(
                "Initial snake of length {} does not fit behind ({}, {})",
                self.initial_length, self.start_position.x, self.start_position.y
            ));
        }

        if let Some(food) = self.initial_food {
            if !self.field_size.contains(food) {
                return Err(format!("Initial food ({}, {}) is outside the field", food.x, food.y));
            }
            if snake.contains(&food) {
                return Err(format!("Initial food ({}, {}) overlaps the snake", food.x, food.y));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(SnakeSessionSettings::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_tiny_field() {
        let settings = SnakeSessionSettings {
            field_size: FieldSize::square(3),
            start_position: Point::new(1, 1),
            initial_food: None,
            ..SnakeSessionSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_tick_interval_out_of_range() {
        let settings = SnakeSessionSettings {
            tick_interval: Duration::from_millis(10),
            ..SnakeSessionSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_snake_not_fitting() {
        let settings = SnakeSessionSettings {
            start_position: Point::new(1, 5),
            initial_length: 4,
            ..SnakeSessionSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_food_on_snake() {
        let settings = SnakeSessionSettings {
            initial_length: 3,
            initial_food: Some(Point::new(9, 10)),
            ..SnakeSessionSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_start_outside_field() {
        let settings = SnakeSessionSettings {
            start_position: Point::new(20, 0),
            ..SnakeSessionSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_length_beyond_field_without_allocating() {
        let settings = SnakeSessionSettings {
            initial_length: usize::MAX,
            ..SnakeSessionSettings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.contains("exceeds the 400 cells"), "{}", err);
    }
}
