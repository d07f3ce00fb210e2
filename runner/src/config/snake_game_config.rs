use std::time::Duration;

use serde::{Deserialize, Serialize};
use snake_common::games::snake::{
    DEFAULT_FOOD_SCORE, DEFAULT_GRID_SIZE, DEFAULT_TICK_INTERVAL, Direction, FieldSize, Point,
    SnakeSessionSettings,
};

use super::Validate;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SnakeGameConfig {
    pub field_width: u32,
    pub field_height: u32,
    pub tick_interval_ms: u32,
    pub food_score: u32,
    pub start_x: u32,
    pub start_y: u32,
    pub start_direction: Direction,
    pub initial_length: u32,
    pub initial_food: Option<Point>,
}

impl Default for SnakeGameConfig {
    fn default() -> Self {
        Self {
            field_width: DEFAULT_GRID_SIZE as u32,
            field_height: DEFAULT_GRID_SIZE as u32,
            tick_interval_ms: DEFAULT_TICK_INTERVAL.as_millis() as u32,
            food_score: DEFAULT_FOOD_SCORE,
            start_x: 10,
            start_y: 10,
            start_direction: Direction::Right,
            initial_length: 1,
            initial_food: Some(Point::new(15, 15)),
        }
    }
}

impl From<&SnakeGameConfig> for SnakeSessionSettings {
    fn from(config: &SnakeGameConfig) -> Self {
        Self {
            field_size: FieldSize::new(config.field_width as usize, config.field_height as usize),
            tick_interval: Duration::from_millis(config.tick_interval_ms as u64),
            food_score: config.food_score,
            start_position: Point::new(config.start_x as usize, config.start_y as usize),
            start_direction: config.start_direction,
            initial_length: config.initial_length as usize,
            initial_food: config.initial_food,
        }
    }
}

impl Validate for SnakeGameConfig {
    fn validate(&self) -> Result<(), String> {
        SnakeSessionSettings::from(self).validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_engine_defaults() {
        let settings = SnakeSessionSettings::from(&SnakeGameConfig::default());
        assert_eq!(settings, SnakeSessionSettings::default());
    }

    #[test]
    fn test_invalid_game_config_is_rejected() {
        let config = SnakeGameConfig {
            tick_interval_ms: 20,
            ..SnakeGameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_oversized_initial_length_is_rejected() {
        let config = SnakeGameConfig {
            initial_length: u32::MAX,
            ..SnakeGameConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
