use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use super::session::SnakeSnapshot;
use super::types::{Direction, GameStatus, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnakeBotType {
    Efficient,
    Random,
}

pub struct BotController;

impl BotController {
    /// Direction the bot wants for the next tick, or `None` when the game is
    /// not running.
    pub fn calculate_move(
        bot_type: SnakeBotType,
        snapshot: &SnakeSnapshot,
        rng: &mut SessionRng,
    ) -> Option<Direction> {
        if snapshot.status != GameStatus::Running || snapshot.body.is_empty() {
            return None;
        }

        match bot_type {
            SnakeBotType::Efficient => Self::efficient_pathfinding(snapshot, rng),
            SnakeBotType::Random => Self::random_valid_move(snapshot, rng),
        }
    }

    fn efficient_pathfinding(snapshot: &SnakeSnapshot, rng: &mut SessionRng) -> Option<Direction> {
        let Some(food) = snapshot.food else {
            return Self::random_valid_move(snapshot, rng);
        };

        Self::safe_moves(snapshot)
            .into_iter()
            .min_by_key(|(_, next)| next.manhattan_distance(food))
            .map(|(direction, _)| direction)
            .or(Some(snapshot.direction))
    }

    fn random_valid_move(snapshot: &SnakeSnapshot, rng: &mut SessionRng) -> Option<Direction> {
        let safe: Vec<Direction> = Self::safe_moves(snapshot)
            .into_iter()
            .map(|(direction, _)| direction)
            .collect();

        rng.choose(&safe).copied().or(Some(snapshot.direction))
    }

    fn safe_moves(snapshot: &SnakeSnapshot) -> Vec<(Direction, Point)> {
        let head = snapshot.body[0];
        let tail = snapshot.body[snapshot.body.len() - 1];
        let occupied: HashSet<Point> = snapshot.body.iter().copied().collect();

        Direction::ALL
            .into_iter()
            .filter(|direction| !direction.is_opposite(&snapshot.direction))
            .filter_map(|direction| {
                let next = snapshot.field_size.step(head, direction)?;
                let growing = snapshot.food == Some(next);
                let blocked = occupied.contains(&next) && (growing || next != tail);
                (!blocked).then_some((direction, next))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::FieldSize;

    fn snapshot(body: Vec<Point>, direction: Direction, food: Option<Point>) -> SnakeSnapshot {
        SnakeSnapshot {
            tick: 0,
            field_size: FieldSize::square(10),
            body,
            food,
            direction,
            score: 0,
            high_score: 0,
            status: GameStatus::Running,
            end_reason: None,
        }
    }

    #[test]
    fn test_efficient_heads_for_food() {
        let mut rng = SessionRng::new(1);
        let state = snapshot(vec![Point::new(5, 5)], Direction::Right, Some(Point::new(5, 8)));
        assert_eq!(
            BotController::calculate_move(SnakeBotType::Efficient, &state, &mut rng),
            Some(Direction::Down)
        );
    }

    #[test]
    fn test_never_reverses() {
        let mut rng = SessionRng::new(2);
        // Food directly behind the head.
        let state = snapshot(
            vec![Point::new(5, 5), Point::new(5, 6)],
            Direction::Up,
            Some(Point::new(5, 9)),
        );
        for _ in 0..20 {
            for bot_type in [SnakeBotType::Efficient, SnakeBotType::Random] {
                let direction = BotController::calculate_move(bot_type, &state, &mut rng);
                assert_ne!(direction, Some(Direction::Down));
            }
        }
    }

    #[test]
    fn test_avoids_wall_and_body() {
        let mut rng = SessionRng::new(3);
        // Against the top wall with body below; the tail on the left is vacated this tick.
        let state = snapshot(
            vec![Point::new(3, 0), Point::new(3, 1), Point::new(2, 1), Point::new(2, 0)],
            Direction::Up,
            None,
        );
        for _ in 0..20 {
            let direction = BotController::calculate_move(SnakeBotType::Random, &state, &mut rng);
            assert!(matches!(direction, Some(Direction::Right) | Some(Direction::Left)));
        }
    }

    #[test]
    fn test_no_move_unless_running() {
        let mut rng = SessionRng::new(4);
        let mut state = snapshot(vec![Point::new(5, 5)], Direction::Right, Some(Point::new(1, 1)));
        state.status = GameStatus::Paused;
        assert_eq!(
            BotController::calculate_move(SnakeBotType::Efficient, &state, &mut rng),
            None
        );
    }
}
