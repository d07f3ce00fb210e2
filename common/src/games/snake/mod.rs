mod bot_controller;
mod game_loop;
mod game_state;
mod input;
mod scheduler;
mod session;
mod settings;
mod snake;
mod types;

pub use bot_controller::{BotController, SnakeBotType};
pub use game_loop::run_game_loop;
pub use game_state::{SnakeGameState, place_food};
pub use input::{InputEvent, InputRouter};
pub use scheduler::TickScheduler;
pub use session::{GameOverSummary, SnakeSession, SnakeSnapshot};
pub use settings::{
    DEFAULT_FOOD_SCORE, DEFAULT_GRID_SIZE, DEFAULT_TICK_INTERVAL, SnakeSessionSettings,
};
pub use snake::Snake;
pub use types::{Direction, FieldSize, GameEndReason, GameStatus, Point, TickOutcome};
