mod board_view;
mod broadcaster;
mod snake_runner;
mod stdin_input;

pub use snake_runner::run_snake_game;
