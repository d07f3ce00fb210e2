use crate::games::SessionRng;
use crate::log;
use super::game_state::SnakeGameState;
use super::input::{InputEvent, InputRouter};
use super::settings::SnakeSessionSettings;
use super::types::{Direction, FieldSize, GameEndReason, GameStatus, Point, TickOutcome};

/// Read-only copy of everything a presentation layer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSnapshot {
    pub tick: u64,
    pub field_size: FieldSize,
    pub body: Vec<Point>,
    pub food: Option<Point>,
    pub direction: Direction,
    pub score: u32,
    pub high_score: u32,
    pub status: GameStatus,
    pub end_reason: Option<GameEndReason>,
}

impl SnakeSnapshot {
    pub fn head(&self) -> Option<Point> {
        self.body.first().copied()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameOverSummary {
    pub reason: GameEndReason,
    pub score: u32,
    pub high_score: u32,
    pub length: usize,
    pub ticks: u64,
}

/// One player's game. Owns the board, pending input and RNG; only the high
/// score survives a reset.
pub struct SnakeSession {
    settings: SnakeSessionSettings,
    game_state: SnakeGameState,
    input: InputRouter,
    rng: SessionRng,
    tick: u64,
    high_score: u32,
}

impl SnakeSession {
    pub fn new(settings: SnakeSessionSettings, mut rng: SessionRng) -> Result<Self, String> {
        settings.validate()?;
        let game_state = SnakeGameState::new(&settings, &mut rng);
        log!(
            "Session created: {}x{} field, tick {}ms, seed {}",
            settings.field_size.width,
            settings.field_size.height,
            settings.tick_interval.as_millis(),
            rng.seed()
        );

        Ok(Self {
            settings,
            game_state,
            input: InputRouter::new(),
            rng,
            tick: 0,
            high_score: 0,
        })
    }

    pub fn settings(&self) -> &SnakeSessionSettings {
        &self.settings
    }

    pub fn game_state(&self) -> &SnakeGameState {
        &self.game_state
    }

    pub fn status(&self) -> GameStatus {
        self.game_state.status()
    }

    pub fn score(&self) -> u32 {
        self.game_state.score()
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.input.pending()
    }

    /// Starts an idle game or resumes a paused one. A finished game is reset
    /// first. Returns whether the status changed.
    pub fn start(&mut self) -> bool {
        match self.status() {
            GameStatus::Running => false,
            GameStatus::Idle | GameStatus::Paused => {
                self.game_state.set_status(GameStatus::Running);
                true
            }
            GameStatus::Over | GameStatus::Won => {
                self.reset();
                self.game_state.set_status(GameStatus::Running);
                true
            }
        }
    }

    /// Toggles `Running` and `Paused`; ignored in any other status.
    pub fn toggle_pause(&mut self) -> bool {
        let next = match self.status() {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            GameStatus::Idle | GameStatus::Over | GameStatus::Won => return false,
        };
        self.game_state.set_status(next);
        true
    }

    pub fn reset(&mut self) {
        self.game_state = SnakeGameState::new(&self.settings, &mut self.rng);
        self.input.clear();
        self.tick = 0;
        log!("Session reset, high score {}", self.high_score);
    }

    /// Queues a direction for the next tick. Only honoured while running.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if self.status() != GameStatus::Running {
            return false;
        }
        self.input.submit(direction, self.game_state.direction())
    }

    /// Returns whether the event changed anything worth re-rendering.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Turn(direction) => self.turn(direction),
            InputEvent::Pause => self.toggle_pause(),
            InputEvent::Start => self.start(),
            InputEvent::Reset => {
                self.reset();
                true
            }
        }
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.status() != GameStatus::Running {
            return TickOutcome::Skipped;
        }

        if let Some(direction) = self.input.take_pending() {
            self.game_state.set_direction(direction);
        }

        let outcome = self.game_state.advance(&mut self.rng);
        self.tick += 1;
        self.high_score = self.high_score.max(self.game_state.score());
        outcome
    }

    pub fn snapshot(&self) -> SnakeSnapshot {
        SnakeSnapshot {
            tick: self.tick,
            field_size: self.game_state.field_size(),
            body: self.game_state.snake().body().copied().collect(),
            food: self.game_state.food(),
            direction: self.game_state.direction(),
            score: self.game_state.score(),
            high_score: self.high_score,
            status: self.status(),
            end_reason: self.game_state.end_reason(),
        }
    }

    pub fn game_over_summary(&self) -> Option<GameOverSummary> {
        let reason = self.game_state.end_reason()?;
        Some(GameOverSummary {
            reason,
            score: self.game_state.score(),
            high_score: self.high_score,
            length: self.game_state.snake().len(),
            ticks: self.tick,
        })
    }
}
