use snake_common::games::SessionRng;
use snake_common::games::snake::{
    BotController, Direction, GameStatus, InputEvent, SnakeBotType, SnakeSession,
    SnakeSessionSettings, SnakeSnapshot, run_game_loop,
};
use snake_common::log;
use tokio::sync::mpsc;

use super::board_view::render_board;
use super::broadcaster::{ChannelBroadcaster, RunnerEvent};
use super::stdin_input::{line_to_key, spawn_stdin_reader};
use crate::config::Config;

const BOT_SEED_SALT: u64 = 0x5EED_B07;
const QUIT_KEYS: [&str; 2] = ["q", "quit"];

/// Runs one session until the player quits (or, under autopilot, until the
/// first game ends). Returns the session's high score.
pub async fn run_snake_game(config: &Config, seed: u64) -> Result<u32, String> {
    let settings = SnakeSessionSettings::from(&config.game);
    let session = SnakeSession::new(settings, SessionRng::new(seed))?;

    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    let broadcaster = ChannelBroadcaster::new(events_tx);

    let mut game_handle = tokio::spawn(run_game_loop(session, input_rx, broadcaster));

    // Dropping the sender is how the runner tears the game loop down.
    let mut input_tx = Some(input_tx);

    let mut autopilot = config
        .autopilot
        .enabled
        .then(|| Autopilot::new(config.autopilot.bot_type, seed ^ BOT_SEED_SALT));
    let mut stdin_rx = match &autopilot {
        Some(pilot) => {
            log!("Autopilot enabled ({:?})", pilot.bot_type);
            send_input(&input_tx, InputEvent::Start);
            None
        }
        None => {
            log!(
                "Keys: w/a/s/d or ArrowUp/ArrowDown/ArrowLeft/ArrowRight to turn, \
                 space or p to pause, Enter to start, r to reset, q to quit. \
                 Press Enter after each key."
            );
            log!("Pause only works mid-game; use Enter to start a new or finished game.");
            Some(spawn_stdin_reader())
        }
    };

    let mut last_reported: Option<(u32, GameStatus)> = None;

    loop {
        tokio::select! {
            result = &mut game_handle => {
                let session = result.map_err(|e| format!("Game loop task failed: {}", e))?;
                log!(
                    "Session finished after {} ticks, high score {}",
                    session.tick_count(),
                    session.high_score()
                );
                return Ok(session.high_score());
            }
            Some(event) = events_rx.recv() => match event {
                RunnerEvent::State(snapshot) => {
                    if config.render_board {
                        println!("{}", render_board(&snapshot));
                    } else if last_reported != Some((snapshot.score, snapshot.status)) {
                        log!(
                            "tick {} status {:?} score {} high {} length {}",
                            snapshot.tick,
                            snapshot.status,
                            snapshot.score,
                            snapshot.high_score,
                            snapshot.body.len()
                        );
                    }
                    last_reported = Some((snapshot.score, snapshot.status));

                    if let Some(pilot) = autopilot.as_mut()
                        && let Some(direction) = pilot.next_move(&snapshot)
                    {
                        send_input(&input_tx, InputEvent::Turn(direction));
                    }
                }
                RunnerEvent::GameOver(summary) => {
                    log!(
                        "Game over: {:?}. Score {}, length {}, high score {}",
                        summary.reason,
                        summary.score,
                        summary.length,
                        summary.high_score
                    );
                    if autopilot.is_some() {
                        input_tx = None;
                    } else {
                        log!("Press Enter to play again, r to reset or q to quit");
                    }
                }
            },
            line = recv_line(&mut stdin_rx), if input_tx.is_some() && stdin_rx.is_some() => {
                let Some(line) = line else {
                    log!("Input closed");
                    input_tx = None;
                    continue;
                };
                let key = line_to_key(&line);
                if QUIT_KEYS.contains(&key) {
                    input_tx = None;
                    continue;
                }
                match InputEvent::from_key(key) {
                    Some(event) => send_input(&input_tx, event),
                    None => log!("Unknown key {:?}", key),
                }
            }
        }
    }
}

/// Feeds bot moves into the session, at most one per tick. Snapshots that
/// arrive between ticks show the same board and get no answer.
struct Autopilot {
    bot_type: SnakeBotType,
    rng: SessionRng,
    answered_tick: Option<u64>,
}

impl Autopilot {
    fn new(bot_type: SnakeBotType, seed: u64) -> Self {
        Self {
            bot_type,
            rng: SessionRng::new(seed),
            answered_tick: None,
        }
    }

    fn next_move(&mut self, snapshot: &SnakeSnapshot) -> Option<Direction> {
        if self.answered_tick == Some(snapshot.tick) {
            return None;
        }
        let direction = BotController::calculate_move(self.bot_type, snapshot, &mut self.rng)?;
        self.answered_tick = Some(snapshot.tick);
        Some(direction)
    }
}

fn send_input(input_tx: &Option<mpsc::UnboundedSender<InputEvent>>, event: InputEvent) {
    if let Some(tx) = input_tx
        && tx.send(event).is_err()
    {
        log!("Game loop is gone, dropping {:?}", event);
    }
}

async fn recv_line(stdin_rx: &mut Option<mpsc::UnboundedReceiver<String>>) -> Option<String> {
    match stdin_rx.as_mut() {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}
