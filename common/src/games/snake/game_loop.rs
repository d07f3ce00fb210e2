use tokio::sync::mpsc;

use crate::games::GameBroadcaster;
use crate::log;
use super::input::InputEvent;
use super::scheduler::TickScheduler;
use super::session::SnakeSession;
use super::types::{GameStatus, TickOutcome};

/// Drives `session` from two sources, scheduler ticks and `input_rx`, on a
/// single task so every handler runs to completion before the next one.
/// Returns the session once the input channel closes; the scheduler is
/// stopped on the way out.
pub async fn run_game_loop<B: GameBroadcaster>(
    mut session: SnakeSession,
    mut input_rx: mpsc::UnboundedReceiver<InputEvent>,
    broadcaster: B,
) -> SnakeSession {
    let mut scheduler = TickScheduler::new(session.settings().tick_interval);
    if session.status() == GameStatus::Running {
        scheduler.start();
    }
    broadcaster.broadcast_state(session.snapshot()).await;

    loop {
        let previous_status = session.status();

        tokio::select! {
            _ = scheduler.tick() => {
                let outcome = session.tick();
                broadcaster.broadcast_state(session.snapshot()).await;

                if let TickOutcome::Ended(_) = outcome
                    && let Some(summary) = session.game_over_summary()
                {
                    log!(
                        "Game over after {} ticks: {:?}, score {}, high score {}",
                        summary.ticks,
                        summary.reason,
                        summary.score,
                        summary.high_score
                    );
                    broadcaster.broadcast_game_over(summary).await;
                }
            }
            event = input_rx.recv() => {
                let Some(event) = event else {
                    break;
                };
                if session.handle_input(event) {
                    broadcaster.broadcast_state(session.snapshot()).await;
                }
            }
        }

        let current_status = session.status();
        if previous_status != current_status {
            log!("Status {:?} -> {:?}", previous_status, current_status);
        }
        scheduler.sync(previous_status, current_status);
    }

    scheduler.stop();
    log!("Input closed, game loop stopped at tick {}", session.tick_count());
    session
}
