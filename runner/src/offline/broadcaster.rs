use snake_common::games::GameBroadcaster;
use snake_common::games::snake::{GameOverSummary, SnakeSnapshot};
use tokio::sync::mpsc;

#[derive(Debug)]
pub enum RunnerEvent {
    State(SnakeSnapshot),
    GameOver(GameOverSummary),
}

/// Forwards game loop output to the runner task.
#[derive(Clone)]
pub struct ChannelBroadcaster {
    events_tx: mpsc::UnboundedSender<RunnerEvent>,
}

impl ChannelBroadcaster {
    pub fn new(events_tx: mpsc::UnboundedSender<RunnerEvent>) -> Self {
        Self { events_tx }
    }
}

impl GameBroadcaster for ChannelBroadcaster {
    async fn broadcast_state(&self, snapshot: SnakeSnapshot) {
        // The receiver only goes away while the runner is shutting down.
        let _ = self.events_tx.send(RunnerEvent::State(snapshot));
    }

    async fn broadcast_game_over(&self, summary: GameOverSummary) {
        let _ = self.events_tx.send(RunnerEvent::GameOver(summary));
    }
}
