use std::future::Future;

use super::snake::{GameOverSummary, SnakeSnapshot};

/// Presentation seam: receives a read-only snapshot after every change.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: SnakeSnapshot) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(&self, summary: GameOverSummary) -> impl Future<Output = ()> + Send;
}
