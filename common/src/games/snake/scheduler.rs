use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

use super::types::GameStatus;

/// Fixed-cadence tick source. Stopped schedulers never yield a tick.
pub struct TickScheduler {
    period: Duration,
    interval: Option<Interval>,
}

impl TickScheduler {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            interval: None,
        }
    }

    /// (Re)starts the timer; the first tick comes one full period from now.
    pub fn start(&mut self) {
        let mut interval = interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.interval = Some(interval);
    }

    pub fn stop(&mut self) {
        self.interval = None;
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    /// Cancels the timer on every status change and restarts it only when
    /// the new status is `Running`.
    pub fn sync(&mut self, previous: GameStatus, current: GameStatus) {
        if previous == current {
            return;
        }
        self.stop();
        if current == GameStatus::Running {
            self.start();
        }
    }

    /// Waits for the next tick. Pending forever while stopped, which makes
    /// it safe to use as a `select!` branch.
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    const PERIOD: Duration = Duration::from_millis(150);

    fn assert_close(elapsed: Duration, expected: Duration) {
        assert!(
            elapsed >= expected && elapsed < expected + Duration::from_millis(5),
            "elapsed {:?}, expected {:?}",
            elapsed,
            expected
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_stopped_scheduler_never_ticks() {
        let mut scheduler = TickScheduler::new(PERIOD);
        assert!(!scheduler.is_running());
        let result = timeout(Duration::from_secs(10), scheduler.tick()).await;
        assert!(result.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_after_full_period() {
        let mut scheduler = TickScheduler::new(PERIOD);
        let started = Instant::now();
        scheduler.start();
        scheduler.tick().await;
        assert_close(started.elapsed(), PERIOD);
        scheduler.tick().await;
        assert_close(started.elapsed(), PERIOD * 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sync_follows_status() {
        let mut scheduler = TickScheduler::new(PERIOD);
        scheduler.sync(GameStatus::Idle, GameStatus::Running);
        assert!(scheduler.is_running());

        scheduler.sync(GameStatus::Running, GameStatus::Paused);
        assert!(!scheduler.is_running());
        assert!(timeout(PERIOD * 4, scheduler.tick()).await.is_err());

        scheduler.sync(GameStatus::Paused, GameStatus::Running);
        assert!(scheduler.is_running());

        scheduler.sync(GameStatus::Running, GameStatus::Over);
        assert!(!scheduler.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_resets_phase() {
        let mut scheduler = TickScheduler::new(PERIOD);
        scheduler.start();
        tokio::time::sleep(PERIOD / 2).await;
        let restarted = Instant::now();
        scheduler.start();
        scheduler.tick().await;
        assert_close(restarted.elapsed(), PERIOD);
    }
}
