//! Delay source for the progress simulator.
//!
//! The simulator never calls `tokio::time::sleep` directly; it waits through
//! a [`Scheduler`] so tests can swap in [`InstantScheduler`] or run on
//! paused tokio time.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

/// Something that can wait for a given duration.
#[async_trait]
pub trait Scheduler: Send + Sync {
    async fn delay(&self, duration: Duration);
}

/// Sleeps on the tokio timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioScheduler;

#[async_trait]
impl Scheduler for TokioScheduler {
    async fn delay(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Returns immediately, after yielding once to the runtime. Counts how many
/// delays were requested.
#[derive(Debug, Default)]
pub struct InstantScheduler {
    delays: AtomicUsize,
}

impl InstantScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of delays requested so far.
    pub fn delay_count(&self) -> usize {
        self.delays.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Scheduler for InstantScheduler {
    async fn delay(&self, _duration: Duration) {
        self.delays.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn tokio_scheduler_waits_for_duration() {
        let start = tokio::time::Instant::now();
        TokioScheduler.delay(Duration::from_millis(1500)).await;
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test]
    async fn instant_scheduler_counts_delays() {
        let scheduler = InstantScheduler::new();
        scheduler.delay(Duration::from_secs(60)).await;
        scheduler.delay(Duration::from_secs(60)).await;
        assert_eq!(scheduler.delay_count(), 2);
    }
}
