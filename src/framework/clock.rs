//! # Clocks
//!
//! Completion timers never call `tokio::time` directly. They go through a [`Clock`]
//! so tests can decide when time passes.
//!
//! - [`TokioClock`] is the production clock. It follows Tokio's timer, which also
//!   means it honours `tokio::time::pause()` in tests.
//! - [`ManualClock`](crate::framework::mock::ManualClock) only moves when a test
//!   calls `advance`.

use async_trait::async_trait;
use std::time::Instant;

/// Source of time for the admission service.
#[async_trait]
pub trait Clock: Send + Sync + 'static {
    /// The current instant.
    fn now(&self) -> Instant;

    /// Resolves once [`Clock::now`] has reached `deadline`.
    ///
    /// Deadlines already in the past resolve immediately.
    async fn sleep_until(&self, deadline: Instant);
}

/// Clock backed by the Tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }

    async fn sleep_until(&self, deadline: Instant) {
        tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn tokio_clock_follows_paused_time() {
        let clock = TokioClock;
        let start = clock.now();
        clock.sleep_until(start + Duration::from_secs(5)).await;
        assert!(clock.now() >= start + Duration::from_secs(5));
    }

    #[tokio::test]
    async fn past_deadlines_resolve_immediately() {
        let clock = TokioClock;
        let past = clock.now();
        tokio::time::timeout(Duration::from_secs(1), clock.sleep_until(past))
            .await
            .expect("sleep_until on a past deadline should not wait");
    }
}
