//! # Completion Timer Pool
//!
//! One Tokio task per accepted order. The task sleeps on the injected [`Clock`]
//! until the order's deadline and then reports the order id back to the admission
//! actor. It never touches the active set itself; removal happens inside the
//! actor, in the same place admissions are decided.

use crate::framework::Clock;
use crate::model::{ActiveOrder, OrderId};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, Instrument};

pub struct CompletionTimers {
    clock: Arc<dyn Clock>,
    preparation_time: Duration,
    completions: mpsc::UnboundedSender<OrderId>,
}

impl CompletionTimers {
    /// Creates the pool and the receiver its timers report to.
    pub fn new(
        clock: Arc<dyn Clock>,
        preparation_time: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<OrderId>) {
        let (completions, receiver) = mpsc::unbounded_channel();
        let timers = Self {
            clock,
            preparation_time,
            completions,
        };
        (timers, receiver)
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    pub fn preparation_time(&self) -> Duration {
        self.preparation_time
    }

    /// Arms the single timer for `order`.
    ///
    /// The deadline is `accepted_at + preparation_time`, so a timer task that starts
    /// late still fires at the right instant.
    pub fn schedule(&self, order: &ActiveOrder) {
        let clock = Arc::clone(&self.clock);
        let completions = self.completions.clone();
        let deadline = order.accepted_at + self.preparation_time;
        let id = order.id;

        let span = tracing::debug_span!("preparation", order_id = %id, category = %order.category);
        tokio::spawn(
            async move {
                clock.sleep_until(deadline).await;
                debug!("Preparation time elapsed");
                // Only fails once the actor has exited, and it waits for every timer.
                let _ = completions.send(id);
            }
            .instrument(span),
        );
    }
}
