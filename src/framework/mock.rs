//! # Mock Framework & Testing Guide
//!
//! Two kinds of test doubles live here.
//!
//! ## Controlling time
//!
//! [`ManualClock`] implements [`Clock`] but only moves when a test calls
//! [`ManualClock::advance`]. Completion timers armed against it fire exactly when
//! the test says so, which makes "completes after exactly the preparation time"
//! checkable without real sleeps.
//!
//! ```rust
//! use bar_admission::admission_actor;
//! use bar_admission::config::BarConfig;
//! use bar_admission::framework::mock::ManualClock;
//! use bar_admission::model::{Category, CustomerNumber};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let clock = ManualClock::new();
//!     let (actor, client) = admission_actor::new(BarConfig::default(), Arc::new(clock.clone()));
//!     tokio::spawn(actor.run());
//!
//!     let ticket = client.submit(CustomerNumber(1), Category::Drink).await.unwrap();
//!     clock.advance(Duration::from_secs(5));
//!     let done = ticket.completed().await.unwrap();
//!     assert_eq!(done.preparation_time(), Duration::from_secs(5));
//! }
//! ```
//!
//! ## Scripting the actor
//!
//! [`create_mock_client`] returns a real [`OrderClient`] together with the receiving
//! end of its channel. The test plays the actor: it pulls requests with
//! [`expect_submit`] / [`expect_served`] / [`expect_stats`] and answers them however it
//! likes, including dropping the responder to simulate a dead actor.
//!
//! | Feature | Scripted channel | Real actor |
//! |---------|------------------|------------|
//! | **Determinism** | Full | Full with `ManualClock` |
//! | **State** | None | Real active set |
//! | **Use Case** | Client logic, error mapping | Admission rules, timers |
//! | **Error Injection** | Easy | Hard |

use crate::admission_actor::{AdmissionRequest, AdmissionStats, Response, Ticket};
use crate::clients::OrderClient;
use crate::framework::Clock;
use crate::model::{Category, CustomerNumber, ServedOrder};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{mpsc, watch};

// =============================================================================
// MANUAL CLOCK
// =============================================================================

/// A clock that stands still until told to move.
///
/// Clones share the same time.
#[derive(Clone)]
pub struct ManualClock {
    origin: Instant,
    elapsed: Arc<watch::Sender<Duration>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    pub fn new() -> Self {
        let (elapsed, _) = watch::channel(Duration::ZERO);
        Self {
            origin: Instant::now(),
            elapsed: Arc::new(elapsed),
        }
    }

    /// Moves time forward and wakes every sleeper whose deadline has passed.
    pub fn advance(&self, by: Duration) {
        self.elapsed.send_modify(|elapsed| *elapsed += by);
    }

    /// Total time advanced since the clock was created.
    pub fn elapsed(&self) -> Duration {
        *self.elapsed.borrow()
    }
}

#[async_trait]
impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed()
    }

    async fn sleep_until(&self, deadline: Instant) {
        let mut elapsed = self.elapsed.subscribe();
        loop {
            let now = self.origin + *elapsed.borrow_and_update();
            if now >= deadline {
                return;
            }
            if elapsed.changed().await.is_err() {
                return;
            }
        }
    }
}

// =============================================================================
// SCRIPTED CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver a test reads its requests from.
pub fn create_mock_client(buffer_size: usize) -> (OrderClient, mpsc::Receiver<AdmissionRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (OrderClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Submit request
pub async fn expect_submit(
    receiver: &mut mpsc::Receiver<AdmissionRequest>,
) -> Option<(CustomerNumber, Category, Response<Ticket>)> {
    match receiver.recv().await {
        Some(AdmissionRequest::Submit {
            customer_number,
            category,
            respond_to,
        }) => Some((customer_number, category, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Served request
pub async fn expect_served(
    receiver: &mut mpsc::Receiver<AdmissionRequest>,
) -> Option<Response<Vec<ServedOrder>>> {
    match receiver.recv().await {
        Some(AdmissionRequest::Served { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Stats request
pub async fn expect_stats(
    receiver: &mut mpsc::Receiver<AdmissionRequest>,
) -> Option<Response<AdmissionStats>> {
    match receiver.recv().await {
        Some(AdmissionRequest::Stats { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[tokio::test]
    async fn sleeper_wakes_only_once_deadline_is_reached() {
        let clock = ManualClock::new();
        let deadline = clock.now() + Duration::from_secs(5);

        let sleeper = {
            let clock = clock.clone();
            tokio::spawn(async move { clock.sleep_until(deadline).await })
        };

        clock.advance(Duration::from_secs(3));
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!sleeper.is_finished());

        clock.advance(Duration::from_secs(2));
        sleeper.await.unwrap();
        assert_eq!(clock.elapsed(), Duration::from_secs(5));
    }

    #[tokio::test]
    async fn late_sleeper_sees_time_already_passed() {
        let clock = ManualClock::new();
        let deadline = clock.now() + Duration::from_secs(1);
        clock.advance(Duration::from_secs(2));
        tokio::time::timeout(Duration::from_secs(1), clock.sleep_until(deadline))
            .await
            .expect("deadline already passed");
    }

    #[tokio::test]
    async fn scripted_stats_reach_the_client() {
        let (client, mut receiver) = create_mock_client(4);
        let task = tokio::spawn(async move { client.stats().await });

        let responder = expect_stats(&mut receiver).await.expect("Expected Stats request");
        let stats = AdmissionStats {
            accepted: 3,
            rejected: 1,
            invalid: 0,
            completed: 2,
            categories: BTreeMap::new(),
        };
        responder.send(Ok(stats.clone())).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), stats);
    }
}
