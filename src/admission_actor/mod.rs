//! # Admission Actor
//!
//! The order admission and timed-completion core of the bar.
//!
//! ## Structure
//!
//! - [`active_set`] - [`ActiveSet`], the admission gate's state and its capacity check
//! - [`timers`] - [`CompletionTimers`], one timer task per accepted order
//! - [`actor`] - [`AdmissionActor`], the task that owns the active set
//! - [`messages`] - [`AdmissionRequest`] sent by clients
//! - [`ticket`] - [`Ticket`] handed out for every accepted order
//! - [`error`] - [`OrderError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Order lifecycle
//!
//! ```text
//! Pending ──► Rejected                      (capacity exceeded / unknown category)
//!    │
//!    └────► Accepted ──(preparation time)──► Completed
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use bar_admission::admission_actor;
//! use bar_admission::config::BarConfig;
//! use bar_admission::framework::TokioClock;
//! use bar_admission::model::{Category, CustomerNumber};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = BarConfig::default().with_preparation_time(Duration::from_millis(10));
//!     let (actor, client) = admission_actor::new(config, Arc::new(TokioClock));
//!     tokio::spawn(actor.run());
//!
//!     let ticket = client.submit(CustomerNumber(1), Category::Beer).await.unwrap();
//!     let completed = ticket.completed().await.unwrap();
//!     assert_eq!(completed.order.category, Category::Beer);
//! }
//! ```

pub mod active_set;
pub mod actor;
pub mod error;
pub mod messages;
pub mod ticket;
pub mod timers;

pub use active_set::*;
pub use actor::*;
pub use error::*;
pub use messages::*;
pub use ticket::*;
pub use timers::*;

use crate::clients::OrderClient;
use crate::config::BarConfig;
use crate::framework::Clock;
use std::sync::Arc;

/// Creates a new admission actor and its client.
pub fn new(config: BarConfig, clock: Arc<dyn Clock>) -> (AdmissionActor, OrderClient) {
    AdmissionActor::new(config, clock)
}
