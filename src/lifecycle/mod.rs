//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the admission service.
//!
//! ## The BarSystem Pattern
//!
//! ```rust,ignore
//! impl BarSystem {
//!     pub fn with_clock(config: BarConfig, clock: Arc<dyn Clock>) -> Self {
//!         // 1. Create the actor and its client
//!         let (actor, order_client) = admission_actor::new(config, clock);
//!
//!         // 2. Start the actor
//!         let handle = tokio::spawn(actor.run());
//!
//!         Self { order_client, handle }
//!     }
//! }
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the request channel
//! 2. **Actor drains** - stops reading requests, keeps releasing slots as timers fire
//! 3. **Actor exits** - once the active set is empty
//! 4. **Await completion** - [`BarSystem::shutdown`] joins the task
//!
//! Clones of the client held elsewhere keep the actor accepting orders, so drop them
//! before calling `shutdown`.
//!
//! ## Observability
//!
//! [`setup_tracing`] initializes structured logging; see the [`tracing`] module.

pub mod bar_system;
pub mod tracing;

pub use bar_system::*;
pub use tracing::*;
