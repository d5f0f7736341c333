//! # Bar Admission
//!
//! > **Order admission and timed completion for a bar, as a single Tokio actor.**
//!
//! Customers order beers and drinks. Each category has a fixed number of slots
//! (two beers and one drink at a time by default). An order that finds a free slot
//! is accepted and occupies it for the preparation time; an order that finds none is
//! rejected on the spot. When preparation ends the slot is released.
//!
//! ## 🏗️ Design
//!
//! ### One owner for the shared state
//!
//! The set of orders in preparation is the only shared mutable state. It is owned by
//! one task, the [`AdmissionActor`](admission_actor::AdmissionActor). Submissions and
//! timer completions both arrive as messages and are handled one at a time, so the
//! capacity check and the insert that follows it are atomic with respect to every
//! other admission and every removal.
//!
//! ### Timers report, the actor removes
//!
//! Each accepted order gets one timer task. The timer never touches the active set;
//! it sends the order id back to the actor, which removes the order by identity.
//! A second report for the same id is ignored.
//!
//! ### Injected time
//!
//! Timers sleep on a [`Clock`](framework::Clock). Production uses the Tokio clock,
//! tests use [`ManualClock`](framework::mock::ManualClock) and decide exactly when
//! preparation ends.
//!
//! ## 🗺️ Module Tour
//!
//! - [`admission_actor`] - the admission gate, the completion timers and the actor
//!   that owns them
//! - [`clients`] - [`OrderClient`](clients::OrderClient), the API callers use
//! - [`model`] - categories, orders, snapshots
//! - [`config`] - capacity limits and preparation time, from defaults or env
//! - [`lifecycle`] - [`BarSystem`](lifecycle::BarSystem) startup/shutdown and tracing setup
//! - [`framework`] - clocks, channel errors and test doubles
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Shorter preparation, more beer
//! BAR_PREPARATION_MS=500 BAR_BEER_LIMIT=3 RUST_LOG=info cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod admission_actor;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
