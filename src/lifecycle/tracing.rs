//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a `tracing-subscriber` formatter for the whole process.
//!
//! ## Configuration
//!
//! - **Filtering** via the `RUST_LOG` environment variable (`EnvFilter`)
//! - **Compact format** with the module prefix hidden (`with_target(false)`)
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: configured limits, start, drain, shutdown totals
//! - **Admission**: every acceptance (`info`) and rejection (`warn`) with the
//!   customer, category and current occupancy
//! - **Completion**: every released slot (`info`); completions for orders that are
//!   no longer active (`warn`)
//! - **Timers**: each timer runs in a `preparation` span carrying its `order_id`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Decisions and completions
//! RUST_LOG=info cargo run
//!
//! # Also client requests, snapshots and timer firings
//! RUST_LOG=debug cargo run
//!
//! # Only the admission actor
//! RUST_LOG=bar_admission::admission_actor=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a burst of three beers against a limit of two looks like:
//!
//! ```text
//! INFO Accepted order_id=order_1 customer_number=1 category=BEER in_use=1
//! INFO Accepted order_id=order_2 customer_number=2 category=BEER in_use=2
//! WARN Rejected customer_number=3 category=BEER error=Capacity exceeded for BEER: 2 already in preparation
//! INFO Completed order_id=order_1 customer_number=1 category=BEER in_use=1
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths
        .compact()
        .init();
}
