//! Actor plumbing shared by the admission service.
//!
//! # Main Components
//!
//! - [`Clock`] / [`TokioClock`] - time source injected into the completion timers
//! - [`FrameworkError`] - failures of the client/actor channels
//!
//! # Testing
//!
//! See [`mock`] for a manually driven clock and for utilities to test clients
//! without spawning the actor.

pub mod clock;
pub mod error;
pub mod mock;

pub use clock::*;
pub use error::*;
