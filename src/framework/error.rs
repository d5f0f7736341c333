//! # Framework Errors
//!
//! Failures of the message plumbing between a client and its actor. They say
//! nothing about the order itself; domain errors wrap them.

/// Errors that can occur within the actor plumbing itself.
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
}
