//! Type-safe wrappers around the admission actor's request channel.

pub mod order_client;

pub use order_client::*;
