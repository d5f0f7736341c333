//! Plain data types shared by the admission actor and its clients.

pub mod category;
pub mod order;

pub use category::*;
pub use order::*;
