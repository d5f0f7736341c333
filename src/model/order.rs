//! Orders as seen by the admission service.
//!
//! An [`ActiveOrder`] exists only while it occupies a capacity slot. Once its
//! preparation time has elapsed it is removed from the active set and handed back
//! to the customer as a [`CompletedOrder`].

use crate::model::Category;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::time::{Duration, Instant};

/// Opaque customer identifier. Several orders may share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerNumber(pub u64);

impl From<u64> for CustomerNumber {
    fn from(number: u64) -> Self {
        Self(number)
    }
}

impl Display for CustomerNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of one accepted order, assigned by the admission actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u64);

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// An order currently being prepared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveOrder {
    pub id: OrderId,
    pub customer_number: CustomerNumber,
    pub category: Category,
    pub accepted_at: Instant,
}

/// Body of an incoming order as the HTTP layer receives it.
///
/// `drink_type` stays a string until the admission gate validates it, so an
/// unknown category is reported as a validation error instead of a parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub customer_number: CustomerNumber,
    pub drink_type: String,
}

/// One entry of the `/served` snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServedOrder {
    pub customer_number: CustomerNumber,
    pub drink_type: Category,
}

impl From<&ActiveOrder> for ServedOrder {
    fn from(order: &ActiveOrder) -> Self {
        Self {
            customer_number: order.customer_number,
            drink_type: order.category,
        }
    }
}

/// Completion signal delivered to the ticket holder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedOrder {
    pub order: ActiveOrder,
    pub completed_at: Instant,
}

impl CompletedOrder {
    /// Time between admission and release of the capacity slot.
    pub fn preparation_time(&self) -> Duration {
        self.completed_at.saturating_duration_since(self.order.accepted_at)
    }
}
