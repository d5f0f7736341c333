//! Handle returned for an accepted order.

use crate::admission_actor::OrderError;
use crate::framework::FrameworkError;
use crate::model::{ActiveOrder, CompletedOrder, OrderId};
use tokio::sync::oneshot;

/// Proof of admission for one order.
///
/// Acceptance is acknowledged as soon as the ticket exists. Awaiting
/// [`Ticket::completed`] waits for the preparation to finish. Dropping the ticket
/// does not cancel anything; the order still completes and frees its slot.
#[derive(Debug)]
pub struct Ticket {
    order: ActiveOrder,
    completion: oneshot::Receiver<CompletedOrder>,
}

impl Ticket {
    pub fn new(order: ActiveOrder, completion: oneshot::Receiver<CompletedOrder>) -> Self {
        Self { order, completion }
    }

    pub fn id(&self) -> OrderId {
        self.order.id
    }

    pub fn order(&self) -> &ActiveOrder {
        &self.order
    }

    /// Waits until the order has been prepared and its slot released.
    pub async fn completed(self) -> Result<CompletedOrder, OrderError> {
        self.completion
            .await
            .map_err(|_| OrderError::from(FrameworkError::ActorDropped))
    }
}
