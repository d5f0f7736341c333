//! # Admission Messages
//!
//! Requests sent from an [`OrderClient`](crate::clients::OrderClient) to the
//! [`AdmissionActor`](super::AdmissionActor). Each one carries the `oneshot`
//! sender the actor answers on.

use crate::admission_actor::{AdmissionStats, OrderError, Ticket};
use crate::model::{Category, CustomerNumber, ServedOrder};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, OrderError>>;

#[derive(Debug)]
pub enum AdmissionRequest {
    /// Admit one order or reject it.
    Submit {
        customer_number: CustomerNumber,
        category: Category,
        respond_to: Response<Ticket>,
    },
    /// Point-in-time view of the orders in preparation.
    Served {
        respond_to: Response<Vec<ServedOrder>>,
    },
    /// Counters and per-category occupancy.
    Stats {
        respond_to: Response<AdmissionStats>,
    },
}
