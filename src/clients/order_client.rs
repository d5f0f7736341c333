//! # Order Client
//!
//! Provides a high‑level API for interacting with the admission actor.
//! It wraps the request channel and turns channel failures into
//! [`OrderError::ServiceUnavailable`].
use crate::admission_actor::{AdmissionRequest, AdmissionStats, OrderError, Response, Ticket};
use crate::framework::FrameworkError;
use crate::model::{Category, CompletedOrder, CustomerNumber, OrderRequest, ServedOrder};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument};

/// Client for interacting with the admission actor.
///
/// Cheap to clone. The actor keeps accepting orders as long as one clone is alive.
#[derive(Clone)]
pub struct OrderClient {
    sender: mpsc::Sender<AdmissionRequest>,
}

impl OrderClient {
    pub fn new(sender: mpsc::Sender<AdmissionRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(Response<T>) -> AdmissionRequest,
    ) -> Result<T, OrderError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Asks the admission gate for a slot.
    ///
    /// Returns as soon as the decision is made. An accepted order comes back as a
    /// [`Ticket`]; a full category comes back as [`OrderError::CapacityExceeded`].
    #[instrument(skip(self))]
    pub async fn submit(
        &self,
        customer_number: CustomerNumber,
        category: Category,
    ) -> Result<Ticket, OrderError> {
        debug!("Sending submit to actor");
        self.request(|respond_to| AdmissionRequest::Submit {
            customer_number,
            category,
            respond_to,
        })
        .await
    }

    /// Submits an order as the HTTP layer received it, validating `drinkType` first.
    #[instrument(skip(self, request), fields(customer_number = %request.customer_number))]
    pub async fn place_order(&self, request: OrderRequest) -> Result<Ticket, OrderError> {
        let category: Category = request.drink_type.parse()?;
        self.submit(request.customer_number, category).await
    }

    /// Submits and waits for the order to be prepared.
    ///
    /// This is the deferred-response flow: an accepted caller hears back only after
    /// the full preparation time, a rejected caller hears back immediately.
    #[instrument(skip(self))]
    pub async fn serve(
        &self,
        customer_number: CustomerNumber,
        category: Category,
    ) -> Result<CompletedOrder, OrderError> {
        let ticket = self.submit(customer_number, category).await?;
        info!(order_id = %ticket.id(), "Waiting for preparation");
        ticket.completed().await
    }

    /// Consistent snapshot of the orders currently in preparation.
    #[instrument(skip(self))]
    pub async fn served(&self) -> Result<Vec<ServedOrder>, OrderError> {
        self.request(|respond_to| AdmissionRequest::Served { respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn stats(&self) -> Result<AdmissionStats, OrderError> {
        self.request(|respond_to| AdmissionRequest::Stats { respond_to })
            .await
    }
}
