//! # Admission Actor
//!
//! The single owner of the [`ActiveSet`]. It processes two streams in one loop:
//!
//! - requests from [`OrderClient`]s (submit, snapshot, stats), and
//! - order ids reported by the [`CompletionTimers`] when preparation ends.
//!
//! Because both streams are handled by the same task, one message at a time, the
//! capacity check and the insert that follows it can never interleave with another
//! admission or with a removal. No `Mutex` guards the active set; the task owns it.
//!
//! ## Shutdown
//!
//! When every client has been dropped the request channel closes. The actor stops
//! reading requests but keeps serving completions until the active set is empty, so
//! every ticket still receives its completion, and only then returns.

use crate::admission_actor::{ActiveSet, AdmissionRequest, CompletionTimers, OrderError, Ticket};
use crate::clients::OrderClient;
use crate::config::BarConfig;
use crate::framework::Clock;
use crate::model::{Category, CompletedOrder, CustomerNumber, OrderId};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

pub struct AdmissionActor {
    receiver: mpsc::Receiver<AdmissionRequest>,
    completions: mpsc::UnboundedReceiver<OrderId>,
    active: ActiveSet,
    timers: CompletionTimers,
    waiters: HashMap<OrderId, oneshot::Sender<CompletedOrder>>,
}

impl AdmissionActor {
    /// Creates a new `AdmissionActor` and the client that talks to it.
    ///
    /// The actor does nothing until [`AdmissionActor::run`] is spawned.
    pub fn new(config: BarConfig, clock: Arc<dyn Clock>) -> (Self, OrderClient) {
        let (sender, receiver) = mpsc::channel(config.buffer_size.max(1));
        let (timers, completions) = CompletionTimers::new(clock, config.preparation_time);
        let actor = Self {
            receiver,
            completions,
            active: ActiveSet::new(config.limits),
            timers,
            waiters: HashMap::new(),
        };
        (actor, OrderClient::new(sender))
    }

    /// Runs the actor's event loop until all clients are gone and all orders are done.
    pub async fn run(mut self) {
        for category in Category::ALL {
            if let Some(limit) = self.active.limit(category) {
                info!(%category, limit, "Capacity configured");
            }
        }
        info!(
            preparation_ms = self.timers.preparation_time().as_millis() as u64,
            "Admission actor started"
        );

        let mut accepting = true;
        loop {
            if !accepting && self.active.is_empty() {
                break;
            }

            tokio::select! {
                // Free slots before looking at new requests that arrived at the same time.
                biased;
                Some(id) = self.completions.recv() => self.complete(id),
                request = self.receiver.recv(), if accepting => match request {
                    Some(request) => self.handle(request),
                    None => {
                        accepting = false;
                        info!(in_flight = self.active.len(), "Request channel closed, draining");
                    }
                },
                else => break,
            }
        }

        let stats = self.active.stats();
        info!(
            accepted = stats.accepted,
            rejected = stats.rejected,
            completed = stats.completed,
            "Shutdown"
        );
    }

    fn handle(&mut self, request: AdmissionRequest) {
        match request {
            AdmissionRequest::Submit {
                customer_number,
                category,
                respond_to,
            } => {
                let result = self.submit(customer_number, category);
                let _ = respond_to.send(result);
            }
            AdmissionRequest::Served { respond_to } => {
                let snapshot = self.active.snapshot();
                debug!(size = snapshot.len(), "Served snapshot");
                let _ = respond_to.send(Ok(snapshot));
            }
            AdmissionRequest::Stats { respond_to } => {
                let _ = respond_to.send(Ok(self.active.stats()));
            }
        }
    }

    /// Admission gate: check capacity, insert, arm the timer.
    fn submit(
        &mut self,
        customer_number: CustomerNumber,
        category: Category,
    ) -> Result<Ticket, OrderError> {
        let now = self.timers.clock().now();
        match self.active.try_admit(customer_number, category, now) {
            Ok(order) => {
                info!(
                    order_id = %order.id,
                    %customer_number,
                    %category,
                    in_use = self.active.in_use(category),
                    "Accepted"
                );
                self.timers.schedule(&order);
                let (notify, completion) = oneshot::channel();
                self.waiters.insert(order.id, notify);
                Ok(Ticket::new(order, completion))
            }
            Err(e) => {
                warn!(%customer_number, %category, error = %e, "Rejected");
                Err(e)
            }
        }
    }

    /// Completion: release the slot and tell the ticket holder.
    fn complete(&mut self, id: OrderId) {
        let Some(order) = self.active.complete(id) else {
            warn!(order_id = %id, "Completion for an order that is not active, ignored");
            return;
        };

        let completed = CompletedOrder {
            order,
            completed_at: self.timers.clock().now(),
        };
        info!(
            order_id = %id,
            customer_number = %completed.order.customer_number,
            category = %completed.order.category,
            in_use = self.active.in_use(completed.order.category),
            "Completed"
        );

        if let Some(notify) = self.waiters.remove(&id) {
            // The customer may have walked away; the slot is freed either way.
            let _ = notify.send(completed);
        }
    }
}
