use crate::admission_actor;
use crate::clients::OrderClient;
use crate::config::BarConfig;
use crate::framework::{Clock, TokioClock};
use std::sync::Arc;
use tracing::{error, info};

/// The runtime orchestrator for the bar's admission service.
///
/// `BarSystem` is responsible for:
/// - **Lifecycle Management**: starting the admission actor and stopping it
/// - **Dependency Wiring**: handing the configured clock and limits to the actor
///
/// # Example
///
/// ```ignore
/// let system = BarSystem::new(BarConfig::from_env()?);
///
/// let ticket = system.order_client.submit(CustomerNumber(1), Category::Beer).await?;
/// ticket.completed().await?;
///
/// system.shutdown().await?;
/// ```
pub struct BarSystem {
    /// Client for interacting with the admission actor
    pub order_client: OrderClient,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl BarSystem {
    /// Starts the admission actor on the Tokio clock.
    pub fn new(config: BarConfig) -> Self {
        Self::with_clock(config, Arc::new(TokioClock))
    }

    /// Starts the admission actor on the given clock.
    pub fn with_clock(config: BarConfig, clock: Arc<dyn Clock>) -> Self {
        let (actor, order_client) = admission_actor::new(config, clock);
        let handle = tokio::spawn(actor.run());
        Self {
            order_client,
            handle,
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops the system's client and waits for the actor to finish. The actor only
    /// finishes once no client clone is left *and* every in-flight order has
    /// completed, so this call returns after the last preparation ends.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down bar...");

        drop(self.order_client);

        if let Err(e) = self.handle.await {
            error!("Admission actor failed: {:?}", e);
            return Err(format!("Admission actor failed: {:?}", e));
        }

        info!("Bar shutdown complete.");
        Ok(())
    }
}
