//! # Bar Admission Demo
//!
//! Starts a [`BarSystem`], sends a burst of concurrent orders, and waits for the
//! accepted ones to be prepared.

use bar_admission::config::BarConfig;
use bar_admission::lifecycle::{setup_tracing, BarSystem};
use bar_admission::model::{CustomerNumber, OrderRequest};
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = BarConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting bar");

    let system = BarSystem::new(config);

    // Three beers, two drinks and one thing the bar does not serve, all at once.
    let requests = [
        (1, "BEER"),
        (2, "BEER"),
        (3, "BEER"),
        (4, "DRINK"),
        (5, "DRINK"),
        (6, "WINE"),
    ];

    let mut customers = Vec::new();
    for (number, drink_type) in requests {
        let client = system.order_client.clone();
        let request = OrderRequest {
            customer_number: CustomerNumber(number),
            drink_type: drink_type.to_string(),
        };
        let span = tracing::info_span!("customer", number);
        customers.push(tokio::spawn(
            async move {
                match client.place_order(request).await {
                    Ok(ticket) => {
                        info!(order_id = %ticket.id(), "Order accepted");
                        match ticket.completed().await {
                            Ok(done) => info!(
                                preparation_ms = done.preparation_time().as_millis() as u64,
                                "Order served"
                            ),
                            Err(e) => error!(error = %e, "Order lost"),
                        }
                    }
                    Err(e) => warn!(status = e.status_code(), error = %e, "Order refused"),
                }
            }
            .instrument(span),
        ));
    }

    // Give the burst a moment to reach the actor before taking a snapshot.
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    let served = system.order_client.served().await.map_err(|e| e.to_string())?;
    info!(in_preparation = served.len(), ?served, "Snapshot");

    for customer in customers {
        customer.await.map_err(|e| e.to_string())?;
    }

    let stats = system.order_client.stats().await.map_err(|e| e.to_string())?;
    info!(
        accepted = stats.accepted,
        rejected = stats.rejected,
        invalid = stats.invalid,
        completed = stats.completed,
        "Final stats"
    );

    system.shutdown().await?;

    info!("Bar closed");
    Ok(())
}
