mod domain;
mod capabilities;
mod order_service;
mod order_actor;

mod app_system;

#[cfg(test)]
mod mock_framework;

use tracing::{error, info, warn, Instrument};
use crate::app_system::{setup_tracing, OrderSystem, SystemConfig};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = SystemConfig::default()
        .with_stock("Phone", 10)
        .with_stock("Book", 3)
        .with_max_payment_quantity(5);

    setup_tracing(&config.log_filter);

    info!("Starting order workflow");

    let system = OrderSystem::new(config);
    let client = system.order_client.clone();

    let span = tracing::info_span!("order_placement");
    let order = async {
        info!("Placing order");
        client.create_order("Phone".to_string(), 3).await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(order_id = %order.id, "Order placed");

    // Over the payment limit: stock is reserved, then given back.
    match client.create_order("Phone".to_string(), 6).await {
        Ok(order) => info!(order_id = %order.id, "Order placed"),
        Err(e) => warn!(error = %e, "Order rejected"),
    }

    match client.create_order("Book".to_string(), 4).await {
        Ok(order) => info!(order_id = %order.id, "Order placed"),
        Err(e) => warn!(error = %e, "Order rejected"),
    }

    let span = tracing::info_span!("order_maintenance", order_id = %order.id);
    async {
        match client.update_order(order.id, 2).await {
            Ok(true) => info!("Quantity updated"),
            Ok(false) => warn!("Order not updated"),
            Err(e) => error!(error = %e, "Update failed"),
        }

        match client.get_orders().await {
            Ok(orders) => info!(count = orders.len(), "Current orders"),
            Err(e) => error!(error = %e, "Listing failed"),
        }

        match client.remove_order(order.id).await {
            Ok(removed) => info!(removed, "Order removal processed"),
            Err(e) => error!(error = %e, "Removal failed"),
        }
    }
    .instrument(span)
    .await;

    info!(
        phone_stock = system.inventory.available("Phone"),
        book_stock = system.inventory.available("Book"),
        confirmations = system.notifier.sent().len(),
        declined_payments = system.payment.declined(),
        "Final state"
    );

    system.shutdown().await?;

    info!("Order workflow completed");
    Ok(())
}
