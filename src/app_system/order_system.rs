use std::sync::Arc;
use tracing::{error, info, instrument};
use crate::capabilities::{InMemoryInventory, LimitPaymentGateway, LogNotifier};
use crate::order_actor::{OrderActor, OrderClient};
use crate::order_service::OrderService;
use super::SystemConfig;

/// Runs the order actor over in-memory capabilities.
///
/// Builds the capabilities from [`SystemConfig`], injects them into the
/// [`OrderService`] and spawns the actor that owns it.
pub struct OrderSystem {
    pub order_client: OrderClient,
    pub inventory: Arc<InMemoryInventory>,
    pub payment: Arc<LimitPaymentGateway>,
    pub notifier: Arc<LogNotifier>,
    handle: tokio::task::JoinHandle<()>,
}

impl OrderSystem {
    /// Must be called from within a tokio runtime.
    #[instrument(name = "order_system", skip(config))]
    pub fn new(config: SystemConfig) -> Self {
        info!("Starting order system");

        let inventory = config
            .initial_stock
            .iter()
            .fold(InMemoryInventory::new(), |inventory, (product, quantity)| {
                inventory.with_stock(product.clone(), *quantity)
            });
        let inventory = Arc::new(inventory);
        let payment = Arc::new(LimitPaymentGateway::new(config.max_payment_quantity));
        let notifier = Arc::new(LogNotifier::new());

        let service = OrderService::new(inventory.clone(), payment.clone(), notifier.clone());
        let (actor, order_client) = OrderActor::new(config.buffer_size, service);
        let handle = tokio::spawn(actor.run());

        info!("Order system started successfully");

        Self {
            order_client,
            inventory,
            payment,
            notifier,
            handle,
        }
    }

    /// Stops the actor and waits for its task to finish.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down order system");

        // The actor may already be gone; joining the handle reports why.
        let _ = self.order_client.shutdown().await;

        if let Err(e) = self.handle.await {
            error!(error = ?e, "Order actor task failed");
            return Err(format!("Order actor task failed: {:?}", e));
        }

        info!("Order system shutdown complete");
        Ok(())
    }
}
