//! Single-owner actor around [`OrderService`] for concurrent callers.
//!
//! One tokio task owns the service. Every request goes through an `mpsc` channel
//! and is answered on a `oneshot` channel, so requests are handled one at a time
//! in arrival order.

mod client;
mod messages;

pub use client::*;
pub use messages::*;

use tokio::sync::mpsc;
use tracing::{debug, info, instrument};
use crate::domain::{Order, OrderId, Quantity};
use crate::order_service::{OrderError, OrderService};

pub struct OrderActor {
    receiver: mpsc::Receiver<OrderRequest>,
    service: OrderService,
}

impl OrderActor {
    pub fn new(buffer_size: usize, service: OrderService) -> (Self, OrderClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, service };
        let client = OrderClient::new(sender);
        (actor, client)
    }

    /// Handles requests until a `Shutdown` arrives or every client is dropped.
    #[instrument(name = "order_actor", skip(self))]
    pub async fn run(mut self) {
        info!("OrderActor starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                OrderRequest::CreateOrder { product, quantity, respond_to } => {
                    self.handle_create_order(product, quantity, respond_to);
                }
                OrderRequest::UpdateOrder { order_id, new_quantity, respond_to } => {
                    let updated = self.service.update_order(order_id, new_quantity);
                    let _ = respond_to.send(Ok(updated));
                }
                OrderRequest::RemoveOrder { order_id, respond_to } => {
                    let removed = self.service.remove_order(order_id);
                    let _ = respond_to.send(Ok(removed));
                }
                OrderRequest::GetOrders { respond_to } => {
                    let _ = respond_to.send(Ok(self.service.get_orders()));
                }
                OrderRequest::GetOrder { order_id, respond_to } => {
                    self.handle_get_order(order_id, respond_to);
                }
                OrderRequest::Shutdown => {
                    info!("OrderActor shutting down");
                    break;
                }
            }
        }

        info!("OrderActor stopped");
    }

    fn handle_create_order(
        &mut self,
        product: String,
        quantity: Quantity,
        respond_to: ServiceResponse<Order, OrderError>,
    ) {
        let result = self.service.create_order(&product, quantity);
        let _ = respond_to.send(result);
    }

    #[instrument(fields(order_id = %order_id), skip(self, respond_to))]
    fn handle_get_order(&self, order_id: OrderId, respond_to: ServiceResponse<Option<Order>, OrderError>) {
        let order = self.service.get_order(order_id);
        if order.is_none() {
            debug!("Order not found");
        }
        let _ = respond_to.send(Ok(order));
    }
}
