use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use crate::capabilities::{InventoryService, NotificationService, PaymentService};
use crate::domain::{Order, OrderId, Quantity};
use super::OrderError;

/// Owns the order ledger and coordinates inventory, payment and notification.
///
/// **Create workflow:**
/// 1. Validate input (no side effects)
/// 2. Check stock
/// 3. Reduce stock
/// 4. Attempt payment once
/// 5. Paid: store, then confirm. Unpaid: give the stock back and fail.
///
/// Ids come from a counter owned by the service, so an id is never handed out
/// twice even after removals. The service has no internal locking; share it
/// through [`crate::order_actor::OrderActor`] when there is more than one caller.
pub struct OrderService {
    inventory: Arc<dyn InventoryService>,
    payment: Arc<dyn PaymentService>,
    notification: Arc<dyn NotificationService>,
    orders: Vec<Order>,
    next_id: OrderId,
}

impl OrderService {
    pub fn new(
        inventory: Arc<dyn InventoryService>,
        payment: Arc<dyn PaymentService>,
        notification: Arc<dyn NotificationService>,
    ) -> Self {
        Self {
            inventory,
            payment,
            notification,
            orders: Vec::new(),
            next_id: 1,
        }
    }

    /// Places an order for `quantity` units of `product`.
    ///
    /// # Errors
    /// - [`OrderError::InvalidInput`] for an empty product or a non-positive quantity
    /// - [`OrderError::InsufficientStock`] when the inventory cannot cover the quantity
    /// - [`OrderError::PaymentFailed`] when the charge is declined; the reduced stock
    ///   has already been returned to the inventory
    #[instrument(skip(self))]
    pub fn create_order(&mut self, product: &str, quantity: Quantity) -> Result<Order, OrderError> {
        validate_input(product, quantity).inspect_err(|e| warn!(error = %e, "Order rejected"))?;

        if !self.inventory.check_stock(product, quantity) {
            warn!("Not enough stock");
            return Err(OrderError::InsufficientStock {
                product: product.to_string(),
                quantity,
            });
        }

        let mut order = Order::new(self.next_id, product, quantity);
        self.next_id += 1;

        self.process(&mut order);
        self.finalize(order)
    }

    fn process(&self, order: &mut Order) {
        self.inventory.reduce_stock(&order.product, order.quantity);
        debug!(order_id = %order.id, "Stock reduced, attempting payment");
        order.is_paid = self.payment.process_payment(order);
    }

    fn finalize(&mut self, order: Order) -> Result<Order, OrderError> {
        if !order.is_paid {
            // Compensate the reduction made in `process`.
            self.inventory.increase_stock(&order.product, order.quantity);
            warn!(order_id = %order.id, "Payment failed, stock returned");
            return Err(OrderError::PaymentFailed {
                product: order.product,
                quantity: order.quantity,
            });
        }

        self.orders.push(order.clone());
        self.notification.send_confirmation(&order);
        info!(order_id = %order.id, "Order created successfully");
        Ok(order)
    }

    /// Changes the quantity of an existing order.
    ///
    /// Returns `false` when the order does not exist or `new_quantity` is not
    /// positive. Stock is not adjusted.
    #[instrument(skip(self))]
    pub fn update_order(&mut self, order_id: OrderId, new_quantity: Quantity) -> bool {
        let Some(order) = self.orders.iter_mut().find(|o| o.id == order_id) else {
            debug!("Order not found");
            return false;
        };

        if new_quantity <= 0 {
            warn!("Rejected non-positive quantity");
            return false;
        }

        order.quantity = new_quantity;
        info!("Order updated");
        true
    }

    /// Removes an order and returns its current quantity to the inventory.
    ///
    /// Returns `false` without touching the inventory when the order does not exist.
    #[instrument(skip(self))]
    pub fn remove_order(&mut self, order_id: OrderId) -> bool {
        let Some(index) = self.orders.iter().position(|o| o.id == order_id) else {
            debug!("Order not found");
            return false;
        };

        let order = self.orders.remove(index);
        self.inventory.increase_stock(&order.product, order.quantity);
        info!(product = %order.product, quantity = %order.quantity, "Order removed");
        true
    }

    /// Snapshot of the ledger in insertion order.
    pub fn get_orders(&self) -> Vec<Order> {
        self.orders.clone()
    }

    pub fn get_order(&self, order_id: OrderId) -> Option<Order> {
        self.orders.iter().find(|o| o.id == order_id).cloned()
    }
}

fn validate_input(product: &str, quantity: Quantity) -> Result<(), OrderError> {
    if product.is_empty() {
        return Err(OrderError::InvalidInput("Product name required".to_string()));
    }
    if quantity <= 0 {
        return Err(OrderError::InvalidInput(format!(
            "Quantity must be positive, got {}",
            quantity
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_input() {
        assert!(validate_input("Book", 1).is_ok());
        assert!(matches!(validate_input("", 3), Err(OrderError::InvalidInput(_))));
        assert!(matches!(validate_input("Book", 0), Err(OrderError::InvalidInput(_))));
        assert!(matches!(validate_input("Book", -1), Err(OrderError::InvalidInput(_))));
    }
}
