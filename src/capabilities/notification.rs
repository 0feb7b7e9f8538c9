use std::sync::Mutex;
use tracing::info;
use crate::domain::Order;
use super::NotificationService;

/// Notifier that logs each confirmation and keeps an outbox of what it sent.
#[derive(Debug, Default)]
pub struct LogNotifier {
    outbox: Mutex<Vec<Order>>,
}

impl LogNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Confirmations sent so far, oldest first.
    pub fn sent(&self) -> Vec<Order> {
        self.outbox
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl NotificationService for LogNotifier {
    fn send_confirmation(&self, order: &Order) {
        info!(
            order_id = %order.id,
            product = %order.product,
            quantity = %order.quantity,
            "Order confirmation sent"
        );
        self.outbox
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(order.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outbox_records_confirmations() {
        let notifier = LogNotifier::new();
        let mut order = Order::new(1, "Phone", 2);
        order.is_paid = true;

        notifier.send_confirmation(&order);

        assert_eq!(notifier.sent(), vec![order]);
    }
}
