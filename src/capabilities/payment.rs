use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, instrument, warn};
use crate::domain::{Order, Quantity};
use super::PaymentService;

/// Payment gateway that declines any order above a per-order quantity limit.
#[derive(Debug)]
pub struct LimitPaymentGateway {
    max_quantity: Quantity,
    approved: AtomicU64,
    declined: AtomicU64,
}

impl LimitPaymentGateway {
    pub fn new(max_quantity: Quantity) -> Self {
        Self {
            max_quantity,
            approved: AtomicU64::new(0),
            declined: AtomicU64::new(0),
        }
    }

    #[allow(dead_code)]
    pub fn approved(&self) -> u64 {
        self.approved.load(Ordering::SeqCst)
    }

    pub fn declined(&self) -> u64 {
        self.declined.load(Ordering::SeqCst)
    }
}

impl PaymentService for LimitPaymentGateway {
    #[instrument(fields(order_id = %order.id, quantity = %order.quantity), skip(self, order))]
    fn process_payment(&self, order: &Order) -> bool {
        if order.quantity > self.max_quantity {
            self.declined.fetch_add(1, Ordering::SeqCst);
            warn!(max_quantity = self.max_quantity, "Payment declined");
            return false;
        }

        self.approved.fetch_add(1, Ordering::SeqCst);
        debug!("Payment approved");
        true
    }
}
