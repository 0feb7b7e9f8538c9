//! # Mock Framework
//!
//! Recording fakes for the order service's capabilities.
//!
//! Use [`mock_service`] to get an [`OrderService`] wired to fakes and a [`Mocks`]
//! handle. Script answers with [`MockInventory::set_in_stock`] and
//! [`MockPayment::set_approve`], then assert on [`Mocks::calls`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use crate::capabilities::{InventoryService, NotificationService, PaymentService};
use crate::domain::{Order, Quantity};
use crate::order_service::OrderService;

/// One capability call, in the order it happened.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CheckStock(String, Quantity),
    ReduceStock(String, Quantity),
    IncreaseStock(String, Quantity),
    ProcessPayment(Order),
    SendConfirmation(Order),
}

/// Call log shared by all fakes so cross-capability ordering can be asserted.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<Call>>>);

impl CallLog {
    fn record(&self, call: Call) {
        self.0.lock().unwrap().push(call);
    }

    pub fn all(&self) -> Vec<Call> {
        self.0.lock().unwrap().clone()
    }
}

pub struct MockInventory {
    in_stock: AtomicBool,
    log: CallLog,
}

impl MockInventory {
    pub fn set_in_stock(&self, in_stock: bool) {
        self.in_stock.store(in_stock, Ordering::SeqCst);
    }
}

impl InventoryService for MockInventory {
    fn check_stock(&self, product: &str, quantity: Quantity) -> bool {
        self.log.record(Call::CheckStock(product.to_string(), quantity));
        self.in_stock.load(Ordering::SeqCst)
    }

    fn reduce_stock(&self, product: &str, quantity: Quantity) {
        self.log.record(Call::ReduceStock(product.to_string(), quantity));
    }

    fn increase_stock(&self, product: &str, quantity: Quantity) {
        self.log.record(Call::IncreaseStock(product.to_string(), quantity));
    }
}

pub struct MockPayment {
    approve: AtomicBool,
    log: CallLog,
}

impl MockPayment {
    pub fn set_approve(&self, approve: bool) {
        self.approve.store(approve, Ordering::SeqCst);
    }
}

impl PaymentService for MockPayment {
    fn process_payment(&self, order: &Order) -> bool {
        self.log.record(Call::ProcessPayment(order.clone()));
        self.approve.load(Ordering::SeqCst)
    }
}

pub struct MockNotifier {
    log: CallLog,
}

impl NotificationService for MockNotifier {
    fn send_confirmation(&self, order: &Order) {
        self.log.record(Call::SendConfirmation(order.clone()));
    }
}

/// Handles to the fakes behind a service built by [`mock_service`].
pub struct Mocks {
    pub inventory: Arc<MockInventory>,
    pub payment: Arc<MockPayment>,
    #[allow(dead_code)]
    pub notifier: Arc<MockNotifier>,
    log: CallLog,
}

impl Mocks {
    pub fn calls(&self) -> Vec<Call> {
        self.log.all()
    }

    /// Number of recorded calls matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.log.all().iter().filter(|call| predicate(call)).count()
    }
}

/// Creates an order service over fakes. Stock is available and payments are
/// approved until scripted otherwise.
pub fn mock_service() -> (OrderService, Mocks) {
    let log = CallLog::default();
    let inventory = Arc::new(MockInventory { in_stock: AtomicBool::new(true), log: log.clone() });
    let payment = Arc::new(MockPayment { approve: AtomicBool::new(true), log: log.clone() });
    let notifier = Arc::new(MockNotifier { log: log.clone() });

    let service = OrderService::new(inventory.clone(), payment.clone(), notifier.clone());
    let mocks = Mocks { inventory, payment, notifier, log };
    (service, mocks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fakes_share_one_log() {
        let (mut service, mocks) = mock_service();

        service.create_order("Phone", 1).unwrap();

        let calls = mocks.calls();
        assert_eq!(calls.len(), 4);
        assert_eq!(calls[0], Call::CheckStock("Phone".to_string(), 1));
        assert!(matches!(calls[3], Call::SendConfirmation(_)));
    }
}
