//! External collaborators the order service depends on.
//!
//! The order service only ever sees these traits. In-memory implementations live
//! next to them so the system can run end to end without real backends.

mod inventory;
mod notification;
mod payment;

pub use inventory::*;
pub use notification::*;
pub use payment::*;

use crate::domain::{Order, Quantity};

/// Stock levels for products.
///
/// `reduce_stock` and `increase_stock` have no failure mode visible to callers.
pub trait InventoryService: Send + Sync {
    /// Returns `true` when `quantity` units of `product` are available.
    fn check_stock(&self, product: &str, quantity: Quantity) -> bool;
    fn reduce_stock(&self, product: &str, quantity: Quantity);
    fn increase_stock(&self, product: &str, quantity: Quantity);
}

/// Charges for an order.
pub trait PaymentService: Send + Sync {
    /// Attempts payment once. `true` means the order was charged.
    fn process_payment(&self, order: &Order) -> bool;
}

/// Delivers order confirmations. Fire-and-forget.
pub trait NotificationService: Send + Sync {
    fn send_confirmation(&self, order: &Order);
}
