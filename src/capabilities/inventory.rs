use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, instrument};
use crate::domain::Quantity;
use super::InventoryService;

/// Inventory that keeps stock levels in memory.
///
/// Unknown products have zero units available. Reductions saturate at zero.
#[derive(Debug, Default)]
pub struct InMemoryInventory {
    stock: Mutex<HashMap<String, Quantity>>,
}

impl InMemoryInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds (or overwrites) the stock level of `product`.
    pub fn with_stock(self, product: impl Into<String>, quantity: Quantity) -> Self {
        self.levels().insert(product.into(), quantity.max(0));
        self
    }

    /// Units of `product` currently on hand.
    pub fn available(&self, product: &str) -> Quantity {
        self.levels().get(product).copied().unwrap_or(0)
    }

    fn levels(&self) -> MutexGuard<'_, HashMap<String, Quantity>> {
        self.stock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl InventoryService for InMemoryInventory {
    #[instrument(skip(self))]
    fn check_stock(&self, product: &str, quantity: Quantity) -> bool {
        let available = self.available(product);
        debug!(available, "Checked stock");
        available >= quantity
    }

    #[instrument(skip(self))]
    fn reduce_stock(&self, product: &str, quantity: Quantity) {
        let mut levels = self.levels();
        let level = levels.entry(product.to_string()).or_insert(0);
        *level = (*level - quantity).max(0);
        debug!(remaining = *level, "Stock reduced");
    }

    #[instrument(skip(self))]
    fn increase_stock(&self, product: &str, quantity: Quantity) {
        let mut levels = self.levels();
        let level = levels.entry(product.to_string()).or_insert(0);
        *level += quantity;
        debug!(remaining = *level, "Stock increased");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_stock_against_level() {
        let inventory = InMemoryInventory::new().with_stock("Phone", 5);

        assert!(inventory.check_stock("Phone", 5));
        assert!(!inventory.check_stock("Phone", 6));
        assert!(!inventory.check_stock("Laptop", 1));
    }

    #[test]
    fn test_reduce_and_increase() {
        let inventory = InMemoryInventory::new().with_stock("Phone", 5);

        inventory.reduce_stock("Phone", 3);
        assert_eq!(inventory.available("Phone"), 2);

        inventory.reduce_stock("Phone", 10);
        assert_eq!(inventory.available("Phone"), 0);

        inventory.increase_stock("Phone", 4);
        assert_eq!(inventory.available("Phone"), 4);

        inventory.increase_stock("Laptop", 1);
        assert_eq!(inventory.available("Laptop"), 1);
    }
}
