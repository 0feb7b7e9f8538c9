use crate::domain::Quantity;

/// Settings for [`super::OrderSystem`].
#[derive(Debug, Clone)]
pub struct SystemConfig {
    /// Capacity of the order actor's request channel.
    pub buffer_size: usize,
    /// Stock seeded into the in-memory inventory.
    pub initial_stock: Vec<(String, Quantity)>,
    /// Largest quantity the payment gateway will charge for in one order.
    pub max_payment_quantity: Quantity,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            initial_stock: Vec::new(),
            max_payment_quantity: 10,
            log_filter: "info".to_string(),
        }
    }
}

impl SystemConfig {
    pub fn with_stock(mut self, product: impl Into<String>, quantity: Quantity) -> Self {
        self.initial_stock.push((product.into(), quantity));
        self
    }

    pub fn with_max_payment_quantity(mut self, max_quantity: Quantity) -> Self {
        self.max_payment_quantity = max_quantity;
        self
    }
}
