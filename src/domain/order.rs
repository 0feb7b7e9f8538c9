/// Identifier assigned to an order by the order service.
pub type OrderId = u64;

/// Number of units requested by an order.
///
/// Signed so that non-positive input can reach validation and be rejected there.
pub type Quantity = i64;

/// Represents a single product purchase and its payment outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    pub product: String,
    pub quantity: Quantity,
    pub is_paid: bool,
}

impl Order {
    /// Creates an unpaid order.
    ///
    /// # Notes
    /// `is_paid` starts as `false` and is set once by the order service after the
    /// payment attempt.
    pub fn new(id: OrderId, product: impl Into<String>, quantity: Quantity) -> Self {
        Self {
            id,
            product: product.into(),
            quantity,
            is_paid: false,
        }
    }
}
