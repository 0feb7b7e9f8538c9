use thiserror::Error;
use crate::domain::Quantity;

/// Errors that can occur while placing an order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Insufficient stock: {quantity} x {product}")]
    InsufficientStock { product: String, quantity: Quantity },
    #[error("Payment failed: {quantity} x {product}")]
    PaymentFailed { product: String, quantity: Quantity },
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
