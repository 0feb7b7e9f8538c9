//! Order placement with compensation on payment failure.

pub mod error;
mod service;

pub use error::*;
pub use service::*;
