use thiserror::Error;

use super::order_line::OrderLine;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("sku should match: expected {expected}, got {got}")]
    SkuMismatch { expected: String, got: String },

    #[error("Order line quantity {requested} cannot be > than batch {reference} quantity {available}")]
    InsufficientStock {
        reference: String,
        requested: i32,
        available: i32,
    },

    #[error("Order line {line} is not allocated to batch {reference}")]
    NotAllocated { reference: String, line: OrderLine },

    #[error("Invalid sku {0}")]
    InvalidSku(String),

    #[error("Out of stock for sku {0}")]
    OutOfStock(String),

    #[error("Batch {0} not found")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
