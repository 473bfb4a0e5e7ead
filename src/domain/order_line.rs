use std::fmt;

use super::errors::DomainError;

/// A requested quantity of one sku for one order.
///
/// Order lines are values: two lines built from the same sku, quantity and
/// order id are equal and hash the same, so a batch can hold them in a set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderLine {
    sku: String,
    quantity: i32,
    orderid: i64,
}

impl OrderLine {
    pub fn new(sku: impl Into<String>, quantity: i32, orderid: i64) -> Result<Self, DomainError> {
        let sku = sku.into();
        if sku.is_empty() {
            return Err(DomainError::Validation("sku must not be empty".to_string()));
        }
        if quantity < 0 {
            return Err(DomainError::Validation(format!(
                "quantity must be >= 0, got {}",
                quantity
            )));
        }
        if orderid < 0 {
            return Err(DomainError::Validation(format!(
                "orderid must be >= 0, got {}",
                orderid
            )));
        }
        Ok(Self {
            sku,
            quantity,
            orderid,
        })
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn orderid(&self) -> i64 {
        self.orderid
    }
}

impl fmt::Display for OrderLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OrderLine(sku={}, quantity={}, orderid={})",
            self.sku, self.quantity, self.orderid
        )
    }
}
