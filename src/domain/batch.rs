use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use chrono::NaiveDate;

use super::errors::DomainError;
use super::order_line::OrderLine;

/// A quantity of stock for one sku, identified by its reference.
///
/// `quantity` is what is still available. An order line is allocated to the
/// batch exactly when it is a member of `order_lines`; the two fields move
/// together on every allocate/deallocate.
#[derive(Debug, Clone)]
pub struct Batch {
    reference: String,
    sku: String,
    quantity: i32,
    eta: Option<NaiveDate>,
    order_lines: HashSet<OrderLine>,
}

impl Batch {
    pub fn new(
        reference: impl Into<String>,
        sku: impl Into<String>,
        quantity: i32,
        eta: Option<NaiveDate>,
    ) -> Result<Self, DomainError> {
        Self::from_parts(reference, sku, quantity, eta, HashSet::new())
    }

    /// Rebuild a batch from stored state, allocations included.
    pub fn from_parts(
        reference: impl Into<String>,
        sku: impl Into<String>,
        quantity: i32,
        eta: Option<NaiveDate>,
        order_lines: HashSet<OrderLine>,
    ) -> Result<Self, DomainError> {
        let reference = reference.into();
        let sku = sku.into();
        if reference.is_empty() {
            return Err(DomainError::Validation(
                "batch reference must not be empty".to_string(),
            ));
        }
        if sku.is_empty() {
            return Err(DomainError::Validation("sku must not be empty".to_string()));
        }
        if quantity < 0 {
            return Err(DomainError::Validation(format!(
                "batch quantity must be >= 0, got {}",
                quantity
            )));
        }
        Ok(Self {
            reference,
            sku,
            quantity,
            eta,
            order_lines,
        })
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    /// Quantity still available for allocation.
    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn eta(&self) -> Option<NaiveDate> {
        self.eta
    }

    pub fn order_lines(&self) -> &HashSet<OrderLine> {
        &self.order_lines
    }

    pub fn allocated_quantity(&self) -> i32 {
        self.order_lines.iter().map(OrderLine::quantity).sum()
    }

    pub fn is_allocated(&self, line: &OrderLine) -> bool {
        self.order_lines.contains(line)
    }

    pub fn can_allocate(&self, line: &OrderLine) -> bool {
        self.sku == line.sku() && self.quantity >= line.quantity()
    }

    /// Allocate `line` to this batch. Re-allocating a line the batch already
    /// holds is a no-op.
    pub fn allocate(&mut self, line: &OrderLine) -> Result<(), DomainError> {
        if self.is_allocated(line) {
            return Ok(());
        }
        if line.sku() != self.sku {
            return Err(DomainError::SkuMismatch {
                expected: self.sku.clone(),
                got: line.sku().to_string(),
            });
        }
        if line.quantity() > self.quantity {
            return Err(DomainError::InsufficientStock {
                reference: self.reference.clone(),
                requested: line.quantity(),
                available: self.quantity,
            });
        }
        self.quantity -= line.quantity();
        self.order_lines.insert(line.clone());
        Ok(())
    }

    pub fn deallocate(&mut self, line: &OrderLine) -> Result<(), DomainError> {
        if !self.order_lines.remove(line) {
            return Err(DomainError::NotAllocated {
                reference: self.reference.clone(),
                line: line.clone(),
            });
        }
        self.quantity += line.quantity();
        Ok(())
    }

    /// Allocation preference: batches in stock (no eta) come first, then
    /// earlier etas. Two in-stock batches compare equal.
    pub fn cmp_by_eta(&self, other: &Batch) -> Ordering {
        // `None < Some(_)` for `Option`, which is exactly "in stock first".
        self.eta.cmp(&other.eta)
    }
}

impl PartialEq for Batch {
    fn eq(&self, other: &Self) -> bool {
        self.reference == other.reference
    }
}

impl Eq for Batch {}

impl Hash for Batch {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.reference.hash(state);
    }
}
