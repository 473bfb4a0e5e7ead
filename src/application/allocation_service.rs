use crate::domain::allocator;
use crate::domain::batch::Batch;
use crate::domain::errors::DomainError;
use crate::domain::order_line::OrderLine;
use crate::domain::ports::BatchRepository;

/// The service the HTTP layer holds: any repository behind a box.
pub type DynAllocationService = AllocationService<Box<dyn BatchRepository>>;

pub struct AllocationService<R> {
    repo: R,
}

pub fn is_valid_sku(sku: &str, batches: &[Batch]) -> bool {
    batches.iter().any(|b| b.sku() == sku)
}

impl<R: BatchRepository> AllocationService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Allocate `line` to the best batch of its sku and persist that batch.
    ///
    /// Batches are re-read from the repository on every call.
    pub fn allocate(&self, line: &OrderLine) -> Result<String, DomainError> {
        let batches = self.repo.list()?;
        if !is_valid_sku(line.sku(), &batches) {
            log::warn!("rejecting order {}: unknown sku {}", line.orderid(), line.sku());
            return Err(DomainError::InvalidSku(line.sku().to_string()));
        }

        let mut candidates: Vec<Batch> = batches
            .into_iter()
            .filter(|b| b.sku() == line.sku())
            .collect();

        let batchref = allocator::allocate(line, &mut candidates).map_err(|e| {
            log::warn!("could not allocate order {}: {}", line.orderid(), e);
            e
        })?;

        let batch = candidates
            .iter()
            .find(|b| b.reference() == batchref)
            .ok_or_else(|| DomainError::Internal(format!("allocated batch {batchref} vanished")))?;
        self.repo.save(batch)?;

        log::info!(
            "allocated order {} ({} x {}) to batch {}",
            line.orderid(),
            line.quantity(),
            line.sku(),
            batchref
        );
        Ok(batchref)
    }

    pub fn get_batch(&self, reference: &str) -> Result<Batch, DomainError> {
        self.repo.get(reference)
    }
}
