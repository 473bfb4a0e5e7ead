use super::batch::Batch;
use super::errors::DomainError;

/// Persistence boundary for batches. Implementations are the single source of
/// truth for batch state; callers never cache what they return.
pub trait BatchRepository: Send + Sync + 'static {
    fn add(&self, batch: &Batch) -> Result<(), DomainError>;
    /// Fails with `DomainError::NotFound` when no batch has `reference`.
    fn get(&self, reference: &str) -> Result<Batch, DomainError>;
    /// All batches, ordered by reference.
    fn list(&self) -> Result<Vec<Batch>, DomainError>;
    /// Persist quantity and allocations of an existing batch.
    fn save(&self, batch: &Batch) -> Result<(), DomainError>;
}

impl<R: BatchRepository + ?Sized> BatchRepository for Box<R> {
    fn add(&self, batch: &Batch) -> Result<(), DomainError> {
        (**self).add(batch)
    }

    fn get(&self, reference: &str) -> Result<Batch, DomainError> {
        (**self).get(reference)
    }

    fn list(&self) -> Result<Vec<Batch>, DomainError> {
        (**self).list()
    }

    fn save(&self, batch: &Batch) -> Result<(), DomainError> {
        (**self).save(batch)
    }
}
