use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::batch::Batch;
use crate::domain::errors::DomainError;
use crate::domain::ports::BatchRepository;

/// Process-local batch store, keyed by reference.
#[derive(Default)]
pub struct InMemoryBatchRepository {
    batches: Mutex<BTreeMap<String, Batch>>,
}

impl InMemoryBatchRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_batches(batches: impl IntoIterator<Item = Batch>) -> Self {
        let batches = batches
            .into_iter()
            .map(|b| (b.reference().to_string(), b))
            .collect();
        Self {
            batches: Mutex::new(batches),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<String, Batch>>, DomainError> {
        self.batches
            .lock()
            .map_err(|_| DomainError::Internal("batch store lock poisoned".to_string()))
    }
}

impl BatchRepository for InMemoryBatchRepository {
    fn add(&self, batch: &Batch) -> Result<(), DomainError> {
        let mut batches = self.lock()?;
        if batches.contains_key(batch.reference()) {
            return Err(DomainError::Internal(format!(
                "batch {} already exists",
                batch.reference()
            )));
        }
        batches.insert(batch.reference().to_string(), batch.clone());
        Ok(())
    }

    fn get(&self, reference: &str) -> Result<Batch, DomainError> {
        self.lock()?
            .get(reference)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(reference.to_string()))
    }

    fn list(&self) -> Result<Vec<Batch>, DomainError> {
        Ok(self.lock()?.values().cloned().collect())
    }

    fn save(&self, batch: &Batch) -> Result<(), DomainError> {
        let mut batches = self.lock()?;
        match batches.get_mut(batch.reference()) {
            Some(stored) => {
                *stored = batch.clone();
                Ok(())
            }
            None => Err(DomainError::NotFound(batch.reference().to_string())),
        }
    }
}
