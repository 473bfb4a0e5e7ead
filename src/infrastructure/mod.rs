pub mod batch_repo;
pub mod memory_repo;
pub mod models;

pub use batch_repo::DieselBatchRepository;
pub use memory_repo::InMemoryBatchRepository;
