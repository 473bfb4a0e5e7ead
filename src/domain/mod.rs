pub mod allocator;
pub mod batch;
pub mod errors;
pub mod order_line;
pub mod ports;

pub use batch::Batch;
pub use errors::DomainError;
pub use order_line::OrderLine;
pub use ports::BatchRepository;
