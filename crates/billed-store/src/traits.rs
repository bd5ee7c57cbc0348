use async_trait::async_trait;
use billed_core::bill::{Bill, CreateBill, RawBill};
use thiserror::Error;

/// What the persistence boundary can report back.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("server error: {0}")]
    Server(String),

    #[error("transport error: {0}")]
    Transport(String),
}

/// Abstraction over the remote bill store.
///
/// Controllers program against this trait.
/// `HttpStore` talks to the billing API.
/// `MemoryStore` is the in-memory fake for tests and offline runs.
#[async_trait]
pub trait BillStore: Send + Sync {
    /// Fetch every stored bill, raw and unshaped.
    async fn list(&self) -> Result<Vec<RawBill>, StoreError>;

    /// Persist a new bill. The store assigns the identifier and may
    /// resolve the attachment URL.
    async fn create(&self, input: &CreateBill) -> Result<Bill, StoreError>;

    /// Replace a stored bill, matched by id.
    async fn update(&self, bill: &Bill) -> Result<Bill, StoreError>;
}
